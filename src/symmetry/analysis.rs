/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::util::{neg_hkl, dot};
use crate::{Hkl, SpaceGroup, SymmetrySource, FailResult, DEN};
use crate::{apply_to_hkl, phase_shift, hkl_to_asu};

use ::num_integer::Integer;
use ::std::borrow::Cow;
use ::std::collections::HashMap;
use ::std::f64::consts::PI;

/// Absolute tolerance (radians) for deciding that a phase shift is a multiple of `2π`.
pub const ABSENCE_PHASE_TOL: f64 = 1e-8;

/// Determine which reflections are centric.
///
/// A reflection is centric if some operation maps it onto its own Friedel mate.
pub fn is_centric<S>(hkls: &[Hkl], symmetry: &S) -> Vec<bool>
where S: SymmetrySource + ?Sized,
{
    // centricity is a property of the index alone, so only the unique rows are examined
    let (unique, inverse) = unique_rows(hkls);

    let mut centric = vec![false; unique.len()];
    for op in symmetry.group_ops().sym_ops() {
        let images = apply_to_hkl(&unique, op);
        for (flag, image, hkl) in izip!(&mut centric, &images, &unique) {
            *flag |= *image == neg_hkl(hkl);
        }
    }
    inverse.into_iter().map(|i| centric[i]).collect()
}

/// Compute the multiplicity (epsilon factor) of each reflection.
///
/// This is the number of operations that map the reflection onto itself,
/// normalized by the number of lattice points per cell and by 2 in
/// centrosymmetric groups (where operations mapping it onto `-H` also count).
///
/// When a full space group is supplied, reflections are first mapped into
/// the ASU.  The result does not depend on this, since all members of an
/// orbit share their multiplicity.
pub fn compute_structurefactor_multiplicity<S>(hkls: &[Hkl], symmetry: &S) -> FailResult<Vec<f64>>
where S: SymmetrySource + ?Sized,
{
    let ops = symmetry.group_ops();
    let hkls: Cow<'_, [Hkl]> = match symmetry.spacegroup() {
        Some(sg) => Cow::Owned(hkl_to_asu(hkls, sg)?.hkls),
        None => Cow::Borrowed(hkls),
    };

    let centrosymmetric = ops.is_centrosymmetric();
    let centering = ops.find_centering()?;
    let norm = f64::from(centering.factor() * match centrosymmetric { true => 2, false => 1 });
    trace!("multiplicity normalization: centering {}, centrosymmetric {} => {}", centering, centrosymmetric, norm);

    let mut counts = vec![0u32; hkls.len()];
    for op in ops.iter() {
        let images = apply_to_hkl(&hkls, &op);
        for (count, image, hkl) in izip!(&mut counts, &images, hkls.iter()) {
            if image == hkl || (centrosymmetric && *image == neg_hkl(hkl)) {
                *count += 1;
            }
        }
    }
    Ok(counts.into_iter().map(|c| f64::from(c) / norm).collect())
}

/// Determine which reflections are systematically absent.
///
/// A reflection is absent if an operation maps it onto itself with a
/// phase shift that is not a multiple of `2π`, or if it is not an integer
/// combination of the centering translations' reciprocal lattice.
pub fn hkl_is_absent(hkls: &[Hkl], spacegroup: &SpaceGroup) -> FailResult<Vec<bool>>
{
    let hkls = hkl_to_asu(hkls, spacegroup)?.hkls;
    let ops = spacegroup.operations();

    let mut absent = vec![false; hkls.len()];
    for op in ops.sym_ops() {
        let images = apply_to_hkl(&hkls, op);
        let shifts = phase_shift(&hkls, op);
        for (flag, image, hkl, &shift) in izip!(&mut absent, &images, &hkls, &shifts) {
            *flag |= image == hkl && !is_multiple_of_tau(shift);
        }
    }

    for cen in ops.cen_ops() {
        for (flag, hkl) in absent.iter_mut().zip(&hkls) {
            *flag |= dot(hkl, cen).mod_floor(&DEN) != 0;
        }
    }

    let count = absent.iter().filter(|&&x| x).count();
    if count > 0 {
        debug!("{} of {} reflections are systematically absent in {}", count, absent.len(), spacegroup);
    }
    Ok(absent)
}

fn is_multiple_of_tau(radians: f64) -> bool
{
    let r = radians.rem_euclid(2.0 * PI);
    r <= ABSENCE_PHASE_TOL || 2.0 * PI - r <= ABSENCE_PHASE_TOL
}

/// Deduplicate rows, also returning the index of each input row in the output.
fn unique_rows(hkls: &[Hkl]) -> (Vec<Hkl>, Vec<usize>)
{
    let mut unique = vec![];
    let mut positions = HashMap::new();
    let inverse = hkls.iter().map(|hkl| {
        *positions.entry(*hkl).or_insert_with(|| {
            unique.push(*hkl);
            unique.len() - 1
        })
    }).collect();
    (unique, inverse)
}
