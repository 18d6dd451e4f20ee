/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::asu::asu_case;
use crate::errors::FatalReductionError;
use crate::util::neg_hkl;
use crate::{Hkl, SpaceGroup, FailResult, apply_to_hkl, phase_shift};

/// Reflections mapped into the asymmetric unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsuMapping {
    /// Equivalent index inside the ASU for each input reflection.
    pub hkls: Vec<Hkl>,
    /// 1-based identifier of the image that was chosen.
    ///
    /// For the `i`th general position (0-based), `2i + 1` is the direct
    /// image and `2i + 2` is its Friedel mate.  Unmerged MTZ files
    /// store this in their `M/ISYM` column.
    pub isym: Vec<u32>,
}

/// How to carry phases along with an `AsuMapping`.
///
/// `coeff[i] * (phase[i] + shift[i])` is the phase of `hkls[i]` in the ASU.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseShifts {
    /// `1.0` for direct images, `-1.0` for Friedel mates.
    pub coeff: Vec<f64>,
    /// Phase shift in degrees.
    pub shift: Vec<f64>,
}

impl PhaseShifts {
    /// Transform phases (in degrees) of the original reflections.
    ///
    /// The output is not wrapped into any particular range.
    pub fn apply(&self, phases: &[f64]) -> Vec<f64>
    {
        assert_eq!(phases.len(), self.coeff.len());
        izip!(phases, &self.coeff, &self.shift)
            .map(|(phase, coeff, shift)| coeff * (phase + shift))
            .collect()
    }
}

/// Map Miller indices into the reciprocal-space asymmetric unit.
///
/// The output is aligned with the input; duplicates are mapped independently.
///
/// # Errors
///
/// * `ConfigurationError` if the space group has no ASU definition.
/// * `FatalReductionError` if some reflection has no image in the ASU,
///   which means the operations do not belong to the group's number.
pub fn hkl_to_asu(hkls: &[Hkl], spacegroup: &SpaceGroup) -> FailResult<AsuMapping>
{ reduce(hkls, spacegroup).map(|(mapping, _)| mapping) }

/// `hkl_to_asu`, also returning the phase shifts for each reflection.
///
/// ```
/// # extern crate rspace_symmetry;
/// # use rspace_symmetry::{catalog, hkl_to_asu_with_phase_shifts};
/// # fn main() -> rspace_symmetry::FailResult<()> {
/// let p1 = catalog::find_spacegroup_by_number(1)?;
/// let (mapping, phases) = hkl_to_asu_with_phase_shifts(&[[0, 0, -1]], &p1)?;
/// assert_eq!(mapping.hkls, vec![[0, 0, 1]]);
/// assert_eq!(mapping.isym, vec![2]);
/// assert_eq!(phases.coeff, vec![-1.0]);
/// assert_eq!(phases.shift, vec![0.0]);
/// # Ok(())
/// # }
/// ```
pub fn hkl_to_asu_with_phase_shifts(hkls: &[Hkl], spacegroup: &SpaceGroup) -> FailResult<(AsuMapping, PhaseShifts)>
{
    let (mapping, chosen) = reduce(hkls, spacegroup)?;
    let ops = spacegroup.operations().sym_ops();

    // a Friedel mate shares the shift of its direct image, with the opposite sign of phase
    let per_op = ops.iter().map(|op| phase_shift(hkls, op)).collect::<Vec<_>>();
    let coeff = chosen.iter()
        .map(|&col| match col % 2 { 0 => 1.0, _ => -1.0 })
        .collect();
    let shift = chosen.iter().enumerate()
        .map(|(row, &col)| per_op[col / 2][row].to_degrees())
        .collect();
    Ok((mapping, PhaseShifts { coeff, shift }))
}

fn reduce(
    hkls: &[Hkl],
    spacegroup: &SpaceGroup,
) -> FailResult<(AsuMapping, Vec<usize>)>
{
    let case = asu_case(spacegroup.number())?;
    let ops = spacegroup.operations().sym_ops();
    let basisop = spacegroup.basisop();

    let nrows = hkls.len();
    let ncols = 2 * ops.len();
    trace!("reducing {} reflections in {} ({:?}, {} candidate images)", nrows, spacegroup, case, ncols);

    // Column `2i` holds the image under operation `i`, and column `2i + 1` its Friedel mate.
    let mut candidates: Vec<Vec<Hkl>> = Vec::with_capacity(ncols);
    for op in ops {
        let direct = apply_to_hkl(hkls, op);
        let friedel = direct.iter().map(neg_hkl).collect();
        candidates.push(direct);
        candidates.push(friedel);
    }

    // nrows x ncols, row-major
    let mut in_asu = vec![false; nrows * ncols];
    for (col, images) in candidates.iter().enumerate() {
        let flags = case.contains_all(&apply_to_hkl(images, basisop));
        for (row, flag) in flags.into_iter().enumerate() {
            in_asu[row * ncols + col] = flag;
        }
    }

    // Centric reflections reach the ASU through more than one image.
    // Keep only the first success in column order.
    let mut out_hkls = Vec::with_capacity(nrows);
    let mut isym = Vec::with_capacity(nrows);
    let mut chosen = Vec::with_capacity(nrows);
    for (row, flags) in in_asu.chunks_mut(ncols).enumerate() {
        let mut running = 0;
        for flag in flags.iter_mut().filter(|f| **f) {
            running += 1;
            if running > 1 {
                *flag = false;
            }
        }

        let col = match flags.iter().position(|&f| f) {
            Some(col) => col,
            None => throw!(FatalReductionError {
                row,
                hkl: hkls[row],
                spacegroup: spacegroup.to_string(),
            }),
        };
        out_hkls.push(candidates[col][row]);
        isym.push(col as u32 + 1);
        chosen.push(col);
    }

    Ok((AsuMapping { hkls: out_hkls, isym }, chosen))
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::catalog::find_spacegroup_by_number;
    use crate::{GroupOps, SymOp, in_asu};

    #[test]
    fn p1_friedel_mate() {
        let p1 = find_spacegroup_by_number(1).unwrap();
        let (mapping, shifts) = hkl_to_asu_with_phase_shifts(&[[0, 0, -1], [1, 2, 3]], &p1).unwrap();
        assert_eq!(mapping.hkls, vec![[0, 0, 1], [1, 2, 3]]);
        assert_eq!(mapping.isym, vec![2, 1]);
        assert_eq!(shifts.coeff, vec![-1.0, 1.0]);
        assert_eq!(shifts.shift, vec![0.0, 0.0]);
    }

    #[test]
    fn screw_axis_shift() {
        let p21 = find_spacegroup_by_number(4).unwrap();
        let (mapping, shifts) = hkl_to_asu_with_phase_shifts(&[[1, 1, 1], [1, -1, 1], [0, 1, 0]], &p21).unwrap();
        assert_eq!(mapping.hkls, vec![[1, 1, 1], [1, 1, 1], [0, 1, 0]]);
        assert_eq!(mapping.isym, vec![1, 4, 1]);
        assert_eq!(shifts.coeff, vec![1.0, -1.0, 1.0]);
        assert_close!(abs=1e-10, shifts.shift.clone(), vec![0.0, 180.0, 0.0]);

        assert_close!(abs=1e-10, shifts.apply(&[10.0, 10.0, 10.0]), vec![10.0, -190.0, 10.0]);
    }

    #[test]
    fn output_is_aligned_with_input() {
        let p222 = find_spacegroup_by_number(16).unwrap();
        let hkls = vec![[-1, 2, -3], [1, 2, 3], [-1, 2, -3], [0, 0, 0], [4, -5, 6]];
        let mapping = hkl_to_asu(&hkls, &p222).unwrap();
        assert_eq!(mapping.hkls, vec![[1, 2, 3], [1, 2, 3], [1, 2, 3], [0, 0, 0], [4, 5, 6]]);
        assert_eq!(mapping.isym[0], mapping.isym[2]);
        assert!(in_asu(&mapping.hkls, &p222).unwrap().into_iter().all(|x| x));
    }

    #[test]
    fn empty_input() {
        let sg = find_spacegroup_by_number(96).unwrap();
        let (mapping, shifts) = hkl_to_asu_with_phase_shifts(&[], &sg).unwrap();
        assert!(mapping.hkls.is_empty());
        assert!(mapping.isym.is_empty());
        assert!(shifts.coeff.is_empty());
    }

    #[test]
    fn centric_picks_first_image() {
        // (h, 0, l) is centric in P 1 2 1: the identity's Friedel mate and the
        // two-fold both map (-1, 0, -2) onto (1, 0, 2).  Column order decides.
        let p2 = find_spacegroup_by_number(3).unwrap();
        let mapping = hkl_to_asu(&[[-1, 0, -2]], &p2).unwrap();
        assert_eq!(mapping.hkls, vec![[1, 0, 2]]);
        assert_eq!(mapping.isym, vec![2]);
    }

    #[test]
    fn nonstandard_setting_goes_through_the_basis_operation() {
        // P 1 1 21: the screw axis is along c, while the ASU for group 4 is
        // written for unique axis b.
        let ops = GroupOps::from_triplets(&["-x,-y,z+1/2"]).unwrap();
        let sg = SpaceGroup::new(4, "P 1 1 21", ops, SymOp::from_triplet("z,x,y").unwrap()).unwrap();

        let mut hkls = vec![];
        for h in -3..=3 {
            for k in -3..=3 {
                for l in -3..=3 {
                    hkls.push([h, k, l]);
                }
            }
        }
        let mapping = hkl_to_asu(&hkls, &sg).unwrap();
        assert!(in_asu(&mapping.hkls, &sg).unwrap().into_iter().all(|x| x));

        let again = hkl_to_asu(&mapping.hkls, &sg).unwrap();
        assert_eq!(again.hkls, mapping.hkls);

        let mates = hkls.iter().map(|&[h, k, l]| [-h, -k, -l]).collect::<Vec<_>>();
        assert_eq!(hkl_to_asu(&mates, &sg).unwrap().hkls, mapping.hkls);
    }

    #[test]
    fn inconsistent_operations_are_fatal() {
        // claims to be P 4 2 2 but only has the identity
        let ops = GroupOps::from_generators(&[]).unwrap();
        let bogus = SpaceGroup::new(89, "P 4 2 2", ops, SymOp::eye()).unwrap();
        let err = hkl_to_asu(&[[3, 2, 1], [1, 2, 3]], &bogus).unwrap_err();
        let err = err.downcast_ref::<FatalReductionError>().unwrap();
        assert_eq!(err.row, 1);
        assert_eq!(err.hkl, [1, 2, 3]);
    }
}
