/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::InvalidIndexError;
use crate::util::Tol;
use crate::{Hkl, SymOp};

/// Apply an operation to a batch of Miller indices (`H' = H R`).
///
/// The output is aligned with the input.
pub fn apply_to_hkl(hkls: &[Hkl], op: &SymOp) -> Vec<Hkl>
{ hkls.iter().map(|hkl| op.apply_to_hkl(hkl)).collect() }

/// Phase shifts in radians (`-2π H·t`) for a batch of Miller indices.
///
/// The values are not reduced modulo `2π`.
pub fn phase_shift(hkls: &[Hkl], op: &SymOp) -> Vec<f64>
{ hkls.iter().map(|hkl| op.phase_shift(hkl)).collect() }

/// Convert floating point triples into Miller indices.
///
/// # Errors
///
/// Fails with `InvalidIndexError` on the first value that is not within
/// `1e-4` of an integer.
pub fn hkls_from_floats(values: &[[f64; 3]]) -> Result<Vec<Hkl>, InvalidIndexError>
{
    values.iter().enumerate()
        .map(|(row, v)| Tol(1e-4).unfloat_hkl(row, v))
        .collect()
}
