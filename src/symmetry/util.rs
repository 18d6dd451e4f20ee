/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::InvalidIndexError;

// these f64 -> i32 conversions are written on a silly little type
// simply to avoid having a function with a signature like 'fn f(x: f64, tol: f64)'
// where the arguments could be swapped
pub(crate) struct Tol(pub(crate) f64);

impl Tol {
    pub(crate) fn unfloat(&self, x: f64) -> Option<i32>
    {
        let r = x.round();
        match (r - x).abs() <= self.0 && r.abs() <= f64::from(::std::i32::MAX) {
            true => Some(r as i32),
            false => None,
        }
    }

    pub(crate) fn unfloat_hkl(&self, row: usize, v: &[f64; 3]) -> Result<[i32; 3], InvalidIndexError>
    {
        let mut out = [0; 3];
        for (dest, &value) in out.iter_mut().zip(v) {
            *dest = self.unfloat(value).ok_or(InvalidIndexError { row, value })?;
        }
        Ok(out)
    }
}

pub(crate) fn neg_hkl(hkl: &[i32; 3]) -> [i32; 3]
{ [-hkl[0], -hkl[1], -hkl[2]] }

pub(crate) fn dot(a: &[i32; 3], b: &[i32; 3]) -> i32
{ a[0] * b[0] + a[1] * b[1] + a[2] * b[2] }
