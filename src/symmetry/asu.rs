/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Membership tests for the reciprocal-space asymmetric unit.
//!
//! The conventions are those of CCP4 reflection files: every space group
//! number selects one of ten closed-form predicates, according to its
//! Laue class.  These must be reproduced exactly for files written by
//! this library to agree with the rest of that ecosystem.

use crate::errors::ConfigurationError;
use crate::{Hkl, SpaceGroup, apply_to_hkl};

/// The ASU case of each space group, indexed by `number - 1`.
pub static CCP4_HKL_ASU: [u8; 230] = [
    0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 6, 7, 6, 7, 6, 7, 7, 7,
    6, 7, 6, 7, 7, 6, 6, 7, 7, 7, 7, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 9, 9,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
];

/// One of the ten ASU predicates, named after the Laue class it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsuCase {
    /// `-1`
    Triclinic,
    /// `2/m`
    Monoclinic,
    /// `mmm`
    Orthorhombic,
    /// `4/m` and `6/m`
    Tetragonal,
    /// `4/mmm` and `6/mmm`
    TetragonalHigh,
    /// `-3`
    Trigonal,
    /// `-31m`
    Trigonal31M,
    /// `-3m1`
    Trigonal3M1,
    /// `m-3`
    Cubic,
    /// `m-3m`
    CubicHigh,
}

impl AsuCase {
    pub fn from_index(index: u8) -> Option<AsuCase>
    {
        Some(match index {
            0 => AsuCase::Triclinic,
            1 => AsuCase::Monoclinic,
            2 => AsuCase::Orthorhombic,
            3 => AsuCase::Tetragonal,
            4 => AsuCase::TetragonalHigh,
            5 => AsuCase::Trigonal,
            6 => AsuCase::Trigonal31M,
            7 => AsuCase::Trigonal3M1,
            8 => AsuCase::Cubic,
            9 => AsuCase::CubicHigh,
            _ => return None,
        })
    }

    pub fn index(self) -> u8
    { self as u8 }

    /// Whether an index (already in the reference basis) is in the ASU.
    #[inline]
    pub fn contains(self, hkl: &Hkl) -> bool
    {
        let [h, k, l] = *hkl;
        match self {
            AsuCase::Triclinic => l > 0 || (l == 0 && (h > 0 || (h == 0 && k >= 0))),
            AsuCase::Monoclinic => k >= 0 && (l > 0 || (l == 0 && h >= 0)),
            AsuCase::Orthorhombic => h >= 0 && k >= 0 && l >= 0,
            AsuCase::Tetragonal => l >= 0 && ((h >= 0 && k > 0) || (h == 0 && k == 0)),
            AsuCase::TetragonalHigh => h >= k && k >= 0 && l >= 0,
            AsuCase::Trigonal => (h >= 0 && k > 0) || (h == 0 && k == 0 && l >= 0),
            AsuCase::Trigonal31M => h >= k && k >= 0 && (k > 0 || l >= 0),
            AsuCase::Trigonal3M1 => h >= k && k >= 0 && (h > k || l >= 0),
            AsuCase::Cubic => h >= 0 && ((l >= h && k > h) || (l == h && k == h)),
            AsuCase::CubicHigh => k >= l && l >= h && h >= 0,
        }
    }

    /// `contains` over a batch.
    pub fn contains_all(self, hkls: &[Hkl]) -> Vec<bool>
    { hkls.iter().map(|hkl| self.contains(hkl)).collect() }
}

/// Select the ASU predicate for a space group number.
///
/// # Errors
///
/// `ConfigurationError` if `number` is not in `1..=230`.
pub fn asu_case(number: u16) -> Result<AsuCase, ConfigurationError>
{
    if !(1..=230).contains(&number) {
        return Err(ConfigurationError::new(format!("space group number {} is not in 1..=230", number)));
    }
    let index = CCP4_HKL_ASU[usize::from(number) - 1];
    AsuCase::from_index(index)
        .ok_or_else(|| ConfigurationError::new(format!("no ASU predicate for case {}", index)))
}

/// Check whether Miller indices are already in the asymmetric unit.
///
/// This does not search over symmetry operations; it only applies the
/// change of basis and evaluates the predicate.
pub fn in_asu(hkls: &[Hkl], spacegroup: &SpaceGroup) -> Result<Vec<bool>, ConfigurationError>
{
    let case = asu_case(spacegroup.number())?;
    Ok(case.contains_all(&apply_to_hkl(hkls, spacegroup.basisop())))
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::catalog::find_spacegroup_by_number;

    #[test]
    fn table_ranges() {
        assert_eq!(asu_case(1).unwrap(), AsuCase::Triclinic);
        assert_eq!(asu_case(4).unwrap(), AsuCase::Monoclinic);
        assert_eq!(asu_case(19).unwrap(), AsuCase::Orthorhombic);
        assert_eq!(asu_case(75).unwrap(), AsuCase::Tetragonal);
        assert_eq!(asu_case(96).unwrap(), AsuCase::TetragonalHigh);
        assert_eq!(asu_case(146).unwrap(), AsuCase::Trigonal);
        assert_eq!(asu_case(149).unwrap(), AsuCase::Trigonal31M);
        assert_eq!(asu_case(150).unwrap(), AsuCase::Trigonal3M1);
        assert_eq!(asu_case(168).unwrap(), AsuCase::Tetragonal);
        assert_eq!(asu_case(191).unwrap(), AsuCase::TetragonalHigh);
        assert_eq!(asu_case(200).unwrap(), AsuCase::Cubic);
        assert_eq!(asu_case(230).unwrap(), AsuCase::CubicHigh);

        assert!(asu_case(0).is_err());
        assert!(asu_case(231).is_err());
    }

    #[test]
    fn index_roundtrip() {
        for i in 0..10 {
            assert_eq!(AsuCase::from_index(i).unwrap().index(), i);
        }
        assert_eq!(AsuCase::from_index(10), None);
        assert!(CCP4_HKL_ASU.iter().all(|&i| AsuCase::from_index(i).is_some()));
    }

    #[test]
    fn triclinic_halves_reciprocal_space() {
        // exactly one of H and -H is in the ASU, except for the origin
        for h in -3..=3 {
            for k in -3..=3 {
                for l in -3..=3 {
                    let a = AsuCase::Triclinic.contains(&[h, k, l]);
                    let b = AsuCase::Triclinic.contains(&[-h, -k, -l]);
                    match (h, k, l) {
                        (0, 0, 0) => assert!(a && b),
                        _ => assert!(a != b, "{:?}", (h, k, l)),
                    }
                }
            }
        }
    }

    #[test]
    fn membership() {
        let p1 = find_spacegroup_by_number(1).unwrap();
        assert_eq!(in_asu(&[[0, 0, 1], [0, 0, -1], [1, -5, 0], [-1, 5, 0]], &p1).unwrap(), vec![true, false, true, false]);

        let p422 = find_spacegroup_by_number(89).unwrap();
        assert_eq!(in_asu(&[[3, 2, 1], [2, 3, 1], [3, 2, -1], [4, 0, 0]], &p422).unwrap(), vec![true, false, false, true]);

        let cubic = find_spacegroup_by_number(207).unwrap();
        assert_eq!(in_asu(&[[1, 3, 2], [1, 2, 3], [0, 5, 0], [0, 0, 5], [2, 2, 2]], &cubic).unwrap(), vec![true, false, true, false, true]);
    }
}
