/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Semantic tags for reflection table columns.

use std::fmt;

/// What the numbers in a column mean.
///
/// The single-letter codes are the MTZ column types used throughout the
/// CCP4 ecosystem.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Miller index component (`H`).
    HklIndex,
    /// Intensity (`J`).
    Intensity,
    /// Intensity of one member of a Friedel pair (`K`).
    FriedelIntensity,
    /// Structure factor amplitude (`F`).
    SFAmplitude,
    /// Structure factor amplitude of one member of a Friedel pair (`G`).
    FriedelSFAmplitude,
    /// Normalized structure factor amplitude (`E`).
    NormalizedSFAmplitude,
    /// Anomalous difference (`D`).
    AnomalousDifference,
    /// Standard deviation (`Q`).
    Stddev,
    /// Standard deviation of a Friedel structure factor amplitude (`L`).
    StddevFriedelSF,
    /// Standard deviation of a Friedel intensity (`M`).
    StddevFriedelI,
    /// Phase angle in degrees (`P`).
    Phase,
    /// Weight (`W`).
    Weight,
    /// Hendrickson-Lattman coefficient (`A`).
    HendricksonLattman,
    /// Batch number (`B`).
    Batch,
    /// Packed partiality flag and symmetry operation number (`Y`).
    MIsym,
    /// Untyped integer (`I`).
    MtzInt,
    /// Untyped real (`R`).
    MtzReal,
    /// Boolean flag. Has no MTZ equivalent.
    Flag,
}

/// How the values of a column are stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Storage { Int, Float, Bool }

/// What happens to the data when a column is relabeled from one kind to another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CastRule {
    /// Same storage; only the tag changes.
    Relabel,
    /// Integers become floats.
    Promote,
    /// Floats become integers; every value must be integral.
    Demote,
    /// Not allowed.
    Forbidden,
}

use self::ColumnKind::*;

// (kind, MTZ code, storage, name)
const KINDS: &[(ColumnKind, Option<char>, Storage, &str)] = &[
    (HklIndex,              Some('H'), Storage::Int,   "HKL"),
    (Intensity,             Some('J'), Storage::Float, "Intensity"),
    (FriedelIntensity,      Some('K'), Storage::Float, "FriedelIntensity"),
    (SFAmplitude,           Some('F'), Storage::Float, "SFAmplitude"),
    (FriedelSFAmplitude,    Some('G'), Storage::Float, "FriedelSFAmplitude"),
    (NormalizedSFAmplitude, Some('E'), Storage::Float, "NormalizedSFAmplitude"),
    (AnomalousDifference,   Some('D'), Storage::Float, "AnomalousDifference"),
    (Stddev,                Some('Q'), Storage::Float, "Stddev"),
    (StddevFriedelSF,       Some('L'), Storage::Float, "StddevFriedelSF"),
    (StddevFriedelI,        Some('M'), Storage::Float, "StddevFriedelI"),
    (Phase,                 Some('P'), Storage::Float, "Phase"),
    (Weight,                Some('W'), Storage::Float, "Weight"),
    (HendricksonLattman,    Some('A'), Storage::Float, "HendricksonLattman"),
    (Batch,                 Some('B'), Storage::Int,   "Batch"),
    (MIsym,                 Some('Y'), Storage::Int,   "M/ISYM"),
    (MtzInt,                Some('I'), Storage::Int,   "MTZInt"),
    (MtzReal,               Some('R'), Storage::Float, "MTZReal"),
    (Flag,                  None,      Storage::Bool,  "Flag"),
];

// (plain, friedel)
//
// Stddev appears twice on the plain side; going from plain to Friedel
// therefore needs to know what the deviation is a deviation *of*.
const FRIEDEL_PAIRS: &[(ColumnKind, ColumnKind)] = &[
    (Intensity,   FriedelIntensity),
    (SFAmplitude, FriedelSFAmplitude),
    (Stddev,      StddevFriedelSF),
    (Stddev,      StddevFriedelI),
];

// (value kind, kind of its standard deviation)
const STDDEV_OF: &[(ColumnKind, ColumnKind)] = &[
    (Intensity,             Stddev),
    (SFAmplitude,           Stddev),
    (NormalizedSFAmplitude, Stddev),
    (AnomalousDifference,   Stddev),
    (FriedelIntensity,      StddevFriedelI),
    (FriedelSFAmplitude,    StddevFriedelSF),
];

// (from, to, rule) indexed by storage; anything absent is forbidden.
const CASTS: &[(Storage, Storage, CastRule)] = &[
    (Storage::Int,   Storage::Int,   CastRule::Relabel),
    (Storage::Float, Storage::Float, CastRule::Relabel),
    (Storage::Bool,  Storage::Bool,  CastRule::Relabel),
    (Storage::Int,   Storage::Float, CastRule::Promote),
    (Storage::Float, Storage::Int,   CastRule::Demote),
];

impl ColumnKind {
    pub fn all() -> impl Iterator<Item = ColumnKind>
    { KINDS.iter().map(|&(kind, _, _, _)| kind) }

    // rows of KINDS are in declaration order
    fn entry(self) -> &'static (ColumnKind, Option<char>, Storage, &'static str)
    { &KINDS[self as usize] }

    /// The MTZ column type code.
    pub fn mtz_code(self) -> Option<char> { self.entry().1 }

    pub fn storage(self) -> Storage { self.entry().2 }

    pub fn name(self) -> &'static str { self.entry().3 }

    pub fn from_mtz_code(code: char) -> Option<ColumnKind>
    {
        KINDS.iter()
            .find(|entry| entry.1 == Some(code))
            .map(|entry| entry.0)
    }

    pub fn is_friedel(self) -> bool
    { FRIEDEL_PAIRS.iter().any(|&(_, friedel)| friedel == self) }

    /// The kind that describes the same quantity without distinguishing
    /// the members of a Friedel pair.
    ///
    /// Kinds that are not Friedel-specific are returned unchanged.
    pub fn plain_variant(self) -> ColumnKind
    {
        FRIEDEL_PAIRS.iter()
            .find(|&&(_, friedel)| friedel == self)
            .map_or(self, |&(plain, _)| plain)
    }

    /// The Friedel-specific variant of a kind, if it has one.
    ///
    /// Returns `None` for `Stddev`, whose Friedel variant depends on the
    /// quantity it belongs to; see [`ColumnKind::stddev_kind`].
    pub fn friedel_variant(self) -> Option<ColumnKind>
    {
        if self.is_friedel() {
            return Some(self);
        }
        let mut candidates = FRIEDEL_PAIRS.iter().filter(|&&(plain, _)| plain == self);
        match (candidates.next(), candidates.next()) {
            (Some(&(_, friedel)), None) => Some(friedel),
            _ => None,
        }
    }

    /// The kind of a column holding standard deviations of this kind.
    pub fn stddev_kind(self) -> Option<ColumnKind>
    {
        STDDEV_OF.iter()
            .find(|&&(value, _)| value == self)
            .map(|&(_, stddev)| stddev)
    }

    /// How column data must change to be relabeled as `target`.
    pub fn cast_rule(self, target: ColumnKind) -> CastRule
    {
        let (from, to) = (self.storage(), target.storage());
        CASTS.iter()
            .find(|&&(a, b, _)| (a, b) == (from, to))
            .map_or(CastRule::Forbidden, |&(_, _, rule)| rule)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mtz_code() {
            Some(code) => write!(f, "{} ({})", self.name(), code),
            None => write!(f, "{}", self.name()),
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn table_order() {
        for (i, kind) in ColumnKind::all().enumerate() {
            assert_eq!(kind as usize, i);
        }
    }

    #[test]
    fn mtz_codes_are_unique() {
        for kind in ColumnKind::all() {
            if let Some(code) = kind.mtz_code() {
                assert_eq!(ColumnKind::from_mtz_code(code), Some(kind));
            }
        }
        assert_eq!(ColumnKind::from_mtz_code('X'), None);
        assert_eq!(ColumnKind::all().count(), 18);
    }

    #[test]
    fn friedel_variants() {
        assert_eq!(Intensity.friedel_variant(), Some(FriedelIntensity));
        assert_eq!(FriedelSFAmplitude.friedel_variant(), Some(FriedelSFAmplitude));
        assert_eq!(Stddev.friedel_variant(), None);
        assert_eq!(Phase.friedel_variant(), None);

        assert_eq!(FriedelIntensity.plain_variant(), Intensity);
        assert_eq!(StddevFriedelI.plain_variant(), Stddev);
        assert_eq!(StddevFriedelSF.plain_variant(), Stddev);
        assert_eq!(Weight.plain_variant(), Weight);

        assert_eq!(FriedelSFAmplitude.stddev_kind(), Some(StddevFriedelSF));
        assert_eq!(Intensity.stddev_kind(), Some(Stddev));
        assert_eq!(Phase.stddev_kind(), None);
    }

    #[test]
    fn casts() {
        assert_eq!(Intensity.cast_rule(SFAmplitude), CastRule::Relabel);
        assert_eq!(MtzInt.cast_rule(Batch), CastRule::Relabel);
        assert_eq!(HklIndex.cast_rule(MtzReal), CastRule::Promote);
        assert_eq!(MtzReal.cast_rule(HklIndex), CastRule::Demote);
        assert_eq!(Flag.cast_rule(MtzInt), CastRule::Forbidden);
        assert_eq!(Phase.cast_rule(Flag), CastRule::Forbidden);
    }

    #[test]
    fn display() {
        assert_eq!(Phase.to_string(), "Phase (P)");
        assert_eq!(Flag.to_string(), "Flag");
    }
}
