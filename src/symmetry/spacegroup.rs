/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::ConfigurationError;
use crate::{GroupOps, SymOp, Centering};

use ::std::fmt;

/// A space group, identified by its number in the International Tables.
///
/// Space groups are supplied by a provider (see the `catalog` module);
/// the reduction algorithms only ever read them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaceGroup {
    number: u16,
    hm: String,
    ops: GroupOps,
    basisop: SymOp,
}

impl SpaceGroup {
    /// # Errors
    ///
    /// Fails with `ConfigurationError` if `number` is not in `1..=230`.
    pub fn new(number: u16, hm: &str, ops: GroupOps, basisop: SymOp) -> Result<SpaceGroup, ConfigurationError>
    {
        if !(1..=230).contains(&number) {
            return Err(ConfigurationError::new(format!("space group number {} is not in 1..=230", number)));
        }
        Ok(SpaceGroup { number, hm: hm.to_string(), ops, basisop })
    }

    /// Number in `1..=230`.
    pub fn number(&self) -> u16
    { self.number }

    /// Hermann-Mauguin symbol.
    pub fn hm(&self) -> &str
    { &self.hm }

    pub fn operations(&self) -> &GroupOps
    { &self.ops }

    /// Change of basis into the setting that the ASU conventions are written for.
    pub fn basisop(&self) -> &SymOp
    { &self.basisop }

    pub fn is_centrosymmetric(&self) -> bool
    { self.ops.is_centrosymmetric() }

    pub fn centering(&self) -> Result<Centering, ConfigurationError>
    { self.ops.find_centering() }
}

impl fmt::Display for SpaceGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { write!(f, "{} (#{})", self.hm, self.number) }
}

/// Anything that can stand in for the operations of a space group.
///
/// Operations that need the ASU also need a space group number,
/// which a bare `GroupOps` does not carry.
pub trait SymmetrySource {
    fn group_ops(&self) -> &GroupOps;

    fn spacegroup(&self) -> Option<&SpaceGroup>;
}

impl SymmetrySource for SpaceGroup {
    fn group_ops(&self) -> &GroupOps
    { &self.ops }

    fn spacegroup(&self) -> Option<&SpaceGroup>
    { Some(self) }
}

impl SymmetrySource for GroupOps {
    fn group_ops(&self) -> &GroupOps
    { self }

    fn spacegroup(&self) -> Option<&SpaceGroup>
    { None }
}

impl<'a, S: SymmetrySource + ?Sized> SymmetrySource for &'a S {
    fn group_ops(&self) -> &GroupOps
    { (**self).group_ops() }

    fn spacegroup(&self) -> Option<&SpaceGroup>
    { (**self).spacegroup() }
}

/// Either a full space group or just its operations.
///
/// This is what a dynamically-typed description (e.g. a config file)
/// resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symmetry {
    SpaceGroup(SpaceGroup),
    GroupOps(GroupOps),
}

impl SymmetrySource for Symmetry {
    fn group_ops(&self) -> &GroupOps
    {
        match self {
            Symmetry::SpaceGroup(sg) => sg.operations(),
            Symmetry::GroupOps(ops) => ops,
        }
    }

    fn spacegroup(&self) -> Option<&SpaceGroup>
    {
        match self {
            Symmetry::SpaceGroup(sg) => Some(sg),
            Symmetry::GroupOps(_) => None,
        }
    }
}

impl From<SpaceGroup> for Symmetry {
    fn from(sg: SpaceGroup) -> Self
    { Symmetry::SpaceGroup(sg) }
}

impl From<GroupOps> for Symmetry {
    fn from(ops: GroupOps) -> Self
    { Symmetry::GroupOps(ops) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn number_range() {
        let ops = || GroupOps::from_generators(&[]).unwrap();
        assert!(SpaceGroup::new(0, "X", ops(), SymOp::eye()).is_err());
        assert!(SpaceGroup::new(231, "X", ops(), SymOp::eye()).is_err());
        assert_eq!(SpaceGroup::new(1, "P 1", ops(), SymOp::eye()).unwrap().number(), 1);
    }
}
