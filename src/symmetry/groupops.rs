/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::ConfigurationError;
use crate::oper::group::generate_finite_group;
use crate::{SymOp, FailResult};

use ::std::collections::HashSet;
use ::std::fmt;

/// Largest number of operations in a conventional space group cell (`F m -3 m`).
const MAX_ORDER: usize = 192;

/// The operations of a space group, split into general positions and
/// centering translations.
///
/// Every operation of the group is `sym.then(cen)` for exactly one
/// `sym` in `sym_ops()` and one `cen` in `cen_ops()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupOps {
    /// One operation per distinct rotation.  The identity is always first.
    sym_ops: Vec<SymOp>,
    /// Centering translations over `DEN`.  The zero vector is always first.
    cen_ops: Vec<[i32; 3]>,
}

impl GroupOps {
    /// Close a set of generators under composition.
    ///
    /// The identity does not need to be among the generators.
    pub fn from_generators(generators: &[SymOp]) -> FailResult<GroupOps>
    {
        let mut gens = vec![SymOp::eye()];
        gens.extend(generators.iter().cloned());

        let all = generate_finite_group(&gens, MAX_ORDER, |a, b| a.then(b))
            .ok_or_else(|| format_err!(
                "operations do not generate a space group (more than {} elements)", MAX_ORDER,
            ))?;
        GroupOps::from_all_ops(&all)
    }

    /// Parse generators written as `x,y,z` triplets, and close them under composition.
    pub fn from_triplets<S: AsRef<str>>(triplets: &[S]) -> FailResult<GroupOps>
    {
        let generators = triplets.iter()
            .map(|s| SymOp::from_triplet(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        GroupOps::from_generators(&generators)
    }

    fn from_all_ops(all: &[SymOp]) -> FailResult<GroupOps>
    {
        let mut cen_ops = all.iter()
            .filter(|op| op.is_translation())
            .map(|op| op.tran())
            .collect::<Vec<_>>();
        cen_ops.sort();

        let mut rotations = HashSet::new();
        let sym_ops = all.iter()
            .filter(|op| rotations.insert(*op.rot()))
            .cloned()
            .collect::<Vec<_>>();

        ensure!(
            sym_ops.len() * cen_ops.len() == all.len(),
            "group of {} operations does not factor into {} rotations and {} centering vectors",
            all.len(), sym_ops.len(), cen_ops.len(),
        );
        trace!("group with {} general positions and {} centering vectors", sym_ops.len(), cen_ops.len());
        Ok(GroupOps { sym_ops, cen_ops })
    }
}

impl GroupOps {
    /// General position operations (no centering).
    pub fn sym_ops(&self) -> &[SymOp]
    { &self.sym_ops }

    /// Centering translations, in units of `1/DEN`.
    pub fn cen_ops(&self) -> &[[i32; 3]]
    { &self.cen_ops }

    /// Number of operations including centering.
    pub fn order(&self) -> usize
    { self.sym_ops.len() * self.cen_ops.len() }

    /// All operations of the group, including centered copies.
    ///
    /// Ordered by centering vector, then by general position.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = SymOp> + 'a
    {
        iproduct!(&self.cen_ops, &self.sym_ops).map(|(cen, sym)| {
            let t = sym.tran();
            sym.with_tran([t[0] + cen[0], t[1] + cen[1], t[2] + cen[2]])
        })
    }

    /// Whether the group contains an inversion center.
    pub fn is_centrosymmetric(&self) -> bool
    { self.sym_ops.iter().any(|op| op.is_inversion()) }

    pub fn find_centering(&self) -> Result<Centering, ConfigurationError>
    {
        Centering::from_translations(&self.cen_ops)
            .ok_or_else(|| ConfigurationError::new(format!(
                "unrecognized centering vectors (over {}): {:?}", crate::DEN, self.cen_ops,
            )))
    }

    /// Whether both describe the same set of operations.
    ///
    /// Unlike `==`, this ignores which centered copy of each operation
    /// was chosen as the general position, and the order of operations.
    pub fn same_ops_as(&self, other: &GroupOps) -> bool
    {
        if self.order() != other.order() {
            return false;
        }
        let mut a = self.iter().collect::<Vec<_>>();
        let mut b = other.iter().collect::<Vec<_>>();
        a.sort();
        b.sort();
        a == b
    }
}

/// Lattice centering type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Centering { P, A, B, C, I, R, F }

const CENTERING_VECTORS: &[(Centering, &[[i32; 3]])] = &[
    (Centering::P, &[[0, 0, 0]]),
    (Centering::A, &[[0, 0, 0], [0, 12, 12]]),
    (Centering::B, &[[0, 0, 0], [12, 0, 12]]),
    (Centering::C, &[[0, 0, 0], [12, 12, 0]]),
    (Centering::I, &[[0, 0, 0], [12, 12, 12]]),
    (Centering::R, &[[0, 0, 0], [8, 16, 16], [16, 8, 8]]),
    (Centering::F, &[[0, 0, 0], [0, 12, 12], [12, 0, 12], [12, 12, 0]]),
];

impl Centering {
    /// Identify the centering from its translations (over `DEN`), in any order.
    pub fn from_translations(vectors: &[[i32; 3]]) -> Option<Centering>
    {
        let mut sorted = vectors.to_vec();
        sorted.sort();
        sorted.dedup();
        CENTERING_VECTORS.iter()
            .find(|&&(_, known)| known == &sorted[..])
            .map(|&(centering, _)| centering)
    }

    pub fn from_letter(letter: char) -> Option<Centering>
    {
        CENTERING_VECTORS.iter()
            .map(|&(centering, _)| centering)
            .find(|c| c.letter() == letter.to_ascii_uppercase())
    }

    pub fn letter(self) -> char
    {
        match self {
            Centering::P => 'P',
            Centering::A => 'A',
            Centering::B => 'B',
            Centering::C => 'C',
            Centering::I => 'I',
            Centering::R => 'R',
            Centering::F => 'F',
        }
    }

    /// Number of lattice points per conventional cell.
    pub fn factor(self) -> u32
    {
        match self {
            Centering::P => 1,
            Centering::A | Centering::B | Centering::C | Centering::I => 2,
            Centering::R => 3,
            Centering::F => 4,
        }
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { write!(f, "{}", self.letter()) }
}
