/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::hash::Hash;

// NOTE: There is no "group" trait here.  Groups of symmetry operations
//       are closed under `SymOp::then` only after translations are reduced,
//       which is a detail of the composition function rather than of the
//       element type, so the composition law is simply passed in.

/// Generates a finite group from a non-empty set of generators.
///
/// The generators may contain duplicates or extraneous elements.
/// The first generator is the first element of the output, and elements
/// appear in breadth-first order of discovery after that.
///
/// Returns `None` if more than `limit` distinct elements are produced,
/// which is how an infinite (non-crystallographic) group shows up.
pub(crate) fn generate_finite_group<G>(
    generators: &[G],
    limit: usize,
    mut g_fn: impl FnMut(&G, &G) -> G,
) -> Option<Vec<G>>
where G: Hash + Eq + Clone,
{
    use ::std::collections::{HashSet, VecDeque};
    assert!(generators.len() > 0, "empty groups do not exist!");

    let mut seen = HashSet::new();
    let mut out = vec![];

    let mut queue: VecDeque<_> = generators.iter().cloned().collect();

    while let Some(g) = queue.pop_front() {
        if seen.insert(g.clone()) {
            if out.len() == limit {
                return None;
            }
            queue.extend(generators.iter().map(|h| g_fn(&g, h)));
            out.push(g);
        }
    }
    Some(out)
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::SymOp;

    #[test]
    fn cyclic() {
        // integers mod 6, generated by 2 and 3
        let group = generate_finite_group(&[2u32, 3], 100, |a, b| (a + b) % 6).unwrap();
        assert_eq!(group.len(), 6);
        assert_eq!(group[0], 2);
    }

    #[test]
    fn infinite_is_rejected() {
        assert_eq!(generate_finite_group(&[1u64], 50, |a, b| a + b), None);
    }

    #[test]
    fn sixfold_screw() {
        let eye = SymOp::eye();
        let six = SymOp::from_triplet("x-y,x,z+1/6").unwrap();
        let group = generate_finite_group(&[eye, six], 192, |a, b| a.then(b)).unwrap();
        assert_eq!(group.len(), 6);
        assert_eq!(group[0], eye);
    }
}
