/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Properties that must hold for every space group in the catalog.

#[macro_use] extern crate rspace_assert_close;

use rand::{SeedableRng, XorShiftRng};
use rspace::symmetry::{self as sym, catalog, Hkl, SpaceGroup};

mod shared;
use self::shared::random_hkls;

fn all_spacegroups() -> Vec<SpaceGroup>
{
    let groups = catalog::spacegroups().unwrap();
    assert_eq!(groups.len(), catalog::numbers().count());

    // every ASU convention should be exercised
    let mut cases: Vec<u8> = groups.iter()
        .map(|sg| sym::asu_case(sg.number()).unwrap().index())
        .collect();
    cases.sort();
    cases.dedup();
    assert_eq!(cases.len(), 10);
    groups
}

fn neg(hkls: &[Hkl]) -> Vec<Hkl>
{ hkls.iter().map(|h| [-h[0], -h[1], -h[2]]).collect() }

#[test]
fn reduced_indices_are_in_the_asu() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 2, 3, 4]);
    for sg in all_spacegroups() {
        let hkls = random_hkls(&mut rng, 60, 8);
        let mapping = sym::hkl_to_asu(&hkls, &sg).unwrap();
        let flags = sym::in_asu(&mapping.hkls, &sg).unwrap();
        assert!(flags.iter().all(|&x| x), "{}: {:?}", sg, mapping.hkls);

        let nimages = 2 * sg.operations().sym_ops().len() as u32;
        assert!(mapping.isym.iter().all(|&i| 1 <= i && i <= nimages), "{}", sg);
    }
}

#[test]
fn reduction_is_idempotent() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([5, 6, 7, 8]);
    for sg in all_spacegroups() {
        let hkls = random_hkls(&mut rng, 60, 8);
        let once = sym::hkl_to_asu(&hkls, &sg).unwrap();
        let twice = sym::hkl_to_asu(&once.hkls, &sg).unwrap();
        assert_eq!(once.hkls, twice.hkls, "{}", sg);

        // the first image of anything already in the ASU is itself
        assert!(twice.isym.iter().all(|&i| i == 1), "{}: {:?}", sg, twice.isym);
    }
}

#[test]
fn friedel_mates_reduce_to_the_same_index() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([9, 10, 11, 12]);
    for sg in all_spacegroups() {
        let hkls = random_hkls(&mut rng, 40, 6);
        let direct = sym::hkl_to_asu(&hkls, &sg).unwrap();
        let friedel = sym::hkl_to_asu(&neg(&hkls), &sg).unwrap();
        assert_eq!(direct.hkls, friedel.hkls, "{}", sg);
    }
}

#[test]
fn labels_are_properties_of_the_orbit() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([13, 14, 15, 16]);
    for sg in all_spacegroups() {
        let hkls = random_hkls(&mut rng, 40, 6);
        let reduced = sym::hkl_to_asu(&hkls, &sg).unwrap().hkls;

        let centric = sym::is_centric(&hkls, &sg);
        assert_eq!(centric, sym::is_centric(&neg(&hkls), &sg), "{}", sg);
        assert_eq!(centric, sym::is_centric(&reduced, &sg), "{}", sg);
        if sg.is_centrosymmetric() {
            assert!(centric.iter().all(|&x| x), "{}", sg);
        }

        let absent = sym::hkl_is_absent(&hkls, &sg).unwrap();
        assert_eq!(absent, sym::hkl_is_absent(&reduced, &sg).unwrap(), "{}", sg);
        assert_eq!(absent, sym::hkl_is_absent(&neg(&hkls), &sg).unwrap(), "{}", sg);
    }
}

#[test]
fn multiplicity_times_orbit_size_is_the_point_group_order() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([17, 18, 19, 20]);
    for sg in all_spacegroups() {
        let hkls = random_hkls(&mut rng, 40, 6);
        let eps = sym::compute_structurefactor_multiplicity(&hkls, &sg).unwrap();
        let sym_ops = sg.operations().sym_ops();
        for (hkl, &eps) in hkls.iter().zip(&eps) {
            assert_close!(abs=1e-12, eps, eps.round());
            assert!(eps >= 1.0, "{}: {:?} has multiplicity {}", sg, hkl, eps);

            let mut orbit: Vec<Hkl> = sym::apply_to_hkl(&[*hkl], &sym_ops[0]);
            for op in &sym_ops[1..] {
                orbit.extend(sym::apply_to_hkl(&[*hkl], op));
            }
            orbit.sort();
            orbit.dedup();
            assert_eq!(
                eps as usize * orbit.len(), sym_ops.len(),
                "{}: {:?}", sg, hkl,
            );
        }
    }
}

#[test]
fn ops_round_trip_through_the_catalog() {
    for sg in all_spacegroups() {
        let found = catalog::find_spacegroup_by_ops(sg.operations()).unwrap();
        assert_eq!(found.map(|g| g.number()), Some(sg.number()));
        assert_eq!(catalog::find_spacegroup_by_name(sg.hm()).unwrap(), sg);
    }
}

#[test]
fn p1_example() {
    let p1 = catalog::find_spacegroup("P 1").unwrap();
    let hkls = [[1, 2, 3], [-1, -2, -3], [0, 0, -1], [0, 0, 0]];
    let (mapping, shifts) = sym::hkl_to_asu_with_phase_shifts(&hkls, &p1).unwrap();
    assert_eq!(mapping.hkls, vec![[1, 2, 3], [1, 2, 3], [0, 0, 1], [0, 0, 0]]);
    assert_eq!(mapping.isym, vec![1, 2, 2, 1]);
    assert_eq!(shifts.coeff, vec![1.0, -1.0, -1.0, 1.0]);
    assert_phase_close!(shifts.apply(&[30.0, -30.0, 45.0, 0.0]), vec![30.0, 30.0, -45.0, 0.0]);
    assert_eq!(sym::is_centric(&hkls, &p1), vec![false, false, false, true]);
}

