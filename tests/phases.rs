/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Checks of phase bookkeeping against structure factors computed from an
//! explicit atomic model with the symmetry of each group.

#[macro_use] extern crate rspace_assert_close;
#[macro_use] extern crate itertools;

use rand::{SeedableRng, XorShiftRng};
use rspace::reflections::{self as refl, Column, ColumnKind, ReflectionTable};
use rspace::symmetry::{self as sym, catalog, SpaceGroup};

mod shared;
use self::shared::{random_hkls, PointModel};

/// Smallest |F| whose phase is compared.
const MIN_AMPLITUDE: f64 = 1e-2;

fn test_groups() -> Vec<SpaceGroup>
{ catalog::spacegroups().unwrap() }

#[test]
fn phase_shifts_reconstruct_asu_phases() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([21, 22, 23, 24]);
    for sg in test_groups() {
        let model = PointModel::random(&mut rng, 3, &sg);
        let hkls = random_hkls(&mut rng, 50, 5);

        let (mapping, shifts) = sym::hkl_to_asu_with_phase_shifts(&hkls, &sg).unwrap();
        let (amps, phases) = refl::from_structurefactor(&model.structure_factors(&hkls));
        let (asu_amps, asu_phases) = refl::from_structurefactor(&model.structure_factors(&mapping.hkls));
        let predicted = shifts.apply(&phases);

        assert_close!(abs=1e-8, amps.clone(), asu_amps);
        for i in 0..hkls.len() {
            if amps[i] > MIN_AMPLITUDE {
                assert_phase_close!(
                    predicted[i], asu_phases[i],
                    "{}: {:?} -> {:?}", sg, hkls[i], mapping.hkls[i],
                );
            }
        }
    }
}

#[test]
fn absent_reflections_vanish() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([25, 26, 27, 28]);
    let mut nabsent = 0;
    for sg in test_groups() {
        let model = PointModel::random(&mut rng, 2, &sg);
        let hkls = random_hkls(&mut rng, 80, 4);
        let absent = sym::hkl_is_absent(&hkls, &sg).unwrap();
        for (hkl, sf, &absent) in izip!(&hkls, model.structure_factors(&hkls), &absent) {
            if absent {
                nabsent += 1;
                assert!(sf.norm() < 1e-8, "{}: {:?} is absent but |F| = {}", sg, hkl, sf.norm());
            }
        }
    }
    // make sure the test is not vacuous
    assert!(nabsent > 50, "{}", nabsent);
}

#[test]
fn friedel_mates_predict_the_same_phase() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([29, 30, 31, 32]);
    for sg in test_groups() {
        let model = PointModel::random(&mut rng, 3, &sg);
        let hkls = random_hkls(&mut rng, 50, 5);
        let (amps, phases) = refl::from_structurefactor(&model.structure_factors(&hkls));
        let (mapping, shifts) = sym::hkl_to_asu_with_phase_shifts(&hkls, &sg).unwrap();

        // phi(-H) = -phi(H) for a real density
        let neg: Vec<_> = hkls.iter().map(|h| [-h[0], -h[1], -h[2]]).collect();
        let neg_phases: Vec<_> = phases.iter().map(|p| -p).collect();
        let (neg_mapping, neg_shifts) = sym::hkl_to_asu_with_phase_shifts(&neg, &sg).unwrap();
        assert_eq!(mapping.hkls, neg_mapping.hkls);

        let a = shifts.apply(&phases);
        let b = neg_shifts.apply(&neg_phases);
        for i in 0..hkls.len() {
            if amps[i] > MIN_AMPLITUDE {
                assert_phase_close!(a[i], b[i], "{}: {:?}", sg, hkls[i]);
            }
        }
    }
}

#[test]
fn table_reduction_carries_phases() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([33, 34, 35, 36]);
    for &number in &[4, 19, 96, 152, 169, 198] {
        let sg = catalog::find_spacegroup_by_number(number).unwrap();
        let model = PointModel::random(&mut rng, 3, &sg);
        let hkls = random_hkls(&mut rng, 40, 5);
        let (f, phi) = refl::from_structurefactor_columns(&model.structure_factors(&hkls));

        let mut table = ReflectionTable::from_columns(vec![
            Column::ints("H", ColumnKind::HklIndex, hkls.iter().map(|h| h[0]).collect()),
            Column::ints("K", ColumnKind::HklIndex, hkls.iter().map(|h| h[1]).collect()),
            Column::ints("L", ColumnKind::HklIndex, hkls.iter().map(|h| h[2]).collect()),
            f,
            phi,
        ]).unwrap();
        table.set_index(["H", "K", "L"]).unwrap();
        table.set_spacegroup(Some(sg.clone()));

        let reduced = table.hkl_to_asu().unwrap();
        let asu_hkls = reduced.hkls().unwrap().to_vec();
        let (amps, phases) = refl::from_structurefactor(&model.structure_factors(&asu_hkls));

        let table_amps = reduced.column("F").unwrap().as_floats().unwrap();
        let table_phases = reduced.column("Phi").unwrap().as_floats().unwrap();
        assert_close!(abs=1e-8, table_amps.to_vec(), amps.clone());
        for i in 0..asu_hkls.len() {
            assert!(-180.0 < table_phases[i] && table_phases[i] <= 180.0);
            if amps[i] > MIN_AMPLITUDE {
                assert_phase_close!(table_phases[i], phases[i], "{}: {:?}", sg, asu_hkls[i]);
            }
        }
    }
}
