/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Helpers shared by the integration tests.
#![allow(dead_code)]

use rand::Rng;
use rspace::reflections::Rect;
use rspace::symmetry::{Hkl, SymmetrySource, DEN};

/// Random Miller indices with components in `-max..=max`.
pub fn random_hkls(rng: &mut impl Rng, count: usize, max: i32) -> Vec<Hkl>
{
    (0..count)
        .map(|_| {
            let mut hkl = [0; 3];
            for x in &mut hkl {
                *x = rng.gen_range(-max, max + 1);
            }
            hkl
        })
        .collect()
}

/// A set of identical point scatterers in fractional coordinates,
/// expanded by the full symmetry of a group.
pub struct PointModel {
    sites: Vec<[f64; 3]>,
}

impl PointModel {
    pub fn random(rng: &mut impl Rng, nsites: usize, symmetry: &impl SymmetrySource) -> Self
    {
        let mut sites = vec![];
        for _ in 0..nsites {
            let x = [rng.next_f64(), rng.next_f64(), rng.next_f64()];
            for op in symmetry.group_ops().iter() {
                let rot = op.rot();
                let tran = op.tran();
                let mut y = [0.0; 3];
                for i in 0..3 {
                    y[i] = (0..3).map(|j| f64::from(rot[i][j]) * x[j]).sum::<f64>()
                        + f64::from(tran[i]) / f64::from(DEN);
                }
                sites.push(y);
            }
        }
        PointModel { sites }
    }

    /// `F(H) = sum_j exp(2 pi i H . x_j)`
    pub fn structure_factors(&self, hkls: &[Hkl]) -> Vec<Rect>
    {
        hkls.iter()
            .map(|hkl| {
                self.sites.iter()
                    .map(|x| {
                        let dot = (0..3).map(|k| f64::from(hkl[k]) * x[k]).sum::<f64>();
                        Rect::cis(2.0 * std::f64::consts::PI * dot)
                    })
                    .sum()
            })
            .collect()
    }
}

/// A Precognition `.hkl` file, compared numerically.
#[derive(Debug, Clone, PartialEq)]
pub struct LaueFile {
    pub hkls: Vec<Hkl>,
    /// F+, SigF+, F-, SigF- on each row
    pub values: Vec<[f64; 4]>,
}

impl rspace_integration_test::CheckFile for LaueFile {
    type OtherArgs = ();

    fn read_file(path: &std::path::Path) -> rspace_integration_test::Result<Self>
    {
        let table = rspace::hkl_io::load(path, Default::default())?;
        let hkls = table.hkls().unwrap_or(&[]).to_vec();
        let mut values = vec![[0.0; 4]; table.len()];
        for (k, name) in ["F+", "SigF+", "F-", "SigF-"].iter().enumerate() {
            let column = table.column(name).and_then(|c| c.as_floats()).unwrap();
            for (row, &x) in values.iter_mut().zip(column) {
                row[k] = x;
            }
        }
        Ok(LaueFile { hkls, values })
    }

    fn check_against(&self, expected: &Self, _: ())
    {
        assert_eq!(self.hkls, expected.hkls);
        for (a, b) in self.values.iter().zip(&expected.values) {
            assert_close!(abs=1e-10, a, b);
        }
    }
}
