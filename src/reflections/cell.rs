/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use rspace_symmetry::Hkl;
use crate::FailResult;
use std::fmt;

/// Unit cell parameters.  Lengths in angstroms, angles in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnitCell {
    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
    // reciprocal metric tensor
    recip: [[f64; 3]; 3],
}

impl UnitCell {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> FailResult<UnitCell>
    {
        for &(name, x) in &[("a", a), ("b", b), ("c", c)] {
            ensure!(x.is_finite() && x > 0.0, "cell length {} must be positive (got {})", name, x);
        }
        for &(name, x) in &[("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            ensure!(0.0 < x && x < 180.0, "cell angle {} must lie strictly between 0 and 180 degrees (got {})", name, x);
        }

        let (ca, cb, cg) = (alpha.to_radians().cos(), beta.to_radians().cos(), gamma.to_radians().cos());
        let metric = [
            [a * a,      a * b * cg, a * c * cb],
            [a * b * cg, b * b,      b * c * ca],
            [a * c * cb, b * c * ca, c * c     ],
        ];
        let recip = match inv3(&metric) {
            Some(m) => m,
            None => bail!("cell ({}, {}, {}, {}, {}, {}) has no volume", a, b, c, alpha, beta, gamma),
        };
        Ok(UnitCell { a, b, c, alpha, beta, gamma, recip })
    }

    /// Construct from `[a, b, c, alpha, beta, gamma]`.
    pub fn from_parameters(params: &[f64; 6]) -> FailResult<UnitCell>
    {
        let [a, b, c, alpha, beta, gamma] = *params;
        UnitCell::new(a, b, c, alpha, beta, gamma)
    }

    pub fn parameters(&self) -> [f64; 6]
    { [self.a, self.b, self.c, self.alpha, self.beta, self.gamma] }

    pub fn volume(&self) -> f64
    {
        let (ca, cb, cg) = (
            self.alpha.to_radians().cos(),
            self.beta.to_radians().cos(),
            self.gamma.to_radians().cos(),
        );
        let factor = 1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg;
        self.a * self.b * self.c * factor.sqrt()
    }

    /// `1 / d^2` for a reflection.
    pub fn inverse_dsq(&self, hkl: &Hkl) -> f64
    {
        let h = [f64::from(hkl[0]), f64::from(hkl[1]), f64::from(hkl[2])];
        let g = &self.recip;
        let mut acc = 0.0;
        for i in 0..3 {
            for j in 0..3 {
                acc += h[i] * g[i][j] * h[j];
            }
        }
        acc
    }

    /// Interplanar spacing of a reflection.  Infinite for `(0, 0, 0)`.
    pub fn d_spacing(&self, hkl: &Hkl) -> f64
    { 1.0 / self.inverse_dsq(hkl).sqrt() }
}

impl fmt::Display for UnitCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {}, {}, {})", self.a, self.b, self.c, self.alpha, self.beta, self.gamma)
    }
}

fn inv3(m: &[[f64; 3]; 3]) -> Option<[[f64; 3]; 3]>
{
    let cof = |r0: usize, r1: usize, c0: usize, c1: usize| m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0];
    let adj = [
        [cof(1, 2, 1, 2), -cof(0, 2, 1, 2), cof(0, 1, 1, 2)],
        [-cof(1, 2, 0, 2), cof(0, 2, 0, 2), -cof(0, 1, 0, 2)],
        [cof(1, 2, 0, 1), -cof(0, 2, 0, 1), cof(0, 1, 0, 1)],
    ];
    let det = m[0][0] * adj[0][0] + m[0][1] * adj[1][0] + m[0][2] * adj[2][0];
    if !(det.abs() > 1e-12 * m[0][0] * m[1][1] * m[2][2]) {
        return None;
    }
    let mut out = adj;
    for row in &mut out {
        for x in row {
            *x /= det;
        }
    }
    Some(out)
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn orthorhombic() {
        let cell = UnitCell::new(10.0, 20.0, 40.0, 90.0, 90.0, 90.0).unwrap();
        assert_close!(cell.d_spacing(&[1, 0, 0]), 10.0);
        assert_close!(cell.d_spacing(&[0, 2, 0]), 10.0);
        assert_close!(cell.d_spacing(&[0, 0, -4]), 10.0);
        assert_close!(cell.d_spacing(&[1, 1, 0]), 1.0 / (0.01f64 + 0.0025).sqrt());
        assert_close!(cell.volume(), 8000.0);
        assert!(cell.d_spacing(&[0, 0, 0]).is_infinite());
    }

    #[test]
    fn hexagonal() {
        // 1/d^2 = 4/3 (h^2 + hk + k^2) / a^2 + l^2 / c^2
        let cell = UnitCell::new(5.0, 5.0, 8.0, 90.0, 90.0, 120.0).unwrap();
        for &hkl in &[[1, 0, 0], [1, 1, 0], [2, -1, 3], [0, 0, 2]] {
            let [h, k, l] = hkl;
            let (h, k, l) = (f64::from(h), f64::from(k), f64::from(l));
            let expected = 4.0 / 3.0 * (h * h + h * k + k * k) / 25.0 + l * l / 64.0;
            assert_close!(cell.inverse_dsq(&hkl), expected);
        }
        assert_close!(cell.volume(), 25.0 * 8.0 * (3.0f64).sqrt() / 2.0);
    }

    #[test]
    fn monoclinic() {
        // 1/d^2 = (h^2/a^2 + k^2 sin^2(b)/b^2 + l^2/c^2 - 2hl cos(b)/(ac)) / sin^2(b)
        let (a, b, c, beta) = (6.0, 7.0, 9.0, 100.0f64);
        let cell = UnitCell::new(a, b, c, 90.0, beta, 90.0).unwrap();
        let (sb, cb) = (beta.to_radians().sin(), beta.to_radians().cos());
        let [h, k, l] = [1.0, 2.0, -3.0];
        let expected = (h * h / (a * a) + k * k * sb * sb / (b * b) + l * l / (c * c)
            - 2.0 * h * l * cb / (a * c)) / (sb * sb);
        assert_close!(rel=1e-8, cell.inverse_dsq(&[1, 2, -3]), expected);
    }

    #[test]
    fn invalid() {
        assert!(UnitCell::new(0.0, 1.0, 1.0, 90.0, 90.0, 90.0).is_err());
        assert!(UnitCell::new(1.0, 1.0, 1.0, 180.0, 90.0, 90.0).is_err());
        // all three angles summing to 360 collapses the cell
        assert!(UnitCell::new(1.0, 1.0, 1.0, 120.0, 120.0, 120.0).is_err());
        assert!(UnitCell::from_parameters(&[3.0, 4.0, 5.0, 90.0, 90.0, 90.0]).is_ok());
    }
}
