/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A complex number in rectangular form.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    pub real: f64,
    pub imag: f64,
}

impl Rect {
    pub fn new(real: f64, imag: f64) -> Rect { Rect { real, imag } }
    pub fn zero() -> Rect { Rect { real: 0.0, imag: 0.0 } }

    /// `norm * exp(i * radians)`
    pub fn from_polar(norm: f64, radians: f64) -> Rect
    { Rect { real: norm * radians.cos(), imag: norm * radians.sin() } }

    /// `exp(i * radians)`
    pub fn cis(radians: f64) -> Rect { Rect::from_polar(1.0, radians) }

    pub fn sqnorm(self) -> f64 { self.real * self.real + self.imag * self.imag }
    pub fn norm(self) -> f64 { self.real.hypot(self.imag) }

    /// Argument in radians, in `[-pi, pi]`.
    pub fn arg(self) -> f64 { self.imag.atan2(self.real) }

    pub fn conj(self) -> Rect {
        Rect {
            real:  self.real,
            imag: -self.imag,
        }
    }
}

impl Mul<Rect> for Rect {
    type Output = Rect;
    fn mul(self, other: Rect) -> Rect {
        Rect {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Mul<f64> for Rect {
    type Output = Rect;
    fn mul(self, scale: f64) -> Rect {
        Rect {
            real: self.real * scale,
            imag: self.imag * scale,
        }
    }
}

impl Add<Rect> for Rect {
    type Output = Rect;
    fn add(self, other: Rect) -> Rect {
        Rect {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub<Rect> for Rect {
    type Output = Rect;
    fn sub(self, other: Rect) -> Rect { self + (-other) }
}

impl Neg for Rect {
    type Output = Rect;
    fn neg(self) -> Rect { Rect { real: -self.real, imag: -self.imag } }
}

impl AddAssign<Rect> for Rect {
    fn add_assign(&mut self, other: Rect) { *self = *self + other; }
}

impl std::iter::Sum for Rect {
    fn sum<I: Iterator<Item = Rect>>(iter: I) -> Rect
    { iter.fold(Rect::zero(), |a, b| a + b) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn arithmetic() {
        let a = Rect::new(1.0, 2.0);
        let b = Rect::new(3.0, -1.0);
        assert_eq!(a + b, Rect::new(4.0, 1.0));
        assert_eq!(a - b, Rect::new(-2.0, 3.0));
        assert_eq!(a * b, Rect::new(5.0, 5.0));
        assert_eq!(a * a.conj(), Rect::new(a.sqnorm(), 0.0));
        assert_eq!(vec![a, b, -a].into_iter().sum::<Rect>(), b);
    }

    #[test]
    fn polar() {
        let z = Rect::from_polar(2.0, PI / 2.0);
        assert_close!(abs=1e-12, z.real, 0.0);
        assert_close!(z.imag, 2.0);
        assert_close!(z.norm(), 2.0);
        assert_close!(z.arg(), PI / 2.0);
        assert_close!(Rect::new(-1.0, 0.0).arg(), PI);
    }
}
