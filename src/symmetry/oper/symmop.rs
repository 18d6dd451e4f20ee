/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::TripletError;
use crate::util::{Tol, dot};
use crate::Hkl;

use ::num_integer::Integer;
use ::std::fmt;

/// Denominator of all translations.
///
/// Translation vectors are stored as integer numerators over this value,
/// which can represent every translation that occurs in a conventional
/// space group setting (halves, thirds, quarters and sixths).
pub const DEN: i32 = 24;

/// A space group operation `x -> R x + t` on fractional coordinates.
///
/// Applied to a Miller index (a row vector), the same operation maps
/// `H -> H R` and contributes a phase shift of `-2π H·t`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymOp {
    /// Rows are the coefficients of `x, y, z` in each output coordinate,
    /// exactly as written in a triplet like `-y,x-y,z+1/3`.
    ///
    /// Invariants:
    ///  - `abs(det(rot)) == 1`
    rot: [[i32; 3]; 3],

    /// Numerators over `DEN`.
    ///
    /// Invariants:
    ///  - elements are reduced into the range `0 <= x < DEN`.
    tran: [i32; 3],
}

const EYE: [[i32; 3]; 3] = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];
const INVERSION: [[i32; 3]; 3] = [[-1, 0, 0], [0, -1, 0], [0, 0, -1]];

impl Default for SymOp {
    fn default() -> Self
    { Self::eye() }
}

impl SymOp {
    pub fn eye() -> Self
    { SymOp { rot: EYE, tran: [0; 3] } }

    /// Construct from a rotation and a translation in units of `1/DEN`.
    ///
    /// The translation is reduced modulo `DEN`.
    ///
    /// # Panics
    ///
    /// Panics if the rotation is not unimodular.
    pub fn new(rot: [[i32; 3]; 3], tran: [i32; 3]) -> Self
    {
        assert_eq!(det(&rot).abs(), 1, "rotation is not unimodular: {:?}", rot);
        SymOp { rot, tran: reduce_tran(tran) }
    }

    /// A pure translation, e.g. a centering vector.
    pub fn translation(tran: [i32; 3]) -> Self
    { SymOp::new(EYE, tran) }

    /// Parse an operation written like `-x+1/2,y,-z`.
    pub fn from_triplet(triplet: &str) -> Result<Self, TripletError>
    {
        let error = |reason: String| TripletError { triplet: triplet.to_string(), reason };

        let parts = triplet.split(',').collect::<Vec<_>>();
        if parts.len() != 3 {
            return Err(error(format!("expected 3 components, found {}", parts.len())));
        }

        let mut rot = [[0; 3]; 3];
        let mut tran = [0; 3];
        for (row, part) in parts.into_iter().enumerate() {
            let (coeffs, t) = parse_component(part).map_err(&error)?;
            rot[row] = coeffs;
            tran[row] = t;
        }

        if det(&rot).abs() != 1 {
            return Err(error(format!("rotation part is not unimodular (det = {})", det(&rot))));
        }
        Ok(SymOp { rot, tran: reduce_tran(tran) })
    }

    pub fn rot(&self) -> &[[i32; 3]; 3]
    { &self.rot }

    /// Translation numerators over `DEN`.
    pub fn tran(&self) -> [i32; 3]
    { self.tran }

    pub fn is_identity(&self) -> bool
    { self.rot == EYE && self.tran == [0; 3] }

    /// Whether the rotation part is the identity.
    pub fn is_translation(&self) -> bool
    { self.rot == EYE }

    /// Whether the rotation part is `-1`, i.e. an inversion center.
    pub fn is_inversion(&self) -> bool
    { self.rot == INVERSION }

    /// The same operation with its translation replaced.
    pub fn with_tran(&self, tran: [i32; 3]) -> Self
    { SymOp { rot: self.rot, tran: reduce_tran(tran) } }
}

impl SymOp {
    /// Flipped group operator.
    ///
    /// `a.then(b) == b.of(a)`: apply `a` first, then `b`.
    pub fn then(&self, other: &SymOp) -> SymOp
    {
        let (ra, ta) = (&self.rot, &self.tran);
        let (rb, tb) = (&other.rot, &other.tran);

        let mut rot = [[0; 3]; 3];
        let mut tran = [0; 3];
        for i in 0..3 {
            for j in 0..3 {
                rot[i][j] = (0..3).map(|k| rb[i][k] * ra[k][j]).sum();
            }
            tran[i] = dot(&rb[i], ta) + tb[i];
        }
        SymOp { rot, tran: reduce_tran(tran) }
    }

    /// Conventional group operator.
    pub fn of(&self, other: &SymOp) -> SymOp
    { other.then(self) }
}

impl SymOp {
    /// Transform a Miller index: `H' = H R`.
    #[inline]
    pub fn apply_to_hkl(&self, hkl: &Hkl) -> Hkl
    {
        let r = &self.rot;
        let mut out = [0; 3];
        for j in 0..3 {
            out[j] = hkl[0] * r[0][j] + hkl[1] * r[1][j] + hkl[2] * r[2][j];
        }
        out
    }

    /// Phase shift (radians) picked up by the structure factor of `hkl`
    /// when it is moved by this operation.
    ///
    /// For a density invariant under this operation,
    /// `phase(H R) = phase(H) + phase_shift(H)`.
    #[inline]
    pub fn phase_shift(&self, hkl: &Hkl) -> f64
    { -2.0 * ::std::f64::consts::PI * f64::from(dot(hkl, &self.tran)) / f64::from(DEN) }
}

impl fmt::Display for SymOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        for row in 0..3 {
            if row > 0 {
                write!(f, ",")?;
            }
            let mut first = true;
            for (&c, axis) in self.rot[row].iter().zip(&['x', 'y', 'z']) {
                if c == 0 {
                    continue;
                }
                match (c.signum(), first) {
                    (-1, _) => write!(f, "-")?,
                    (_, false) => write!(f, "+")?,
                    _ => {},
                }
                if c.abs() != 1 {
                    write!(f, "{}", c.abs())?;
                }
                write!(f, "{}", axis)?;
                first = false;
            }
            let t = self.tran[row];
            if t != 0 {
                let gcd = t.gcd(&DEN);
                write!(f, "+{}/{}", t / gcd, DEN / gcd)?;
            }
        }
        Ok(())
    }
}

impl<'a> From<&'a [[i32; 3]; 3]> for SymOp {
    fn from(m: &'a [[i32; 3]; 3]) -> Self
    { SymOp::new(*m, [0; 3]) }
}

fn reduce_tran(tran: [i32; 3]) -> [i32; 3]
{
    let out = [tran[0].mod_floor(&DEN), tran[1].mod_floor(&DEN), tran[2].mod_floor(&DEN)];
    debug_assert!(out.iter().all(|&x| 0 <= x && x < DEN));
    out
}

fn det(m: &[[i32; 3]; 3]) -> i32
{
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Parse one component such as `-x+1/2` or `x-y`.
///
/// Returns the coefficients of `x, y, z` and the translation in units of `1/DEN`.
fn parse_component(expr: &str) -> Result<([i32; 3], i32), String>
{
    let mut coeffs = [0; 3];
    let mut tran = 0;
    let mut empty = true;

    let mut chars = expr.chars().filter(|c| !c.is_whitespace()).peekable();
    while let Some(c) = chars.next() {
        let (sign, c) = match c {
            '-' => (-1, chars.next()),
            '+' => (1, chars.next()),
            c => (1, Some(c)),
        };
        let c = c.ok_or_else(|| format!("dangling sign in {:?}", expr))?;

        match c.to_ascii_lowercase() {
            axis @ 'x'..='z' => {
                let i = (axis as u8 - b'x') as usize;
                if coeffs[i] != 0 {
                    return Err(format!("axis {} appears twice in {:?}", axis, expr));
                }
                coeffs[i] = sign;
            },
            d if d.is_ascii_digit() || d == '.' => {
                let mut number = d.to_string();
                while let Some(&c) = chars.peek() {
                    if !(c.is_ascii_digit() || c == '.' || c == '/') {
                        break;
                    }
                    number.push(c);
                    chars.next();
                }
                tran += sign * parse_fraction(&number)?;
            },
            other => return Err(format!("unexpected character {:?} in {:?}", other, expr)),
        }
        empty = false;
    }

    match empty {
        true => Err("empty component".to_string()),
        false => Ok((coeffs, tran)),
    }
}

/// Parse `1/2`, `3/4` or `0.5` into units of `1/DEN`.
fn parse_fraction(s: &str) -> Result<i32, String>
{
    let bad = || format!("cannot parse translation {:?}", s);
    let value = match s.find('/') {
        None => s.parse::<f64>().map_err(|_| bad())?,
        Some(pos) => {
            let num = s[..pos].parse::<f64>().map_err(|_| bad())?;
            let den = s[pos + 1..].parse::<f64>().map_err(|_| bad())?;
            if den == 0.0 {
                return Err(bad());
            }
            num / den
        },
    };
    Tol(1e-4).unfloat(value * f64::from(DEN))
        .ok_or_else(|| format!("translation {} is not a multiple of 1/{}", s, DEN))
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn triplet_parse() {
        let op = SymOp::from_triplet("-y+1/2, x-y, z+1/3").unwrap();
        assert_eq!(op.rot(), &[[0, -1, 0], [1, -1, 0], [0, 0, 1]]);
        assert_eq!(op.tran(), [12, 0, 8]);

        // leading translations and negative translations
        let op = SymOp::from_triplet("1/2+X,-1/4-y,-z").unwrap();
        assert_eq!(op.rot(), &[[1, 0, 0], [0, -1, 0], [0, 0, -1]]);
        assert_eq!(op.tran(), [12, 18, 0]);

        assert_eq!(SymOp::from_triplet("x,y,z+0.5").unwrap().tran(), [0, 0, 12]);
    }

    #[test]
    fn triplet_errors() {
        assert!(SymOp::from_triplet("x,y").is_err());
        assert!(SymOp::from_triplet("x,y,z+1/5").is_err());
        assert!(SymOp::from_triplet("x,x,z").is_err());
        assert!(SymOp::from_triplet("x+x,y,z").is_err());
        assert!(SymOp::from_triplet("x,y,-").is_err());
        assert!(SymOp::from_triplet("x,y,w").is_err());
        assert!(SymOp::from_triplet("x,y,").is_err());
    }

    #[test]
    fn triplet_display() {
        for &s in &["x,y,z", "-y+1/2,x+1/2,z+3/4", "x-y,x,z+1/6", "-x,-x+y,-z+1/3"] {
            let op = SymOp::from_triplet(s).unwrap();
            assert_eq!(op.to_string(), s);
            assert_eq!(SymOp::from_triplet(&op.to_string()).unwrap(), op);
        }
    }

    #[test]
    fn hkl_transform() {
        let op = SymOp::from_triplet("-y,x,z").unwrap();
        // rows of R are (0,-1,0), (1,0,0), (0,0,1); H R = (k, -h, l)
        assert_eq!(op.apply_to_hkl(&[1, 2, 3]), [2, -1, 3]);

        let op = SymOp::from_triplet("-x,y+1/2,-z").unwrap();
        assert_eq!(op.apply_to_hkl(&[1, 2, 3]), [-1, 2, -3]);
        assert_close!(op.phase_shift(&[1, 2, 3]), -2.0 * ::std::f64::consts::PI);
        assert_close!(op.phase_shift(&[0, 1, 0]), -::std::f64::consts::PI);
    }

    #[test]
    fn compose_order() {
        // two operations that don't commute
        let xy = SymOp::from_triplet("y,x,z").unwrap();
        let zx = SymOp::from_triplet("z,y,x+1/2").unwrap();

        let h = [1, 2, 3];
        // Miller indices transform contravariantly to positions,
        // so composition reverses the order of application.
        let both = xy.then(&zx);
        assert_eq!(both, zx.of(&xy));
        assert_eq!(both.apply_to_hkl(&h), xy.apply_to_hkl(&zx.apply_to_hkl(&h)));
        assert_eq!(both.to_string(), "z,x,y+1/2");
    }

    #[test]
    fn translation_reduced() {
        let screw = SymOp::from_triplet("-y,x-y,z+1/3").unwrap();
        let mut acc = SymOp::eye();
        for _ in 0..3 {
            acc = acc.then(&screw);
        }
        assert!(acc.is_identity());
    }
}
