/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Conversions between (amplitude, phase) pairs and complex structure factors.
//!
//! Phases are always in degrees.

use crate::{Rect, Column, ColumnKind};

/// Map an angle in degrees into `(-180, 180]`.
pub fn canonical_phase(degrees: f64) -> f64
{
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    match wrapped == -180.0 {
        true => 180.0,
        false => wrapped,
    }
}

/// Build complex structure factors `F * exp(i * phi)`.
///
/// # Panics
///
/// Panics if the two slices differ in length.
pub fn to_structurefactor(sfamps: &[f64], phases: &[f64]) -> Vec<Rect>
{
    assert_eq!(sfamps.len(), phases.len());
    izip!(sfamps, phases)
        .map(|(&amp, &phase)| Rect::from_polar(amp, phase.to_radians()))
        .collect()
}

/// Split complex structure factors into amplitudes and phases.
///
/// Phases lie in `(-180, 180]`.
pub fn from_structurefactor(sfs: &[Rect]) -> (Vec<f64>, Vec<f64>)
{
    let amps = sfs.iter().map(|z| z.norm()).collect();
    let phases = sfs.iter().map(|z| canonical_phase(z.arg().to_degrees())).collect();
    (amps, phases)
}

/// Like [`from_structurefactor`], but produces table columns named
/// `F` (amplitudes) and `Phi` (phases).
pub fn from_structurefactor_columns(sfs: &[Rect]) -> (Column, Column)
{
    let (amps, phases) = from_structurefactor(sfs);
    (
        Column::floats("F", ColumnKind::SFAmplitude, amps),
        Column::floats("Phi", ColumnKind::Phase, phases),
    )
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn to_complex() {
        let sfs = to_structurefactor(&[2.0], &[90.0]);
        assert_close!(abs=1e-12, sfs[0].real, 0.0);
        assert_close!(sfs[0].imag, 2.0);
    }

    #[test]
    fn from_complex() {
        let (amps, phases) = from_structurefactor(&[Rect::new(0.0, 2.0)]);
        assert_close!(amps, vec![2.0]);
        assert_close!(phases, vec![90.0]);
    }

    #[test]
    fn phases_are_canonicalized() {
        let amps = [1.0, 3.0, 0.5, 2.0, 4.0];
        let phases = [-180.0, 540.0, -90.0, 359.0, 45.0];
        let (out_amps, out_phases) = from_structurefactor(&to_structurefactor(&amps, &phases));

        assert_close!(out_amps, amps.to_vec());
        for (&phase, &expected) in izip!(&out_phases, &[180.0, 180.0, -90.0, -1.0, 45.0]) {
            assert!(-180.0 < phase && phase <= 180.0);
            assert_phase_close!(phase, expected);
        }
    }

    #[test]
    fn canonical() {
        assert_eq!(canonical_phase(-180.0), 180.0);
        assert_eq!(canonical_phase(180.0), 180.0);
        assert_eq!(canonical_phase(540.0), 180.0);
        assert_eq!(canonical_phase(-190.0), 170.0);
        assert_eq!(canonical_phase(0.0), 0.0);
        assert_eq!(canonical_phase(-720.0), 0.0);
        assert_eq!(canonical_phase(270.0), -90.0);
    }

    #[test]
    fn columns() {
        let (f, phi) = from_structurefactor_columns(&[Rect::new(-3.0, 0.0)]);
        assert_eq!(f.name(), "F");
        assert_eq!(f.kind(), ColumnKind::SFAmplitude);
        assert_eq!(phi.name(), "Phi");
        assert_eq!(phi.kind(), ColumnKind::Phase);
        assert_close!(phi.as_floats().unwrap().to_vec(), vec![180.0]);
    }
}
