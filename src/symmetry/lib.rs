/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Crystallographic symmetry for reflection data.
//!
//! The central operation is [`hkl_to_asu`], which maps Miller indices onto
//! the reciprocal-space asymmetric unit of a space group using the CCP4
//! conventions, while recording the symmetry operation that was used.

#[macro_use] extern crate log;
#[macro_use] extern crate itertools;
#[macro_use] extern crate failure;
#[macro_use] extern crate lazy_static;
extern crate num_integer;
#[cfg(test)] #[macro_use] extern crate rspace_assert_close;

// FIXME copied from failure 1.0 prerelease; remove once actually released
macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e))
    }
}

/// A Miller index `(h, k, l)`.
pub type Hkl = [i32; 3];

pub type FailResult<T> = Result<T, ::failure::Error>;

mod errors;
mod util;
mod oper;
mod groupops;
mod spacegroup;
mod transform;
mod asu;
mod reduce;
mod analysis;
pub mod catalog;

//---------------------------
// public reexports; API

pub use crate::errors::{
    ConfigurationError,
    FatalReductionError,
    InvalidArgumentError,
    InvalidIndexError,
    TripletError,
    UnknownSpaceGroupError,
};

pub use crate::oper::symmop::{SymOp, DEN};
pub use crate::groupops::{GroupOps, Centering};
pub use crate::spacegroup::{SpaceGroup, SymmetrySource, Symmetry};

pub use crate::transform::{apply_to_hkl, phase_shift, hkls_from_floats};
pub use crate::asu::{AsuCase, CCP4_HKL_ASU, asu_case, in_asu};
pub use crate::reduce::{hkl_to_asu, hkl_to_asu_with_phase_shifts, AsuMapping, PhaseShifts};
pub use crate::analysis::{
    is_centric,
    compute_structurefactor_multiplicity,
    hkl_is_absent,
    ABSENCE_PHASE_TOL,
};
