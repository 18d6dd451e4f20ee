/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Plain-text reflection files written by Precognition.
//!
//! Two layouts are understood, distinguished by file extension:
//!
//! * `.hkl`: merged Laue data, `H K L F+ SigF+ F- SigF-`
//! * `.ii`: integrated intensities,
//!   `H K L Multiplicity X Y Resolution Wavelength I SigI`
//!
//! Tables can also be dumped in full as tab-separated text, which keeps
//! derived columns that the fixed layouts have no room for.

#[macro_use] extern crate log;
#[macro_use] extern crate itertools;
#[macro_use] extern crate failure;
#[cfg(test)] #[macro_use] extern crate rspace_assert_close;

pub type FailResult<T> = Result<T, ::failure::Error>;

mod precognition;
mod tsv;

pub use crate::precognition::{Format, Metadata, read, write, load, save};
pub use crate::tsv::write_tsv;
