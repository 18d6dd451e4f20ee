/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Command line front end: logging, configuration and the commands behind
//! the `rspace-*` binaries.

extern crate rspace_symmetry;
extern crate rspace_reflections;
extern crate rspace_hkl_io;

extern crate ansi_term;
extern crate fern;
extern crate path_abs;
extern crate serde;
extern crate serde_yaml;
extern crate serde_ignored;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;
#[macro_use] extern crate failure;

macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e))
    }
}

pub type FailResult<T> = Result<T, ::failure::Error>;

mod logging;
mod config;
mod cmd;
pub mod entry_points;

pub use crate::logging::{GlobalLogger, ColorizedLevel};
pub use crate::config::{Settings, YamlRead, resolve_symmetry};
pub use crate::cmd::{run_hkl_to_asu, describe_spacegroup, AsuArgs};
