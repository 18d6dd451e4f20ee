/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Reflection tables with crystallographic column semantics.
//!
//! A [`ReflectionTable`] is a column-oriented container whose rows are
//! keyed by Miller indices. Columns carry a [`ColumnKind`] tag that says
//! what the numbers mean (intensity, amplitude, phase, ...), which is what
//! lets symmetry operations treat e.g. phases and Friedel pairs correctly.

#[macro_use] extern crate log;
#[macro_use] extern crate itertools;
#[macro_use] extern crate failure;
#[cfg(test)] #[macro_use] extern crate rspace_assert_close;

macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e))
    }
}

pub type FailResult<T> = Result<T, ::failure::Error>;

mod complex;
mod structurefactor;
mod kind;
mod column;
mod table;
mod cell;

pub use crate::complex::Rect;
pub use crate::structurefactor::{
    to_structurefactor,
    from_structurefactor,
    from_structurefactor_columns,
    canonical_phase,
};
pub use crate::kind::{ColumnKind, Storage, CastRule};
pub use crate::column::{Column, ColumnData, ColumnError};
pub use crate::table::{ReflectionTable, MillerIndex};
pub use crate::cell::UnitCell;
