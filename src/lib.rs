/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Reciprocal-space symmetry for crystallographic reflection data.
//!
//! This crate only re-exports the workspace members:
//!
//! * [`symmetry`]: the space group catalog, operations, and reduction of
//!   Miller indices into the reciprocal asymmetric unit.
//! * [`reflections`]: column-typed reflection tables built on top of it.
//! * [`hkl_io`]: Precognition `.hkl`/`.ii` files.
//! * [`tasks`]: the command line programs.

pub use rspace_symmetry as symmetry;
pub use rspace_reflections as reflections;
pub use rspace_hkl_io as hkl_io;
pub use rspace_tasks as tasks;
