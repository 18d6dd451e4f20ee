/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Built-in provider of space groups in their standard settings.
//!
//! All 230 space groups, in the settings of International Tables volume A:
//! unique axis b for monoclinic groups, origin choice 1 where two are
//! tabulated, and hexagonal axes for the rhombohedral groups.
//!
//! Each entry lists generators as `x,y,z` triplets; the full set of
//! operations is obtained by closure.

use crate::errors::{ConfigurationError, UnknownSpaceGroupError};
use crate::{SpaceGroup, GroupOps, SymOp, FailResult};

use ::std::collections::HashMap;

struct Entry {
    number: u16,
    hm: &'static str,
    aliases: &'static [&'static str],
    generators: &'static [&'static str],
}

const A_CENTER: &str = "x,y+1/2,z+1/2";
const C_CENTER: &str = "x+1/2,y+1/2,z";
const I_CENTER: &str = "x+1/2,y+1/2,z+1/2";
const R_CENTER: &str = "x+2/3,y+1/3,z+1/3";
const F_CENTER_A: &str = A_CENTER;
const F_CENTER_B: &str = "x+1/2,y,z+1/2";

const ENTRIES: &[Entry] = &[
    Entry { number: 1, hm: "P 1", aliases: &[], generators: &[] },
    Entry { number: 2, hm: "P -1", aliases: &[], generators: &["-x,-y,-z"] },
    Entry { number: 3, hm: "P 1 2 1", aliases: &["P 2"], generators: &["-x,y,-z"] },
    Entry { number: 4, hm: "P 1 21 1", aliases: &["P 21"], generators: &["-x,y+1/2,-z"] },
    Entry { number: 5, hm: "C 1 2 1", aliases: &["C 2"], generators: &["-x,y,-z", C_CENTER] },
    Entry { number: 6, hm: "P 1 m 1", aliases: &["P m"], generators: &["x,-y,z"] },
    Entry { number: 7, hm: "P 1 c 1", aliases: &["P c"], generators: &["x,-y,z+1/2"] },
    Entry { number: 8, hm: "C 1 m 1", aliases: &["C m"], generators: &["x,-y,z", C_CENTER] },
    Entry { number: 9, hm: "C 1 c 1", aliases: &["C c"], generators: &["x,-y,z+1/2", C_CENTER] },
    Entry { number: 10, hm: "P 1 2/m 1", aliases: &["P 2/m"], generators: &["-x,y,-z", "-x,-y,-z"] },
    Entry { number: 11, hm: "P 1 21/m 1", aliases: &["P 21/m"], generators: &["-x,y+1/2,-z", "-x,-y,-z"] },
    Entry { number: 12, hm: "C 1 2/m 1", aliases: &["C 2/m"], generators: &["-x,y,-z", "-x,-y,-z", C_CENTER] },
    Entry { number: 13, hm: "P 1 2/c 1", aliases: &["P 2/c"], generators: &["-x,y,-z+1/2", "-x,-y,-z"] },
    Entry { number: 14, hm: "P 1 21/c 1", aliases: &["P 21/c"], generators: &["-x,y+1/2,-z+1/2", "-x,-y,-z"] },
    Entry { number: 15, hm: "C 1 2/c 1", aliases: &["C 2/c"], generators: &["-x,y,-z+1/2", "-x,-y,-z", C_CENTER] },
    Entry { number: 16, hm: "P 2 2 2", aliases: &[], generators: &["-x,-y,z", "-x,y,-z"] },
    Entry { number: 17, hm: "P 2 2 21", aliases: &[], generators: &["-x,-y,z+1/2", "x,-y,-z"] },
    Entry { number: 18, hm: "P 21 21 2", aliases: &[], generators: &["-x,-y,z", "x+1/2,-y+1/2,-z"] },
    Entry { number: 19, hm: "P 21 21 21", aliases: &[], generators: &["-x+1/2,-y,z+1/2", "-x,y+1/2,-z+1/2"] },
    Entry { number: 20, hm: "C 2 2 21", aliases: &[], generators: &["-x,-y,z+1/2", "-x,y,-z+1/2", C_CENTER] },
    Entry { number: 21, hm: "C 2 2 2", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", C_CENTER] },
    Entry { number: 22, hm: "F 2 2 2", aliases: &[], generators: &["-x,-y,z", "-x,y,-z", F_CENTER_A, F_CENTER_B] },
    Entry { number: 23, hm: "I 2 2 2", aliases: &[], generators: &["-x,-y,z", "-x,y,-z", I_CENTER] },
    Entry { number: 24, hm: "I 21 21 21", aliases: &[], generators: &["-x,-y+1/2,z", "x,-y,-z+1/2", I_CENTER] },
    Entry { number: 25, hm: "P m m 2", aliases: &[], generators: &["-x,-y,z", "-x,y,z"] },
    Entry { number: 26, hm: "P m c 21", aliases: &[], generators: &["-x,-y,z+1/2", "-x,y,z"] },
    Entry { number: 27, hm: "P c c 2", aliases: &[], generators: &["-x,-y,z", "-x,y,z+1/2"] },
    Entry { number: 28, hm: "P m a 2", aliases: &[], generators: &["-x,-y,z", "-x+1/2,y,z"] },
    Entry { number: 29, hm: "P c a 21", aliases: &[], generators: &["-x,-y,z+1/2", "-x+1/2,y,z+1/2"] },
    Entry { number: 30, hm: "P n c 2", aliases: &[], generators: &["-x,-y,z", "-x,y+1/2,z+1/2"] },
    Entry { number: 31, hm: "P m n 21", aliases: &[], generators: &["-x+1/2,-y,z+1/2", "-x,y,z"] },
    Entry { number: 32, hm: "P b a 2", aliases: &[], generators: &["-x,-y,z", "-x+1/2,y+1/2,z"] },
    Entry { number: 33, hm: "P n a 21", aliases: &[], generators: &["-x,-y,z+1/2", "-x+1/2,y+1/2,z+1/2"] },
    Entry { number: 34, hm: "P n n 2", aliases: &[], generators: &["-x,-y,z", "-x+1/2,y+1/2,z+1/2"] },
    Entry { number: 35, hm: "C m m 2", aliases: &[], generators: &["-x,-y,z", "-x,y,z", C_CENTER] },
    Entry { number: 36, hm: "C m c 21", aliases: &[], generators: &["-x,-y,z+1/2", "-x,y,z", C_CENTER] },
    Entry { number: 37, hm: "C c c 2", aliases: &[], generators: &["-x,-y,z", "-x,y,z+1/2", C_CENTER] },
    Entry { number: 38, hm: "A m m 2", aliases: &[], generators: &["-x,-y,z", "-x,y,z", A_CENTER] },
    Entry { number: 39, hm: "A b m 2", aliases: &["A e m 2"], generators: &["-x,-y,z", "-x,y+1/2,z", A_CENTER] },
    Entry { number: 40, hm: "A m a 2", aliases: &[], generators: &["-x,-y,z", "-x+1/2,y,z", A_CENTER] },
    Entry { number: 41, hm: "A b a 2", aliases: &["A e a 2"], generators: &["-x,-y,z", "-x+1/2,y+1/2,z", A_CENTER] },
    Entry { number: 42, hm: "F m m 2", aliases: &[], generators: &["-x,-y,z", "-x,y,z", F_CENTER_A, F_CENTER_B] },
    Entry { number: 43, hm: "F d d 2", aliases: &[], generators: &["-x,-y,z", "-x+1/4,y+1/4,z+1/4", F_CENTER_A, F_CENTER_B] },
    Entry { number: 44, hm: "I m m 2", aliases: &[], generators: &["-x,-y,z", "-x,y,z", I_CENTER] },
    Entry { number: 45, hm: "I b a 2", aliases: &[], generators: &["-x,-y,z", "-x,y,z+1/2", I_CENTER] },
    Entry { number: 46, hm: "I m a 2", aliases: &[], generators: &["-x,-y,z", "-x+1/2,y,z", I_CENTER] },
    Entry { number: 47, hm: "P m m m", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", "-x,-y,-z"] },
    Entry { number: 48, hm: "P n n n", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", "-x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 49, hm: "P c c m", aliases: &[], generators: &["-x,-y,z", "x,-y,-z+1/2", "-x,-y,-z"] },
    Entry { number: 50, hm: "P b a n", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", "-x+1/2,-y+1/2,-z"] },
    Entry { number: 51, hm: "P m m a", aliases: &[], generators: &["-x+1/2,-y,z", "x+1/2,-y,-z", "-x,-y,-z"] },
    Entry { number: 52, hm: "P n n a", aliases: &[], generators: &["-x+1/2,-y,z", "x,-y+1/2,-z+1/2", "-x,-y,-z"] },
    Entry { number: 53, hm: "P m n a", aliases: &[], generators: &["-x+1/2,-y,z+1/2", "x,-y,-z", "-x,-y,-z"] },
    Entry { number: 54, hm: "P c c a", aliases: &[], generators: &["-x+1/2,-y,z", "x+1/2,-y,-z+1/2", "-x,-y,-z"] },
    Entry { number: 55, hm: "P b a m", aliases: &[], generators: &["-x,-y,z", "x+1/2,-y+1/2,-z", "-x,-y,-z"] },
    Entry { number: 56, hm: "P c c n", aliases: &[], generators: &["-x+1/2,-y+1/2,z", "x+1/2,-y,-z+1/2", "-x,-y,-z"] },
    Entry { number: 57, hm: "P b c m", aliases: &[], generators: &["-x,-y,z+1/2", "x,-y+1/2,-z", "-x,-y,-z"] },
    Entry { number: 58, hm: "P n n m", aliases: &[], generators: &["-x,-y,z", "x+1/2,-y+1/2,-z+1/2", "-x,-y,-z"] },
    Entry { number: 59, hm: "P m m n", aliases: &[], generators: &["-x,-y,z", "x+1/2,-y+1/2,-z", "-x+1/2,-y+1/2,-z"] },
    Entry { number: 60, hm: "P b c n", aliases: &[], generators: &["-x+1/2,-y+1/2,z+1/2", "x+1/2,-y+1/2,-z", "-x,-y,-z"] },
    Entry { number: 61, hm: "P b c a", aliases: &[], generators: &["-x+1/2,-y,z+1/2", "x+1/2,-y+1/2,-z", "-x,-y,-z"] },
    Entry { number: 62, hm: "P n m a", aliases: &[], generators: &["-x+1/2,-y,z+1/2", "-x,y+1/2,-z", "-x,-y,-z"] },
    Entry { number: 63, hm: "C m c m", aliases: &[], generators: &["-x,-y,z+1/2", "x,-y,-z", "-x,-y,-z", C_CENTER] },
    Entry { number: 64, hm: "C m c a", aliases: &["C m c e"], generators: &["-x,-y+1/2,z+1/2", "x,-y,-z", "-x,-y,-z", C_CENTER] },
    Entry { number: 65, hm: "C m m m", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", "-x,-y,-z", C_CENTER] },
    Entry { number: 66, hm: "C c c m", aliases: &[], generators: &["-x,-y,z", "x,-y,-z+1/2", "-x,-y,-z", C_CENTER] },
    Entry { number: 67, hm: "C m m a", aliases: &["C m m e"], generators: &["-x,-y+1/2,z", "x,-y,-z", "-x,-y,-z", C_CENTER] },
    Entry { number: 68, hm: "C c c a", aliases: &["C c c e"], generators: &["-x,-y,z", "x,-y,-z", "-x,-y+1/2,-z+1/2", C_CENTER] },
    Entry { number: 69, hm: "F m m m", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", "-x,-y,-z", F_CENTER_A, F_CENTER_B] },
    Entry { number: 70, hm: "F d d d", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", "-x+1/4,-y+1/4,-z+1/4", F_CENTER_A, F_CENTER_B] },
    Entry { number: 71, hm: "I m m m", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", "-x,-y,-z", I_CENTER] },
    Entry { number: 72, hm: "I b a m", aliases: &[], generators: &["-x,-y,z", "x,-y,-z+1/2", "-x,-y,-z", I_CENTER] },
    Entry { number: 73, hm: "I b c a", aliases: &[], generators: &["-x,-y+1/2,z", "x,-y,-z+1/2", "-x,-y,-z", I_CENTER] },
    Entry { number: 74, hm: "I m m a", aliases: &[], generators: &["-x,-y+1/2,z", "x,-y,-z", "-x,-y,-z", I_CENTER] },
    Entry { number: 75, hm: "P 4", aliases: &[], generators: &["-y,x,z"] },
    Entry { number: 76, hm: "P 41", aliases: &[], generators: &["-y,x,z+1/4"] },
    Entry { number: 77, hm: "P 42", aliases: &[], generators: &["-y,x,z+1/2"] },
    Entry { number: 78, hm: "P 43", aliases: &[], generators: &["-y,x,z+3/4"] },
    Entry { number: 79, hm: "I 4", aliases: &[], generators: &["-y,x,z", I_CENTER] },
    Entry { number: 80, hm: "I 41", aliases: &[], generators: &["-y,x+1/2,z+1/4", I_CENTER] },
    Entry { number: 81, hm: "P -4", aliases: &[], generators: &["y,-x,-z"] },
    Entry { number: 82, hm: "I -4", aliases: &[], generators: &["y,-x,-z", I_CENTER] },
    Entry { number: 83, hm: "P 4/m", aliases: &[], generators: &["-y,x,z", "-x,-y,-z"] },
    Entry { number: 84, hm: "P 42/m", aliases: &[], generators: &["-y,x,z+1/2", "-x,-y,-z"] },
    Entry { number: 85, hm: "P 4/n", aliases: &[], generators: &["-y+1/2,x+1/2,z", "-x+1/2,-y+1/2,-z"] },
    Entry { number: 86, hm: "P 42/n", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/2", "-x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 87, hm: "I 4/m", aliases: &[], generators: &["-y,x,z", "-x,-y,-z", I_CENTER] },
    Entry { number: 88, hm: "I 41/a", aliases: &[], generators: &["-y,x+1/2,z+1/4", "-x,-y+1/2,-z+1/4", I_CENTER] },
    Entry { number: 89, hm: "P 4 2 2", aliases: &[], generators: &["-y,x,z", "-x,y,-z"] },
    Entry { number: 90, hm: "P 4 21 2", aliases: &[], generators: &["-y+1/2,x+1/2,z", "x+1/2,-y+1/2,-z"] },
    Entry { number: 91, hm: "P 41 2 2", aliases: &[], generators: &["-y,x,z+1/4", "x,-y,-z+1/2"] },
    Entry { number: 92, hm: "P 41 21 2", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/4", "x+1/2,-y+1/2,-z+3/4"] },
    Entry { number: 93, hm: "P 42 2 2", aliases: &[], generators: &["-y,x,z+1/2", "x,-y,-z"] },
    Entry { number: 94, hm: "P 42 21 2", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/2", "x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 95, hm: "P 43 2 2", aliases: &[], generators: &["-y,x,z+3/4", "x,-y,-z+1/2"] },
    Entry { number: 96, hm: "P 43 21 2", aliases: &[], generators: &["-y+1/2,x+1/2,z+3/4", "x+1/2,-y+1/2,-z+1/4"] },
    Entry { number: 97, hm: "I 4 2 2", aliases: &[], generators: &["-y,x,z", "x,-y,-z", I_CENTER] },
    Entry { number: 98, hm: "I 41 2 2", aliases: &[], generators: &["-y,x+1/2,z+1/4", "x,-y+1/2,-z+1/4", I_CENTER] },
    Entry { number: 99, hm: "P 4 m m", aliases: &[], generators: &["-y,x,z", "-x,y,z"] },
    Entry { number: 100, hm: "P 4 b m", aliases: &[], generators: &["-y,x,z", "-x+1/2,y+1/2,z"] },
    Entry { number: 101, hm: "P 42 c m", aliases: &[], generators: &["-y,x,z+1/2", "-x,y,z+1/2"] },
    Entry { number: 102, hm: "P 42 n m", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/2", "-x+1/2,y+1/2,z+1/2"] },
    Entry { number: 103, hm: "P 4 c c", aliases: &[], generators: &["-y,x,z", "-x,y,z+1/2"] },
    Entry { number: 104, hm: "P 4 n c", aliases: &[], generators: &["-y,x,z", "-x+1/2,y+1/2,z+1/2"] },
    Entry { number: 105, hm: "P 42 m c", aliases: &[], generators: &["-y,x,z+1/2", "-x,y,z"] },
    Entry { number: 106, hm: "P 42 b c", aliases: &[], generators: &["-y,x,z+1/2", "-x+1/2,y+1/2,z"] },
    Entry { number: 107, hm: "I 4 m m", aliases: &[], generators: &["-y,x,z", "-x,y,z", I_CENTER] },
    Entry { number: 108, hm: "I 4 c m", aliases: &[], generators: &["-y,x,z", "-x,y,z+1/2", I_CENTER] },
    Entry { number: 109, hm: "I 41 m d", aliases: &[], generators: &["-y,x+1/2,z+1/4", "-x,y,z", I_CENTER] },
    Entry { number: 110, hm: "I 41 c d", aliases: &[], generators: &["-y,x+1/2,z+1/4", "-x,y,z+1/2", I_CENTER] },
    Entry { number: 111, hm: "P -4 2 m", aliases: &[], generators: &["y,-x,-z", "x,-y,-z"] },
    Entry { number: 112, hm: "P -4 2 c", aliases: &[], generators: &["y,-x,-z", "x,-y,-z+1/2"] },
    Entry { number: 113, hm: "P -4 21 m", aliases: &[], generators: &["y,-x,-z", "x+1/2,-y+1/2,-z"] },
    Entry { number: 114, hm: "P -4 21 c", aliases: &[], generators: &["y,-x,-z", "x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 115, hm: "P -4 m 2", aliases: &[], generators: &["y,-x,-z", "-x,y,z"] },
    Entry { number: 116, hm: "P -4 c 2", aliases: &[], generators: &["y,-x,-z", "-x,y,z+1/2"] },
    Entry { number: 117, hm: "P -4 b 2", aliases: &[], generators: &["y,-x,-z", "-x+1/2,y+1/2,z"] },
    Entry { number: 118, hm: "P -4 n 2", aliases: &[], generators: &["y,-x,-z", "-x+1/2,y+1/2,z+1/2"] },
    Entry { number: 119, hm: "I -4 m 2", aliases: &[], generators: &["y,-x,-z", "-x,y,z", I_CENTER] },
    Entry { number: 120, hm: "I -4 c 2", aliases: &[], generators: &["y,-x,-z", "-x,y,z+1/2", I_CENTER] },
    Entry { number: 121, hm: "I -4 2 m", aliases: &[], generators: &["y,-x,-z", "x,-y,-z", I_CENTER] },
    Entry { number: 122, hm: "I -4 2 d", aliases: &[], generators: &["y,-x,-z", "x,-y+1/2,-z+1/4", I_CENTER] },
    Entry { number: 123, hm: "P 4/m m m", aliases: &[], generators: &["-y,x,z", "x,-y,-z", "-x,-y,-z"] },
    Entry { number: 124, hm: "P 4/m c c", aliases: &[], generators: &["-y,x,z", "x,-y,-z+1/2", "-x,-y,-z"] },
    Entry { number: 125, hm: "P 4/n b m", aliases: &[], generators: &["-y,x,z", "x,-y,-z", "-x+1/2,-y+1/2,-z"] },
    Entry { number: 126, hm: "P 4/n n c", aliases: &[], generators: &["-y,x,z", "x,-y,-z", "-x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 127, hm: "P 4/m b m", aliases: &[], generators: &["-y,x,z", "x+1/2,-y+1/2,-z", "-x,-y,-z"] },
    Entry { number: 128, hm: "P 4/m n c", aliases: &[], generators: &["-y,x,z", "x+1/2,-y+1/2,-z+1/2", "-x,-y,-z"] },
    Entry { number: 129, hm: "P 4/n m m", aliases: &[], generators: &["-y+1/2,x+1/2,z", "x+1/2,-y+1/2,-z", "-x+1/2,-y+1/2,-z"] },
    Entry { number: 130, hm: "P 4/n c c", aliases: &[], generators: &["-y+1/2,x+1/2,z", "x+1/2,-y+1/2,-z+1/2", "-x+1/2,-y+1/2,-z"] },
    Entry { number: 131, hm: "P 42/m m c", aliases: &[], generators: &["-y,x,z+1/2", "x,-y,-z", "-x,-y,-z"] },
    Entry { number: 132, hm: "P 42/m c m", aliases: &[], generators: &["-y,x,z+1/2", "x,-y,-z+1/2", "-x,-y,-z"] },
    Entry { number: 133, hm: "P 42/n b c", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/2", "x,-y,-z+1/2", "-x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 134, hm: "P 42/n n m", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/2", "x,-y,-z", "-x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 135, hm: "P 42/m b c", aliases: &[], generators: &["-y,x,z+1/2", "x+1/2,-y+1/2,-z", "-x,-y,-z"] },
    Entry { number: 136, hm: "P 42/m n m", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/2", "x+1/2,-y+1/2,-z+1/2", "-x,-y,-z"] },
    Entry { number: 137, hm: "P 42/n m c", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/2", "x+1/2,-y+1/2,-z+1/2", "-x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 138, hm: "P 42/n c m", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/2", "x+1/2,-y+1/2,-z", "-x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 139, hm: "I 4/m m m", aliases: &[], generators: &["-y,x,z", "x,-y,-z", "-x,-y,-z", I_CENTER] },
    Entry { number: 140, hm: "I 4/m c m", aliases: &[], generators: &["-y,x,z", "x,-y,-z+1/2", "-x,-y,-z", I_CENTER] },
    Entry { number: 141, hm: "I 41/a m d", aliases: &[], generators: &["-y,x+1/2,z+1/4", "x,-y+1/2,-z+1/4", "-x,-y+1/2,-z+1/4", I_CENTER] },
    Entry { number: 142, hm: "I 41/a c d", aliases: &[], generators: &["-y,x+1/2,z+1/4", "x+1/2,-y,-z+1/4", "-x,-y+1/2,-z+1/4", I_CENTER] },
    Entry { number: 143, hm: "P 3", aliases: &[], generators: &["-y,x-y,z"] },
    Entry { number: 144, hm: "P 31", aliases: &[], generators: &["-y,x-y,z+1/3"] },
    Entry { number: 145, hm: "P 32", aliases: &[], generators: &["-y,x-y,z+2/3"] },
    Entry { number: 146, hm: "R 3", aliases: &["H 3"], generators: &["-y,x-y,z", R_CENTER] },
    Entry { number: 147, hm: "P -3", aliases: &[], generators: &["-y,x-y,z", "-x,-y,-z"] },
    Entry { number: 148, hm: "R -3", aliases: &["H -3"], generators: &["-y,x-y,z", "-x,-y,-z", R_CENTER] },
    Entry { number: 149, hm: "P 3 1 2", aliases: &[], generators: &["-y,x-y,z", "-y,-x,-z"] },
    Entry { number: 150, hm: "P 3 2 1", aliases: &[], generators: &["-y,x-y,z", "y,x,-z"] },
    Entry { number: 151, hm: "P 31 1 2", aliases: &[], generators: &["-y,x-y,z+1/3", "-y,-x,-z+2/3"] },
    Entry { number: 152, hm: "P 31 2 1", aliases: &[], generators: &["-y,x-y,z+1/3", "y,x,-z"] },
    Entry { number: 153, hm: "P 32 1 2", aliases: &[], generators: &["-y,x-y,z+2/3", "-y,-x,-z+1/3"] },
    Entry { number: 154, hm: "P 32 2 1", aliases: &[], generators: &["-y,x-y,z+2/3", "y,x,-z"] },
    Entry { number: 155, hm: "R 3 2", aliases: &["H 3 2"], generators: &["-y,x-y,z", "y,x,-z", R_CENTER] },
    Entry { number: 156, hm: "P 3 m 1", aliases: &[], generators: &["-y,x-y,z", "-y,-x,z"] },
    Entry { number: 157, hm: "P 3 1 m", aliases: &[], generators: &["-y,x-y,z", "y,x,z"] },
    Entry { number: 158, hm: "P 3 c 1", aliases: &[], generators: &["-y,x-y,z", "-y,-x,z+1/2"] },
    Entry { number: 159, hm: "P 3 1 c", aliases: &[], generators: &["-y,x-y,z", "y,x,z+1/2"] },
    Entry { number: 160, hm: "R 3 m", aliases: &["H 3 m"], generators: &["-y,x-y,z", "-y,-x,z", R_CENTER] },
    Entry { number: 161, hm: "R 3 c", aliases: &["H 3 c"], generators: &["-y,x-y,z", "-y,-x,z+1/2", R_CENTER] },
    Entry { number: 162, hm: "P -3 1 m", aliases: &[], generators: &["-y,x-y,z", "-y,-x,-z", "-x,-y,-z"] },
    Entry { number: 163, hm: "P -3 1 c", aliases: &[], generators: &["-y,x-y,z", "-y,-x,-z+1/2", "-x,-y,-z"] },
    Entry { number: 164, hm: "P -3 m 1", aliases: &[], generators: &["-y,x-y,z", "y,x,-z", "-x,-y,-z"] },
    Entry { number: 165, hm: "P -3 c 1", aliases: &[], generators: &["-y,x-y,z", "y,x,-z+1/2", "-x,-y,-z"] },
    Entry { number: 166, hm: "R -3 m", aliases: &["H -3 m"], generators: &["-y,x-y,z", "y,x,-z", "-x,-y,-z", R_CENTER] },
    Entry { number: 167, hm: "R -3 c", aliases: &["H -3 c"], generators: &["-y,x-y,z", "y,x,-z+1/2", "-x,-y,-z", R_CENTER] },
    Entry { number: 168, hm: "P 6", aliases: &[], generators: &["-y,x-y,z", "-x,-y,z"] },
    Entry { number: 169, hm: "P 61", aliases: &[], generators: &["-y,x-y,z+1/3", "-x,-y,z+1/2"] },
    Entry { number: 170, hm: "P 65", aliases: &[], generators: &["x-y,x,z+5/6"] },
    Entry { number: 171, hm: "P 62", aliases: &[], generators: &["x-y,x,z+1/3"] },
    Entry { number: 172, hm: "P 64", aliases: &[], generators: &["x-y,x,z+2/3"] },
    Entry { number: 173, hm: "P 63", aliases: &[], generators: &["x-y,x,z+1/2"] },
    Entry { number: 174, hm: "P -6", aliases: &[], generators: &["-x+y,-x,-z"] },
    Entry { number: 175, hm: "P 6/m", aliases: &[], generators: &["x-y,x,z", "-x,-y,-z"] },
    Entry { number: 176, hm: "P 63/m", aliases: &[], generators: &["x-y,x,z+1/2", "-x,-y,-z"] },
    Entry { number: 177, hm: "P 6 2 2", aliases: &[], generators: &["-y,x-y,z", "-x,-y,z", "y,x,-z"] },
    Entry { number: 178, hm: "P 61 2 2", aliases: &[], generators: &["x-y,x,z+1/6", "-y,-x,-z+5/6"] },
    Entry { number: 179, hm: "P 65 2 2", aliases: &[], generators: &["x-y,x,z+5/6", "-y,-x,-z+1/6"] },
    Entry { number: 180, hm: "P 62 2 2", aliases: &[], generators: &["x-y,x,z+1/3", "-y,-x,-z+2/3"] },
    Entry { number: 181, hm: "P 64 2 2", aliases: &[], generators: &["x-y,x,z+2/3", "-y,-x,-z+1/3"] },
    Entry { number: 182, hm: "P 63 2 2", aliases: &[], generators: &["x-y,x,z+1/2", "-y,-x,-z+1/2"] },
    Entry { number: 183, hm: "P 6 m m", aliases: &[], generators: &["x-y,x,z", "y,x,z"] },
    Entry { number: 184, hm: "P 6 c c", aliases: &[], generators: &["x-y,x,z", "y,x,z+1/2"] },
    Entry { number: 185, hm: "P 63 c m", aliases: &[], generators: &["x-y,x,z+1/2", "y,x,z"] },
    Entry { number: 186, hm: "P 63 m c", aliases: &[], generators: &["x-y,x,z+1/2", "y,x,z+1/2"] },
    Entry { number: 187, hm: "P -6 m 2", aliases: &[], generators: &["-x+y,-x,-z", "-y,-x,-z"] },
    Entry { number: 188, hm: "P -6 c 2", aliases: &[], generators: &["-x+y,-x,-z+1/2", "-y,-x,-z"] },
    Entry { number: 189, hm: "P -6 2 m", aliases: &[], generators: &["-x+y,-x,-z", "y,x,z"] },
    Entry { number: 190, hm: "P -6 2 c", aliases: &[], generators: &["-x+y,-x,-z+1/2", "y,x,z+1/2"] },
    Entry { number: 191, hm: "P 6/m m m", aliases: &[], generators: &["-y,x-y,z", "-x,-y,z", "y,x,-z", "-x,-y,-z"] },
    Entry { number: 192, hm: "P 6/m c c", aliases: &[], generators: &["x-y,x,z", "-y,-x,-z+1/2", "-x,-y,-z"] },
    Entry { number: 193, hm: "P 63/m c m", aliases: &[], generators: &["x-y,x,z+1/2", "-y,-x,-z", "-x,-y,-z"] },
    Entry { number: 194, hm: "P 63/m m c", aliases: &[], generators: &["x-y,x,z+1/2", "-y,-x,-z+1/2", "-x,-y,-z"] },
    Entry { number: 195, hm: "P 2 3", aliases: &[], generators: &["-x,-y,z", "-x,y,-z", "z,x,y"] },
    Entry { number: 196, hm: "F 2 3", aliases: &[], generators: &["-x,-y,z", "-x,y,-z", "z,x,y", F_CENTER_A, F_CENTER_B] },
    Entry { number: 197, hm: "I 2 3", aliases: &[], generators: &["-x,-y,z", "-x,y,-z", "z,x,y", I_CENTER] },
    Entry { number: 198, hm: "P 21 3", aliases: &[], generators: &["-x+1/2,-y,z+1/2", "-x,y+1/2,-z+1/2", "z,x,y"] },
    Entry { number: 199, hm: "I 21 3", aliases: &[], generators: &["-x,-y+1/2,z", "x,-y,-z+1/2", "z,x,y", I_CENTER] },
    Entry { number: 200, hm: "P m -3", aliases: &[], generators: &["-x,-y,z", "-x,y,-z", "z,x,y", "-x,-y,-z"] },
    Entry { number: 201, hm: "P n -3", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", "z,x,y", "-x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 202, hm: "F m -3", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", "z,x,y", "-x,-y,-z", F_CENTER_A, F_CENTER_B] },
    Entry { number: 203, hm: "F d -3", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", "z,x,y", "-x+1/4,-y+1/4,-z+1/4", F_CENTER_A, F_CENTER_B] },
    Entry { number: 204, hm: "I m -3", aliases: &[], generators: &["-x,-y,z", "x,-y,-z", "z,x,y", "-x,-y,-z", I_CENTER] },
    Entry { number: 205, hm: "P a -3", aliases: &[], generators: &["-x+1/2,-y,z+1/2", "x+1/2,-y+1/2,-z", "z,x,y", "-x,-y,-z"] },
    Entry { number: 206, hm: "I a -3", aliases: &[], generators: &["-x,-y+1/2,z", "x,-y,-z+1/2", "z,x,y", "-x,-y,-z", I_CENTER] },
    Entry { number: 207, hm: "P 4 3 2", aliases: &[], generators: &["-x,-y,z", "-x,y,-z", "z,x,y", "y,x,-z"] },
    Entry { number: 208, hm: "P 42 3 2", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/2", "x,-y,-z", "z,x,y"] },
    Entry { number: 209, hm: "F 4 3 2", aliases: &[], generators: &["-y,x,z", "x,-y,-z", "z,x,y", F_CENTER_A, F_CENTER_B] },
    Entry { number: 210, hm: "F 41 3 2", aliases: &[], generators: &["-y+1/4,x+1/4,z+1/4", "x,-y,-z", "z,x,y", F_CENTER_A, F_CENTER_B] },
    Entry { number: 211, hm: "I 4 3 2", aliases: &[], generators: &["-x,-y,z", "-x,y,-z", "z,x,y", "y,x,-z", I_CENTER] },
    Entry { number: 212, hm: "P 43 3 2", aliases: &[], generators: &["-y+3/4,x+1/4,z+3/4", "x+1/2,-y+1/2,-z", "z,x,y"] },
    Entry { number: 213, hm: "P 41 3 2", aliases: &[], generators: &["-y+1/4,x+3/4,z+1/4", "x+1/2,-y+1/2,-z", "z,x,y"] },
    Entry { number: 214, hm: "I 41 3 2", aliases: &[], generators: &["-y+1/4,x+3/4,z+1/4", "x,-y,-z+1/2", "z,x,y", I_CENTER] },
    Entry { number: 215, hm: "P -4 3 m", aliases: &[], generators: &["y,-x,-z", "x,-y,-z", "z,x,y"] },
    Entry { number: 216, hm: "F -4 3 m", aliases: &[], generators: &["y,-x,-z", "x,-y,-z", "z,x,y", F_CENTER_A, F_CENTER_B] },
    Entry { number: 217, hm: "I -4 3 m", aliases: &[], generators: &["y,-x,-z", "x,-y,-z", "z,x,y", I_CENTER] },
    Entry { number: 218, hm: "P -4 3 n", aliases: &[], generators: &["y+1/2,-x+1/2,-z+1/2", "x,-y,-z", "z,x,y"] },
    Entry { number: 219, hm: "F -4 3 c", aliases: &[], generators: &["y,-x,-z+1/2", "x,-y,-z", "z,x,y", F_CENTER_A, F_CENTER_B] },
    Entry { number: 220, hm: "I -4 3 d", aliases: &[], generators: &["y+1/4,-x+3/4,-z+1/4", "x,-y,-z+1/2", "z,x,y", I_CENTER] },
    Entry { number: 221, hm: "P m -3 m", aliases: &[], generators: &["-y,x,z", "x,-y,-z", "z,x,y", "-x,-y,-z"] },
    Entry { number: 222, hm: "P n -3 n", aliases: &[], generators: &["-y,x,z", "x,-y,-z", "z,x,y", "-x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 223, hm: "P m -3 n", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/2", "x,-y,-z", "z,x,y", "-x,-y,-z"] },
    Entry { number: 224, hm: "P n -3 m", aliases: &[], generators: &["-y+1/2,x+1/2,z+1/2", "x,-y,-z", "z,x,y", "-x+1/2,-y+1/2,-z+1/2"] },
    Entry { number: 225, hm: "F m -3 m", aliases: &[], generators: &["-x,-y,z", "-x,y,-z", "z,x,y", "y,x,-z", "-x,-y,-z", F_CENTER_A, F_CENTER_B] },
    Entry { number: 226, hm: "F m -3 c", aliases: &[], generators: &["-y,x,z+1/2", "x,-y,-z", "z,x,y", "-x,-y,-z", F_CENTER_A, F_CENTER_B] },
    Entry { number: 227, hm: "F d -3 m", aliases: &[], generators: &["-y+1/4,x+1/4,z+1/4", "x,-y,-z", "z,x,y", "-x+1/4,-y+1/4,-z+1/4", F_CENTER_A, F_CENTER_B] },
    Entry { number: 228, hm: "F d -3 c", aliases: &[], generators: &["-y+1/4,x+1/4,z+1/4", "x,-y,-z", "z,x,y", "-x+1/4,-y+1/4,-z+3/4", F_CENTER_A, F_CENTER_B] },
    Entry { number: 229, hm: "I m -3 m", aliases: &[], generators: &["-x,-y,z", "-x,y,-z", "z,x,y", "y,x,-z", "-x,-y,-z", I_CENTER] },
    Entry { number: 230, hm: "I a -3 d", aliases: &[], generators: &["-y+1/4,x+3/4,z+1/4", "x,-y,-z+1/2", "z,x,y", "-x,-y,-z", I_CENTER] },
];

lazy_static! {
    static ref BY_NAME: HashMap<String, usize> = {
        let mut map = HashMap::new();
        for (index, entry) in ENTRIES.iter().enumerate() {
            map.insert(normalize(entry.hm), index);
            for alias in entry.aliases {
                map.insert(normalize(alias), index);
            }
        }
        map
    };
}

fn normalize(name: &str) -> String
{ name.chars().filter(|c| !c.is_whitespace()).flat_map(|c| c.to_uppercase()).collect() }

fn build(entry: &Entry) -> FailResult<SpaceGroup>
{
    let ops = GroupOps::from_triplets(entry.generators)?;
    Ok(SpaceGroup::new(entry.number, entry.hm, ops, SymOp::eye())?)
}

/// Numbers of all space groups in the catalog, ascending.
pub fn numbers() -> impl Iterator<Item = u16>
{ ENTRIES.iter().map(|e| e.number) }

/// All space groups in the catalog, ordered by number.
pub fn spacegroups() -> FailResult<Vec<SpaceGroup>>
{ ENTRIES.iter().map(build).collect() }

/// # Errors
///
/// `ConfigurationError` for numbers outside `1..=230`.
pub fn find_spacegroup_by_number(number: i64) -> FailResult<SpaceGroup>
{
    if !(1..=230).contains(&number) {
        throw!(ConfigurationError::new(format!("space group number {} is not in 1..=230", number)));
    }
    match ENTRIES.iter().find(|e| i64::from(e.number) == number) {
        Some(entry) => build(entry),
        None => throw!(UnknownSpaceGroupError { name: format!("#{}", number) }),
    }
}

/// Look up a Hermann-Mauguin symbol.  Whitespace and case are ignored.
pub fn find_spacegroup_by_name(name: &str) -> FailResult<SpaceGroup>
{
    match BY_NAME.get(&normalize(name)) {
        Some(&index) => build(&ENTRIES[index]),
        None => throw!(UnknownSpaceGroupError { name: name.to_string() }),
    }
}

/// Look up either a number (`"19"`) or a symbol (`"P 21 21 21"`).
pub fn find_spacegroup(name_or_number: &str) -> FailResult<SpaceGroup>
{
    match name_or_number.trim().parse::<i64>() {
        Ok(number) => find_spacegroup_by_number(number),
        Err(_) => find_spacegroup_by_name(name_or_number),
    }
}

/// Identify the catalog group with exactly these operations, if any.
pub fn find_spacegroup_by_ops(ops: &GroupOps) -> FailResult<Option<SpaceGroup>>
{Ok({
    let mut found = None;
    for entry in ENTRIES {
        let sg = build(entry)?;
        if sg.operations().same_ops_as(ops) {
            found = Some(sg);
            break;
        }
    }
    found
})}
