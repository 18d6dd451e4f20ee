/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Hkl;

/// A space group definition that cannot be used.
///
/// This covers group numbers outside `1..=230` as well as internal lookup
/// tables that fail to resolve. Neither is recoverable by the caller.
#[derive(Debug, Fail)]
#[fail(display = "invalid space group configuration: {}", message)]
pub struct ConfigurationError {
    pub message: String,
}

impl ConfigurationError {
    pub(crate) fn new(message: impl Into<String>) -> Self
    { ConfigurationError { message: message.into() } }
}

/// A reflection had no image inside the asymmetric unit.
///
/// Every Miller index has an image in the ASU of its group, so this means
/// that the operation list is inconsistent with the space group number.
#[derive(Debug, Fail)]
#[fail(display = "reflection {:?} (row {}) has no image in the asymmetric unit of {}", hkl, row, spacegroup)]
pub struct FatalReductionError {
    pub row: usize,
    pub hkl: Hkl,
    pub spacegroup: String,
}

/// A Miller index component that is not an integer.
#[derive(Debug, Fail)]
#[fail(display = "Not nearly an integer Miller index: {} (row {})", value, row)]
pub struct InvalidIndexError {
    pub row: usize,
    pub value: f64,
}

/// A dynamically-typed argument was of the wrong kind.
#[derive(Debug, Fail)]
#[fail(display = "{} expected for parameter {}. Received object of type ({}) instead.", expected, parameter, received)]
pub struct InvalidArgumentError {
    pub parameter: String,
    pub expected: String,
    pub received: String,
}

#[derive(Debug, Fail)]
#[fail(display = "invalid symmetry operation {:?}: {}", triplet, reason)]
pub struct TripletError {
    pub triplet: String,
    pub reason: String,
}

#[derive(Debug, Fail)]
#[fail(display = "space group not available: {}", name)]
pub struct UnknownSpaceGroupError {
    pub name: String,
}
