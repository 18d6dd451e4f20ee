/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{ColumnKind, Storage, CastRule};
use crate::FailResult;

/// The values of a column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(Vec<i32>),
    Float(Vec<f64>),
    Bool(Vec<bool>),
}

/// A named, tagged column of a reflection table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    kind: ColumnKind,
    data: ColumnData,
}

#[derive(Debug, Fail)]
pub enum ColumnError {
    #[fail(display = "column '{}': {} data cannot be stored in a column of kind {}", name, storage, kind)]
    WrongStorage { name: String, kind: ColumnKind, storage: &'static str },
    #[fail(display = "column '{}' cannot be cast from {} to {}", name, from, to)]
    BadCast { name: String, from: ColumnKind, to: ColumnKind },
    #[fail(display = "column '{}': value {} at row {} is not an integer", name, value, row)]
    NotIntegral { name: String, row: usize, value: f64 },
}

impl ColumnData {
    pub fn len(&self) -> usize
    {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn storage(&self) -> Storage
    {
        match self {
            ColumnData::Int(_) => Storage::Int,
            ColumnData::Float(_) => Storage::Float,
            ColumnData::Bool(_) => Storage::Bool,
        }
    }

    fn storage_name(&self) -> &'static str
    {
        match self {
            ColumnData::Int(_) => "integer",
            ColumnData::Float(_) => "floating point",
            ColumnData::Bool(_) => "boolean",
        }
    }

    fn select(&self, mask: &[bool]) -> ColumnData
    {
        fn go<T: Copy>(values: &[T], mask: &[bool]) -> Vec<T>
        { izip!(values, mask).filter(|&(_, &keep)| keep).map(|(&x, _)| x).collect() }

        match self {
            ColumnData::Int(v) => ColumnData::Int(go(v, mask)),
            ColumnData::Float(v) => ColumnData::Float(go(v, mask)),
            ColumnData::Bool(v) => ColumnData::Bool(go(v, mask)),
        }
    }

    fn swap_where(&mut self, other: &mut ColumnData, mask: &[bool])
    {
        fn go<T>(a: &mut [T], b: &mut [T], mask: &[bool])
        {
            for (a, b, &swap) in izip!(a, b, mask) {
                if swap {
                    std::mem::swap(a, b);
                }
            }
        }

        match (self, other) {
            (ColumnData::Int(a), ColumnData::Int(b)) => go(a, b, mask),
            (ColumnData::Float(a), ColumnData::Float(b)) => go(a, b, mask),
            (ColumnData::Bool(a), ColumnData::Bool(b)) => go(a, b, mask),
            _ => panic!("swap_where: mismatched storage"),
        }
    }
}

impl Column {
    /// # Errors
    ///
    /// Fails if the data's storage does not match `kind`.
    pub fn new(name: impl Into<String>, kind: ColumnKind, data: ColumnData) -> Result<Column, ColumnError>
    {
        let name = name.into();
        if data.storage() != kind.storage() {
            let storage = data.storage_name();
            return Err(ColumnError::WrongStorage { name, kind, storage });
        }
        Ok(Column { name, kind, data })
    }

    /// Build a column of a float-valued kind.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not stored as floats.
    pub fn floats(name: impl Into<String>, kind: ColumnKind, values: Vec<f64>) -> Column
    {
        assert_eq!(kind.storage(), Storage::Float, "{} is not a float kind", kind);
        Column { name: name.into(), kind, data: ColumnData::Float(values) }
    }

    /// Build a column of an integer-valued kind.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not stored as integers.
    pub fn ints(name: impl Into<String>, kind: ColumnKind, values: Vec<i32>) -> Column
    {
        assert_eq!(kind.storage(), Storage::Int, "{} is not an integer kind", kind);
        Column { name: name.into(), kind, data: ColumnData::Int(values) }
    }

    /// Build a `Flag` column.
    pub fn flags(name: impl Into<String>, values: Vec<bool>) -> Column
    { Column { name: name.into(), kind: ColumnKind::Flag, data: ColumnData::Bool(values) } }
}

impl Column {
    pub fn name(&self) -> &str { &self.name }
    pub fn kind(&self) -> ColumnKind { self.kind }
    pub fn data(&self) -> &ColumnData { &self.data }
    pub fn into_data(self) -> ColumnData { self.data }
    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn as_ints(&self) -> Option<&[i32]>
    {
        match &self.data {
            ColumnData::Int(v) => Some(&v[..]),
            _ => None,
        }
    }

    pub fn as_floats(&self) -> Option<&[f64]>
    {
        match &self.data {
            ColumnData::Float(v) => Some(&v[..]),
            _ => None,
        }
    }

    pub fn as_bools(&self) -> Option<&[bool]>
    {
        match &self.data {
            ColumnData::Bool(v) => Some(&v[..]),
            _ => None,
        }
    }

    /// Numeric values as floats. `None` for boolean columns.
    pub fn to_floats(&self) -> Option<Vec<f64>>
    {
        match &self.data {
            ColumnData::Int(v) => Some(v.iter().map(|&x| f64::from(x)).collect()),
            ColumnData::Float(v) => Some(v.clone()),
            ColumnData::Bool(_) => None,
        }
    }

    pub fn renamed(self, name: impl Into<String>) -> Column
    { Column { name: name.into(), ..self } }

    /// Keep only the rows where `mask` is true.
    ///
    /// # Panics
    ///
    /// Panics if `mask` has the wrong length.
    pub fn select(&self, mask: &[bool]) -> Column
    {
        assert_eq!(mask.len(), self.len());
        Column {
            name: self.name.clone(),
            kind: self.kind,
            data: self.data.select(mask),
        }
    }

    /// Exchange values with another column of the same storage at the rows
    /// where `mask` is true.
    pub(crate) fn swap_rows_with(&mut self, other: &mut Column, mask: &[bool])
    {
        assert_eq!(self.len(), mask.len());
        assert_eq!(other.len(), mask.len());
        self.data.swap_where(&mut other.data, mask);
    }

    /// Apply a function to every value of a float column.
    pub(crate) fn map_floats(&mut self, mut func: impl FnMut(usize, f64) -> f64)
    {
        if let ColumnData::Float(values) = &mut self.data {
            for (row, x) in values.iter_mut().enumerate() {
                *x = func(row, *x);
            }
        }
    }

    /// Relabel the column as a different kind, converting the data if the
    /// two kinds are stored differently.
    pub fn cast(self, kind: ColumnKind) -> FailResult<Column>
    {
        let Column { name, kind: from, data } = self;
        let data = match (from.cast_rule(kind), data) {
            (CastRule::Relabel, data) => data,
            (CastRule::Promote, ColumnData::Int(v)) => {
                ColumnData::Float(v.into_iter().map(f64::from).collect())
            },
            (CastRule::Demote, ColumnData::Float(v)) => {
                let mut out = Vec::with_capacity(v.len());
                for (row, x) in v.into_iter().enumerate() {
                    if x.fract() != 0.0 || x.abs() > f64::from(i32::max_value()) {
                        throw!(ColumnError::NotIntegral { name, row, value: x });
                    }
                    out.push(x as i32);
                }
                ColumnData::Int(out)
            },
            _ => throw!(ColumnError::BadCast { name, from, to: kind }),
        };
        Ok(Column { name, kind, data })
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn storage_must_match() {
        let err = Column::new("I", ColumnKind::Intensity, ColumnData::Int(vec![1])).unwrap_err();
        match err {
            ColumnError::WrongStorage { ref name, .. } => assert_eq!(name, "I"),
            _ => panic!("{}", err),
        }
        assert!(Column::new("I", ColumnKind::Intensity, ColumnData::Float(vec![1.0])).is_ok());
    }

    #[test]
    fn select_and_swap() {
        let mut a = Column::floats("F(+)", ColumnKind::FriedelSFAmplitude, vec![1.0, 2.0, 3.0]);
        let mut b = Column::floats("F(-)", ColumnKind::FriedelSFAmplitude, vec![4.0, 5.0, 6.0]);
        a.swap_rows_with(&mut b, &[false, true, true]);
        assert_eq!(a.as_floats().unwrap(), &[1.0, 5.0, 6.0][..]);
        assert_eq!(b.as_floats().unwrap(), &[4.0, 2.0, 3.0][..]);

        let selected = a.select(&[true, false, true]);
        assert_eq!(selected.as_floats().unwrap(), &[1.0, 6.0][..]);
        assert_eq!(selected.name(), "F(+)");
    }

    #[test]
    fn casting() {
        let ints = Column::ints("N", ColumnKind::MtzInt, vec![3, -2]);
        let floats = ints.clone().cast(ColumnKind::MtzReal).unwrap();
        assert_eq!(floats.as_floats().unwrap(), &[3.0, -2.0][..]);
        assert_eq!(floats.cast(ColumnKind::Batch).unwrap().as_ints().unwrap(), &[3, -2][..]);

        let bad = Column::floats("X", ColumnKind::MtzReal, vec![1.0, 1.5]);
        assert!(bad.cast(ColumnKind::MtzInt).is_err());
        assert!(ints.cast(ColumnKind::Flag).is_err());

        let relabeled = Column::floats("I", ColumnKind::Intensity, vec![2.0])
            .cast(ColumnKind::SFAmplitude).unwrap();
        assert_eq!(relabeled.kind(), ColumnKind::SFAmplitude);
    }
}
