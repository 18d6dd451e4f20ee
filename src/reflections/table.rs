/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Column, ColumnKind, UnitCell, canonical_phase};
use crate::FailResult;

use rspace_symmetry::{self as symmetry, Hkl, SpaceGroup};

use std::collections::HashSet;

/// The three index columns of a table, combined into Miller indices.
#[derive(Debug, Clone, PartialEq)]
pub struct MillerIndex {
    names: [String; 3],
    hkls: Vec<Hkl>,
}

impl MillerIndex {
    pub fn names(&self) -> &[String; 3] { &self.names }
    pub fn hkls(&self) -> &[Hkl] { &self.hkls }
}

/// A column-oriented table of reflections.
///
/// Rows are positional.  Once an index has been set (see
/// [`ReflectionTable::set_index`]) every row is also keyed by its
/// Miller index, which enables the symmetry operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionTable {
    nrows: usize,
    index: Option<MillerIndex>,
    columns: Vec<Column>,
    cell: Option<UnitCell>,
    spacegroup: Option<SpaceGroup>,
}

//--------------------------------------------------------------------------------------
// construction and plain tabular operations

impl ReflectionTable {
    /// # Errors
    ///
    /// Fails if the columns have unequal lengths or duplicate names.
    pub fn from_columns(columns: Vec<Column>) -> FailResult<ReflectionTable>
    {
        let nrows = columns.first().map_or(0, |c| c.len());
        let mut table = ReflectionTable {
            nrows,
            index: None,
            columns: Vec::with_capacity(columns.len()),
            cell: None,
            spacegroup: None,
        };
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    pub fn len(&self) -> usize { self.nrows }
    pub fn is_empty(&self) -> bool { self.nrows == 0 }

    /// Data columns, in order.  Index columns are not included while an
    /// index is set.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column>
    { self.columns.iter() }

    pub fn column_names(&self) -> impl Iterator<Item = &str>
    { self.columns.iter().map(|c| c.name()) }

    pub fn column(&self, name: &str) -> Option<&Column>
    { self.columns.iter().find(|c| c.name() == name) }

    fn position(&self, name: &str) -> Option<usize>
    { self.columns.iter().position(|c| c.name() == name) }

    fn name_is_taken(&self, name: &str) -> bool
    {
        let in_index = self.index.as_ref().map_or(false, |index| index.names.iter().any(|n| n == name));
        in_index || self.position(name).is_some()
    }

    /// Append a new column.
    pub fn push_column(&mut self, column: Column) -> FailResult<()>
    {
        ensure!(
            !self.name_is_taken(column.name()),
            "duplicate column name '{}'", column.name(),
        );
        self.check_len(&column)?;
        self.columns.push(column);
        Ok(())
    }

    /// Add a column, replacing any data column of the same name.
    pub fn set_column(&mut self, column: Column) -> FailResult<()>
    {
        self.check_len(&column)?;
        match self.position(column.name()) {
            Some(i) => self.columns[i] = column,
            None => self.push_column(column)?,
        }
        Ok(())
    }

    pub fn remove_column(&mut self, name: &str) -> Option<Column>
    { self.position(name).map(|i| self.columns.remove(i)) }

    fn check_len(&self, column: &Column) -> FailResult<()>
    {
        ensure!(
            column.len() == self.nrows,
            "column '{}' has {} rows, but the table has {}", column.name(), column.len(), self.nrows,
        );
        Ok(())
    }

    /// Keep only the rows where `mask` is true.
    pub fn select(&self, mask: &[bool]) -> FailResult<ReflectionTable>
    {
        ensure!(
            mask.len() == self.nrows,
            "mask of length {} used on a table with {} rows", mask.len(), self.nrows,
        );
        let index = self.index.as_ref().map(|index| MillerIndex {
            names: index.names.clone(),
            hkls: izip!(&index.hkls, mask).filter(|&(_, &keep)| keep).map(|(&h, _)| h).collect(),
        });
        Ok(ReflectionTable {
            nrows: mask.iter().filter(|&&keep| keep).count(),
            index,
            columns: self.columns.iter().map(|c| c.select(mask)).collect(),
            cell: self.cell,
            spacegroup: self.spacegroup.clone(),
        })
    }
}

//--------------------------------------------------------------------------------------
// index and metadata

impl ReflectionTable {
    /// Combine three columns into the Miller index of the table.
    ///
    /// The columns are removed from the data columns.  Float columns are
    /// accepted as long as every value is integral.
    pub fn set_index(&mut self, names: [&str; 3]) -> FailResult<()>
    {
        ensure!(self.index.is_none(), "the table already has an index; reset it first");
        {
            let distinct: HashSet<_> = names.iter().collect();
            ensure!(distinct.len() == 3, "index columns must be distinct: {:?}", names);
        }

        let mut triples = vec![[0.0; 3]; self.nrows];
        for (axis, &name) in names.iter().enumerate() {
            let column = match self.column(name) {
                Some(c) => c,
                None => bail!("no column named '{}'", name),
            };
            let values = match column.to_floats() {
                Some(v) => v,
                None => bail!("column '{}' of kind {} cannot be used as an index", name, column.kind()),
            };
            for (triple, x) in izip!(&mut triples, values) {
                triple[axis] = x;
            }
        }
        let hkls = symmetry::hkls_from_floats(&triples)?;

        for &name in &names {
            self.remove_column(name);
        }
        self.index = Some(MillerIndex {
            names: [names[0].to_string(), names[1].to_string(), names[2].to_string()],
            hkls,
        });
        Ok(())
    }

    /// Turn the index back into three leading `HklIndex` columns.
    pub fn reset_index(&mut self)
    {
        if let Some(MillerIndex { names, hkls }) = self.index.take() {
            let index_columns = names.iter().enumerate().map(|(axis, name)| {
                Column::ints(name.clone(), ColumnKind::HklIndex, hkls.iter().map(|h| h[axis]).collect())
            });
            let mut columns: Vec<_> = index_columns.collect();
            columns.extend(self.columns.drain(..));
            self.columns = columns;
        }
    }

    pub fn index(&self) -> Option<&MillerIndex> { self.index.as_ref() }
    pub fn hkls(&self) -> Option<&[Hkl]> { self.index.as_ref().map(|i| &i.hkls[..]) }

    pub fn cell(&self) -> Option<&UnitCell> { self.cell.as_ref() }
    pub fn set_cell(&mut self, cell: Option<UnitCell>) { self.cell = cell; }

    pub fn spacegroup(&self) -> Option<&SpaceGroup> { self.spacegroup.as_ref() }
    pub fn set_spacegroup(&mut self, spacegroup: Option<SpaceGroup>) { self.spacegroup = spacegroup; }

    fn require_hkls(&self) -> FailResult<&[Hkl]>
    {
        match self.hkls() {
            Some(hkls) => Ok(hkls),
            None => bail!("this operation requires the table to be indexed by H, K, L"),
        }
    }

    fn require_spacegroup(&self) -> FailResult<&SpaceGroup>
    {
        match self.spacegroup() {
            Some(sg) => Ok(sg),
            None => bail!("this operation requires the table to have a space group"),
        }
    }
}

//--------------------------------------------------------------------------------------
// crystallographic operations

pub const MISYM_COLUMN: &str = "M/ISYM";
pub const CENTRIC_COLUMN: &str = "CENTRIC";
pub const EPSILON_COLUMN: &str = "EPSILON";
pub const ABSENT_COLUMN: &str = "ABSENT";
pub const DHKL_COLUMN: &str = "dHKL";

impl ReflectionTable {
    /// Map every reflection into the reciprocal asymmetric unit.
    ///
    /// Phase columns are transformed to stay consistent with the new
    /// indices, Friedel-specific columns `X(+)`/`X(-)` are exchanged on rows
    /// that were mapped through a Friedel mate, and the symmetry operation
    /// used is recorded in an `M/ISYM` column.
    pub fn hkl_to_asu(&self) -> FailResult<ReflectionTable>
    {
        let hkls = self.require_hkls()?;
        let spacegroup = self.require_spacegroup()?;
        let (mapping, shifts) = symmetry::hkl_to_asu_with_phase_shifts(hkls, spacegroup)?;

        let mut out = self.clone();
        let friedel_rows: Vec<bool> = shifts.coeff.iter().map(|&c| c < 0.0).collect();

        for column in &mut out.columns {
            if column.kind() == ColumnKind::Phase {
                let coeff = &shifts.coeff;
                let shift = &shifts.shift;
                column.map_floats(|row, phase| canonical_phase(coeff[row] * (phase + shift[row])));
            }
        }

        let pairs = out.friedel_pairs();
        trace!("Swapping {} Friedel column pair(s)", pairs.len());
        for (plus, minus) in pairs {
            let (a, b) = two_mut(&mut out.columns, plus, minus);
            a.swap_rows_with(b, &friedel_rows);
        }

        if let Some(index) = out.index.as_mut() {
            index.hkls = mapping.hkls;
        }
        let isym = mapping.isym.iter().map(|&i| i as i32).collect();
        out.set_column(Column::ints(MISYM_COLUMN, ColumnKind::MIsym, isym))?;
        Ok(out)
    }

    // Positions of (plus, minus) columns of Friedel-specific kinds.
    fn friedel_pairs(&self) -> Vec<(usize, usize)>
    {
        let mut pairs = vec![];
        for (i, column) in self.columns.iter().enumerate() {
            if !column.kind().is_friedel() {
                continue;
            }
            if let Some(partner) = minus_name(column.name()) {
                if let Some(j) = self.position(&partner) {
                    if self.columns[j].kind() == column.kind() {
                        pairs.push((i, j));
                    } else {
                        warn!("Not swapping Friedel columns '{}' and '{}' of different kinds", column.name(), partner);
                    }
                }
            }
        }
        pairs
    }

    /// Add a `CENTRIC` flag column.
    pub fn label_centrics(&mut self) -> FailResult<()>
    {
        let flags = symmetry::is_centric(self.require_hkls()?, self.require_spacegroup()?);
        self.set_column(Column::flags(CENTRIC_COLUMN, flags))
    }

    /// Add an `EPSILON` column with the multiplicity of each reflection.
    pub fn compute_multiplicity(&mut self) -> FailResult<()>
    {
        let eps = symmetry::compute_structurefactor_multiplicity(
            self.require_hkls()?,
            self.require_spacegroup()?,
        )?;
        self.set_column(Column::floats(EPSILON_COLUMN, ColumnKind::MtzReal, eps))
    }

    /// Add an `ABSENT` flag column marking systematic absences.
    pub fn label_absences(&mut self) -> FailResult<()>
    {
        let flags = symmetry::hkl_is_absent(self.require_hkls()?, self.require_spacegroup()?)?;
        self.set_column(Column::flags(ABSENT_COLUMN, flags))
    }

    /// A copy of the table without systematically absent reflections.
    pub fn remove_absences(&self) -> FailResult<ReflectionTable>
    {
        let absent = symmetry::hkl_is_absent(self.require_hkls()?, self.require_spacegroup()?)?;
        let count = absent.iter().filter(|&&x| x).count();
        if count > 0 {
            info!("Removing {} systematically absent reflection(s)", count);
        }
        let keep: Vec<bool> = absent.iter().map(|&x| !x).collect();
        self.select(&keep)
    }

    /// Add a `dHKL` column with the interplanar spacing of each reflection.
    pub fn compute_dhkl(&mut self) -> FailResult<()>
    {
        let hkls = self.require_hkls()?;
        let cell = match self.cell() {
            Some(cell) => cell,
            None => bail!("computing d-spacings requires the table to have a unit cell"),
        };
        let dhkl = hkls.iter().map(|hkl| cell.d_spacing(hkl)).collect();
        self.set_column(Column::floats(DHKL_COLUMN, ColumnKind::MtzReal, dhkl))
    }
}

/// Name of the `(-)` partner of a `(+)` column, recognizing both the
/// `F(+)` and `F+` spellings.
fn minus_name(name: &str) -> Option<String>
{
    if name.ends_with("(+)") {
        Some(format!("{}(-)", &name[..name.len() - 3]))
    } else if name.ends_with('+') {
        Some(format!("{}-", &name[..name.len() - 1]))
    } else {
        None
    }
}

fn two_mut<T>(slice: &mut [T], i: usize, j: usize) -> (&mut T, &mut T)
{
    assert_ne!(i, j);
    if i < j {
        let (left, right) = slice.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = slice.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
