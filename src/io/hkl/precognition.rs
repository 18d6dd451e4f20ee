/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use failure::ResultExt;
use path_abs::{FileRead, FileWrite};

use rspace_reflections::{Column, ColumnData, ColumnKind, ReflectionTable, UnitCell};
use rspace_symmetry::SpaceGroup;

//--------------------------------------------------------------------------------------
// public API

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    /// `.hkl`
    LaueMerged,
    /// `.ii`
    IntegratedIntensities,
}

/// Crystal metadata that the files themselves do not record.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub cell: Option<UnitCell>,
    pub spacegroup: Option<SpaceGroup>,
}

const INDEX: [&str; 3] = ["H", "K", "L"];

const LAUE_MERGED: &[(&str, ColumnKind)] = &[
    ("H", ColumnKind::HklIndex),
    ("K", ColumnKind::HklIndex),
    ("L", ColumnKind::HklIndex),
    ("F+", ColumnKind::FriedelSFAmplitude),
    ("SigF+", ColumnKind::StddevFriedelSF),
    ("F-", ColumnKind::FriedelSFAmplitude),
    ("SigF-", ColumnKind::StddevFriedelSF),
];

const INTEGRATED_INTENSITIES: &[(&str, ColumnKind)] = &[
    ("H", ColumnKind::HklIndex),
    ("K", ColumnKind::HklIndex),
    ("L", ColumnKind::HklIndex),
    ("Multiplicity", ColumnKind::MtzInt),
    ("X", ColumnKind::MtzReal),
    ("Y", ColumnKind::MtzReal),
    ("Resolution", ColumnKind::MtzReal),
    ("Wavelength", ColumnKind::MtzReal),
    ("I", ColumnKind::Intensity),
    ("SigI", ColumnKind::Stddev),
];

impl Format {
    /// Choose a format by file extension.
    pub fn from_path(path: impl AsRef<Path>) -> FailResult<Format>
    {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("hkl") => Ok(Format::LaueMerged),
            Some("ii") => Ok(Format::IntegratedIntensities),
            _ => bail!("cannot tell the reflection file format of '{}' (expected .hkl or .ii)", path.display()),
        }
    }

    /// Names and kinds of the columns, in file order.
    pub fn columns(self) -> &'static [(&'static str, ColumnKind)]
    {
        match self {
            Format::LaueMerged => LAUE_MERGED,
            Format::IntegratedIntensities => INTEGRATED_INTENSITIES,
        }
    }
}

/// Read a reflection file.  The table is indexed by `H`, `K`, `L`.
///
/// Lines may carry extra trailing columns, which are ignored.
pub fn read(f: impl BufRead, format: Format, meta: Metadata) -> FailResult<ReflectionTable>
{
    let mut table = load_txt(f, format)?;
    table.set_cell(meta.cell);
    table.set_spacegroup(meta.spacegroup);
    Ok(table)
}

/// Write the columns of `format` from a table.
///
/// The Miller indices come from the table's index if it has one, and
/// otherwise from columns named `H`, `K`, `L`.
pub fn write(w: impl Write, table: &ReflectionTable, format: Format) -> FailResult<()>
{ dump(w, table, format) }

/// Read a file, choosing the format by extension.
pub fn load(path: impl AsRef<Path>, meta: Metadata) -> FailResult<ReflectionTable>
{
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let file = FileRead::open(path)?;
    let table = read(BufReader::new(file), format, meta)
        .with_context(|_| format!("while reading '{}'", path.display()))?;
    info!("Read {} reflection(s) from '{}'", table.len(), path.display());
    Ok(table)
}

/// Write a file, choosing the format by extension.
pub fn save(path: impl AsRef<Path>, table: &ReflectionTable) -> FailResult<()>
{
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let file = FileWrite::create(path)?;
    write(std::io::BufWriter::new(file), table, format)
        .with_context(|_| format!("while writing '{}'", path.display()))?;
    Ok(())
}

//--------------------------------------------------------------------------------------
// implementation

enum Builder {
    Int(Vec<i32>),
    Float(Vec<f64>),
}

fn load_txt(f: impl BufRead, format: Format) -> FailResult<ReflectionTable>
{
    let layout = format.columns();
    let mut builders: Vec<Builder> = layout.iter().map(|&(_, kind)| match kind.storage() {
        rspace_reflections::Storage::Int => Builder::Int(vec![]),
        _ => Builder::Float(vec![]),
    }).collect();

    for (lineno, line) in f.lines().enumerate() {
        let line = line?;
        parse_line(&line, layout, &mut builders)
            .with_context(|_| format!("on line {}", lineno + 1))?;
    }

    let columns = izip!(layout, builders)
        .map(|(&(name, kind), builder)| {
            let data = match builder {
                Builder::Int(v) => ColumnData::Int(v),
                Builder::Float(v) => ColumnData::Float(v),
            };
            Column::new(name, kind, data)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = ReflectionTable::from_columns(columns)?;
    table.set_index(INDEX)?;
    Ok(table)
}

fn parse_line(line: &str, layout: &[(&str, ColumnKind)], builders: &mut [Builder]) -> FailResult<()>
{
    let words: Vec<_> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(());
    }
    ensure!(
        words.len() >= layout.len(),
        "expected at least {} columns, found {}", layout.len(), words.len(),
    );

    for (&(name, _), word, builder) in izip!(layout, words, builders) {
        let value: f64 = match word.parse() {
            Ok(x) => x,
            Err(_) => bail!("column {}: '{}' is not a number", name, word),
        };
        match builder {
            Builder::Int(v) => {
                ensure!(value.fract() == 0.0, "column {}: '{}' is not an integer", name, word);
                ensure!(
                    f64::from(i32::min_value()) <= value && value <= f64::from(i32::max_value()),
                    "column {}: '{}' does not fit in a 32-bit integer", name, word,
                );
                v.push(value as i32);
            },
            Builder::Float(v) => v.push(value),
        }
    }
    Ok(())
}

enum Values<'a> {
    Int(&'a [i32]),
    Float(&'a [f64]),
}

fn dump(mut w: impl Write, table: &ReflectionTable, format: Format) -> FailResult<()>
{
    let hkls: Vec<[i32; 3]> = match table.hkls() {
        Some(hkls) => hkls.to_vec(),
        None => {
            let mut hkls = vec![[0; 3]; table.len()];
            for (axis, &name) in INDEX.iter().enumerate() {
                let values = match table.column(name).and_then(|c| c.as_ints()) {
                    Some(values) => values,
                    None => bail!("table has no index and no integer column '{}'", name),
                };
                for (hkl, &x) in izip!(&mut hkls, values) {
                    hkl[axis] = x;
                }
            }
            hkls
        },
    };

    let data_columns = format.columns()[INDEX.len()..].iter()
        .map(|&(name, _)| match table.column(name).map(|c| c.data()) {
            Some(ColumnData::Int(v)) => Ok(Values::Int(&v[..])),
            Some(ColumnData::Float(v)) => Ok(Values::Float(&v[..])),
            Some(ColumnData::Bool(_)) => bail!("column '{}' is boolean and cannot be written", name),
            None => bail!("table has no column '{}' required by the {:?} format", name, format),
        })
        .collect::<FailResult<Vec<_>>>()?;

    for (row, hkl) in hkls.iter().enumerate() {
        write!(w, "{:>4} {:>4} {:>4}", hkl[0], hkl[1], hkl[2])?;
        for values in &data_columns {
            match values {
                Values::Int(v) => write!(w, " {:>6}", v[row])?,
                Values::Float(v) => write!(w, " {:>12}", v[row])?,
            }
        }
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}
