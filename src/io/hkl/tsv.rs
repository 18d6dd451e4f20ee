/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use std::io::prelude::*;

use rspace_reflections::{ColumnData, ReflectionTable};

/// Write every column of a table as tab-separated text with a header line.
///
/// Index columns come first when the table has an index.  Flags are
/// written as `0`/`1`.
pub fn write_tsv(mut w: impl Write, table: &ReflectionTable) -> FailResult<()>
{
    let mut header: Vec<&str> = vec![];
    if let Some(index) = table.index() {
        header.extend(index.names().iter().map(|s| s.as_str()));
    }
    header.extend(table.column_names());
    writeln!(w, "{}", header.join("\t"))?;

    let hkls = table.hkls();
    for row in 0..table.len() {
        let mut fields: Vec<String> = vec![];
        if let Some(hkls) = hkls {
            fields.extend(hkls[row].iter().map(|x| x.to_string()));
        }
        for column in table.columns() {
            fields.push(match column.data() {
                ColumnData::Int(v) => v[row].to_string(),
                ColumnData::Float(v) => v[row].to_string(),
                ColumnData::Bool(v) => (v[row] as u8).to_string(),
            });
        }
        writeln!(w, "{}", fields.join("\t"))?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use rspace_reflections::{Column, ColumnKind};

    #[test]
    fn layout() {
        let mut table = ReflectionTable::from_columns(vec![
            Column::ints("H", ColumnKind::HklIndex, vec![1, 0]),
            Column::ints("K", ColumnKind::HklIndex, vec![2, 0]),
            Column::ints("L", ColumnKind::HklIndex, vec![3, -1]),
            Column::floats("F", ColumnKind::SFAmplitude, vec![1.5, 2.0]),
        ]).unwrap();
        table.set_index(["H", "K", "L"]).unwrap();
        table.push_column(Column::flags("CENTRIC", vec![false, true])).unwrap();

        let mut buf = vec![];
        write_tsv(&mut buf, &table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "H\tK\tL\tF\tCENTRIC\n1\t2\t3\t1.5\t0\n0\t0\t-1\t2\t1\n");
    }
}
