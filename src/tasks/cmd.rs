/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::config::Settings;

use std::io::prelude::*;
use std::path::{Path, PathBuf};

use path_abs::FileWrite;

use rspace_hkl_io::{self as hkl_io, Format, Metadata};
use rspace_reflections::{ReflectionTable, UnitCell};
use rspace_symmetry::{catalog, asu_case, SpaceGroup, Symmetry, SymmetrySource};

/// Inputs of `rspace-asu` that come from the command line.
#[derive(Debug, Clone)]
pub struct AsuArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Overrides the `spacegroup` setting.
    pub spacegroup: Option<String>,
}

/// Read a reflection file, map it into the asymmetric unit, annotate it,
/// and write the result.
///
/// `.hkl` and `.ii` outputs keep their fixed layout; any other extension
/// produces a tab-separated table with every column.
pub fn run_hkl_to_asu(settings: &Settings, args: &AsuArgs) -> FailResult<()>
{
    let spacegroup = match &args.spacegroup {
        Some(name) => catalog::find_spacegroup(name)?,
        None => match settings.symmetry()? {
            Some(Symmetry::SpaceGroup(sg)) => sg,
            Some(Symmetry::GroupOps(ops)) => bail!(
                "the {} configured operations do not form a cataloged space group; \
                 reduction to the asymmetric unit needs a space group number",
                ops.order(),
            ),
            None => bail!("no space group given (use --spacegroup or the 'spacegroup' setting)"),
        },
    };
    info!("Space group: {}", spacegroup);

    let cell = match settings.cell {
        Some(params) => Some(UnitCell::from_parameters(&params)?),
        None => None,
    };

    let meta = Metadata { cell, spacegroup: Some(spacegroup) };
    let table = hkl_io::load(&args.input, meta)?;
    let table = process(settings, table)?;

    match Format::from_path(&args.output) {
        Ok(_) => hkl_io::save(&args.output, &table)?,
        Err(_) => {
            let file = FileWrite::create(&args.output)?;
            hkl_io::write_tsv(std::io::BufWriter::new(file), &table)?;
        },
    }
    info!("Wrote {} reflection(s) to '{}'", table.len(), args.output.display());
    Ok(())
}

fn process(settings: &Settings, mut table: ReflectionTable) -> FailResult<ReflectionTable>
{
    if settings.remove_absences {
        table = table.remove_absences()?;
    } else {
        table.label_absences()?;
        let absent = table.column("ABSENT")
            .and_then(|c| c.as_bools())
            .map_or(0, |flags| flags.iter().filter(|&&x| x).count());
        if absent > 0 {
            warn!("{} reflection(s) are systematically absent", absent);
        }
    }

    let mut table = table.hkl_to_asu()?;
    if settings.label_centrics {
        table.label_centrics()?;
    }
    if settings.compute_multiplicity {
        table.compute_multiplicity()?;
    }
    if table.cell().is_some() {
        table.compute_dhkl()?;
    }
    Ok(table)
}

/// Write a human-readable summary of a space group.
pub fn describe_spacegroup(mut w: impl Write, name: &str) -> FailResult<()>
{
    let sg = catalog::find_spacegroup(name)?;
    write_description(&mut w, &sg)
}

fn write_description(w: &mut dyn Write, sg: &SpaceGroup) -> FailResult<()>
{
    let ops = sg.group_ops();
    writeln!(w, "{}", sg)?;
    writeln!(w, "  centering:          {}", sg.centering()?)?;
    writeln!(w, "  centrosymmetric:    {}", sg.is_centrosymmetric())?;
    writeln!(w, "  ASU case:           {:?}", asu_case(sg.number())?)?;
    writeln!(w, "  order:              {}", ops.order())?;
    writeln!(w, "  basis operation:    {}", sg.basisop())?;
    writeln!(w, "  general positions:")?;
    for op in ops.sym_ops() {
        writeln!(w, "    {}", op)?;
    }
    if ops.cen_ops().len() > 1 {
        writeln!(w, "  centering vectors (in 24ths):")?;
        for tran in ops.cen_ops() {
            writeln!(w, "    {:?}", tran)?;
        }
    }
    Ok(())
}

/// Path used for `--log` when given a directory.
pub(crate) fn log_path(path: &Path) -> PathBuf
{
    match path.is_dir() {
        true => path.join("rspace.log"),
        false => path.to_owned(),
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use rspace_reflections::{Column, ColumnKind};

    fn p21_table() -> ReflectionTable
    {
        let hkls = [[1, 0, 0], [0, 1, 0], [0, -2, 0], [-1, -2, -3]];
        let mut table = ReflectionTable::from_columns(vec![
            Column::ints("H", ColumnKind::HklIndex, hkls.iter().map(|h| h[0]).collect()),
            Column::ints("K", ColumnKind::HklIndex, hkls.iter().map(|h| h[1]).collect()),
            Column::ints("L", ColumnKind::HklIndex, hkls.iter().map(|h| h[2]).collect()),
        ]).unwrap();
        table.set_index(["H", "K", "L"]).unwrap();
        table.set_spacegroup(Some(catalog::find_spacegroup("P 1 21 1").unwrap()));
        table
    }

    #[test]
    fn process_flags_absences() {
        let table = process(&Settings::default(), p21_table()).unwrap();
        assert_eq!(
            table.column("ABSENT").unwrap().as_bools().unwrap(),
            &[false, true, false, false][..],
        );
        assert_eq!(table.hkls().unwrap(), &[[1, 0, 0], [0, 1, 0], [0, 2, 0], [1, 2, 3]][..]);
        assert!(table.column("CENTRIC").is_some());
        assert!(table.column("EPSILON").is_some());
        assert!(table.column("M/ISYM").is_some());
        assert!(table.column("dHKL").is_none());
    }

    #[test]
    fn process_removes_absences() {
        let settings = Settings {
            remove_absences: true,
            label_centrics: false,
            ..Settings::default()
        };
        let table = process(&settings, p21_table()).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.column("ABSENT").is_none());
        assert!(table.column("CENTRIC").is_none());
    }

    #[test]
    fn description() {
        let mut buf = vec![];
        describe_spacegroup(&mut buf, "19").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("P 21 21 21 (#19)\n"));
        assert!(text.contains("-x+1/2,-y,z+1/2"));
        assert!(!text.contains("centering vectors"));

        assert!(describe_spacegroup(&mut vec![], "Q 7").is_err());
    }
}
