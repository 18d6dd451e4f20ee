/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::cmd::{self, AsuArgs};
use crate::config::{Settings, YamlRead};
use crate::logging::GlobalLogger;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use clap::{App, Arg};
use path_abs::FileRead;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

fn read_settings(path: Option<&str>) -> FailResult<Settings>
{
    match path {
        Some(path) => {
            let settings = Settings::from_reader(FileRead::open(path)?)?;
            debug!("Read settings from '{}'", path);
            Ok(settings)
        },
        None => Ok(Settings::default()),
    }
}

fn verbosity_arg<'a, 'b>() -> Arg<'a, 'b>
{
    Arg::with_name("verbose")
        .short("v")
        .long("verbose")
        .multiple(true)
        .help("log more (repeatable)")
}

// -------------------------------------------------------------------------------------

pub fn rspace_asu() {
    wrap_result_main(|| {
        let matches = App::new("rspace-asu")
            .about("Map a reflection file into the reciprocal asymmetric unit.")
            .args(&[
                Arg::with_name("input").required(true).value_name("INPUT")
                    .help("reflection file (.hkl or .ii)"),
                Arg::with_name("output").short("o").long("output").required(true)
                    .takes_value(true).value_name("OUTPUT")
                    .help("output file; .hkl and .ii keep their layout, anything else is written as TSV"),
                Arg::with_name("config").short("c").long("config")
                    .takes_value(true).value_name("CONFIG")
                    .help("settings yaml"),
                Arg::with_name("spacegroup").long("spacegroup")
                    .takes_value(true).value_name("SG")
                    .help("space group number or symbol; overrides the config"),
                Arg::with_name("log").long("log")
                    .takes_value(true).value_name("FILE")
                    .help("also write the log to this file (or to rspace.log in this directory)"),
                verbosity_arg(),
            ])
            .get_matches();

        let mut logger = GlobalLogger::default();
        logger.verbosity(matches.occurrences_of("verbose") as i32);
        if let Some(path) = matches.value_of("log") {
            logger.path(cmd::log_path(Path::new(path)));
        }
        logger.apply()?;

        let settings = read_settings(matches.value_of("config"))?;
        let args = AsuArgs {
            input: PathBuf::from(matches.value_of_os("input").unwrap_or_default()),
            output: PathBuf::from(matches.value_of_os("output").unwrap_or_default()),
            spacegroup: matches.value_of("spacegroup").map(|s| s.to_string()),
        };
        cmd::run_hkl_to_asu(&settings, &args)
    });
}

pub fn rspace_sg_info() {
    wrap_result_main(|| {
        let matches = App::new("rspace-sg-info")
            .about("Describe a space group from the built-in catalog.")
            .args(&[
                Arg::with_name("spacegroup").required(true).value_name("SG")
                    .help("space group number or symbol"),
                verbosity_arg(),
            ])
            .get_matches();

        GlobalLogger::default()
            .verbosity(matches.occurrences_of("verbose") as i32 - 1)
            .apply()?;

        let name = matches.value_of("spacegroup").unwrap_or_default();
        let stdout = std::io::stdout();
        cmd::describe_spacegroup(stdout.lock(), name)
    });
}
