/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Helpers for integration tests that run a binary in a scratch directory.

#[cfg(feature = "test-diff")]
#[macro_use]
extern crate pretty_assertions;

use failure::Error;
use path_abs::{FileRead, FileWrite, PathDir, PathInfo, PathOps};

use std::ffi::{OsStr, OsString};
use std::fmt::Debug;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Command;

pub type Result<T> = std::result::Result<T, Error>;

pub type DirChecker = Box<dyn Fn(&PathDir) -> Result<()>>;

/// A command to run inside a fresh temporary directory, along with checks
/// to perform on that directory afterwards.
///
/// The directory contains a `resources` symlink to `tests/resources`.
#[must_use]
pub struct CliTest {
    bin: PathBuf,
    args: Vec<OsString>,
    expect_success: Option<bool>,
    checkers: Vec<DirChecker>,
}

impl CliTest {
    /// Usually called as `CliTest::binary(env!("CARGO_BIN_EXE_<name>"))`.
    pub fn binary(path: impl AsRef<Path>) -> Self {
        CliTest {
            bin: path.as_ref().to_owned(),
            args: vec![],
            expect_success: Some(true),
            checkers: vec![],
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().into());
        self
    }

    pub fn args<S: AsRef<OsStr>>(mut self, args: &[S]) -> Self {
        self.args.extend(args.iter().map(|s| s.as_ref().to_owned()));
        self
    }

    /// Expect a nonzero exit status.
    pub fn fails(mut self) -> Self {
        self.expect_success = Some(false);
        self
    }

    pub fn check<F>(mut self, checker: F) -> Self
    where F: Fn(&PathDir) -> Result<()> + 'static,
    {
        self.checkers.push(Box::new(checker));
        self
    }

    /// `check` with a standard trait-based implementation.
    pub fn check_file<T: CheckFile>(
        self,
        path_in_trial: &Path,
        expected_path: &Path,
        other: T::OtherArgs,
    ) -> Self {
        let path_in_trial = path_in_trial.to_owned();
        let expected_path = expected_path.to_owned();
        self.check(move |dir: &PathDir| {
            let actual = T::read_file(dir.join(&path_in_trial).as_path())?;
            let expected = T::read_file(&expected_path)?;
            check_against_with_diff(&actual, &expected, other.clone());
            Ok(())
        })
    }

    pub fn run(self) -> Result<()> {
        let CliTest { bin, args, checkers, expect_success } = self;

        let _tmp = TempDir::new("rspace")?;
        let tmp = PathDir::new(_tmp.path())?;

        let resources = PathDir::current_dir()?.join("tests/resources");
        if resources.exists() {
            PathDir::new(&resources)?.symlink(tmp.join("resources"))?;
        }

        let stdout_path = tmp.join("__captured_stdout");
        let stderr_path = tmp.join("__captured_stderr");
        let status = {
            Command::new(&bin)
                .args(&args)
                .current_dir(&tmp)
                // capture for the test harness
                .stdout({ let f: File = FileWrite::create(&stdout_path)?.into(); f })
                .stderr({ let f: File = FileWrite::create(&stderr_path)?.into(); f })
                .status()?
        };
        print!("{}", FileRead::open(&stdout_path)?.read_string()?);
        eprint!("{}", FileRead::open(&stderr_path)?.read_string()?);

        if let Some(success) = expect_success {
            assert_eq!(success, status.success(), "{}", status);
        }

        for checker in checkers {
            checker(&tmp)?;
        }
        Ok(())
    }
}

/// A file format that tests can compare with some tolerance.
pub trait CheckFile: Sized + Debug + PartialEq + std::panic::RefUnwindSafe {
    // Clone because checkers are Fn.
    type OtherArgs: std::panic::UnwindSafe + Clone + 'static;

    fn read_file(path: &Path) -> Result<Self>;
    fn check_against(&self, expected: &Self, other_args: Self::OtherArgs);
}

#[cfg(feature = "test-diff")]
fn check_against_with_diff<T: CheckFile>(a: &T, b: &T, other: T::OtherArgs) {
    // Let check_against use things like `assert_close!` that might panic.
    let result = std::panic::catch_unwind(move || a.check_against(b, other));

    // If it did, throw that panic away in favor of a character diff of the
    // Debug output, which shows at a glance how much of the file differs.
    if result.is_err() {
        assert_eq!(a, b, "Showing diff from pretty_assertions.");
        panic!("check_against failed but assert_eq succeeded?!");
    }
}

#[cfg(not(feature = "test-diff"))]
fn check_against_with_diff<T: CheckFile>(a: &T, b: &T, other: T::OtherArgs) {
    a.check_against(b, other)
}

/// `tempdir::TempDir` that leaks the directory on unwind so that a failed
/// test can be inspected.
struct TempDir(Option<tempdir::TempDir>);

impl TempDir {
    fn new(prefix: &str) -> std::io::Result<TempDir> {
        tempdir::TempDir::new(prefix).map(|tmp| TempDir(Some(tmp)))
    }

    fn path(&self) -> &Path {
        match &self.0 {
            Some(tmp) => tmp.path(),
            None => Path::new(""),
        }
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        if std::thread::panicking() {
            if let Some(tmp) = self.0.take() {
                eprintln!("leaving temp directory at '{}'", tmp.into_path().display());
            }
        }
    }
}
