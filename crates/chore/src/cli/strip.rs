use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chore_fs::{AtomicWriteOptions, BoundaryExpectations, LineRange, StripOptions, commit_strip, plan_strip};

#[derive(Clone, Debug, clap::Args)]
pub struct StripArg {
    /// File to edit in place
    pub file: PathBuf,

    /// First line to remove (1-based, inclusive)
    pub start: usize,

    /// Last line to remove (1-based, inclusive)
    pub end: usize,

    /// Regex the start line must match, or nothing is written
    #[arg(long, value_name = "REGEX")]
    pub expect_start: Option<String>,

    /// Regex the end line must match, or nothing is written
    #[arg(long, value_name = "REGEX")]
    pub expect_end: Option<String>,

    /// Show what would be removed without writing
    #[arg(long)]
    pub dry_run: bool,

    /// fsync the new contents before replacing the file
    #[arg(long)]
    pub sync: bool,
}

impl StripArg {
    fn expectations(&self) -> anyhow::Result<BoundaryExpectations> {
        let mut expect = BoundaryExpectations::new();
        if let Some(pattern) = &self.expect_start {
            expect = expect.start(pattern)?;
        }
        if let Some(pattern) = &self.expect_end {
            expect = expect.end(pattern)?;
        }
        Ok(expect)
    }

    pub fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        let options = StripOptions::new()
            .expect(self.expectations()?)
            .dry_run(self.dry_run)
            .write(AtomicWriteOptions::new().sync(self.sync));
        let range = LineRange::new(self.start, self.end)?;
        let (buffer, plan) =
            plan_strip(&self.file, range).with_context(|| format!("cannot strip {}", self.file.display()))?;

        writeln!(out, "Deleting lines {range}")?;
        writeln!(out, "Start content: {}", plan.start_line())?;
        writeln!(out, "End content: {}", plan.end_line())?;

        let report = commit_strip(&self.file, &buffer, plan, &options)?;

        if report.written {
            writeln!(out, "File updated successfully.")?;
        } else {
            writeln!(
                out,
                "Dry run: {} lines would be removed, {} kept. File not modified.",
                report.plan.removed(),
                report.plan.remaining()
            )?;
        }
        Ok(())
    }
}
