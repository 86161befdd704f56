use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::primitives::{AtomicWriteOptions, atomic_read, atomic_write};
use crate::{Error, Result};

/// A contiguous, 1-based inclusive span of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: usize,
    end:   usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start == 0 || start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize { self.start }

    pub fn end(&self) -> usize { self.end }

    /// Number of lines covered.
    pub fn count(&self) -> usize { self.end - self.start + 1 }

    fn fits(&self, total: usize) -> Result<()> {
        if self.end > total {
            return Err(Error::OutOfRange {
                end: self.end,
                total,
            });
        }
        Ok(())
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Text held as lines, each keeping its own terminator.
///
/// Concatenating every line reproduces the original text byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = atomic_read(path)?;
        let text = String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;
        Ok(Self::parse(&text))
    }

    pub fn len(&self) -> usize { self.lines.len() }

    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Raw 1-based line, terminator included.
    pub fn line(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }

    /// 1-based line with its terminator trimmed.
    pub fn content(&self, n: usize) -> Option<&str> {
        self.line(n).map(trim_terminator)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(String::as_str) }

    /// Text with `range` removed: `lines[..start - 1] + lines[end..]`.
    pub fn without(&self, range: LineRange) -> Result<String> {
        range.fits(self.len())?;
        let head = &self.lines[..range.start - 1];
        let tail = &self.lines[range.end..];
        Ok(head.iter().chain(tail).map(String::as_str).collect())
    }
}

fn trim_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Patterns the boundary lines must match before anything is written.
#[derive(Debug, Clone, Default)]
pub struct BoundaryExpectations {
    start: Option<Regex>,
    end:   Option<Regex>,
}

impl BoundaryExpectations {
    pub fn new() -> Self { Self::default() }

    pub fn start(mut self, pattern: &str) -> Result<Self> {
        self.start = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn end(mut self, pattern: &str) -> Result<Self> {
        self.end = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool { self.start.is_none() && self.end.is_none() }
}

/// A validated removal: the range fits the buffer and its boundaries are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripPlan {
    range:      LineRange,
    total:      usize,
    start_line: String,
    end_line:   String,
}

impl StripPlan {
    pub fn new(buffer: &LineBuffer, range: LineRange) -> Result<Self> {
        range.fits(buffer.len())?;
        let boundary = |n: usize| {
            buffer
                .content(n)
                .map(str::to_owned)
                .ok_or(Error::OutOfRange {
                    end:   n,
                    total: buffer.len(),
                })
        };
        Ok(Self {
            range,
            total: buffer.len(),
            start_line: boundary(range.start)?,
            end_line: boundary(range.end)?,
        })
    }

    pub fn range(&self) -> LineRange { self.range }

    pub fn start_line(&self) -> &str { &self.start_line }

    pub fn end_line(&self) -> &str { &self.end_line }

    pub fn removed(&self) -> usize { self.range.count() }

    pub fn remaining(&self) -> usize { self.total - self.range.count() }

    /// Fails fast when a boundary line does not match its expected pattern.
    pub fn check(&self, expect: &BoundaryExpectations) -> Result<()> {
        let pairs = [
            (&expect.start, self.range.start, &self.start_line),
            (&expect.end, self.range.end, &self.end_line),
        ];
        for (pattern, line, content) in pairs {
            if let Some(re) = pattern {
                if !re.is_match(content) {
                    return Err(Error::BoundaryMismatch {
                        line,
                        pattern: re.as_str().to_owned(),
                        content: content.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn apply(&self, buffer: &LineBuffer, path: impl AsRef<Path>, options: AtomicWriteOptions) -> Result<()> {
        let path = path.as_ref();
        let remainder = buffer.without(self.range)?;
        atomic_write(path, remainder.as_bytes(), options)?;
        tracing::info!(
            path = %path.display(),
            removed = self.removed(),
            remaining = self.remaining(),
            "stripped lines {}",
            self.range
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StripOptions {
    pub expect:  BoundaryExpectations,
    pub dry_run: bool,
    pub write:   AtomicWriteOptions,
}

impl StripOptions {
    pub fn new() -> Self { Self::default() }

    pub fn expect(mut self, expect: BoundaryExpectations) -> Self {
        self.expect = expect;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn write(mut self, write: AtomicWriteOptions) -> Self {
        self.write = write;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripReport {
    pub path:    PathBuf,
    pub plan:    StripPlan,
    pub written: bool,
}

/// Reads `path` and validates `range` against it. Nothing is written.
pub fn plan_strip(path: impl AsRef<Path>, range: LineRange) -> Result<(LineBuffer, StripPlan)> {
    let path = path.as_ref();
    let buffer = LineBuffer::read(path)?;
    tracing::debug!(path = %path.display(), lines = buffer.len(), "read file");

    let plan = StripPlan::new(&buffer, range)?;
    Ok((buffer, plan))
}

/// Checks boundary expectations, then writes the remainder back unless
/// `dry_run` is set.
pub fn commit_strip(
    path: impl AsRef<Path>,
    buffer: &LineBuffer,
    plan: StripPlan,
    options: &StripOptions,
) -> Result<StripReport> {
    let path = path.as_ref();
    plan.check(&options.expect)?;

    let written = if options.dry_run {
        tracing::debug!(path = %path.display(), "dry run, leaving file untouched");
        false
    } else {
        plan.apply(buffer, path, options.write)?;
        true
    };

    Ok(StripReport {
        path: path.to_path_buf(),
        plan,
        written,
    })
}

/// Reads `path`, removes `range`, and atomically writes the rest back.
///
/// Nothing is written when the range does not fit, a boundary expectation
/// fails, or `dry_run` is set.
pub fn strip_lines(path: impl AsRef<Path>, range: LineRange, options: &StripOptions) -> Result<StripReport> {
    let path = path.as_ref();
    let (buffer, plan) = plan_strip(path, range)?;
    commit_strip(path, &buffer, plan, options)
}
