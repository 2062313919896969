//! Synchronized result sink
//!
//! One mutual-exclusion boundary covers both the line write and the
//! progress increment, so no partial lines are ever observable and the
//! displayed count never runs ahead of lines actually written.

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::sync::Mutex;

use super::progress::ProgressBar;
use super::types::PairResult;

/// Serializes concurrent workers onto one output stream.
///
/// Explicitly passed to workers by reference; there is no global lock.
/// Lines land in completion order, which under parallel execution is not
/// the enumeration order.
pub struct ResultSink<W: Write> {
    inner: Mutex<SinkInner<W>>,
}

struct SinkInner<W: Write> {
    out: W,
    progress: ProgressBar,
    failed: bool,
}

impl<W: Write> ResultSink<W> {
    pub fn new(out: W, progress: ProgressBar) -> Self {
        Self {
            inner: Mutex::new(SinkInner {
                out,
                progress,
                failed: false,
            }),
        }
    }

    /// Write one pair as a single tab-delimited line and advance the
    /// progress counter. Once a write has failed, every subsequent call
    /// fails immediately so all workers abort instead of silently dropping
    /// results.
    pub fn write(&self, result: &PairResult) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.failed {
            bail!("output sink failed on an earlier write");
        }

        if let Err(err) = write_line(&mut inner.out, result) {
            inner.failed = true;
            return Err(err).context("failed to write result line");
        }

        inner.progress.inc();
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn finish(self) -> Result<W> {
        let mut inner = self.inner.into_inner().unwrap();
        inner.out.flush().context("failed to flush output")?;
        Ok(inner.out)
    }

    /// Pairs written so far.
    pub fn completed(&self) -> u64 {
        self.inner.lock().unwrap().progress.current()
    }
}

fn write_line<W: Write>(out: &mut W, result: &PairResult) -> std::io::Result<()> {
    write!(out, "{}\t{}", result.id_one, result.id_two)?;
    for distance in result.distances {
        write!(out, "\t{}", distance)?;
    }
    writeln!(out)
}
