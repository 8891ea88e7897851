use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::corpus::Corpus;
use crate::errors::HarnessError;
use crate::runner::SampleRunner;
use crate::sizer::WorkloadSizer;
use crate::types::{Sample, Summary};

/// Run the full sweep: `invocations` timed samples, streamed to a CSV log at
/// `output_path`, reduced to a `Summary` at the end.
///
/// The log is created (or truncated) with a `invocation,time_us` header and
/// one row per sample, flushed as each sample completes. A failure partway
/// through leaves the rows already flushed valid on disk; buffering until
/// the end would trade that away.
pub fn drive(
    corpus: &Corpus,
    sizer: WorkloadSizer,
    mutability: f64,
    invocations: u64,
    output_path: &Path,
) -> Result<Summary> {
    if invocations < 1 {
        return Err(HarnessError::InvalidInvocations.into());
    }
    if !mutability.is_finite() || mutability < 0.0 {
        return Err(HarnessError::InvalidMutability { value: mutability }.into());
    }

    let mut log = File::create(output_path).map_err(|source| HarnessError::LogCreateError {
        path: output_path.to_path_buf(),
        source,
    })?;

    let write_err = |source: std::io::Error| HarnessError::LogWriteError {
        path: output_path.to_path_buf(),
        source,
    };

    writeln!(log, "invocation,time_us").map_err(write_err)?;

    let mut runner = SampleRunner::new(corpus, sizer);
    let mut samples = Vec::with_capacity(invocations as usize);

    for i in 1..=invocations {
        let time_us = runner.run(mutability);
        samples.push(Sample {
            invocation: i,
            time_us,
        });
        writeln!(log, "{},{}", i, time_us).map_err(write_err)?;
        log.flush().map_err(write_err)?;
    }

    Ok(Summary::from_samples(&samples))
}
