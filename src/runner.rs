use std::time::Instant;

use crate::corpus::Corpus;
use crate::sizer::WorkloadSizer;
use crate::subject;

/// Runs one timed invocation of the subject routine: size the workload, take
/// the corpus prefix, time a single `word_count` call.
///
/// Borrows the corpus (loaded once, shared across all samples) and owns the
/// sizer, whose stream advances once per run.
pub struct SampleRunner<'a> {
    corpus: &'a Corpus,
    sizer: WorkloadSizer,
}

impl<'a> SampleRunner<'a> {
    pub fn new(corpus: &'a Corpus, sizer: WorkloadSizer) -> SampleRunner<'a> {
        SampleRunner { corpus, sizer }
    }

    /// Draw the next workload size and slice the corpus prefix for it.
    pub fn next_block(&mut self, mutability: f64) -> String {
        let lines = self.sizer.size(mutability);
        self.corpus.prefix_block(lines)
    }

    /// Returns the elapsed time of one invocation in microseconds
    /// (integer truncation, not rounding).
    ///
    /// Only the subject call itself is inside the timed window; sizing and
    /// slicing happen before the clock starts.
    pub fn run(&mut self, mutability: f64) -> u64 {
        let block = self.next_block(mutability);

        let start = Instant::now();
        subject::word_count(&block);
        start.elapsed().as_micros() as u64
    }
}
