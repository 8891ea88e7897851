use serde::Serialize;

/// One timed invocation: 1-based index paired with elapsed microseconds.
/// Immutable once recorded; samples are kept in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub invocation: u64,
    pub time_us: u64,
}

/// Read-only reduction over a full sample set, computed once after sampling.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub count: u64,
    pub mean_us: f64,
    pub p95_us: u64,
}

impl Summary {
    /// Reduce a sample set to count, arithmetic mean, and p95.
    ///
    /// p95 is the value at sorted index `ceil(0.95 * N) - 1`. An empty slice
    /// yields a zeroed summary; the driver never produces one since it
    /// rejects `invocations < 1` up front.
    pub fn from_samples(samples: &[Sample]) -> Summary {
        if samples.is_empty() {
            return Summary {
                count: 0,
                mean_us: 0.0,
                p95_us: 0,
            };
        }

        let mut sorted: Vec<u64> = samples.iter().map(|s| s.time_us).collect();
        sorted.sort_unstable();

        let n = sorted.len();
        let sum: u64 = sorted.iter().sum();
        let p95_index = ((0.95 * n as f64).ceil() as usize).saturating_sub(1);

        Summary {
            count: n as u64,
            mean_us: sum as f64 / n as f64,
            p95_us: sorted[p95_index],
        }
    }
}
