use owo_colors::{OwoColorize, Stream};

use crate::types::Summary;

/// Three-line console summary: invocation count, mean latency to one decimal
/// place, p95 as integer microseconds.
pub fn format_summary(summary: &Summary) -> String {
    format!(
        "Ran {} invocations\nAverage: {:.1} µs\np95: {} µs\n",
        summary.count, summary.mean_us, summary.p95_us
    )
}

/// JSON rendition of the summary, for scripting.
pub fn format_json(summary: &Summary) -> String {
    // Summary contains no maps or non-string keys, so serialization
    // cannot fail.
    let mut out = serde_json::to_string_pretty(summary).unwrap_or_default();
    out.push('\n');
    out
}

/// Print the summary to stdout, with the count line dimmed when the
/// terminal supports color.
pub fn report(summary: &Summary) {
    let header = format!("Ran {} invocations", summary.count);
    println!(
        "{}",
        header.if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
    println!("Average: {:.1} µs", summary.mean_us);
    println!("p95: {} µs", summary.p95_us);
}
