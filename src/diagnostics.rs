use std::time::Instant;

#[inline]
pub fn log_perf(scope: &str, started_at: Instant, details: &str) {
    let elapsed_ms = started_at.elapsed().as_millis() as u64;
    if details.trim().is_empty() {
        tracing::debug!(scope, elapsed_ms, "perf");
    } else {
        tracing::debug!(scope, elapsed_ms, details, "perf");
    }
}
