/// Runs file I/O inline on the UI thread inside a named span, so slow
/// imports and downloads show up in the log with their duration.
pub fn run_blocking<F, T>(label: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let span = tracing::debug_span!("blocking", task = label);
    let _entered = span.enter();
    let started = std::time::Instant::now();
    let value = f();
    tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "done");
    value
}
