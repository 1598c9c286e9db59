use crate::core::composite::CompositeSample;
use crate::core::counter::CounterSample;
use crate::core::workers::NoopWorker;
use crate::domain::ports::LineSink;

pub const DEFAULT_COUNTER_VALUE: i32 = 10;

/// Runs `CounterSample(10).process()` against stdout.
pub fn run_counter_fixture() {
    CounterSample::new(DEFAULT_COUNTER_VALUE).process();
}

pub fn run_counter_fixture_with<S: LineSink>(value: i32, sink: S) {
    tracing::info!("Running counter fixture with value {}", value);
    CounterSample::with_sink(value, sink).process();
}

/// Adds `items` in order to a sample with a no-op collaborator, then calls `do_work` once.
pub fn run_composite_fixture_with<I, S>(items: I, sink: S)
where
    I: IntoIterator,
    I::Item: Into<String>,
    S: LineSink,
{
    let mut sample = CompositeSample::with_sink(NoopWorker, sink);
    for item in items {
        sample.add_item(item);
    }
    tracing::info!("Running composite fixture with {} item(s)", sample.len());
    sample.do_work();
}
