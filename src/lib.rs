pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{CapturedLines, StdoutSink};
pub use config::{FixtureConfig, FixtureRun};
pub use crate::core::{
    composite::CompositeSample,
    counter::CounterSample,
    runner::{run_composite_fixture_with, run_counter_fixture, run_counter_fixture_with},
    workers::{NoopWorker, TracingWorker},
};
pub use domain::ports::{LineSink, Worker};
pub use utils::error::{Result, SampleError};
