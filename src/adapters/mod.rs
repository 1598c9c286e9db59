// Adapters layer: concrete output sinks.

pub mod console;

pub use console::{CapturedLines, StdoutSink};
