use crate::adapters::StdoutSink;
use crate::domain::model::processing_line;
use crate::domain::ports::LineSink;

/// Holds one integer fixed at construction and prints it on `process`.
#[derive(Debug)]
pub struct CounterSample<S = StdoutSink> {
    value: i32,
    sink: S,
}

impl CounterSample {
    pub fn new(value: i32) -> Self {
        Self::with_sink(value, StdoutSink)
    }
}

impl<S: LineSink> CounterSample<S> {
    pub fn with_sink(value: i32, sink: S) -> Self {
        Self { value, sink }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn process(&mut self) {
        tracing::debug!(value = self.value, "Processing counter sample");
        self.print_value();
    }

    fn print_value(&mut self) {
        self.sink.emit_line(&processing_line(self.value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::CapturedLines;

    #[test]
    fn test_process_prints_value() {
        let mut sink = CapturedLines::new();
        CounterSample::with_sink(10, &mut sink).process();
        assert_eq!(sink.lines(), ["Processing: 10"]);
    }

    #[test]
    fn test_zero_negative_and_extremes() {
        for value in [0, -1, -250, i32::MIN, i32::MAX] {
            let mut sink = CapturedLines::new();
            let mut sample = CounterSample::with_sink(value, &mut sink);
            sample.process();
            assert_eq!(sample.value(), value);
            assert_eq!(sink.last(), Some(format!("Processing: {}", value).as_str()));
        }
    }

    #[test]
    fn test_repeated_process_is_stable() {
        let mut sample = CounterSample::with_sink(3, CapturedLines::new());
        sample.process();
        sample.process();
        assert_eq!(sample.sink.lines(), ["Processing: 3", "Processing: 3"]);
    }
}
