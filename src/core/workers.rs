use crate::domain::ports::Worker;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopWorker;

impl Worker for NoopWorker {
    fn do_work(&mut self) {}
}

/// Emits a debug event for every call and counts them.
#[derive(Debug, Clone, Default)]
pub struct TracingWorker {
    name: String,
    calls: usize,
}

impl TracingWorker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Worker for TracingWorker {
    fn do_work(&mut self) {
        self.calls += 1;
        tracing::debug!(worker = %self.name, call = self.calls, "collaborator invoked");
    }
}
