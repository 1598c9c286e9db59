use crate::adapters::StdoutSink;
use crate::domain::model::items_line;
use crate::domain::ports::{LineSink, Worker};

/// An item list paired with a collaborator.
///
/// `do_work` calls the collaborator once, then prints `Items: <count>`.
/// The sample is itself a [`Worker`], so samples can be nested.
#[derive(Debug)]
pub struct CompositeSample<W, S = StdoutSink> {
    items: Vec<String>,
    helper: W,
    sink: S,
}

impl<W: Worker> CompositeSample<W> {
    pub fn new(helper: W) -> Self {
        Self::with_sink(helper, StdoutSink)
    }
}

impl<W: Worker, S: LineSink> CompositeSample<W, S> {
    pub fn with_sink(helper: W, sink: S) -> Self {
        Self {
            items: Vec::new(),
            helper,
            sink,
        }
    }

    pub fn do_work(&mut self) {
        tracing::debug!("Delegating to collaborator");
        self.helper.do_work();
        self.sink.emit_line(&items_line(self.items.len()));
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        let item = item.into();
        tracing::debug!(item = %item, "Appending item");
        self.items.push(item);
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<W: Worker, S: LineSink> Worker for CompositeSample<W, S> {
    fn do_work(&mut self) {
        Self::do_work(self);
    }
}
