use std::sync::{Arc, Mutex};
use zero_bom::prelude::*;

/// One call recorded by [`MockProgressReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Message(String),
    Section {
        current: usize,
        total: usize,
        name: Option<String>,
    },
    Error(String),
    Completed(String),
}

/// Mock ProgressReporter that records every call in order
///
/// Clones share the same event log, so a test can keep one handle while
/// the exporter owns the other.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Section names in the order they were assembled
    pub fn sections(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Section { name, .. } => name,
                _ => None,
            })
            .collect()
    }

    /// Message of the last `report_completion` call
    pub fn completion(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|event| match event {
            ProgressEvent::Completed(message) => Some(message),
            _ => None,
        })
    }

    fn record(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ProgressEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.record(ProgressEvent::Section {
            current,
            total,
            name: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.record(ProgressEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ProgressEvent::Completed(message.to_string()));
    }
}
