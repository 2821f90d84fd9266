use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use zero_bom::prelude::*;

/// Mock BomSink for testing that captures written documents
#[derive(Default, Clone)]
pub struct MockBomSink {
    pub written: Arc<Mutex<Vec<(String, String)>>>,
    pub should_fail: bool,
}

impl MockBomSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_written(&self) -> Vec<(String, String)> {
        self.written.lock().unwrap().clone()
    }

    /// Parses the most recently written document as JSON
    pub fn last_json(&self) -> serde_json::Value {
        let written = self.get_written();
        let (_, content) = written.last().expect("nothing was written");
        serde_json::from_str(content).unwrap()
    }
}

impl BomSink for MockBomSink {
    fn write(&self, filename: &str, content: &str) -> Result<PathBuf> {
        if self.should_fail {
            anyhow::bail!("Mock sink write failure");
        }
        self.written
            .lock()
            .unwrap()
            .push((filename.to_string(), content.to_string()));
        Ok(PathBuf::from("/mock").join(filename))
    }
}
