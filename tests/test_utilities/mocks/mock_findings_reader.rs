use std::path::Path;
use zero_bom::prelude::*;

/// Mock FindingsReader for testing
pub struct MockFindingsReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockFindingsReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl FindingsReader for MockFindingsReader {
    fn read_findings(&self, _path: &Path) -> Result<RawScan> {
        if self.should_fail {
            anyhow::bail!("Mock findings read failure");
        }
        Ok(RawScan::from(self.content.clone()))
    }
}
