use jira_csv_summary::ports::outbound::StoreOutcome;
use jira_csv_summary::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock AttachmentStore keeping files in memory
#[derive(Default, Clone)]
pub struct MockAttachmentStore {
    pub files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

#[allow(dead_code)]
impl MockAttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.files.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }
}

impl AttachmentStore for MockAttachmentStore {
    fn store(&self, file_name: &str, content: &[u8]) -> Result<StoreOutcome> {
        let path = PathBuf::from("data").join(file_name);
        let mut files = self.files.lock().unwrap();
        if files.get(file_name).is_some_and(|existing| existing == content) {
            return Ok(StoreOutcome::Unchanged(path));
        }
        files.insert(file_name.to_string(), content.to_vec());
        Ok(StoreOutcome::Written(path))
    }
}
