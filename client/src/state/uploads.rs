#[cfg(test)]
#[path = "uploads_test.rs"]
mod uploads_test;

use crate::net::types::UploadKind;

/// Which CSV datasets have been accepted by the backend this session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadProgress {
    pub scenarios: bool,
    pub training: bool,
}

impl UploadProgress {
    pub fn mark(&mut self, kind: UploadKind) {
        match kind {
            UploadKind::Scenarios => self.scenarios = true,
            UploadKind::TrainingResources => self.training = true,
        }
    }

    pub fn is_uploaded(&self, kind: UploadKind) -> bool {
        match kind {
            UploadKind::Scenarios => self.scenarios,
            UploadKind::TrainingResources => self.training,
        }
    }

    /// The assessment needs both datasets.
    pub fn can_start(&self) -> bool {
        self.scenarios && self.training
    }

    pub fn start_label(&self) -> &'static str {
        if self.can_start() { "Start Assessment" } else { "Upload Data Files First" }
    }
}
