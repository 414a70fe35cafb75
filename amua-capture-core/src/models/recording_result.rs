use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Result returned when a sample sequence is saved to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingResult {
    pub file_path: PathBuf,
    pub sample_count: usize,
    pub duration_secs: f64,
    pub metadata: RecordingMetadata,
}

/// Metadata stored alongside a saved recording.
///
/// Serializable for the JSON sidecar written by `storage::metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingMetadata {
    pub id: String,
    pub created_at: String,
    pub file_path: String,
    pub sample_rate: u32,
    pub sample_count: usize,
    pub duration_secs: f64,
}

impl RecordingMetadata {
    pub fn new(file_path: &str, sample_rate: u32, sample_count: usize) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            file_path: file_path.to_string(),
            sample_rate,
            sample_count,
            duration_secs: sample_count as f64 / sample_rate as f64,
        }
    }
}
