use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::models::error::CaptureError;
use crate::models::recording_result::{RecordingMetadata, RecordingResult};
use crate::processing::wav_format;

/// One-shot WAV file writer for a finished sample sequence.
///
/// The sample count is known up front, so the header is written with final
/// sizes and never patched. Output is always mono 16-bit PCM.
///
/// ## File Format
///
/// ```text
/// [44-byte WAV header]
/// [raw 16-bit LE PCM data...]
/// ```
pub struct WavWriter {
    file_path: PathBuf,
    sample_rate: u32,
}

impl WavWriter {
    pub fn new(file_path: PathBuf, sample_rate: u32) -> Self {
        Self {
            file_path,
            sample_rate,
        }
    }

    /// Write `samples` as a complete WAV file.
    ///
    /// An empty sample slice still produces a valid (data-less) file; the
    /// decision to skip empty exports belongs to the caller.
    pub fn write(&self, samples: &[i16]) -> Result<RecordingResult, CaptureError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CaptureError::Storage(format!("failed to create directory: {}", e))
                })?;
            }
        }

        let data_size = (samples.len() * 2) as u32;
        let header = wav_format::generate_wav_header(self.sample_rate, 16, 1, data_size);

        let mut file = File::create(&self.file_path)
            .map_err(|e| CaptureError::Storage(format!("failed to create file: {}", e)))?;
        file.write_all(&header)
            .map_err(|e| CaptureError::Storage(format!("write failed: {}", e)))?;
        file.write_all(&wav_format::encode_samples(samples))
            .map_err(|e| CaptureError::Storage(format!("write failed: {}", e)))?;
        file.flush()
            .map_err(|e| CaptureError::Storage(e.to_string()))?;

        let metadata = RecordingMetadata::new(
            &self.file_path.to_string_lossy(),
            self.sample_rate,
            samples.len(),
        );

        Ok(RecordingResult {
            file_path: self.file_path.clone(),
            sample_count: samples.len(),
            duration_secs: metadata.duration_secs,
            metadata,
        })
    }

    /// Path of the output file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_two_bytes_per_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("k_samples.wav");

        let samples = vec![100i16; 363];
        let result = WavWriter::new(path.clone(), 32000).write(&samples).unwrap();
        assert_eq!(result.sample_count, 363);

        let file_data = fs::read(&path).unwrap();
        assert_eq!(file_data.len(), 44 + 2 * 363);

        let data_size =
            u32::from_le_bytes([file_data[40], file_data[41], file_data[42], file_data[43]]);
        assert_eq!(data_size, 2 * 363);
    }

    #[test]
    fn declared_rate_is_32000() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rate.wav");

        WavWriter::new(path.clone(), 32000).write(&[1, 2, 3]).unwrap();

        let file_data = fs::read(&path).unwrap();
        let sample_rate =
            u32::from_le_bytes([file_data[24], file_data[25], file_data[26], file_data[27]]);
        assert_eq!(sample_rate, 32000);
    }

    #[test]
    fn samples_written_in_receipt_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.wav");

        WavWriter::new(path.clone(), 32000)
            .write(&[1, -1, 0x7FFF])
            .unwrap();

        let file_data = fs::read(&path).unwrap();
        assert_eq!(&file_data[44..], &[0x01, 0x00, 0xFF, 0xFF, 0xFF, 0x7F]);
    }

    #[test]
    fn empty_buffer_still_produces_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.wav");

        let result = WavWriter::new(path.clone(), 32000).write(&[]).unwrap();
        assert_eq!(result.sample_count, 0);

        let file_data = fs::read(&path).unwrap();
        assert_eq!(file_data.len(), 44);
        assert_eq!(&file_data[0..4], b"RIFF");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.wav");

        WavWriter::new(path.clone(), 32000).write(&[0]).unwrap();
        assert!(path.exists());
    }
}
