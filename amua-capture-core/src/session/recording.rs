use crate::processing::sample_buffer::SampleBuffer;

/// User-gated recording window over the live capture stream.
///
/// Two states, Idle and Recording. The gate flag and the buffer live in one
/// struct so that, behind a single mutex, gating decisions and appends are
/// atomic with respect to each other.
///
/// `start` resets the buffer even when already recording: a double start
/// deliberately discards prior unsaved samples rather than splicing two
/// windows together.
#[derive(Debug, Default)]
pub struct RecordingController {
    recording: bool,
    buffer: SampleBuffer,
}

impl RecordingController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle → Recording. Resets the buffer to empty.
    pub fn start(&mut self) {
        self.buffer.clear();
        self.recording = true;
        log::info!("Starting recording, recording buffer reset");
    }

    /// Recording → Idle. The buffer stays readable until the next `start`.
    pub fn stop(&mut self) {
        self.recording = false;
        log::info!("Stopped recording, {} samples recorded", self.buffer.len());
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Append samples if and only if recording is active.
    pub fn append(&mut self, samples: &[i16]) {
        if self.recording {
            self.buffer.extend(samples);
        }
    }

    /// Samples recorded so far, readable in any state.
    pub fn samples(&self) -> &[i16] {
        self.buffer.as_slice()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_controller_ignores_appends() {
        let mut rec = RecordingController::new();
        rec.append(&[1, 2, 3]);
        assert_eq!(rec.len(), 0);
        assert!(!rec.is_recording());
    }

    #[test]
    fn records_while_active() {
        let mut rec = RecordingController::new();
        rec.start();
        rec.append(&[1, 2]);
        rec.append(&[3]);
        assert_eq!(rec.samples(), &[1, 2, 3]);
    }

    #[test]
    fn stop_freezes_but_keeps_samples() {
        let mut rec = RecordingController::new();
        rec.start();
        rec.append(&[1, 2]);
        rec.stop();

        assert!(!rec.is_recording());
        assert_eq!(rec.samples(), &[1, 2]);

        rec.append(&[9]);
        assert_eq!(rec.samples(), &[1, 2]);
    }

    #[test]
    fn restart_discards_previous_window() {
        let mut rec = RecordingController::new();
        rec.start();
        rec.append(&[1, 2, 3]);

        // Second start without an intervening stop: destructive reset.
        rec.start();
        assert!(rec.is_recording());
        assert!(rec.is_empty());

        rec.append(&[4]);
        assert_eq!(rec.samples(), &[4]);
    }
}
