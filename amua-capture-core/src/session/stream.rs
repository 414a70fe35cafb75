use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::models::config::CaptureConfig;
use crate::models::error::CaptureError;
use crate::models::recording_result::RecordingResult;
use crate::models::state::{SessionState, SessionStatus};
use crate::processing::sample_buffer::SampleBuffer;
use crate::protocol::hexdump::format_hexdump;
use crate::protocol::packet::{self, decode_packet};
use crate::session::recording::RecordingController;
use crate::storage::wav_writer::WavWriter;
use crate::traits::transport::{NotificationCallback, StreamTransport};

/// Counters for observing stream health.
///
/// Sequence gaps are counted, never repaired: buffer contents always match
/// what the radio delivered.
#[derive(Debug, Clone, Default)]
pub struct StreamDiagnostics {
    pub notifications: u64,
    pub suppressed_early: u64,
    pub decode_errors: u64,
    pub sequence_gaps: u64,
    pub samples_captured: u64,
}

/// Shared state mutated by the notification callback and read by the
/// command path. Every field has exactly one writer at a time; the mutexes
/// make that explicit now that the transport delivers from its own thread.
struct Shared {
    state: Mutex<SessionState>,
    capture: Mutex<SampleBuffer>,
    recorder: Mutex<RecordingController>,
    diagnostics: Mutex<StreamDiagnostics>,
    last_sequence: Mutex<Option<u16>>,
}

impl Shared {
    fn new() -> Self {
        Self {
            state: Mutex::new(SessionState::new()),
            capture: Mutex::new(SampleBuffer::new()),
            recorder: Mutex::new(RecordingController::new()),
            diagnostics: Mutex::new(StreamDiagnostics::default()),
            last_sequence: Mutex::new(None),
        }
    }
}

/// Orchestrator for one BLE audio connection.
///
/// Generic over the transport via [`StreamTransport`]. Routes each decoded
/// packet into the capture buffer and, while recording is active, into the
/// recording buffer:
///
/// ```text
/// [Transport notification] → [decode] → [CaptureBuffer]
///                                     └→ [RecordingController] (gated)
/// ```
pub struct StreamSession<T: StreamTransport> {
    transport: T,
    config: CaptureConfig,
    shared: Arc<Shared>,
}

impl<T: StreamTransport> StreamSession<T> {
    pub fn new(transport: T, config: CaptureConfig) -> Self {
        Self {
            transport,
            config,
            shared: Arc::new(Shared::new()),
        }
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            is_streaming: self.shared.state.lock().is_streaming,
            is_recording: self.shared.recorder.lock().is_recording(),
        }
    }

    pub fn is_streaming(&self) -> bool {
        self.shared.state.lock().is_streaming
    }

    pub fn is_recording(&self) -> bool {
        self.shared.recorder.lock().is_recording()
    }

    pub fn diagnostics(&self) -> StreamDiagnostics {
        self.shared.diagnostics.lock().clone()
    }

    /// Subscribe to notifications and send the START command.
    ///
    /// No-op when already streaming. On transport failure the session is
    /// left exactly as it was: not streaming.
    pub fn start_stream(&mut self) -> Result<(), CaptureError> {
        if self.shared.state.lock().is_streaming {
            return Ok(());
        }

        let callback = self.notification_callback();
        self.transport.subscribe(callback)?;

        if let Err(e) = self.transport.write_control(packet::CMD_START_STREAM) {
            let _ = self.transport.unsubscribe();
            return Err(e);
        }

        self.shared.state.lock().mark_started();
        log::info!("Stream started");
        Ok(())
    }

    /// Send the STOP command and unsubscribe, best-effort.
    ///
    /// No-op when not streaming. Transport failures are logged and
    /// swallowed; the session always ends not streaming.
    pub fn stop_stream(&mut self) {
        let (was_streaming, elapsed) = {
            let state = self.shared.state.lock();
            (state.is_streaming, state.elapsed())
        };
        if !was_streaming {
            return;
        }

        if let Err(e) = self.transport.write_control(packet::CMD_STOP_STREAM) {
            log::warn!("Stop command write failed: {}", e);
        }
        if let Err(e) = self.transport.unsubscribe() {
            log::warn!("Unsubscribe failed: {}", e);
        }

        self.shared.state.lock().is_streaming = false;

        if let Some(elapsed) = elapsed {
            log::info!("Stream stopped, recording time: {:.3} s", elapsed.as_secs_f64());
        }
    }

    /// Idle → Recording; resets the recording buffer.
    pub fn start_recording(&self) {
        self.shared.recorder.lock().start();
    }

    /// Recording → Idle; the buffer stays readable.
    pub fn stop_recording(&self) {
        self.shared.recorder.lock().stop();
    }

    /// Samples currently held by the recording buffer.
    pub fn recorded_len(&self) -> usize {
        self.shared.recorder.lock().len()
    }

    /// Samples captured since stream start.
    pub fn captured_len(&self) -> usize {
        self.shared.capture.lock().len()
    }

    /// Save the recording buffer as a WAV file.
    ///
    /// Works in any state, even mid-recording or on an empty buffer, and
    /// neither stops recording nor resets the buffer.
    pub fn save_recording(&self, path: &Path) -> Result<RecordingResult, CaptureError> {
        let samples = {
            let recorder = self.shared.recorder.lock();
            recorder.samples().to_vec()
        };
        WavWriter::new(path.to_path_buf(), self.config.sample_rate).write(&samples)
    }

    /// Export the whole capture buffer at session end.
    ///
    /// Returns `Ok(None)` without touching the filesystem when no samples
    /// were ever captured; an empty capture is not an error.
    pub fn export_capture(&self, path: &Path) -> Result<Option<RecordingResult>, CaptureError> {
        let samples = {
            let capture = self.shared.capture.lock();
            capture.to_vec()
        };
        if samples.is_empty() {
            log::info!("No audio samples recorded");
            return Ok(None);
        }
        let result = WavWriter::new(path.to_path_buf(), self.config.sample_rate).write(&samples)?;
        Ok(Some(result))
    }

    /// Hand the transport back, e.g. for a clean disconnect.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Bound-context callback: everything the handler may touch is an
    /// explicit `Arc` of the shared state, nothing is captured implicitly.
    fn notification_callback(&self) -> NotificationCallback {
        let shared = Arc::clone(&self.shared);
        let guard = self.config.notification_guard;
        Arc::new(move |data: &[u8]| handle_notification(&shared, guard, data))
    }
}

/// Decode one notification and route its samples.
///
/// Runs on the transport's delivery thread; notifications arrive serially,
/// so no two invocations interleave their appends.
fn handle_notification(shared: &Shared, guard: Duration, data: &[u8]) {
    shared.diagnostics.lock().notifications += 1;

    let within_guard = {
        let state = shared.state.lock();
        match state.elapsed() {
            Some(elapsed) => elapsed < guard,
            // Notification before start_time exists: still settling.
            None => true,
        }
    };
    if within_guard {
        log::info!("Skipping notification, not enough time elapsed");
        shared.diagnostics.lock().suppressed_early += 1;
        return;
    }

    log::trace!("{}", format_hexdump(data, "Audio Packet"));

    let packet = match decode_packet(data) {
        Ok(packet) => packet,
        Err(e) => {
            log::warn!("Dropping packet: {}", e);
            shared.diagnostics.lock().decode_errors += 1;
            return;
        }
    };

    // Gap accounting only; missing packets are never filled in.
    {
        let mut last = shared.last_sequence.lock();
        if let Some(prev) = *last {
            if packet.sequence != prev.wrapping_add(1) {
                log::debug!(
                    "Sequence gap: expected {}, got {}",
                    prev.wrapping_add(1),
                    packet.sequence
                );
                shared.diagnostics.lock().sequence_gaps += 1;
            }
        }
        *last = Some(packet.sequence);
    }

    shared.capture.lock().extend(&packet.samples);
    shared.recorder.lock().append(&packet.samples);
    shared.diagnostics.lock().samples_captured += packet.samples.len() as u64;
}
