use std::time::{Duration, Instant};

/// Live streaming state, owned by the session and shared with the
/// notification callback behind a mutex.
///
/// `start_time` is set exactly when streaming transitions false→true and is
/// read (not cleared) on stop.
#[derive(Debug, Default)]
pub struct SessionState {
    pub is_streaming: bool,
    pub start_time: Option<Instant>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the stream as started now.
    pub fn mark_started(&mut self) {
        self.is_streaming = true;
        self.start_time = Some(Instant::now());
    }

    /// Time since stream start, or `None` if the stream never started.
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }
}

/// Point-in-time snapshot of the session flags.
///
/// The recording flag is independent of the streaming flag; samples only
/// reach the recording buffer while a notification is actually delivered,
/// which requires an active stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStatus {
    pub is_streaming: bool,
    pub is_recording: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let state = SessionState::new();
        assert!(!state.is_streaming);
        assert!(state.start_time.is_none());
        assert!(state.elapsed().is_none());
    }

    #[test]
    fn mark_started_sets_flag_and_time() {
        let mut state = SessionState::new();
        state.mark_started();
        assert!(state.is_streaming);
        assert!(state.start_time.is_some());
        assert!(state.elapsed().is_some());
    }

    #[test]
    fn stop_keeps_start_time() {
        let mut state = SessionState::new();
        state.mark_started();
        state.is_streaming = false;
        assert!(state.start_time.is_some());
    }
}
