use super::command::Command;
use super::input::CommandInput;
use crate::session::stream::StreamSession;
use crate::storage::metadata;
use crate::traits::transport::StreamTransport;

/// Single-threaded command loop.
///
/// Reads one command at a time and applies it to the session. Preconditions
/// mirror the command table: a command whose precondition fails is dropped
/// without side effects. Nothing here is fatal; transport and storage
/// failures are logged and the loop keeps running until `exit` (or end of
/// input), which force-stops an active stream before returning.
pub fn run<T, I>(session: &mut StreamSession<T>, input: &mut I)
where
    T: StreamTransport,
    I: CommandInput,
{
    loop {
        let command = input.next_command().unwrap_or(Command::Exit);

        match command {
            Command::StartStream => {
                if !session.is_streaming() {
                    if let Err(e) = session.start_stream() {
                        log::error!("Error starting streaming: {}", e);
                    }
                }
            }
            Command::StopStream => {
                if session.is_streaming() {
                    session.stop_stream();
                }
            }
            Command::StopRecord => {
                if session.is_recording() {
                    session.stop_recording();
                }
            }
            Command::StartRecord => {
                if !session.is_recording() {
                    session.start_recording();
                }
            }
            Command::SaveRecord => {
                let Some(path) = input.save_destination() else {
                    continue;
                };
                match session.save_recording(&path) {
                    Ok(result) => {
                        if let Err(e) = metadata::write_metadata(&result.metadata, &result.file_path)
                        {
                            log::warn!("Failed to write metadata sidecar: {}", e);
                        }
                        log::info!(
                            "Saved {} samples to {}",
                            result.sample_count,
                            result.file_path.display()
                        );
                    }
                    Err(e) => log::error!("Failed to save recording: {}", e),
                }
            }
            Command::Exit => {
                session.stop_stream();
                break;
            }
            Command::Unrecognized => {}
        }
    }
}
