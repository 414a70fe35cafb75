use std::path::PathBuf;

use super::command::Command;

/// Source of operator commands.
///
/// The CLI implements this over stdin; tests script it.
pub trait CommandInput {
    /// Next command, or `None` at end of input (treated as `exit`).
    fn next_command(&mut self) -> Option<Command>;

    /// Destination path prompted for by `save_record`; `None` aborts the
    /// save and leaves all state unchanged.
    fn save_destination(&mut self) -> Option<PathBuf>;
}
