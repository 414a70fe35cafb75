/// One line of operator input.
///
/// Anything that is not an exact command string parses to `Unrecognized`
/// and is ignored silently by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartStream,
    StopStream,
    StartRecord,
    StopRecord,
    SaveRecord,
    Exit,
    Unrecognized,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "start_stream" => Self::StartStream,
            "stop_stream" => Self::StopStream,
            "start_record" => Self::StartRecord,
            "stop_record" => Self::StopRecord,
            "save_record" => Self::SaveRecord,
            "exit" => Self::Exit,
            _ => Self::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_command_strings() {
        assert_eq!(Command::parse("start_stream"), Command::StartStream);
        assert_eq!(Command::parse("stop_stream"), Command::StopStream);
        assert_eq!(Command::parse("start_record"), Command::StartRecord);
        assert_eq!(Command::parse("stop_record"), Command::StopRecord);
        assert_eq!(Command::parse("save_record"), Command::SaveRecord);
        assert_eq!(Command::parse("exit"), Command::Exit);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Command::parse("  exit\n"), Command::Exit);
    }

    #[test]
    fn anything_else_is_unrecognized() {
        assert_eq!(Command::parse(""), Command::Unrecognized);
        assert_eq!(Command::parse("start"), Command::Unrecognized);
        assert_eq!(Command::parse("START_STREAM"), Command::Unrecognized);
    }
}
