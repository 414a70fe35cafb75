/// Zephyr `LOG_HEXDUMP_INF`-style packet dumps for byte-level auditing.
///
/// 16 bytes per line, split into two 8-byte halves by a double space, with
/// the trailing `|` column kept aligned across lines.
const LINE_WIDTH: usize = 16;

/// Indent matching the typical Zephyr prefix length for continuation lines.
const INDENT: &str = "                                        ";

/// Format `data` as a multi-line hexdump labelled with `label`.
pub fn format_hexdump(data: &[u8], label: &str) -> String {
    let mut lines = vec![format!("{label}: ")];

    for chunk in data.chunks(LINE_WIDTH) {
        let (left, right) = chunk.split_at(chunk.len().min(8));
        let hex_left = hex_join(left);

        let hex_str = if chunk.len() <= 8 {
            format!("{hex_left:<23} ")
        } else {
            format!("{hex_left}  {}", hex_join(right))
        };

        lines.push(format!("{INDENT}{hex_str:<49} |"));
    }

    lines.join("\n")
}

fn hex_join(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_line_splits_into_two_halves() {
        let data: Vec<u8> = (0u8..16).collect();
        let dump = format_hexdump(&data, "Audio Packet");
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Audio Packet: ");
        assert!(lines[1].contains("00 01 02 03 04 05 06 07  08 09 0a 0b 0c 0d 0e 0f"));
    }

    #[test]
    fn pipe_column_is_aligned() {
        let long: Vec<u8> = (0u8..32).collect();
        let short = vec![0xABu8; 5];
        let dump_long = format_hexdump(&long, "P");
        let dump_short = format_hexdump(&short, "P");

        let pipe_cols: Vec<usize> = dump_long
            .lines()
            .chain(dump_short.lines())
            .filter_map(|l| l.rfind('|'))
            .collect();
        assert!(!pipe_cols.is_empty());
        assert!(pipe_cols.iter().all(|&c| c == pipe_cols[0]));
    }

    #[test]
    fn empty_data_yields_only_label() {
        assert_eq!(format_hexdump(&[], "Audio Packet"), "Audio Packet: ");
    }
}
