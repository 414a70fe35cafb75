use crate::models::error::DecodeError;

/// Minimum notification length for the fixed-width fields.
pub const MIN_PACKET_LEN: usize = 243;

/// Number of 16-bit PCM samples carried by each notification.
pub const SAMPLES_PER_PACKET: usize = 121;

/// One-byte control write: start streaming.
pub const CMD_START_STREAM: u8 = 0x01;

/// One-byte control write: stop streaming.
pub const CMD_STOP_STREAM: u8 = 0x00;

// Sample payload starts at byte 1, overlapping the high sequence byte.
// This matches the current firmware framing; see DESIGN.md before changing.
const SAMPLE_OFFSET: usize = 1;

/// One decoded audio notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPacket {
    /// Per-packet counter, little-endian u16 from bytes [0..2).
    pub sequence: u16,
    /// Exactly [`SAMPLES_PER_PACKET`] little-endian i16 samples.
    pub samples: Vec<i16>,
}

/// Decode a raw notification payload.
///
/// Pure transformation: no reordering, no gap filling. Out-of-order or
/// skipped sequence numbers are the caller's policy to detect.
pub fn decode_packet(data: &[u8]) -> Result<DecodedPacket, DecodeError> {
    if data.len() < MIN_PACKET_LEN {
        return Err(DecodeError::ShortPacket { len: data.len() });
    }

    let sequence = u16::from_le_bytes([data[0], data[1]]);

    let samples = data[SAMPLE_OFFSET..SAMPLE_OFFSET + SAMPLES_PER_PACKET * 2]
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    Ok(DecodedPacket { sequence, samples })
}
