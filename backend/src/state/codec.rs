//! Binary state file format
//!
//! ```text
//! bytes 0..4     magic "RNGS"
//! byte  4        format version
//! byte  5        algorithm name length N (1..=255)
//! bytes 6..6+N   algorithm name
//! then           exactly state_size payload bytes, nothing after
//! ```
//!
//! The payload is the raw state image: no padding, checksum or compression.

use super::SerializedState;
use crate::error::{Result, RngError};
use crate::registry;

pub const MAGIC: [u8; 4] = *b"RNGS";
pub const FORMAT_VERSION: u8 = 1;

const HEADER_LEN: usize = 6;
const MAX_NAME_LEN: usize = u8::MAX as usize;

/// Longest byte string `decode` can accept
pub(crate) fn max_encoded_len() -> usize {
    HEADER_LEN + MAX_NAME_LEN + registry::max_state_size()
}

pub(super) fn encode(state: &SerializedState) -> Vec<u8> {
    let name = state.algorithm.as_bytes();
    // Cut at the length field's limit; decode rejects such a tag
    let name = &name[..name.len().min(MAX_NAME_LEN)];

    let mut out = Vec::with_capacity(HEADER_LEN + name.len() + state.payload.len());
    out.extend_from_slice(&MAGIC);
    out.push(FORMAT_VERSION);
    out.push(name.len() as u8);
    out.extend_from_slice(name);
    out.extend_from_slice(&state.payload);
    out
}

pub(super) fn decode(bytes: &[u8]) -> Result<SerializedState> {
    let header = bytes
        .get(..HEADER_LEN)
        .ok_or_else(|| corrupt(format!("{} bytes is too short for a header", bytes.len())))?;

    if header[..4] != MAGIC {
        return Err(corrupt("missing state file magic".to_string()));
    }
    if header[4] != FORMAT_VERSION {
        return Err(corrupt(format!("unsupported format version {}", header[4])));
    }

    let name_len = usize::from(header[5]);
    if name_len == 0 {
        return Err(corrupt("empty algorithm tag".to_string()));
    }

    let name_end = HEADER_LEN + name_len;
    let name_bytes = bytes
        .get(HEADER_LEN..name_end)
        .ok_or_else(|| corrupt("algorithm tag is truncated".to_string()))?;
    let name = std::str::from_utf8(name_bytes)
        .map_err(|_| corrupt("algorithm tag is not valid UTF-8".to_string()))?;

    let state = SerializedState::new(name, bytes[name_end..].to_vec());
    state.validate()?;
    Ok(state)
}

fn corrupt(msg: String) -> RngError {
    RngError::CorruptState(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Generator;
    use crate::state::dump;

    fn encoded(name: &str, seed: u64) -> Vec<u8> {
        dump(&Generator::create(name, Some(seed)).unwrap()).encode()
    }

    #[test]
    fn test_header_layout() {
        let bytes = encoded("taus", 1);
        assert_eq!(&bytes[..4], b"RNGS");
        assert_eq!(bytes[4], FORMAT_VERSION);
        assert_eq!(bytes[5], 4);
        assert_eq!(&bytes[6..10], b"taus");
        assert_eq!(bytes.len(), 10 + 12);
    }

    #[test]
    fn test_decode_round_trip() {
        let bytes = encoded("r250", 5);
        let state = decode(&bytes).unwrap();
        assert_eq!(state.algorithm(), "r250");
        assert_eq!(state.encode(), bytes);
    }

    #[test]
    fn test_trailing_byte_rejected() {
        let mut bytes = encoded("vax", 5);
        bytes.push(0);
        assert!(matches!(decode(&bytes), Err(RngError::CorruptState(_))));
    }

    #[test]
    fn test_truncated_payload_rejected() {
        let mut bytes = encoded("mt19937", 5);
        bytes.truncate(bytes.len() - 1);
        assert!(matches!(decode(&bytes), Err(RngError::CorruptState(_))));
    }

    #[test]
    fn test_bad_magic_and_version_rejected() {
        let mut bytes = encoded("vax", 5);
        bytes[0] = b'X';
        assert!(matches!(decode(&bytes), Err(RngError::CorruptState(_))));

        let mut bytes = encoded("vax", 5);
        bytes[4] = FORMAT_VERSION + 1;
        assert!(matches!(decode(&bytes), Err(RngError::CorruptState(_))));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let mut bytes = encoded("vax", 5);
        bytes[6..9].copy_from_slice(b"xyz");
        assert!(matches!(decode(&bytes), Err(RngError::CorruptState(_))));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(decode(&[]), Err(RngError::CorruptState(_))));
    }
}
