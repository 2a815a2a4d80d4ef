//! State snapshots - dump/restore generator state
//!
//! A [`SerializedState`] is the algorithm name plus a verbatim copy of the
//! generator's state bytes. Snapshots are produced on demand and carry no
//! identity beyond those bytes.
//!
//! # Critical Invariants
//!
//! - **Bit-exact continuation**: after `restore`, the target continues the
//!   sequence exactly where the source was when dumped
//! - **Algorithm matching**: state tagged for A never loads into B
//! - **Size matching**: payload length equals the descriptor's state size,
//!   never truncated or padded
//! - **No partial restore**: a rejected restore leaves the target untouched

mod codec;

pub use codec::{FORMAT_VERSION, MAGIC};
pub(crate) use codec::max_encoded_len;

use crate::engine::Generator;
use crate::error::{Result, RngError};
use crate::registry::{self, AlgorithmDescriptor};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// Algorithm-tagged copy of a generator's state buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedState {
    /// Registry name of the originating algorithm
    algorithm: String,

    /// Raw state image
    payload: Vec<u8>,
}

impl SerializedState {
    /// Wrap raw parts without checking them
    ///
    /// Use [`SerializedState::validate`] (or let `restore` do it) before
    /// trusting bytes from outside the process.
    pub fn new(algorithm: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            algorithm: algorithm.into(),
            payload,
        }
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Check the tag names a registered algorithm and the payload fits it
    ///
    /// # Errors
    /// `CorruptState` for an unknown tag or a payload of the wrong length.
    pub fn validate(&self) -> Result<&'static AlgorithmDescriptor> {
        let descriptor = registry::lookup(&self.algorithm).map_err(|_| {
            RngError::CorruptState(format!("unrecognized algorithm tag '{}'", self.algorithm))
        })?;
        check_payload_len(descriptor, self.payload.len())?;
        Ok(descriptor)
    }

    /// Encode in the persisted file format
    pub fn encode(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Decode the persisted file format
    ///
    /// # Errors
    /// `CorruptState` on a bad header, unknown tag, wrong payload length or
    /// trailing bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        codec::decode(bytes)
    }

    /// Human-readable JSON form
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| RngError::CorruptState(format!("State serialization failed: {}", e)))
    }

    /// Parse and validate the JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let state: Self = serde_json::from_str(json)
            .map_err(|e| RngError::CorruptState(format!("State deserialization failed: {}", e)))?;
        state.validate()?;
        Ok(state)
    }

    /// Hex SHA-256 of tag and payload
    ///
    /// Two snapshots with equal digests hold the same algorithm and state.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.algorithm.as_bytes());
        hasher.update([0u8]);
        hasher.update(&self.payload);
        format!("{:x}", hasher.finalize())
    }
}

/// Capture the generator's current state
///
/// Pure: the generator is not advanced.
pub fn dump(generator: &Generator) -> SerializedState {
    SerializedState {
        algorithm: generator.name().to_string(),
        payload: generator.state_bytes(),
    }
}

/// Overwrite the generator's state from a snapshot
///
/// # Errors
/// - `AlgorithmMismatch` if the snapshot is tagged for another algorithm
/// - `CorruptState` if the payload length differs from the declared state
///   size, or the payload decodes to an impossible state
///
/// On error the generator is unchanged.
pub fn restore(generator: &mut Generator, state: &SerializedState) -> Result<()> {
    if state.algorithm != generator.name() {
        warn!(
            expected = generator.name(),
            found = %state.algorithm,
            "rejected restore: algorithm mismatch"
        );
        return Err(RngError::AlgorithmMismatch {
            expected: generator.name().to_string(),
            found: state.algorithm.clone(),
        });
    }

    check_payload_len(generator.descriptor(), state.payload.len())?;
    generator.load_state_bytes(&state.payload)?;

    debug!(algorithm = generator.name(), "generator state restored");
    Ok(())
}

fn check_payload_len(descriptor: &AlgorithmDescriptor, len: usize) -> Result<()> {
    if len != descriptor.state_size() {
        return Err(RngError::CorruptState(format!(
            "{} state must be {} bytes, got {}",
            descriptor.name(),
            descriptor.state_size(),
            len
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_does_not_advance() {
        let mut rng = Generator::create("taus", Some(8)).unwrap();
        let before = dump(&rng);
        let again = dump(&rng);
        assert_eq!(before, again);
        rng.next_int();
        assert_ne!(dump(&rng), before);
    }

    #[test]
    fn test_restore_wrong_length_is_corrupt() {
        let mut rng = Generator::create("mt19937", Some(1)).unwrap();
        let short = SerializedState::new("mt19937", vec![0u8; 10]);
        let before = dump(&rng);

        assert!(matches!(restore(&mut rng, &short), Err(RngError::CorruptState(_))));
        assert_eq!(dump(&rng), before);
    }

    #[test]
    fn test_validate_unknown_tag() {
        let state = SerializedState::new("nope", vec![0u8; 4]);
        assert!(matches!(state.validate(), Err(RngError::CorruptState(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let mut rng = Generator::create("lecuyer21", Some(77)).unwrap();
        rng.fill_ints(3);
        let state = dump(&rng);

        let json = state.to_json().unwrap();
        let parsed = SerializedState::from_json(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_json_with_wrong_length_rejected() {
        let json = r#"{"algorithm":"taus","payload":[1,2,3]}"#;
        assert!(matches!(
            SerializedState::from_json(json),
            Err(RngError::CorruptState(_))
        ));
    }

    #[test]
    fn test_digest_tracks_state() {
        let mut a = Generator::create("vax", Some(1)).unwrap();
        let b = Generator::create("vax", Some(1)).unwrap();
        assert_eq!(dump(&a).digest(), dump(&b).digest());
        a.next_int();
        assert_ne!(dump(&a).digest(), dump(&b).digest());
        assert_eq!(dump(&b).digest().len(), 64);
    }
}
