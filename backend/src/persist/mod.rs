//! State persistence - streams and files
//!
//! `write_state`/`read_state` work on any `Write`/`Read`, so state can go to
//! memory, sockets or files alike. `save`/`load` are the file-path layer.
//!
//! # Durability
//!
//! A write is not done until it is flushed. `write_state` always flushes and
//! reports a failed flush as `RngError::Io`. `save` goes further: it writes a
//! uniquely named temp file in the destination directory, syncs it, and
//! renames it over the destination. A failed save never leaves a half-written
//! file behind, and concurrent saves to one path never share a temp file.

use crate::engine::Generator;
use crate::error::{Result, RngError};
use crate::state::{self, max_encoded_len, SerializedState};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use tempfile::Builder;
use tracing::{info, warn};

/// Write `state` in the file format and flush the sink
pub fn write_state<W: Write>(mut writer: W, state: &SerializedState) -> Result<()> {
    writer.write_all(&state.encode())?;
    writer.flush()?;
    Ok(())
}

/// Read one state from `reader` until end of stream
///
/// At most one byte more than the largest legal encoding is read, so an
/// oversized source fails fast instead of being buffered whole.
///
/// # Errors
/// `Io` on read failure, `CorruptState` if the bytes are not a valid state.
pub fn read_state<R: Read>(reader: R) -> Result<SerializedState> {
    let limit = max_encoded_len() as u64 + 1;
    let mut bytes = Vec::new();
    reader.take(limit).read_to_end(&mut bytes)?;

    if bytes.len() as u64 >= limit {
        return Err(RngError::CorruptState(format!(
            "state exceeds the largest legal size of {} bytes",
            limit - 1
        )));
    }
    SerializedState::decode(&bytes)
}

/// Dump `generator` and write it to `path`, replacing any existing file
///
/// # Errors
/// `Io` if the temp file cannot be created, written, flushed, synced or
/// renamed into place. The destination is untouched on failure.
pub fn save(generator: &Generator, path: impl AsRef<Path>) -> Result<()> {
    save_state(&state::dump(generator), path)
}

/// Write an existing snapshot to `path`, replacing any existing file
pub fn save_state(state: &SerializedState, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let result = write_and_replace(state, path);
    match &result {
        Ok(()) => info!(
            path = %path.display(),
            algorithm = state.algorithm(),
            digest = %state.digest(),
            "generator state saved"
        ),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to save generator state");
        }
    }
    result
}

/// Read and validate the state file at `path`
///
/// # Errors
/// `Io` if the file cannot be opened or read; `CorruptState` if its
/// contents are not a valid state for a registered algorithm.
pub fn load(path: impl AsRef<Path>) -> Result<SerializedState> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let state = read_state(file)?;

    info!(
        path = %path.display(),
        algorithm = state.algorithm(),
        digest = %state.digest(),
        "generator state loaded"
    );
    Ok(state)
}

/// Load the state file at `path` into `generator`
///
/// # Errors
/// Anything `load` or `state::restore` can return.
pub fn restore_from_file(generator: &mut Generator, path: impl AsRef<Path>) -> Result<()> {
    let state = load(path)?;
    state::restore(generator, &state)
}

fn write_and_replace(state: &SerializedState, path: &Path) -> Result<()> {
    // Dropping the temp file on any early return deletes it
    let tmp = Builder::new()
        .prefix(".rngstate-")
        .suffix(".tmp")
        .tempfile_in(temp_dir_for(path)?)?;

    let mut writer = BufWriter::new(tmp);
    write_state(&mut writer, state)?;
    let tmp = writer.into_inner().map_err(|e| e.into_error())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Directory the temp file for `path` goes in, so the final rename stays on
/// one filesystem
fn temp_dir_for(path: &Path) -> Result<&Path> {
    if path.file_name().is_none() {
        return Err(RngError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' does not name a file", path.display()),
        )));
    }
    Ok(match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Sink whose writes succeed but whose flush fails
    struct FlushFails(Vec<u8>);

    impl Write for FlushFails {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "flush failed"))
        }
    }

    #[test]
    fn test_stream_round_trip() {
        let mut rng = Generator::create("taus2", Some(21)).unwrap();
        rng.fill_ints(4);

        let mut buf = Vec::new();
        write_state(&mut buf, &state::dump(&rng)).unwrap();
        let loaded = read_state(Cursor::new(buf)).unwrap();

        let mut other = Generator::create("taus2", None).unwrap();
        state::restore(&mut other, &loaded).unwrap();
        assert_eq!(other.fill_ints(8), rng.fill_ints(8));
    }

    #[test]
    fn test_flush_failure_surfaces_as_io() {
        let rng = Generator::create("vax", Some(1)).unwrap();
        let err = write_state(FlushFails(Vec::new()), &state::dump(&rng)).unwrap_err();
        assert!(matches!(err, RngError::Io(_)));
    }

    #[test]
    fn test_oversized_stream_rejected() {
        let bytes = vec![0u8; max_encoded_len() + 10];
        let err = read_state(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, RngError::CorruptState(_)));
    }

    #[test]
    fn test_temp_dir_is_destination_dir() {
        assert_eq!(temp_dir_for(Path::new("dir/state.bin")).unwrap(), Path::new("dir"));
        assert_eq!(temp_dir_for(Path::new("state.bin")).unwrap(), Path::new("."));
    }

    #[test]
    fn test_temp_dir_requires_file_name() {
        assert!(matches!(temp_dir_for(Path::new("/")), Err(RngError::Io(_))));
    }
}
