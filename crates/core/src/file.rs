//! Top-level compress and decompress operations.
//!
//! The slice-level functions tie the pipeline together: frequency count,
//! tree build, code table, then tree and payload onto one bit cursor,
//! all wrapped in a [`container`](crate::container). The path-level
//! functions add file I/O with write-to-temp-then-rename finalization,
//! so a failed run never leaves a partial output masquerading as a
//! valid compressed file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bitio::{BitReader, BitWriter};
use crate::code::CodeTable;
use crate::codec::{decode_stream, encode_stream, read_tree, write_tree};
use crate::container::{read_container, write_container};
use crate::error::Result;
use crate::tree::{build_tree, count_frequencies};

/// Compress a byte slice into a self-describing container.
///
/// Empty input is valid and produces a container with symbol count zero
/// and no tree.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(write_container(0, &[]));
    }

    let freqs = count_frequencies(data);
    let tree = build_tree(&freqs)?;
    let table = CodeTable::from_tree(&tree)?;

    let mut writer = BitWriter::new();
    write_tree(&tree, &mut writer);
    encode_stream(data, &table, &mut writer)?;

    Ok(write_container(data.len() as u64, &writer.finish()))
}

/// Decompress a container back into the original bytes.
pub fn decompress_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    let container = read_container(bytes)?;
    if container.symbol_count == 0 {
        return Ok(Vec::new());
    }

    let mut reader = BitReader::new(&container.stream);
    let tree = read_tree(&mut reader)?;
    decode_stream(&mut reader, &tree, container.symbol_count as usize)
}

/// Compress the file at `input` into a container file at `output`.
///
/// The output is written to a temporary sibling and renamed into place
/// only on success.
pub fn compress(input: &Path, output: &Path) -> Result<()> {
    let data = fs::read(input)?;
    let container = compress_bytes(&data)?;
    write_atomic(output, &container)
}

/// Decompress the container file at `input` into `output`.
///
/// Same finalization discipline as [`compress`].
pub fn decompress(input: &Path, output: &Path) -> Result<()> {
    let bytes = fs::read(input)?;
    let data = decompress_bytes(&bytes)?;
    write_atomic(output, &data)
}

/// Write `bytes` to a `.tmp` sibling of `path`, then rename into place.
/// The temporary file is removed if any step fails.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    let result = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result.map_err(Into::into)
}
