//! JSON encoding of adjacency lists and matrices.
//!
//! Lists serialize as `[[{"target":1,"weight":2}], []]`, matrices as their
//! rows `[[0,2],[0,0]]`. Decoding a matrix re-checks that it is square.

use std::io::{Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::GraphResult;

/// Read a JSON-encoded graph from a file.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> GraphResult<T> {
    let file = std::fs::File::open(path)?;
    read_json(std::io::BufReader::new(file))
}

/// Read a JSON-encoded graph from any reader.
pub fn read_json<T: DeserializeOwned>(reader: impl Read) -> GraphResult<T> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write a graph as JSON.
pub fn write_json<T: Serialize>(value: &T, writer: impl Write, pretty: bool) -> GraphResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}
