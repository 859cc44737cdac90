//! Text, JSON and Graphviz encodings of graphs.

pub mod dot;
pub mod json;
pub mod matrix_text;

pub use dot::to_dot;
pub use json::{read_json, read_json_file, write_json};
pub use matrix_text::{MatrixTextReader, MatrixTextWriter};
