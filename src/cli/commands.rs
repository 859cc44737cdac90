//! CLI command implementations.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::convert;
use crate::format::{read_json_file, to_dot, MatrixTextReader, MatrixTextWriter};
use crate::graph::{AdjacencyList, AdjacencyMatrix, Graph};
use crate::types::{GraphResult, Weight};

/// Which representation an input file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Matrix text file.
    Matrix,
    /// JSON adjacency list.
    List,
}

impl InputKind {
    /// Parse an input kind from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "matrix" | "mat" => Some(Self::Matrix),
            "list" | "adj" => Some(Self::List),
            _ => None,
        }
    }

    /// Guess from the file extension: `.json` is a list, anything else a
    /// matrix.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::List,
            _ => Self::Matrix,
        }
    }
}

/// Weight types the CLI can read and print.
pub trait CliWeight: Weight + Serialize + DeserializeOwned {}

impl<W: Weight + Serialize + DeserializeOwned> CliWeight for W {}

fn load_list<W: CliWeight>(path: &Path) -> GraphResult<AdjacencyList<W>> {
    let list: AdjacencyList<W> = read_json_file(path)?;
    let collapsed = list.collapsed_edge_count();
    if collapsed > 0 {
        log::warn!(
            "{}: {} duplicate edges will collapse to their last weight",
            path.display(),
            collapsed
        );
    }
    Ok(list)
}

/// Render an adjacency list one vertex per line: `0 |_| -> 1 (2) -> 3 (1)`.
pub fn format_list<W: Weight>(list: &AdjacencyList<W>) -> String {
    let mut out = String::new();
    for (i, edges) in list.iter() {
        out.push_str(&format!("{} |_|", i));
        for edge in edges {
            out.push_str(&format!(" -> {} ({})", edge.target, edge.weight));
        }
        out.push('\n');
    }
    out
}

/// Convert a matrix text file to an adjacency list.
pub fn cmd_to_list<W: CliWeight>(path: &Path, json: bool) -> GraphResult<()> {
    let matrix: AdjacencyMatrix<W> = MatrixTextReader::read_from_file(path)?;
    let list = convert::to_list(&matrix.into_rows())?;

    if json {
        println!("{}", serde_json::to_string(&list)?);
    } else {
        print!("{}", format_list(&list));
    }
    Ok(())
}

/// Convert a JSON adjacency list to a matrix.
pub fn cmd_to_matrix<W: CliWeight>(path: &Path, json: bool) -> GraphResult<()> {
    let list = load_list::<W>(path)?;
    let matrix = convert::to_matrix(&list)?;

    if json {
        println!("{}", serde_json::to_string(&matrix)?);
    } else {
        print!("{}", MatrixTextWriter::to_string(&matrix)?);
    }
    Ok(())
}

/// Print a Graphviz rendering of the graph.
pub fn cmd_dot<W: CliWeight>(path: &Path, input: InputKind) -> GraphResult<()> {
    let dot = match input {
        InputKind::Matrix => to_dot(&MatrixTextReader::read_from_file::<W>(path)?)?,
        InputKind::List => {
            let list = load_list::<W>(path)?;
            list.validate()?;
            to_dot(&list)?
        }
    };
    print!("{}", dot);
    Ok(())
}

/// Display vertex and edge counts.
pub fn cmd_info<W: CliWeight>(path: &Path, input: InputKind, json: bool) -> GraphResult<()> {
    let (matrix, stored_edges, collapsed) = match input {
        InputKind::Matrix => (MatrixTextReader::read_from_file::<W>(path)?, None, 0),
        InputKind::List => {
            let list = load_list::<W>(path)?;
            let matrix = convert::to_matrix(&list)?;
            (matrix, Some(list.edge_count()), list.collapsed_edge_count())
        }
    };
    let self_loops = (0..matrix.vertex_count())
        .filter(|&i| matrix.get(i, i).is_some_and(|w| !w.is_zero()))
        .count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "input": match input {
                InputKind::Matrix => "matrix",
                InputKind::List => "list",
            },
            "vertices": matrix.vertex_count(),
            "edges": matrix.edge_count(),
            "list_entries": stored_edges,
            "collapsed": collapsed,
            "self_loops": self_loops,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", matrix.vertex_count());
        println!("Edges: {}", matrix.edge_count());
        if let Some(entries) = stored_edges {
            println!("List entries: {}", entries);
            println!("Collapsed duplicates: {}", collapsed);
        }
        println!("Self-loops: {}", self_loops);
    }
    Ok(())
}
