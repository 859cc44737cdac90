//! Graphviz DOT export.

use crate::graph::Graph;
use crate::types::{GraphResult, Weight};

/// Render any graph as a Graphviz `digraph`, one statement per vertex
/// followed by its outgoing edges labelled with their weights.
pub fn to_dot<W: Weight>(graph: &impl Graph<W>) -> GraphResult<String> {
    let mut out = String::from("digraph G {\n");
    for i in 0..graph.vertex_count() {
        out.push_str(&format!("\t{};\n", i));
        for edge in graph.edges(i)? {
            out.push_str(&format!(
                "\t{} -> {} [ label=\"{}\" ] ;\n",
                edge.source, edge.target, edge.weight
            ));
        }
    }
    out.push_str("}\n");
    Ok(out)
}
