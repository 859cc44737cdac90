//! All data types for the graph-convert library.

pub mod edge;
pub mod error;
pub mod weight;

pub use edge::{Edge, WeightedEdge};
pub use error::{GraphError, GraphResult};
pub use weight::Weight;
