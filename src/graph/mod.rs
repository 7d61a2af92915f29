pub mod directed;
pub mod generators;
pub mod traits;

pub use directed::{DirectedGraph, GraphSnapshot, Vertex};
pub use traits::{Graph, MutableGraph, VertexKey, Weight};
