pub mod all_pairs;
pub mod dijkstra;
pub mod distance;
pub mod traits;

pub use distance::Distance;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
