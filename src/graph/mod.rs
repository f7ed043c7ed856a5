pub mod builder;
pub mod format;
pub mod generators;
pub mod labeled;
pub mod samples;
pub mod traits;

pub use builder::GraphBuilder;
pub use labeled::LabeledGraph;
pub use traits::{Graph, Vertex, Weight};
