// #![warn(missing_docs)]

//! # planar_embedding
//!
//! Hopcroft-Tarjan planarity test with construction of a planar embedding,
//! following the formulation of Mehlhorn and Mutzel.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! ```
//! use planar_embedding::{UnGraph, EdgeLabel, planarity_test, PlanarityOptions};
//!
//! let mut graph = UnGraph::new_undirected();
//! let n: Vec<_> = (0..4).map(|i| graph.add_node(i)).collect();
//! for i in 0..4 {
//!     for j in i + 1..4 {
//!         graph.add_edge(n[i], n[j], EdgeLabel::Real);
//!     }
//! }
//!
//! let result = planarity_test(&graph, &PlanarityOptions::default()).unwrap();
//! let embedding = result.embedding().unwrap();
//! assert_eq!(embedding.rotation(0).len(), 3);
//! assert_eq!(embedding.faces().len(), 4);
//! ```

pub mod biconnect;
mod debugging;
pub mod embedding;
pub mod embedding_blocks;
pub mod error;
pub mod faces;
pub mod graph;
pub mod input;
pub mod palm_tree;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use embedding::{PlanarEmbedding, Planarity, PlanarityContext, PlanarityOptions, is_planar, planarity_test};
pub use embedding_blocks::kuratowski::get_counterexample;
pub use error::{PlanarityError, Result};
pub use types::EdgeLabel;
pub use types::UnGraph;
