//! Online selection of the highest-scoring methods of a file.

mod top_k;

pub use top_k::{rank_methods, TopKTracker, DEFAULT_TOP_K};
