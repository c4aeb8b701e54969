//! `atlas-search` — place-name prefix search.
//!
//! # Crate layout
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`tst`]   | `TernarySearchTree<V>` — raw character-keyed TST      |
//! | [`index`] | `PrefixIndex<V>`, `normalize` — name-keyed wrapper    |
//!
//! The index is independent of graph topology: it stores whatever located
//! value the caller hands it (the graph builder stores `Place` records).

pub mod index;
pub mod tst;

#[cfg(test)]
mod tests;

pub use index::{normalize, PrefixIndex, MIN_PREFIX_LEN};
pub use tst::TernarySearchTree;
