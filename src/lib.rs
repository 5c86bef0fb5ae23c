//! # Concurrent Radix Nodes
//!
//! The node-representation layer of a concurrent, prefix-sharing radix tree.
//!
//! This crate provides the pieces a radix-tree index builds on: polymorphic,
//! memory-minimizing node shapes, the single-byte character flyweight that
//! keeps one-character edge labels allocation-free, the factory contract
//! through which tree algorithms obtain nodes, and the lazy search-result
//! projections queries hand back to callers. The tree algorithms themselves
//! (insert, remove, edge splitting, writer serialization) are external
//! consumers of these contracts.
//!
//! ## Design
//!
//! - **Immutable by default**: a node's edge label and value never change
//!   after construction. The only permitted mutation is attaching a
//!   previously-absent outgoing edge, and it takes `&mut self`, so a node
//!   already shared behind an `Arc` cannot be touched at all. Writers build
//!   replacement nodes and swap the parent's reference; readers traverse
//!   without locks and never see a torn node.
//! - **Shape per need**: leaves have no children field, single-byte edges
//!   intern their label, and edge tables pick an inline or hashed
//!   representation by fan-out.
//! - **Lazy results**: a query returns a [`SearchResult`] that streams keys,
//!   values, or pairs on demand instead of materializing collections.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use concurrent_radix_nodes::{
//!     DefaultNodeFactory, EdgeLabel, Node, NodeFactory, NodeValue, SearchResult,
//! };
//!
//! // A writer builds the subtree for the keys "te", "team", "test".
//! let factory = DefaultNodeFactory;
//! let team = factory
//!     .create_node(EdgeLabel::from("am"), NodeValue::new(2), Vec::new(), false)
//!     .unwrap();
//! let test = factory
//!     .create_node(EdgeLabel::from("st"), NodeValue::new(3), Vec::new(), false)
//!     .unwrap();
//! let te: Node<u32> = factory
//!     .create_node(
//!         EdgeLabel::from("te"),
//!         NodeValue::new(1),
//!         vec![Arc::new(team), Arc::new(test)],
//!         false,
//!     )
//!     .unwrap();
//!
//! // A query wraps the subtree and the caller pulls keys lazily.
//! let result = SearchResult::new("te", Arc::new(te));
//! let keys: Vec<String> = result.keys().collect();
//! assert_eq!(keys, vec!["te", "team", "test"]);
//! ```

pub mod chars;
pub mod error;
pub mod factory;
pub mod node;
pub mod search;

pub use crate::chars::{EdgeLabel, SingleByteChar};
pub use crate::error::Error;
pub use crate::factory::{DefaultNodeFactory, NodeFactory};
pub use crate::node::{EdgeIter, EdgeTable, Node, NodeValue};
pub use crate::search::{Keys, Pairs, SearchResult, Values};
