//! Node shape selection.
//!
//! Tree mutation algorithms never pick concrete node shapes themselves; they
//! hand an edge label, a value state, and a child set to a [`NodeFactory`]
//! and get back the node to publish. Keeping selection behind a trait lets a
//! tree trade memory for speed by swapping policies without touching the
//! mutation code.

use std::sync::Arc;

use crate::chars::EdgeLabel;
use crate::error::Error;
use crate::node::{Node, NodeValue};

/// A policy choosing the concrete node shape for given inputs.
///
/// Implementations must be pure and deterministic: identical inputs yield an
/// identically shaped node, with no side effects. That determinism is what
/// makes memory accounting and testing of the tree algorithms tractable.
pub trait NodeFactory<V> {
    /// Builds a node for the given edge label, value state, and children.
    ///
    /// Fails with [`Error::EmptyEdge`] when a non-root node is requested
    /// with an empty label, with [`Error::EdgeAlreadyExists`] when two
    /// children share a first character, and with
    /// [`Error::IncompatibleCharacter`] only if the policy itself routed a
    /// non-single-byte label into a single-byte shape (a policy bug, not a
    /// caller error).
    fn create_node(
        &self,
        edge: EdgeLabel,
        value: NodeValue<V>,
        children: Vec<Arc<Node<V>>>,
        is_root: bool,
    ) -> Result<Node<V>, Error>;
}

/// The memory-minimizing selection policy.
///
/// Childless nodes with a one-character single-byte-compatible label become
/// interned-edge leaves; other childless nodes become character-sequence
/// leaves; anything with children becomes a branch, whose edge table picks
/// its own representation by fan-out. One-character branch labels are
/// compacted onto the interned views as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNodeFactory;

impl<V> NodeFactory<V> for DefaultNodeFactory {
    fn create_node(
        &self,
        edge: EdgeLabel,
        value: NodeValue<V>,
        children: Vec<Arc<Node<V>>>,
        is_root: bool,
    ) -> Result<Node<V>, Error> {
        if edge.is_empty() && !is_root {
            return Err(Error::EmptyEdge);
        }

        if children.is_empty() {
            if let (1, Some(c)) = (edge.len(), edge.first_char()) {
                if (c as u32) <= 255 {
                    return Node::byte_leaf(c, value);
                }
            }
            return Ok(Node::char_leaf(edge, value));
        }

        Node::branch(edge.compact(), value, children)
    }
}
