//! Node shapes for the radix tree.
//!
//! One tree node is an immutable incoming edge label, an optional value, and
//! zero or more outgoing edges keyed by their first character. Nodes are
//! always shared behind an `Arc`; once a node is reachable from another
//! node's edge table it is logically frozen. The only mutation this module
//! permits is attaching a previously-absent outgoing edge, and that takes
//! `&mut self`, so it is only possible before the node is published (or on a
//! writer's private copy). Structural changes to an existing edge or value
//! require building a replacement node and swapping the parent's reference,
//! which is what lets concurrent readers traverse without locks.

use std::collections::HashMap;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::chars::{EdgeLabel, SingleByteChar};
use crate::error::Error;

/// Children stay inline until the fan-out exceeds this, then the table
/// switches to a hash map keyed by first character.
const SMALL_EDGE_LIMIT: usize = 4;

/// The value slot of a node: three states, distinguishable by tag.
///
/// `None` marks a structural node produced by an edge split, where no key
/// ends. `Void` marks a key that exists with no payload (set-like usage of
/// the tree). `Value` carries a real payload behind an `Arc` so replacement
/// nodes can share it.
#[derive(Debug)]
pub enum NodeValue<V> {
    /// No value at all; no key terminates at this node.
    None,
    /// The void marker: a key terminates here with no associated payload.
    Void,
    /// A real payload.
    Value(Arc<V>),
}

impl<V> NodeValue<V> {
    /// Wraps a payload.
    pub fn new(value: V) -> Self {
        NodeValue::Value(Arc::new(value))
    }

    /// Returns `true` for the no-value state.
    pub fn is_none(&self) -> bool {
        matches!(self, NodeValue::None)
    }

    /// Returns `true` for the void marker.
    pub fn is_void(&self) -> bool {
        matches!(self, NodeValue::Void)
    }

    /// Returns the payload, if this slot carries one.
    pub fn as_value(&self) -> Option<&V> {
        match self {
            NodeValue::Value(value) => Some(value),
            _ => None,
        }
    }
}

// Manual impl: cloning shares the Arc, no V: Clone bound needed.
impl<V> Clone for NodeValue<V> {
    fn clone(&self) -> Self {
        match self {
            NodeValue::None => NodeValue::None,
            NodeValue::Void => NodeValue::Void,
            NodeValue::Value(value) => NodeValue::Value(Arc::clone(value)),
        }
    }
}

impl<V: PartialEq> PartialEq for NodeValue<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NodeValue::None, NodeValue::None) => true,
            (NodeValue::Void, NodeValue::Void) => true,
            (NodeValue::Value(a), NodeValue::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl<V: Eq> Eq for NodeValue<V> {}

/// Outgoing-edge table of a non-leaf node.
///
/// Small fan-outs stay in an inline vector scanned linearly; larger ones
/// move to a hash map. Both uphold the branching invariant: no two edges
/// share a first character, and an attach that would violate it fails loudly
/// instead of overwriting.
#[derive(Debug)]
pub enum EdgeTable<V> {
    /// A handful of children, scanned linearly.
    Small(SmallVec<[Arc<Node<V>>; SMALL_EDGE_LIMIT]>),
    /// Larger fan-out, keyed by the first character of each child's label.
    Large(HashMap<char, Arc<Node<V>>>),
}

impl<V> EdgeTable<V> {
    /// Creates an empty table in its small representation.
    pub fn new() -> Self {
        EdgeTable::Small(SmallVec::new())
    }

    /// Builds a table from a set of children, failing on a duplicate first
    /// character or an empty child label.
    pub fn from_children(
        children: impl IntoIterator<Item = Arc<Node<V>>>,
    ) -> Result<Self, Error> {
        let mut table = EdgeTable::new();
        for child in children {
            table.try_attach(child)?;
        }
        Ok(table)
    }

    /// The number of outgoing edges.
    pub fn len(&self) -> usize {
        match self {
            EdgeTable::Small(edges) => edges.len(),
            EdgeTable::Large(edges) => edges.len(),
        }
    }

    /// Returns `true` if there are no outgoing edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the child whose label starts with the given character.
    pub fn get(&self, first_char: char) -> Option<&Arc<Node<V>>> {
        match self {
            EdgeTable::Small(edges) => edges
                .iter()
                .find(|child| child.incoming_edge_first_char() == Some(first_char)),
            EdgeTable::Large(edges) => edges.get(&first_char),
        }
    }

    /// Attaches a child whose first character is not already present.
    ///
    /// Fails with [`Error::EdgeAlreadyExists`] on a duplicate first
    /// character, leaving the table unchanged. Promotes the small
    /// representation to the hash map once the inline capacity is exceeded.
    pub fn try_attach(&mut self, child: Arc<Node<V>>) -> Result<(), Error> {
        let first_char = child.incoming_edge_first_char().ok_or(Error::EmptyEdge)?;
        if self.get(first_char).is_some() {
            return Err(Error::EdgeAlreadyExists(first_char));
        }

        match self {
            EdgeTable::Small(edges) if edges.len() < SMALL_EDGE_LIMIT => {
                edges.push(child);
            }
            EdgeTable::Small(edges) => {
                let mut map = HashMap::with_capacity(edges.len() + 1);
                for existing in edges.drain(..) {
                    // Children in the table always have a first character.
                    if let Some(c) = existing.incoming_edge_first_char() {
                        map.insert(c, existing);
                    }
                }
                map.insert(first_char, child);
                *self = EdgeTable::Large(map);
            }
            EdgeTable::Large(edges) => {
                edges.insert(first_char, child);
            }
        }
        Ok(())
    }

    /// Iterates over the children in no particular order.
    pub fn iter(&self) -> EdgeIter<'_, V> {
        match self {
            EdgeTable::Small(edges) => EdgeIter::Small(edges.iter()),
            EdgeTable::Large(edges) => EdgeIter::Large(edges.values()),
        }
    }
}

impl<V> Default for EdgeTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's outgoing edges. Leaves yield nothing.
pub enum EdgeIter<'a, V> {
    /// A leaf: no edges at all.
    Empty,
    /// Inline table.
    Small(std::slice::Iter<'a, Arc<Node<V>>>),
    /// Hash table.
    Large(std::collections::hash_map::Values<'a, char, Arc<Node<V>>>),
}

impl<'a, V> Iterator for EdgeIter<'a, V> {
    type Item = &'a Arc<Node<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            EdgeIter::Empty => None,
            EdgeIter::Small(iter) => iter.next(),
            EdgeIter::Large(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            EdgeIter::Empty => (0, Some(0)),
            EdgeIter::Small(iter) => iter.size_hint(),
            EdgeIter::Large(iter) => iter.size_hint(),
        }
    }
}

/// A radix tree node, as a closed set of concrete shapes.
///
/// Each shape carries the minimum state for its combination of value
/// presence, edge topology, and label encoding; the selection policy lives
/// in [`crate::factory`]. The leaf shapes have no children field, so "zero
/// outgoing edges" is structural, not a runtime check.
#[derive(Debug)]
pub enum Node<V> {
    /// Leaf whose entire edge is one single-byte character, stored as an
    /// interned view. The cheapest shape; the common case near the fringe
    /// of a tree over text keys.
    ByteLeaf {
        edge: &'static SingleByteChar,
        value: NodeValue<V>,
    },
    /// Leaf with a general character-sequence edge.
    CharLeaf { edge: EdgeLabel, value: NodeValue<V> },
    /// Interior node with outgoing edges.
    Branch {
        edge: EdgeLabel,
        value: NodeValue<V>,
        children: EdgeTable<V>,
    },
}

impl<V> Node<V> {
    /// Creates a single-byte leaf, validating the edge character through the
    /// flyweight encoding. No node is constructed for an incompatible
    /// character.
    pub fn byte_leaf(edge_char: char, value: NodeValue<V>) -> Result<Self, Error> {
        let byte = SingleByteChar::encode(edge_char)?;
        Ok(Node::ByteLeaf {
            edge: SingleByteChar::view_of(byte),
            value,
        })
    }

    /// Creates a single-byte leaf with no value, the shape an edge split
    /// produces for a dangling suffix.
    pub fn byte_leaf_null(edge_char: char) -> Result<Self, Error> {
        Self::byte_leaf(edge_char, NodeValue::None)
    }

    /// Creates a single-byte leaf carrying the void marker: the key exists,
    /// with no payload.
    pub fn byte_leaf_void(edge_char: char) -> Result<Self, Error> {
        Self::byte_leaf(edge_char, NodeValue::Void)
    }

    /// Creates a leaf with a general character-sequence edge.
    ///
    /// An empty label is only valid for a tree's root; the factory enforces
    /// that, not this constructor.
    pub fn char_leaf(edge: EdgeLabel, value: NodeValue<V>) -> Self {
        Node::CharLeaf { edge, value }
    }

    /// Creates an interior node from a set of children, failing on a
    /// duplicate child first character.
    pub fn branch(
        edge: EdgeLabel,
        value: NodeValue<V>,
        children: impl IntoIterator<Item = Arc<Node<V>>>,
    ) -> Result<Self, Error> {
        Ok(Node::Branch {
            edge,
            value,
            children: EdgeTable::from_children(children)?,
        })
    }

    /// The immutable incoming edge label.
    ///
    /// Returns a cheap handle (an interned reference or an `Arc` clone);
    /// calling this repeatedly never allocates.
    pub fn incoming_edge(&self) -> EdgeLabel {
        match self {
            Node::ByteLeaf { edge, .. } => EdgeLabel::Single(*edge),
            Node::CharLeaf { edge, .. } => edge.clone(),
            Node::Branch { edge, .. } => edge.clone(),
        }
    }

    /// The first character of the incoming edge, used as the branching key
    /// by the parent on every descent step.
    ///
    /// Kept separate from `incoming_edge()` so the hot path never decodes
    /// the whole label. `None` only for a root's empty label.
    pub fn incoming_edge_first_char(&self) -> Option<char> {
        match self {
            Node::ByteLeaf { edge, .. } => Some(edge.as_char()),
            Node::CharLeaf { edge, .. } => edge.first_char(),
            Node::Branch { edge, .. } => edge.first_char(),
        }
    }

    /// The node's value slot: no value, the void marker, or a payload.
    pub fn value(&self) -> &NodeValue<V> {
        match self {
            Node::ByteLeaf { value, .. } => value,
            Node::CharLeaf { value, .. } => value,
            Node::Branch { value, .. } => value,
        }
    }

    /// Returns the child whose label starts with the given character, if
    /// any. Leaves always return `None`.
    pub fn outgoing_edge(&self, first_char: char) -> Option<&Arc<Node<V>>> {
        match self {
            Node::ByteLeaf { .. } | Node::CharLeaf { .. } => None,
            Node::Branch { children, .. } => children.get(first_char),
        }
    }

    /// Attaches a new outgoing edge whose first character is not already
    /// present among this node's children.
    ///
    /// Fails with [`Error::EdgeAlreadyExists`] on a duplicate, and always on
    /// a leaf shape, which has no edge slot to attach to; the caller must
    /// rebuild the node through the factory as a non-leaf shape instead.
    /// Replacing an existing edge is intentionally impossible here: a writer
    /// constructs a new parent node and swaps the reference, so readers only
    /// ever see whole, immutable subtrees.
    pub fn try_attach_outgoing_edge(&mut self, child: Arc<Node<V>>) -> Result<(), Error> {
        let first_char = child.incoming_edge_first_char().ok_or(Error::EmptyEdge)?;
        match self {
            Node::ByteLeaf { .. } | Node::CharLeaf { .. } => {
                Err(Error::EdgeAlreadyExists(first_char))
            }
            Node::Branch { children, .. } => children.try_attach(child),
        }
    }

    /// Iterates over all children, in no particular order. Leaves yield an
    /// empty iterator.
    pub fn outgoing_edges(&self) -> EdgeIter<'_, V> {
        match self {
            Node::ByteLeaf { .. } | Node::CharLeaf { .. } => EdgeIter::Empty,
            Node::Branch { children, .. } => children.iter(),
        }
    }

    /// Returns `true` for the leaf shapes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::ByteLeaf { .. } | Node::CharLeaf { .. })
    }
}
