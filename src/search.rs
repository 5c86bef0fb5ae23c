//! Lazy search results.
//!
//! A tree query finds the subtree under which all its matches live and wraps
//! it in a [`SearchResult`] instead of materializing any collection. The
//! caller then picks the projection it actually needs (keys, values, or
//! pairs) and pays for traversal only as far as it pulls elements.

use std::sync::Arc;

use crate::node::{Node, NodeValue};

/// A lazy view over the matches of one tree query.
///
/// Holds the key characters consumed from the tree root up to and including
/// the start node's own edge, plus a reference into the immutable snapshot
/// where the matches live. Because published nodes are never mutated, a
/// traversal in flight sees the subtree exactly as it was when the result
/// was created: matches already produced cannot be retracted by concurrent
/// writers, and keys inserted after the result was created may or may not
/// appear.
///
/// Each projection builds its own independent traversal, so consuming one
/// does not consume another, and all three visit matches in the same
/// deterministic order (depth first, children in ascending first-character
/// order) — the i-th pair's key is the i-th key. The iterators are one-shot
/// and single-consumer; a fresh query yields a fresh result.
#[derive(Debug, Clone)]
pub struct SearchResult<V> {
    /// Full key of the start node, root edge labels included.
    prefix: String,
    /// Subtree containing every match, or `None` for a matchless query.
    start: Option<Arc<Node<V>>>,
}

impl<V> SearchResult<V> {
    /// A result with no matches at all.
    pub fn empty() -> Self {
        SearchResult {
            prefix: String::new(),
            start: None,
        }
    }

    /// Wraps the subtree containing a query's matches.
    ///
    /// `prefix_to_start` must be the key characters consumed on the path
    /// from the tree root up to and including `start`'s incoming edge.
    pub fn new(prefix_to_start: impl Into<String>, start: Arc<Node<V>>) -> Self {
        SearchResult {
            prefix: prefix_to_start.into(),
            start: Some(start),
        }
    }

    /// Lazily yields the matched keys.
    pub fn keys(&self) -> Keys<V> {
        Keys(self.matches())
    }

    /// Lazily yields the matched values (void markers or payloads).
    pub fn values(&self) -> Values<V> {
        Values(self.matches())
    }

    /// Lazily yields matched `(key, value)` pairs.
    pub fn pairs(&self) -> Pairs<V> {
        Pairs(self.matches())
    }

    fn matches(&self) -> Matches<V> {
        let mut stack = Vec::new();
        if let Some(start) = &self.start {
            stack.push((Arc::clone(start), self.prefix.clone()));
        }
        Matches { stack }
    }
}

/// Depth-first walk over the snapshot, yielding every node where a key
/// terminates (void marker or payload). Structural no-value nodes only
/// contribute path characters.
struct Matches<V> {
    stack: Vec<(Arc<Node<V>>, String)>,
}

impl<V> Iterator for Matches<V> {
    type Item = (String, NodeValue<V>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, key)) = self.stack.pop() {
            // Push children in descending first-character order so they pop
            // in ascending order, keeping the walk deterministic across
            // projections of the same result.
            let mut children: Vec<&Arc<Node<V>>> = node.outgoing_edges().collect();
            children.sort_by_key(|child| std::cmp::Reverse(child.incoming_edge_first_char()));

            for child in children {
                let edge = child.incoming_edge();
                let mut child_key = String::with_capacity(key.len() + edge.len());
                child_key.push_str(&key);
                child_key.extend(edge.chars());
                self.stack.push((Arc::clone(child), child_key));
            }

            match node.value() {
                NodeValue::None => continue,
                value => return Some((key, value.clone())),
            }
        }
        None
    }
}

/// Lazy key projection of a [`SearchResult`].
pub struct Keys<V>(Matches<V>);

impl<V> Iterator for Keys<V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }
}

/// Lazy value projection of a [`SearchResult`].
pub struct Values<V>(Matches<V>);

impl<V> Iterator for Values<V> {
    type Item = NodeValue<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }
}

/// Lazy key-value projection of a [`SearchResult`].
pub struct Pairs<V>(Matches<V>);

impl<V> Iterator for Pairs<V> {
    type Item = (String, NodeValue<V>);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
