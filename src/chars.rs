//! Single-byte character flyweight and edge-label representations.
//!
//! Edge labels near the leaves of a radix tree over natural-language or
//! identifier text are overwhelmingly single characters. `SingleByteChar`
//! interns one view per possible byte value so those labels never allocate;
//! `EdgeLabel` unifies the interned views with general character-array
//! labels so traversal code never special-cases the encoding.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::Error;

/// The interned view table, one entry per byte value.
///
/// Built once, never mutated; entries are shared across arbitrarily many
/// nodes and threads without synchronization.
static VIEWS: Lazy<Vec<SingleByteChar>> =
    Lazy::new(|| (0..=255u8).map(|b| SingleByteChar { byte: b }).collect());

/// A one-character view onto a single byte.
///
/// Represents any character that can be encoded as a single byte. Instances
/// are interned: [`SingleByteChar::view_of`] returns the same `'static`
/// reference for the same byte value, so holding one costs a pointer and
/// constructing an edge label from one allocates nothing.
#[derive(Debug)]
pub struct SingleByteChar {
    byte: u8,
}

impl SingleByteChar {
    /// Returns the interned view for the given byte value.
    ///
    /// Total over the full byte domain; a pure array index after the table
    /// is first touched.
    pub fn view_of(byte: u8) -> &'static SingleByteChar {
        &VIEWS[byte as usize]
    }

    /// Encodes a character into its single-byte representation.
    ///
    /// Fails with [`Error::IncompatibleCharacter`] when the code point
    /// exceeds the single-byte range. Callers must only take this path after
    /// establishing (during variant selection) that the label is
    /// single-byte compatible.
    pub fn encode(input: char) -> Result<u8, Error> {
        let code_point = input as u32;
        if code_point > 255 {
            return Err(Error::IncompatibleCharacter(input));
        }
        Ok(code_point as u8)
    }

    /// The raw byte backing this view.
    pub fn byte(&self) -> u8 {
        self.byte
    }

    /// The decoded character.
    pub fn as_char(&self) -> char {
        self.byte as char
    }

    /// The length of the view in characters: always 1.
    pub fn len(&self) -> usize {
        1
    }

    /// Always `false`; the view is exactly one character.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the decoded character for index 0, `None` past the end.
    pub fn char_at(&self, index: usize) -> Option<char> {
        if index == 0 {
            Some(self.as_char())
        } else {
            None
        }
    }

    /// Slices the view as a character sequence.
    ///
    /// The full span `(0, 1)` returns this same interned view; a zero-length
    /// span returns the empty label. Spans reaching past the single
    /// character, or with `end` before `start`, each fail with a distinct
    /// boundary error.
    pub fn sub_sequence(&'static self, start: usize, end: usize) -> Result<EdgeLabel, Error> {
        if end > 1 {
            return Err(Error::SubsequenceEndOutOfBounds { end, len: 1 });
        }
        if end < start {
            return Err(Error::SubsequenceEndBeforeStart { start, end });
        }
        if end > start {
            Ok(EdgeLabel::Single(self))
        } else {
            Ok(EdgeLabel::empty())
        }
    }
}

impl fmt::Display for SingleByteChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An immutable edge label: the characters consumed along a parent-to-child
/// transition.
///
/// Two representations share one contract so label comparisons never care
/// about the encoding:
///
/// - [`EdgeLabel::Single`] — an interned single-byte view, zero allocation.
/// - [`EdgeLabel::Chars`] — a general character-array label behind an `Arc`.
///
/// Cloning is allocation-free in both cases. Equality and hashing go by the
/// character sequence, so a `Single` label equals the equivalent one-element
/// `Chars` label.
#[derive(Debug, Clone)]
pub enum EdgeLabel {
    /// A label of exactly one single-byte-compatible character.
    Single(&'static SingleByteChar),
    /// A general character sequence.
    Chars(Arc<[char]>),
}

impl EdgeLabel {
    /// The empty label. Only the root node of a tree may carry this.
    pub fn empty() -> Self {
        EdgeLabel::Chars(Arc::from(Vec::new()))
    }

    /// Builds a label from a character sequence.
    pub fn from_chars(label: &[char]) -> Self {
        EdgeLabel::Chars(label.into())
    }

    /// Builds a single-character label, interned when the character fits in
    /// a single byte.
    pub fn from_char(label: char) -> Self {
        match SingleByteChar::encode(label) {
            Ok(byte) => EdgeLabel::Single(SingleByteChar::view_of(byte)),
            Err(_) => EdgeLabel::Chars(vec![label].into()),
        }
    }

    /// Collapses a one-character single-byte label into its interned
    /// representation; any other label is returned unchanged.
    pub fn compact(self) -> Self {
        if let EdgeLabel::Chars(chars) = &self {
            if chars.len() == 1 {
                if let Ok(byte) = SingleByteChar::encode(chars[0]) {
                    return EdgeLabel::Single(SingleByteChar::view_of(byte));
                }
            }
        }
        self
    }

    /// The label length in characters.
    pub fn len(&self) -> usize {
        match self {
            EdgeLabel::Single(view) => view.len(),
            EdgeLabel::Chars(chars) => chars.len(),
        }
    }

    /// Returns `true` for the empty (root) label.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The character at the given index, `None` past the end.
    pub fn char_at(&self, index: usize) -> Option<char> {
        match self {
            EdgeLabel::Single(view) => view.char_at(index),
            EdgeLabel::Chars(chars) => chars.get(index).copied(),
        }
    }

    /// The first character of the label; `None` only for the empty label.
    ///
    /// This is the branching key a parent uses on every descent step, so it
    /// must not force decoding the whole label.
    pub fn first_char(&self) -> Option<char> {
        match self {
            EdgeLabel::Single(view) => Some(view.as_char()),
            EdgeLabel::Chars(chars) => chars.first().copied(),
        }
    }

    /// Iterates over the label's characters, regardless of representation.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        (0..self.len()).filter_map(move |i| self.char_at(i))
    }

    /// Slices the label over the half-open character span `start..end`.
    ///
    /// The full span returns the same representation (identity for interned
    /// views); a zero-length span returns the empty label. `end` past the
    /// label length and `end` before `start` each fail with a distinct
    /// boundary error.
    pub fn sub_sequence(&self, start: usize, end: usize) -> Result<EdgeLabel, Error> {
        match self {
            EdgeLabel::Single(view) => view.sub_sequence(start, end),
            EdgeLabel::Chars(chars) => {
                if end > chars.len() {
                    return Err(Error::SubsequenceEndOutOfBounds {
                        end,
                        len: chars.len(),
                    });
                }
                if end < start {
                    return Err(Error::SubsequenceEndBeforeStart { start, end });
                }
                if start == 0 && end == chars.len() {
                    Ok(self.clone())
                } else {
                    Ok(EdgeLabel::Chars(chars[start..end].into()))
                }
            }
        }
    }
}

impl From<&str> for EdgeLabel {
    fn from(label: &str) -> Self {
        EdgeLabel::Chars(label.chars().collect::<Vec<char>>().into())
    }
}

impl PartialEq for EdgeLabel {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.chars().eq(other.chars())
    }
}

impl Eq for EdgeLabel {}

impl Hash for EdgeLabel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.chars() {
            c.hash(state);
        }
    }
}

impl PartialEq<&str> for EdgeLabel {
    fn eq(&self, other: &&str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeLabel::Single(view) => write!(f, "{}", view.as_char()),
            EdgeLabel::Chars(chars) => {
                for c in chars.iter() {
                    write!(f, "{}", c)?;
                }
                Ok(())
            }
        }
    }
}
