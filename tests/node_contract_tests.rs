use std::sync::Arc;
use std::thread;

use quickcheck::quickcheck;
use rand::prelude::*;

use concurrent_radix_nodes::{
    DefaultNodeFactory, EdgeLabel, Error, Node, NodeFactory, NodeValue, SearchResult,
    SingleByteChar,
};

#[test]
fn test_no_value_leaf_end_to_end() {
    let node: Node<u32> = Node::byte_leaf_null('x').unwrap();

    assert!(node.value().is_none());
    assert_eq!(node.incoming_edge().to_string(), "x");
    assert_eq!(node.outgoing_edges().count(), 0);

    let mut node = node;
    for c in &['a', 'x', 'é'] {
        let child = Arc::new(Node::byte_leaf_void(*c).unwrap());
        assert_eq!(
            node.try_attach_outgoing_edge(child),
            Err(Error::EdgeAlreadyExists(*c))
        );
    }
}

#[test]
fn test_void_marker_leaf_end_to_end() {
    // byte 233 decodes to 'é' under single-byte decoding
    let edge_char = 233 as u8 as char;
    let node: Node<u32> = Node::byte_leaf_void(edge_char).unwrap();

    assert!(node.value().is_void());
    assert!(!node.value().is_none());
    assert_eq!(node.incoming_edge_first_char(), Some('é'));
    assert_eq!(node.incoming_edge().to_string(), "é");
}

#[test]
fn test_construction_fails_for_wide_characters() {
    for c in &['\u{100}', '中', '🦀'] {
        let null: Result<Node<u32>, Error> = Node::byte_leaf_null(*c);
        assert_eq!(null.unwrap_err(), Error::IncompatibleCharacter(*c));

        let void: Result<Node<u32>, Error> = Node::byte_leaf_void(*c);
        assert_eq!(void.unwrap_err(), Error::IncompatibleCharacter(*c));
    }
}

#[test]
fn test_flyweight_covers_whole_byte_domain() {
    for b in 0..=255u8 {
        let view = SingleByteChar::view_of(b);
        assert!(std::ptr::eq(view, SingleByteChar::view_of(b)));
        assert_eq!(view.len(), 1);
        assert_eq!(view.char_at(0), Some(b as char));
        assert_eq!(SingleByteChar::encode(b as char), Ok(b));
    }
}

#[test]
fn test_factory_builds_a_usable_subtree() {
    let factory = DefaultNodeFactory;

    let leaf_a = factory
        .create_node(
            EdgeLabel::from("pple"),
            NodeValue::new(1u32),
            Vec::new(),
            false,
        )
        .unwrap();
    let leaf_b = factory
        .create_node(EdgeLabel::from("x"), NodeValue::Void, Vec::new(), false)
        .unwrap();
    assert!(matches!(&leaf_b, Node::ByteLeaf { .. }));

    let root = factory
        .create_node(
            EdgeLabel::empty(),
            NodeValue::None,
            vec![Arc::new(leaf_a), Arc::new(leaf_b)],
            true,
        )
        .unwrap();

    assert!(root.outgoing_edge('p').is_some());
    assert!(root.outgoing_edge('x').is_some());
    assert!(root.outgoing_edge('q').is_none());

    let result = SearchResult::new("", Arc::new(root));
    let pairs: Vec<(String, NodeValue<u32>)> = result.pairs().collect();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, "pple");
    assert_eq!(pairs[0].1.as_value(), Some(&1));
    assert_eq!(pairs[1].0, "x");
    assert!(pairs[1].1.is_void());
}

#[test]
fn test_shared_nodes_read_from_many_threads() {
    let factory = DefaultNodeFactory;
    let mut children = Vec::new();
    for b in b'a'..=b'z' {
        children.push(Arc::new(
            factory
                .create_node(
                    EdgeLabel::from_char(b as char),
                    NodeValue::new(b as u32),
                    Vec::new(),
                    false,
                )
                .unwrap(),
        ));
    }
    let root = Arc::new(
        factory
            .create_node(EdgeLabel::empty(), NodeValue::None, children, true)
            .unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let root = Arc::clone(&root);
            thread::spawn(move || {
                let keys: Vec<String> = SearchResult::new("", root).keys().collect();
                assert_eq!(keys.len(), 26);
                assert_eq!(keys.first().map(String::as_str), Some("a"));
                assert_eq!(keys.last().map(String::as_str), Some("z"));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_random_single_byte_labels_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let b: u8 = rng.gen();
        let c = b as char;

        let node: Node<u32> = Node::byte_leaf_void(c).unwrap();
        assert_eq!(node.incoming_edge_first_char(), Some(c));
        assert_eq!(node.incoming_edge(), EdgeLabel::from_chars(&[c]));
    }
}

quickcheck! {
    fn prop_view_interning_round_trips(b: u8) -> bool {
        let view = SingleByteChar::view_of(b);
        std::ptr::eq(view, SingleByteChar::view_of(b))
            && SingleByteChar::encode(view.as_char()) == Ok(b)
    }

    fn prop_encode_succeeds_iff_single_byte(c: char) -> bool {
        match SingleByteChar::encode(c) {
            Ok(b) => (c as u32) <= 255 && b as u32 == c as u32,
            Err(Error::IncompatibleCharacter(reported)) => (c as u32) > 255 && reported == c,
            Err(_) => false,
        }
    }

    fn prop_first_char_matches_label_head(label: String) -> bool {
        if label.is_empty() {
            return true;
        }
        let node: Node<u32> = Node::char_leaf(EdgeLabel::from(label.as_str()), NodeValue::Void);
        node.incoming_edge_first_char() == node.incoming_edge().first_char()
            && node.incoming_edge_first_char() == label.chars().next()
    }

    fn prop_label_equality_ignores_representation(b: u8) -> bool {
        let c = b as char;
        EdgeLabel::from_char(c) == EdgeLabel::from_chars(&[c])
    }
}
