//! Property-based tests for path construction invariants.

#![allow(clippy::expect_used)]

use std::sync::Arc;

use proptest::prelude::*;

use crate::path::{Path, Segment};

/// Strategy for generating arbitrary segments.
fn arb_segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9_]*".prop_map(|name| Segment::Field(name.into())),
        (0usize..1024).prop_map(Segment::Index),
    ]
}

/// Strategy for generating arbitrary segment chains.
fn arb_segments() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec(arb_segment(), 0..12)
}

fn build(segments: &[Segment]) -> Path {
    segments.iter().fold(Path::root(), |path, segment| match segment {
        Segment::Field(name) => path.append_field(Arc::clone(name)),
        Segment::Index(index) => path.append_index(*index),
    })
}

proptest! {
    #[test]
    fn depth_counts_segments(segments in arb_segments()) {
        let path = build(&segments);
        prop_assert_eq!(path.depth(), segments.len());
    }

    #[test]
    fn depth_invariant_holds_along_the_chain(segments in arb_segments()) {
        let mut current = build(&segments);
        while let Some(parent) = current.parent() {
            prop_assert_eq!(current.depth(), parent.depth() + 1);
            current = parent.clone();
        }
        prop_assert_eq!(current.depth(), 0);
    }

    #[test]
    fn segments_round_trip(segments in arb_segments()) {
        let path = build(&segments);
        prop_assert_eq!(path.segments(), segments);
    }

    #[test]
    fn independently_built_paths_are_equal_and_hash_alike(segments in arb_segments()) {
        let a = build(&segments);
        let b = build(&segments);
        prop_assert_eq!(&a, &b);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        prop_assert!(set.contains(&b));
    }

    #[test]
    fn display_matches_segment_notation(segments in arb_segments()) {
        let path = build(&segments);
        let mut expected = String::new();
        for segment in &segments {
            match segment {
                Segment::Field(name) => {
                    expected.push('.');
                    expected.push_str(name);
                }
                Segment::Index(index) => {
                    expected.push('[');
                    expected.push_str(&index.to_string());
                    expected.push(']');
                }
            }
        }
        prop_assert_eq!(path.to_string(), expected);
    }
}
