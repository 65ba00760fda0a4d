/*!
 * Tests for the longest-common-run alignment algorithm
 */

use cuecheck::aligner::{align, matching_blocks, MatchBlock, Opcode, Tag};

use crate::common;

/// Check the contiguity and exhaustiveness invariants over both axes
fn assert_partition(opcodes: &[Opcode], a_len: usize, b_len: usize) {
    if a_len == 0 && b_len == 0 {
        assert!(opcodes.is_empty());
        return;
    }

    assert_eq!(opcodes[0].a_begin, 0, "first opcode must start at A index 0");
    assert_eq!(opcodes[0].b_begin, 0, "first opcode must start at B index 0");

    for pair in opcodes.windows(2) {
        assert_eq!(pair[0].a_end, pair[1].a_begin, "gap or overlap on A axis");
        assert_eq!(pair[0].b_end, pair[1].b_begin, "gap or overlap on B axis");
    }

    let last = opcodes.last().unwrap();
    assert_eq!(last.a_end, a_len, "last opcode must end at A length");
    assert_eq!(last.b_end, b_len, "last opcode must end at B length");
}

/// Check the per-tag range invariants
fn assert_tag_shapes(opcodes: &[Opcode]) {
    for op in opcodes {
        let a_len = op.a_end - op.a_begin;
        let b_len = op.b_end - op.b_begin;
        match op.tag {
            Tag::Equal => {
                assert!(a_len > 0 && a_len == b_len);
            }
            Tag::Insert => {
                assert!(a_len == 0 && b_len > 0);
            }
            Tag::Delete => {
                assert!(a_len > 0 && b_len == 0);
            }
            Tag::Replace => {
                assert!(a_len > 0 && b_len > 0);
            }
        }
    }
}

#[test]
fn test_align_partitionInvariants_shouldHoldForVariedInputs() {
    let cases = [
        (common::tokens(&[]), common::tokens(&[])),
        (common::tokens(&["a"]), common::tokens(&[])),
        (common::tokens(&[]), common::tokens(&["a"])),
        (common::tokens(&["a", "b", "c"]), common::tokens(&["a", "b", "c"])),
        (
            common::tokens(&["to", "be", "or", "not", "to", "be"]),
            common::tokens(&["to", "be", "or", "two", "bee"]),
        ),
        (
            common::tokens(&["the", "rain", "in", "spain"]),
            common::tokens(&["rain", "spain", "falls"]),
        ),
        (
            common::tokens(&["x", "y", "z"]),
            common::tokens(&["p", "q"]),
        ),
    ];

    for (a, b) in &cases {
        let opcodes = align(a, b);
        assert_partition(&opcodes, a.len(), b.len());
        assert_tag_shapes(&opcodes);
    }
}

#[test]
fn test_align_identity_shouldYieldSingleEqualSpanningBoth() {
    let s = common::tokens(&["speak", "the", "speech", "i", "pray", "you"]);

    let opcodes = align(&s, &s);

    assert_eq!(opcodes.len(), 1);
    assert_eq!(opcodes[0].tag, Tag::Equal);
    assert_eq!((opcodes[0].a_begin, opcodes[0].a_end), (0, s.len()));
    assert_eq!((opcodes[0].b_begin, opcodes[0].b_end), (0, s.len()));
}

#[test]
fn test_align_totalMismatch_shouldNeverEmitEqual() {
    let a = common::tokens(&["one", "two", "three"]);
    let b = common::tokens(&["four", "five"]);

    let opcodes = align(&a, &b);

    assert!(opcodes.iter().all(|op| op.tag != Tag::Equal));
    assert_partition(&opcodes, a.len(), b.len());
}

#[test]
fn test_align_emptySides_shouldMatchContract() {
    let a = common::tokens(&["only", "solution"]);
    let b = common::tokens(&["only", "guess", "words"]);
    let empty: Vec<String> = Vec::new();

    assert_eq!(
        align(&empty, &b),
        vec![Opcode {
            tag: Tag::Insert,
            a_begin: 0,
            a_end: 0,
            b_begin: 0,
            b_end: 3,
        }]
    );
    assert_eq!(
        align(&a, &empty),
        vec![Opcode {
            tag: Tag::Delete,
            a_begin: 0,
            a_end: 2,
            b_begin: 0,
            b_end: 0,
        }]
    );
    assert!(align(&empty, &empty).is_empty());
}

#[test]
fn test_align_tieBetweenRuns_shouldPickEarliestStarts() {
    // Both halves of A match B equally well; the earlier one must win.
    let a = common::tokens(&["a", "b", "a", "b"]);
    let b = common::tokens(&["a", "b"]);

    let blocks = matching_blocks(&a, &b);
    assert_eq!(
        blocks,
        vec![MatchBlock {
            a_begin: 0,
            b_begin: 0,
            size: 2,
        }]
    );

    let opcodes = align(&a, &b);
    assert_eq!(opcodes[0].tag, Tag::Equal);
    assert_eq!((opcodes[0].a_begin, opcodes[0].a_end), (0, 2));
    assert_eq!(opcodes[1].tag, Tag::Delete);
}

#[test]
fn test_align_repeatedTokens_shouldPreferEarliestInB() {
    // "be" appears twice in B; the run anchored at the earlier position
    // must be chosen when lengths tie.
    let a = common::tokens(&["be"]);
    let b = common::tokens(&["be", "or", "be"]);

    let blocks = matching_blocks(&a, &b);
    assert_eq!(
        blocks,
        vec![MatchBlock {
            a_begin: 0,
            b_begin: 0,
            size: 1,
        }]
    );
}

#[test]
fn test_align_hamletScenario_shouldMatchPrefixThenReplaceTail() {
    let solution = common::tokens(&["to", "be", "or", "not", "to", "be"]);
    let guess = common::tokens(&["to", "be", "or", "two", "bee"]);

    let opcodes = align(&solution, &guess);

    assert_eq!(opcodes.len(), 2);
    assert_eq!(opcodes[0].tag, Tag::Equal);
    assert_eq!((opcodes[0].a_begin, opcodes[0].a_end), (0, 3));
    assert_eq!((opcodes[0].b_begin, opcodes[0].b_end), (0, 3));
    assert_eq!(opcodes[1].tag, Tag::Replace);
    assert_eq!((opcodes[1].a_begin, opcodes[1].a_end), (3, 6));
    assert_eq!((opcodes[1].b_begin, opcodes[1].b_end), (3, 5));
}

#[test]
fn test_align_swappedWords_shouldFlagOnlyTheSwappedPair() {
    // A rehearsing actor who swaps two words wants those two flagged, not
    // a minimal-edit rewrite of the whole line.
    let solution = common::tokens(&["never", "shall", "i", "forget", "this", "night"]);
    let guess = common::tokens(&["never", "shall", "i", "regret", "this", "night"]);

    let opcodes = align(&solution, &guess);

    assert_eq!(opcodes.len(), 3);
    assert_eq!(opcodes[0].tag, Tag::Equal);
    assert_eq!(opcodes[1].tag, Tag::Replace);
    assert_eq!((opcodes[1].a_begin, opcodes[1].a_end), (3, 4));
    assert_eq!(opcodes[2].tag, Tag::Equal);
}

#[test]
fn test_matchingBlocks_shouldBeOrderedAndNonOverlapping() {
    let a = common::tokens(&["a", "x", "b", "y", "c"]);
    let b = common::tokens(&["a", "b", "c"]);

    let blocks = matching_blocks(&a, &b);

    assert_eq!(blocks.len(), 3);
    for pair in blocks.windows(2) {
        assert!(pair[0].a_begin + pair[0].size <= pair[1].a_begin);
        assert!(pair[0].b_begin + pair[0].size <= pair[1].b_begin);
    }
}
