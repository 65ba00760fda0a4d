/*!
 * Tests for the segment rendering contract
 */

use cuecheck::aligner::{align, Tag};
use cuecheck::normalizer::normalize;
use cuecheck::renderer::{check_guess, render, Segment, SegmentTag};

fn concat_by(segments: &[Segment], keep: &[SegmentTag]) -> String {
    segments
        .iter()
        .filter(|s| keep.contains(&s.tag))
        .map(|s| s.text.as_str())
        .collect()
}

#[test]
fn test_checkGuess_correctPlusExtra_shouldReconstructGuessExactly() {
    let cases = [
        ("to be or not to be", "to be or not to be"),
        ("to be or not to be", "to be or two bee"),
        ("a line with words", ""),
        ("", "entirely invented words"),
        ("the quick brown fox", "the quick red fox jumps"),
    ];

    for (solution, guess) in cases {
        let segments = check_guess(solution, guess);
        assert_eq!(
            concat_by(&segments, &[SegmentTag::Correct, SegmentTag::Extra]),
            guess,
            "guess reconstruction failed for {:?}",
            (solution, guess)
        );
    }
}

#[test]
fn test_align_solutionSideSlices_shouldReconstructSolutionExactly() {
    let cases = [
        ("to be or not to be", "to be or two bee"),
        ("a line with words", ""),
        ("the quick brown fox jumps over", "quick fox over"),
        ("repeated words repeated words", "repeated words"),
    ];

    for (solution, guess) in cases {
        let norm_solution = normalize(solution);
        let norm_guess = normalize(guess);
        let opcodes = align(&norm_solution.processed, &norm_guess.processed);

        // Equal, Delete, and the solution part of Replace cover all of A.
        let rebuilt: String = opcodes
            .iter()
            .filter(|op| matches!(op.tag, Tag::Equal | Tag::Delete | Tag::Replace))
            .map(|op| norm_solution.original_slice(op.a_begin, op.a_end))
            .collect();
        assert_eq!(rebuilt, solution, "solution reconstruction failed for {:?}", (solution, guess));
    }
}

#[test]
fn test_render_replace_shouldEmitGuessSliceBeforeSolutionSlice() {
    let solution = normalize("not");
    let guess = normalize("knot");

    let opcodes = align(&solution.processed, &guess.processed);
    let segments = render(&solution, &guess, &opcodes);

    assert_eq!(
        segments,
        vec![
            Segment {
                text: "knot".to_string(),
                tag: SegmentTag::Extra,
            },
            Segment {
                text: "not".to_string(),
                tag: SegmentTag::Missing,
            },
        ]
    );
}

#[test]
fn test_checkGuess_omittedMiddle_shouldMarkItMissing() {
    let segments = check_guess("friends romans countrymen", "friends countrymen");

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].tag, SegmentTag::Correct);
    assert_eq!(segments[1].tag, SegmentTag::Missing);
    assert_eq!(segments[1].text, "romans ");
    assert_eq!(segments[2].tag, SegmentTag::Correct);
}

#[test]
fn test_checkGuess_normalizationDifferences_shouldStillBeCorrect() {
    // Case, punctuation, and accents differ; the words match.
    let segments = check_guess("Et tu, Brute?", "et tu brute");

    assert!(segments.iter().all(|s| s.tag == SegmentTag::Correct));
}

#[test]
fn test_checkGuess_bothEmpty_shouldYieldNoSegments() {
    assert!(check_guess("", "").is_empty());
}
