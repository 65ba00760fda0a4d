/*!
 * Classified segment stream for presentation layers.
 *
 * Combines the opcode list from the aligner with the *original* substrings
 * kept by the normalizer, so the feedback shows the user's own words and
 * the script's own words, not their normalized comparison forms. Styling
 * (color, strikethrough) is the consumer's concern; each segment only
 * carries an abstract tag.
 */

use crate::aligner::{self, Opcode, Tag};
use crate::normalizer::{self, NormalizedText};

/// How a rendered segment should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentTag {
    /// Recited correctly
    Correct,
    /// Present in the guess but not in the solution
    Extra,
    /// Present in the solution but omitted by the guess
    Missing,
}

/// One contiguous piece of feedback text with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Original text of the segment
    pub text: String,

    /// Classification for the presentation layer
    pub tag: SegmentTag,
}

/// Turn an opcode list into ordered feedback segments.
///
/// Equal and Insert opcodes take the guess's original slice (tagged
/// Correct and Extra); Delete takes the solution's (tagged Missing);
/// Replace emits the guess slice first, then the solution slice - the
/// guess-first ordering is a fixed presentation convention. Concatenating
/// the Correct and Extra segments reproduces the guess's original text;
/// Correct and Missing reproduce the solution's.
pub fn render(
    solution: &NormalizedText,
    guess: &NormalizedText,
    opcodes: &[Opcode],
) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(opcodes.len() + 1);

    for opcode in opcodes {
        match opcode.tag {
            Tag::Equal => segments.push(Segment {
                text: guess.original_slice(opcode.b_begin, opcode.b_end),
                tag: SegmentTag::Correct,
            }),
            Tag::Insert => segments.push(Segment {
                text: guess.original_slice(opcode.b_begin, opcode.b_end),
                tag: SegmentTag::Extra,
            }),
            Tag::Delete => segments.push(Segment {
                text: solution.original_slice(opcode.a_begin, opcode.a_end),
                tag: SegmentTag::Missing,
            }),
            Tag::Replace => {
                segments.push(Segment {
                    text: guess.original_slice(opcode.b_begin, opcode.b_end),
                    tag: SegmentTag::Extra,
                });
                segments.push(Segment {
                    text: solution.original_slice(opcode.a_begin, opcode.a_end),
                    tag: SegmentTag::Missing,
                });
            }
        }
    }

    segments
}

/// Compare a typed guess against the canonical line text.
///
/// Normalizes both sides, aligns the comparison tokens, and renders the
/// feedback segments. This is the one call a driver makes per submitted
/// guess; it is synchronous, pure, and never fails.
pub fn check_guess(solution: &str, guess: &str) -> Vec<Segment> {
    let solution = normalizer::normalize(solution);
    let guess = normalizer::normalize(guess);

    let opcodes = aligner::align(&solution.processed, &guess.processed);
    render(&solution, &guess, &opcodes)
}
