/*!
 * Longest-common-run alignment of two token sequences.
 *
 * This is the Ratcliff/Obershelp family of matching (the algorithm behind
 * Python's difflib), not minimal edit distance: the longest run of tokens
 * common to both sequences anchors the alignment, then the windows before
 * and after it are aligned recursively. For line recitation feedback this
 * matches what a rehearsing actor expects - a swapped word is flagged as a
 * swapped word, not as a cascading rewrite of the whole line.
 *
 * No "autojunk" heuristic is applied: inputs are single spoken lines, far
 * below the scale where ignoring over-frequent tokens pays off. If one is
 * ever added it must be an explicit, disable-able option, since it changes
 * which matches are found.
 */

use std::collections::HashMap;
use std::hash::Hash;

/// How a pair of ranges relates, one variant per kind of edit.
///
/// Consumers must match exhaustively; there is deliberately no catch-all
/// variant, so a new tag cannot silently fall through a default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// The ranges are element-wise equal
    Equal,
    /// Present only in B (the guess)
    Insert,
    /// Present only in A (the solution)
    Delete,
    /// Both sides have a non-empty, non-equal range
    Replace,
}

/// A classified pair of half-open index ranges, one into each sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Classification of the range pair
    pub tag: Tag,

    /// Start of the range in A
    pub a_begin: usize,

    /// End of the range in A (exclusive)
    pub a_end: usize,

    /// Start of the range in B
    pub b_begin: usize,

    /// End of the range in B (exclusive)
    pub b_end: usize,
}

/// A maximal contiguous run of tokens equal between the two sequences:
/// `a[a_begin..a_begin + size] == b[b_begin..b_begin + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchBlock {
    /// Start of the run in A
    pub a_begin: usize,

    /// Start of the run in B
    pub b_begin: usize,

    /// Length of the run
    pub size: usize,
}

/// Align two sequences into a complete, ordered opcode partition.
///
/// The returned list is contiguous and exhaustive over both sequences: it
/// starts at `(0, 0)`, each opcode's end equals the next one's start on
/// both axes, and the last opcode ends at `(a.len(), b.len())`. Two empty
/// inputs produce an empty list. Deterministic and pure; ties between
/// equally long runs go to the earliest start in A, then the earliest
/// start in B.
pub fn align<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<Opcode> {
    let blocks = matching_blocks(a, b);
    let mut opcodes = Vec::with_capacity(blocks.len() * 2 + 1);

    // Sentinel zero-size block so the tail gap after the last match is
    // classified like any other gap.
    let sentinel = MatchBlock {
        a_begin: a.len(),
        b_begin: b.len(),
        size: 0,
    };

    let mut a_index = 0;
    let mut b_index = 0;

    for block in blocks.iter().chain(std::iter::once(&sentinel)) {
        let gap_tag = if a_index < block.a_begin && b_index < block.b_begin {
            Some(Tag::Replace)
        } else if a_index < block.a_begin {
            Some(Tag::Delete)
        } else if b_index < block.b_begin {
            Some(Tag::Insert)
        } else {
            None
        };

        if let Some(tag) = gap_tag {
            opcodes.push(Opcode {
                tag,
                a_begin: a_index,
                a_end: block.a_begin,
                b_begin: b_index,
                b_end: block.b_begin,
            });
        }

        a_index = block.a_begin + block.size;
        b_index = block.b_begin + block.size;

        if block.size > 0 {
            opcodes.push(Opcode {
                tag: Tag::Equal,
                a_begin: block.a_begin,
                a_end: a_index,
                b_begin: block.b_begin,
                b_end: b_index,
            });
        }
    }

    opcodes
}

/// Find all maximal non-overlapping matching runs, ordered by position.
///
/// The longest run in the full window is located first, then the windows
/// strictly before and strictly after it are searched recursively. Blocks
/// cannot cross, so ascending order in A implies ascending order in B.
/// Recursion depth is bounded by the number of blocks found, which is at
/// most `min(a.len(), b.len())`.
pub fn matching_blocks<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<MatchBlock> {
    // Positions of each token in B, ascending.
    let mut b2j: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, token) in b.iter().enumerate() {
        b2j.entry(token).or_default().push(j);
    }

    let mut blocks = Vec::new();
    collect_blocks(a, &b2j, 0, a.len(), 0, b.len(), &mut blocks);
    blocks
}

fn collect_blocks<'a, T: Eq + Hash>(
    a: &'a [T],
    b2j: &HashMap<&'a T, Vec<usize>>,
    a_low: usize,
    a_high: usize,
    b_low: usize,
    b_high: usize,
    out: &mut Vec<MatchBlock>,
) {
    let found = find_longest_match(a, b2j, a_low, a_high, b_low, b_high);
    if found.size == 0 {
        return;
    }

    collect_blocks(a, b2j, a_low, found.a_begin, b_low, found.b_begin, out);
    out.push(found);
    collect_blocks(
        a,
        b2j,
        found.a_begin + found.size,
        a_high,
        found.b_begin + found.size,
        b_high,
        out,
    );
}

/// Find the longest run `a[i..i + k] == b[j..j + k]` within the window.
///
/// For each position in A, the run length ending at `(i, j)` is one more
/// than the run ending at `(i - 1, j - 1)`. The best run is only replaced
/// on a strictly longer one, so among equal lengths the earliest `i` wins,
/// and among those the earliest `j`. A window with no common token yields
/// a zero-size run anchored at `(a_low, b_low)`.
fn find_longest_match<'a, T: Eq + Hash>(
    a: &'a [T],
    b2j: &HashMap<&'a T, Vec<usize>>,
    a_low: usize,
    a_high: usize,
    b_low: usize,
    b_high: usize,
) -> MatchBlock {
    let mut best_i = a_low;
    let mut best_j = b_low;
    let mut best_size = 0;

    // Length of the run ending at (i - 1, j) for each j, carried between
    // iterations of the outer loop.
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for (i, token) in a.iter().enumerate().take(a_high).skip(a_low) {
        let mut next_j2len = HashMap::new();

        if let Some(positions) = b2j.get(token) {
            for &j in positions {
                if j < b_low {
                    continue;
                }
                if j >= b_high {
                    break;
                }

                let k = if j > 0 {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                next_j2len.insert(j, k);

                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }

        j2len = next_j2len;
    }

    MatchBlock {
        a_begin: best_i,
        b_begin: best_j,
        size: best_size,
    }
}
