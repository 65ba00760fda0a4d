/*!
 * Session-specific models and statistics.
 */

use crate::aligner::{Opcode, Tag};
use crate::script_parser::Utterance;

/// One step of a rehearsal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Another character's line: display it (and optionally speak it)
    Cue(Utterance),

    /// The rehearsing character's line: collect a guess and review it
    Prompt(Utterance),
}

/// Accuracy statistics accumulated over a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Other characters' lines delivered
    pub cues_delivered: usize,

    /// Prompts the user answered
    pub prompts_answered: usize,

    /// Answered lines with no extra and no missing tokens
    pub perfect_lines: usize,

    /// Tokens recited correctly
    pub tokens_correct: usize,

    /// Tokens present in a guess but not in the script
    pub tokens_extra: usize,

    /// Script tokens the user omitted
    pub tokens_missing: usize,
}

impl SessionStats {
    /// Create empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one reviewed line's opcodes into the counters
    pub fn record_review(&mut self, opcodes: &[Opcode]) {
        self.prompts_answered += 1;

        let mut line_perfect = true;
        for opcode in opcodes {
            match opcode.tag {
                Tag::Equal => {
                    self.tokens_correct += opcode.b_end - opcode.b_begin;
                }
                Tag::Insert => {
                    self.tokens_extra += opcode.b_end - opcode.b_begin;
                    line_perfect = false;
                }
                Tag::Delete => {
                    self.tokens_missing += opcode.a_end - opcode.a_begin;
                    line_perfect = false;
                }
                Tag::Replace => {
                    self.tokens_extra += opcode.b_end - opcode.b_begin;
                    self.tokens_missing += opcode.a_end - opcode.a_begin;
                    line_perfect = false;
                }
            }
        }

        if line_perfect {
            self.perfect_lines += 1;
        }
    }

    /// Share of script tokens recited correctly, as a percentage
    pub fn accuracy_percentage(&self) -> f64 {
        let scripted = self.tokens_correct + self.tokens_missing;
        if scripted == 0 {
            return 0.0;
        }
        (self.tokens_correct as f64 / scripted as f64) * 100.0
    }
}
