/*!
 * Rehearsal session driver.
 *
 * Owns the parsed scene, the chosen speaker, and an explicit cursor into
 * the utterance list. The core comparison components stay pure; all
 * progression state lives here.
 */

use log::debug;

use crate::aligner;
use crate::errors::AppError;
use crate::normalizer;
use crate::renderer::{self, Segment};
use crate::script_parser::Scene;
use crate::session::models::{SessionEvent, SessionStats};

/// Line-by-line progression through a scene for one chosen speaker
#[derive(Debug, Clone)]
pub struct RehearsalSession {
    // @field: Parsed scene, immutable for the session's lifetime
    scene: Scene,

    // @field: Uppercased speaker being rehearsed
    speaker: String,

    // @field: Index of the next utterance to deliver
    cursor: usize,

    // @field: Accumulated accuracy counters
    stats: SessionStats,
}

impl RehearsalSession {
    /// Start a session for the given speaker.
    ///
    /// The label is matched case-insensitively against the scene's speaker
    /// list; an unknown speaker is rejected up front.
    pub fn new(scene: Scene, speaker: &str) -> Result<Self, AppError> {
        let speaker = speaker.trim().to_uppercase();
        if !scene.speakers.contains(&speaker) {
            return Err(AppError::UnknownSpeaker(speaker));
        }

        debug!(
            "Starting rehearsal for {} over {} utterance(s)",
            speaker,
            scene.utterances.len()
        );

        Ok(Self {
            scene,
            speaker,
            cursor: 0,
            stats: SessionStats::new(),
        })
    }

    /// The speaker being rehearsed
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// The scene this session walks through
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Index of the next utterance to deliver
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Statistics accumulated so far
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Advance the cursor and classify the next line.
    ///
    /// Returns a Cue for another character's line, a Prompt for the
    /// rehearsed speaker's line, or None once the scene is exhausted.
    pub fn next_event(&mut self) -> Option<SessionEvent> {
        let utterance = self.scene.utterances.get(self.cursor)?.clone();
        self.cursor += 1;

        if utterance.speaker == self.speaker {
            Some(SessionEvent::Prompt(utterance))
        } else {
            self.stats.cues_delivered += 1;
            Some(SessionEvent::Cue(utterance))
        }
    }

    /// Review a typed guess against the canonical line text.
    ///
    /// Runs the normalize / align / render chain and folds the result into
    /// the session statistics.
    pub fn review_guess(&mut self, solution: &str, guess: &str) -> Vec<Segment> {
        let solution = normalizer::normalize(solution);
        let guess = normalizer::normalize(guess);

        let opcodes = aligner::align(&solution.processed, &guess.processed);
        self.stats.record_review(&opcodes);

        renderer::render(&solution, &guess, &opcodes)
    }
}
