/*!
 * Script document parsing.
 *
 * Reads a raw script document into a `Scene`: the distinct speakers in
 * first-appearance order and the ordered sequence of (speaker, utterance)
 * records. The parser only needs sequential line access to the stream and
 * only fails when the stream itself cannot be read; empty or structurally
 * odd documents parse to an empty Scene, which callers treat as their own
 * precondition failure.
 */

use std::io::{BufRead, Cursor};

use log::{debug, warn};

use crate::app_config::ScriptFormat;
use crate::errors::ScriptError;

/// One speaker-attributed line of dialogue, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// Speaker label, uppercased
    pub speaker: String,

    /// Dialogue text; consecutive source lines joined with '\n'
    pub text: String,
}

/// The parsed in-memory representation of a script document.
///
/// Immutable once parsed. Every `Utterance.speaker` appears in `speakers`;
/// the reverse does not hold, since a header with no dialogue under it
/// still registers the speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Distinct speaker labels, ordered by first appearance
    pub speakers: Vec<String>,

    /// Dialogue records in document order
    pub utterances: Vec<Utterance>,
}

impl Scene {
    /// Parse a script document from a buffered reader.
    ///
    /// Lines starting with the comment prefix are skipped; a line matching
    /// the speaker pattern starts a new utterance under that (uppercased)
    /// label; every other line accumulates into the current utterance's
    /// text. An utterance is emitted when the next header arrives or the
    /// stream ends, and only if both its speaker and its text are
    /// non-empty. Fails only on an unreadable stream or an invalid
    /// speaker pattern.
    pub fn parse<R: BufRead>(reader: R, format: &ScriptFormat) -> Result<Scene, ScriptError> {
        let header = format.speaker_regex()?;

        let mut speakers: Vec<String> = Vec::new();
        let mut utterances: Vec<Utterance> = Vec::new();

        let mut current_speaker = String::new();
        let mut current_text = String::new();

        for line in reader.lines() {
            let raw = line?;
            // Tolerate CRLF documents
            let line = raw.trim_end_matches('\r');

            if !format.comment_prefix.is_empty() && line.starts_with(&format.comment_prefix) {
                continue;
            }

            if let Some(caps) = header.captures(line) {
                Self::flush(&mut current_speaker, &mut current_text, &mut utterances);

                let label = caps
                    .get(1)
                    .map(|m| m.as_str().trim())
                    .unwrap_or_default()
                    .to_uppercase();

                if label.is_empty() {
                    warn!("Ignoring speaker header with empty label: {:?}", line);
                    continue;
                }

                if !speakers.contains(&label) {
                    speakers.push(label.clone());
                }
                current_speaker = label;
            } else {
                if !current_text.is_empty() {
                    current_text.push('\n');
                }
                current_text.push_str(line);
            }
        }

        Self::flush(&mut current_speaker, &mut current_text, &mut utterances);

        debug!(
            "Parsed scene: {} speaker(s), {} utterance(s)",
            speakers.len(),
            utterances.len()
        );

        Ok(Scene {
            speakers,
            utterances,
        })
    }

    /// Parse a script document held in memory
    pub fn parse_str(content: &str, format: &ScriptFormat) -> Result<Scene, ScriptError> {
        Self::parse(Cursor::new(content), format)
    }

    /// Emit the accumulated utterance if both fields are non-empty.
    ///
    /// Text seen before the first header has no speaker and is dropped,
    /// matching the document convention that dialogue belongs to the
    /// nearest preceding header.
    fn flush(speaker: &mut String, text: &mut String, utterances: &mut Vec<Utterance>) {
        let text = std::mem::take(text);
        if !speaker.is_empty() && !text.trim().is_empty() {
            utterances.push(Utterance {
                speaker: speaker.clone(),
                text,
            });
        }
    }
}
