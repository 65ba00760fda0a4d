/*!
 * # cuecheck - rehearse your lines in the terminal
 *
 * A library and CLI for rehearsing a part from a theater script.
 *
 * ## Features
 *
 * - Parse a script document into speakers and dialogue lines
 * - Walk a scene line by line, showing the other characters' cues
 * - Compare a typed recitation against the canonical line, word by word
 * - Classify every word as correct, extra, or missing for highlighting
 * - Optional spoken playback of cues through an external TTS command
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `script_parser`: Script document parsing into a `Scene`
 * - `normalizer`: Tokenization and comparison normalization of a line
 * - `aligner`: Longest-common-run alignment of two token sequences
 * - `renderer`: Classified segment stream for presentation layers
 * - `session`: Line-by-line rehearsal cursor over a parsed scene
 * - `app_controller`: Main application controller
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod aligner;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod normalizer;
pub mod renderer;
pub mod script_parser;
pub mod session;

// Re-export main types for easier usage
pub use aligner::{align, Opcode, Tag};
pub use app_config::{Config, ScriptFormat};
pub use app_controller::Controller;
pub use errors::{AppError, ScriptError};
pub use normalizer::{normalize, NormalizedText};
pub use renderer::{check_guess, Segment, SegmentTag};
pub use script_parser::{Scene, Utterance};
pub use session::{RehearsalSession, SessionEvent, SessionStats};
