/*!
 * Rehearsal session module.
 *
 * This module provides:
 * - An explicit cursor over a parsed scene (no hidden iteration state)
 * - Cue/prompt classification of each line for the chosen speaker
 * - Per-session accuracy statistics
 */

pub mod manager;
pub mod models;

// Re-export main types
pub use manager::RehearsalSession;
pub use models::{SessionEvent, SessionStats};
