use anyhow::{anyhow, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ScriptError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Script document conventions
    #[serde(default)]
    pub script: ScriptFormat,

    /// Spoken playback of other characters' cues
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// On-disk conventions of a script document.
///
/// The grammar is an external convention, not something the parser can
/// infer, so both the comment prefix and the speaker header pattern are
/// configurable. The defaults match the plain-text format the app has
/// always read: `# comment` lines and `=NAME=` speaker headers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScriptFormat {
    // @field: Prefix marking a comment line
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,

    // @field: Regex matching a speaker header, label in capture group 1
    #[serde(default = "default_speaker_pattern")]
    pub speaker_pattern: String,
}

impl ScriptFormat {
    /// Compile the speaker header pattern
    pub fn speaker_regex(&self) -> Result<Regex, ScriptError> {
        Regex::new(&self.speaker_pattern).map_err(|e| ScriptError::SpeakerPattern(e.to_string()))
    }
}

impl Default for ScriptFormat {
    fn default() -> Self {
        Self {
            comment_prefix: default_comment_prefix(),
            speaker_pattern: default_speaker_pattern(),
        }
    }
}

/// Spoken playback settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaybackConfig {
    // @field: Whether cues are spoken aloud
    #[serde(default)]
    pub speak_cues: bool,

    // @field: External TTS command the cue text is passed to
    #[serde(default = "default_tts_command")]
    pub tts_command: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speak_cues: false,
            tts_command: default_tts_command(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_comment_prefix() -> String {
    "#".to_string()
}

fn default_speaker_pattern() -> String {
    // A line like "=HAMLET=" marks a speaker header
    r"^=([^=]+)=$".to_string()
}

fn default_tts_command() -> String {
    "espeak".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate the speaker header pattern
        let regex = Regex::new(&self.script.speaker_pattern)
            .map_err(|e| anyhow!("Invalid speaker pattern: {}", e))?;

        if regex.captures_len() < 2 {
            return Err(anyhow!(
                "Speaker pattern must have a capture group for the speaker label"
            ));
        }

        // Validate playback settings
        if self.playback.speak_cues && self.playback.tts_command.trim().is_empty() {
            return Err(anyhow!(
                "A TTS command is required when spoken playback is enabled"
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            script: ScriptFormat::default(),
            playback: PlaybackConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
