use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::Command;

use crate::app_config::Config;
use crate::renderer::{Segment, SegmentTag};
use crate::script_parser::Scene;
use crate::session::{RehearsalSession, SessionEvent};

// @module: Application controller for rehearsal sessions

const ANSI_GREEN: &str = "\x1B[32m";
const ANSI_RED: &str = "\x1B[31m";
const ANSI_RED_STRIKE: &str = "\x1B[31;9m";
const ANSI_RESET: &str = "\x1B[0m";

/// Main application controller for script rehearsal
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Open and parse a script file, enforcing the non-empty preconditions.
    ///
    /// An unreadable file and an empty scene (no speakers or no dialogue)
    /// are both blocking failures: there is nothing to rehearse, so the
    /// session cannot start.
    pub fn load_scene(&self, script_path: &Path) -> Result<Scene> {
        let file = File::open(script_path)
            .with_context(|| format!("Failed to open script file: {}", script_path.display()))?;

        let scene = Scene::parse(BufReader::new(file), &self.config.script)
            .with_context(|| format!("Failed to parse script file: {}", script_path.display()))?;

        if scene.speakers.is_empty() {
            return Err(anyhow!(
                "No speakers found in {} - is it a script file?",
                script_path.display()
            ));
        }
        if scene.utterances.is_empty() {
            return Err(anyhow!(
                "No dialogue lines found in {}",
                script_path.display()
            ));
        }

        Ok(scene)
    }

    /// Run a rehearsal session on the standard terminal streams
    pub fn run(&self, script_path: &Path, speaker: Option<&str>) -> Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        self.run_with_io(script_path, speaker, &mut stdin.lock(), &mut stdout)
    }

    /// Run a rehearsal session over generic input/output streams.
    ///
    /// The interactive loop: cues from other characters are printed (and
    /// optionally spoken); for each of the rehearsed speaker's lines a
    /// guess is read from `input` and the reviewed line is printed with
    /// per-word highlighting.
    pub fn run_with_io<R: BufRead, W: Write>(
        &self,
        script_path: &Path,
        speaker: Option<&str>,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        let scene = self.load_scene(script_path)?;

        let speaker = match speaker {
            Some(name) => name.to_uppercase(),
            None => self.prompt_speaker(&scene, input, output)?,
        };

        let mut session = RehearsalSession::new(scene, &speaker)?;
        info!("Rehearsing {} from {}", speaker, script_path.display());

        while let Some(event) = session.next_event() {
            match event {
                SessionEvent::Cue(utterance) => {
                    writeln!(output, "{}\n{}\n", utterance.speaker, utterance.text)?;
                    if self.config.playback.speak_cues {
                        self.speak(&utterance.text);
                    }
                }
                SessionEvent::Prompt(utterance) => {
                    write!(output, "{}> ", session.speaker())?;
                    output.flush()?;

                    let mut guess = String::new();
                    if input.read_line(&mut guess)? == 0 {
                        warn!("Input ended before the scene finished");
                        break;
                    }
                    let guess = guess.trim_end_matches(['\r', '\n']);

                    let segments = session.review_guess(&utterance.text, guess);
                    writeln!(output, "{}\n", format_segments(&segments))?;
                }
            }
        }

        let stats = session.stats();
        writeln!(
            output,
            "Scene complete: {} line(s) answered, {} perfect, {:.0}% of scripted words recited",
            stats.prompts_answered,
            stats.perfect_lines,
            stats.accuracy_percentage()
        )?;

        Ok(())
    }

    /// Ask the user which character to rehearse
    fn prompt_speaker<R: BufRead, W: Write>(
        &self,
        scene: &Scene,
        input: &mut R,
        output: &mut W,
    ) -> Result<String> {
        writeln!(output, "Choose a character:")?;
        for (index, speaker) in scene.speakers.iter().enumerate() {
            writeln!(output, "  {}. {}", index + 1, speaker)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut choice = String::new();
        input.read_line(&mut choice)?;
        let choice = choice.trim();

        // Accept either the list number or the name itself
        if let Ok(number) = choice.parse::<usize>() {
            if number >= 1 && number <= scene.speakers.len() {
                return Ok(scene.speakers[number - 1].clone());
            }
        }

        let label = choice.to_uppercase();
        if scene.speakers.contains(&label) {
            return Ok(label);
        }

        Err(anyhow!("Unknown character: {}", choice))
    }

    /// Pipe a cue's text to the configured TTS command.
    ///
    /// Playback failures are logged and swallowed; a missing TTS binary
    /// must not end the rehearsal.
    fn speak(&self, text: &str) {
        let mut parts = self.config.playback.tts_command.split_whitespace();
        let Some(program) = parts.next() else {
            return;
        };

        debug!("Speaking cue via '{}'", program);
        match Command::new(program).args(parts).arg(text).status() {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("TTS command '{}' exited with {}", program, status),
            Err(e) => warn!("Failed to run TTS command '{}': {}", program, e),
        }
    }
}

/// Render review segments as ANSI-styled terminal text: green for correct
/// words, red struck-through for extra words, plain red for missing ones.
pub fn format_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        let style = match segment.tag {
            SegmentTag::Correct => ANSI_GREEN,
            SegmentTag::Extra => ANSI_RED_STRIKE,
            SegmentTag::Missing => ANSI_RED,
        };
        out.push_str(style);
        out.push_str(&segment.text);
        out.push_str(ANSI_RESET);
    }
    out
}
