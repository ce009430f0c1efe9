use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::language_utils;
use crate::orchestrator::{CombinedOutcome, Presenter, TranslationOrchestrator};
use crate::phonetics::PhoneticResolver;
use crate::providers::dictionary::FreeDictionary;
use crate::providers::mymemory::MyMemory;
use crate::speech::{PlatformSpeech, SpeechSynthesizer};

// @module: Application controller wiring the pipeline to the console

/// Console implementation of the presentation collaborator.
///
/// Renders each word above its IPA transcription, a separator, then the
/// translation. The busy state shows as a spinner for the duration of the
/// concurrent fetch phase.
pub struct ConsolePresenter {
    /// Active spinner while the pipeline is busy
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsolePresenter {
    /// Create a new console presenter
    pub fn new() -> Self {
        Self { spinner: Mutex::new(None) }
    }

    fn start_spinner(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Đang tải kết quả...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(spinner);
    }

    fn stop_spinner(&self) {
        if let Some(spinner) = self.spinner.lock().unwrap().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for ConsolePresenter {
    fn set_busy(&self, busy: bool) {
        if busy {
            self.start_spinner();
        } else {
            self.stop_spinner();
        }
    }

    fn present(&self, _source_text: &str, outcome: &CombinedOutcome) {
        let mut word_line = String::new();
        let mut ipa_line = String::new();
        for entry in &outcome.phonetics {
            let ipa = entry.ipa.as_deref().unwrap_or(" ");
            let width = entry.word.chars().count().max(ipa.chars().count()) + 2;
            word_line.push_str(&pad_to(&entry.word, width));
            ipa_line.push_str(&pad_to(ipa, width));
        }

        let mut stdout = std::io::stdout();
        let _ = writeln!(stdout, "{}", word_line.trim_end());
        let _ = writeln!(stdout, "{}", ipa_line.trim_end());
        let _ = writeln!(stdout, "---");
        let _ = writeln!(stdout, "{}", outcome.translation.display_text());
    }

    fn present_error(&self, error: &AppError) {
        let _ = writeln!(std::io::stderr(), "{}", error);
    }
}

/// Pad a string with spaces to the given display width
fn pad_to(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    for _ in text.chars().count()..width {
        padded.push(' ');
    }
    padded
}

/// Main application controller for the translation pipeline
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Pipeline orchestrator
    orchestrator: TranslationOrchestrator,
    // @field: Speech collaborator
    speech: Arc<dyn SpeechSynthesizer>,
    // @field: Last accepted submission and its outcome, for speech replay
    last_result: Mutex<Option<(String, CombinedOutcome)>>,
}

impl Controller {
    /// Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let translator = Arc::new(MyMemory::new(
            &config.translation.endpoint,
            config.language_pair(),
            config.translation.timeout_secs,
        ));
        let dictionary = Arc::new(FreeDictionary::new(
            &config.dictionary.endpoint,
            config.dictionary.timeout_secs,
        ));
        let presenter = Arc::new(ConsolePresenter::new());
        let orchestrator = TranslationOrchestrator::new(
            translator,
            PhoneticResolver::new(dictionary),
            presenter,
        );
        let speech = Arc::new(PlatformSpeech::new(config.speech.rate));

        Ok(Self {
            config,
            orchestrator,
            speech,
            last_result: Mutex::new(None),
        })
    }

    /// Translate a single text and render the result
    pub async fn run_once(&self, text: &str) -> Result<(), AppError> {
        if let Some(outcome) = self.orchestrator.handle_submit(text).await? {
            let mut last = self.last_result.lock().unwrap();
            *last = Some((text.trim().to_string(), outcome));
        }
        Ok(())
    }

    /// Interactive loop: one submission per input line.
    ///
    /// `:speak` replays the last source text through the speech
    /// collaborator, `:speak-vi` the last translation, `:q` quits.
    pub async fn run_interactive(&self) -> Result<()> {
        info!(
            "Translating {} -> {}. Enter text, :q to quit.",
            language_utils::get_language_name(&self.config.source_language)?,
            language_utils::get_language_name(&self.config.target_language)?,
        );

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            match line.trim() {
                ":q" | ":quit" => break,
                ":speak" => {
                    self.speak_last(false);
                    continue;
                }
                ":speak-vi" => {
                    self.speak_last(true);
                    continue;
                }
                _ => {}
            }

            // Validation errors are already rendered by the presenter;
            // the loop just moves on to the next line.
            if let Err(error) = self.run_once(&line).await {
                debug!("Submission rejected: {}", error);
            }
        }

        Ok(())
    }

    /// Replay the last source text or translation through the speech
    /// collaborator
    fn speak_last(&self, translated: bool) {
        let last = self.last_result.lock().unwrap();
        match last.as_ref() {
            Some((source_text, outcome)) => {
                if translated {
                    self.speech.speak(
                        &outcome.translation.display_text(),
                        &self.config.speech.target_voice,
                    );
                } else {
                    self.speech.speak(source_text, &self.config.speech.source_voice);
                }
            }
            None => debug!("Nothing to speak yet"),
        }
    }
}
