/*!
 * Orchestration of the translation + phonetics pipeline.
 *
 * A submission fans out into two concurrent fetches, the Vietnamese
 * translation and the per-word IPA resolution, and both must complete
 * before the joined outcome is handed to the presentation collaborator.
 * A request epoch discards completions that a newer submission has
 * already superseded.
 */

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, info};

use crate::errors::AppError;
use crate::phonetics::{PhoneticResolver, WordPhonetic};
use crate::providers::{TranslationApi, TranslationOutcome};

/// A validated, trimmed translation request
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    /// The non-empty, trimmed source text
    source_text: String,
}

impl TranslationRequest {
    /// Build a request from raw user input.
    ///
    /// Trims the input and rejects blank submissions before any network
    /// activity happens.
    pub fn new(raw_input: &str) -> Result<Self, AppError> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(AppError::EmptyInput);
        }
        Ok(Self { source_text: trimmed.to_string() })
    }

    /// The text to translate
    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

/// The joined result of one submission, the sole artifact handed to
/// presentation
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedOutcome {
    /// Translation of the whole text
    pub translation: TranslationOutcome,
    /// Per-token phonetics, in source token order
    pub phonetics: Vec<WordPhonetic>,
}

/// Presentation collaborator boundary.
///
/// Implementations own all rendering; the orchestrator only tells them
/// when the pipeline is busy and hands over each joined outcome exactly
/// once.
pub trait Presenter: Send + Sync {
    /// Signal the start or end of the concurrent fetch phase
    fn set_busy(&self, busy: bool);

    /// Render a joined outcome together with the source text it answers
    fn present(&self, source_text: &str, outcome: &CombinedOutcome);

    /// Render a validation message for a rejected submission
    fn present_error(&self, error: &AppError);
}

/// Runs the translation and phonetics fetches concurrently and joins them
pub struct TranslationOrchestrator {
    /// Translation API client
    translator: Arc<dyn TranslationApi>,
    /// Per-word phonetics resolver
    resolver: PhoneticResolver,
    /// Presentation collaborator
    presenter: Arc<dyn Presenter>,
    /// Submission sequence number, used to discard stale completions
    epoch: AtomicU64,
}

impl TranslationOrchestrator {
    /// Create a new orchestrator over the given collaborators
    pub fn new(
        translator: Arc<dyn TranslationApi>,
        resolver: PhoneticResolver,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            translator,
            resolver,
            presenter,
            epoch: AtomicU64::new(0),
        }
    }

    /// Handle one user submission end to end.
    ///
    /// Blank input is rejected before any network activity. Otherwise both
    /// fetches start immediately and the busy signal brackets the joined
    /// wait; fetch failures are already absorbed into placeholder values,
    /// so the outcome is always produced. Returns `Ok(None)` when a newer
    /// submission superseded this one while it was in flight.
    pub async fn handle_submit(&self, raw_input: &str) -> Result<Option<CombinedOutcome>, AppError> {
        let request = match TranslationRequest::new(raw_input) {
            Ok(request) => request,
            Err(error) => {
                self.presenter.present_error(&error);
                return Err(error);
            }
        };

        let my_epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let text = request.source_text();
        info!("Translating {} characters", text.len());

        self.presenter.set_busy(true);
        let (translation, phonetics) = tokio::join!(
            self.translator.translate(text),
            self.resolver.resolve_all(text),
        );

        // A stale completion must not touch the busy state either; the
        // superseding submission owns the spinner now.
        if self.epoch.load(Ordering::SeqCst) != my_epoch {
            debug!("Discarding stale completion for superseded submission");
            return Ok(None);
        }
        self.presenter.set_busy(false);

        let outcome = CombinedOutcome { translation, phonetics };
        self.presenter.present(text, &outcome);
        Ok(Some(outcome))
    }
}
