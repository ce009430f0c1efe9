/*!
 * Speech synthesis collaborator boundary.
 *
 * Playback is delegated to a platform capability. When none is available
 * the request is logged and dropped; a missing speech engine is never a
 * user-facing failure.
 */

use log::{debug, error};

/// Text-to-speech collaborator.
///
/// `speak` receives the text and a BCP-47 language tag and returns
/// immediately; playback, queuing and cancellation are the collaborator's
/// concern.
pub trait SpeechSynthesizer: Send + Sync {
    /// Speak the given text in the given language
    fn speak(&self, text: &str, lang_tag: &str);

    /// Whether a speech engine is actually available
    fn is_supported(&self) -> bool {
        false
    }
}

/// Platform speech stub for environments without a speech engine.
///
/// Mirrors the behavior of a missing platform capability: the request is
/// logged once at error level and silently dropped.
#[derive(Debug, Default)]
pub struct PlatformSpeech {
    /// Speech rate multiplier, kept for engines that honor it
    rate: f32,
}

impl PlatformSpeech {
    /// Create a new platform speech stub
    pub fn new(rate: f32) -> Self {
        Self { rate }
    }
}

impl SpeechSynthesizer for PlatformSpeech {
    fn speak(&self, text: &str, lang_tag: &str) {
        debug!("Speech requested: {} characters, lang {}, rate {}", text.len(), lang_tag, self.rate);
        error!("Speech synthesis is not supported on this platform.");
    }
}
