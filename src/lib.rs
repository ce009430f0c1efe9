/*!
 * # transipa - English to Vietnamese translation with per-word IPA
 *
 * A Rust library for translating English text to Vietnamese while resolving
 * a phonetic (IPA) transcription for every word of the source text.
 *
 * ## Features
 *
 * - Concurrent fetch of the translation and the per-word phonetics
 * - Progressive fallback chain for dictionary misses (plural and
 *   contraction forms)
 * - Failures degrade to placeholder values; a submission always yields a
 *   joined outcome
 * - Collaborator traits for presentation and text-to-speech, with console
 *   implementations in the binary
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `orchestrator`: Submission handling and the join of both fetches
 * - `phonetics`: Tokenization and the per-word IPA fallback chain
 * - `providers`: Clients for the upstream HTTP APIs:
 *   - `providers::mymemory`: MyMemory translation API client
 *   - `providers::dictionary`: Free Dictionary API client
 *   - `providers::mock`: Mock providers for testing
 * - `speech`: Text-to-speech collaborator boundary
 * - `app_controller`: Console front-end controller
 * - `language_utils`: ISO language code utilities
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
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod orchestrator;
pub mod phonetics;
pub mod providers;
pub mod speech;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError};
pub use orchestrator::{CombinedOutcome, Presenter, TranslationOrchestrator, TranslationRequest};
pub use phonetics::{PhoneticResolver, WordPhonetic};
pub use providers::{DictionaryApi, TranslationApi, TranslationOutcome};
