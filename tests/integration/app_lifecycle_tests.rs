/*!
 * Integration tests for application lifecycle
 */

use std::sync::Arc;

use anyhow::Result;
use transipa::app_config::Config;
use transipa::app_controller::Controller;
use transipa::providers::mock::{MockDictionary, MockTranslation};
use transipa::providers::TranslationOutcome;

use crate::common::{self, RecordingPresenter};

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    common::init_test_logging();
    let _controller = Controller::with_config(Config::default())?;
    Ok(())
}

/// Test the controller with custom configuration
#[test]
fn test_controller_with_custom_config_shouldInitializeWithoutErrors() -> Result<()> {
    common::init_test_logging();

    // Create a custom configuration with a non-default language pair
    let mut config = Config::default();
    config.source_language = "en".to_string();
    config.target_language = "fr".to_string();

    let _controller = Controller::with_config(config)?;
    Ok(())
}

/// Test the controller rejects an unknown language code
#[test]
fn test_controller_with_invalid_language_shouldFailToInitialize() {
    common::init_test_logging();

    let mut config = Config::default();
    config.target_language = "zzz".to_string();

    assert!(Controller::with_config(config).is_err());
}

/// Drive a full submission from a synchronous context
#[test]
fn test_submission_fromSyncContext_shouldProduceJoinedOutcome() {
    common::init_test_logging();

    let presenter = RecordingPresenter::new();
    let orchestrator = common::mock_orchestrator(
        MockTranslation::fixed("Xin chào"),
        MockDictionary::with_entries(&[("Hello", "/həˈloʊ/")]),
        Arc::clone(&presenter),
    );

    let outcome = tokio_test::block_on(async {
        orchestrator.handle_submit("Hello").await
    });

    let outcome = outcome.unwrap().unwrap();
    assert_eq!(outcome.translation, TranslationOutcome::Translated("Xin chào".to_string()));
    assert_eq!(outcome.phonetics[0].ipa, Some("/həˈloʊ/".to_string()));
    assert_eq!(presenter.presented_count(), 1);
}
