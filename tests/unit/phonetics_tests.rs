/*!
 * Tests for per-word phonetic resolution through the public API
 */

use std::sync::Arc;

use async_trait::async_trait;
use transipa::phonetics::{clean_token, fallback_keys, tokenize, PhoneticResolver};
use transipa::providers::mock::MockDictionary;
use transipa::providers::DictionaryApi;

#[test]
fn test_tokenize_shouldMatchWhitespaceRuns() {
    let cases = [
        ("Hello world", vec!["Hello", "world"]),
        ("  leading and  trailing  ", vec!["leading", "and", "trailing"]),
        ("one", vec!["one"]),
    ];
    for (input, expected) in cases {
        assert_eq!(tokenize(input), expected, "input: {:?}", input);
    }
}

#[tokio::test]
async fn test_resolve_all_outputMatchesTokenCountAndOrder() {
    let resolver = PhoneticResolver::new(Arc::new(MockDictionary::empty()));

    for input in ["a b c d e", "Hello, world!", "  padded   input  ", "single"] {
        let tokens = tokenize(input);
        let result = resolver.resolve_all(input).await;

        assert_eq!(result.len(), tokens.len(), "input: {:?}", input);
        for (entry, token) in result.iter().zip(tokens.iter()) {
            assert_eq!(entry.word, *token);
        }
    }
}

/// Dictionary whose lookups complete in reverse submission order, to prove
/// the resolver reorders completions back to token order
#[derive(Debug)]
struct ReverseOrderDictionary;

#[async_trait]
impl DictionaryApi for ReverseOrderDictionary {
    async fn phonetic(&self, word: &str) -> Option<String> {
        // Longer words answer faster
        let delay = 60u64.saturating_sub(word.len() as u64 * 10);
        tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
        Some(format!("/{}/", word))
    }
}

#[tokio::test]
async fn test_resolve_all_withOutOfOrderCompletions_shouldKeepInputOrder() {
    let resolver = PhoneticResolver::new(Arc::new(ReverseOrderDictionary));

    let result = resolver.resolve_all("a bb ccc dddd").await;
    let words: Vec<&str> = result.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["a", "bb", "ccc", "dddd"]);
    assert_eq!(result[0].ipa, Some("/a/".to_string()));
    assert_eq!(result[3].ipa, Some("/dddd/".to_string()));
}

#[tokio::test]
async fn test_resolve_all_lookupUsesCleanedVariantButKeepsOriginalWord() {
    let dictionary = MockDictionary::with_entries(&[("Hello", "/həˈloʊ/")]);
    let lookup_log = dictionary.lookup_log();
    let resolver = PhoneticResolver::new(Arc::new(dictionary));

    let result = resolver.resolve_all("Hello!").await;
    assert_eq!(result[0].word, "Hello!");
    assert_eq!(result[0].ipa, Some("/həˈloʊ/".to_string()));
    assert_eq!(lookup_log.lock().unwrap().as_slice(), &["Hello".to_string()]);
}

#[tokio::test]
async fn test_resolve_all_exhaustedFallbackChain_shouldTryEveryKey() {
    let dictionary = MockDictionary::empty();
    let lookup_log = dictionary.lookup_log();
    let resolver = PhoneticResolver::new(Arc::new(dictionary));

    let result = resolver.resolve_all("cats").await;
    assert_eq!(result[0].ipa, None);
    assert_eq!(
        lookup_log.lock().unwrap().as_slice(),
        &["cats".to_string(), "cat".to_string()]
    );
}

#[test]
fn test_clean_token_and_fallback_keys_composeAsDocumented() {
    // "it's?" strips the question mark, then falls back on the apostrophe.
    // The trailing-s rule does not apply since "it's" ends with "'s" -> 's'.
    let cleaned = clean_token("it's?");
    assert_eq!(cleaned, "it's");
    assert_eq!(fallback_keys(&cleaned), vec!["it's", "it'", "it"]);
}
