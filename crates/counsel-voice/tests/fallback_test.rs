use async_trait::async_trait;
use counsel_voice::{
    SynthesisStrategy, VoiceConfig, VoiceError, VoiceResult, VoiceSynthesizer,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const MP3_BYTES: &[u8] = b"\xff\xfb\x90\x00fake-mp3-frame";

/// Strategy that always succeeds, counting invocations.
struct OkStrategy {
    name: &'static str,
    calls: Arc<AtomicUsize>,
}

/// Strategy that always fails, counting invocations.
struct FailStrategy {
    name: &'static str,
    calls: Arc<AtomicUsize>,
}

fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

#[async_trait]
impl SynthesisStrategy for OkStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, VoiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(MP3_BYTES.to_vec())
    }
}

#[async_trait]
impl SynthesisStrategy for FailStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, VoiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(VoiceError::Provider {
            status: 500,
            body: "internal error".to_string(),
        })
    }
}

#[tokio::test]
async fn primary_failure_invokes_fallback_exactly_once() {
    let primary_calls = counter();
    let fallback_calls = counter();

    let synthesizer = VoiceSynthesizer::from_strategies(vec![
        Box::new(FailStrategy {
            name: "primary",
            calls: primary_calls.clone(),
        }),
        Box::new(OkStrategy {
            name: "fallback",
            calls: fallback_calls.clone(),
        }),
    ]);

    let result = synthesizer.synthesize("You get right to quiet enjoyment.").await;

    match result {
        VoiceResult::Audio(audio) => {
            assert_eq!(audio.source(), "fallback");
            assert_eq!(audio.bytes(), MP3_BYTES);
        }
        VoiceResult::Unavailable => panic!("expected audio from fallback"),
    }
    assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
    assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn primary_success_never_reaches_fallback() {
    let fallback_calls = counter();

    let synthesizer = VoiceSynthesizer::from_strategies(vec![
        Box::new(OkStrategy {
            name: "primary",
            calls: counter(),
        }),
        Box::new(FailStrategy {
            name: "fallback",
            calls: fallback_calls.clone(),
        }),
    ]);

    let result = synthesizer.synthesize("advice").await;
    assert!(result.is_available());
    assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_credential_skips_primary_entirely() {
    // With no YarnGPT key the default chain must contain only the fallback:
    // the primary is skipped, not attempted-and-failed.
    let synthesizer = VoiceSynthesizer::new(VoiceConfig::default()).unwrap();
    assert_eq!(synthesizer.strategy_names(), vec!["gtts"]);
}

#[tokio::test]
async fn configured_credential_puts_primary_first() {
    let synthesizer = VoiceSynthesizer::new(VoiceConfig {
        yarngpt_api_key: Some("yk-test".to_string()),
        ..VoiceConfig::default()
    })
    .unwrap();
    assert_eq!(synthesizer.strategy_names(), vec!["yarngpt", "gtts"]);
}

#[tokio::test]
async fn blank_credential_counts_as_absent() {
    let synthesizer = VoiceSynthesizer::new(VoiceConfig {
        yarngpt_api_key: Some("   ".to_string()),
        ..VoiceConfig::default()
    })
    .unwrap();
    assert_eq!(synthesizer.strategy_names(), vec!["gtts"]);
}

#[tokio::test]
async fn exhausted_chain_is_unavailable_not_error() {
    let synthesizer = VoiceSynthesizer::from_strategies(vec![
        Box::new(FailStrategy {
            name: "primary",
            calls: counter(),
        }),
        Box::new(FailStrategy {
            name: "fallback",
            calls: counter(),
        }),
    ]);

    let result = synthesizer.synthesize("advice").await;
    assert_eq!(result, VoiceResult::Unavailable);
}

#[tokio::test]
async fn empty_chain_is_unavailable() {
    let synthesizer = VoiceSynthesizer::from_strategies(vec![]);
    assert_eq!(synthesizer.synthesize("advice").await, VoiceResult::Unavailable);
}

#[tokio::test]
async fn self_test_without_primary_reports_not_configured() {
    let synthesizer = VoiceSynthesizer::new(VoiceConfig::default()).unwrap();
    let (ok, message) = synthesizer.test_primary_connection().await;
    assert!(!ok);
    assert!(message.contains("not configured"));
}

#[tokio::test]
async fn persisted_audio_round_trips_through_the_filesystem() {
    let synthesizer = VoiceSynthesizer::from_strategies(vec![Box::new(OkStrategy {
        name: "primary",
        calls: counter(),
    })]);

    let result = synthesizer.synthesize("advice").await;
    let audio = match result {
        VoiceResult::Audio(audio) => audio,
        VoiceResult::Unavailable => panic!("expected audio"),
    };

    let path = audio.persist().unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("mp3"));
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, MP3_BYTES);
    std::fs::remove_file(path).unwrap();
}
