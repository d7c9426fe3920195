//! Credential resolution: process environment first, then the OS keyring.
//!
//! Two credentials exist. The Gemini key is mandatory — without it the
//! Case Analyzer must not be constructible, so resolution fails fast with
//! a clear error. The YarnGPT key is optional: its absence silently
//! disables only the primary voice path.

use thiserror::Error;

/// Keyring service name under which credentials may be stored.
const KEYRING_SERVICE: &str = "counsel";

const GEMINI_ENV: &str = "GEMINI_API_KEY";
const YARNGPT_ENV: &str = "YARNGPT_API_KEY";

/// Resolved API credentials, read-only after startup.
#[derive(Clone)]
pub struct Credentials {
    pub gemini_api_key: String,
    pub yarngpt_api_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini_api_key", &"[REDACTED]")
            .field(
                "yarngpt_api_key",
                &self.yarngpt_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error(
        "missing mandatory Gemini API key: set {GEMINI_ENV} or store it in the \
         OS keyring under service \"{KEYRING_SERVICE}\""
    )]
    MissingGeminiKey,
}

/// Looks one credential up: environment variable first, then keyring.
fn lookup(env_var: &str) -> Option<String> {
    if let Ok(value) = std::env::var(env_var) {
        if !value.trim().is_empty() {
            return Some(value);
        }
    }

    match keyring::Entry::new(KEYRING_SERVICE, env_var) {
        Ok(entry) => match entry.get_password() {
            Ok(value) if !value.trim().is_empty() => Some(value),
            Ok(_) => None,
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                tracing::debug!(credential = env_var, error = %e, "keyring lookup failed");
                None
            }
        },
        Err(e) => {
            tracing::debug!(credential = env_var, error = %e, "keyring unavailable");
            None
        }
    }
}

/// Resolves both credentials.
///
/// # Errors
///
/// Returns `CredentialError::MissingGeminiKey` when the mandatory key is
/// absent from both sources.
pub fn resolve() -> Result<Credentials, CredentialError> {
    let gemini_api_key = lookup(GEMINI_ENV).ok_or(CredentialError::MissingGeminiKey)?;
    let yarngpt_api_key = lookup(YARNGPT_ENV);

    if yarngpt_api_key.is_none() {
        tracing::info!("no YarnGPT credential found; primary voice provider disabled");
    }

    Ok(Credentials {
        gemini_api_key,
        yarngpt_api_key,
    })
}
