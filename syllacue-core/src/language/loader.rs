//! Language profile loader
//!
//! Manages embedded language profiles with caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::profile::LanguageProfile;
use crate::error::{CoreError, Result};

/// Embedded language profiles, keyed by code and by lower-case name
static EMBEDDED: OnceLock<HashMap<String, Arc<LanguageProfile>>> = OnceLock::new();

macro_rules! embed_language_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_profiles() -> HashMap<String, Arc<LanguageProfile>> {
    let mut map = HashMap::new();

    let embedded_configs = [embed_language_config!(
        "en",
        "../../configs/languages/english.toml"
    )];

    for (code, toml_content) in embedded_configs {
        match load_embedded_profile(code, toml_content) {
            Ok(profile) => {
                let profile = Arc::new(profile);
                map.insert(profile.name().to_lowercase(), profile.clone());
                map.insert(code.to_string(), profile);
            }
            Err(e) => {
                tracing::error!(code, error = %e, "failed to load embedded language profile");
            }
        }
    }

    map
}

fn load_embedded_profile(code: &str, toml_content: &str) -> Result<LanguageProfile> {
    let profile = LanguageProfile::from_toml_str(toml_content)?;

    if profile.code() != code {
        return Err(CoreError::Configuration(format!(
            "Config code mismatch: expected {}, got {}",
            code,
            profile.code()
        )));
    }

    Ok(profile)
}

/// Look up an embedded profile by code (`en`) or name (`english`)
pub fn get_profile(code: &str) -> Result<Arc<LanguageProfile>> {
    EMBEDDED
        .get_or_init(load_embedded_profiles)
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| CoreError::UnsupportedLanguage(code.to_string()))
}

/// Codes of the embedded profiles, sorted
pub fn list_available_languages() -> Vec<&'static str> {
    let profiles = EMBEDDED.get_or_init(load_embedded_profiles);

    let mut codes: Vec<&'static str> = profiles
        .iter()
        .filter(|(key, profile)| key.as_str() == profile.code())
        .map(|(key, _)| key.as_str())
        .collect();
    codes.sort_unstable();
    codes
}
