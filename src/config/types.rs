// Configuration type definitions

use serde::Deserialize;

use crate::autocomplete::DEFAULT_DEBOUNCE_MS;
use crate::query::DEFAULT_MIN_CHARS;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/donations/api/autocomplete/";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_min_chars() -> usize {
    DEFAULT_MIN_CHARS
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Autocomplete configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AutocompleteConfig {
    /// Suggestion endpoint, queried as `<endpoint>?q=<query>`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Minimum trimmed query length before a lookup is issued
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    /// Quiet period after the last keystroke before a lookup is issued
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Per-request transport timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            endpoint: default_endpoint(),
            min_chars: DEFAULT_MIN_CHARS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.autocomplete.min_chars, 2);
        assert_eq!(config.autocomplete.debounce_ms, 300);
        assert_eq!(config.autocomplete.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_full_section_parses() {
        let config: Config = toml::from_str(
            r#"
[autocomplete]
endpoint = "https://healthbridge.example/api/medicine-autocomplete/"
min_chars = 3
debounce_ms = 500
timeout_ms = 2500
"#,
        )
        .unwrap();

        assert_eq!(
            config.autocomplete,
            AutocompleteConfig {
                endpoint: "https://healthbridge.example/api/medicine-autocomplete/".to_string(),
                min_chars: 3,
                debounce_ms: 500,
                timeout_ms: 2500,
            }
        );
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[autocomplete]\nmin_chars = \"two\"\n");
        assert!(config.is_err());
    }

    // For any TOML config with missing optional fields, parsing succeeds and
    // every missing field takes its default.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_section in prop::bool::ANY,
            min_chars in prop::option::of(1usize..10),
            debounce_ms in prop::option::of(0u64..2000),
        ) {
            let mut toml_content = String::new();
            if include_section {
                toml_content.push_str("[autocomplete]\n");
                if let Some(min_chars) = min_chars {
                    toml_content.push_str(&format!("min_chars = {}\n", min_chars));
                }
                if let Some(debounce_ms) = debounce_ms {
                    toml_content.push_str(&format!("debounce_ms = {}\n", debounce_ms));
                }
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config: {}", toml_content);
            let config = config.unwrap();

            let expected_min = if include_section { min_chars.unwrap_or(DEFAULT_MIN_CHARS) } else { DEFAULT_MIN_CHARS };
            let expected_debounce = if include_section { debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS) } else { DEFAULT_DEBOUNCE_MS };

            prop_assert_eq!(config.autocomplete.min_chars, expected_min);
            prop_assert_eq!(config.autocomplete.debounce_ms, expected_debounce);
            prop_assert_eq!(config.autocomplete.timeout_ms, DEFAULT_TIMEOUT_MS);
            prop_assert_eq!(config.autocomplete.endpoint, DEFAULT_ENDPOINT);
        }
    }
}
