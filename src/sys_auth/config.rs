use std::env;

/// Env var holding the service key.
pub const API_KEY_ENV: &str = "API_KEY";

/// Which key, if any, requests must present.
#[derive(Clone, Default)]
pub struct AuthConfig {
    expected_key: Option<String>,
}

impl AuthConfig {
    pub fn with_key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            expected_key: (!key.is_empty()).then_some(key),
        }
    }

    /// Load the key from the environment. An unset or empty var means no key is enforced.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        // try both upper- and lower-case env var names for compatibility
        let expected_key = lookup(API_KEY_ENV)
            .filter(|k| !k.is_empty())
            .or_else(|| lookup(&API_KEY_ENV.to_lowercase()).filter(|k| !k.is_empty()));
        Self { expected_key }
    }

    pub fn expected_key(&self) -> Option<&str> {
        self.expected_key.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("key_configured", &self.expected_key.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enforces_nothing() {
        assert_eq!(AuthConfig::default().expected_key(), None);
    }

    #[test]
    fn with_key_sets_expected() {
        assert_eq!(AuthConfig::with_key("k1").expected_key(), Some("k1"));
    }

    #[test]
    fn lookup_prefers_upper_case_name() {
        let config = AuthConfig::from_lookup(|name| match name {
            "API_KEY" => Some("upper".to_string()),
            "api_key" => Some("lower".to_string()),
            _ => None,
        });
        assert_eq!(config.expected_key(), Some("upper"));
    }

    #[test]
    fn lookup_falls_back_to_lower_case_name() {
        let config = AuthConfig::from_lookup(|name| (name == "api_key").then(|| "lower".to_string()));
        assert_eq!(config.expected_key(), Some("lower"));
    }

    #[test]
    fn empty_value_is_unset() {
        let config = AuthConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config.expected_key(), None);
    }

    #[test]
    fn empty_upper_case_value_falls_back_to_lower_case_name() {
        let config = AuthConfig::from_lookup(|name| match name {
            "API_KEY" => Some(String::new()),
            "api_key" => Some("lower".to_string()),
            _ => None,
        });
        assert_eq!(config.expected_key(), Some("lower"));
    }

    #[test]
    fn debug_hides_key() {
        let out = format!("{:?}", AuthConfig::with_key("secret123"));
        assert!(!out.contains("secret123"));
    }
}
