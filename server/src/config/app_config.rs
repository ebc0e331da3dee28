//! Runtime application configuration loaded from the process environment.

/// What to do when a requested logo cannot be fetched or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoFailurePolicy {
    /// Fail the whole request with HTTP 500.
    #[default]
    Fatal,
    /// Log a warning and serve the plain QR image instead.
    Fallback,
}

impl LogoFailurePolicy {
    fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "" | "fatal" => Self::Fatal,
            "fallback" => Self::Fallback,
            other => {
                tracing::warn!("Unknown LOGO_FAILURE_POLICY {other:?}, using fatal");
                Self::Fatal
            }
        }
    }
}

/// Runtime configuration populated from environment variables.
///
/// Loaded once at startup and kept immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Text encoded when the request carries no `text` parameter.
    pub default_text: String,
    /// Logo URL used when the request carries no `logo` parameter.
    pub default_logo_url: String,
    pub logo_failure_policy: LogoFailurePolicy,
    pub server_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_text: String::new(),
            default_logo_url: String::new(),
            logo_failure_policy: LogoFailurePolicy::Fatal,
            server_port: 8080,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        let g = |key: &str| -> String { std::env::var(key).unwrap_or_default() };

        Self {
            default_text: g("DEFAULT_TEXT"),
            default_logo_url: g("DEFAULT_LOGO_URL"),
            logo_failure_policy: LogoFailurePolicy::parse(&g("LOGO_FAILURE_POLICY")),
            server_port: parse_u16(&g("SERVER_PORT"), 8080),
        }
    }
}

fn parse_u16(s: &str, default: u16) -> u16 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_u16_empty_falls_back() {
        assert_eq!(parse_u16("", 8080), 8080);
    }

    #[test]
    fn parse_u16_invalid_falls_back() {
        assert_eq!(parse_u16("not-a-port", 8080), 8080);
        assert_eq!(parse_u16("99999", 8080), 8080);
    }

    #[test]
    fn parse_u16_valid_value() {
        assert_eq!(parse_u16("3000", 8080), 3000);
    }

    #[test]
    fn policy_parse_accepts_known_values() {
        assert_eq!(LogoFailurePolicy::parse("fatal"), LogoFailurePolicy::Fatal);
        assert_eq!(
            LogoFailurePolicy::parse("FALLBACK"),
            LogoFailurePolicy::Fallback
        );
    }

    #[test]
    fn policy_parse_defaults_to_fatal() {
        assert_eq!(LogoFailurePolicy::parse(""), LogoFailurePolicy::Fatal);
        assert_eq!(LogoFailurePolicy::parse("bogus"), LogoFailurePolicy::Fatal);
    }
}
