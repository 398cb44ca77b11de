//! Process configuration parsed and validated once at startup.
//!
//! This is the only place that reads environment variables. Feature code
//! receives an [`AppConfig`] instead of touching the process environment, so
//! a missing or malformed variable aborts startup rather than failing
//! silently at request time. All violations are collected before reporting
//! so operators fix the environment in one pass.

use std::fmt;

use url::Url;
use zeroize::Zeroizing;

/// Minimum length for the session signing secret.
const AUTH_SECRET_MIN_LEN: usize = 32;

/// Default sender address used when `EMAIL_FROM` is unset.
const DEFAULT_EMAIL_FROM: &str = "noreply@example.com";

/// Runtime mode the process was started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    /// Local development; relaxed cookie security.
    Development,
    /// Automated test runs.
    Test,
    /// Live deployment; secure cookies enforced.
    Production,
}

impl RuntimeEnv {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "development" => Some(Self::Development),
            "test" => Some(Self::Test),
            "production" => Some(Self::Production),
            _ => None,
        }
    }
}

impl fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        };
        f.write_str(name)
    }
}

/// A single configuration violation tied to the variable that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigViolation {
    /// Environment variable name.
    pub variable: &'static str,
    /// Human-readable description of the rule that failed.
    pub message: String,
}

/// Aggregate of every configuration violation found during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    violations: Vec<ConfigViolation>,
}

impl ConfigError {
    /// Violations found while loading, in schema order.
    pub fn violations(&self) -> &[ConfigViolation] {
        &self.violations
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid environment configuration:")?;
        for violation in &self.violations {
            write!(f, " {}: {};", violation.variable, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

/// Validated application configuration.
///
/// ## Invariants
/// - `auth_secret` is at least [`AUTH_SECRET_MIN_LEN`] bytes.
/// - Stripe keys, when present, carry their provider-assigned prefixes.
/// - `email_from` is email-shaped.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Runtime mode; defaults to development.
    pub env: RuntimeEnv,
    /// Public base URL of the application.
    pub app_url: Url,
    /// Connection string for the future persistence layer. Nothing connects
    /// to it yet; it is validated and held for when storage is wired in.
    pub database_url: String,
    auth_secret: Zeroizing<String>,
    /// Stripe API secret key (`sk_…`), when billing is configured.
    pub stripe_secret_key: Option<String>,
    /// Stripe webhook signing secret (`whsec_…`), when billing is configured.
    pub stripe_webhook_secret: Option<String>,
    /// Stripe publishable key (`pk_…`), when billing is configured.
    pub stripe_publishable_key: Option<String>,
    /// Email delivery provider key, when transactional email is configured.
    pub resend_api_key: Option<String>,
    /// Sender address for outgoing email.
    pub email_from: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] listing every violation when any variable is
    /// missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Tests supply a closure over a map instead of mutating the process
    /// environment.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] listing every violation.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut violations = Vec::new();

        let env = match lookup("APP_ENV") {
            None => RuntimeEnv::Development,
            Some(raw) => RuntimeEnv::parse(&raw).unwrap_or_else(|| {
                violations.push(ConfigViolation {
                    variable: "APP_ENV",
                    message: format!(
                        "must be one of development, test, or production (got {raw:?})"
                    ),
                });
                RuntimeEnv::Development
            }),
        };

        let app_url = match lookup("APP_URL") {
            None => {
                violations.push(ConfigViolation {
                    variable: "APP_URL",
                    message: "is required".into(),
                });
                None
            }
            Some(raw) => match Url::parse(&raw) {
                Ok(url) => Some(url),
                Err(error) => {
                    violations.push(ConfigViolation {
                        variable: "APP_URL",
                        message: format!("must be a valid URL: {error}"),
                    });
                    None
                }
            },
        };

        let database_url = match lookup("DATABASE_URL") {
            Some(raw) if !raw.trim().is_empty() => Some(raw),
            _ => {
                violations.push(ConfigViolation {
                    variable: "DATABASE_URL",
                    message: "is required".into(),
                });
                None
            }
        };

        let auth_secret = match lookup("AUTH_SECRET") {
            Some(raw) if raw.len() >= AUTH_SECRET_MIN_LEN => Some(Zeroizing::new(raw)),
            Some(_) => {
                violations.push(ConfigViolation {
                    variable: "AUTH_SECRET",
                    message: format!("must be at least {AUTH_SECRET_MIN_LEN} characters"),
                });
                None
            }
            None => {
                violations.push(ConfigViolation {
                    variable: "AUTH_SECRET",
                    message: "is required".into(),
                });
                None
            }
        };

        let stripe_secret_key =
            optional_prefixed(&lookup, "STRIPE_SECRET_KEY", "sk_", &mut violations);
        let stripe_webhook_secret =
            optional_prefixed(&lookup, "STRIPE_WEBHOOK_SECRET", "whsec_", &mut violations);
        let stripe_publishable_key =
            optional_prefixed(&lookup, "STRIPE_PUBLISHABLE_KEY", "pk_", &mut violations);

        let resend_api_key = lookup("RESEND_API_KEY");

        let email_from = match lookup("EMAIL_FROM") {
            None => DEFAULT_EMAIL_FROM.to_owned(),
            Some(raw) => {
                if !email_shaped(&raw) {
                    violations.push(ConfigViolation {
                        variable: "EMAIL_FROM",
                        message: "must be a valid email address".into(),
                    });
                }
                raw
            }
        };

        // A missing required value always recorded a violation, so the error
        // arm never reports an empty list.
        match (app_url, database_url, auth_secret) {
            (Some(app_url), Some(database_url), Some(auth_secret))
                if violations.is_empty() =>
            {
                Ok(Self {
                    env,
                    app_url,
                    database_url,
                    auth_secret,
                    stripe_secret_key,
                    stripe_webhook_secret,
                    stripe_publishable_key,
                    resend_api_key,
                    email_from,
                })
            }
            _ => Err(ConfigError { violations }),
        }
    }

    /// Secret used to derive the session cookie signing key.
    pub fn auth_secret(&self) -> &str {
        self.auth_secret.as_str()
    }

    /// Whether session cookies must only travel over HTTPS.
    pub fn cookie_secure(&self) -> bool {
        self.env == RuntimeEnv::Production
    }
}

fn optional_prefixed(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
    prefix: &str,
    violations: &mut Vec<ConfigViolation>,
) -> Option<String> {
    let raw = lookup(variable)?;
    if raw.starts_with(prefix) {
        Some(raw)
    } else {
        violations.push(ConfigViolation {
            variable,
            message: format!("must start with {prefix:?}"),
        });
        None
    }
}

/// Loose structural check for an email address: non-empty local part, one
/// `@`, and a dotted domain. Real deliverability is the provider's problem.
pub(crate) fn email_shaped(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn base_vars() -> HashMap<&'static str, String> {
        HashMap::from([
            ("APP_URL", "https://app.example.com".to_owned()),
            ("DATABASE_URL", "postgres://localhost/groundwork".to_owned()),
            ("AUTH_SECRET", "0123456789abcdef0123456789abcdef".to_owned()),
        ])
    }

    fn load(vars: &HashMap<&'static str, String>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn minimal_environment_loads_with_defaults() {
        let config = load(&base_vars()).expect("minimal environment is valid");
        assert_eq!(config.env, RuntimeEnv::Development);
        assert_eq!(config.email_from, DEFAULT_EMAIL_FROM);
        assert!(config.stripe_secret_key.is_none());
        assert!(!config.cookie_secure());
    }

    #[test]
    fn production_mode_enables_secure_cookies() {
        let mut vars = base_vars();
        vars.insert("APP_ENV", "production".to_owned());
        let config = load(&vars).expect("production environment is valid");
        assert!(config.cookie_secure());
    }

    #[test]
    fn missing_database_url_names_the_variable() {
        let mut vars = base_vars();
        vars.remove("DATABASE_URL");
        let error = load(&vars).expect_err("missing DATABASE_URL must fail");
        assert!(error
            .violations()
            .iter()
            .any(|v| v.variable == "DATABASE_URL"));
        assert!(error.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn empty_environment_reports_each_required_variable_once() {
        let error = load(&HashMap::new()).expect_err("empty environment must fail");
        let variables: Vec<&str> = error.violations().iter().map(|v| v.variable).collect();
        assert_eq!(variables, vec!["APP_URL", "DATABASE_URL", "AUTH_SECRET"]);
    }

    #[test]
    fn all_violations_are_reported_together() {
        let mut vars = base_vars();
        vars.remove("APP_URL");
        vars.insert("AUTH_SECRET", "short".to_owned());
        vars.insert("STRIPE_SECRET_KEY", "not-a-stripe-key".to_owned());
        let error = load(&vars).expect_err("multiple violations must fail");
        let variables: Vec<&str> = error.violations().iter().map(|v| v.variable).collect();
        assert_eq!(
            variables,
            vec!["APP_URL", "AUTH_SECRET", "STRIPE_SECRET_KEY"]
        );
    }

    #[rstest]
    #[case("STRIPE_SECRET_KEY", "sk_test_123", true)]
    #[case("STRIPE_SECRET_KEY", "pk_test_123", false)]
    #[case("STRIPE_WEBHOOK_SECRET", "whsec_abc", true)]
    #[case("STRIPE_WEBHOOK_SECRET", "sk_abc", false)]
    #[case("STRIPE_PUBLISHABLE_KEY", "pk_live_9", true)]
    #[case("STRIPE_PUBLISHABLE_KEY", "live_9", false)]
    fn stripe_keys_are_prefix_checked(
        #[case] variable: &'static str,
        #[case] value: &str,
        #[case] valid: bool,
    ) {
        let mut vars = base_vars();
        vars.insert(variable, value.to_owned());
        let result = load(&vars);
        assert_eq!(result.is_ok(), valid, "{variable}={value}");
    }

    #[rstest]
    #[case("staging")]
    #[case("prod")]
    fn unknown_runtime_env_is_rejected(#[case] value: &str) {
        let mut vars = base_vars();
        vars.insert("APP_ENV", value.to_owned());
        let error = load(&vars).expect_err("unknown APP_ENV must fail");
        assert!(error.violations().iter().any(|v| v.variable == "APP_ENV"));
    }

    #[rstest]
    #[case("ops@example.com", true)]
    #[case("no-at-sign.example.com", false)]
    #[case("@example.com", false)]
    #[case("ops@nodot", false)]
    #[case("ops @example.com", false)]
    fn email_from_is_shape_checked(#[case] value: &str, #[case] valid: bool) {
        let mut vars = base_vars();
        vars.insert("EMAIL_FROM", value.to_owned());
        assert_eq!(load(&vars).is_ok(), valid, "EMAIL_FROM={value}");
    }
}
