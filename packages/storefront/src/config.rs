//! Frontend configuration.
//!
//! Native builds (SSR, tests) read the environment, loading `.env` when
//! present. The browser build has no environment, so it starts from
//! [`StorefrontConfig::default`] and takes the API URL baked in at compile
//! time via `STOREFRONT_API_URL`.

use std::sync::OnceLock;
use std::time::Duration;

static CONFIG: OnceLock<StorefrontConfig> = OnceLock::new();

/// Runtime settings for the flows and the API client.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub api_url: String,
    /// Artificial delay held on every auth step submission.
    pub otp_step_delay: Duration,
    /// Lifetime of an issued one-time code. `None` (the default) disables
    /// expiry.
    pub otp_ttl: Option<Duration>,
    /// Wait between landing on the payment callback and verifying.
    pub payment_verify_delay: Duration,
    /// Wait on the success screen before moving to the order list.
    pub payment_redirect_delay: Duration,
    /// Transport retries for the verification request.
    pub payment_verify_retries: u32,
    /// Minimum spacing between analytics pings.
    pub ping_cooldown: Duration,
    /// Use the in-memory seeded account directory instead of the backend.
    pub demo_auth: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: option_env!("STOREFRONT_API_URL")
                .unwrap_or("http://localhost:8000/api")
                .to_string(),
            otp_step_delay: Duration::from_millis(1000),
            otp_ttl: None,
            payment_verify_delay: Duration::from_millis(3000),
            payment_redirect_delay: Duration::from_millis(5000),
            payment_verify_retries: 1,
            ping_cooldown: Duration::from_secs(300),
            demo_auth: false,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorefrontConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl StorefrontConfig {
    /// Build from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let defaults = Self::default();
        let millis = |key: &str, default: Duration| -> anyhow::Result<Duration> {
            match lookup(key) {
                Some(v) => Ok(Duration::from_millis(
                    v.trim()
                        .parse()
                        .with_context(|| format!("{} must be a number of milliseconds", key))?,
                )),
                None => Ok(default),
            }
        };

        let otp_ttl = match lookup("OTP_TTL_SECS") {
            Some(v) => {
                let secs: u64 = v
                    .trim()
                    .parse()
                    .context("OTP_TTL_SECS must be a number of seconds")?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => defaults.otp_ttl,
        };

        Ok(Self {
            api_url: lookup("API_URL").unwrap_or(defaults.api_url),
            otp_step_delay: millis("OTP_STEP_DELAY_MS", defaults.otp_step_delay)?,
            otp_ttl,
            payment_verify_delay: millis("PAYMENT_VERIFY_DELAY_MS", defaults.payment_verify_delay)?,
            payment_redirect_delay: millis(
                "PAYMENT_REDIRECT_DELAY_MS",
                defaults.payment_redirect_delay,
            )?,
            payment_verify_retries: match lookup("PAYMENT_VERIFY_RETRIES") {
                Some(v) => v
                    .trim()
                    .parse()
                    .context("PAYMENT_VERIFY_RETRIES must be a non-negative integer")?,
                None => defaults.payment_verify_retries,
            },
            ping_cooldown: match lookup("PING_COOLDOWN_SECS") {
                Some(v) => Duration::from_secs(
                    v.trim()
                        .parse()
                        .context("PING_COOLDOWN_SECS must be a number of seconds")?,
                ),
                None => defaults.ping_cooldown,
            },
            demo_auth: lookup("DEMO_AUTH")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(defaults.demo_auth),
        })
    }
}

/// Install the process-wide configuration. Call this at startup; later
/// calls are ignored.
pub fn init(config: StorefrontConfig) {
    CONFIG.set(config).ok();
}

/// The installed configuration, or defaults when `init` was never called.
pub fn get() -> &'static StorefrontConfig {
    CONFIG.get_or_init(StorefrontConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.ping_cooldown, Duration::from_secs(300));
        assert_eq!(config.payment_verify_retries, 1);
        assert_eq!(config.otp_ttl, None);
    }

    #[test]
    fn test_otp_ttl_is_opt_in() {
        let config =
            StorefrontConfig::from_lookup(lookup_from(&[("OTP_TTL_SECS", "120")])).unwrap();
        assert_eq!(config.otp_ttl, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("API_URL", "https://shop.example.com/api"),
            ("PAYMENT_VERIFY_DELAY_MS", "250"),
            ("OTP_TTL_SECS", "0"),
            ("DEMO_AUTH", "true"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://shop.example.com/api");
        assert_eq!(config.payment_verify_delay, Duration::from_millis(250));
        assert_eq!(config.otp_ttl, None);
        assert!(config.demo_auth);
    }

    #[test]
    fn test_bad_number_names_the_key() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("OTP_STEP_DELAY_MS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("OTP_STEP_DELAY_MS"));
    }
}
