//! Construction-time settings for [`Registrar`](crate::registration::Registrar).

// self
use crate::{_prelude::*, error::ConfigError, issue::DEFAULT_SECRET_LIFETIME};

/// Deserializable registrar settings, resolved once at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
	/// Seconds an issued secret stays valid; `0` disables expiry.
	pub secret_lifetime_secs: u64,
	/// Optional cap on redirect URIs per client for the built-in validator.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_redirect_uris: Option<usize>,
}
impl RegistrationConfig {
	/// Overrides the secret lifetime in seconds.
	pub fn with_secret_lifetime_secs(mut self, secs: u64) -> Self {
		self.secret_lifetime_secs = secs;

		self
	}

	/// Resolves the configured lifetime into a signed duration.
	pub fn secret_lifetime(&self) -> Result<Duration, ConfigError> {
		i64::try_from(self.secret_lifetime_secs)
			.map(Duration::seconds)
			.map_err(|_| ConfigError::SecretLifetimeOutOfRange { secs: self.secret_lifetime_secs })
	}
}
impl Default for RegistrationConfig {
	fn default() -> Self {
		Self {
			secret_lifetime_secs: DEFAULT_SECRET_LIFETIME.whole_seconds().unsigned_abs(),
			max_redirect_uris: None,
		}
	}
}
