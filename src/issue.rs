//! Credential issuance for validated client metadata.

// self
use crate::{
	_prelude::*,
	client::{ClientId, ClientInformation, ClientMetadata, ClientSecret, SECRET_NEVER_EXPIRES},
};

/// Secret lifetime applied when none is configured (30 days).
pub const DEFAULT_SECRET_LIFETIME: Duration = Duration::days(30);

/// Mints client identities and secrets for already-validated metadata.
///
/// Issuance never fails: the only inputs are the metadata, the configured lifetime, the clock,
/// and the thread-local CSPRNG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CredentialIssuer {
	secret_lifetime: Duration,
}
impl CredentialIssuer {
	/// Creates an issuer whose secrets stay valid for `secret_lifetime`.
	///
	/// The lifetime is truncated to whole seconds and negative values clamp to zero. A zero
	/// lifetime issues secrets that never expire.
	pub fn new(secret_lifetime: Duration) -> Self {
		Self { secret_lifetime: Duration::seconds(secret_lifetime.whole_seconds().max(0)) }
	}

	/// Returns the normalized secret lifetime.
	pub fn secret_lifetime(&self) -> Duration {
		self.secret_lifetime
	}

	/// Issues credentials stamped with the current UTC instant.
	pub fn issue(&self, metadata: ClientMetadata) -> ClientInformation {
		self.issue_at(metadata, OffsetDateTime::now_utc())
	}

	/// Issues credentials stamped with the provided instant.
	pub fn issue_at(&self, metadata: ClientMetadata, instant: OffsetDateTime) -> ClientInformation {
		let client_id_issued_at = instant.unix_timestamp();
		let (client_secret, client_secret_expires_at) = if metadata.requires_secret() {
			(Some(ClientSecret::generate()), Some(self.secret_expiry(client_id_issued_at)))
		} else {
			(None, None)
		};

		ClientInformation {
			client_id: ClientId::generate(),
			client_secret,
			client_id_issued_at,
			client_secret_expires_at,
			metadata,
		}
	}

	fn secret_expiry(&self, issued_at: i64) -> i64 {
		if self.secret_lifetime.is_zero() {
			return SECRET_NEVER_EXPIRES;
		}

		issued_at.saturating_add(self.secret_lifetime.whole_seconds())
	}
}
impl Default for CredentialIssuer {
	fn default() -> Self {
		Self::new(DEFAULT_SECRET_LIFETIME)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;
	use crate::client::TokenEndpointAuthMethod;

	fn metadata(method: Option<TokenEndpointAuthMethod>) -> ClientMetadata {
		let redirect =
			Url::parse("https://example.com/cb").expect("Failed to parse redirect fixture.");
		let mut metadata = ClientMetadata::new([redirect]);

		metadata.token_endpoint_auth_method = method;

		metadata
	}

	#[test]
	fn public_clients_receive_no_secret() {
		let information =
			CredentialIssuer::default().issue(metadata(Some(TokenEndpointAuthMethod::None)));

		assert!(information.client_secret.is_none());
		assert!(information.client_secret_expires_at.is_none());
		assert!(!information.client_id.is_empty());
	}

	#[test]
	fn confidential_clients_expire_after_the_lifetime() {
		let issued = macros::datetime!(2025-03-01 12:00:30.750 UTC);
		let information = CredentialIssuer::new(Duration::seconds(2_592_000))
			.issue_at(metadata(Some(TokenEndpointAuthMethod::ClientSecretPost)), issued);
		let secret =
			information.client_secret.as_ref().expect("Confidential client needs a secret.");

		assert!(!secret.expose().is_empty());
		assert_eq!(information.client_id_issued_at, issued.unix_timestamp());
		assert_eq!(
			information.client_secret_expires_at,
			Some(information.client_id_issued_at + 2_592_000)
		);
	}

	#[test]
	fn omitted_method_still_issues_a_secret() {
		let information = CredentialIssuer::default().issue(metadata(None));

		assert!(information.is_confidential());
		assert_eq!(
			information.client_secret_expires_at,
			Some(information.client_id_issued_at + DEFAULT_SECRET_LIFETIME.whole_seconds())
		);
	}

	#[test]
	fn zero_lifetime_never_expires() {
		let information = CredentialIssuer::new(Duration::ZERO)
			.issue(metadata(Some(TokenEndpointAuthMethod::ClientSecretBasic)));

		assert!(information.is_confidential());
		assert_eq!(information.client_secret_expires_at, Some(SECRET_NEVER_EXPIRES));
	}

	#[test]
	fn lifetime_normalization() {
		assert_eq!(CredentialIssuer::new(Duration::seconds(-5)).secret_lifetime(), Duration::ZERO);
		assert_eq!(
			CredentialIssuer::new(Duration::milliseconds(1_500)).secret_lifetime(),
			Duration::seconds(1)
		);
		assert_eq!(CredentialIssuer::default().secret_lifetime(), Duration::days(30));
	}

	#[test]
	fn identical_metadata_yields_distinct_clients() {
		let issuer = CredentialIssuer::default();
		let input = metadata(Some(TokenEndpointAuthMethod::ClientSecretPost));
		let a = issuer.issue(input.clone());
		let b = issuer.issue(input);

		assert_ne!(a.client_id, b.client_id);
		assert_ne!(a.client_secret, b.client_secret);
		assert_eq!(a.metadata, b.metadata);
	}
}
