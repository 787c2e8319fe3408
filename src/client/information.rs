//! Registered-client records combining metadata with server-issued credentials.

// self
use crate::{
	_prelude::*,
	client::{ClientId, ClientMetadata, ClientSecret},
};

/// Sentinel stored in `client_secret_expires_at` when the secret never expires.
pub const SECRET_NEVER_EXPIRES: i64 = 0;

/// Authoritative record of a registered client (RFC 7591 section 3.2.1).
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientInformation {
	/// Server-issued client identifier.
	pub client_id: ClientId,
	/// Confidential secret, issued only when the auth method requires one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_secret: Option<ClientSecret>,
	/// Issuance instant in whole seconds since the Unix epoch.
	pub client_id_issued_at: i64,
	/// Secret expiry in whole seconds since the Unix epoch, or `0` for never.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_secret_expires_at: Option<i64>,
	/// Metadata the client registered with.
	#[serde(flatten)]
	pub metadata: ClientMetadata,
}
impl ClientInformation {
	/// Returns `true` if the client was issued a secret.
	pub fn is_confidential(&self) -> bool {
		self.client_secret.is_some()
	}

	/// Returns `true` if the secret has expired at the provided instant.
	///
	/// Public clients and secrets stamped with [`SECRET_NEVER_EXPIRES`] never expire.
	pub fn is_secret_expired_at(&self, instant: OffsetDateTime) -> bool {
		match self.client_secret_expires_at {
			Some(SECRET_NEVER_EXPIRES) | None => false,
			Some(expires_at) => instant.unix_timestamp() >= expires_at,
		}
	}

	/// Convenience helper that checks expiry using the current UTC instant.
	pub fn is_secret_expired(&self) -> bool {
		self.is_secret_expired_at(OffsetDateTime::now_utc())
	}
}
impl Debug for ClientInformation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientInformation")
			.field("client_id", &self.client_id)
			.field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
			.field("client_id_issued_at", &self.client_id_issued_at)
			.field("client_secret_expires_at", &self.client_secret_expires_at)
			.field("metadata", &self.metadata)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;
	use crate::client::TokenEndpointAuthMethod;

	fn build_information(expires_at: Option<i64>) -> ClientInformation {
		let redirect =
			Url::parse("https://example.com/cb").expect("Failed to parse redirect fixture.");

		ClientInformation {
			client_id: ClientId::new("client-1").expect("Client fixture should be valid."),
			client_secret: expires_at.map(|_| ClientSecret::new("secret")),
			client_id_issued_at: macros::datetime!(2025-01-01 00:00 UTC).unix_timestamp(),
			client_secret_expires_at: expires_at,
			metadata: ClientMetadata::new([redirect])
				.with_token_endpoint_auth_method(TokenEndpointAuthMethod::ClientSecretPost),
		}
	}

	#[test]
	fn expiry_honors_never_expires_sentinel() {
		let far_future = macros::datetime!(2999-01-01 00:00 UTC);

		assert!(!build_information(Some(SECRET_NEVER_EXPIRES)).is_secret_expired_at(far_future));
		assert!(!build_information(None).is_secret_expired_at(far_future));
	}

	#[test]
	fn expiry_flips_at_the_boundary() {
		let expires = macros::datetime!(2025-01-31 00:00 UTC);
		let information = build_information(Some(expires.unix_timestamp()));

		assert!(!information.is_secret_expired_at(expires - Duration::seconds(1)));
		assert!(information.is_secret_expired_at(expires));
	}

	#[test]
	fn serialization_flattens_metadata_and_omits_absent_secret() {
		let mut information = build_information(None);

		information.metadata.token_endpoint_auth_method = Some(TokenEndpointAuthMethod::None);

		let payload =
			serde_json::to_value(&information).expect("Client information should serialize.");

		assert_eq!(
			payload,
			serde_json::json!({
				"client_id": "client-1",
				"client_id_issued_at": 1_735_689_600_i64,
				"redirect_uris": ["https://example.com/cb"],
				"token_endpoint_auth_method": "none",
			})
		);

		let round_trip: ClientInformation =
			serde_json::from_value(payload).expect("Client information should deserialize.");

		assert_eq!(round_trip.metadata, information.metadata);
		assert!(!round_trip.is_confidential());
	}

	#[test]
	fn debug_redacts_the_secret() {
		let rendered = format!("{:?}", build_information(Some(SECRET_NEVER_EXPIRES)));

		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains("\"secret\""));
	}
}
