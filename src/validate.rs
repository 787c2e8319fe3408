//! Metadata validation contracts and the built-in schema validator.
//!
//! Validators turn an untyped registration payload into [`ClientMetadata`] or explain why the
//! payload was rejected. The registrar never inspects raw input itself, so deployments can swap
//! in stricter policies (allow-listed redirect hosts, software statements, etc.) by
//! implementing [`MetadataValidator`].

// self
use crate::{_prelude::*, client::ClientMetadata, error::RegistrationErrorCode};

/// Validation capability invoked once per registration request.
pub trait MetadataValidator
where
	Self: Send + Sync,
{
	/// Normalizes the raw payload or describes why it is unacceptable.
	fn validate(&self, raw: &Value) -> Result<ClientMetadata, MetadataRejection>;
}

/// Reason a payload failed metadata validation.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{description}")]
pub struct MetadataRejection {
	/// RFC 7591 error code returned to the client.
	pub error: RegistrationErrorCode,
	/// Human-readable description suitable for `error_description`.
	pub description: String,
}
impl MetadataRejection {
	/// Creates an `invalid_client_metadata` rejection.
	pub fn new(description: impl Into<String>) -> Self {
		Self::with_code(RegistrationErrorCode::InvalidClientMetadata, description)
	}

	/// Creates a rejection with an explicit error code.
	pub fn with_code(error: RegistrationErrorCode, description: impl Into<String>) -> Self {
		Self { error, description: description.into() }
	}

	/// Creates an `invalid_redirect_uri` rejection.
	pub fn invalid_redirect_uri(description: impl Into<String>) -> Self {
		Self::with_code(RegistrationErrorCode::InvalidRedirectUri, description)
	}

	fn at(path: impl Display, message: impl Display) -> Self {
		let path = path.to_string();
		let description = format!("{path}: {message}");

		// Individual entries of redirect_uris are redirect problems; a missing or mistyped list
		// is not.
		if path.starts_with("redirect_uris[") {
			Self::invalid_redirect_uri(description)
		} else {
			Self::new(description)
		}
	}
}

/// Default validator enforcing the RFC 7591 metadata shape.
///
/// Besides type checking every known field, it requires at least one redirect URI, forbids
/// fragments in redirect URIs, and rejects payloads carrying both `jwks` and `jwks_uri`.
#[derive(Clone, Debug, Default)]
pub struct SchemaValidator {
	max_redirect_uris: Option<usize>,
}
impl SchemaValidator {
	/// Caps the number of redirect URIs a single client may register.
	pub fn with_max_redirect_uris(mut self, max: usize) -> Self {
		self.max_redirect_uris = Some(max);

		self
	}

	fn check_semantics(&self, metadata: &ClientMetadata) -> Result<(), MetadataRejection> {
		if metadata.redirect_uris.is_empty() {
			return Err(MetadataRejection::at("redirect_uris", "at least one URI is required"));
		}
		if let Some(max) =
			self.max_redirect_uris.filter(|max| metadata.redirect_uris.len() > *max)
		{
			return Err(MetadataRejection::at(
				"redirect_uris",
				format_args!("at most {max} URIs are allowed"),
			));
		}

		for (idx, uri) in metadata.redirect_uris.iter().enumerate() {
			if uri.fragment().is_some() {
				return Err(MetadataRejection::at(
					format_args!("redirect_uris[{idx}]"),
					"URI must not contain a fragment",
				));
			}
		}

		if metadata.jwks.is_some() && metadata.jwks_uri.is_some() {
			return Err(MetadataRejection::new("jwks and jwks_uri are mutually exclusive"));
		}

		Ok(())
	}
}
impl MetadataValidator for SchemaValidator {
	fn validate(&self, raw: &Value) -> Result<ClientMetadata, MetadataRejection> {
		if !raw.is_object() {
			return Err(MetadataRejection::new("client metadata must be a JSON object"));
		}

		let metadata: ClientMetadata = serde_path_to_error::deserialize(raw).map_err(|e| {
			let path = e.path().to_string();

			if path == "." {
				MetadataRejection::new(e.inner().to_string())
			} else {
				MetadataRejection::at(path, e.inner())
			}
		})?;

		self.check_semantics(&metadata)?;

		Ok(metadata)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::client::TokenEndpointAuthMethod;

	#[test]
	fn accepts_minimal_public_client() {
		let metadata = SchemaValidator::default()
			.validate(&json!({
				"redirect_uris": ["https://example.com/cb"],
				"token_endpoint_auth_method": "none",
			}))
			.expect("Minimal public client metadata should validate.");

		assert_eq!(metadata.redirect_uris.len(), 1);
		assert_eq!(metadata.token_endpoint_auth_method, Some(TokenEndpointAuthMethod::None));
		assert!(!metadata.requires_secret());
	}

	#[test]
	fn ignores_unknown_fields() {
		let metadata = SchemaValidator::default()
			.validate(&json!({
				"redirect_uris": ["https://example.com/cb"],
				"x_vendor_flag": true,
			}))
			.expect("Unknown metadata fields should be ignored.");

		assert!(metadata.requires_secret());
	}

	#[test]
	fn missing_redirect_uris_is_rejected() {
		let err = SchemaValidator::default()
			.validate(&json!({ "token_endpoint_auth_method": "none" }))
			.expect_err("Metadata without redirect_uris should be rejected.");

		assert!(err.description.contains("redirect_uris"), "{err}");
		assert_eq!(err.error, RegistrationErrorCode::InvalidClientMetadata);
	}

	#[test]
	fn rejection_descriptions_carry_the_field_path() {
		let validator = SchemaValidator::default();
		let err = validator
			.validate(&json!({ "redirect_uris": ["https://example.com/cb", "not a url"] }))
			.expect_err("Relative redirect URIs should be rejected.");

		assert!(err.description.starts_with("redirect_uris[1]: "), "{err}");
		assert_eq!(err.error, RegistrationErrorCode::InvalidRedirectUri);

		let err = validator
			.validate(&json!({ "redirect_uris": ["https://example.com/cb"], "client_uri": 7 }))
			.expect_err("Non-string URIs should be rejected.");

		assert!(err.description.starts_with("client_uri: "), "{err}");
		assert_eq!(err.error, RegistrationErrorCode::InvalidClientMetadata);
	}

	#[test]
	fn semantic_rules_are_enforced() {
		let validator = SchemaValidator::default().with_max_redirect_uris(1);

		assert!(validator.validate(&json!({ "redirect_uris": [] })).is_err());
		assert!(validator.validate(&json!(["https://example.com/cb"])).is_err());

		let two_uris = json!({ "redirect_uris": ["https://a.example/cb", "https://b.example/cb"] });

		assert!(validator.validate(&two_uris).is_err());
		assert!(SchemaValidator::default().validate(&two_uris).is_ok());

		let fragment = validator
			.validate(&json!({ "redirect_uris": ["https://example.com/cb#frag"] }))
			.expect_err("Fragments in redirect URIs should be rejected.");

		assert_eq!(fragment.error, RegistrationErrorCode::InvalidRedirectUri);
		assert_eq!(fragment.description, "redirect_uris[0]: URI must not contain a fragment");
		assert!(
			validator
				.validate(&json!({
					"redirect_uris": ["https://example.com/cb"],
					"jwks": { "keys": [] },
					"jwks_uri": "https://example.com/jwks.json",
				}))
				.is_err()
		);
	}
}
