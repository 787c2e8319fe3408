//! Registrar-level error types shared across validation, issuance, and stores.

// self
use crate::{_prelude::*, registration::RegistrationStatus, store::StoreError};

/// Registrar-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical registrar error exposed by public APIs.
///
/// Only [`Error::Registration`] is meant to reach the registering client verbatim; every other
/// variant is an operator-facing fault and should be reported as a generic server error.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Client-caused rejection carrying an RFC 7591 error body.
	#[error(transparent)]
	Registration(#[from] RegistrationError),
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}
impl Error {
	/// Classifies the error for transports.
	pub fn status(&self) -> RegistrationStatus {
		match self {
			Error::Registration(_) => RegistrationStatus::BadRequest,
			Error::Storage(_) | Error::Config(_) => RegistrationStatus::InternalError,
		}
	}

	/// Returns the client-facing error body, if this error may be shown to the client.
	pub fn as_registration_error(&self) -> Option<&RegistrationError> {
		match self {
			Error::Registration(e) => Some(e),
			_ => None,
		}
	}
}

/// Configuration failures raised while assembling a registrar.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ConfigError {
	/// The supplied client store cannot persist new clients.
	#[error("Client store does not support registering new clients.")]
	RegistrationUnsupported,
	/// Secret lifetime cannot be represented as a signed duration.
	#[error("Secret lifetime of {secs} seconds exceeds the supported range.")]
	SecretLifetimeOutOfRange {
		/// Configured lifetime in seconds.
		secs: u64,
	},
}

/// Error codes defined by RFC 7591 section 3.2.2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationErrorCode {
	/// The value of one of the client metadata fields is invalid.
	InvalidClientMetadata,
	/// The value of one or more redirection URIs is invalid.
	InvalidRedirectUri,
	/// The software statement presented is invalid.
	InvalidSoftwareStatement,
	/// The software statement presented is not approved for this server.
	UnapprovedSoftwareStatement,
}
impl RegistrationErrorCode {
	/// Returns the wire identifier for the code.
	pub const fn as_str(self) -> &'static str {
		match self {
			RegistrationErrorCode::InvalidClientMetadata => "invalid_client_metadata",
			RegistrationErrorCode::InvalidRedirectUri => "invalid_redirect_uri",
			RegistrationErrorCode::InvalidSoftwareStatement => "invalid_software_statement",
			RegistrationErrorCode::UnapprovedSoftwareStatement => "unapproved_software_statement",
		}
	}
}
impl Display for RegistrationErrorCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Structured registration error returned to the client with a bad-request status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("{error}: {error_description}")]
pub struct RegistrationError {
	/// Machine-readable error code.
	pub error: RegistrationErrorCode,
	/// Human-readable description of the failure.
	pub error_description: String,
}
impl RegistrationError {
	/// Creates an error with the provided code and description.
	pub fn new(error: RegistrationErrorCode, description: impl Into<String>) -> Self {
		Self { error, error_description: description.into() }
	}

	/// Creates an `invalid_client_metadata` error.
	pub fn invalid_client_metadata(description: impl Into<String>) -> Self {
		Self::new(RegistrationErrorCode::InvalidClientMetadata, description)
	}
}
