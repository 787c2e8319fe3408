//! Transport-facing classification of registration results.

// self
use crate::{
	_prelude::*,
	client::ClientInformation,
	error::{Error, RegistrationError},
	obs,
};

/// Status signal a transport should map to its own response codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationStatus {
	/// Client registered; body carries the client information.
	Created,
	/// Metadata rejected; body carries a [`RegistrationError`].
	BadRequest,
	/// Unexpected failure; body is a generic error without internal detail.
	InternalError,
}
impl RegistrationStatus {
	/// Returns the matching HTTP status code.
	pub const fn http_status(self) -> u16 {
		match self {
			RegistrationStatus::Created => 201,
			RegistrationStatus::BadRequest => 400,
			RegistrationStatus::InternalError => 500,
		}
	}
}

/// Status plus JSON body ready to be written by a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationResponse {
	/// Response classification.
	pub status: RegistrationStatus,
	/// JSON body.
	pub body: Value,
}
impl RegistrationResponse {
	/// Headers every registration response should carry.
	pub const HEADERS: [(&'static str, &'static str); 2] =
		[("content-type", "application/json"), ("cache-control", "no-store")];

	/// Classifies a registrar result, reporting internal failures without leaking them.
	pub fn from_result(result: Result<ClientInformation>) -> Self {
		match result {
			Ok(client) => Self::created(&client),
			Err(Error::Registration(e)) => Self::bad_request(&e),
			Err(_) => Self::internal_error(),
		}
	}

	/// Builds a success response; serialization faults degrade to an internal error.
	pub fn created(client: &ClientInformation) -> Self {
		match serde_json::to_value(client) {
			Ok(body) => Self { status: RegistrationStatus::Created, body },
			Err(e) => {
				obs::report_failure(&e);

				Self::internal_error()
			},
		}
	}

	/// Builds a bad-request response carrying the structured error.
	pub fn bad_request(error: &RegistrationError) -> Self {
		Self {
			status: RegistrationStatus::BadRequest,
			body: serde_json::json!({
				"error": error.error.as_str(),
				"error_description": error.error_description,
			}),
		}
	}

	/// Builds the generic internal-error response.
	pub fn internal_error() -> Self {
		Self {
			status: RegistrationStatus::InternalError,
			body: serde_json::json!({
				"error": "server_error",
				"error_description": "Internal server error.",
			}),
		}
	}

	/// Returns `true` for [`RegistrationStatus::Created`].
	pub fn is_success(&self) -> bool {
		matches!(self.status, RegistrationStatus::Created)
	}
}
