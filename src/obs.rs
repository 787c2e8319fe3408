//! Optional observability helpers for registration transactions.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `oauth2_registrar.registration` whose `stage` field
//!   tracks the current step (`validate`, `issue`, `persist`),
//!   `debug` events for rejected metadata, and `error` events for internal failures.
//! - Enable `metrics` to increment the `oauth2_registrar_registration_total` counter for every
//!   attempt/success/rejection/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each registration transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationOutcome {
	/// Entry to the registrar.
	Attempt,
	/// Client registered and persisted.
	Success,
	/// Client-caused rejection returned as a structured error.
	Rejected,
	/// Internal failure surfaced as a generic server error.
	Failure,
}
impl RegistrationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RegistrationOutcome::Attempt => "attempt",
			RegistrationOutcome::Success => "success",
			RegistrationOutcome::Rejected => "rejected",
			RegistrationOutcome::Failure => "failure",
		}
	}
}
impl Display for RegistrationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Step of a registration transaction recorded on its span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationStage {
	/// Metadata validation.
	Validate,
	/// Credential issuance.
	Issue,
	/// Hand-off to the store.
	Persist,
}
impl RegistrationStage {
	/// Returns a stable label suitable for span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RegistrationStage::Validate => "validate",
			RegistrationStage::Issue => "issue",
			RegistrationStage::Persist => "persist",
		}
	}
}
impl Display for RegistrationStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
