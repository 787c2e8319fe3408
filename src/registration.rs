//! Registration coordinator sequencing validation, issuance, and persistence.
//!
//! [`Registrar::register`] runs one transaction per call:
//!
//! 1. The configured [`MetadataValidator`] normalizes the raw payload. Failures short-circuit
//!    into a [`RegistrationError`] before any side effect.
//! 2. The [`CredentialIssuer`] mints a fresh `client_id`, plus a secret when the requested auth
//!    method needs one.
//! 3. The store's [`ClientRegistrar`](crate::store::ClientRegistrar) capability persists the
//!    record exactly once; whatever it returns becomes the final record.
//!
//! Registration is not idempotent: every accepted request yields a new, unrelated client.

pub mod config;
pub mod response;

pub use config::*;
pub use response::*;

// self
use crate::{
	_prelude::*,
	client::ClientInformation,
	error::{ConfigError, RegistrationError},
	issue::CredentialIssuer,
	obs::{self, RegistrationOutcome, RegistrationSpan, RegistrationStage},
	store::{ClientStore, StoreError},
	validate::{MetadataValidator, SchemaValidator},
};

/// Coordinates dynamic client registration against a single client store.
#[derive(Clone)]
pub struct Registrar {
	store: Arc<dyn ClientStore>,
	validator: Arc<dyn MetadataValidator>,
	issuer: CredentialIssuer,
}
impl Registrar {
	/// Creates a registrar with the default validator and a 30-day secret lifetime.
	///
	/// Fails with [`ConfigError::RegistrationUnsupported`] when the store cannot register
	/// clients, so a misconfigured deployment never exposes the endpoint.
	pub fn new(store: Arc<dyn ClientStore>) -> Result<Self, ConfigError> {
		if store.registrar().is_none() {
			return Err(ConfigError::RegistrationUnsupported);
		}

		Ok(Self {
			store,
			validator: Arc::new(SchemaValidator::default()),
			issuer: CredentialIssuer::default(),
		})
	}

	/// Creates a registrar from deserialized settings.
	pub fn from_config(
		store: Arc<dyn ClientStore>,
		config: &RegistrationConfig,
	) -> Result<Self, ConfigError> {
		let secret_lifetime = config.secret_lifetime()?;
		let validator = match config.max_redirect_uris {
			Some(max) => SchemaValidator::default().with_max_redirect_uris(max),
			None => SchemaValidator::default(),
		};

		Ok(Self::new(store)?
			.with_secret_lifetime(secret_lifetime)
			.with_validator(Arc::new(validator)))
	}

	/// Overrides the secret lifetime; zero disables expiry.
	pub fn with_secret_lifetime(mut self, secret_lifetime: Duration) -> Self {
		self.issuer = CredentialIssuer::new(secret_lifetime);

		self
	}

	/// Replaces the metadata validator.
	pub fn with_validator(mut self, validator: Arc<dyn MetadataValidator>) -> Self {
		self.validator = validator;

		self
	}

	/// Store backing this registrar.
	pub fn store(&self) -> &Arc<dyn ClientStore> {
		&self.store
	}

	/// Issuer used for new registrations.
	pub fn issuer(&self) -> &CredentialIssuer {
		&self.issuer
	}

	/// Registers a client described by the raw metadata payload.
	///
	/// Returns [`Error::Registration`] for client-caused failures and [`Error::Storage`] for
	/// store faults, which callers must not echo back to the client.
	pub async fn register(&self, raw: &Value) -> Result<ClientInformation> {
		let span = RegistrationSpan::new(RegistrationStage::Validate);

		obs::record_registration_outcome(RegistrationOutcome::Attempt);

		let result = span.instrument(self.run(raw, &span)).await;

		match &result {
			Ok(_) => obs::record_registration_outcome(RegistrationOutcome::Success),
			Err(Error::Registration(e)) => {
				obs::report_rejection(e);
				obs::record_registration_outcome(RegistrationOutcome::Rejected);
			},
			Err(e) => {
				obs::report_failure(e);
				obs::record_registration_outcome(RegistrationOutcome::Failure);
			},
		}

		result
	}

	/// Registers a client and classifies the outcome for a transport.
	pub async fn handle(&self, raw: &Value) -> RegistrationResponse {
		RegistrationResponse::from_result(self.register(raw).await)
	}

	async fn run(&self, raw: &Value, span: &RegistrationSpan) -> Result<ClientInformation> {
		let metadata = self
			.validator
			.validate(raw)
			.map_err(|e| RegistrationError::new(e.error, e.description))?;

		span.record_stage(RegistrationStage::Issue);

		let issued = self.issuer.issue(metadata);
		let registrar = self.store.registrar().ok_or(ConfigError::RegistrationUnsupported)?;

		span.record_stage(RegistrationStage::Persist);

		// Conflicts on the minted client_id are server faults; only explicit refusals reach the
		// client.
		registrar.register_client(issued).await.map_err(|e| match e {
			StoreError::Rejected { error, description } =>
				Error::Registration(RegistrationError::new(error, description)),
			e => Error::Storage(e),
		})
	}
}
impl Debug for Registrar {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Registrar").field("issuer", &self.issuer).finish_non_exhaustive()
	}
}
