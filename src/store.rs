//! Storage contracts and built-in store implementations for registered clients.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{
	_prelude::*,
	client::{ClientId, ClientInformation},
	error::RegistrationErrorCode,
};

/// Boxed future returned by store operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Lookup contract implemented by every client store.
pub trait ClientStore
where
	Self: Send + Sync,
{
	/// Fetches a registered client by identifier, if present.
	fn get_client<'a>(
		&'a self,
		client_id: &'a ClientId,
	) -> StoreFuture<'a, Option<ClientInformation>>;

	/// Returns the registration capability when the store can accept new clients.
	///
	/// Read-only stores keep the default and cannot back a
	/// [`Registrar`](crate::registration::Registrar).
	fn registrar(&self) -> Option<&dyn ClientRegistrar> {
		None
	}
}

/// Registration capability for stores that can persist new clients.
///
/// Implementations must be safe to call concurrently and must accept each `client_id` at most
/// once, failing with [`StoreError::Conflict`] on duplicates. Policy refusals the client can
/// act on (a `software_id` registered twice, say) use [`StoreError::Rejected`].
pub trait ClientRegistrar
where
	Self: Send + Sync,
{
	/// Persists a freshly issued client and returns the record to hand back to the caller.
	///
	/// The returned record is adopted verbatim, so stores may enrich or replace fields.
	fn register_client(&self, client: ClientInformation) -> StoreFuture<'_, ClientInformation>;
}

/// Error type produced by [`ClientStore`] and [`ClientRegistrar`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// The record clashes with an existing registration on a server-assigned key.
	#[error("Registration conflict: {message}.")]
	Conflict {
		/// Human-readable error payload.
		message: String,
	},
	/// The store refused the client's own metadata; relayed to the client verbatim.
	#[error("Registration rejected by store: {error}: {description}.")]
	Rejected {
		/// RFC 7591 error code returned to the client.
		error: RegistrationErrorCode,
		/// Client-facing description.
		description: String,
	},
	/// Serialization failures (e.g., serde) surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
impl StoreError {
	fn duplicate(client_id: &ClientId) -> Self {
		Self::Conflict { message: format!("client_id {client_id} is already registered") }
	}
}
