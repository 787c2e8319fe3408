//! Thread-safe in-memory client store for local development and tests.

// std
use std::collections::hash_map::Entry;
// self
use crate::{
	_prelude::*,
	client::{ClientId, ClientInformation},
	store::{ClientRegistrar, ClientStore, StoreError, StoreFuture},
};

type ClientMap = Arc<RwLock<HashMap<ClientId, ClientInformation>>>;

/// Thread-safe storage backend that keeps registered clients in-process.
///
/// Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(ClientMap);
impl MemoryStore {
	/// Number of registered clients.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns true if no clients are registered.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	fn register_now(
		map: ClientMap,
		client: ClientInformation,
	) -> Result<ClientInformation, StoreError> {
		match map.write().entry(client.client_id.clone()) {
			Entry::Occupied(entry) => Err(StoreError::duplicate(entry.key())),
			Entry::Vacant(entry) => Ok(entry.insert(client).clone()),
		}
	}

	fn get_now(map: ClientMap, client_id: ClientId) -> Option<ClientInformation> {
		map.read().get(&client_id).cloned()
	}
}
impl ClientStore for MemoryStore {
	fn get_client<'a>(
		&'a self,
		client_id: &'a ClientId,
	) -> StoreFuture<'a, Option<ClientInformation>> {
		let map = self.0.clone();
		let client_id = client_id.to_owned();

		Box::pin(async move { Ok(Self::get_now(map, client_id)) })
	}

	fn registrar(&self) -> Option<&dyn ClientRegistrar> {
		Some(self)
	}
}
impl ClientRegistrar for MemoryStore {
	fn register_client(&self, client: ClientInformation) -> StoreFuture<'_, ClientInformation> {
		let map = self.0.clone();

		Box::pin(async move { Self::register_now(map, client) })
	}
}
