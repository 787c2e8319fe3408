//! Simple file-backed client store for single-node deployments.

// std
use std::{
	fs::{self, File},
	io::Write,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	client::{ClientId, ClientInformation},
	store::{ClientRegistrar, ClientStore, StoreError, StoreFuture},
};

type ClientMap = HashMap<ClientId, ClientInformation>;

/// Persists registered clients to a JSON file after each registration.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	inner: Arc<RwLock<ClientMap>>,
}
impl FileStore {
	/// Opens (or creates) a store at the provided path, eagerly loading existing data.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();

		Self::ensure_parent_exists(&path)?;

		let snapshot = Self::load_snapshot(&path)?;

		Ok(Self { path, inner: Arc::new(RwLock::new(snapshot)) })
	}

	/// Location of the backing snapshot.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn load_snapshot(path: &Path) -> Result<ClientMap, StoreError> {
		if !path.exists() {
			return Ok(HashMap::new());
		}

		let bytes = fs::read(path).map_err(|e| StoreError::Backend {
			message: format!("Failed to read {}: {e}", path.display()),
		})?;

		if bytes.is_empty() {
			return Ok(HashMap::new());
		}

		let clients: Vec<ClientInformation> =
			serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization {
				message: format!("Failed to parse {}: {e}", path.display()),
			})?;

		Ok(clients.into_iter().map(|client| (client.client_id.clone(), client)).collect())
	}

	fn ensure_parent_exists(path: &Path) -> Result<(), StoreError> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|e| StoreError::Backend {
				message: format!("Failed to create store directory {}: {e}", parent.display()),
			})?;
		}

		Ok(())
	}

	fn persist_locked(&self, contents: &ClientMap) -> Result<(), StoreError> {
		let mut snapshot: Vec<_> = contents.values().collect();

		snapshot.sort_by(|a, b| a.client_id.cmp(&b.client_id));

		let serialized =
			serde_json::to_vec_pretty(&snapshot).map_err(|e| StoreError::Serialization {
				message: format!("Failed to serialize store snapshot: {e}"),
			})?;
		let mut tmp_path = self.path.clone();

		tmp_path.set_extension("tmp");

		{
			let mut file = File::create(&tmp_path).map_err(|e| StoreError::Backend {
				message: format!("Failed to create {}: {e}", tmp_path.display()),
			})?;

			file.write_all(&serialized).map_err(|e| StoreError::Backend {
				message: format!("Failed to write {}: {e}", tmp_path.display()),
			})?;
			file.sync_all().map_err(|e| StoreError::Backend {
				message: format!("Failed to sync {}: {e}", tmp_path.display()),
			})?;
		}

		fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Backend {
			message: format!("Failed to replace {}: {e}", self.path.display()),
		})
	}
}
impl ClientStore for FileStore {
	fn get_client<'a>(
		&'a self,
		client_id: &'a ClientId,
	) -> StoreFuture<'a, Option<ClientInformation>> {
		Box::pin(async move { Ok(self.inner.read().get(client_id).cloned()) })
	}

	fn registrar(&self) -> Option<&dyn ClientRegistrar> {
		Some(self)
	}
}
impl ClientRegistrar for FileStore {
	fn register_client(&self, client: ClientInformation) -> StoreFuture<'_, ClientInformation> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			if guard.contains_key(&client.client_id) {
				return Err(StoreError::duplicate(&client.client_id));
			}

			let client_id = client.client_id.clone();

			guard.insert(client_id.clone(), client.clone());

			if let Err(e) = self.persist_locked(&guard) {
				guard.remove(&client_id);

				return Err(e);
			}

			Ok(client)
		})
	}
}
