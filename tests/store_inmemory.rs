// std
use std::sync::Arc;
// crates.io
use time::{Duration, macros};
// self
use oauth2_registrar::{
	client::{ClientId, ClientInformation, ClientMetadata, TokenEndpointAuthMethod},
	issue::CredentialIssuer,
	store::{ClientRegistrar, ClientStore, MemoryStore, StoreError},
	url::Url,
};

fn build_client(method: TokenEndpointAuthMethod) -> ClientInformation {
	let redirect = Url::parse("https://example.com/cb").expect("Failed to parse redirect fixture.");
	let metadata = ClientMetadata::new([redirect])
		.with_token_endpoint_auth_method(method)
		.with_client_name("Memory store fixture");

	CredentialIssuer::new(Duration::hours(1))
		.issue_at(metadata, macros::datetime!(2025-11-10 12:00 UTC))
}

#[tokio::test]
async fn register_and_get_round_trip() {
	let store = MemoryStore::default();
	let client = build_client(TokenEndpointAuthMethod::ClientSecretBasic);
	let registered = store
		.register_client(client.clone())
		.await
		.expect("Registering fixture client should succeed.");

	assert_eq!(registered.client_id, client.client_id);

	let fetched = store
		.get_client(&client.client_id)
		.await
		.expect("Fetching client from memory store should succeed.")
		.expect("Registered client should remain present.");

	assert_eq!(fetched.client_secret, client.client_secret);
	assert_eq!(fetched.client_secret_expires_at, Some(client.client_id_issued_at + 3_600));
	assert_eq!(fetched.metadata.client_name.as_deref(), Some("Memory store fixture"));
}

#[tokio::test]
async fn unknown_clients_are_absent() {
	let store = MemoryStore::default();
	let id = ClientId::new("missing-client").expect("Client fixture should be valid.");
	let fetched = store.get_client(&id).await.expect("Lookup should not error for unknown ids.");

	assert!(fetched.is_none());
	assert!(store.is_empty());
}

#[tokio::test]
async fn duplicate_ids_are_rejected_without_overwriting() {
	let store = MemoryStore::default();
	let original = build_client(TokenEndpointAuthMethod::ClientSecretPost);
	let mut duplicate = build_client(TokenEndpointAuthMethod::None);

	duplicate.client_id = original.client_id.clone();

	store.register_client(original.clone()).await.expect("First registration should succeed.");

	let err = store
		.register_client(duplicate)
		.await
		.expect_err("Duplicate client ids must be rejected.");

	assert!(matches!(err, StoreError::Conflict { .. }));

	let fetched = store
		.get_client(&original.client_id)
		.await
		.expect("Lookup should succeed.")
		.expect("Original client should remain present.");

	assert!(fetched.is_confidential());
	assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn concurrent_duplicates_allow_single_winner() {
	let store = MemoryStore::default();
	let client = build_client(TokenEndpointAuthMethod::ClientSecretPost);
	let tasks = (0..8)
		.map(|_| {
			let store = store.clone();
			let client = client.clone();

			tokio::spawn(async move { store.register_client(client).await })
		})
		.collect::<Vec<_>>();
	let mut successes = 0;

	for task in tasks {
		if task.await.expect("Registration task should not panic.").is_ok() {
			successes += 1;
		}
	}

	assert_eq!(successes, 1, "only one registration per client_id should succeed");
	assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn clones_share_state_through_trait_objects() {
	let store = MemoryStore::default();
	let shared: Arc<dyn ClientStore> = Arc::new(store.clone());
	let client = build_client(TokenEndpointAuthMethod::None);
	let registrar = shared.registrar().expect("Memory store should expose registration.");

	registrar.register_client(client.clone()).await.expect("Registration should succeed.");

	assert!(
		store.get_client(&client.client_id).await.expect("Lookup should succeed.").is_some()
	);
}
