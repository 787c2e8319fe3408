//! Registers a public and a confidential client against the in-memory store.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use serde_json::json;
// self
use oauth2_registrar::{registration::Registrar, store::MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let store = MemoryStore::default();
	let registrar = Registrar::new(Arc::new(store.clone()))?;

	for payload in [
		json!({
			"client_name": "CLI tool",
			"redirect_uris": ["http://127.0.0.1:8765/callback"],
			"token_endpoint_auth_method": "none",
		}),
		json!({
			"client_name": "Billing backend",
			"redirect_uris": ["https://billing.example.com/oauth/callback"],
			"grant_types": ["authorization_code", "refresh_token"],
			"token_endpoint_auth_method": "client_secret_basic",
		}),
		json!({ "client_name": "Broken" }),
	] {
		let response = registrar.handle(&payload).await;

		println!(
			"{} {}",
			response.status.http_status(),
			serde_json::to_string_pretty(&response.body)?
		);
	}

	println!("{} clients registered", store.len());

	Ok(())
}
