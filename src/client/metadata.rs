//! Client metadata submitted with a registration request (RFC 7591 section 2).

// self
use crate::{_prelude::*, client::SoftwareId};

macro_rules! def_wire_enum {
	(
		$(#[$meta:meta])*
		$name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident => $wire:literal,
			)+
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(from = "String", into = "String")]
		pub enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
			/// Extension value not registered with IANA.
			Other(String),
		}
		impl $name {
			/// Returns the wire identifier.
			pub fn as_str(&self) -> &str {
				match self {
					$($name::$variant => $wire,)+
					$name::Other(value) => value.as_str(),
				}
			}
		}
		impl From<String> for $name {
			fn from(value: String) -> Self {
				match value.as_str() {
					$($wire => $name::$variant,)+
					_ => $name::Other(value),
				}
			}
		}
		impl From<&str> for $name {
			fn from(value: &str) -> Self {
				Self::from(value.to_owned())
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				match value {
					$name::Other(value) => value,
					known => known.as_str().to_owned(),
				}
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(self.as_str())
			}
		}
	};
}

def_wire_enum! {
	/// Requested authentication method for the token endpoint.
	TokenEndpointAuthMethod {
		/// Public client; no secret is issued.
		None => "none",
		/// Secret sent in the request body.
		ClientSecretPost => "client_secret_post",
		/// Secret sent via HTTP Basic.
		ClientSecretBasic => "client_secret_basic",
		/// HMAC-signed JWT assertion keyed by the secret.
		ClientSecretJwt => "client_secret_jwt",
		/// JWT assertion signed with the client's private key.
		PrivateKeyJwt => "private_key_jwt",
	}
}
impl TokenEndpointAuthMethod {
	/// Returns `false` only for the public-client `none` method.
	pub fn requires_secret(&self) -> bool {
		self.as_str() != "none"
	}
}

def_wire_enum! {
	/// OAuth 2.0 grant type the client intends to use.
	GrantType {
		/// Authorization Code grant.
		AuthorizationCode => "authorization_code",
		/// Implicit grant.
		Implicit => "implicit",
		/// Resource Owner Password Credentials grant.
		Password => "password",
		/// Client Credentials grant.
		ClientCredentials => "client_credentials",
		/// Refresh Token grant.
		RefreshToken => "refresh_token",
		/// JWT Bearer assertion grant (RFC 7523).
		JwtBearer => "urn:ietf:params:oauth:grant-type:jwt-bearer",
		/// SAML 2.0 Bearer assertion grant (RFC 7522).
		Saml2Bearer => "urn:ietf:params:oauth:grant-type:saml2-bearer",
	}
}

def_wire_enum! {
	/// OAuth 2.0 response type the client intends to use at the authorization endpoint.
	ResponseType {
		/// Authorization code response.
		Code => "code",
		/// Implicit token response.
		Token => "token",
	}
}

/// Validated, normalized description of a client's requested registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientMetadata {
	/// Redirection URIs for redirect-based flows.
	pub redirect_uris: Vec<Url>,
	/// Requested token endpoint authentication method.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token_endpoint_auth_method: Option<TokenEndpointAuthMethod>,
	/// Grant types the client restricts itself to.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub grant_types: Option<Vec<GrantType>>,
	/// Response types the client restricts itself to.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub response_types: Option<Vec<ResponseType>>,
	/// Human-readable client name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_name: Option<String>,
	/// Client home page.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_uri: Option<Url>,
	/// Client logo.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub logo_uri: Option<Url>,
	/// Space-delimited scope values the client may request.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
	/// Contact addresses for people responsible for the client.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub contacts: Option<Vec<String>>,
	/// Terms of service document.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tos_uri: Option<Url>,
	/// Privacy policy document.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub policy_uri: Option<Url>,
	/// Reference to the client's JSON Web Key Set.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub jwks_uri: Option<Url>,
	/// Inline JSON Web Key Set.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub jwks: Option<Value>,
	/// Identifier of the client software.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub software_id: Option<SoftwareId>,
	/// Version of the client software.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub software_version: Option<String>,
}
impl ClientMetadata {
	/// Creates metadata with the provided redirect URIs and every optional field unset.
	pub fn new(redirect_uris: impl IntoIterator<Item = Url>) -> Self {
		Self {
			redirect_uris: redirect_uris.into_iter().collect(),
			token_endpoint_auth_method: None,
			grant_types: None,
			response_types: None,
			client_name: None,
			client_uri: None,
			logo_uri: None,
			scope: None,
			contacts: None,
			tos_uri: None,
			policy_uri: None,
			jwks_uri: None,
			jwks: None,
			software_id: None,
			software_version: None,
		}
	}

	/// Sets the requested token endpoint authentication method.
	pub fn with_token_endpoint_auth_method(mut self, method: TokenEndpointAuthMethod) -> Self {
		self.token_endpoint_auth_method = Some(method);

		self
	}

	/// Sets the human-readable client name.
	pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
		self.client_name = Some(name.into());

		self
	}

	/// Returns `true` unless the client declared the `none` authentication method.
	///
	/// An omitted method defaults to `client_secret_basic` and therefore needs a secret.
	pub fn requires_secret(&self) -> bool {
		self.token_endpoint_auth_method
			.as_ref()
			.is_none_or(TokenEndpointAuthMethod::requires_secret)
	}
}
