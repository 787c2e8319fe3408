//! Client-registration domain types: identifiers, metadata, secrets, and registered records.

pub mod id;
pub mod information;
pub mod metadata;
pub mod secret;

pub use id::*;
pub use information::*;
pub use metadata::*;
pub use secret::*;
