//! ghpin-core - Core types and traits for GitHub profile pin fetching.

pub mod error;
pub mod pin_card;
pub mod repo;
pub mod traits;
pub mod types;

pub use error::{Error, TransportError};
pub use pin_card::{PinCard, Theme};
pub use repo::{Repo, RepoOrderField};
pub use traits::RepoSource;
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
