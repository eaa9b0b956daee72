//! Upstream places provider.
//!
//! - [`PlacesProvider`] - Provider contract used by the place service
//! - [`GooglePlacesClient`] - Google Places web service client

mod google;
mod provider;

pub use google::GooglePlacesClient;
#[cfg(test)]
pub use provider::MockPlacesProvider;
pub use provider::{PlacesProvider, ProviderError};
