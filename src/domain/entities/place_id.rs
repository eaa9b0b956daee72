//! Provider-issued place identifier.

use serde_json::json;

use crate::error::AppError;

/// Opaque place identifier as issued by the provider.
///
/// Guaranteed non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceId(String);

impl PlaceId {
    /// Wraps a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingParameter`] if the identifier is blank.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, AppError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AppError::missing_parameter(
                "Parameter 'placeId' must not be empty",
                json!({ "parameter": "placeId" }),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let id = PlaceId::new("  ChIJN1t_tDeuEmsRUsoyG83frY4 ").unwrap();
        assert_eq!(id.as_str(), "ChIJN1t_tDeuEmsRUsoyG83frY4");
    }

    #[test]
    fn test_rejects_blank() {
        assert!(matches!(
            PlaceId::new(""),
            Err(AppError::MissingParameter { .. })
        ));
        assert!(matches!(
            PlaceId::new("   "),
            Err(AppError::MissingParameter { .. })
        ));
    }
}
