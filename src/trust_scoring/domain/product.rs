use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::trust_score::TrustScore;
use crate::shared::TrustLensError;

/// Maximum length for product names (security limit)
const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for product descriptions (security limit)
const MAX_DESCRIPTION_LENGTH: usize = 4000;

/// Maximum length for product URLs (security limit)
const MAX_URL_LENGTH: usize = 2048;

/// Name used when a submission carries no usable product name.
pub const DEFAULT_PRODUCT_NAME: &str = "Sample Product";

/// Description used when a submission carries no usable description.
pub const DEFAULT_PRODUCT_DESCRIPTION: &str = "Product description not available";

/// A product together with its analysis state.
///
/// This is the document the API serves: `trust_score` is `None` until an
/// analysis has completed for the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub url: Option<String>,
    pub trust_score: Option<TrustScore>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a fresh, not-yet-analyzed product from a validated draft.
    pub fn from_draft(draft: ProductDraft) -> Self {
        Product {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            url: draft.url,
            trust_score: None,
            created_at: Utc::now(),
        }
    }
}

/// Validated product submission.
///
/// Construction normalizes whitespace, substitutes defaults for missing
/// fields, and rejects oversized or malformed input before anything else
/// touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    description: String,
    url: Option<String>,
}

impl ProductDraft {
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        url: Option<String>,
    ) -> Result<Self, TrustLensError> {
        let name = match normalize(name) {
            Some(name) => {
                // Security: Length limit to prevent DoS
                if name.len() > MAX_NAME_LENGTH {
                    return Err(validation(format!(
                        "product_name is too long ({} bytes). Maximum allowed: {} bytes",
                        name.len(),
                        MAX_NAME_LENGTH
                    )));
                }
                // Security: Control characters could corrupt logs and reports
                if name.chars().any(char::is_control) {
                    return Err(validation(
                        "product_name contains control characters".to_string(),
                    ));
                }
                name
            }
            None => DEFAULT_PRODUCT_NAME.to_string(),
        };

        let description = match normalize(description) {
            Some(description) => {
                if description.len() > MAX_DESCRIPTION_LENGTH {
                    return Err(validation(format!(
                        "product_description is too long ({} bytes). Maximum allowed: {} bytes",
                        description.len(),
                        MAX_DESCRIPTION_LENGTH
                    )));
                }
                description
            }
            None => DEFAULT_PRODUCT_DESCRIPTION.to_string(),
        };

        let url = match normalize(url) {
            Some(url) => {
                if url.len() > MAX_URL_LENGTH {
                    return Err(validation(format!(
                        "product_url is too long ({} bytes). Maximum allowed: {} bytes",
                        url.len(),
                        MAX_URL_LENGTH
                    )));
                }
                // Security: Only web URLs are accepted, never file or data schemes
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(validation(
                        "product_url must start with http:// or https://".to_string(),
                    ));
                }
                Some(url)
            }
            None => None,
        };

        Ok(ProductDraft {
            name,
            description,
            url,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Trim whitespace and treat empty strings as absent.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validation(message: String) -> TrustLensError {
    TrustLensError::Validation { message }
}
