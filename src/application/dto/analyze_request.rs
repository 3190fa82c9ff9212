use serde::Deserialize;

/// AnalyzeProductRequest - Incoming product submission
///
/// Deserialized straight from the analyze endpoint's JSON body and also
/// built by the CLI from its flags. Every field is optional; validation
/// and defaulting happen in `ProductDraft::new`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeProductRequest {
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_description: Option<String>,
}

impl AnalyzeProductRequest {
    pub fn new(
        product_url: Option<String>,
        product_name: Option<String>,
        product_description: Option<String>,
    ) -> Self {
        Self {
            product_url,
            product_name,
            product_description,
        }
    }

    /// Whether the submission carries any information at all.
    pub fn is_empty(&self) -> bool {
        self.product_url.is_none()
            && self.product_name.is_none()
            && self.product_description.is_none()
    }
}
