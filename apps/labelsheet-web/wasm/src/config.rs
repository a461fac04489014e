use serde::{Deserialize, Serialize};

/// DOM and endpoint contract for a preview controller.
///
/// The defaults are the hosting page's fixed ids and classes; override
/// them only when embedding the preview into a page with a different
/// layout. Unknown fields in a JSON config are rejected so typos surface
/// at attach time instead of silently falling back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// id of the form whose fields drive the preview.
    pub form_id: String,
    /// id of the element the preview is rendered into.
    pub container_id: String,
    /// id of the loading indicator, toggled via the `hidden` class.
    pub spinner_id: String,
    /// Class marking fields that trigger refreshes.
    pub field_class: String,
    /// Preview-generation endpoint; receives the form as a multipart POST.
    pub endpoint: String,
    /// Quiet window between the last field change and the refresh.
    pub debounce_ms: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            form_id: "pdf-form".to_string(),
            container_id: "preview-container".to_string(),
            spinner_id: "loading-spinner".to_string(),
            field_class: "auto-update".to_string(),
            endpoint: "/preview".to_string(),
            debounce_ms: 500,
        }
    }
}

impl PreviewConfig {
    /// Parse a config from JSON, filling absent fields with the defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid preview config: {}", e))
    }

    /// CSS selector matching the auto-update fields.
    pub fn field_selector(&self) -> String {
        format!(".{}", self.field_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_contract() {
        let config = PreviewConfig::default();
        assert_eq!(config.form_id, "pdf-form");
        assert_eq!(config.container_id, "preview-container");
        assert_eq!(config.spinner_id, "loading-spinner");
        assert_eq!(config.field_class, "auto-update");
        assert_eq!(config.endpoint, "/preview");
        assert_eq!(config.debounce_ms, 500);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = PreviewConfig::from_json(r#"{"debounce_ms":100}"#).unwrap();
        assert_eq!(config.debounce_ms, 100);
        assert_eq!(config.form_id, "pdf-form");
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        assert!(PreviewConfig::from_json(r#"{"form":"pdf-form"}"#).is_err());
    }

    #[test]
    fn test_field_selector() {
        assert_eq!(PreviewConfig::default().field_selector(), ".auto-update");
    }
}
