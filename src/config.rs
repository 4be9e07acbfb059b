//! Per-page controller configuration.
//!
//! Each login page instantiates the controller with a configuration object;
//! explicit keys override the defaults. Page templates embed the overrides
//! as camelCase JSON, so [`LoginConfig`] deserializes that shape directly:
//!
//! ```json
//! { "usernameId": "id_username", "storageKey": "admin-theme", "autoFocus": true }
//! ```
//!
//! Two presets cover the shipped pages: [`LoginConfig::admin_login`] and
//! [`LoginConfig::user_login`].

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for one login page instantiation.
///
/// The selector fields describe where a page adapter finds its elements;
/// the controller itself never interprets them. Every bound element is
/// optional: an element a selector fails to resolve disables the behaviors
/// that depend on it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginConfig {
    /// Selector for the form element.
    pub form_selector: String,
    /// Selector for the submit button.
    pub submit_button_selector: String,
    /// Selector for the theme toggle control.
    pub theme_toggle_selector: String,
    /// Selector for the theme icon element.
    pub theme_icon_selector: String,

    /// Element id of the username input; unset leaves the field unbound.
    pub username_id: Option<String>,
    /// Element id of the password input; unset leaves the field unbound.
    pub password_id: Option<String>,

    /// Storage key for the persisted theme preference. Distinct keys keep
    /// page families (admin vs user) on independent themes.
    #[validate(length(min = 1, message = "storage key must not be empty"))]
    pub storage_key: String,

    /// Submit button text while loading is engaged.
    #[validate(length(min = 1, message = "loading text must not be empty"))]
    pub loading_text: String,
    /// Submit button text at rest.
    #[validate(length(min = 1, message = "submit text must not be empty"))]
    pub submit_text: String,

    /// Cancel the native submission even when validation passes
    /// (simulation/demo flows with no real round trip behind them).
    pub prevent_submit: bool,
    /// Focus the username field on init when it exists and is empty.
    pub auto_focus: bool,
    /// Remove the visual error class from a field that validates clean.
    /// The controller never adds the class; external styling owns that.
    pub handle_error_class: bool,
    /// Simulated round trip duration in milliseconds; 0 disables the
    /// simulation and leaves loading engaged for the native navigation.
    /// Capped at 60 000 ms.
    #[validate(range(max = 60_000))]
    pub simulate_delay: u64,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            form_selector: ".login-form".into(),
            submit_button_selector: ".submit-button".into(),
            theme_toggle_selector: "#theme-toggle".into(),
            theme_icon_selector: ".theme-icon".into(),
            username_id: None,
            password_id: None,
            storage_key: "theme".into(),
            loading_text: "Signing in…".into(),
            submit_text: "Sign in".into(),
            prevent_submit: false,
            auto_focus: false,
            handle_error_class: false,
            simulate_delay: 0,
        }
    }
}

impl LoginConfig {
    /// Configuration for the admin login page.
    ///
    /// Real submission (the backend handles it), error-class handling on,
    /// auto-focus on, theme persisted under its own key.
    pub fn admin_login() -> Self {
        Self {
            username_id: Some("id_username".into()),
            password_id: Some("id_password".into()),
            storage_key: "admin-theme".into(),
            prevent_submit: false,
            simulate_delay: 0,
            handle_error_class: true,
            auto_focus: true,
            ..Self::default()
        }
    }

    /// Configuration for the user login page.
    ///
    /// Submission is intercepted and a 2 s round trip is simulated.
    pub fn user_login() -> Self {
        Self {
            username_id: Some("username".into()),
            password_id: Some("password".into()),
            storage_key: "theme".into(),
            prevent_submit: true,
            simulate_delay: 2000,
            handle_error_class: false,
            auto_focus: false,
            ..Self::default()
        }
    }

    /// Parses a page-template JSON override object over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or the merged
    /// configuration fails validation.
    pub fn from_page_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = LoginConfig::default();

        assert_eq!(config.form_selector, ".login-form");
        assert_eq!(config.submit_button_selector, ".submit-button");
        assert_eq!(config.theme_toggle_selector, "#theme-toggle");
        assert_eq!(config.theme_icon_selector, ".theme-icon");
        assert!(config.username_id.is_none());
        assert!(config.password_id.is_none());
        assert_eq!(config.storage_key, "theme");
        assert!(!config.prevent_submit);
        assert!(!config.auto_focus);
        assert!(!config.handle_error_class);
        assert_eq!(config.simulate_delay, 0);
    }

    #[test]
    fn test_defaults_validate() {
        assert!(LoginConfig::default().validate().is_ok());
        assert!(LoginConfig::admin_login().validate().is_ok());
        assert!(LoginConfig::user_login().validate().is_ok());
    }

    #[test]
    fn test_admin_preset() {
        let config = LoginConfig::admin_login();

        assert_eq!(config.username_id.as_deref(), Some("id_username"));
        assert_eq!(config.password_id.as_deref(), Some("id_password"));
        assert_eq!(config.storage_key, "admin-theme");
        assert!(!config.prevent_submit);
        assert_eq!(config.simulate_delay, 0);
        assert!(config.handle_error_class);
        assert!(config.auto_focus);
    }

    #[test]
    fn test_user_preset() {
        let config = LoginConfig::user_login();

        assert_eq!(config.username_id.as_deref(), Some("username"));
        assert_eq!(config.password_id.as_deref(), Some("password"));
        assert_eq!(config.storage_key, "theme");
        assert!(config.prevent_submit);
        assert_eq!(config.simulate_delay, 2000);
        assert!(!config.handle_error_class);
        assert!(!config.auto_focus);
    }

    #[test]
    fn test_page_json_overrides_merge_over_defaults() {
        let config = LoginConfig::from_page_json(
            r#"{ "usernameId": "id_username", "storageKey": "admin-theme", "autoFocus": true }"#,
        )
        .unwrap();

        // Explicit keys applied
        assert_eq!(config.username_id.as_deref(), Some("id_username"));
        assert_eq!(config.storage_key, "admin-theme");
        assert!(config.auto_focus);

        // Everything else stays at defaults
        assert_eq!(config.form_selector, ".login-form");
        assert_eq!(config.submit_text, "Sign in");
        assert!(!config.prevent_submit);
    }

    #[test]
    fn test_page_json_camel_case_keys() {
        let config = LoginConfig::from_page_json(
            r#"{ "preventSubmit": true, "simulateDelay": 2000, "handleErrorClass": false }"#,
        )
        .unwrap();

        assert!(config.prevent_submit);
        assert_eq!(config.simulate_delay, 2000);
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let config = LoginConfig {
            storage_key: String::new(),
            ..LoginConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_button_texts_rejected() {
        let config = LoginConfig {
            loading_text: String::new(),
            ..LoginConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LoginConfig {
            submit_text: String::new(),
            ..LoginConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_excessive_delay_rejected() {
        let config = LoginConfig {
            simulate_delay: 60_001,
            ..LoginConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_page_json_rejected() {
        assert!(LoginConfig::from_page_json("{ not json").is_err());
        assert!(LoginConfig::from_page_json(r#"{ "storageKey": "" }"#).is_err());
    }
}
