//! Port for the login page presentation surface.

use crate::domain::field::Field;
use crate::domain::theme::Theme;
use async_trait::async_trait;

/// Presentation surface of a login page.
///
/// Every element the controller touches is optional: a missing submit
/// button, toggle control, icon, or input disables the behaviors that
/// depend on it without raising an error. Implementations therefore treat
/// element-specific operations as silent no-ops when the element is absent,
/// and `check_validity` / `field_value` return `None` for absent fields.
///
/// The surface owns all presentation state (theme marker, loading marker,
/// field attributes); the controller itself stays stateless between events.
///
/// # Implementations
///
/// - [`crate::infrastructure::surface::InMemoryPage`] - simulated page for
///   tests and the demo CLI
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginSurface: Send + Sync {
    /// Applies a theme: page-level marker, icon glyph, and the toggle
    /// control's accessible label/title (describing the opposite theme).
    async fn apply_theme(&self, theme: Theme);

    /// Current theme per the page-level marker.
    async fn active_theme(&self) -> Theme;

    /// Cosmetic pressed feedback on the toggle control. Never affects
    /// persisted or marker state.
    async fn set_toggle_pressed(&self, pressed: bool);

    /// The field's own native-constraint verdict, or `None` when the field
    /// is absent. The controller never defines validation rules.
    async fn check_validity(&self, field: Field) -> Option<bool>;

    /// Reflects a verdict into the field's accessibility invalid marker
    /// (`aria-invalid`).
    async fn set_invalid_marker(&self, field: Field, invalid: bool);

    /// Removes the visual error class from a field.
    ///
    /// The controller only ever removes this class; adding it is owned by
    /// external styling/validation feedback.
    async fn clear_error_class(&self, field: Field);

    /// First field currently flagged invalid, in page order.
    async fn first_invalid_field(&self) -> Option<Field>;

    /// Current value of a field, or `None` when the field is absent.
    async fn field_value(&self, field: Field) -> Option<String>;

    /// Clears a field's value.
    async fn clear_field(&self, field: Field);

    /// Moves focus to a field.
    async fn focus_field(&self, field: Field);

    /// Enters loading state: page-level loading marker set, submit button
    /// text replaced and button disabled.
    async fn enter_loading(&self, loading_text: &str);

    /// Exits loading state, reversing all three effects.
    async fn exit_loading(&self, submit_text: &str);
}
