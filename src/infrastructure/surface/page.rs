//! Simulated login page.

use std::sync::Mutex;

use async_trait::async_trait;
use regex::Regex;

use crate::domain::field::Field;
use crate::domain::ports::LoginSurface;
use crate::domain::theme::Theme;

/// Native constraint set owned by a simulated input element.
///
/// Mirrors form-constraint semantics: `required` rejects an empty value,
/// while `min_length` and `pattern` only apply once a value is present.
/// The constraints belong to the element; the controller only ever reads
/// the verdict.
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<Regex>,
}

impl FieldSpec {
    /// A required field with no further constraints.
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// The element's own validity verdict for its current value.
    fn verdict(&self, value: &str) -> bool {
        if value.is_empty() {
            return !self.required;
        }

        if let Some(min_length) = self.min_length
            && value.chars().count() < min_length
        {
            return false;
        }

        if let Some(pattern) = &self.pattern
            && !pattern.is_match(value)
        {
            return false;
        }

        true
    }
}

#[derive(Debug)]
struct InputElement {
    spec: FieldSpec,
    value: String,
    /// `aria-invalid` as last written; `None` until first validation.
    aria_invalid: Option<bool>,
    error_class: bool,
}

impl InputElement {
    fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            aria_invalid: None,
            error_class: false,
        }
    }
}

#[derive(Debug)]
struct ButtonElement {
    text: String,
    disabled: bool,
}

#[derive(Debug, Default)]
struct ToggleElement {
    aria_label: String,
    title: String,
    pressed: bool,
}

#[derive(Debug, Default)]
struct PageState {
    dark: bool,
    loading: bool,
    button: Option<ButtonElement>,
    toggle: Option<ToggleElement>,
    icon: Option<String>,
    username: Option<InputElement>,
    password: Option<InputElement>,
    focus: Option<Field>,
}

impl PageState {
    fn input(&self, field: Field) -> Option<&InputElement> {
        match field {
            Field::Username => self.username.as_ref(),
            Field::Password => self.password.as_ref(),
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut InputElement> {
        match field {
            Field::Username => self.username.as_mut(),
            Field::Password => self.password.as_mut(),
        }
    }
}

/// Builder for [`InMemoryPage`]; every element starts absent.
#[derive(Default)]
pub struct InMemoryPageBuilder {
    state: PageState,
}

impl InMemoryPageBuilder {
    pub fn with_submit_button(mut self, text: &str) -> Self {
        self.state.button = Some(ButtonElement {
            text: text.to_string(),
            disabled: false,
        });
        self
    }

    pub fn with_toggle(mut self) -> Self {
        self.state.toggle = Some(ToggleElement::default());
        self
    }

    pub fn with_icon(mut self) -> Self {
        self.state.icon = Some(String::new());
        self
    }

    pub fn with_username(mut self, spec: FieldSpec) -> Self {
        self.state.username = Some(InputElement::new(spec));
        self
    }

    pub fn with_password(mut self, spec: FieldSpec) -> Self {
        self.state.password = Some(InputElement::new(spec));
        self
    }

    pub fn build(self) -> InMemoryPage {
        InMemoryPage {
            state: Mutex::new(self.state),
        }
    }
}

/// Simulated login page holding all presentation state in memory.
///
/// Backs the integration tests and the demo CLI. Elements left out of the
/// builder behave like selectors that failed to resolve: every dependent
/// operation is a silent no-op, per the [`LoginSurface`] contract.
///
/// The inspection accessors expose what a stylesheet or assistive
/// technology would observe on a real page. [`add_error_class`] exists so
/// the external owner of the error class can be simulated; the controller
/// itself only ever removes it.
///
/// [`add_error_class`]: InMemoryPage::add_error_class
pub struct InMemoryPage {
    state: Mutex<PageState>,
}

impl InMemoryPage {
    pub fn builder() -> InMemoryPageBuilder {
        InMemoryPageBuilder::default()
    }

    /// A page with every element present: button, toggle, icon, and both
    /// fields required.
    pub fn full(submit_text: &str) -> Self {
        Self::builder()
            .with_submit_button(submit_text)
            .with_toggle()
            .with_icon()
            .with_username(FieldSpec::required())
            .with_password(FieldSpec::required())
            .build()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PageState> {
        self.state.lock().expect("page state lock poisoned")
    }

    // ── Inspection ──────────────────────────────────────────────────────

    pub fn is_dark(&self) -> bool {
        self.lock().dark
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn button_text(&self) -> Option<String> {
        self.lock().button.as_ref().map(|b| b.text.clone())
    }

    pub fn button_disabled(&self) -> Option<bool> {
        self.lock().button.as_ref().map(|b| b.disabled)
    }

    pub fn toggle_aria_label(&self) -> Option<String> {
        self.lock().toggle.as_ref().map(|t| t.aria_label.clone())
    }

    pub fn toggle_title(&self) -> Option<String> {
        self.lock().toggle.as_ref().map(|t| t.title.clone())
    }

    pub fn toggle_pressed(&self) -> bool {
        self.lock().toggle.as_ref().is_some_and(|t| t.pressed)
    }

    pub fn icon_glyph(&self) -> Option<String> {
        self.lock().icon.clone()
    }

    pub fn focused(&self) -> Option<Field> {
        self.lock().focus
    }

    /// `aria-invalid` as last written; `None` when the field is absent or
    /// has never been validated.
    pub fn aria_invalid(&self, field: Field) -> Option<bool> {
        self.lock().input(field).and_then(|input| input.aria_invalid)
    }

    pub fn has_error_class(&self, field: Field) -> bool {
        self.lock().input(field).is_some_and(|input| input.error_class)
    }

    // ── External interaction ────────────────────────────────────────────

    /// Types a value into a field, as the user would.
    pub fn set_value(&self, field: Field, value: &str) {
        if let Some(input) = self.lock().input_mut(field) {
            input.value = value.to_string();
        }
    }

    /// Adds the visual error class, standing in for the external
    /// stylesheet/validation feedback that owns it.
    pub fn add_error_class(&self, field: Field) {
        if let Some(input) = self.lock().input_mut(field) {
            input.error_class = true;
        }
    }
}

#[async_trait]
impl LoginSurface for InMemoryPage {
    async fn apply_theme(&self, theme: Theme) {
        let mut state = self.lock();

        state.dark = theme.is_dark();

        if let Some(icon) = state.icon.as_mut() {
            *icon = theme.icon_glyph().to_string();
        }

        if let Some(toggle) = state.toggle.as_mut() {
            toggle.aria_label = theme.toggle_label().to_string();
            toggle.title = theme.toggle_title().to_string();
        }
    }

    async fn active_theme(&self) -> Theme {
        if self.lock().dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    async fn set_toggle_pressed(&self, pressed: bool) {
        if let Some(toggle) = self.lock().toggle.as_mut() {
            toggle.pressed = pressed;
        }
    }

    async fn check_validity(&self, field: Field) -> Option<bool> {
        self.lock()
            .input(field)
            .map(|input| input.spec.verdict(&input.value))
    }

    async fn set_invalid_marker(&self, field: Field, invalid: bool) {
        if let Some(input) = self.lock().input_mut(field) {
            input.aria_invalid = Some(invalid);
        }
    }

    async fn clear_error_class(&self, field: Field) {
        if let Some(input) = self.lock().input_mut(field) {
            input.error_class = false;
        }
    }

    async fn first_invalid_field(&self) -> Option<Field> {
        let state = self.lock();
        Field::ALL.into_iter().find(|&field| {
            state
                .input(field)
                .is_some_and(|input| input.aria_invalid == Some(true))
        })
    }

    async fn field_value(&self, field: Field) -> Option<String> {
        self.lock().input(field).map(|input| input.value.clone())
    }

    async fn clear_field(&self, field: Field) {
        if let Some(input) = self.lock().input_mut(field) {
            input.value.clear();
        }
    }

    async fn focus_field(&self, field: Field) {
        let mut state = self.lock();
        if state.input(field).is_some() {
            state.focus = Some(field);
        }
    }

    async fn enter_loading(&self, loading_text: &str) {
        let mut state = self.lock();

        state.loading = true;
        if let Some(button) = state.button.as_mut() {
            button.text = loading_text.to_string();
            button.disabled = true;
        }
    }

    async fn exit_loading(&self, submit_text: &str) {
        let mut state = self.lock();

        state.loading = false;
        if let Some(button) = state.button.as_mut() {
            button.text = submit_text.to_string();
            button.disabled = false;
        }
    }
}
