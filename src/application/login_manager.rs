//! Login page controller.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::LoginConfig;
use crate::domain::field::Field;
use crate::domain::ports::{LoginSurface, SystemPreferences, ThemeStore};
use crate::domain::theme::Theme;
use crate::domain::ui_event::{EventDisposition, Key, KeyChord, UiEvent};

/// How long the toggle control stays visually pressed after activation.
const TOGGLE_FEEDBACK_MS: u64 = 150;

/// Result of a submit attempt, from the page adapter's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field failed validation; the native submission must be cancelled
    /// and focus has moved to the first invalid field.
    Rejected,
    /// Validation passed and loading is engaged. `prevent_default` mirrors
    /// the `preventSubmit` configuration: when true the native submission
    /// must still be cancelled (simulation flows).
    Accepted { prevent_default: bool },
}

impl SubmitOutcome {
    /// Whether the native submission must be cancelled.
    pub fn prevents_default(self) -> bool {
        match self {
            Self::Rejected => true,
            Self::Accepted { prevent_default } => prevent_default,
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Controller binding one login page to a theme store, a presentation
/// surface, and the platform preference source.
///
/// The controller holds no presentation state of its own; everything
/// observable lives on the surface or in the store. It never fails: store
/// errors are logged and degraded, and operations touching absent page
/// elements are no-ops by the [`LoginSurface`] contract.
///
/// Constructed once per page load; there is no teardown. The two deferred
/// effects (toggle feedback release, simulated round trip) are
/// fire-and-forget tasks that run against whatever surface state remains.
pub struct LoginManager<S: ThemeStore, U: LoginSurface> {
    config: LoginConfig,
    store: Arc<S>,
    surface: Arc<U>,
    system: Arc<dyn SystemPreferences>,
}

impl<S, U> LoginManager<S, U>
where
    S: ThemeStore + 'static,
    U: LoginSurface + 'static,
{
    /// Creates a controller. Call [`init`](Self::init) afterwards to resolve
    /// the initial theme and apply auto-focus.
    pub fn new(
        config: LoginConfig,
        store: Arc<S>,
        surface: Arc<U>,
        system: Arc<dyn SystemPreferences>,
    ) -> Self {
        Self {
            config,
            store,
            surface,
            system,
        }
    }

    pub fn config(&self) -> &LoginConfig {
        &self.config
    }

    /// Page-load initialization: resolve and apply the theme, then focus the
    /// username field when auto-focus is configured and the field exists
    /// with an empty value.
    pub async fn init(&self) {
        self.init_theme().await;

        if self.config.auto_focus
            && let Some(value) = self.surface.field_value(Field::Username).await
            && value.is_empty()
        {
            self.surface.focus_field(Field::Username).await;
        }
    }

    /// Resolves the initial theme: an explicit persisted value wins;
    /// otherwise the platform preference decides. Store errors fall back to
    /// the platform preference (fail-open).
    async fn init_theme(&self) {
        let saved = match self.store.load(&self.config.storage_key).await {
            Ok(saved) => saved,
            Err(error) => {
                warn!(key = %self.config.storage_key, error = %error,
                    "cannot read stored theme; falling back to system preference");
                None
            }
        };

        let theme = match saved {
            Some(theme) => theme,
            None => Theme::from_system_preference(self.system.prefers_dark().await),
        };

        self.enable_theme(theme).await;
    }

    /// Applies a theme to the surface and re-persists it.
    ///
    /// Persisting happens on every call, including the initial resolution,
    /// so the stored value always reflects the active theme after first
    /// render. Write errors are logged and swallowed; presentation state is
    /// already applied.
    pub async fn enable_theme(&self, theme: Theme) {
        self.surface.apply_theme(theme).await;

        if let Err(error) = self.store.save(&self.config.storage_key, theme).await {
            warn!(key = %self.config.storage_key, error = %error, "cannot persist theme");
        }

        debug!(key = %self.config.storage_key, %theme, "theme applied");
    }

    /// Inverts the active theme and plays the pressed feedback on the
    /// toggle control, releasing it after a short delay. The feedback is
    /// cosmetic: it touches neither the marker nor the persisted value.
    pub async fn toggle_theme(&self) {
        let next = self.surface.active_theme().await.opposite();
        self.enable_theme(next).await;

        self.surface.set_toggle_pressed(true).await;
        let surface = Arc::clone(&self.surface);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(TOGGLE_FEEDBACK_MS)).await;
            surface.set_toggle_pressed(false).await;
        });
    }

    /// Mirrors a platform preference change, but only while no explicit
    /// preference is persisted. Once the user has toggled (which persists a
    /// value), platform changes no longer affect the page. A store read
    /// error also skips the mirror: a possibly-present explicit choice must
    /// never be clobbered on a guess.
    pub async fn handle_system_preference(&self, prefers_dark: bool) {
        match self.store.load(&self.config.storage_key).await {
            Ok(None) => {
                self.enable_theme(Theme::from_system_preference(prefers_dark))
                    .await;
            }
            Ok(Some(_)) => {
                debug!("explicit preference persisted; ignoring system change");
            }
            Err(error) => {
                warn!(error = %error, "cannot inspect stored preference; ignoring system change");
            }
        }
    }

    /// Validates one field against its own native constraints.
    ///
    /// An absent field is valid. The verdict is reflected into the field's
    /// accessibility invalid marker; when error-class handling is configured
    /// and the field is valid, the visual error class is removed. The class
    /// is never added here (external styling owns that).
    pub async fn validate_field(&self, field: Field) -> bool {
        let Some(valid) = self.surface.check_validity(field).await else {
            return true;
        };

        self.surface.set_invalid_marker(field, !valid).await;

        if self.config.handle_error_class && valid {
            self.surface.clear_error_class(field).await;
        }

        valid
    }

    /// Full submit handling.
    ///
    /// Validates both fields; on failure cancels the submission and focuses
    /// the first field flagged invalid. On success, loading engages
    /// unconditionally, and a configured simulated delay schedules a
    /// fire-and-forget loading exit. Without a delay, loading stays engaged
    /// for the native navigation (or [`stop_loading`](Self::stop_loading)).
    pub async fn handle_submit(&self) -> SubmitOutcome {
        let username_valid = self.validate_field(Field::Username).await;
        let password_valid = self.validate_field(Field::Password).await;

        if !username_valid || !password_valid {
            if let Some(field) = self.surface.first_invalid_field().await {
                self.surface.focus_field(field).await;
            }
            debug!("submission rejected by field validation");
            return SubmitOutcome::Rejected;
        }

        self.start_loading().await;

        if self.config.simulate_delay > 0 {
            let delay = Duration::from_millis(self.config.simulate_delay);
            let submit_text = self.config.submit_text.clone();
            let surface = Arc::clone(&self.surface);
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                debug!("simulated sign-in round trip finished");
                surface.exit_loading(&submit_text).await;
            });
        }

        SubmitOutcome::Accepted {
            prevent_default: self.config.prevent_submit,
        }
    }

    /// Engages the loading state.
    pub async fn start_loading(&self) {
        self.surface.enter_loading(&self.config.loading_text).await;
        debug!("loading engaged");
    }

    /// Clears the loading state. Public so external code can recover a page
    /// whose native navigation never happened.
    pub async fn stop_loading(&self) {
        self.surface.exit_loading(&self.config.submit_text).await;
        debug!("loading cleared");
    }

    /// Document-level keyboard shortcuts.
    ///
    /// Escape clears both credential fields and refocuses the username
    /// field (absent fields skipped); the platform default is untouched.
    /// The theme shortcut toggles once and cancels the platform default.
    pub async fn handle_key(&self, chord: &KeyChord) -> EventDisposition {
        if chord.key == Key::Escape {
            self.surface.clear_field(Field::Username).await;
            self.surface.clear_field(Field::Password).await;
            self.surface.focus_field(Field::Username).await;
            return EventDisposition::Continue;
        }

        if chord.is_theme_shortcut() {
            self.toggle_theme().await;
            return EventDisposition::PreventDefault;
        }

        EventDisposition::Continue
    }

    /// Dispatches one page event to the matching operation.
    pub async fn handle_event(&self, event: UiEvent) {
        match event {
            UiEvent::ToggleActivated => self.toggle_theme().await,
            UiEvent::FieldBlurred(field) => {
                self.validate_field(field).await;
            }
            UiEvent::SubmitRequested => {
                self.handle_submit().await;
            }
            UiEvent::KeyPressed(chord) => {
                self.handle_key(&chord).await;
            }
            UiEvent::SystemPreferenceChanged(prefers_dark) => {
                self.handle_system_preference(prefers_dark).await;
            }
        }
    }
}
