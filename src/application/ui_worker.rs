//! Async worker dispatching page events to the controller.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::application::login_manager::LoginManager;
use crate::domain::ports::{LoginSurface, ThemeStore};
use crate::domain::ui_event::UiEvent;

/// Consumes [`UiEvent`]s until the channel closes.
///
/// Page adapters hold the sender half and translate raw platform events;
/// the worker serializes them onto the controller, which keeps the whole
/// component single-threaded and cooperative the way a UI event loop is.
pub async fn run_ui_worker<S, U>(mut rx: mpsc::Receiver<UiEvent>, manager: Arc<LoginManager<S, U>>)
where
    S: ThemeStore + 'static,
    U: LoginSurface + 'static,
{
    while let Some(event) = rx.recv().await {
        trace!(?event, "ui event");
        manager.handle_event(event).await;
    }

    debug!("ui event channel closed; worker exiting");
}
