#![allow(dead_code)]

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use login_manager::prelude::*;

/// A full controller wired over the in-memory adapters.
pub struct Harness {
    pub manager: Arc<LoginManager<MemoryThemeStore, InMemoryPage>>,
    pub page: Arc<InMemoryPage>,
    pub store: Arc<MemoryThemeStore>,
    pub system: Arc<FixedSystemPreferences>,
}

/// Builds a harness around a page with every element present and both
/// fields required.
pub fn harness(config: LoginConfig, prefers_dark: bool) -> Harness {
    let page = Arc::new(InMemoryPage::full(&config.submit_text));
    let store = Arc::new(MemoryThemeStore::new());
    let system = Arc::new(FixedSystemPreferences::new(prefers_dark));

    let manager = Arc::new(LoginManager::new(
        config,
        Arc::clone(&store),
        Arc::clone(&page),
        Arc::clone(&system) as Arc<dyn SystemPreferences>,
    ));

    Harness {
        manager,
        page,
        store,
        system,
    }
}

impl Harness {
    /// Spawns the event worker; dropping the sender ends it.
    pub fn spawn_worker(&self) -> (mpsc::Sender<UiEvent>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(16);
        let handle = tokio::spawn(run_ui_worker(rx, Arc::clone(&self.manager)));
        (tx, handle)
    }

    /// Types credentials into both fields.
    pub fn fill(&self, username: &str, password: &str) {
        self.page.set_value(Field::Username, username);
        self.page.set_value(Field::Password, password);
    }
}
