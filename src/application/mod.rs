//! Application layer: the controller and its event worker.

pub mod login_manager;
pub mod ui_worker;

pub use login_manager::{LoginManager, SubmitOutcome};
pub use ui_worker::run_ui_worker;
