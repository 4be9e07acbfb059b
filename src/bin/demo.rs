//! Interactive demo driving the login controller from a terminal.
//!
//! Runs the shipped page configurations against a simulated page and a
//! file-backed preference store, reporting every observable transition.
//!
//! # Usage
//!
//! ```bash
//! # Run the admin login page (real submission, auto-focus, error class)
//! cargo run --bin demo -- admin
//!
//! # Run the user login page (intercepted submission, 2 s simulated delay)
//! cargo run --bin demo -- user
//!
//! # Show or toggle the stored preference for a key
//! cargo run --bin demo -- theme admin-theme
//! cargo run --bin demo -- theme admin-theme --toggle
//! ```
//!
//! # Environment Variables
//!
//! - `LOGIN_PREFERS_DARK` (optional): truthy values report a dark platform
//!   preference (overridden by `--prefers-dark`)
//! - `RUST_LOG` (optional): tracing filter, e.g. `login_manager=debug`

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use login_manager::prelude::*;

/// Demo CLI for the login-page controller.
#[derive(Parser)]
#[command(name = "demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Preference file standing in for browser local storage.
    #[arg(long, default_value = "login-prefs.json")]
    prefs: String,

    /// Force the reported platform color-scheme preference.
    #[arg(long)]
    prefers_dark: Option<bool>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the admin login page configuration
    Admin {
        /// Username (prompted when omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Run the user login page configuration
    User {
        /// Username (prompted when omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show or toggle the stored theme preference for a key
    Theme {
        /// Storage key, e.g. "theme" or "admin-theme"
        key: String,

        /// Flip the stored preference instead of just showing it
        #[arg(long)]
        toggle: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let store = Arc::new(FileThemeStore::new(&cli.prefs));
    let system: Arc<dyn SystemPreferences> = match cli.prefers_dark {
        Some(dark) => Arc::new(FixedSystemPreferences::new(dark)),
        None => Arc::new(EnvSystemPreferences::new("LOGIN_PREFERS_DARK")),
    };

    match cli.command {
        Commands::Admin { username, password } => {
            run_page(LoginConfig::admin_login(), store, system, username, password).await?;
        }
        Commands::User { username, password } => {
            run_page(LoginConfig::user_login(), store, system, username, password).await?;
        }
        Commands::Theme { key, toggle } => {
            show_or_toggle_theme(store, &key, toggle).await?;
        }
    }

    Ok(())
}

/// Runs one page configuration end to end: init, blur validation, submit.
async fn run_page(
    config: LoginConfig,
    store: Arc<FileThemeStore>,
    system: Arc<dyn SystemPreferences>,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    println!(
        "{} storage key {}, preventSubmit {}, simulateDelay {} ms",
        "page:".bold(),
        config.storage_key.cyan(),
        config.prevent_submit,
        config.simulate_delay
    );

    let page = Arc::new(
        InMemoryPage::builder()
            .with_submit_button(&config.submit_text)
            .with_toggle()
            .with_icon()
            .with_username(FieldSpec::required())
            .with_password(FieldSpec::required().with_min_length(8))
            .build(),
    );

    let simulate_delay = config.simulate_delay;
    let manager = Arc::new(LoginManager::new(
        config,
        store,
        Arc::clone(&page),
        system,
    ));

    manager.init().await;
    report_theme(&page);
    if let Some(focused) = page.focused() {
        println!("  focus on {}", focused.to_string().cyan());
    }

    // Fire-and-forget events (blur validation) go through the worker the
    // way a page adapter would deliver them.
    let (tx, rx) = mpsc::channel::<UiEvent>(16);
    let worker = tokio::spawn(run_ui_worker(rx, Arc::clone(&manager)));

    let username = match username {
        Some(value) => value,
        None => Input::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
    };
    page.set_value(Field::Username, &username);
    tx.send(UiEvent::FieldBlurred(Field::Username)).await?;

    let password = match password {
        Some(value) => value,
        None => Password::new()
            .with_prompt("Password (min 8 chars)")
            .allow_empty_password(true)
            .interact()?,
    };
    page.set_value(Field::Password, &password);
    tx.send(UiEvent::FieldBlurred(Field::Password)).await?;

    drop(tx);
    worker.await?;

    report_validation(&page);

    // The submit path needs the outcome, so the adapter calls in directly.
    let outcome = manager.handle_submit().await;
    match outcome {
        SubmitOutcome::Rejected => {
            println!("{}", "submission rejected by field validation".red());
            if let Some(focused) = page.focused() {
                println!("  focus moved to {}", focused.to_string().cyan());
            }
        }
        SubmitOutcome::Accepted { prevent_default } => {
            println!(
                "{} (native submission {})",
                "submission accepted".green(),
                if prevent_default { "cancelled" } else { "proceeds" }
            );
            report_loading(&page);

            if simulate_delay > 0 {
                println!("  waiting out the simulated round trip…");
                tokio::time::sleep(Duration::from_millis(simulate_delay + 100)).await;
                report_loading(&page);
            }
        }
    }

    Ok(())
}

/// Shows the stored preference for a key, optionally flipping it.
async fn show_or_toggle_theme(store: Arc<FileThemeStore>, key: &str, toggle: bool) -> Result<()> {
    let current = store.load(key).await?;

    match current {
        Some(theme) => println!("{} {}", key.cyan(), paint_theme(theme)),
        None => println!("{} {}", key.cyan(), "no stored preference".dimmed()),
    }

    if toggle {
        let next = current.unwrap_or(Theme::Light).opposite();
        store.save(key, next).await?;
        println!("toggled to {}", paint_theme(next));
    }

    Ok(())
}

fn paint_theme(theme: Theme) -> ColoredString {
    match theme {
        Theme::Dark => theme.to_string().blue(),
        Theme::Light => theme.to_string().yellow(),
    }
}

fn report_theme(page: &InMemoryPage) {
    let theme = if page.is_dark() {
        Theme::Dark
    } else {
        Theme::Light
    };
    println!(
        "  theme {} icon {} toggle label {:?}",
        paint_theme(theme),
        page.icon_glyph().unwrap_or_default(),
        page.toggle_aria_label().unwrap_or_default()
    );
}

fn report_validation(page: &InMemoryPage) {
    for field in Field::ALL {
        let marker = match page.aria_invalid(field) {
            Some(true) => "invalid".red(),
            Some(false) => "valid".green(),
            None => "not validated".dimmed(),
        };
        println!("  {} {}", field, marker);
    }
}

fn report_loading(page: &InMemoryPage) {
    if page.is_loading() {
        println!(
            "  {} button {:?} disabled {}",
            "loading".yellow(),
            page.button_text().unwrap_or_default(),
            page.button_disabled().unwrap_or_default()
        );
    } else {
        println!(
            "  {} button {:?} disabled {}",
            "idle".green(),
            page.button_text().unwrap_or_default(),
            page.button_disabled().unwrap_or_default()
        );
    }
}
