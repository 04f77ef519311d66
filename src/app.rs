//! Session lifecycle: Disconnected → Connected (menu loop) → Disconnected.

use std::io::Write;

use secrecy::{ExposeSecret, SecretString};
use tokio::io::AsyncBufRead;

use crate::{
    config::AppConfig,
    console::Console,
    error::AppResult,
    menu::{self, Exit},
    state::AppState,
};

/// Ask for each connection setting, keeping the default on a blank answer.
pub async fn prompt_settings<R, W>(
    console: &mut Console<R, W>,
    defaults: AppConfig,
) -> AppResult<AppConfig>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.line("Database Connection Setup:")?;
    let host = console
        .prompt(&format!("MySQL host (default: {}): ", defaults.host))
        .await?;
    let database = console
        .prompt(&format!("Database name (default: {}): ", defaults.database))
        .await?;
    let username = console
        .prompt(&format!("MySQL username (default: {}): ", defaults.username))
        .await?;
    let password = console.prompt_raw("MySQL password: ").await?;

    let or_default = |answer: String, default: String| {
        if answer.is_empty() { default } else { answer }
    };
    Ok(AppConfig {
        host: or_default(host, defaults.host),
        port: defaults.port,
        database: or_default(database, defaults.database),
        username: or_default(username, defaults.username),
        password: if password.is_empty() {
            defaults.password
        } else {
            SecretString::from(password)
        },
    })
}

/// Run one interactive session. The connection opened here is closed on
/// every path out of the menu loop.
pub async fn run<R, W>(console: &mut Console<R, W>, defaults: AppConfig) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.line("E-commerce Database Management System")?;
    console.line("=".repeat(50))?;

    let config = match prompt_settings(console, defaults).await {
        Ok(config) => config,
        Err(err) if err.ends_session() => return console.line("\n\nGoodbye!"),
        Err(err) => {
            menu::report_unexpected(console.out(), None, &err)?;
            return console.line("Failed to connect to database. Exiting...");
        }
    };
    tracing::debug!(
        host = %config.host,
        database = %config.database,
        username = %config.username,
        password_set = !config.password.expose_secret().is_empty(),
        "connection settings collected"
    );

    let state = match AppState::connect(&config).await {
        Ok(state) => state,
        Err(err) => {
            console.line(format!("Error connecting to MySQL: {err}"))?;
            console.line("Failed to connect to database. Exiting...")?;
            return Ok(());
        }
    };
    console.line("Successfully connected to MySQL database")?;

    session(state, console).await
}

/// Drive the menu over an open connection, then release it.
pub async fn session<R, W>(state: AppState, console: &mut Console<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let outcome = menu::run(&state, console).await;
    if let Ok(exit) = &outcome {
        tracing::info!(?exit, "menu loop finished");
    }

    let closed = state.close().await;
    match closed {
        Ok(()) => console.line("Database connection closed")?,
        Err(ref err) => tracing::warn!(error = %err, "closing connection failed"),
    }

    outcome.map(|_: Exit| ())
}
