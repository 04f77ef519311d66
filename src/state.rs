use sea_orm::DatabaseConnection;

use crate::{config::AppConfig, db, error::AppResult};

/// The one connection held for the lifetime of an interactive session.
pub struct AppState {
    pub orm: DatabaseConnection,
}

impl AppState {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }

    pub async fn connect(config: &AppConfig) -> AppResult<Self> {
        let url = config.database_url()?;
        tracing::debug!(host = %config.host, database = %config.database, "connecting");
        let orm = db::connect(&url).await?;
        Ok(Self { orm })
    }

    /// Release the connection. Consumes the handle so nothing can use it afterwards.
    pub async fn close(self) -> AppResult<()> {
        self.orm.close().await?;
        Ok(())
    }
}
