//! PostgreSQL access.
//!
//! There is no pool: every [`Database::transaction`] call opens its own
//! connection, runs one unit of work and closes the connection again.

use futures::future::BoxFuture;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Connection, Postgres, Transaction};

pub mod payments;
pub mod tickets;

pub use payments::PaymentRepo;
pub use tickets::TicketRepo;

static MIGRATOR: Migrator = sqlx::migrate!();

/// Connection settings shared by all request handlers.
#[derive(Debug, Clone)]
pub struct Database {
    options: PgConnectOptions,
}

impl Database {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    pub async fn connect(&self) -> Result<PgConnection, sqlx::Error> {
        PgConnection::connect_with(&self.options).await
    }

    /// Runs `callback` on a fresh connection inside a transaction.
    ///
    /// The transaction commits when the callback returns `Ok` and rolls back
    /// otherwise. The connection is closed either way.
    pub async fn transaction<T, F>(&self, callback: F) -> Result<T, sqlx::Error>
    where
        F: for<'c> FnOnce(&'c mut Transaction<'_, Postgres>) -> BoxFuture<'c, Result<T, sqlx::Error>>
            + Send
            + Sync,
        T: Send,
    {
        let mut conn = self.connect().await?;
        let outcome = conn.transaction(callback).await;

        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "Failed to close database connection");
        }

        outcome
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        let mut conn = self.connect().await?;
        MIGRATOR.run(&mut conn).await?;
        conn.close().await?;
        Ok(())
    }
}
