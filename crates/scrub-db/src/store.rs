//! User store over a MySQL pool

use sqlx::MySqlPool;

use crate::config::DbConfig;
use crate::error::Result;
use crate::models::UserRow;

/// Read-only access to the `users` table.
pub struct UserStore {
    pool: MySqlPool,
}

impl UserStore {
    /// Connect and create the pool. Done once at startup; the pool is
    /// reused for the process lifetime.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let pool = MySqlPool::connect(&config.database_url()).await?;
        Ok(Self { pool })
    }

    /// Fetch every user row, in table order.
    pub async fn fetch_users(&self) -> Result<Vec<UserRow>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT name, email, phone, ssn, password, ip, last_login, user_agent FROM users",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Close the pool explicitly. Dropping the store also shuts it down on
    /// process exit.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
