use crate::{
    db::DbPool,
    error::{AppError, Result},
};

#[derive(Clone)]
pub struct MessageRepository {
    pool: DbPool,
}

impl MessageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Every stored message, in natural table order. Only the `message`
    /// column is selected.
    pub async fn find_all(&self) -> Result<Vec<String>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(AppError::StoreUnavailable)?;

        let messages = sqlx::query_scalar::<_, String>("SELECT message FROM messages")
            .fetch_all(&mut *conn)
            .await
            .map_err(AppError::Query)?;

        Ok(messages)
    }

    pub async fn create(&self, message: &str) -> Result<()> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(AppError::StoreUnavailable)?;

        sqlx::query("INSERT INTO messages (message) VALUES (?)")
            .bind(message)
            .execute(&mut *conn)
            .await
            .map_err(AppError::Insert)?;

        Ok(())
    }
}
