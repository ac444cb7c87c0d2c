use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    /// Report store
    pub db: SqlitePool,
}
