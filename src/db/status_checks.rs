use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::StatusCheck;

/// Upper bound on rows returned by [`list`].
pub const LIST_LIMIT: i64 = 1000;

pub async fn create(pool: &PgPool, client_name: &str) -> Result<StatusCheck, sqlx::Error> {
    sqlx::query_as::<_, StatusCheck>(
        r#"INSERT INTO status_checks (id, client_name, "timestamp") VALUES ($1, $2, $3)
           RETURNING id, client_name, "timestamp""#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(client_name)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// The `limit` most recently stored records, returned in insertion order.
pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<StatusCheck>, sqlx::Error> {
    sqlx::query_as::<_, StatusCheck>(
        r#"SELECT id, client_name, "timestamp" FROM (
               SELECT seq, id, client_name, "timestamp" FROM status_checks
               ORDER BY seq DESC LIMIT $1
           ) recent
           ORDER BY seq ASC"#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
