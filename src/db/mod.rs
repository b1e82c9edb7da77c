pub mod status_checks;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Connect options for `database_url` with the database swapped for `database_name`.
pub fn connect_options(
    database_url: &str,
    database_name: &str,
) -> Result<PgConnectOptions, sqlx::Error> {
    let options: PgConnectOptions = database_url.parse()?;
    Ok(options.database(database_name))
}

pub async fn connect(database_url: &str, database_name: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect_with(connect_options(database_url, database_name)?)
        .await
}
