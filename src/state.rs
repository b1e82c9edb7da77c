use std::sync::Arc;

use sqlx::PgPool;

use crate::background::BackgroundTasks;
use crate::email::Notifier;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub notifier: Arc<dyn Notifier>,
    pub background: BackgroundTasks,
}
