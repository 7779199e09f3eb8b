use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use super::with_deadline;
use crate::domain::identity::models::App;
use crate::domain::identity::models::AppId;
use crate::identity::errors::StoreError;
use crate::identity::ports::AppProvider;

pub struct PostgresAppRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresAppRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AppRow {
    id: i32,
    name: String,
    secret: Vec<u8>,
}

impl From<AppRow> for App {
    fn from(row: AppRow) -> Self {
        App {
            id: AppId(row.id),
            name: row.name,
            secret: row.secret,
        }
    }
}

#[async_trait]
impl AppProvider for PostgresAppRepository {
    async fn app(&self, app_id: AppId) -> Result<App, StoreError> {
        let row = with_deadline(
            self.query_timeout,
            sqlx::query_as::<_, AppRow>(
                r#"
                SELECT id, name, secret
                FROM apps
                WHERE id = $1
                "#,
            )
            .bind(app_id.0)
            .fetch_optional(&self.pool),
        )
        .await?;

        row.map(App::from).ok_or(StoreError::NotFound)
    }
}
