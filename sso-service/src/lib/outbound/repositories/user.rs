use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::with_deadline;
use crate::domain::identity::models::DateOfBirth;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::NewUser;
use crate::domain::identity::models::Sex;
use crate::domain::identity::models::User;
use crate::domain::identity::models::UserId;
use crate::domain::identity::models::Username;
use crate::identity::errors::StoreError;
use crate::identity::ports::UserProvider;
use crate::identity::ports::UserSaver;

pub struct PostgresUserRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    username: String,
    sex: String,
    location: String,
    date_of_birth: NaiveDate,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = move |field: &str, e: String| {
            StoreError::Database(format!("corrupt {} for user {}: {}", field, id, e))
        };

        Ok(User {
            id: UserId(row.id),
            email: EmailAddress::new(row.email).map_err(|e| corrupt("email", e.to_string()))?,
            password_hash: row.password_hash,
            username: Username::new(row.username)
                .map_err(|e| corrupt("username", e.to_string()))?,
            sex: row
                .sex
                .parse::<Sex>()
                .map_err(|e| corrupt("sex", e.to_string()))?,
            location: row.location,
            date_of_birth: DateOfBirth::from_date(row.date_of_birth),
        })
    }
}

#[async_trait]
impl UserSaver for PostgresUserRepository {
    async fn save_user(&self, user: NewUser) -> Result<UserId, StoreError> {
        let id = with_deadline(
            self.query_timeout,
            sqlx::query_scalar::<_, i64>(
                r#"
                INSERT INTO users (email, password_hash, username, sex, location, date_of_birth)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
                "#,
            )
            .bind(user.email.as_str())
            .bind(&user.password_hash)
            .bind(user.username.as_str())
            .bind(user.sex.as_str())
            .bind(&user.location)
            .bind(user.date_of_birth.date())
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(UserId(id))
    }
}

#[async_trait]
impl UserProvider for PostgresUserRepository {
    async fn user(&self, email: &EmailAddress) -> Result<User, StoreError> {
        let row = with_deadline(
            self.query_timeout,
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT id, email, password_hash, username, sex, location, date_of_birth
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email.as_str())
            .fetch_optional(&self.pool),
        )
        .await?;

        row.ok_or(StoreError::NotFound)?.try_into()
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, StoreError> {
        with_deadline(
            self.query_timeout,
            sqlx::query_scalar::<_, bool>(
                r#"
                SELECT is_admin
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(user_id.0)
            .fetch_optional(&self.pool),
        )
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn is_exists(&self, email: &EmailAddress) -> Result<bool, StoreError> {
        with_deadline(
            self.query_timeout,
            sqlx::query_scalar::<_, i32>(
                r#"
                SELECT 1
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email.as_str())
            .fetch_optional(&self.pool),
        )
        .await?
        .map(|_| true)
        .ok_or(StoreError::NotFound)
    }
}
