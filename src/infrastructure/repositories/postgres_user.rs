// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Email, NewUser, PasswordHash, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, postgres::PgArguments, query::QueryAs, Postgres};
use uuid::Uuid;

const ACCOUNT_COLUMNS: &str = "id, username, email, password_hash, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_account(
        &self,
        lookup: QueryAs<'_, Postgres, AccountRow, PgArguments>,
    ) -> DomainResult<Option<User>> {
        lookup
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .map(User::try_from)
            .transpose()
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for User {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let AccountRow {
            id,
            username,
            email,
            password_hash,
            created_at,
        } = row;
        Ok(User {
            id: id.into(),
            username: Username::new(username)?,
            email: Email::new(email)?,
            password_hash: PasswordHash::new(password_hash)?,
            created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let sql = format!(
            "INSERT INTO users ({ACCOUNT_COLUMNS}) VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        // unique violations surface as `users_email_key` / `users_username_key`
        let row: AccountRow = sqlx::query_as(&sql)
            .bind(Uuid::from(new_user.id))
            .bind(new_user.username.as_str())
            .bind(new_user.email.as_str())
            .bind(new_user.password_hash.as_str())
            .bind(new_user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.try_into()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM users WHERE email = $1");
        self.fetch_account(sqlx::query_as(&sql).bind(email.as_str()))
            .await
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM users WHERE id = $1");
        self.fetch_account(sqlx::query_as(&sql).bind(Uuid::from(id)))
            .await
    }
}
