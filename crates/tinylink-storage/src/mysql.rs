use async_trait::async_trait;
use sqlx::mysql::{MySqlPoolOptions, MySqlRow};
use sqlx::{MySqlPool, Row};
use tinylink_core::error::StorageError;
use tinylink_core::repository::{ReadRepository, Repository, Result};
use tinylink_core::{Mapping, MappingId, ShortCode};
use tracing::{debug, trace};

/// Schema of the `urls` table. Idempotent.
pub const URLS_DDL: &str = include_str!("../ddl/mysql/urls.sql");

/// MySQL implementation of the mapping store.
///
/// Uniqueness is delegated to the `uk_urls_short_code` index: an insert is a
/// single statement and a duplicate key surfaces as
/// [`StorageError::Conflict`]. The column uses a binary collation so codes
/// differing only in case are distinct keys.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Opens a MySQL connection pool bounded at `max_connections`.
    pub async fn connect_with_max_connections(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `urls` table and its unique index if they are missing.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::raw_sql(URLS_DDL)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        debug!("urls schema is in place");
        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

fn row_to_mapping(row: &MySqlRow) -> Result<Mapping> {
    let id: u64 = row.try_get("id").map_err(map_sqlx_error)?;
    let original_url: String = row.try_get("original_url").map_err(map_sqlx_error)?;
    let short_code: String = row.try_get("short_code").map_err(map_sqlx_error)?;
    let short_code = ShortCode::new(&short_code).map_err(|e| {
        StorageError::InvalidData(format!("stored short code '{}': {e}", short_code))
    })?;

    Ok(Mapping {
        id: MappingId::new(id),
        original_url,
        short_code,
    })
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<Mapping>> {
        let row = sqlx::query(
            r#"
            SELECT id, original_url, short_code
            FROM urls
            WHERE short_code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_mapping).transpose()
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn insert(&self, code: &ShortCode, original_url: &str) -> Result<Mapping> {
        let result = sqlx::query(
            r#"
            INSERT INTO urls (original_url, short_code)
            VALUES (?, ?)
            "#,
        )
        .bind(original_url)
        .bind(code.as_str())
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(Mapping {
                id: MappingId::new(done.last_insert_id()),
                original_url: original_url.to_owned(),
                short_code: code.clone(),
            }),
            Err(err) if is_unique_violation(&err) => {
                trace!(code = %code, "duplicate key on urls.short_code");
                Err(StorageError::Conflict(code.to_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }
}
