//! SQLite-backed document store for the `movies` collection.
//!
//! Records are stored as JSON bodies in a single `documents` table keyed by
//! `(db_name, collection, doc_id)`, so several logical databases can share one
//! SQLite file without seeing each other's records.

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use marquee_domain::{Movie, MovieId};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{MovieStore, RepoError};

pub const COLLECTION: &str = "movies";
const ENTITY: &str = "Movie";

/// SQLite implementation of the movie gateway.
pub struct SqliteMovieStore {
    pool: SqlitePool,
    database: String,
    timeout: Option<Duration>,
}

impl SqliteMovieStore {
    /// Open the store at `server` and make sure the documents table exists.
    ///
    /// `server` is a sqlx SQLite URL such as `sqlite:movies.db?mode=rwc` or
    /// `sqlite::memory:`.
    pub async fn connect(
        server: &str,
        database: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, RepoError> {
        let options =
            SqliteConnectOptions::from_str(server).map_err(|e| RepoError::database("connect", e))?;

        // An in-memory database lives exactly as long as its connection.
        let in_memory = server.contains(":memory:") || server.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                db_name TEXT NOT NULL,
                collection TEXT NOT NULL,
                doc_id TEXT NOT NULL,
                body TEXT NOT NULL,
                PRIMARY KEY (db_name, collection, doc_id)
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("connect", e))?;

        tracing::debug!(database = %database, collection = COLLECTION, "Document store ready");

        Ok(Self {
            pool,
            database: database.to_string(),
            timeout,
        })
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, RepoError>
    where
        F: Future<Output = Result<T, RepoError>> + Send,
    {
        match self.timeout {
            Some(after) => tokio::time::timeout(after, fut)
                .await
                .map_err(|_| RepoError::Timeout { operation, after })?,
            None => fut.await,
        }
    }

    fn require_id(movie: &Movie) -> Result<MovieId, RepoError> {
        movie.id.ok_or(RepoError::MissingId {
            entity_type: ENTITY,
        })
    }

    fn encode(movie: &Movie) -> Result<String, RepoError> {
        serde_json::to_string(movie).map_err(RepoError::serialization)
    }

    fn decode(body: &str) -> Result<Movie, RepoError> {
        serde_json::from_str(body).map_err(RepoError::serialization)
    }

    async fn fetch_all(&self) -> Result<Vec<Movie>, RepoError> {
        let rows = sqlx::query(
            "SELECT body FROM documents WHERE db_name = ? AND collection = ? ORDER BY rowid",
        )
        .bind(&self.database)
        .bind(COLLECTION)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("find_all", e))?;

        rows.iter()
            .map(|row| Self::decode(&row.get::<String, _>("body")))
            .collect()
    }

    async fn fetch_one(&self, id: MovieId) -> Result<Movie, RepoError> {
        let row = sqlx::query(
            "SELECT body FROM documents WHERE db_name = ? AND collection = ? AND doc_id = ?",
        )
        .bind(&self.database)
        .bind(COLLECTION)
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("find_by_id", e))?;

        match row {
            Some(row) => Self::decode(&row.get::<String, _>("body")),
            None => Err(RepoError::not_found(ENTITY, id)),
        }
    }

    async fn write_new(&self, movie: &Movie) -> Result<(), RepoError> {
        let id = Self::require_id(movie)?;
        let body = Self::encode(movie)?;

        sqlx::query("INSERT INTO documents (db_name, collection, doc_id, body) VALUES (?, ?, ?, ?)")
            .bind(&self.database)
            .bind(COLLECTION)
            .bind(id.to_string())
            .bind(body)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("insert", e))?;

        Ok(())
    }

    async fn replace(&self, movie: &Movie) -> Result<(), RepoError> {
        let id = Self::require_id(movie)?;
        let body = Self::encode(movie)?;

        let result = sqlx::query(
            "UPDATE documents SET body = ? WHERE db_name = ? AND collection = ? AND doc_id = ?",
        )
        .bind(body)
        .bind(&self.database)
        .bind(COLLECTION)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("update", e))?;

        if result.rows_affected() == 0 {
            tracing::debug!(movie_id = %id, "Update matched no record");
        }
        Ok(())
    }

    async fn remove(&self, movie: &Movie) -> Result<(), RepoError> {
        let id = Self::require_id(movie)?;

        let result =
            sqlx::query("DELETE FROM documents WHERE db_name = ? AND collection = ? AND doc_id = ?")
                .bind(&self.database)
                .bind(COLLECTION)
                .bind(id.to_string())
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::database("delete", e))?;

        if result.rows_affected() == 0 {
            tracing::debug!(movie_id = %id, "Delete matched no record");
        }
        Ok(())
    }
}

#[async_trait]
impl MovieStore for SqliteMovieStore {
    async fn find_all(&self) -> Result<Vec<Movie>, RepoError> {
        self.bounded("find_all", self.fetch_all()).await
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Movie, RepoError> {
        self.bounded("find_by_id", self.fetch_one(id)).await
    }

    async fn insert(&self, movie: &Movie) -> Result<(), RepoError> {
        self.bounded("insert", self.write_new(movie)).await
    }

    async fn update(&self, movie: &Movie) -> Result<(), RepoError> {
        self.bounded("update", self.replace(movie)).await
    }

    async fn delete(&self, movie: &Movie) -> Result<(), RepoError> {
        self.bounded("delete", self.remove(movie)).await
    }
}
