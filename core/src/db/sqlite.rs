// Shelter
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Common utilities to interact with an SQLite database.

use crate::db::{DbError, DbResult};
use futures::TryStreamExt;
use log::warn;
use sqlx::sqlite::{Sqlite, SqlitePool};
use sqlx::Transaction;

/// Takes a raw SQLx error `e` and converts it to our generic error type.
pub fn map_sqlx_error(e: sqlx::Error) -> DbError {
    match e {
        sqlx::Error::ColumnDecode { source, .. } => DbError::DataIntegrityError(source.to_string()),
        sqlx::Error::RowNotFound => DbError::NotFound,
        sqlx::Error::PoolTimedOut => DbError::Unavailable,
        e if e.to_string().contains("FOREIGN KEY constraint failed") => DbError::NotFound,
        e if e.to_string().contains("UNIQUE constraint failed") => DbError::AlreadyExists,
        e => DbError::BackendError(e.to_string()),
    }
}

/// Creates a new connection pool against the database identified by `conn_str`.
///
/// Passing `:memory:` yields an in-memory database that is shared by all connections in the pool.
pub async fn connect(conn_str: &str) -> DbResult<SqliteDb> {
    let pool = SqlitePool::connect(conn_str).await.map_err(map_sqlx_error)?;
    Ok(SqliteDb { pool })
}

/// A database instance backed by an SQLite database.
pub struct SqliteDb {
    /// Shared SQLite connection pool.  This is a cloneable type that all concurrent
    /// transactions can use concurrently.
    pool: SqlitePool,
}

impl SqliteDb {
    /// Returns the connection pool for direct execution of statements.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Begins a transaction.
    ///
    /// It is the responsibility of the caller to call `commit` on the returned transaction.
    /// Otherwise the transaction is rolled back on drop.
    pub async fn begin(&self) -> DbResult<Transaction<'static, Sqlite>> {
        self.pool.begin().await.map_err(map_sqlx_error)
    }

    /// Closes all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl Drop for SqliteDb {
    fn drop(&mut self) {
        if !self.pool.is_closed() {
            warn!("Dropping connection without having called close() first");
        }
    }
}

/// Helper function to initialize the database with a schema.
pub async fn run_schema(db: &SqliteDb, schema: &str) -> DbResult<()> {
    let mut results = sqlx::raw_sql(schema).execute_many(db.pool());
    while results.try_next().await.map_err(map_sqlx_error)?.is_some() {
        // Nothing to do.
    }
    Ok(())
}

/// Test utilities for the SQLite connection.
#[cfg(any(feature = "testutils", test))]
pub mod testutils {
    use super::*;

    /// Initializes the test database.
    pub async fn setup() -> SqliteDb {
        crate::testutils::setup_logging();
        connect(":memory:").await.unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testutils::*;
    use super::*;
    use sqlx::Row;

    /// Counts the rows in the `test` table.
    async fn count_rows(db: &SqliteDb) -> i64 {
        let row =
            sqlx::query("SELECT COUNT(*) AS count FROM test").fetch_one(db.pool()).await.unwrap();
        row.try_get("count").unwrap()
    }

    #[tokio::test]
    async fn test_run_schema_many_statements() {
        let db = setup().await;
        run_schema(
            &db,
            "CREATE TABLE test (i INTEGER PRIMARY KEY);
            INSERT INTO test (i) VALUES (1);
            INSERT INTO test (i) VALUES (2);",
        )
        .await
        .unwrap();
        assert_eq!(2, count_rows(&db).await);
        db.close().await;
    }

    #[tokio::test]
    async fn test_tx_commit() {
        let db = setup().await;
        run_schema(&db, "CREATE TABLE test (i INTEGER)").await.unwrap();

        let mut tx = db.begin().await.unwrap();
        sqlx::query("INSERT INTO test (i) VALUES (3)").execute(&mut *tx).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(1, count_rows(&db).await);
        db.close().await;
    }

    #[tokio::test]
    async fn test_tx_rollback_on_drop() {
        let db = setup().await;
        run_schema(&db, "CREATE TABLE test (i INTEGER)").await.unwrap();

        {
            let mut tx = db.begin().await.unwrap();
            sqlx::query("INSERT INTO test (i) VALUES (3)").execute(&mut *tx).await.unwrap();
        }

        assert_eq!(0, count_rows(&db).await);
        db.close().await;
    }

    #[tokio::test]
    async fn test_map_sqlx_error_unique() {
        let db = setup().await;
        run_schema(&db, "CREATE TABLE test (i INTEGER PRIMARY KEY)").await.unwrap();

        sqlx::query("INSERT INTO test (i) VALUES (1)").execute(db.pool()).await.unwrap();
        let err = sqlx::query("INSERT INTO test (i) VALUES (1)")
            .execute(db.pool())
            .await
            .map_err(map_sqlx_error)
            .unwrap_err();
        assert_eq!(DbError::AlreadyExists, err);
        db.close().await;
    }

    #[tokio::test]
    async fn test_map_sqlx_error_row_not_found() {
        let db = setup().await;
        run_schema(&db, "CREATE TABLE test (i INTEGER)").await.unwrap();

        let err = sqlx::query("SELECT i FROM test")
            .fetch_one(db.pool())
            .await
            .map(|_| ())
            .map_err(map_sqlx_error)
            .unwrap_err();
        assert_eq!(DbError::NotFound, err);
        db.close().await;
    }

    #[tokio::test]
    async fn test_closed_pool_is_backend_error() {
        let db = setup().await;
        db.close().await;

        match db.begin().await {
            Err(DbError::BackendError(_)) => (),
            e => panic!("Must have failed with a BackendError but got: {:?}", e.map(|_| ())),
        }
    }
}
