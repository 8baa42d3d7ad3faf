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

//! Implementation of the database abstraction using SQLite.

use crate::db::ShelterDb;
use crate::model::*;
use async_trait::async_trait;
use shelter_core::db::sqlite::{SqliteDb, map_sqlx_error, run_schema};
use shelter_core::db::{DbResult, ensure_at_most_one_row};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Schema to use to initialize the database.
const SCHEMA: &str = include_str!("sqlite.sql");

/// Initializes the database schema.
pub(crate) async fn init_schema(db: &SqliteDb) -> DbResult<()> {
    run_schema(db, SCHEMA).await
}

/// Builds an `Adopter` from a row with the `id`, `name` and `email` columns.
fn adopter_from_row(row: &SqliteRow) -> DbResult<Adopter> {
    let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
    let name: String = row.try_get("name").map_err(map_sqlx_error)?;
    let email: String = row.try_get("email").map_err(map_sqlx_error)?;
    Ok(Adopter::new(AdopterId::from(id), name, email))
}

/// Builds a `Dog` from a row with the `id`, `name` and `adopter_id` columns.
fn dog_from_row(row: &SqliteRow) -> DbResult<Dog> {
    let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
    let name: String = row.try_get("name").map_err(map_sqlx_error)?;
    let adopter_id: Option<i64> = row.try_get("adopter_id").map_err(map_sqlx_error)?;
    Ok(Dog::new(DogId::from(id), name, adopter_id.map(AdopterId::from)))
}

#[async_trait]
impl ShelterDb for SqliteDb {
    async fn find_adopters(&self, filter: &AdopterFilter) -> DbResult<Vec<Adopter>> {
        let query_str = "
            SELECT id, name, email
            FROM adopters
            WHERE (? IS NULL OR name = ?) AND (? IS NULL OR email = ?)
            ORDER BY id
        ";
        let rows = sqlx::query(query_str)
            .bind(filter.name().as_deref())
            .bind(filter.name().as_deref())
            .bind(filter.email().as_deref())
            .bind(filter.email().as_deref())
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        rows.iter().map(adopter_from_row).collect()
    }

    async fn get_adopter(&self, id: AdopterId) -> DbResult<Option<Adopter>> {
        let query_str = "SELECT id, name, email FROM adopters WHERE id = ?";
        let maybe_row = sqlx::query(query_str)
            .bind(id.as_i64())
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        maybe_row.as_ref().map(adopter_from_row).transpose()
    }

    async fn find_adopter_dogs(&self, id: AdopterId) -> DbResult<Vec<Dog>> {
        let query_str = "SELECT id, name, adopter_id FROM dogs WHERE adopter_id = ? ORDER BY id";
        let rows = sqlx::query(query_str)
            .bind(id.as_i64())
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        rows.iter().map(dog_from_row).collect()
    }

    async fn add_adopter(&self, adopter: &NewAdopter) -> DbResult<Adopter> {
        let query_str = "INSERT INTO adopters (name, email) VALUES (?, ?)";
        let done = sqlx::query(query_str)
            .bind(adopter.name())
            .bind(adopter.email())
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        Ok(Adopter::new(
            AdopterId::from(done.last_insert_rowid()),
            adopter.name().clone(),
            adopter.email().clone(),
        ))
    }

    async fn remove_adopter(&self, id: AdopterId) -> DbResult<u64> {
        let query_str = "DELETE FROM adopters WHERE id = ?";
        let done = sqlx::query(query_str)
            .bind(id.as_i64())
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        ensure_at_most_one_row(done.rows_affected())
    }

    async fn update_adopter(
        &self,
        id: AdopterId,
        changes: &AdopterChanges,
    ) -> DbResult<Option<Adopter>> {
        let mut tx = self.begin().await?;

        let query_str = "
            UPDATE adopters
            SET name = COALESCE(?, name), email = COALESCE(?, email)
            WHERE id = ?
        ";
        let done = sqlx::query(query_str)
            .bind(changes.name().as_deref())
            .bind(changes.email().as_deref())
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        if ensure_at_most_one_row(done.rows_affected())? == 0 {
            return Ok(None);
        }

        let query_str = "SELECT id, name, email FROM adopters WHERE id = ?";
        let row = sqlx::query(query_str)
            .bind(id.as_i64())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        let adopter = adopter_from_row(&row)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(Some(adopter))
    }

    async fn find_dogs(&self, filter: &DogFilter) -> DbResult<Vec<Dog>> {
        let query_str = "
            SELECT id, name, adopter_id
            FROM dogs
            WHERE (? IS NULL OR name = ?) AND (? IS NULL OR adopter_id = ?)
            ORDER BY id
        ";
        let adopter_id = filter.adopter_id().map(AdopterId::as_i64);
        let rows = sqlx::query(query_str)
            .bind(filter.name().as_deref())
            .bind(filter.name().as_deref())
            .bind(adopter_id)
            .bind(adopter_id)
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        rows.iter().map(dog_from_row).collect()
    }

    async fn get_dog(&self, id: DogId) -> DbResult<Option<Dog>> {
        let query_str = "SELECT id, name, adopter_id FROM dogs WHERE id = ?";
        let maybe_row = sqlx::query(query_str)
            .bind(id.as_i64())
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        maybe_row.as_ref().map(dog_from_row).transpose()
    }

    async fn add_dog(&self, dog: &NewDog) -> DbResult<Dog> {
        let query_str = "INSERT INTO dogs (name, adopter_id) VALUES (?, ?)";
        let done = sqlx::query(query_str)
            .bind(dog.name())
            .bind(dog.adopter_id().map(AdopterId::as_i64))
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        Ok(Dog::new(DogId::from(done.last_insert_rowid()), dog.name().clone(), *dog.adopter_id()))
    }

    async fn remove_dog(&self, id: DogId) -> DbResult<u64> {
        let query_str = "DELETE FROM dogs WHERE id = ?";
        let done = sqlx::query(query_str)
            .bind(id.as_i64())
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        ensure_at_most_one_row(done.rows_affected())
    }

    async fn update_dog(&self, id: DogId, changes: &DogChanges) -> DbResult<Option<Dog>> {
        let mut tx = self.begin().await?;

        let query_str = "
            UPDATE dogs
            SET name = COALESCE(?, name), adopter_id = COALESCE(?, adopter_id)
            WHERE id = ?
        ";
        let done = sqlx::query(query_str)
            .bind(changes.name().as_deref())
            .bind(changes.adopter_id().map(AdopterId::as_i64))
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        if ensure_at_most_one_row(done.rows_affected())? == 0 {
            return Ok(None);
        }

        let query_str = "SELECT id, name, adopter_id FROM dogs WHERE id = ?";
        let row = sqlx::query(query_str)
            .bind(id.as_i64())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        let dog = dog_from_row(&row)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(Some(dog))
    }

    async fn close(&self) {
        SqliteDb::close(self).await
    }
}
