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

//! Test utilities for the business logic.

use crate::db::ShelterDb;
use crate::db::sqlite::init_schema;
use crate::driver::Driver;
use crate::model::*;
use async_trait::async_trait;
use shelter_core::db::sqlite::{SqliteDb, testutils::setup};
use shelter_core::db::{DbError, DbResult};
use std::sync::Arc;

/// Database that fails every operation with `DbError::Unavailable`.
pub(crate) struct FailingDb;

#[async_trait]
impl ShelterDb for FailingDb {
    async fn find_adopters(&self, _filter: &AdopterFilter) -> DbResult<Vec<Adopter>> {
        Err(DbError::Unavailable)
    }

    async fn get_adopter(&self, _id: AdopterId) -> DbResult<Option<Adopter>> {
        Err(DbError::Unavailable)
    }

    async fn find_adopter_dogs(&self, _id: AdopterId) -> DbResult<Vec<Dog>> {
        Err(DbError::Unavailable)
    }

    async fn add_adopter(&self, _adopter: &NewAdopter) -> DbResult<Adopter> {
        Err(DbError::Unavailable)
    }

    async fn remove_adopter(&self, _id: AdopterId) -> DbResult<u64> {
        Err(DbError::Unavailable)
    }

    async fn update_adopter(
        &self,
        _id: AdopterId,
        _changes: &AdopterChanges,
    ) -> DbResult<Option<Adopter>> {
        Err(DbError::Unavailable)
    }

    async fn find_dogs(&self, _filter: &DogFilter) -> DbResult<Vec<Dog>> {
        Err(DbError::Unavailable)
    }

    async fn get_dog(&self, _id: DogId) -> DbResult<Option<Dog>> {
        Err(DbError::Unavailable)
    }

    async fn add_dog(&self, _dog: &NewDog) -> DbResult<Dog> {
        Err(DbError::Unavailable)
    }

    async fn remove_dog(&self, _id: DogId) -> DbResult<u64> {
        Err(DbError::Unavailable)
    }

    async fn update_dog(&self, _id: DogId, _changes: &DogChanges) -> DbResult<Option<Dog>> {
        Err(DbError::Unavailable)
    }

    async fn close(&self) {}
}

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the driver, for direct validation of its contents.
    db: Arc<SqliteDb>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes a driver backed by a fresh in-memory database.
    pub(crate) async fn setup() -> Self {
        let db = Arc::from(setup().await);
        init_schema(&db).await.unwrap();
        let driver = Driver::new(db.clone());
        Self { db, driver }
    }

    /// Returns the database backing the driver.
    pub(crate) fn db(&self) -> &SqliteDb {
        &self.db
    }

    /// Returns a handle to the driver under test.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }
}
