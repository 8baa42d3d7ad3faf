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

//! Test utilities for the REST API.

use crate::db::ShelterDb;
use crate::db::sqlite::init_schema;
use crate::driver::Driver;
use crate::driver::testutils::FailingDb;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use shelter_core::db::sqlite::{SqliteDb, testutils::setup};
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the app, for direct manipulation of its contents.
    db: Arc<SqliteDb>,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes an app backed by a fresh in-memory database.
    pub(crate) async fn setup() -> Self {
        let db = Arc::from(setup().await);
        init_schema(&db).await.unwrap();
        let driver = Driver::new(db.clone());
        let app = app(driver);
        Self { db, app }
    }

    /// Returns a handle to the app that keeps the context usable afterwards.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the app.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Creates an adopter directly in the database.
    pub(crate) async fn add_adopter<N: Into<String>, E: Into<String>>(
        &self,
        name: N,
        email: E,
    ) -> Adopter {
        self.db.add_adopter(&NewAdopter::new(name.into(), email.into())).await.unwrap()
    }

    /// Creates a dog directly in the database.
    pub(crate) async fn add_dog<N: Into<String>>(
        &self,
        name: N,
        adopter_id: Option<AdopterId>,
    ) -> Dog {
        self.db.add_dog(&NewDog::new(name.into(), adopter_id)).await.unwrap()
    }

    /// Fetches an adopter directly from the database.
    pub(crate) async fn get_adopter(&self, id: AdopterId) -> Option<Adopter> {
        self.db.get_adopter(id).await.unwrap()
    }

    /// Fetches a dog directly from the database.
    pub(crate) async fn get_dog(&self, id: DogId) -> Option<Dog> {
        self.db.get_dog(id).await.unwrap()
    }
}

/// Creates an app whose database fails every operation.
pub(crate) fn failing_app() -> Router {
    shelter_core::testutils::setup_logging();
    app(Driver::new(Arc::new(FailingDb)))
}
