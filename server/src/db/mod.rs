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

//! Database abstraction in terms of the operations needed by the server.

use crate::model::*;
use async_trait::async_trait;
use shelter_core::db::DbResult;

pub(crate) mod postgres;
pub(crate) mod sqlite;

/// Persistence operations for adopters and dogs.
///
/// Every operation runs to completion on its own: implementations are responsible for grouping the
/// statements of a single operation in a transaction when needed.
#[async_trait]
pub(crate) trait ShelterDb {
    /// Gets all adopters that match `filter`, ordered by identifier.
    async fn find_adopters(&self, filter: &AdopterFilter) -> DbResult<Vec<Adopter>>;

    /// Gets the adopter identified by `id`, or `None` if it does not exist.
    async fn get_adopter(&self, id: AdopterId) -> DbResult<Option<Adopter>>;

    /// Gets all dogs owned by the adopter identified by `id`, ordered by identifier.
    ///
    /// Adopters that do not exist own no dogs.
    async fn find_adopter_dogs(&self, id: AdopterId) -> DbResult<Vec<Dog>>;

    /// Creates a new adopter and returns it with its assigned identifier.
    async fn add_adopter(&self, adopter: &NewAdopter) -> DbResult<Adopter>;

    /// Deletes the adopter identified by `id` and returns the number of deleted records.
    ///
    /// Dogs owned by the adopter are kept but lose their owner.
    async fn remove_adopter(&self, id: AdopterId) -> DbResult<u64>;

    /// Applies `changes` to the adopter identified by `id` and returns the updated adopter, or
    /// `None` if it does not exist.
    async fn update_adopter(
        &self,
        id: AdopterId,
        changes: &AdopterChanges,
    ) -> DbResult<Option<Adopter>>;

    /// Gets all dogs that match `filter`, ordered by identifier.
    async fn find_dogs(&self, filter: &DogFilter) -> DbResult<Vec<Dog>>;

    /// Gets the dog identified by `id`, or `None` if it does not exist.
    async fn get_dog(&self, id: DogId) -> DbResult<Option<Dog>>;

    /// Creates a new dog and returns it with its assigned identifier.
    async fn add_dog(&self, dog: &NewDog) -> DbResult<Dog>;

    /// Deletes the dog identified by `id` and returns the number of deleted records.
    async fn remove_dog(&self, id: DogId) -> DbResult<u64>;

    /// Applies `changes` to the dog identified by `id` and returns the updated dog, or `None` if
    /// it does not exist.
    async fn update_dog(&self, id: DogId, changes: &DogChanges) -> DbResult<Option<Dog>>;

    /// Releases all resources held by the database.
    async fn close(&self);
}
