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

//! Operations on dogs.

use crate::driver::Driver;
use crate::model::*;
use shelter_core::driver::DriverResult;

impl Driver {
    /// Returns all dogs that match `filter`.
    pub(crate) async fn find_dogs(self, filter: &DogFilter) -> DriverResult<Vec<Dog>> {
        let dogs = self.db.find_dogs(filter).await?;
        Ok(dogs)
    }

    /// Gets the dog identified by `id`, if it exists.
    pub(crate) async fn get_dog(self, id: DogId) -> DriverResult<Option<Dog>> {
        let dog = self.db.get_dog(id).await?;
        Ok(dog)
    }

    /// Registers a new dog and returns it with its assigned identifier.
    ///
    /// Fails with `NotFound` if the dog names an adopter that does not exist.
    pub(crate) async fn add_dog(self, dog: NewDog) -> DriverResult<Dog> {
        let dog = self.db.add_dog(&dog).await?;
        Ok(dog)
    }

    /// Removes the dog identified by `id` and returns how many dogs were removed.
    pub(crate) async fn remove_dog(self, id: DogId) -> DriverResult<u64> {
        let count = self.db.remove_dog(id).await?;
        Ok(count)
    }

    /// Applies `changes` to the dog identified by `id` and returns its new contents, or `None` if
    /// the dog does not exist.
    pub(crate) async fn update_dog(
        self,
        id: DogId,
        changes: DogChanges,
    ) -> DriverResult<Option<Dog>> {
        let dog = self.db.update_dog(id, &changes).await?;
        Ok(dog)
    }
}
