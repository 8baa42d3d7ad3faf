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

//! Operations on adopters.

use crate::driver::Driver;
use crate::model::*;
use shelter_core::driver::DriverResult;

impl Driver {
    /// Returns all adopters that match `filter`.
    pub(crate) async fn find_adopters(self, filter: &AdopterFilter) -> DriverResult<Vec<Adopter>> {
        let adopters = self.db.find_adopters(filter).await?;
        Ok(adopters)
    }

    /// Gets the adopter identified by `id`, if it exists.
    pub(crate) async fn get_adopter(self, id: AdopterId) -> DriverResult<Option<Adopter>> {
        let adopter = self.db.get_adopter(id).await?;
        Ok(adopter)
    }

    /// Returns the dogs owned by the adopter identified by `id`.
    ///
    /// An unknown adopter owns no dogs, so this is not an error.
    pub(crate) async fn find_adopter_dogs(self, id: AdopterId) -> DriverResult<Vec<Dog>> {
        let dogs = self.db.find_adopter_dogs(id).await?;
        Ok(dogs)
    }

    /// Registers a new adopter and returns it with its assigned identifier.
    pub(crate) async fn add_adopter(self, adopter: NewAdopter) -> DriverResult<Adopter> {
        let adopter = self.db.add_adopter(&adopter).await?;
        Ok(adopter)
    }

    /// Removes the adopter identified by `id` and returns how many adopters were removed.
    pub(crate) async fn remove_adopter(self, id: AdopterId) -> DriverResult<u64> {
        let count = self.db.remove_adopter(id).await?;
        Ok(count)
    }

    /// Applies `changes` to the adopter identified by `id` and returns its new contents, or `None`
    /// if the adopter does not exist.
    pub(crate) async fn update_adopter(
        self,
        id: AdopterId,
        changes: AdopterChanges,
    ) -> DriverResult<Option<Adopter>> {
        let adopter = self.db.update_adopter(id, &changes).await?;
        Ok(adopter)
    }
}
