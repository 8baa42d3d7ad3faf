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

//! High-level data types.

use derive_getters::Getters;
use derive_more::{Constructor, Display, From};
use serde::{Deserialize, Serialize};
use shelter_core::model::{ModelError, ModelResult};
use std::str::FromStr;

/// Parses the textual representation of a numeric identifier of type `kind`.
fn parse_id(kind: &str, s: &str) -> ModelResult<i64> {
    s.parse::<i64>().map_err(|e| ModelError(format!("Invalid {} id '{}': {}", kind, s, e)))
}

/// Identifier of an adopter.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Serialize)]
#[serde(transparent)]
pub(crate) struct AdopterId(i64);

impl AdopterId {
    /// Returns the raw value of the identifier as stored in the database.
    pub(crate) fn as_i64(self) -> i64 {
        self.0
    }
}

impl FromStr for AdopterId {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        parse_id("adopter", s).map(AdopterId)
    }
}

/// Identifier of a dog.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Serialize)]
#[serde(transparent)]
pub(crate) struct DogId(i64);

impl DogId {
    /// Returns the raw value of the identifier as stored in the database.
    pub(crate) fn as_i64(self) -> i64 {
        self.0
    }
}

impl FromStr for DogId {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        parse_id("dog", s).map(DogId)
    }
}

/// A person that has adopted, or may adopt, dogs from the shelter.
#[derive(Clone, Constructor, Debug, Getters, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub(crate) struct Adopter {
    /// Identifier assigned by the database on creation.
    id: AdopterId,

    /// Name of the adopter.
    name: String,

    /// Contact address of the adopter.
    email: String,
}

/// Contents of a new adopter, as supplied by the user.
#[derive(Constructor, Deserialize, Getters)]
#[cfg_attr(test, derive(Debug, Serialize))]
pub(crate) struct NewAdopter {
    /// Name of the adopter.
    name: String,

    /// Contact address of the adopter.
    email: String,
}

/// Modifications to apply to an existing adopter.  Absent fields are left untouched.
#[derive(Constructor, Default, Deserialize, Getters)]
#[cfg_attr(test, derive(Debug, Serialize))]
pub(crate) struct AdopterChanges {
    /// New name for the adopter.
    #[serde(default)]
    name: Option<String>,

    /// New contact address for the adopter.
    #[serde(default)]
    email: Option<String>,
}

/// Criteria to select adopters.  Absent fields match any value.
#[derive(Constructor, Default, Deserialize, Getters)]
#[cfg_attr(test, derive(Debug, Serialize))]
pub(crate) struct AdopterFilter {
    /// Exact name to match.
    #[serde(default)]
    name: Option<String>,

    /// Exact contact address to match.
    #[serde(default)]
    email: Option<String>,
}

/// A dog housed by the shelter.
#[derive(Clone, Constructor, Debug, Getters, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub(crate) struct Dog {
    /// Identifier assigned by the database on creation.
    id: DogId,

    /// Name of the dog.
    name: String,

    /// Adopter that owns the dog, if it has been adopted.
    adopter_id: Option<AdopterId>,
}

/// Contents of a new dog, as supplied by the user.
#[derive(Constructor, Deserialize, Getters)]
#[cfg_attr(test, derive(Debug, Serialize))]
pub(crate) struct NewDog {
    /// Name of the dog.
    name: String,

    /// Adopter that owns the dog, if any.
    #[serde(default)]
    adopter_id: Option<AdopterId>,
}

/// Modifications to apply to an existing dog.  Absent fields are left untouched.
#[derive(Constructor, Default, Deserialize, Getters)]
#[cfg_attr(test, derive(Debug, Serialize))]
pub(crate) struct DogChanges {
    /// New name for the dog.
    #[serde(default)]
    name: Option<String>,

    /// New owner of the dog.
    #[serde(default)]
    adopter_id: Option<AdopterId>,
}

/// Criteria to select dogs.  Absent fields match any value.
#[derive(Constructor, Default, Deserialize, Getters)]
#[cfg_attr(test, derive(Debug, Serialize))]
pub(crate) struct DogFilter {
    /// Exact name to match.
    #[serde(default)]
    name: Option<String>,

    /// Owner to match.
    #[serde(default)]
    adopter_id: Option<AdopterId>,
}
