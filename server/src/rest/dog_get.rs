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

//! API to get a single dog.

use crate::driver::Driver;
use crate::model::DogId;
use crate::rest::{DOG_NOT_FOUND, parse_id};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use shelter_core::rest::{RestError, RestResult};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
) -> RestResult<impl IntoResponse> {
    let id = parse_id::<DogId>(&id, DOG_NOT_FOUND)?;
    match driver.get_dog(id).await {
        Ok(Some(dog)) => Ok(Json(dog)),
        Ok(None) => Err(RestError::NotFound(DOG_NOT_FOUND.to_owned())),
        Err(e) => Err(RestError::concealed("Error retrieving the dog", e)),
    }
}
