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

//! API to remove a dog.

use crate::driver::Driver;
use crate::model::DogId;
use crate::rest::{Confirmation, DOG_NOT_FOUND, parse_id};
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
    let count = driver
        .remove_dog(id)
        .await
        .map_err(|e| RestError::concealed("Error removing the dog", e))?;
    if count == 0 {
        return Err(RestError::NotFound(DOG_NOT_FOUND.to_owned()));
    }
    Ok(Json(Confirmation::new("The dog has been removed")))
}
