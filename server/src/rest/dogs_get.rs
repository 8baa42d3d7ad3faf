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

//! API to list dogs.

use crate::driver::Driver;
use crate::model::DogFilter;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use shelter_core::rest::{RestError, RestResult};

/// Message returned when the dogs cannot be retrieved.
const ERROR_MESSAGE: &str = "Error retrieving the dogs";

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    filter: Result<Query<DogFilter>, QueryRejection>,
) -> RestResult<impl IntoResponse> {
    let Query(filter) = filter.map_err(|e| RestError::rejected(ERROR_MESSAGE, e))?;
    let dogs = driver
        .find_dogs(&filter)
        .await
        .map_err(|e| RestError::concealed(ERROR_MESSAGE, e))?;
    Ok(Json(dogs))
}
