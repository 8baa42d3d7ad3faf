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

//! API to modify an existing adopter.

use crate::driver::Driver;
use crate::model::{AdopterChanges, AdopterId};
use crate::rest::{ADOPTER_NOT_FOUND, parse_id};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use shelter_core::rest::{RestError, RestResult};

/// Message returned when the adopter cannot be updated.
const ERROR_MESSAGE: &str = "Error updating the adopter";

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
    changes: Result<Json<AdopterChanges>, JsonRejection>,
) -> RestResult<impl IntoResponse> {
    let id = parse_id::<AdopterId>(&id, ADOPTER_NOT_FOUND)?;
    let Json(changes) = changes.map_err(|e| RestError::rejected(ERROR_MESSAGE, e))?;
    match driver.update_adopter(id, changes).await {
        Ok(Some(adopter)) => Ok(Json(adopter)),
        Ok(None) => Err(RestError::NotFound(ADOPTER_NOT_FOUND.to_owned())),
        Err(e) => Err(RestError::concealed(ERROR_MESSAGE, e)),
    }
}
