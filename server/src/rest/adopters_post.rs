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

//! API to register a new adopter.

use crate::driver::Driver;
use crate::model::NewAdopter;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::{Json, http};
use shelter_core::rest::{RestError, RestResult};

/// Message returned when the adopter cannot be added.
const ERROR_MESSAGE: &str = "Error adding the adopter";

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    adopter: Result<Json<NewAdopter>, JsonRejection>,
) -> RestResult<impl IntoResponse> {
    let Json(adopter) = adopter.map_err(|e| RestError::rejected(ERROR_MESSAGE, e))?;
    let adopter =
        driver.add_adopter(adopter).await.map_err(|e| RestError::concealed(ERROR_MESSAGE, e))?;
    Ok((http::StatusCode::CREATED, Json(adopter)))
}
