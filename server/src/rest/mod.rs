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

//! REST interface for the service.
//!
//! Every API lives in its own file named after the entity it operates on and the HTTP method it
//! handles.  Handlers only translate between HTTP and the driver: they pick the status code based
//! on the shape of the result and conceal any driver failure behind a fixed message.

use crate::driver::Driver;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use serde::Serialize;
use shelter_core::rest::{RestError, RestResult};
use std::str::FromStr;

mod adopter_delete;
mod adopter_dogs_get;
mod adopter_get;
mod adopter_put;
mod adopters_get;
mod adopters_post;
mod dog_delete;
mod dog_get;
mod dog_put;
mod dogs_get;
mod dogs_post;
mod root_get;
#[cfg(test)]
mod testutils;

/// Maximum size of the payloads accepted by any API.
const MAX_BODY_SIZE: usize = 100 * 1024;

/// Message returned when an adopter does not exist.
const ADOPTER_NOT_FOUND: &str = "Adopter not found";

/// Message returned when a dog does not exist.
const DOG_NOT_FOUND: &str = "Dog not found";

/// Response to a successful operation that has no entity to return.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
pub(crate) struct Confirmation {
    /// Human-readable description of what happened.
    message: String,
}

impl Confirmation {
    /// Creates a new confirmation carrying `message`.
    fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }
}

/// Parses the identifier `raw` taken from a request path.
///
/// A malformed identifier cannot name any stored entity, so it is reported as a missing entity
/// described by `not_found`.
fn parse_id<I: FromStr>(raw: &str, not_found: &'static str) -> RestResult<I> {
    raw.parse::<I>().map_err(|_| RestError::NotFound(not_found.to_owned()))
}

/// Creates the router for the APIs under `/api/adopters`.
fn adopters_router() -> Router<Driver> {
    use axum::routing::get;
    Router::new()
        .route("/", get(adopters_get::handler).post(adopters_post::handler))
        .route(
            "/:id",
            get(adopter_get::handler).put(adopter_put::handler).delete(adopter_delete::handler),
        )
        .route("/:id/dogs", get(adopter_dogs_get::handler))
}

/// Creates the router for the APIs under `/api/dogs`.
fn dogs_router() -> Router<Driver> {
    use axum::routing::get;
    Router::new()
        .route("/", get(dogs_get::handler).post(dogs_post::handler))
        .route("/:id", get(dog_get::handler).put(dog_put::handler).delete(dog_delete::handler))
}

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::get;
    Router::new()
        .route("/", get(root_get::handler))
        .nest("/api/adopters", adopters_router())
        .nest("/api/dogs", dogs_router())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(driver)
}
