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

//! API to list the dogs owned by an adopter.

use crate::driver::Driver;
use crate::model::AdopterId;
use crate::rest::parse_id;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use shelter_core::rest::{RestError, RestResult};

/// Message returned when the adopter owns no dogs.
const NO_DOGS: &str = "No dogs found for this adopter";

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
) -> RestResult<impl IntoResponse> {
    let id = parse_id::<AdopterId>(&id, NO_DOGS)?;
    let dogs = driver
        .find_adopter_dogs(id)
        .await
        .map_err(|e| RestError::concealed("Error retrieving the dogs of the adopter", e))?;
    if dogs.is_empty() {
        return Err(RestError::NotFound(NO_DOGS.to_owned()));
    }
    Ok(Json(dogs))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use shelter_core::rest::testutils::*;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::GET, format!("/api/adopters/{}/dogs", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let alice = context.add_adopter("Alice", "alice@example.com").await;
        let bob = context.add_adopter("Bob", "bob@example.com").await;
        let rex = context.add_dog("Rex", Some(*alice.id())).await;
        context.add_dog("Fido", Some(*bob.id())).await;
        let luna = context.add_dog("Luna", Some(*alice.id())).await;

        for _ in 0..2 {
            let response = OneShotBuilder::new(context.app(), route(&alice.id().to_string()))
                .send_empty()
                .await
                .expect_json::<Vec<Dog>>()
                .await;
            assert_eq!(vec![rex.clone(), luna.clone()], response);
        }
    }

    #[tokio::test]
    async fn test_no_dogs() {
        let context = TestContext::setup().await;

        let alice = context.add_adopter("Alice", "alice@example.com").await;
        context.add_dog("Stray", None).await;

        OneShotBuilder::new(context.into_app(), route(&alice.id().to_string()))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^No dogs found for this adopter$")
            .await;
    }

    #[tokio::test]
    async fn test_unknown_adopter() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route("987"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^No dogs found for this adopter$")
            .await;

        OneShotBuilder::new(context.into_app(), route("not-a-number"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^No dogs found for this adopter$")
            .await;
    }

    #[tokio::test]
    async fn test_failure() {
        OneShotBuilder::new(failing_app(), route("1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Error retrieving the dogs of the adopter$")
            .await;
    }

    test_payload_is_ignored!(
        TestContext::setup().await.into_app(),
        route("1"),
        http::StatusCode::NOT_FOUND
    );
}
