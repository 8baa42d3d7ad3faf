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

//! API to modify an existing dog.

use crate::driver::Driver;
use crate::model::{DogChanges, DogId};
use crate::rest::{DOG_NOT_FOUND, parse_id};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use shelter_core::rest::{RestError, RestResult};

/// Message returned when the dog cannot be updated.
const ERROR_MESSAGE: &str = "Error updating the dog";

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
    changes: Result<Json<DogChanges>, JsonRejection>,
) -> RestResult<impl IntoResponse> {
    let id = parse_id::<DogId>(&id, DOG_NOT_FOUND)?;
    let Json(changes) = changes.map_err(|e| RestError::rejected(ERROR_MESSAGE, e))?;
    match driver.update_dog(id, changes).await {
        Ok(Some(dog)) => Ok(Json(dog)),
        Ok(None) => Err(RestError::NotFound(DOG_NOT_FOUND.to_owned())),
        Err(e) => Err(RestError::concealed(ERROR_MESSAGE, e)),
    }
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use shelter_core::rest::testutils::*;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::PUT, format!("/api/dogs/{}", id))
    }

    #[tokio::test]
    async fn test_adopt() {
        let context = TestContext::setup().await;

        let alice = context.add_adopter("Alice", "alice@example.com").await;
        let rex = context.add_dog("Rex", None).await;

        let response = OneShotBuilder::new(context.app(), route(&rex.id().to_string()))
            .send_json(DogChanges::new(None, Some(*alice.id())))
            .await
            .expect_json::<Dog>()
            .await;
        let exp_dog = Dog::new(*rex.id(), "Rex".to_owned(), Some(*alice.id()));
        assert_eq!(exp_dog, response);

        assert_eq!(Some(exp_dog), context.get_dog(*rex.id()).await);
    }

    #[tokio::test]
    async fn test_rename_keeps_adopter() {
        let context = TestContext::setup().await;

        let alice = context.add_adopter("Alice", "alice@example.com").await;
        let rex = context.add_dog("Rex", Some(*alice.id())).await;

        let response = OneShotBuilder::new(context.into_app(), route(&rex.id().to_string()))
            .send_json(serde_json::json!({"name": "Max"}))
            .await
            .expect_json::<Dog>()
            .await;
        assert_eq!(Dog::new(*rex.id(), "Max".to_owned(), Some(*alice.id())), response);
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route("31"))
            .send_json(DogChanges::new(Some("Ghost".to_owned()), None))
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Dog not found$")
            .await;

        OneShotBuilder::new(context.into_app(), route("ghost"))
            .send_json(DogChanges::new(Some("Ghost".to_owned()), None))
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Dog not found$")
            .await;
    }

    #[tokio::test]
    async fn test_unknown_adopter_is_concealed() {
        let context = TestContext::setup().await;

        let rex = context.add_dog("Rex", None).await;

        OneShotBuilder::new(context.app(), route(&rex.id().to_string()))
            .send_json(DogChanges::new(None, Some(AdopterId::from(77))))
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Error updating the dog$")
            .await;

        assert_eq!(Some(rex.clone()), context.get_dog(*rex.id()).await);
    }

    #[tokio::test]
    async fn test_failure() {
        OneShotBuilder::new(failing_app(), route("1"))
            .send_json(DogChanges::new(Some("Rex".to_owned()), None))
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Error updating the dog$")
            .await;
    }

    #[tokio::test]
    async fn test_wrong_field_type() {
        let context = TestContext::setup().await;

        let rex = context.add_dog("Rex", None).await;

        OneShotBuilder::new(context.app(), route(&rex.id().to_string()))
            .send_json(serde_json::json!({"adopter_id": "alice"}))
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Error updating the dog$")
            .await;

        assert_eq!(Some(rex.clone()), context.get_dog(*rex.id()).await);
    }

    test_payload_must_be_json!(
        TestContext::setup().await.into_app(),
        route("1"),
        "Error updating the dog"
    );
}
