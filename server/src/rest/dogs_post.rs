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

//! API to register a new dog.

use crate::driver::Driver;
use crate::model::NewDog;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::{Json, http};
use shelter_core::rest::{RestError, RestResult};

/// Message returned when the dog cannot be added.
const ERROR_MESSAGE: &str = "Error adding the dog";

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    dog: Result<Json<NewDog>, JsonRejection>,
) -> RestResult<impl IntoResponse> {
    let Json(dog) = dog.map_err(|e| RestError::rejected(ERROR_MESSAGE, e))?;
    let dog =
        driver.add_dog(dog).await.map_err(|e| RestError::concealed(ERROR_MESSAGE, e))?;
    Ok((http::StatusCode::CREATED, Json(dog)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::rest::testutils::*;
    use shelter_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/api/dogs".to_owned())
    }

    #[tokio::test]
    async fn test_create_without_adopter() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.app(), route())
            .send_json(serde_json::json!({"name": "Rex"}))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<Dog>()
            .await;
        assert_eq!("Rex", response.name());
        assert_eq!(&None, response.adopter_id());

        assert_eq!(Some(response.clone()), context.get_dog(*response.id()).await);
    }

    #[tokio::test]
    async fn test_create_with_adopter() {
        let context = TestContext::setup().await;

        let alice = context.add_adopter("Alice", "alice@example.com").await;

        let request = NewDog::new("Rex".to_owned(), Some(*alice.id()));
        let response = OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<Dog>()
            .await;
        assert_eq!(&Some(*alice.id()), response.adopter_id());

        assert_eq!(Some(response.clone()), context.get_dog(*response.id()).await);
    }

    #[tokio::test]
    async fn test_unknown_adopter_is_concealed() {
        let context = TestContext::setup().await;

        let request = NewDog::new("Rex".to_owned(), Some(AdopterId::from(404)));
        OneShotBuilder::new(context.into_app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Error adding the dog$")
            .await;
    }

    #[tokio::test]
    async fn test_failure() {
        OneShotBuilder::new(failing_app(), route())
            .send_json(NewDog::new("Rex".to_owned(), None))
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Error adding the dog$")
            .await;
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route())
            .send_json(serde_json::json!({"adopter_id": 1}))
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Error adding the dog$")
            .await;
    }

    test_payload_must_be_json!(
        TestContext::setup().await.into_app(),
        route(),
        "Error adding the dog"
    );
}
