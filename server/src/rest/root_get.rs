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

//! API to describe the service.

use axum::response::Html;

/// API handler.
pub(crate) async fn handler() -> Html<&'static str> {
    Html("<h2>Welcome to the Shelter API</h2>")
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http;
    use shelter_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/".to_owned())
    }

    #[tokio::test]
    async fn test_welcome() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .take_response()
            .await;
        let content_type = response.headers().get(http::header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_body() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_text("^<h2>Welcome to the Shelter API</h2>$")
            .await;
    }

    test_payload_is_ignored!(
        TestContext::setup().await.into_app(),
        route(),
        http::StatusCode::OK
    );
}
