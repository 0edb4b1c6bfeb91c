//! Path parameter extractor
//!
//! A segment that does not parse into the expected type (`/users/abc`)
//! means the route does not name an existing resource, so it is reported
//! as a JSON 404 instead of axum's plain-text 400.

use axum::{
    extract::{rejection::PathRejection, FromRequestParts},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Error code attached to unparseable path parameters
pub const INVALID_PATH_PARAM: &str = "invalid_path_param";

#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map(|axum::extract::Path(value)| Path(value))
            .map_err(|rejection| match rejection {
                PathRejection::FailedToDeserializePathParams(_) => {
                    ApiError::not_found("Not found").with_code(INVALID_PATH_PARAM)
                }
                other => ApiError::new(other.status(), other.body_text()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn user_id(Path(id): Path<u64>) -> String {
        id.to_string()
    }

    async fn status_for(uri: &str) -> StatusCode {
        let app = Router::new().route("/users/{id}", get(user_id));
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_numeric_id_is_extracted() {
        assert_eq!(status_for("/users/12").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unparseable_ids_are_not_found() {
        for uri in ["/users/abc", "/users/-1", "/users/1.5"] {
            assert_eq!(status_for(uri).await, StatusCode::NOT_FOUND, "{}", uri);
        }
    }
}
