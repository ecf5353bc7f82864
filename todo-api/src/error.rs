//! Handler failures and their HTTP mapping.
//!
//! Every variant is a client-input problem that ends the request with a bare
//! status code and leaves the store untouched.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::model::TodoId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No item with the requested id exists.
    #[error("todo item {0} not found")]
    NotFound(TodoId),

    /// The id in the path differs from the id in the request body.
    #[error("path id {path} does not match body id {body}")]
    IdMismatch { path: TodoId, body: TodoId },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request rejected");
        self.status().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound(3).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn id_mismatch_maps_to_400() {
        let response = ApiError::IdMismatch { path: 1, body: 2 }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn messages_name_the_ids() {
        assert_eq!(ApiError::NotFound(9).to_string(), "todo item 9 not found");
        assert_eq!(
            ApiError::IdMismatch { path: 1, body: 2 }.to_string(),
            "path id 1 does not match body id 2"
        );
    }
}
