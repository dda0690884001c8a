use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::post::PostView;

#[derive(Debug, Serialize)]
pub struct CreatedPost {
	pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct PostList {
	pub posts: Vec<PostView>,
}

#[derive(Debug, Serialize)]
pub struct SinglePost {
	pub post: Option<PostView>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
	pub error: &'static str,
}

#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("unauthorized")]
	Unauthorized,
	#[error("invalid input")]
	BadInput,
	#[error("operation failed")]
	OperationFailed,
	#[error("database error: {0}")]
	DatabaseError(#[from] sqlx::Error),
	#[error("migration error: {0}")]
	MigrationError(#[from] sqlx::migrate::MigrateError),
	#[error("configuration error: {0}")]
	ConfigError(String),
	#[error("token could not be issued: {0}")]
	TokenIssueError(#[source] jsonwebtoken::errors::Error),
	#[error("server error: {0}")]
	ServerError(Box<dyn std::error::Error + Send + Sync>),
}

impl ServiceError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
			ServiceError::BadInput | ServiceError::OperationFailed | ServiceError::DatabaseError(_) => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn public_message(&self) -> &'static str {
		match self {
			ServiceError::Unauthorized => "unauthorized",
			ServiceError::BadInput => "invalid input",
			ServiceError::OperationFailed | ServiceError::DatabaseError(_) => "operation failed",
			_ => "internal error",
		}
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		// Persistence failures are collapsed into one code; the cause only goes to the log.
		match &self {
			ServiceError::DatabaseError(err) => tracing::error!("Persistence failure: {:?}", err),
			ServiceError::Unauthorized | ServiceError::BadInput | ServiceError::OperationFailed => {}
			other => tracing::error!("Unexpected error at request boundary: {}", other),
		}

		let body = ErrorBody {
			error: self.public_message(),
		};
		(self.status_code(), Json(body)).into_response()
	}
}

#[cfg(test)]
mod test {
	use axum::{http::StatusCode, response::IntoResponse};

	use super::ServiceError;

	#[test]
	fn test_status_codes_follow_error_taxonomy() {
		assert_eq!(ServiceError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
		assert_eq!(ServiceError::BadInput.status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(ServiceError::OperationFailed.status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(ServiceError::DatabaseError(sqlx::Error::RowNotFound).status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(
			ServiceError::ConfigError("JWT_SECRET".into()).status_code(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}

	#[tokio::test]
	async fn test_database_error_does_not_leak_cause() {
		let response = ServiceError::DatabaseError(sqlx::Error::PoolTimedOut).into_response();
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);

		let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
		let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
		assert_eq!(value, serde_json::json!({ "error": "operation failed" }));
	}
}
