use axum::extract::State;
use axum::headers::{authorization::Bearer, Authorization};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum::TypedHeader;
use uuid::Uuid;

use crate::dependencies::Dependency;
use crate::services::response::ServiceError;

/// Identity of the caller, set by [`authenticate`] for the handlers behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

pub async fn authenticate<B>(
	State(dependency): State<Dependency>,
	// Absent, non-UTF-8 or non-`Bearer` headers all come through as `None`.
	bearer: Option<TypedHeader<Authorization<Bearer>>>,
	mut request: Request<B>,
	next: Next<B>,
) -> Result<Response, ServiceError> {
	let Some(TypedHeader(Authorization(bearer))) = bearer else {
		return Err(ServiceError::Unauthorized);
	};
	let user_id = dependency.token_verifier().verify(bearer.token())?;

	request.extensions_mut().insert(CurrentUser(user_id));

	Ok(next.run(request).await)
}
