use axum::{
	extract::{rejection::QueryRejection, Path, Query, State},
	Extension, Json,
};
use bytes::Bytes;

use crate::{
	common::middleware_auth::CurrentUser,
	dependencies::Dependency,
	domain::post::schemas::{safe_parse, BulkQuery, CreatePostInput, UpdatePostInput},
	services::{
		handlers::PostHandler,
		response::{CreatedPost, PostList, ServiceError, SinglePost},
	},
};

pub async fn create_post(
	State(dependency): State<Dependency>,
	Extension(CurrentUser(user_id)): Extension<CurrentUser>,
	body: Bytes,
) -> Result<Json<CreatedPost>, ServiceError> {
	let input = safe_parse::<CreatePostInput>(&body)?;
	let id = PostHandler::create_post(dependency.repository(), user_id, input).await?;
	Ok(Json(CreatedPost { id }))
}

pub async fn update_post(
	State(dependency): State<Dependency>,
	Extension(CurrentUser(user_id)): Extension<CurrentUser>,
	body: Bytes,
) -> Result<&'static str, ServiceError> {
	let input = safe_parse::<UpdatePostInput>(&body)?;
	PostHandler::update_post(dependency.repository(), user_id, input).await?;
	Ok("updated post")
}

pub async fn list_posts(
	State(dependency): State<Dependency>,
	query: Result<Query<BulkQuery>, QueryRejection>,
) -> Result<Json<PostList>, ServiceError> {
	let Query(query) = query.map_err(|_| ServiceError::BadInput)?;
	let posts = PostHandler::list_posts(dependency.repository(), query.paging()?).await?;
	Ok(Json(PostList { posts }))
}

// Authenticated, but the caller identity plays no part in the lookup.
pub async fn get_post(
	State(dependency): State<Dependency>,
	Path(id): Path<String>,
) -> Result<Json<SinglePost>, ServiceError> {
	let post = PostHandler::get_post(dependency.repository(), &id).await?;
	Ok(Json(SinglePost { post }))
}
