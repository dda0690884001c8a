use uuid::Uuid;

use crate::{
	adapters::repositories::TPostRepository,
	domain::post::{
		schemas::{CreatePostInput, Page, UpdatePostInput},
		PostView,
	},
};

use super::response::ServiceError;

pub struct PostHandler;
impl PostHandler {
	pub async fn create_post(
		repository: &dyn TPostRepository,
		author_id: Uuid,
		input: CreatePostInput,
	) -> Result<Uuid, ServiceError> {
		let post = repository.create(input.title, input.content, author_id).await?;
		tracing::debug!(post_id = %post.id, %author_id, "Post created");
		Ok(post.id)
	}

	/// Applies the update through the ownership filter. A post that does not exist or
	/// belongs to someone else is left untouched and the call still succeeds.
	pub async fn update_post(
		repository: &dyn TPostRepository,
		author_id: Uuid,
		input: UpdatePostInput,
	) -> Result<(), ServiceError> {
		let UpdatePostInput { id, title, content } = input;
		let affected = match Uuid::parse_str(&id) {
			Ok(post_id) => repository.update(post_id, author_id, title, content).await?,
			Err(_) => 0,
		};
		if affected == 0 {
			tracing::warn!(post_id = %id, %author_id, "Update matched no post owned by caller");
		} else {
			tracing::debug!(post_id = %id, %author_id, "Post updated");
		}
		Ok(())
	}

	pub async fn list_posts(
		repository: &dyn TPostRepository,
		page: Option<Page>,
	) -> Result<Vec<PostView>, ServiceError> {
		repository.find_many(page).await
	}

	/// An id that cannot name a post resolves to `None`, like any other unknown id.
	pub async fn get_post(
		repository: &dyn TPostRepository,
		id: &str,
	) -> Result<Option<PostView>, ServiceError> {
		match Uuid::parse_str(id) {
			Ok(post_id) => repository.find_one(post_id).await,
			Err(_) => Ok(None),
		}
	}
}
