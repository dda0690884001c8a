#[cfg(any(test, feature = "test"))]
pub mod in_memory;
pub(crate) mod post_repository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
	domain::post::{schemas::Page, Post, PostView},
	services::response::ServiceError,
};

pub use post_repository::PostRepository;

/// Persistence seam for posts. Every operation is a single atomic statement.
#[async_trait]
pub trait TPostRepository: Send + Sync {
	async fn create(
		&self,
		title: String,
		content: String,
		author_id: Uuid,
	) -> Result<Post, ServiceError>;

	/// Applies the change only where both `id` and `author_id` match and returns
	/// the number of rows touched. Zero is not an error.
	async fn update(
		&self,
		id: Uuid,
		author_id: Uuid,
		title: Option<String>,
		content: Option<String>,
	) -> Result<u64, ServiceError>;

	async fn find_many(
		&self,
		page: Option<Page>,
	) -> Result<Vec<PostView>, ServiceError>;

	async fn find_one(
		&self,
		id: Uuid,
	) -> Result<Option<PostView>, ServiceError>;
}
