use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
	domain::post::{schemas::Page, Author, Post, PostView},
	services::response::ServiceError,
};

use super::TPostRepository;

/// Store-free repository used by tests. Posts are kept in creation order and a post
/// may only reference a user that was added beforehand, mirroring the foreign key.
#[derive(Default)]
pub struct InMemoryPostRepository {
	users: RwLock<HashMap<Uuid, Option<String>>>,
	posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
	pub async fn add_user(
		&self,
		name: Option<&str>,
	) -> Uuid {
		let id = Uuid::new_v4();
		self.users.write().await.insert(id, name.map(String::from));
		id
	}

	pub async fn get(
		&self,
		id: Uuid,
	) -> Option<Post> {
		self.posts.read().await.iter().find(|post| post.id == id).cloned()
	}

	fn view(
		post: &Post,
		users: &HashMap<Uuid, Option<String>>,
	) -> PostView {
		PostView {
			id: post.id,
			title: post.title.clone(),
			content: post.content.clone(),
			author: Author {
				name: users.get(&post.author_id).cloned().flatten(),
			},
		}
	}
}

#[async_trait]
impl TPostRepository for InMemoryPostRepository {
	async fn create(
		&self,
		title: String,
		content: String,
		author_id: Uuid,
	) -> Result<Post, ServiceError> {
		if !self.users.read().await.contains_key(&author_id) {
			return Err(ServiceError::OperationFailed);
		}
		let post = Post::new(title, content, author_id);
		self.posts.write().await.push(post.clone());
		Ok(post)
	}

	async fn update(
		&self,
		id: Uuid,
		author_id: Uuid,
		title: Option<String>,
		content: Option<String>,
	) -> Result<u64, ServiceError> {
		let mut posts = self.posts.write().await;
		let Some(post) = posts.iter_mut().find(|post| post.id == id && post.author_id == author_id) else {
			return Ok(0);
		};

		if let Some(title) = title {
			post.title = title;
		}
		if let Some(content) = content {
			post.content = content;
		}
		post.update_dt = Utc::now();
		Ok(1)
	}

	async fn find_many(
		&self,
		page: Option<Page>,
	) -> Result<Vec<PostView>, ServiceError> {
		let users = self.users.read().await;
		let posts = self.posts.read().await;
		let views = posts.iter().map(|post| Self::view(post, &users));

		Ok(match page {
			None => views.collect(),
			Some(Page { limit, offset }) => views.skip(offset as usize).take(limit as usize).collect(),
		})
	}

	async fn find_one(
		&self,
		id: Uuid,
	) -> Result<Option<PostView>, ServiceError> {
		let users = self.users.read().await;
		Ok(self.posts.read().await.iter().find(|post| post.id == id).map(|post| Self::view(post, &users)))
	}
}
