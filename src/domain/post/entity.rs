use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
	pub id: Uuid,
	pub title: String,
	pub content: String,
	pub author_id: Uuid,
	pub create_dt: DateTime<Utc>,
	pub update_dt: DateTime<Utc>,
}

impl Post {
	pub fn new(title: String, content: String, author_id: Uuid) -> Self {
		let now = Utc::now();
		Self {
			id: Uuid::new_v4(),
			title,
			content,
			author_id,
			create_dt: now,
			update_dt: now,
		}
	}
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Author {
	pub name: Option<String>,
}

/// Read projection of a post: what `GET /bulk` and `GET /:id` return.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PostView {
	pub id: Uuid,
	pub title: String,
	pub content: String,
	pub author: Author,
}
