use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
	domain::post::{schemas::Page, Author, Post, PostView},
	services::response::ServiceError,
};

use super::TPostRepository;

const SELECT_POST_VIEW: &str = r#"
	SELECT p.id, p.title, p.content, u.name AS author_name
	FROM posts p
	JOIN users u ON u.id = p.author_id
"#;

#[derive(FromRow)]
struct PostViewRow {
	id: Uuid,
	title: String,
	content: String,
	author_name: Option<String>,
}

impl From<PostViewRow> for PostView {
	fn from(row: PostViewRow) -> Self {
		PostView {
			id: row.id,
			title: row.title,
			content: row.content,
			author: Author { name: row.author_name },
		}
	}
}

#[derive(Clone)]
pub struct PostRepository {
	pool: PgPool,
}

impl PostRepository {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl TPostRepository for PostRepository {
	async fn create(
		&self,
		title: String,
		content: String,
		author_id: Uuid,
	) -> Result<Post, ServiceError> {
		let post = Post::new(title, content, author_id);
		let created = sqlx::query_as::<_, Post>(
			r#"
			INSERT INTO posts (id, title, content, author_id, create_dt, update_dt)
			VALUES ($1, $2, $3, $4, $5, $6)
			RETURNING id, title, content, author_id, create_dt, update_dt
			"#,
		)
		.bind(post.id)
		.bind(&post.title)
		.bind(&post.content)
		.bind(post.author_id)
		.bind(post.create_dt)
		.bind(post.update_dt)
		.fetch_one(&self.pool)
		.await?;

		Ok(created)
	}

	async fn update(
		&self,
		id: Uuid,
		author_id: Uuid,
		title: Option<String>,
		content: Option<String>,
	) -> Result<u64, ServiceError> {
		let result = sqlx::query(
			r#"
			UPDATE posts
			SET title = COALESCE($3, title),
				content = COALESCE($4, content),
				update_dt = $5
			WHERE id = $1 AND author_id = $2
			"#,
		)
		.bind(id)
		.bind(author_id)
		.bind(title)
		.bind(content)
		.bind(Utc::now())
		.execute(&self.pool)
		.await?;

		Ok(result.rows_affected())
	}

	async fn find_many(
		&self,
		page: Option<Page>,
	) -> Result<Vec<PostView>, ServiceError> {
		let rows = match page {
			None => sqlx::query_as::<_, PostViewRow>(SELECT_POST_VIEW).fetch_all(&self.pool).await?,
			Some(Page { limit, offset }) => {
				let sql = format!("{SELECT_POST_VIEW} ORDER BY p.create_dt, p.id LIMIT $1 OFFSET $2");
				sqlx::query_as::<_, PostViewRow>(&sql)
					.bind(limit)
					.bind(offset)
					.fetch_all(&self.pool)
					.await?
			}
		};

		Ok(rows.into_iter().map(PostView::from).collect())
	}

	async fn find_one(
		&self,
		id: Uuid,
	) -> Result<Option<PostView>, ServiceError> {
		let sql = format!("{SELECT_POST_VIEW} WHERE p.id = $1");
		let row = sqlx::query_as::<_, PostViewRow>(&sql)
			.bind(id)
			.fetch_optional(&self.pool)
			.await?;

		Ok(row.map(PostView::from))
	}
}
