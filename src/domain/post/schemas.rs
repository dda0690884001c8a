use serde::{de::DeserializeOwned, Deserialize, Deserializer};

use crate::services::response::ServiceError;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// Body of `POST /`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct CreatePostInput {
	pub title: String,
	pub content: String,
}

/// Body of `PUT /`. Absent fields are left untouched; an explicit `null` is rejected.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct UpdatePostInput {
	pub id: String,
	#[serde(default, deserialize_with = "present_string")]
	pub title: Option<String>,
	#[serde(default, deserialize_with = "present_string")]
	pub content: Option<String>,
}

fn present_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
	String::deserialize(deserializer).map(Some)
}

/// Query string of `GET /bulk`.
#[derive(Debug, Default, Deserialize)]
pub struct BulkQuery {
	pub page: Option<i64>,
	pub size: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
	pub limit: i64,
	pub offset: i64,
}

impl BulkQuery {
	/// `None` means the caller asked for every post.
	pub fn paging(&self) -> Result<Option<Page>, ServiceError> {
		if self.page.is_none() && self.size.is_none() {
			return Ok(None);
		}

		let page = self.page.unwrap_or(1);
		let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);
		if page < 1 || size < 1 {
			return Err(ServiceError::BadInput);
		}

		let limit = size.min(MAX_PAGE_SIZE);
		Ok(Some(Page {
			limit,
			offset: (page - 1).saturating_mul(limit),
		}))
	}
}

/// Structurally validates an untyped request body. Either the whole value parses or
/// nothing is handed back.
pub fn safe_parse<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServiceError> {
	serde_json::from_slice::<T>(body).map_err(|err| {
		tracing::debug!("Rejected request body: {}", err);
		ServiceError::BadInput
	})
}

#[cfg(test)]
mod test {
	use super::{safe_parse, BulkQuery, CreatePostInput, Page, UpdatePostInput};
	use crate::services::response::ServiceError;

	#[test]
	fn test_create_input_requires_title_and_content() {
		let parsed = safe_parse::<CreatePostInput>(br#"{"title":"A","content":"B","extra":1}"#).unwrap();
		assert_eq!(
			parsed,
			CreatePostInput {
				title: "A".into(),
				content: "B".into()
			}
		);

		assert!(matches!(safe_parse::<CreatePostInput>(br#"{"title":"A"}"#), Err(ServiceError::BadInput)));
		assert!(matches!(safe_parse::<CreatePostInput>(br#"{"title":"A","content":7}"#), Err(ServiceError::BadInput)));
		assert!(matches!(safe_parse::<CreatePostInput>(b"not json"), Err(ServiceError::BadInput)));
		assert!(matches!(safe_parse::<CreatePostInput>(b""), Err(ServiceError::BadInput)));
	}

	#[test]
	fn test_update_input_fields_are_optional_except_id() {
		let parsed = safe_parse::<UpdatePostInput>(br#"{"id":"xyz","title":"C"}"#).unwrap();
		assert_eq!(parsed.id, "xyz");
		assert_eq!(parsed.title.as_deref(), Some("C"));
		assert_eq!(parsed.content, None);

		assert!(matches!(safe_parse::<UpdatePostInput>(br#"{"title":"C"}"#), Err(ServiceError::BadInput)));
		assert!(matches!(safe_parse::<UpdatePostInput>(br#"{"id":7}"#), Err(ServiceError::BadInput)));
	}

	#[test]
	fn test_update_input_rejects_explicit_null() {
		assert!(matches!(safe_parse::<UpdatePostInput>(br#"{"id":"xyz","title":null}"#), Err(ServiceError::BadInput)));
		assert!(matches!(safe_parse::<UpdatePostInput>(br#"{"id":"xyz","content":null}"#), Err(ServiceError::BadInput)));
		assert!(matches!(safe_parse::<UpdatePostInput>(br#"{"id":null}"#), Err(ServiceError::BadInput)));
	}

	#[test]
	fn test_bulk_query_paging() {
		assert_eq!(BulkQuery::default().paging().unwrap(), None);

		let query = BulkQuery {
			page: Some(3),
			size: None,
		};
		assert_eq!(query.paging().unwrap(), Some(Page { limit: 20, offset: 40 }));

		let query = BulkQuery {
			page: None,
			size: Some(500),
		};
		assert_eq!(query.paging().unwrap(), Some(Page { limit: 100, offset: 0 }));

		let query = BulkQuery {
			page: Some(0),
			size: Some(10),
		};
		assert!(matches!(query.paging(), Err(ServiceError::BadInput)));
	}
}
