use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::response::ServiceError;

/// Payload carried by bearer tokens. `id` is the caller's user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
	pub id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub exp: Option<u64>,
}

#[derive(Clone)]
pub struct TokenVerifier {
	encoding_key: EncodingKey,
	decoding_key: DecodingKey,
	validation: Validation,
}

impl TokenVerifier {
	pub fn new(secret: &str) -> Self {
		let mut validation = Validation::new(Algorithm::HS256);
		// Tokens may be minted without expiry; `exp` is still enforced when present.
		validation.required_spec_claims.clear();

		Self {
			encoding_key: EncodingKey::from_secret(secret.as_bytes()),
			decoding_key: DecodingKey::from_secret(secret.as_bytes()),
			validation,
		}
	}

	pub fn verify(
		&self,
		token: &str,
	) -> Result<Uuid, ServiceError> {
		let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
			.map_err(|err| {
				tracing::warn!("Bearer token rejected: {}", err);
				ServiceError::Unauthorized
			})?
			.claims;

		if claims.id.is_empty() {
			return Err(ServiceError::Unauthorized);
		}
		Uuid::parse_str(&claims.id).map_err(|_| ServiceError::Unauthorized)
	}

	pub fn issue(
		&self,
		user_id: Uuid,
	) -> Result<String, ServiceError> {
		let claims = Claims {
			id: user_id.to_string(),
			exp: None,
		};
		encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(ServiceError::TokenIssueError)
	}
}

#[cfg(test)]
mod test {
	use jsonwebtoken::{encode, EncodingKey, Header};
	use uuid::Uuid;

	use super::{Claims, TokenVerifier};
	use crate::services::response::ServiceError;

	#[test]
	fn test_issued_token_verifies_to_same_identity() {
		let verifier = TokenVerifier::new("secret");
		let user_id = Uuid::new_v4();
		let token = verifier.issue(user_id).unwrap();

		assert_eq!(verifier.verify(&token).unwrap(), user_id);
		assert!(matches!(verifier.verify("garbage"), Err(ServiceError::Unauthorized)));
	}

	#[test]
	fn test_token_signed_with_other_secret_is_rejected() {
		let token = TokenVerifier::new("other").issue(Uuid::new_v4()).unwrap();
		assert!(matches!(TokenVerifier::new("secret").verify(&token), Err(ServiceError::Unauthorized)));
	}

	#[test]
	fn test_expired_or_empty_claims_are_rejected() {
		let key = EncodingKey::from_secret(b"secret");
		let verifier = TokenVerifier::new("secret");

		let expired = Claims {
			id: Uuid::new_v4().to_string(),
			exp: Some(1),
		};
		let token = encode(&Header::default(), &expired, &key).unwrap();
		assert!(matches!(verifier.verify(&token), Err(ServiceError::Unauthorized)));

		let empty = Claims { id: String::new(), exp: None };
		let token = encode(&Header::default(), &empty, &key).unwrap();
		assert!(matches!(verifier.verify(&token), Err(ServiceError::Unauthorized)));
	}
}
