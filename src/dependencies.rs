use std::sync::Arc;

use crate::{adapters::repositories::TPostRepository, config::Config, services::token::TokenVerifier};

/// Everything a request handler may need, built once at startup and shared by every request.
#[derive(Clone)]
pub struct Dependency {
	config: Arc<Config>,
	token_verifier: TokenVerifier,
	repository: Arc<dyn TPostRepository>,
}

impl Dependency {
	pub fn new(
		config: Config,
		repository: Arc<dyn TPostRepository>,
	) -> Self {
		Self {
			token_verifier: TokenVerifier::new(&config.jwt_secret),
			config: Arc::new(config),
			repository,
		}
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn token_verifier(&self) -> &TokenVerifier {
		&self.token_verifier
	}

	pub fn repository(&self) -> &dyn TPostRepository {
		self.repository.as_ref()
	}
}
