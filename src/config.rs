use crate::services::response::ServiceError;

pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,
	pub database_url: String,
	pub database_max_connections: u32,

	/// Shared secret bearer tokens are signed with
	pub jwt_secret: String,
	pub allow_origins: Vec<String>,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let required = |key: &str| lookup(key).ok_or_else(|| ServiceError::ConfigError(format!("{key} must be set")));

		let database_url = required("DATABASE_URL")?;
		let jwt_secret = required("JWT_SECRET")?;
		let log_level = lookup("LOG_LEVEL").unwrap_or("warn".to_string());
		let server_ip_port = lookup("SERVER_IP_PORT").unwrap_or("0.0.0.0:80".into());
		let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
			Some(value) => value
				.parse::<u32>()
				.map_err(|_| ServiceError::ConfigError(format!("DATABASE_MAX_CONNECTIONS is not a number: {value}")))?,
			None => 30,
		};
		let allow_origins = lookup("ALLOW_ORIGINS")
			.unwrap_or("http://localhost:3000,http://localhost:3001".to_string())
			.split(',')
			.map(str::trim)
			.filter(|origin| !origin.is_empty())
			.map(String::from)
			.collect();

		Ok(Config {
			log_level,
			server_ip_port,
			database_url,
			database_max_connections,
			jwt_secret,
			allow_origins,
		})
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashMap;

	use super::Config;
	use crate::services::response::ServiceError;

	fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		move |key: &str| map.get(key).cloned()
	}

	#[test]
	fn test_defaults_are_applied() {
		let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/blog"), ("JWT_SECRET", "secret")])).unwrap();

		assert_eq!(config.log_level, "warn");
		assert_eq!(config.server_ip_port, "0.0.0.0:80");
		assert_eq!(config.database_max_connections, 30);
		assert_eq!(config.allow_origins, vec!["http://localhost:3000", "http://localhost:3001"]);
	}

	#[test]
	fn test_missing_secret_is_a_config_error() {
		let result = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/blog")]));
		assert!(matches!(result, Err(ServiceError::ConfigError(msg)) if msg.contains("JWT_SECRET")));
	}

	#[test]
	fn test_origins_are_split_and_trimmed() {
		let config = Config::from_lookup(lookup_from(&[
			("DATABASE_URL", "postgres://localhost/blog"),
			("JWT_SECRET", "secret"),
			("ALLOW_ORIGINS", "https://a.example, https://b.example,"),
			("DATABASE_MAX_CONNECTIONS", "5"),
		]))
		.unwrap();

		assert_eq!(config.allow_origins, vec!["https://a.example", "https://b.example"]);
		assert_eq!(config.database_max_connections, 5);
	}
}
