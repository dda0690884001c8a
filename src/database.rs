use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::{config::Config, services::response::ServiceError};

pub async fn connection_pool(config: &Config) -> Result<PgPool, ServiceError> {
	let pool = PgPoolOptions::new()
		.max_connections(config.database_max_connections)
		.connect(&config.database_url)
		.await?;
	Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> Result<(), ServiceError> {
	sqlx::migrate!("./migrations").run(pool).await?;
	Ok(())
}
