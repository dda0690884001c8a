use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
	http::{header, HeaderValue, Method},
	Router,
};

use blog::{
	adapters::repositories::PostRepository,
	config::Config,
	database::{connection_pool, migrate},
	dependencies::Dependency,
	routes::create_routes,
	services::response::ServiceError,
};
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
	let config = Config::new()?;

	// ! Tracing
	let default_filter = format!("blog={level},web={level},tower_http=debug,axum::rejection=trace", level = config.log_level);
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!("Connections are being pooled...");
	let pool = connection_pool(&config).await?;
	migrate(&pool).await?;

	let dependency = Dependency::new(config, Arc::new(PostRepository::new(pool)));

	let origins = dependency
		.config()
		.allow_origins
		.iter()
		.map(|origin| origin.parse::<HeaderValue>())
		.collect::<Result<Vec<_>, _>>()
		.map_err(|err| ServiceError::ConfigError(format!("ALLOW_ORIGINS is invalid: {err}")))?;
	let address = SocketAddr::from_str(&dependency.config().server_ip_port)
		.map_err(|err| ServiceError::ConfigError(format!("SERVER_IP_PORT is invalid: {err}")))?;

	let service_name = "/api/v1/blog";
	let app = Router::new()
		.nest(service_name, create_routes(dependency))
		.layer(
			CorsLayer::new()
				.allow_origin(AllowOrigin::list(origins))
				.allow_methods([Method::GET, Method::POST, Method::PUT])
				.allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
		)
		.layer(TraceLayer::new_for_http());

	tracing::info!("Start web server on {}", address);
	axum::Server::bind(&address)
		.serve(app.into_make_service())
		.await
		.map_err(|err| ServiceError::ServerError(Box::new(err)))?;

	Ok(())
}
