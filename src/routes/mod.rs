mod posts;

use axum::{
	middleware,
	routing::{get, post},
	Router,
};

use crate::{common::middleware_auth::authenticate, dependencies::Dependency};

use self::posts::{create_post, get_post, list_posts, update_post};

/// Post endpoints. `/bulk` is public; everything else sits behind bearer authentication.
pub fn post_routers(dependency: Dependency) -> Router<Dependency> {
	let protected = Router::new()
		.route("/", post(create_post).put(update_post))
		.route("/:id", get(get_post))
		.route_layer(middleware::from_fn_with_state(dependency, authenticate));

	Router::new().route("/bulk", get(list_posts)).merge(protected)
}

pub fn create_routes(dependency: Dependency) -> Router {
	post_routers(dependency.clone()).with_state(dependency)
}
