pub mod catchers;
pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod store;

use rocket::{Build, Config, Rocket, catchers, fairing::AdHoc, figment::Figment, routes};
use crate::{
    catchers::{bad_request, internal_error, not_found, unprocessable_entity},
    config::AppConfig,
    cors::CORS,
    routes::{all_options, cast_vote, create_poll, get_poll},
    store::PollStore,
};

/// Rocket instance configured from `Rocket.toml` and `ROCKET_*` variables.
pub fn build() -> Rocket<Build> {
    build_with(Config::figment())
}

pub fn build_with(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(AdHoc::config::<AppConfig>())
        .attach(PollStore::fairing())
        .attach(CORS)
        .mount("/api", routes![get_poll, cast_vote, create_poll, all_options])
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable_entity, internal_error],
        )
}
