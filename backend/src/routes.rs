use rocket::{State, get, post, http::Status, serde::json::Json};
use tracing::{debug, instrument};
use shared::{CreatePollRequest, Poll, PollError};
use crate::{error::ApiError, store::PollStore};

#[instrument(skip(store))]
#[get("/poll")]
pub async fn get_poll(store: &State<PollStore>) -> Result<Json<Poll>, ApiError> {
    store
        .latest()?
        .map(Json)
        .ok_or(ApiError::NotFound(PollError::NoPolls))
}

#[instrument(skip(store))]
#[post("/poll/vote/<option_key>")]
pub async fn cast_vote(store: &State<PollStore>, option_key: &str) -> Result<Json<Poll>, ApiError> {
    store.cast_vote(option_key).map(Json).map_err(|e| {
        debug!("Vote rejected: {}", e);
        ApiError::from(e)
    })
}

#[instrument(skip(store, request), fields(question = %request.question))]
#[post("/poll/create", data = "<request>")]
pub async fn create_poll(
    store: &State<PollStore>,
    request: Json<CreatePollRequest>,
) -> Result<Json<Poll>, ApiError> {
    let poll = store.create(request.into_inner())?;
    Ok(Json(poll))
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
