use crate::handler::user_handler;
use crate::state::user_state::UserState;
use axum::{routing::patch, Router};

pub fn routes() -> Router<UserState> {
    Router::<UserState>::new().route("/users/me", patch(user_handler::update_profile))
}
