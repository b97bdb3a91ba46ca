use crate::handler::admin_handler;
use crate::state::admin_state::AdminState;
use axum::{
    routing::{delete, post},
    Router,
};

pub fn routes() -> Router<AdminState> {
    Router::<AdminState>::new()
        .route(
            "/admin/users",
            post(admin_handler::create_user).get(admin_handler::list_users),
        )
        .route("/admin/users/{id}", delete(admin_handler::delete_user))
        .route(
            "/admin/users/assign-teacher",
            post(admin_handler::assign_teacher),
        )
}
