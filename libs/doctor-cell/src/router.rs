use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use crate::handlers::{self, DoctorState};

pub fn doctor_routes(state: Arc<DoctorState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route(
            "/{doctor_id}",
            get(handlers::get_doctor)
                .put(handlers::replace_doctor)
                .delete(handlers::delete_doctor),
        )
        .with_state(state)
}
