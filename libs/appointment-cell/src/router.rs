use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::{
    create_appointment, delete_appointment, get_appointment, list_appointments,
    replace_appointment, AppointmentState,
};

pub fn appointment_routes(state: Arc<AppointmentState>) -> Router {
    Router::new()
        .route("/", get(list_appointments).post(create_appointment))
        .route(
            "/{appointment_id}",
            get(get_appointment)
                .put(replace_appointment)
                .delete(delete_appointment),
        )
        .with_state(state)
}
