use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::*;

pub fn patient_routes(state: Arc<PatientState>) -> Router {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route(
            "/{patient_id}",
            get(get_patient).put(replace_patient).delete(delete_patient),
        )
        .with_state(state)
}
