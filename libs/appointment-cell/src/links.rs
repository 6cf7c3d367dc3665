use shared_models::{CollectionModel, EntityModel, LinkBuilder};

use crate::models::Appointment;

pub const APPOINTMENTS_PATH: &str = "/appointments";
pub const APPOINTMENTS_REL: &str = "appointments";
pub const APPOINTMENT_LIST_REL: &str = "appointmentList";

pub fn appointment_path(id: i32) -> String {
    format!("{}/{}", APPOINTMENTS_PATH, id)
}

// Owned patient and doctor are rendered inline, without links of their own.
pub fn appointment_model(links: &LinkBuilder, appointment: Appointment) -> EntityModel<Appointment> {
    let item_links = links.item_links(&appointment_path(appointment.id), APPOINTMENTS_REL, APPOINTMENTS_PATH);
    EntityModel::new(appointment, item_links)
}

pub fn appointment_collection(
    links: &LinkBuilder,
    appointments: Vec<Appointment>,
) -> CollectionModel<Appointment> {
    let items = appointments
        .into_iter()
        .map(|appointment| appointment_model(links, appointment))
        .collect();

    CollectionModel::new(APPOINTMENT_LIST_REL, items, links.collection_links(APPOINTMENTS_PATH))
}
