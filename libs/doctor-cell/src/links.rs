use shared_models::{CollectionModel, EntityModel, LinkBuilder};

use crate::models::Doctor;

pub const DOCTORS_PATH: &str = "/doctors";
pub const DOCTORS_REL: &str = "doctors";
pub const DOCTOR_LIST_REL: &str = "doctorList";

pub fn doctor_path(id: i32) -> String {
    format!("{}/{}", DOCTORS_PATH, id)
}

pub fn doctor_model(links: &LinkBuilder, doctor: Doctor) -> EntityModel<Doctor> {
    let item_links = links.item_links(&doctor_path(doctor.id), DOCTORS_REL, DOCTORS_PATH);
    EntityModel::new(doctor, item_links)
}

pub fn doctor_collection(links: &LinkBuilder, doctors: Vec<Doctor>) -> CollectionModel<Doctor> {
    let items = doctors
        .into_iter()
        .map(|doctor| doctor_model(links, doctor))
        .collect();

    CollectionModel::new(DOCTOR_LIST_REL, items, links.collection_links(DOCTORS_PATH))
}
