use shared_models::{CollectionModel, EntityModel, LinkBuilder};

use crate::models::Patient;

pub const PATIENTS_PATH: &str = "/patients";
pub const PATIENTS_REL: &str = "patients";
pub const PATIENT_LIST_REL: &str = "patientList";

pub fn patient_path(id: i32) -> String {
    format!("{}/{}", PATIENTS_PATH, id)
}

pub fn patient_model(links: &LinkBuilder, patient: Patient) -> EntityModel<Patient> {
    let item_links = links.item_links(&patient_path(patient.id), PATIENTS_REL, PATIENTS_PATH);
    EntityModel::new(patient, item_links)
}

pub fn patient_collection(links: &LinkBuilder, patients: Vec<Patient>) -> CollectionModel<Patient> {
    let items = patients
        .into_iter()
        .map(|patient| patient_model(links, patient))
        .collect();

    CollectionModel::new(PATIENT_LIST_REL, items, links.collection_links(PATIENTS_PATH))
}
