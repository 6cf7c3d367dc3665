pub mod error;
pub mod hypermedia;

pub use error::AppError;
pub use hypermedia::{CollectionModel, EntityModel, Link, LinkBuilder, Links};
