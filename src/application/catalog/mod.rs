mod catalog_service;
mod errors;

pub use catalog_service::{
    CatalogDependencies, delete, insert, list_all, search, sort_by_title, update,
};
pub use errors::{CatalogError, ErrorKind, MessageCategory, Result};
