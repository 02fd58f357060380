#![forbid(unsafe_code)]

mod catalog;

pub use catalog::{CatalogError, ModuleCatalog};
