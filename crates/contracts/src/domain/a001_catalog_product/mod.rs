pub mod aggregate;

pub use aggregate::{products_from_payload, CatalogResponse, Category, Product, User};
