//! Storefront domain: catalog, checkout pricing, reviews and blog content.
pub mod aggregates;
pub mod events;
pub mod value_objects;
