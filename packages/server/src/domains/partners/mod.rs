//! Partners domain - galleries, auction houses and institutions

pub mod actions;
pub mod data;
pub mod loader;

pub use data::{PartnerConnection, PartnerData};
pub use loader::PartnersLoader;
