pub mod partner;

pub use partner::{PartnerConnection, PartnerData, PartnerEdge, PartnersSortType};
