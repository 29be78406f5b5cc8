mod queries;

pub use queries::get_partners;
