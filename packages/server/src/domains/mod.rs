// Domain modules - one per upstream resource family
pub mod artists;
pub mod me;
pub mod partners;
