pub mod artist;
pub mod artwork;
pub mod sorts;

pub use artist::ArtistData;
pub use artwork::{ArtworkConnection, ArtworkData, ArtworkEdge};
pub use sorts::{ArtistSorts, ArtworkSorts};

crate::define_connection!(ArtistConnection, ArtistEdge, ArtistData);
