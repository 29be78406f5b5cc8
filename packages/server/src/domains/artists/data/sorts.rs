use juniper::GraphQLEnum;

/// Orderings Gravity accepts for an artist's artworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum ArtworkSorts {
    PublishedAtDesc,
    PublishedAtAsc,
    PartnerUpdatedAtDesc,
    TitleAsc,
    TitleDesc,
}

impl ArtworkSorts {
    /// Value of Gravity's `sort` parameter
    pub fn as_gravity(self) -> &'static str {
        match self {
            ArtworkSorts::PublishedAtDesc => "-published_at",
            ArtworkSorts::PublishedAtAsc => "published_at",
            ArtworkSorts::PartnerUpdatedAtDesc => "-partner_updated_at",
            ArtworkSorts::TitleAsc => "title",
            ArtworkSorts::TitleDesc => "-title",
        }
    }
}

/// Orderings Gravity accepts for the artist list
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum ArtistSorts {
    SortableIdAsc,
    SortableIdDesc,
    PublishedArtworksCountDesc,
}

impl ArtistSorts {
    pub fn as_gravity(self) -> &'static str {
        match self {
            ArtistSorts::SortableIdAsc => "sortable_id",
            ArtistSorts::SortableIdDesc => "-sortable_id",
            ArtistSorts::PublishedArtworksCountDesc => "-published_artworks_count",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_sorts_are_prefixed() {
        assert_eq!(ArtworkSorts::PublishedAtDesc.as_gravity(), "-published_at");
        assert_eq!(ArtworkSorts::TitleAsc.as_gravity(), "title");
        assert_eq!(ArtistSorts::SortableIdDesc.as_gravity(), "-sortable_id");
    }
}
