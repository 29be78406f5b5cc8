use gravity_client::Partner;
use juniper::{GraphQLEnum, GraphQLObject};
use serde::{Deserialize, Serialize};

/// Partner GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(name = "Partner", description = "A gallery, auction house or institution")]
pub struct PartnerData {
    pub id: String,

    #[graphql(name = "internalID")]
    pub internal_id: String,

    pub name: String,

    /// Gallery, Auction, Institution, ...
    #[graphql(name = "type")]
    pub partner_type: Option<String>,

    pub region: Option<String>,
    pub website: Option<String>,
}

impl From<Partner> for PartnerData {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id,
            internal_id: partner.internal_id,
            name: partner.name,
            partner_type: partner.partner_type,
            region: partner.region,
            website: partner.website,
        }
    }
}

/// Orderings Gravity accepts for the partner list
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum PartnersSortType {
    SortableIdAsc,
    SortableIdDesc,
    CreatedAtDesc,
}

impl PartnersSortType {
    pub fn as_gravity(self) -> &'static str {
        match self {
            PartnersSortType::SortableIdAsc => "sortable_id",
            PartnersSortType::SortableIdDesc => "-sortable_id",
            PartnersSortType::CreatedAtDesc => "-created_at",
        }
    }
}

crate::define_connection!(PartnerConnection, PartnerEdge, PartnerData);
