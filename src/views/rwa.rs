//! Real-world asset portfolio page

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::Trend;
use crate::format::{group_indian, inr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Carbon,
    RealEstate,
    Commodity,
}

impl AssetType {
    pub fn id(self) -> &'static str {
        match self {
            AssetType::Carbon => "carbon",
            AssetType::RealEstate => "realestate",
            AssetType::Commodity => "commodity",
        }
    }
}

/// Fields that only make sense for one asset type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AssetDetails {
    Carbon {
        area: &'static str,
        co2_sequestered: &'static str,
    },
    RealEstate {
        area: &'static str,
        occupancy: &'static str,
    },
    Commodity {
        weight: &'static str,
        purity: &'static str,
    },
}

impl AssetDetails {
    pub fn asset_type(&self) -> AssetType {
        match self {
            AssetDetails::Carbon { .. } => AssetType::Carbon,
            AssetDetails::RealEstate { .. } => AssetType::RealEstate,
            AssetDetails::Commodity { .. } => AssetType::Commodity,
        }
    }

    /// Area for land and buildings, weight for commodities
    pub fn size(&self) -> &'static str {
        match self {
            AssetDetails::Carbon { area, .. } | AssetDetails::RealEstate { area, .. } => *area,
            AssetDetails::Commodity { weight, .. } => *weight,
        }
    }

    pub fn highlight(&self) -> String {
        match self {
            AssetDetails::Carbon { co2_sequestered, .. } => {
                format!("{} CO₂ sequestered annually", co2_sequestered)
            }
            AssetDetails::RealEstate { occupancy, .. } => format!("{} occupancy rate", occupancy),
            AssetDetails::Commodity { purity, .. } => format!("{} purity guaranteed", purity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RwaAsset {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub tokens: u64,
    pub value: u64,
    pub price: f64,
    pub change: &'static str,
    pub location: &'static str,
    pub certification_body: &'static str,
    pub project_start: &'static str,
    pub status: &'static str,
    pub risk_level: &'static str,
    pub documents: [&'static str; 3],
    pub next_verification: &'static str,
    pub details: AssetDetails,
}

impl RwaAsset {
    pub fn asset_type(&self) -> AssetType {
        self.details.asset_type()
    }

    pub fn trend(&self) -> Trend {
        Trend::of(self.change)
    }

    pub fn value_label(&self) -> String {
        inr(self.value)
    }
}

pub static ASSETS: [RwaAsset; 4] = [
    RwaAsset {
        id: "carbon-amazon",
        name: "Amazon Rainforest Conservation",
        symbol: "CCX-AMZ",
        tokens: 2500,
        value: 46_125,
        price: 18.45,
        change: "+12.5%",
        location: "Amazon Basin, Brazil",
        certification_body: "VERRA",
        project_start: "2023-01-15",
        status: "Active",
        risk_level: "Low",
        documents: ["Verification Report", "Project Design", "Monitoring Plan"],
        next_verification: "2024-06-15",
        details: AssetDetails::Carbon {
            area: "1,250 hectares",
            co2_sequestered: "2,500 tonnes/year",
        },
    },
    RwaAsset {
        id: "carbon-mangrove",
        name: "Mangrove Restoration Project",
        symbol: "REDD-MNG",
        tokens: 1800,
        value: 40_950,
        price: 22.75,
        change: "+8.2%",
        location: "Sundarbans, Bangladesh",
        certification_body: "Gold Standard",
        project_start: "2023-03-20",
        status: "Active",
        risk_level: "Medium",
        documents: ["REDD+ Validation", "Community Agreement", "Baseline Study"],
        next_verification: "2024-09-20",
        details: AssetDetails::Carbon {
            area: "850 hectares",
            co2_sequestered: "1,800 tonnes/year",
        },
    },
    RwaAsset {
        id: "real-estate",
        name: "Mumbai Commercial Complex",
        symbol: "RE-MUM",
        tokens: 50,
        value: 125_000,
        price: 2500.0,
        change: "+5.7%",
        location: "Bandra-Kurla Complex, Mumbai",
        certification_body: "RERA",
        project_start: "2022-08-10",
        status: "Operational",
        risk_level: "Medium",
        documents: ["Property Deed", "Valuation Report", "Rental Agreement"],
        next_verification: "2024-08-10",
        details: AssetDetails::RealEstate {
            area: "10,000 sq ft",
            occupancy: "95%",
        },
    },
    RwaAsset {
        id: "gold",
        name: "Physical Gold Reserves",
        symbol: "GOLD-PHY",
        tokens: 25,
        value: 187_500,
        price: 7500.0,
        change: "+3.2%",
        location: "Secured Vault, Singapore",
        certification_body: "LBMA",
        project_start: "2023-05-12",
        status: "Stored",
        risk_level: "Low",
        documents: ["Assay Certificate", "Storage Receipt", "Insurance Policy"],
        next_verification: "2024-11-12",
        details: AssetDetails::Commodity {
            weight: "25 grams",
            purity: "99.99%",
        },
    },
];

pub const MONTHLY_CHANGE: &str = "+9.8%";

/// Portfolio split in percent
pub const DIVERSIFICATION: [(AssetType, u8); 3] = [
    (AssetType::Carbon, 65),
    (AssetType::RealEstate, 20),
    (AssetType::Commodity, 15),
];

pub fn total_value() -> u64 {
    ASSETS.iter().map(|a| a.value).sum()
}

pub fn total_tokens() -> u64 {
    ASSETS.iter().map(|a| a.tokens).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssetFilter {
    All,
    Only(AssetType),
}

impl Default for AssetFilter {
    fn default() -> Self {
        AssetFilter::Only(AssetType::Carbon)
    }
}

impl AssetFilter {
    pub fn all() -> [AssetFilter; 4] {
        [
            AssetFilter::All,
            AssetFilter::Only(AssetType::Carbon),
            AssetFilter::Only(AssetType::RealEstate),
            AssetFilter::Only(AssetType::Commodity),
        ]
    }

    pub fn id(self) -> &'static str {
        match self {
            AssetFilter::All => "all",
            AssetFilter::Only(t) => t.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetFilter::All => "All Assets",
            AssetFilter::Only(AssetType::Carbon) => "Carbon Credits",
            AssetFilter::Only(AssetType::RealEstate) => "Real Estate",
            AssetFilter::Only(AssetType::Commodity) => "Commodities",
        }
    }

    pub fn matches(self, asset: &RwaAsset) -> bool {
        match self {
            AssetFilter::All => true,
            AssetFilter::Only(t) => asset.asset_type() == t,
        }
    }

    /// Number of assets the filter shows
    pub fn count(self) -> usize {
        ASSETS.iter().filter(|a| self.matches(a)).count()
    }
}

impl fmt::Display for AssetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AssetFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| {
                format!("unknown asset type '{}', expected one of all, carbon, realestate, commodity", s)
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RwaView {
    filter: AssetFilter,
    mode: ViewMode,
}

impl RwaView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, filter: AssetFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> AssetFilter {
        self.filter
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn assets(&self) -> Vec<&'static RwaAsset> {
        ASSETS.iter().filter(|a| self.filter.matches(a)).collect()
    }

    pub fn total_value_label(&self) -> String {
        inr(total_value())
    }

    pub fn total_tokens_label(&self) -> String {
        group_indian(total_tokens())
    }
}
