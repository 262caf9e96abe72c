//! # Sponsors and Lanes
//!
//! The records the board moves around. A `Sponsor` carries a lane (its
//! pipeline stage) plus payload fields the drag engine never looks at.
//!
//! Serialized shape matches the roster JSON:
//!
//! ```json
//! { "id": "1", "name": "ASICS", "category": "Apparel", "value": 80000,
//!   "status": "Prospecting", "lastContact": "2 days ago", "initials": "AS",
//!   "color": "blue", "owner": { "name": "Sarah Lee" } }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a sponsor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SponsorId(String);

impl SponsorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SponsorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for SponsorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pipeline stage. The set is closed and its order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    Prospecting,
    Negotiating,
    Contracted,
    Delivered,
}

impl Lane {
    pub const ALL: [Lane; 4] = [
        Lane::Prospecting,
        Lane::Negotiating,
        Lane::Contracted,
        Lane::Delivered,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Lane::Prospecting => "Prospecting",
            Lane::Negotiating => "Negotiating",
            Lane::Contracted => "Contracted",
            Lane::Delivered => "Delivered",
        }
    }

    /// Position in `Lane::ALL`.
    pub fn index(self) -> usize {
        match self {
            Lane::Prospecting => 0,
            Lane::Negotiating => 1,
            Lane::Contracted => 2,
            Lane::Delivered => 3,
        }
    }

    /// Stages that still count towards the open pipeline value.
    pub fn is_open(self) -> bool {
        !matches!(self, Lane::Delivered)
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Apparel,
    Food,
    Beauty,
    Tech,
    Beverage,
    Retail,
    Telco,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Apparel,
        Category::Food,
        Category::Beauty,
        Category::Tech,
        Category::Beverage,
        Category::Retail,
        Category::Telco,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Apparel => "Apparel",
            Category::Food => "Food",
            Category::Beauty => "Beauty",
            Category::Tech => "Tech",
            Category::Beverage => "Beverage",
            Category::Retail => "Retail",
            Category::Telco => "Telco",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
}

/// A draggable card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: SponsorId,
    pub name: String,
    pub category: Category,
    /// Deal value in whole dollars.
    pub value: u64,
    #[serde(rename = "status")]
    pub lane: Lane,
    pub last_contact: String,
    pub initials: String,
    /// Accent colour: a colour name or `#rrggbb`.
    pub color: String,
    pub owner: Owner,
}
