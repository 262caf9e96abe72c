//! # Roster
//!
//! The initial sponsor collection: a built-in demo roster, or a JSON array of
//! sponsors loaded from disk. Loaded rosters are validated before the board
//! takes ownership of them.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use log::info;

use crate::core::entity::{Category, Lane, Owner, Sponsor, SponsorId};

#[derive(Debug)]
pub enum RosterError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Io(e) => write!(f, "roster I/O error: {e}"),
            RosterError::Parse(e) => write!(f, "roster parse error: {e}"),
            RosterError::Invalid(msg) => write!(f, "invalid roster: {msg}"),
        }
    }
}

impl std::error::Error for RosterError {}

/// Load and validate a JSON roster.
pub fn load_roster(path: &Path) -> Result<Vec<Sponsor>, RosterError> {
    let contents = fs::read_to_string(path).map_err(RosterError::Io)?;
    let sponsors = parse_roster(&contents)?;
    info!("Loaded {} sponsors from {}", sponsors.len(), path.display());
    Ok(sponsors)
}

pub fn parse_roster(json: &str) -> Result<Vec<Sponsor>, RosterError> {
    let sponsors: Vec<Sponsor> = serde_json::from_str(json).map_err(RosterError::Parse)?;
    validate(&sponsors)?;
    Ok(sponsors)
}

/// Ids must be present and unique; the engine addresses cards by id.
fn validate(sponsors: &[Sponsor]) -> Result<(), RosterError> {
    let mut seen = HashSet::new();
    for sponsor in sponsors {
        if sponsor.id.as_str().trim().is_empty() {
            return Err(RosterError::Invalid(format!(
                "sponsor '{}' has an empty id",
                sponsor.name
            )));
        }
        if !seen.insert(&sponsor.id) {
            return Err(RosterError::Invalid(format!(
                "duplicate sponsor id '{}'",
                sponsor.id
            )));
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    category: Category,
    value: u64,
    lane: Lane,
    last_contact: &str,
    initials: &str,
    color: &str,
    owner: &str,
) -> Sponsor {
    Sponsor {
        id: SponsorId::new(id),
        name: name.to_string(),
        category,
        value,
        lane,
        last_contact: last_contact.to_string(),
        initials: initials.to_string(),
        color: color.to_string(),
        owner: Owner {
            name: owner.to_string(),
        },
    }
}

/// The demo pipeline shown when no roster file is configured.
pub fn default_roster() -> Vec<Sponsor> {
    use Category::*;
    use Lane::*;
    vec![
        entry("1", "ASICS", Apparel, 80_000, Prospecting, "2 days ago", "AS", "#2563EB", "Sarah Lee"),
        entry("2", "Gatorade", Beverage, 120_000, Prospecting, "1 week ago", "GA", "#F97316", "Mike Ross"),
        entry("3", "Spotify", Tech, 60_000, Prospecting, "3 days ago", "SP", "#22C55E", "Rachel Zane"),
        entry("4", "Puma", Apparel, 90_000, Negotiating, "Yesterday", "PU", "#DC2626", "Harvey Specter"),
        entry("5", "Red Bull", Beverage, 150_000, Negotiating, "4 hours ago", "RB", "#1E3A8A", "Donna Paulsen"),
        entry("6", "TikTok", Tech, 200_000, Negotiating, "Today", "TT", "#DB2777", "Louis Litt"),
        entry("7", "Boost Mobile", Telco, 75_000, Negotiating, "1 week ago", "BM", "#EA580C", "Katrina Bennett"),
        entry("8", "Rebel Sport", Retail, 85_000, Negotiating, "2 days ago", "RS", "#CA8A04", "Alex Williams"),
        entry("9", "Nike", Apparel, 250_000, Contracted, "Signed", "NK", "white", "Jessica Pearson"),
        entry("10", "Jordan", Apparel, 180_000, Contracted, "Signed", "JB", "#B91C1C", "Robert Zane"),
        entry("11", "Maybelline", Beauty, 100_000, Contracted, "Processing", "MB", "#F472B6", "Samantha Wheeler"),
        entry("12", "GYG", Food, 100_000, Contracted, "Active", "GY", "#FACC15", "Jeff Malone"),
        entry("13", "Foot Locker", Retail, 120_000, Contracted, "Active", "FL", "#DC2626", "Sheila Sazs"),
        entry("14", "Under Armour", Apparel, 65_000, Delivered, "Closed", "UA", "white", "Harold Gunderson"),
        entry("15", "Adidas", Apparel, 110_000, Delivered, "Closed", "AD", "white", "Dana Scott"),
        entry("16", "Monster Energy", Beverage, 95_000, Delivered, "Closed", "ME", "#16A34A", "Travis Tanner"),
    ]
}
