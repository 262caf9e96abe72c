//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;

use crate::core::drag::{HitTarget, Point, SpatialIndex};
use crate::core::entity::{Category, Lane, Owner, Sponsor, SponsorId};
use crate::core::state::App;
use crate::core::store::SponsorStore;

/// A sponsor with placeholder payload.
pub fn sponsor(id: &str, lane: Lane) -> Sponsor {
    Sponsor {
        id: SponsorId::new(id),
        name: format!("Sponsor {id}"),
        category: Category::Apparel,
        value: 10_000,
        lane,
        last_contact: "Today".to_string(),
        initials: "SP".to_string(),
        color: "blue".to_string(),
        owner: Owner {
            name: "Owner".to_string(),
        },
    }
}

pub fn store_of(entries: &[(&str, Lane)]) -> SponsorStore {
    SponsorStore::new(entries.iter().map(|(id, lane)| sponsor(id, *lane)).collect())
}

/// Ids in sequence order.
pub fn ids(store: &SponsorStore) -> Vec<&str> {
    store.iter().map(|s| s.id.as_str()).collect()
}

/// `[1:Prospecting, 2:Prospecting, 3:Negotiating]`.
pub fn test_app() -> App {
    App::new(vec![
        sponsor("1", Lane::Prospecting),
        sponsor("2", Lane::Prospecting),
        sponsor("3", Lane::Negotiating),
    ])
}

/// A spatial index answering from a fixed point → target table.
#[derive(Default)]
pub struct ScriptedTargets {
    points: HashMap<Point, HitTarget>,
}

impl ScriptedTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, point: Point, target: HitTarget) -> Self {
        self.points.insert(point, target);
        self
    }
}

impl SpatialIndex for ScriptedTargets {
    fn resolve_targets_at(&self, point: Point) -> HitTarget {
        self.points.get(&point).cloned().unwrap_or_default()
    }
}
