//! # Sponsor Store
//!
//! One ordered sequence of sponsors shared by every lane. A lane's cards are
//! the sponsors whose `lane` matches, in sequence order, so the position of a
//! sponsor in the sequence is its position within its lane.
//!
//! Renderers and summary consumers read through `&SponsorStore`. The only
//! mutators are `set_lane` and `move_to`, which are crate-private and called
//! by the reorder engine in `core::drag`.

use crate::core::entity::{Category, Lane, Sponsor, SponsorId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SponsorStore {
    sponsors: Vec<Sponsor>,
}

impl SponsorStore {
    pub fn new(sponsors: Vec<Sponsor>) -> Self {
        Self { sponsors }
    }

    pub fn len(&self) -> usize {
        self.sponsors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sponsors.is_empty()
    }

    pub fn as_slice(&self) -> &[Sponsor] {
        &self.sponsors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sponsor> {
        self.sponsors.iter()
    }

    pub fn get(&self, id: &SponsorId) -> Option<&Sponsor> {
        self.sponsors.iter().find(|s| &s.id == id)
    }

    pub fn index_of(&self, id: &SponsorId) -> Option<usize> {
        self.sponsors.iter().position(|s| &s.id == id)
    }

    /// Sponsors in `lane`, in display order.
    pub fn in_lane(&self, lane: Lane) -> impl Iterator<Item = &Sponsor> {
        self.sponsors.iter().filter(move |s| s.lane == lane)
    }

    /// Sponsors that pass `filter`, in sequence order.
    pub fn visible<'a>(&'a self, filter: &'a BoardFilter) -> impl Iterator<Item = &'a Sponsor> {
        self.sponsors.iter().filter(move |s| filter.matches(s))
    }

    /// Visible sponsors in `lane`, in display order.
    pub fn visible_in_lane<'a>(
        &'a self,
        lane: Lane,
        filter: &'a BoardFilter,
    ) -> impl Iterator<Item = &'a Sponsor> {
        self.visible(filter).filter(move |s| s.lane == lane)
    }

    pub fn lane_summary(&self, lane: Lane, filter: &BoardFilter) -> LaneSummary {
        self.visible_in_lane(lane, filter)
            .fold(LaneSummary::default(), |acc, s| LaneSummary {
                count: acc.count + 1,
                value: acc.value.saturating_add(s.value),
            })
    }

    /// Total value of visible sponsors still in an open stage.
    pub fn pipeline_value(&self, filter: &BoardFilter) -> u64 {
        self.visible(filter)
            .filter(|s| s.lane.is_open())
            .fold(0, |acc, s| acc.saturating_add(s.value))
    }

    /// Total value of visible sponsors in `Delivered`.
    pub fn delivered_value(&self, filter: &BoardFilter) -> u64 {
        self.visible(filter)
            .filter(|s| s.lane == Lane::Delivered)
            .fold(0, |acc, s| acc.saturating_add(s.value))
    }

    /// Reassign a sponsor's lane without touching its sequence position.
    /// Returns the previous lane, or `None` if the id is unknown or the lane
    /// is unchanged.
    pub(crate) fn set_lane(&mut self, id: &SponsorId, lane: Lane) -> Option<Lane> {
        let sponsor = self.sponsors.iter_mut().find(|s| &s.id == id)?;
        if sponsor.lane == lane {
            return None;
        }
        let previous = sponsor.lane;
        sponsor.lane = lane;
        Some(previous)
    }

    /// Splice `id` out of the sequence and reinsert it at the index `target`
    /// occupied before the removal. Returns `(from, to)` indices, or `None`
    /// if either id is unknown or they are the same sponsor.
    pub(crate) fn move_to(&mut self, id: &SponsorId, target: &SponsorId) -> Option<(usize, usize)> {
        if id == target {
            return None;
        }
        let from = self.index_of(id)?;
        let to = self.index_of(target)?;
        let moved = self.sponsors.remove(from);
        self.sponsors.insert(to, moved);
        Some((from, to))
    }
}

/// Count and total value of one lane's visible cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaneSummary {
    pub count: usize,
    pub value: u64,
}

/// What the board shows: a category (or all) and a name search.
///
/// Filtering only hides cards. The drag engine always works on the full
/// sequence, so hidden sponsors keep their positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilter {
    pub category: Option<Category>,
    pub query: String,
}

impl BoardFilter {
    pub fn matches(&self, sponsor: &Sponsor) -> bool {
        let category_ok = self.category.is_none_or(|c| c == sponsor.category);
        let query_ok = self.query.is_empty()
            || sponsor
                .name
                .to_lowercase()
                .contains(&self.query.to_lowercase());
        category_ok && query_ok
    }

    /// All → Apparel → Food → ... → Telco → All.
    pub fn cycle_category(&mut self) {
        self.category = match self.category {
            None => Some(Category::ALL[0]),
            Some(current) => Category::ALL
                .iter()
                .position(|c| *c == current)
                .and_then(|i| Category::ALL.get(i + 1))
                .copied(),
        };
    }
}
