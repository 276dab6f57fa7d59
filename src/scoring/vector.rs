use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::catalog::ScoringArea;

/// Per-area score accumulators, one counter per `ScoringArea`, all starting at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreVector([u32; ScoringArea::COUNT]);

impl ScoreVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, area: ScoringArea) -> u32 {
        self.0[area.index()]
    }

    pub fn add(&mut self, area: ScoringArea, points: u32) {
        let slot = &mut self.0[area.index()];
        *slot = slot.saturating_add(points);
    }

    pub fn total(&self) -> u32 {
        self.0.iter().fold(0u32, |acc, s| acc.saturating_add(*s))
    }

    /// Areas with their scores, in area order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoringArea, u32)> + '_ {
        ScoringArea::ALL.iter().map(move |area| (*area, self.get(*area)))
    }

    /// Areas sorted lowest score first; ties keep area order.
    pub fn ascending(&self) -> Vec<(ScoringArea, u32)> {
        let mut areas: Vec<_> = self.iter().collect();
        areas.sort_by_key(|(_, score)| *score);
        areas
    }
}

/// Serializes as `{ "Expansion Capability": 12, ... }` in area order.
impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ScoringArea::COUNT))?;
        for (area, score) in self.iter() {
            map.serialize_entry(area.label(), &score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vector_is_zeroed() {
        let scores = ScoreVector::new();
        assert_eq!(scores.total(), 0);
        assert!(scores.iter().all(|(_, s)| s == 0));
        assert_eq!(scores.iter().count(), ScoringArea::COUNT);
    }

    #[test]
    fn test_add_accumulates_per_area() {
        let mut scores = ScoreVector::new();
        scores.add(ScoringArea::Systems, 5);
        scores.add(ScoringArea::Systems, 3);
        scores.add(ScoringArea::Market, 7);
        assert_eq!(scores.get(ScoringArea::Systems), 8);
        assert_eq!(scores.get(ScoringArea::Market), 7);
        assert_eq!(scores.get(ScoringArea::Expansion), 0);
        assert_eq!(scores.total(), 15);
    }

    #[test]
    fn test_ascending_breaks_ties_by_area_order() {
        let mut scores = ScoreVector::new();
        for area in ScoringArea::ALL {
            scores.add(area, 10);
        }
        scores.add(ScoringArea::Expansion, 5);
        let order: Vec<_> = scores.ascending().into_iter().map(|(a, _)| a).collect();
        assert_eq!(order[0], ScoringArea::Marketing);
        assert_eq!(order[1], ScoringArea::Profitability);
        assert_eq!(order[6], ScoringArea::Expansion);
    }

    #[test]
    fn test_serializes_as_labelled_map() {
        let mut scores = ScoreVector::new();
        scores.add(ScoringArea::Workforce, 4);
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["Workforce & Leadership"], 4);
        assert_eq!(json["Execution Systems"], 0);
        assert_eq!(json.as_object().unwrap().len(), 7);
    }
}
