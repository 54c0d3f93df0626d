//! Domain models for the dashboard.
//!
//! - [`Metric`] - The ten selectable grid metrics
//! - [`MetricGroup`] - EUR, cost or delta family
//! - [`MetricOption`] - Dropdown entry sent to the frontend

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Metric
// =============================================================================

/// Family a metric belongs to; drives color scale and slider behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricGroup {
    /// Estimated ultimate recovery.
    Eur,
    /// Technical cost.
    Cost,
    /// Vertical minus horizontal cost, clamped.
    Delta,
}

/// A selectable grid metric.
///
/// Ids 1-4 are EUR, 5-8 are cost, 9-10 are the derived deltas. The id is
/// the wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    EurVertNoCutoff,
    EurVertCutoff,
    EurHzNoCutoff,
    EurHzCutoff,
    CostVertNoCutoff,
    CostVertCutoff,
    CostHzNoCutoff,
    CostHzCutoff,
    DeltaNoCutoff,
    DeltaCutoff,
}

impl Metric {
    /// All metrics in id order.
    pub const ALL: [Metric; 10] = [
        Metric::EurVertNoCutoff,
        Metric::EurVertCutoff,
        Metric::EurHzNoCutoff,
        Metric::EurHzCutoff,
        Metric::CostVertNoCutoff,
        Metric::CostVertCutoff,
        Metric::CostHzNoCutoff,
        Metric::CostHzCutoff,
        Metric::DeltaNoCutoff,
        Metric::DeltaCutoff,
    ];

    /// Metric selected when the dashboard opens.
    pub const DEFAULT: Metric = Metric::DeltaNoCutoff;

    pub fn from_id(id: u8) -> Option<Metric> {
        match id {
            1..=10 => Some(Self::ALL[usize::from(id) - 1]),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        self as u8 + 1
    }

    /// Dropdown label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::EurVertNoCutoff => "EUR Vertical No Cutoff",
            Metric::EurVertCutoff => "EUR Vertical Cutoff",
            Metric::EurHzNoCutoff => "EUR Horizontal No Cutoff",
            Metric::EurHzCutoff => "EUR Horizontal Cutoff",
            Metric::CostVertNoCutoff => "TECH COST Vertical No Cutoff",
            Metric::CostVertCutoff => "TECH COST Vertical Cutoff",
            Metric::CostHzNoCutoff => "TECH COST Horizontal No Cutoff",
            Metric::CostHzCutoff => "TECH COST Horizontal Cutoff",
            Metric::DeltaNoCutoff => "DELTA Vert - Hz No Cutoff",
            Metric::DeltaCutoff => "DELTA Vert - Hz Cutoff",
        }
    }

    pub fn group(self) -> MetricGroup {
        match self.id() {
            1..=4 => MetricGroup::Eur,
            5..=8 => MetricGroup::Cost,
            _ => MetricGroup::Delta,
        }
    }

    pub fn cutoff(self) -> bool {
        matches!(
            self,
            Metric::EurVertCutoff
                | Metric::EurHzCutoff
                | Metric::CostVertCutoff
                | Metric::CostHzCutoff
                | Metric::DeltaCutoff
        )
    }

    /// Position of this metric inside its 4-value EUR or cost block.
    ///
    /// Order is vert/no-cutoff, vert/cutoff, hz/no-cutoff, hz/cutoff.
    pub fn slot(self) -> Option<usize> {
        match self.group() {
            MetricGroup::Eur => Some(usize::from(self.id()) - 1),
            MetricGroup::Cost => Some(usize::from(self.id()) - 5),
            MetricGroup::Delta => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = u8::deserialize(deserializer)?;
        Metric::from_id(id)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown metric id {}", id)))
    }
}

// =============================================================================
// Dropdown option
// =============================================================================

/// One entry of the metric dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricOption {
    pub value: u8,
    pub label: String,
    pub group: MetricGroup,
}

impl From<Metric> for MetricOption {
    fn from(metric: Metric) -> Self {
        MetricOption {
            value: metric.id(),
            label: metric.label().to_string(),
            group: metric.group(),
        }
    }
}

/// Dropdown options in id order.
pub fn metric_options() -> Vec<MetricOption> {
    Metric::ALL.iter().copied().map(MetricOption::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(usize::from(metric.id()), i + 1);
            assert_eq!(Metric::from_id(metric.id()), Some(*metric));
        }
        assert_eq!(Metric::from_id(0), None);
        assert_eq!(Metric::from_id(11), None);
    }

    #[test]
    fn test_groups() {
        assert_eq!(Metric::EurHzCutoff.group(), MetricGroup::Eur);
        assert_eq!(Metric::CostVertNoCutoff.group(), MetricGroup::Cost);
        assert_eq!(Metric::CostHzCutoff.group(), MetricGroup::Cost);
        assert_eq!(Metric::DeltaNoCutoff.group(), MetricGroup::Delta);
    }

    #[test]
    fn test_slots() {
        assert_eq!(Metric::EurVertNoCutoff.slot(), Some(0));
        assert_eq!(Metric::EurHzCutoff.slot(), Some(3));
        assert_eq!(Metric::CostVertNoCutoff.slot(), Some(0));
        assert_eq!(Metric::CostHzCutoff.slot(), Some(3));
        assert_eq!(Metric::DeltaCutoff.slot(), None);
    }

    #[test]
    fn test_cutoff() {
        assert!(Metric::CostHzCutoff.cutoff());
        assert!(Metric::DeltaCutoff.cutoff());
        assert!(!Metric::DeltaNoCutoff.cutoff());
    }

    #[test]
    fn test_serde_as_id() {
        let json = serde_json::to_string(&Metric::DeltaCutoff).unwrap();
        assert_eq!(json, "10");

        let metric: Metric = serde_json::from_str("5").unwrap();
        assert_eq!(metric, Metric::CostVertNoCutoff);

        assert!(serde_json::from_str::<Metric>("42").is_err());
    }

    #[test]
    fn test_options_list() {
        let options = metric_options();
        assert_eq!(options.len(), 10);
        assert_eq!(options[8].value, 9);
        assert_eq!(options[8].label, "DELTA Vert - Hz No Cutoff");
    }
}
