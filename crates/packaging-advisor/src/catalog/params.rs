use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{BarrierKind, BarrierLevel, CostTier, SensitivityLevel};

/// Externally configurable weights and lookup tables driving the compatibility
/// scorer. A catalog without a `scoring_parameters` section falls back to the
/// built-in defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParameters {
    pub compatibility_weights: CompatibilityWeights,
    pub barrier_scoring: BarrierScoring,
    pub cost_scoring: CostScoring,
}

impl Default for ScoringParameters {
    fn default() -> Self {
        Self {
            compatibility_weights: CompatibilityWeights::default(),
            barrier_scoring: BarrierScoring::default(),
            cost_scoring: CostScoring::default(),
        }
    }
}

/// Point cap per scoring factor. Caps normalize the final percentage; the
/// barrier cap only contributes to the maximum, not to the earned total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityWeights {
    pub product_state: u32,
    pub barrier_requirements: u32,
    pub chemical_compatibility: u32,
    pub cost_alignment: u32,
    pub temperature_requirements: u32,
    pub sustainability_match: u32,
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            product_state: 25,
            barrier_requirements: 20,
            chemical_compatibility: 15,
            cost_alignment: 12,
            temperature_requirements: 10,
            sustainability_match: 8,
        }
    }
}

/// Points earned per (sensitivity level, material barrier level) pair.
pub type BarrierTable = BTreeMap<SensitivityLevel, BTreeMap<BarrierLevel, i32>>;

/// Nested barrier lookup: ingress kind -> sensitivity -> barrier level ->
/// points. Absent keys at any depth resolve to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarrierScoring {
    pub oxygen: BarrierTable,
    pub moisture: BarrierTable,
    pub light: BarrierTable,
}

impl BarrierScoring {
    pub fn table(&self, kind: BarrierKind) -> &BarrierTable {
        match kind {
            BarrierKind::Oxygen => &self.oxygen,
            BarrierKind::Moisture => &self.moisture,
            BarrierKind::Light => &self.light,
        }
    }

    pub fn points(
        &self,
        kind: BarrierKind,
        need: SensitivityLevel,
        level: BarrierLevel,
    ) -> i32 {
        self.table(kind)
            .get(&need)
            .and_then(|row| row.get(&level))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for BarrierScoring {
    fn default() -> Self {
        Self {
            oxygen: default_barrier_table(),
            moisture: default_barrier_table(),
            light: default_barrier_table(),
        }
    }
}

fn barrier_row(points: &[(BarrierLevel, i32)]) -> BTreeMap<BarrierLevel, i32> {
    points.iter().copied().collect()
}

fn default_barrier_table() -> BarrierTable {
    let mut table = BarrierTable::new();
    table.insert(SensitivityLevel::None, BTreeMap::new());
    table.insert(
        SensitivityLevel::Low,
        barrier_row(&[
            (BarrierLevel::Low, 1),
            (BarrierLevel::Medium, 2),
            (BarrierLevel::High, 2),
            (BarrierLevel::Excellent, 2),
        ]),
    );
    table.insert(
        SensitivityLevel::Medium,
        barrier_row(&[
            (BarrierLevel::Low, 1),
            (BarrierLevel::Medium, 3),
            (BarrierLevel::High, 4),
            (BarrierLevel::Excellent, 5),
        ]),
    );
    table.insert(
        SensitivityLevel::High,
        barrier_row(&[
            (BarrierLevel::Medium, 2),
            (BarrierLevel::High, 5),
            (BarrierLevel::Excellent, 7),
        ]),
    );
    table
}

/// Cost alignment matrix: user budget -> material cost category -> points.
/// Entries may be negative; a missing pair contributes nothing to the earned
/// total while the factor weight still counts toward the maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostScoring(pub BTreeMap<CostTier, BTreeMap<CostTier, i32>>);

impl CostScoring {
    pub fn points(&self, budget: CostTier, cost_category: CostTier) -> Option<i32> {
        self.0
            .get(&budget)
            .and_then(|row| row.get(&cost_category))
            .copied()
    }
}

impl Default for CostScoring {
    fn default() -> Self {
        let mut matrix = BTreeMap::new();
        matrix.insert(
            CostTier::Economy,
            cost_row(&[
                (CostTier::Economy, 12),
                (CostTier::Standard, 6),
                (CostTier::Premium, -4),
            ]),
        );
        matrix.insert(
            CostTier::Standard,
            cost_row(&[
                (CostTier::Economy, 8),
                (CostTier::Standard, 12),
                (CostTier::Premium, 4),
            ]),
        );
        matrix.insert(
            CostTier::Premium,
            cost_row(&[
                (CostTier::Economy, 2),
                (CostTier::Standard, 8),
                (CostTier::Premium, 12),
            ]),
        );
        Self(matrix)
    }
}

fn cost_row(points: &[(CostTier, i32)]) -> BTreeMap<CostTier, i32> {
    points.iter().copied().collect()
}
