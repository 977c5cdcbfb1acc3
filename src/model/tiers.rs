use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarTier {
    Strong,
    Good,
    Weak,
    Poor,
}

/// Tier of the headline total. Below 30 is rendered neutral, not as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalTier {
    Strong,
    Good,
    Weak,
    Neutral,
}

impl BarTier {
    pub fn name(self) -> &'static str {
        match self {
            BarTier::Strong => "strong",
            BarTier::Good => "good",
            BarTier::Weak => "weak",
            BarTier::Poor => "poor",
        }
    }

    pub fn swatch(self) -> &'static str {
        match self {
            BarTier::Strong => "#22c55e",
            BarTier::Good => "#eab308",
            BarTier::Weak => "#f97316",
            BarTier::Poor => "#ef4444",
        }
    }
}

impl TotalTier {
    pub fn name(self) -> &'static str {
        match self {
            TotalTier::Strong => "strong",
            TotalTier::Good => "good",
            TotalTier::Weak => "weak",
            TotalTier::Neutral => "neutral",
        }
    }

    pub fn swatch(self) -> &'static str {
        match self {
            TotalTier::Strong => "#22c55e",
            TotalTier::Good => "#eab308",
            TotalTier::Weak => "#ef4444",
            TotalTier::Neutral => "#000000",
        }
    }
}

/// Bar width as a percentage of `max`. Not clamped: 12 of 10 is 120.
pub fn bar_fill(score: i32, max: i32) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    100.0 * score as f64 / max as f64
}

pub fn bar_color_tier(percentage: f64) -> BarTier {
    if percentage >= 80.0 {
        BarTier::Strong
    } else if percentage >= 60.0 {
        BarTier::Good
    } else if percentage >= 40.0 {
        BarTier::Weak
    } else {
        BarTier::Poor
    }
}

pub fn total_color_tier(total: i32) -> TotalTier {
    if total >= 70 {
        TotalTier::Strong
    } else if total >= 50 {
        TotalTier::Good
    } else if total >= 30 {
        TotalTier::Weak
    } else {
        TotalTier::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub range: &'static str,
    pub tier: TotalTier,
}

const TOTAL_LEGEND: &[LegendEntry] = &[
    LegendEntry {
        range: "70+",
        tier: TotalTier::Strong,
    },
    LegendEntry {
        range: "50-69",
        tier: TotalTier::Good,
    },
    LegendEntry {
        range: "30-49",
        tier: TotalTier::Weak,
    },
    LegendEntry {
        range: "<30",
        tier: TotalTier::Neutral,
    },
];

pub fn total_legend() -> &'static [LegendEntry] {
    TOTAL_LEGEND
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tiers.rs"]
mod tests;
