use crate::model::member::Category;

/// Ordered status brackets for one category.
///
/// Steps are checked highest first and only an exact score match selects a
/// step; anything else lands on `fallback`.
#[derive(Debug, Clone, Copy)]
pub struct StatusTable {
    pub category: Category,
    pub steps: &'static [(i32, &'static str)],
    pub fallback: &'static str,
}

const REFERRAL_STEPS: &[(i32, &str)] = &[
    (20, "1.5+ referrals"),
    (15, "1.0–1.2"),
    (10, "0.75–1.0"),
    (5, "0.5–0.75"),
];
const THANK_YOU_STEPS: &[(i32, &str)] = &[(15, "≥150M"), (10, "50–100M"), (5, "25–50M")];
const AVG_VISITOR_STEPS: &[(i32, &str)] = &[
    (20, "≥0.8"),
    (15, "0.6–0.8"),
    (10, "0.4–0.6"),
    (5, "0.2–0.4"),
];
const ONE_TO_ONE_STEPS: &[(i32, &str)] = &[(10, "≥3"), (5, "2–3")];
const TRAINING_STEPS: &[(i32, &str)] = &[(10, "≥30"), (5, "10–20")];

const STATUS_TABLES: &[StatusTable] = &[
    StatusTable {
        category: Category::Referral,
        steps: REFERRAL_STEPS,
        fallback: "<0.5",
    },
    StatusTable {
        category: Category::ThankYou,
        steps: THANK_YOU_STEPS,
        fallback: "<25M",
    },
    StatusTable {
        category: Category::AvgVisitor,
        steps: AVG_VISITOR_STEPS,
        fallback: "<0.1",
    },
    StatusTable {
        category: Category::OneToOne,
        steps: ONE_TO_ONE_STEPS,
        fallback: "<1",
    },
    StatusTable {
        category: Category::Training,
        steps: TRAINING_STEPS,
        fallback: "<10",
    },
    StatusTable {
        category: Category::Absenteeism,
        steps: &[],
        fallback: "",
    },
    StatusTable {
        category: Category::ArrivingOnTime,
        steps: &[],
        fallback: "",
    },
];

pub fn status_table(category: Category) -> Option<&'static StatusTable> {
    STATUS_TABLES.iter().find(|t| t.category == category)
}

impl StatusTable {
    pub fn label_for(&self, score: i32) -> &'static str {
        self.steps
            .iter()
            .find(|(threshold, _)| *threshold == score)
            .map(|(_, label)| *label)
            .unwrap_or(self.fallback)
    }
}

pub fn status_label(category: Category, score: i32) -> &'static str {
    status_table(category)
        .map(|t| t.label_for(score))
        .unwrap_or("")
}

/// Status label keyed by the raw category key; unknown keys have no label.
pub fn classify(category_key: &str, score: i32) -> &'static str {
    Category::from_key(category_key)
        .map(|c| status_label(c, score))
        .unwrap_or("")
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
