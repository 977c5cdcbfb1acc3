use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Referral,
    ThankYou,
    AvgVisitor,
    OneToOne,
    Training,
    Absenteeism,
    ArrivingOnTime,
}

pub fn category_order() -> &'static [Category] {
    &[
        Category::Referral,
        Category::ThankYou,
        Category::AvgVisitor,
        Category::OneToOne,
        Category::Training,
        Category::Absenteeism,
        Category::ArrivingOnTime,
    ]
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Referral => "referral",
            Category::ThankYou => "thankYou",
            Category::AvgVisitor => "avgVisitor",
            Category::OneToOne => "oneToOne",
            Category::Training => "training",
            Category::Absenteeism => "absenteeism",
            Category::ArrivingOnTime => "arrivingOnTime",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Referral => "Referrals",
            Category::ThankYou => "Thank-you slips",
            Category::AvgVisitor => "Visitors",
            Category::OneToOne => "One-to-ones",
            Category::Training => "Training",
            Category::Absenteeism => "Absenteeism",
            Category::ArrivingOnTime => "On-time arrival",
        }
    }

    /// Upper bound of the category score; also the denominator of its bar.
    pub fn max(self) -> i32 {
        match self {
            Category::Referral => 20,
            Category::ThankYou => 15,
            Category::AvgVisitor => 20,
            Category::OneToOne => 10,
            Category::Training => 10,
            Category::Absenteeism => 15,
            Category::ArrivingOnTime => 10,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        category_order().iter().copied().find(|c| c.key() == key)
    }
}

/// One row of the score dataset.
///
/// Every field defaults when absent so a partial record still renders;
/// scores are not range checked and `total_score` is taken as stored.
/// Fields of the wrong JSON type decode leniently, see [`lenient_score`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberRecord {
    #[serde(deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(deserialize_with = "lenient_score")]
    pub referral_score: i32,
    #[serde(deserialize_with = "lenient_score")]
    pub thank_you_score: i32,
    #[serde(deserialize_with = "lenient_score")]
    pub avg_visitor_score: i32,
    #[serde(deserialize_with = "lenient_score")]
    pub one_to_one_score: i32,
    #[serde(deserialize_with = "lenient_score")]
    pub training_score: i32,
    #[serde(deserialize_with = "lenient_score")]
    pub absenteeism_score: i32,
    #[serde(deserialize_with = "lenient_score")]
    pub arriving_on_time_score: i32,
    #[serde(deserialize_with = "lenient_score")]
    pub total_score: i32,
}

/// Integers pass through (saturated to `i32`), fractions truncate toward
/// zero, numeric strings are parsed the same way. Anything else is 0.
pub fn lenient_score<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(score_from_value(&value))
}

pub fn score_from_value(value: &Value) -> i32 {
    let raw = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    };
    raw.map(|n| n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
        .unwrap_or(0)
}

/// Strings pass through, numbers are printed, anything else is empty.
pub fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

impl MemberRecord {
    pub fn score(&self, category: Category) -> i32 {
        match category {
            Category::Referral => self.referral_score,
            Category::ThankYou => self.thank_you_score,
            Category::AvgVisitor => self.avg_visitor_score,
            Category::OneToOne => self.one_to_one_score,
            Category::Training => self.training_score,
            Category::Absenteeism => self.absenteeism_score,
            Category::ArrivingOnTime => self.arriving_on_time_score,
        }
    }

    /// Widened so out-of-range scores cannot overflow the sum.
    pub fn category_sum(&self) -> i64 {
        category_order()
            .iter()
            .map(|&c| i64::from(self.score(c)))
            .sum()
    }

    pub fn is_total_consistent(&self) -> bool {
        self.category_sum() == i64::from(self.total_score)
    }

    pub fn out_of_range(&self) -> Vec<Category> {
        category_order()
            .iter()
            .copied()
            .filter(|&c| {
                let score = self.score(c);
                score < 0 || score > c.max()
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/member.rs"]
mod tests;
