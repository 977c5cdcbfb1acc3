pub mod member;
pub mod thresholds;
pub mod tiers;

pub use member::{Category, MemberRecord, category_order};
