pub use category::Category;
pub use evaluator::AchievementClassifier;
pub use label::{Achievement, Badge, Tier};

pub mod category;
pub mod evaluator;
pub mod ladder;
pub mod label;
