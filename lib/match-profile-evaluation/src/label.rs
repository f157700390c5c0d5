use crate::category::Category;
use serde::{Deserialize, Serialize};

/// Badge level within a category, from the catch-all tier up to the top tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Entry,
    Rising,
    Solid,
    Elite,
    Legendary,
}

impl Tier {
    /// 1 for [`Tier::Entry`] through 5 for [`Tier::Legendary`].
    pub fn level(self) -> u8 {
        self as u8 + 1
    }
}

/// Fixed label and icon attached to a tier of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub tier: Tier,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub category: Category,
    pub tier: Tier,
    pub label: &'static str,
    pub icon: &'static str,
}

impl Achievement {
    pub fn new(category: Category, badge: &Badge) -> Self {
        Self {
            category,
            tier: badge.tier,
            label: badge.label,
            icon: badge.icon,
        }
    }
}
