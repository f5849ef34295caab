//! Age-based life-stage classification for wardrobe profiles.
//!
//! A profile's optional age selects one of three buckets, and the bucket
//! decides which categories, occasions, and compliance toggles the item
//! form offers. Every caller that looks at an age goes through
//! [`AgeBucket::classify`] so the boundaries stay identical everywhere.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Ages strictly below this are children.
pub const TEEN_MIN_AGE: u32 = 13;

/// Ages at or above this are adults.
pub const ADULT_MIN_AGE: u32 = 18;

/// Categories offered to every bucket.
pub const BASE_CATEGORIES: &[&str] = &[
    "tops",
    "bottoms",
    "dresses",
    "outerwear",
    "shoes",
    "accessories",
    "underwear",
    "sleepwear",
    "activewear",
];

pub const CHILD_EXTRA_CATEGORIES: &[&str] = &["school_uniform", "play_clothes", "party_wear"];
pub const TEEN_EXTRA_CATEGORIES: &[&str] = &["trendy_casual"];
pub const ADULT_EXTRA_CATEGORIES: &[&str] =
    &["work_wear", "business_casual", "evening_wear", "formal_wear"];

pub const CHILD_OCCASIONS: &[&str] = &[
    "school",
    "playground",
    "party",
    "sleep",
    "sports",
    "family_event",
];
pub const TEEN_OCCASIONS: &[&str] = &["school", "casual", "sports", "party", "date", "family_event"];
pub const ADULT_OCCASIONS: &[&str] = &[
    "work",
    "casual",
    "formal",
    "date_night",
    "travel",
    "exercise",
    "home",
];

// ---------------------------------------------------------------------------
// Bucket
// ---------------------------------------------------------------------------

/// Life-stage bucket derived from a profile's age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBucket {
    Child,
    Teen,
    Adult,
}

impl AgeBucket {
    /// Classify an optional age. Half-open intervals; an absent age is adult.
    pub fn classify(age: Option<u32>) -> Self {
        match age {
            Some(a) if a < TEEN_MIN_AGE => Self::Child,
            Some(a) if a < ADULT_MIN_AGE => Self::Teen,
            _ => Self::Adult,
        }
    }

    /// Classify a raw database age. Negative values are treated as absent.
    pub fn classify_db(age: Option<i32>) -> Self {
        Self::classify(age.and_then(|a| u32::try_from(a).ok()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Teen => "teen",
            Self::Adult => "adult",
        }
    }

    fn extra_categories(&self) -> &'static [&'static str] {
        match self {
            Self::Child => CHILD_EXTRA_CATEGORIES,
            Self::Teen => TEEN_EXTRA_CATEGORIES,
            Self::Adult => ADULT_EXTRA_CATEGORIES,
        }
    }

    /// Base categories followed by this bucket's own additions.
    ///
    /// Additions do not accumulate: a child never sees teen categories.
    pub fn categories(&self) -> Vec<&'static str> {
        BASE_CATEGORIES
            .iter()
            .chain(self.extra_categories())
            .copied()
            .collect()
    }

    /// Occasions for this bucket. The three lists are independent.
    pub fn occasions(&self) -> &'static [&'static str] {
        match self {
            Self::Child => CHILD_OCCASIONS,
            Self::Teen => TEEN_OCCASIONS,
            Self::Adult => ADULT_OCCASIONS,
        }
    }

    /// Which optional form toggles to show.
    pub fn compliance_flags(&self) -> ComplianceFlags {
        ComplianceFlags {
            school_compliant: matches!(self, Self::Child | Self::Teen),
            work_appropriate: matches!(self, Self::Adult),
            growth_room: matches!(self, Self::Child),
            safety_checklist: matches!(self, Self::Child),
        }
    }
}

/// Optional toggles the item form exposes for a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceFlags {
    pub school_compliant: bool,
    pub work_appropriate: bool,
    pub growth_room: bool,
    pub safety_checklist: bool,
}

/// Everything the item form needs for one profile.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub bucket: AgeBucket,
    pub categories: Vec<&'static str>,
    pub occasions: &'static [&'static str],
    pub flags: ComplianceFlags,
}

/// Derive the form options for an optional age.
pub fn form_options(age: Option<u32>) -> FormOptions {
    let bucket = AgeBucket::classify(age);
    FormOptions {
        bucket,
        categories: bucket.categories(),
        occasions: bucket.occasions(),
        flags: bucket.compliance_flags(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
