//! Wardrobe profile rules: plan limit, field validation, and the
//! synthesized main profile.

use serde::Serialize;

use crate::age_profile::AgeBucket;
use crate::error::CoreError;
use crate::types::DbId;

/// Maximum number of stored profiles per user. The main profile does not
/// count against this.
pub const MAX_PROFILES: usize = 5;

/// Maximum accepted age.
pub const MAX_AGE: i32 = 130;

/// Display name of the synthesized main profile.
pub const MAIN_PROFILE_NAME: &str = "My Wardrobe";

/// Query-string value that selects the main wardrobe.
pub const MAIN_SCOPE: &str = "main";

/// Which slice of a user's items to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileScope {
    /// Items with no profile reference.
    Main,
    /// Items owned by one stored profile.
    Profile(DbId),
}

impl ProfileScope {
    /// Parse `"main"` or a numeric profile id.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(MAIN_SCOPE) {
            return Ok(Self::Main);
        }
        raw.parse::<DbId>().map(Self::Profile).map_err(|_| {
            CoreError::Validation(format!(
                "Invalid profile '{raw}'. Use '{MAIN_SCOPE}' or a profile id"
            ))
        })
    }

    /// The profile id as stored on items (`None` for main).
    pub fn profile_id(&self) -> Option<DbId> {
        match self {
            Self::Main => None,
            Self::Profile(id) => Some(*id),
        }
    }
}

/// Profile as presented to the client, stored or synthesized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    /// `None` for the synthesized main profile.
    pub id: Option<DbId>,
    pub name: String,
    pub relation: Option<String>,
    pub age: Option<i32>,
    pub picture_url: Option<String>,
    pub is_owner: bool,
    pub bucket: AgeBucket,
}

/// The owner's implicit profile. Never stored.
pub fn main_profile(display_name: Option<&str>) -> ProfileSummary {
    ProfileSummary {
        id: None,
        name: display_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(MAIN_PROFILE_NAME)
            .to_string(),
        relation: None,
        age: None,
        picture_url: None,
        is_owner: true,
        bucket: AgeBucket::Adult,
    }
}

/// Whether a user holding `existing` stored profiles may add another.
pub fn has_profile_capacity(existing: i64) -> bool {
    usize::try_from(existing).is_ok_and(|n| n < MAX_PROFILES)
}

/// Error returned when a create would exceed [`MAX_PROFILES`].
pub fn profile_limit_reached() -> CoreError {
    CoreError::Conflict(format!(
        "Profile limit reached ({MAX_PROFILES} per account)"
    ))
}

pub fn validate_profile_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Profile name is required".into()));
    }
    Ok(())
}

pub fn validate_age(age: Option<i32>) -> Result<(), CoreError> {
    match age {
        Some(a) if !(0..=MAX_AGE).contains(&a) => Err(CoreError::Validation(format!(
            "Age must be between 0 and {MAX_AGE}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn scope_parses_main_and_ids() {
        assert_eq!(ProfileScope::parse("main").unwrap(), ProfileScope::Main);
        assert_eq!(ProfileScope::parse(" MAIN ").unwrap(), ProfileScope::Main);
        assert_eq!(ProfileScope::parse("42").unwrap(), ProfileScope::Profile(42));
        assert_matches!(ProfileScope::parse("kids"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn main_scope_has_no_profile_id() {
        assert_eq!(ProfileScope::Main.profile_id(), None);
        assert_eq!(ProfileScope::Profile(3).profile_id(), Some(3));
    }

    #[test]
    fn main_profile_is_owner_and_adult() {
        let p = main_profile(None);
        assert!(p.is_owner);
        assert_eq!(p.id, None);
        assert_eq!(p.name, MAIN_PROFILE_NAME);
        assert_eq!(p.bucket, AgeBucket::Adult);

        assert_eq!(main_profile(Some("Sam")).name, "Sam");
        assert_eq!(main_profile(Some("  ")).name, MAIN_PROFILE_NAME);
    }

    #[test]
    fn capacity_limit() {
        assert!(has_profile_capacity(0));
        assert!(has_profile_capacity(MAX_PROFILES as i64 - 1));
        assert!(!has_profile_capacity(MAX_PROFILES as i64));
        assert!(!has_profile_capacity(-1));
        assert_matches!(profile_limit_reached(), CoreError::Conflict(_));
    }

    #[test]
    fn age_bounds() {
        assert!(validate_age(None).is_ok());
        assert!(validate_age(Some(0)).is_ok());
        assert!(validate_age(Some(-1)).is_err());
        assert!(validate_age(Some(MAX_AGE + 1)).is_err());
    }

    #[test]
    fn blank_name_rejected() {
        assert!(validate_profile_name(" ").is_err());
        assert!(validate_profile_name("Mia").is_ok());
    }
}
