//! # User Profile
//!
//! Profile data shown on the profile page and used to personalise suggestions.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub const GUEST_NAME: &str = "Guest User";
pub const GUEST_BIO: &str = "Welcome to Cooksy! Start your culinary journey.";

/// Cooking preferences, stored as the free-text form values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub diet_type: String,
    pub spice_level: String,
    pub cuisine_preference: String,
    pub allergies: Vec<String>,
    pub cooking_experience: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            diet_type: "Vegetarian".to_string(),
            spice_level: "Medium".to_string(),
            cuisine_preference: "North Indian".to_string(),
            allergies: Vec::new(),
            cooking_experience: "Intermediate".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    /// Month and year, e.g. "October 2026"
    pub join_date: String,
    pub preferences: Preferences,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::guest()
    }
}

/// Partial profile edit. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub preferences: Option<Preferences>,
}

/// Format a date the way join dates are displayed
pub fn format_join_date<D: Datelike>(date: &D) -> String {
    match NaiveDate::from_ymd_opt(date.year(), date.month(), 1) {
        Some(first) => first.format("%B %Y").to_string(),
        None => date.year().to_string(),
    }
}

/// Bio given to accounts that never wrote one
pub fn default_bio(name: &str) -> String {
    let name = if name.is_empty() { GUEST_NAME } else { name };
    format!("Welcome to Cooksy! I'm {name} and I love cooking.")
}

impl UserProfile {
    /// Profile used when nobody is signed in, joined this month
    pub fn guest() -> Self {
        Self::guest_joined(&Local::now().date_naive())
    }

    pub fn guest_joined<D: Datelike>(date: &D) -> Self {
        Self {
            name: GUEST_NAME.to_string(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            bio: GUEST_BIO.to_string(),
            join_date: format_join_date(date),
            preferences: Preferences::default(),
        }
    }

    /// Fill in the default bio if it is empty
    pub fn with_default_bio(mut self) -> Self {
        if self.bio.is_empty() {
            self.bio = default_bio(&self.name);
        }
        self
    }

    pub fn is_guest(&self) -> bool {
        self.email.is_empty()
    }

    /// Merge a partial update into this profile
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            email,
            phone,
            location,
            bio,
            preferences,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(bio) = bio {
            self.bio = bio;
        }
        if let Some(preferences) = preferences {
            self.preferences = preferences;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_profile() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let guest = UserProfile::guest_joined(&date);
        assert_eq!(guest.name, "Guest User");
        assert_eq!(guest.join_date, "October 2026");
        assert_eq!(guest.preferences.diet_type, "Vegetarian");
        assert_eq!(guest.preferences.cuisine_preference, "North Indian");
        assert!(guest.preferences.allergies.is_empty());
        assert!(guest.is_guest());
    }

    #[test]
    fn test_default_bio() {
        let profile = UserProfile {
            name: "Asha".to_string(),
            bio: String::new(),
            ..UserProfile::guest()
        }
        .with_default_bio();
        assert_eq!(profile.bio, "Welcome to Cooksy! I'm Asha and I love cooking.");
        assert_eq!(
            default_bio(""),
            "Welcome to Cooksy! I'm Guest User and I love cooking."
        );
    }

    #[test]
    fn test_partial_update() {
        let mut profile = UserProfile::guest();
        profile.apply(ProfileUpdate {
            location: Some("Pune".to_string()),
            ..ProfileUpdate::default()
        });
        assert_eq!(profile.location, "Pune");
        assert_eq!(profile.name, GUEST_NAME);
    }

    #[test]
    fn test_missing_fields_deserialize() {
        let profile: UserProfile = serde_json::from_str(r#"{"name":"Ravi","email":"r@x.in"}"#).unwrap();
        assert_eq!(profile.name, "Ravi");
        assert_eq!(profile.preferences, Preferences::default());
    }
}
