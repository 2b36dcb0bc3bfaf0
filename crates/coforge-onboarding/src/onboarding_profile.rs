use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Enumerates supported `ExperienceLevel` values.
pub enum ExperienceLevel {
    Beginner,
    Junior,
    ConfidentJunior,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Junior => "junior",
            Self::ConfidentJunior => "confident_junior",
        }
    }
}

impl Default for ExperienceLevel {
    fn default() -> Self {
        Self::Junior
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Enumerates supported `PrimaryGoal` values.
pub enum PrimaryGoal {
    CareerGrowth,
    Experience,
    Portfolio,
    JobPrep,
}

impl PrimaryGoal {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CareerGrowth => "career_growth",
            Self::Experience => "experience",
            Self::Portfolio => "portfolio",
            Self::JobPrep => "job_prep",
        }
    }
}

impl Default for PrimaryGoal {
    fn default() -> Self {
        Self::CareerGrowth
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates supported `WeeklyAvailability` buckets.
pub enum WeeklyAvailability {
    #[serde(rename = "<10h")]
    UnderTenHours,
    #[serde(rename = "10-20h")]
    TenToTwentyHours,
    #[serde(rename = "20-30h")]
    TwentyToThirtyHours,
    #[serde(rename = "30h+")]
    OverThirtyHours,
}

impl WeeklyAvailability {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnderTenHours => "<10h",
            Self::TenToTwentyHours => "10-20h",
            Self::TwentyToThirtyHours => "20-30h",
            Self::OverThirtyHours => "30h+",
        }
    }
}

impl Default for WeeklyAvailability {
    fn default() -> Self {
        Self::TenToTwentyHours
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Enumerates supported `WorkPreferenceMode` values.
pub enum WorkPreferenceMode {
    Solo,
    Team,
    Both,
}

impl WorkPreferenceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Team => "team",
            Self::Both => "both",
        }
    }
}

impl Default for WorkPreferenceMode {
    fn default() -> Self {
        Self::Both
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Public struct `WorkPreference` carried inside the onboarding profile.
pub struct WorkPreference {
    pub mode: WorkPreferenceMode,
}

/// Accumulated profile-in-progress collected across the onboarding steps.
///
/// Field names are the published storage contract; a snapshot missing or
/// mistyping any known field fails to parse as a whole, which the store
/// recovers from by falling back to defaults. Unrecognized fields are kept
/// in `extra` and round-trip through serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnboardingProfile {
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub city: String,
    pub timezone: String,
    pub language: String,
    pub primary_role: String,
    pub level: ExperienceLevel,
    pub bio: String,
    pub skills: BTreeMap<String, String>,
    pub work_experience: String,
    pub social_links: BTreeMap<String, String>,
    pub primary_goal: PrimaryGoal,
    pub weekly_availability: WeeklyAvailability,
    pub work_preference: WorkPreference,
    pub ai_preference: BTreeMap<String, Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl OnboardingProfile {
    /// Default profile with the given timezone. The timezone is the only
    /// environment-dependent default, so it is supplied by the caller
    /// instead of being captured here.
    pub fn with_timezone(timezone: impl Into<String>) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            country: String::new(),
            city: String::new(),
            timezone: timezone.into(),
            language: "en".to_string(),
            primary_role: String::new(),
            level: ExperienceLevel::default(),
            bio: String::new(),
            skills: BTreeMap::new(),
            work_experience: String::new(),
            social_links: BTreeMap::new(),
            primary_goal: PrimaryGoal::default(),
            weekly_availability: WeeklyAvailability::default(),
            work_preference: WorkPreference::default(),
            ai_preference: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Shallow-merges `update` into the profile: present fields replace the
    /// existing value entirely (nested maps wholesale), absent fields are
    /// left untouched, and unrecognized fields are merged per key into
    /// `extra`.
    pub fn apply_update(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            first_name,
            last_name,
            country,
            city,
            timezone,
            language,
            primary_role,
            level,
            bio,
            skills,
            work_experience,
            social_links,
            primary_goal,
            weekly_availability,
            work_preference,
            ai_preference,
            extra,
        } = update;

        if let Some(value) = first_name {
            self.first_name = value;
        }
        if let Some(value) = last_name {
            self.last_name = value;
        }
        if let Some(value) = country {
            self.country = value;
        }
        if let Some(value) = city {
            self.city = value;
        }
        if let Some(value) = timezone {
            self.timezone = value;
        }
        if let Some(value) = language {
            self.language = value;
        }
        if let Some(value) = primary_role {
            self.primary_role = value;
        }
        if let Some(value) = level {
            self.level = value;
        }
        if let Some(value) = bio {
            self.bio = value;
        }
        if let Some(value) = skills {
            self.skills = value;
        }
        if let Some(value) = work_experience {
            self.work_experience = value;
        }
        if let Some(value) = social_links {
            self.social_links = value;
        }
        if let Some(value) = primary_goal {
            self.primary_goal = value;
        }
        if let Some(value) = weekly_availability {
            self.weekly_availability = value;
        }
        if let Some(value) = work_preference {
            self.work_preference = value;
        }
        if let Some(value) = ai_preference {
            self.ai_preference = value;
        }
        for (key, value) in extra {
            self.extra.insert(key, value);
        }
    }
}

/// Partial profile update: every field optional, unknown JSON keys captured
/// in `extra` rather than rejected.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub primary_role: Option<String>,
    pub level: Option<ExperienceLevel>,
    pub bio: Option<String>,
    pub skills: Option<BTreeMap<String, String>>,
    pub work_experience: Option<String>,
    pub social_links: Option<BTreeMap<String, String>>,
    pub primary_goal: Option<PrimaryGoal>,
    pub weekly_availability: Option<WeeklyAvailability>,
    pub work_preference: Option<WorkPreference>,
    pub ai_preference: Option<BTreeMap<String, Value>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
