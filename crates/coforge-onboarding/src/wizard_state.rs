use serde::{Deserialize, Serialize};

use crate::onboarding_profile::{OnboardingProfile, ProfileUpdate};

/// Number of onboarding steps; immutable for the life of a store.
pub const WIZARD_TOTAL_STEPS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enumerates the onboarding wizard steps in order.
pub enum WizardStep {
    Personal,
    Role,
    Skills,
    Social,
    Goals,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::Personal,
            Self::Role,
            Self::Skills,
            Self::Social,
            Self::Goals,
        ]
    }

    /// Step metadata for a 1-based step number, `None` when out of range.
    pub fn of_step(step: u32) -> Option<Self> {
        match step {
            1 => Some(Self::Personal),
            2 => Some(Self::Role),
            3 => Some(Self::Skills),
            4 => Some(Self::Social),
            5 => Some(Self::Goals),
            _ => None,
        }
    }

    pub fn number(self) -> u32 {
        match self {
            Self::Personal => 1,
            Self::Role => 2,
            Self::Skills => 3,
            Self::Social => 4,
            Self::Goals => 5,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Role => "role",
            Self::Skills => "skills",
            Self::Social => "social",
            Self::Goals => "goals",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Info",
            Self::Role => "Role & Experience",
            Self::Skills => "Skills",
            Self::Social => "Social Links",
            Self::Goals => "Goals & Preferences",
        }
    }
}

/// Full in-memory wizard state: 1-based step, fixed step count, and the
/// accumulated profile. Serialized form is the published storage contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WizardState {
    pub step: u32,
    #[serde(rename = "totalSteps")]
    pub total_steps: u32,
    pub data: OnboardingProfile,
}

impl WizardState {
    pub fn with_defaults(timezone: &str) -> Self {
        Self {
            step: 1,
            total_steps: WIZARD_TOTAL_STEPS,
            data: OnboardingProfile::with_timezone(timezone),
        }
    }

    /// Replaces the step unconditionally. Out-of-range values are stored
    /// as-is; range enforcement belongs to the rendering layer. Bounded
    /// navigation goes through [`WizardState::advance`] and
    /// [`WizardState::back`].
    pub fn set_step(&mut self, step: u32) {
        self.step = step;
    }

    /// Moves one step forward, clamped at `total_steps`. Returns whether
    /// the step changed.
    pub fn advance(&mut self) -> bool {
        if self.step >= self.total_steps {
            return false;
        }
        self.step += 1;
        true
    }

    /// Moves one step back, clamped at 1. Returns whether the step changed.
    pub fn back(&mut self) -> bool {
        if self.step <= 1 {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn update_data(&mut self, update: ProfileUpdate) {
        self.data.apply_update(update);
    }

    /// Returns to step 1 and the default profile with the given timezone.
    pub fn reset(&mut self, timezone: &str) {
        self.step = 1;
        self.data = OnboardingProfile::with_timezone(timezone);
    }

    pub fn current_step_info(&self) -> Option<WizardStep> {
        WizardStep::of_step(self.step)
    }
}

#[cfg(test)]
mod tests {
    use crate::onboarding_profile::ProfileUpdate;

    use super::{WizardState, WizardStep, WIZARD_TOTAL_STEPS};

    #[test]
    fn unit_step_metadata_covers_every_step_in_order() {
        assert_eq!(WizardStep::all().len(), WIZARD_TOTAL_STEPS as usize);
        for (index, step) in WizardStep::all().iter().enumerate() {
            assert_eq!(step.number(), index as u32 + 1);
            assert_eq!(WizardStep::of_step(step.number()), Some(*step));
        }
        assert_eq!(WizardStep::of_step(0), None);
        assert_eq!(WizardStep::of_step(6), None);
        assert_eq!(WizardStep::Role.title(), "Role & Experience");
        assert_eq!(WizardStep::Goals.slug(), "goals");
    }

    #[test]
    fn unit_set_step_accepts_out_of_range_values() {
        let mut state = WizardState::with_defaults("UTC");
        state.set_step(3);
        assert_eq!(state.step, 3);
        // Permissive on purpose: the store never range-checks, callers do.
        state.set_step(999);
        assert_eq!(state.step, 999);
        state.set_step(0);
        assert_eq!(state.step, 0);
    }

    #[test]
    fn functional_advance_and_back_clamp_to_step_bounds() {
        let mut state = WizardState::with_defaults("UTC");
        assert!(!state.back());
        assert_eq!(state.step, 1);

        for expected in 2..=WIZARD_TOTAL_STEPS {
            assert!(state.advance());
            assert_eq!(state.step, expected);
        }
        assert!(!state.advance());
        assert_eq!(state.step, WIZARD_TOTAL_STEPS);

        assert!(state.back());
        assert_eq!(state.step, WIZARD_TOTAL_STEPS - 1);
    }

    #[test]
    fn functional_reset_restores_step_and_profile_defaults() {
        let mut state = WizardState::with_defaults("UTC");
        state.set_step(4);
        state.update_data(ProfileUpdate {
            first_name: Some("Ada".to_string()),
            ..ProfileUpdate::default()
        });

        state.reset("Europe/Paris");
        assert_eq!(state.step, 1);
        assert_eq!(state.total_steps, WIZARD_TOTAL_STEPS);
        assert_eq!(state.data, crate::onboarding_profile::OnboardingProfile::with_timezone("Europe/Paris"));
    }

    #[test]
    fn functional_state_serde_round_trip_is_field_for_field_equal() {
        let mut state = WizardState::with_defaults("Asia/Tokyo");
        state.set_step(2);
        state.update_data(ProfileUpdate {
            first_name: Some("Ada".to_string()),
            ..ProfileUpdate::default()
        });

        let encoded = serde_json::to_string(&state).expect("encode state");
        let decoded: WizardState = serde_json::from_str(&encoded).expect("decode state");
        assert_eq!(decoded, state);
    }

    #[test]
    fn regression_state_serializes_total_steps_with_contract_name() {
        let state = WizardState::with_defaults("UTC");
        let value = serde_json::to_value(&state).expect("encode state");
        let object = value.as_object().expect("state object");
        assert!(object.contains_key("totalSteps"));
        assert!(!object.contains_key("total_steps"));
        assert!(object.contains_key("step"));
        assert!(object.contains_key("data"));
    }
}
