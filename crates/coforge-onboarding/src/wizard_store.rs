use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::onboarding_profile::ProfileUpdate;
use crate::snapshot_storage::{load_wizard_snapshot, JsonSnapshotSink, SnapshotSink};
use crate::wizard_state::WizardState;

/// Injectable source for the profile's default timezone. Called once at
/// open for a fresh state and again on every reset.
pub type TimezoneDetector = Box<dyn Fn() -> String>;

/// Resolves the client timezone from the `TZ` environment variable,
/// accepting only names the IANA database knows, with a UTC fallback.
pub fn detect_system_timezone() -> String {
    std::env::var("TZ")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .filter(|value| chrono_tz::Tz::from_str(value).is_ok())
        .unwrap_or_else(|| "UTC".to_string())
}

/// Construction inputs for [`OnboardingStore`]: where the snapshot lives and
/// how the default timezone is derived.
pub struct OnboardingStoreConfig {
    pub snapshot_path: PathBuf,
    pub detect_timezone: TimezoneDetector,
}

impl OnboardingStoreConfig {
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            detect_timezone: Box::new(detect_system_timezone),
        }
    }

    pub fn with_timezone_detector(mut self, detector: TimezoneDetector) -> Self {
        self.detect_timezone = detector;
        self
    }
}

/// Single source of truth for onboarding progress and accumulated answers.
///
/// Every mutation runs the pure state transition, then notifies the attached
/// snapshot sinks. Mutations have no failure surface: a sink error is logged
/// and the in-memory state stands.
pub struct OnboardingStore {
    state: WizardState,
    detect_timezone: TimezoneDetector,
    sinks: Vec<Box<dyn SnapshotSink>>,
}

impl OnboardingStore {
    /// Opens the store against its snapshot path: rehydrates when a prior
    /// snapshot parses, falls back to defaults otherwise. Never fails.
    pub fn open(config: OnboardingStoreConfig) -> Self {
        let OnboardingStoreConfig {
            snapshot_path,
            detect_timezone,
        } = config;
        let state = match load_wizard_snapshot(&snapshot_path) {
            Ok(Some(state)) => {
                debug!(
                    snapshot = %snapshot_path.display(),
                    step = state.step,
                    "rehydrated onboarding state from snapshot"
                );
                state
            }
            Ok(None) => WizardState::with_defaults(&detect_timezone()),
            Err(error) => {
                let chain = format!("{error:#}");
                warn!(
                    snapshot = %snapshot_path.display(),
                    error = %chain,
                    "discarding unusable onboarding snapshot, starting from defaults"
                );
                WizardState::with_defaults(&detect_timezone())
            }
        };
        Self {
            state,
            detect_timezone,
            sinks: vec![Box::new(JsonSnapshotSink::new(snapshot_path))],
        }
    }

    /// Attaches an additional observer notified after every mutation.
    pub fn attach_sink(&mut self, sink: Box<dyn SnapshotSink>) {
        self.sinks.push(sink);
    }

    /// Read-only view of the live state.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn set_step(&mut self, step: u32) {
        self.state.set_step(step);
        self.notify_sinks();
    }

    pub fn advance(&mut self) -> bool {
        let moved = self.state.advance();
        if moved {
            self.notify_sinks();
        }
        moved
    }

    pub fn back(&mut self) -> bool {
        let moved = self.state.back();
        if moved {
            self.notify_sinks();
        }
        moved
    }

    pub fn update_data(&mut self, update: ProfileUpdate) {
        self.state.update_data(update);
        self.notify_sinks();
    }

    /// Sets one skill entry without touching its siblings.
    pub fn set_skill(&mut self, name: impl Into<String>, level: impl Into<String>) {
        self.state.data.skills.insert(name.into(), level.into());
        self.notify_sinks();
    }

    pub fn remove_skill(&mut self, name: &str) -> bool {
        let removed = self.state.data.skills.remove(name).is_some();
        if removed {
            self.notify_sinks();
        }
        removed
    }

    /// Sets one social link entry without touching its siblings.
    pub fn set_social_link(&mut self, platform: impl Into<String>, url: impl Into<String>) {
        self.state.data.social_links.insert(platform.into(), url.into());
        self.notify_sinks();
    }

    pub fn remove_social_link(&mut self, platform: &str) -> bool {
        let removed = self.state.data.social_links.remove(platform).is_some();
        if removed {
            self.notify_sinks();
        }
        removed
    }

    /// Returns to step 1 and profile defaults, re-deriving the timezone
    /// through the injected detector.
    pub fn reset(&mut self) {
        let timezone = (self.detect_timezone)();
        self.state.reset(&timezone);
        self.notify_sinks();
    }

    fn notify_sinks(&self) {
        for sink in &self.sinks {
            if let Err(error) = sink.persist(&self.state) {
                let chain = format!("{error:#}");
                warn!(error = %chain, "onboarding snapshot sink failed");
            }
        }
    }
}
