use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use coforge_core::write_text_atomic;

use crate::wizard_state::{WizardState, WIZARD_TOTAL_STEPS};

/// Fixed durable-storage key for the wizard snapshot.
pub const SNAPSHOT_STORAGE_KEY: &str = "onboarding-storage";

/// Default snapshot location: `.coforge/onboarding-storage.json` under the
/// current working directory.
pub fn default_snapshot_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()
        .context("failed to resolve current working directory")?
        .join(".coforge")
        .join(format!("{SNAPSHOT_STORAGE_KEY}.json")))
}

/// Observer notified with the full wizard state after every mutation.
pub trait SnapshotSink {
    fn persist(&self, state: &WizardState) -> Result<()>;
}

/// Production sink: the full state as pretty JSON, written atomically so a
/// concurrent reader never observes a partial snapshot.
pub struct JsonSnapshotSink {
    path: PathBuf,
}

impl JsonSnapshotSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSink for JsonSnapshotSink {
    fn persist(&self, state: &WizardState) -> Result<()> {
        let mut encoded =
            serde_json::to_string_pretty(state).context("failed to encode wizard snapshot")?;
        encoded.push('\n');
        write_text_atomic(&self.path, &encoded)
    }
}

/// Reads the persisted wizard snapshot. `Ok(None)` when no snapshot exists;
/// an error for unreadable, unparseable, or schema-mismatched content. The
/// store recovers from errors by falling back to defaults.
pub fn load_wizard_snapshot(path: &Path) -> Result<Option<WizardState>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read wizard snapshot {}", path.display()))?;
    let parsed = serde_json::from_str::<WizardState>(&raw)
        .with_context(|| format!("failed to parse wizard snapshot {}", path.display()))?;
    if parsed.total_steps != WIZARD_TOTAL_STEPS {
        bail!(
            "unsupported totalSteps {} in {} (expected {})",
            parsed.total_steps,
            path.display(),
            WIZARD_TOTAL_STEPS
        );
    }
    Ok(Some(parsed))
}
