use std::path::Path;

use coforge_onboarding::onboarding_command::{parse_onboarding_command, run_onboarding_command};
use coforge_onboarding::onboarding_profile::ProfileUpdate;
use coforge_onboarding::wizard_state::WizardState;
use coforge_onboarding::wizard_store::{OnboardingStore, OnboardingStoreConfig};

fn open_store(path: &Path, timezone: &str) -> OnboardingStore {
    let timezone = timezone.to_string();
    OnboardingStore::open(
        OnboardingStoreConfig::new(path).with_timezone_detector(Box::new(move || timezone.clone())),
    )
}

fn run(store: &mut OnboardingStore, command_args: &str) -> Vec<String> {
    let command = parse_onboarding_command(command_args).expect("parse command");
    run_onboarding_command(store, command).expect("run command")
}

#[test]
fn integration_wizard_session_survives_reopen() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join(".coforge/onboarding-storage.json");

    {
        let mut store = open_store(&path, "Europe/Berlin");
        run(&mut store, r#"update {"first_name":"Ada","last_name":"Lovelace"}"#);
        run(&mut store, "advance");
        run(
            &mut store,
            r#"update {"primary_role":"backend","level":"confident_junior"}"#,
        );
        run(&mut store, "advance");
        run(&mut store, "skill set rust intermediate");
        run(&mut store, "skill set python expert");
    }

    let reopened = open_store(&path, "Europe/Berlin");
    let state = reopened.state();
    assert_eq!(state.step, 3);
    assert_eq!(state.total_steps, 5);
    assert_eq!(state.data.first_name, "Ada");
    assert_eq!(state.data.last_name, "Lovelace");
    assert_eq!(state.data.primary_role, "backend");
    assert_eq!(state.data.level.as_str(), "confident_junior");
    assert_eq!(state.data.skills.len(), 2);
    assert_eq!(state.data.timezone, "Europe/Berlin");
}

#[test]
fn integration_snapshot_file_matches_published_contract() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("onboarding-storage.json");

    let mut store = open_store(&path, "UTC");
    store.update_data(ProfileUpdate {
        first_name: Some("Grace".to_string()),
        ..ProfileUpdate::default()
    });

    let raw = std::fs::read_to_string(&path).expect("read snapshot");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("snapshot is json");
    assert_eq!(value["step"], serde_json::json!(1));
    assert_eq!(value["totalSteps"], serde_json::json!(5));
    assert_eq!(value["data"]["first_name"], serde_json::json!("Grace"));
    assert_eq!(value["data"]["work_preference"]["mode"], serde_json::json!("both"));
    assert_eq!(value["data"]["weekly_availability"], serde_json::json!("10-20h"));
}

#[test]
fn integration_corrupt_snapshot_recovers_to_defaults_and_heals_on_next_write() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("onboarding-storage.json");
    std::fs::write(&path, "{\"step\": \"banana\"}").expect("write corrupt snapshot");

    let mut store = open_store(&path, "UTC");
    assert_eq!(store.state(), &WizardState::with_defaults("UTC"));

    store.set_step(2);
    let reopened = open_store(&path, "UTC");
    assert_eq!(reopened.state().step, 2);
}

#[test]
fn integration_unknown_profile_fields_round_trip_through_snapshot() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("onboarding-storage.json");

    {
        let mut store = open_store(&path, "UTC");
        run(
            &mut store,
            r#"update {"first_name":"Ada","favorite_editor":"helix"}"#,
        );
    }

    let reopened = open_store(&path, "UTC");
    assert_eq!(
        reopened.state().data.extra.get("favorite_editor"),
        Some(&serde_json::json!("helix"))
    );
}
