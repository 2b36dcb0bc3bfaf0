use anyhow::{bail, Context, Result};

use crate::onboarding_profile::ProfileUpdate;
use crate::wizard_state::WizardStep;
use crate::wizard_store::OnboardingStore;

pub const ONBOARDING_USAGE: &str =
    "usage: /onboarding <status|show|set-step|advance|back|update|skill|link|reset> ...";

#[derive(Debug, Clone, PartialEq)]
/// Enumerates supported `OnboardingCommand` values.
pub enum OnboardingCommand {
    Status,
    Show,
    SetStep { step: u32 },
    Advance,
    Back,
    Update { update: ProfileUpdate },
    SetSkill { name: String, level: String },
    RemoveSkill { name: String },
    SetLink { platform: String, url: String },
    RemoveLink { platform: String },
    Reset,
}

pub fn parse_onboarding_command(command_args: &str) -> Result<OnboardingCommand> {
    const USAGE_SET_STEP: &str = "usage: /onboarding set-step <step>";
    const USAGE_UPDATE: &str = "usage: /onboarding update <json-object>";
    const USAGE_SKILL: &str = "usage: /onboarding skill <set <name> <level>|remove <name>>";
    const USAGE_LINK: &str = "usage: /onboarding link <set <platform> <url>|remove <platform>>";

    let trimmed = command_args.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };
    if head.is_empty() {
        bail!("{ONBOARDING_USAGE}");
    }

    match head {
        "status" | "show" | "advance" | "back" | "reset" if !rest.is_empty() => {
            bail!("'{head}' takes no arguments; {ONBOARDING_USAGE}");
        }
        "status" => Ok(OnboardingCommand::Status),
        "show" => Ok(OnboardingCommand::Show),
        "advance" => Ok(OnboardingCommand::Advance),
        "back" => Ok(OnboardingCommand::Back),
        "reset" => Ok(OnboardingCommand::Reset),
        "set-step" => {
            let step = rest
                .parse::<u32>()
                .with_context(|| format!("step must be a non-negative integer; {USAGE_SET_STEP}"))?;
            Ok(OnboardingCommand::SetStep { step })
        }
        "update" => {
            if rest.is_empty() {
                bail!("{USAGE_UPDATE}");
            }
            let update = serde_json::from_str::<ProfileUpdate>(rest)
                .with_context(|| format!("update payload must be a JSON object; {USAGE_UPDATE}"))?;
            Ok(OnboardingCommand::Update { update })
        }
        "skill" => {
            let tokens = rest.split_whitespace().collect::<Vec<_>>();
            match tokens.as_slice() {
                ["set", name, level] => Ok(OnboardingCommand::SetSkill {
                    name: (*name).to_string(),
                    level: (*level).to_string(),
                }),
                ["remove", name] => Ok(OnboardingCommand::RemoveSkill {
                    name: (*name).to_string(),
                }),
                _ => bail!("{USAGE_SKILL}"),
            }
        }
        "link" => {
            let tokens = rest.split_whitespace().collect::<Vec<_>>();
            match tokens.as_slice() {
                ["set", platform, url] => Ok(OnboardingCommand::SetLink {
                    platform: (*platform).to_string(),
                    url: (*url).to_string(),
                }),
                ["remove", platform] => Ok(OnboardingCommand::RemoveLink {
                    platform: (*platform).to_string(),
                }),
                _ => bail!("{USAGE_LINK}"),
            }
        }
        other => bail!("unknown subcommand '{}'; {ONBOARDING_USAGE}", other),
    }
}

/// Executes a parsed command against the store and renders stable output
/// lines for the hosting shell.
pub fn run_onboarding_command(
    store: &mut OnboardingStore,
    command: OnboardingCommand,
) -> Result<Vec<String>> {
    match command {
        OnboardingCommand::Status => {
            let state = store.state();
            let title = state
                .current_step_info()
                .map(WizardStep::title)
                .unwrap_or("out-of-range");
            Ok(vec![
                format!("step={}/{}", state.step, state.total_steps),
                format!("title={title}"),
                format!("skills={}", state.data.skills.len()),
                format!("social_links={}", state.data.social_links.len()),
            ])
        }
        OnboardingCommand::Show => {
            let encoded = serde_json::to_string_pretty(store.state())
                .context("failed to encode onboarding state")?;
            Ok(vec![encoded])
        }
        OnboardingCommand::SetStep { step } => {
            store.set_step(step);
            Ok(vec![format!("step={}", store.state().step)])
        }
        OnboardingCommand::Advance => {
            if store.advance() {
                Ok(vec![format!("step={}", store.state().step)])
            } else {
                Ok(vec![format!(
                    "step unchanged (already at {})",
                    store.state().step
                )])
            }
        }
        OnboardingCommand::Back => {
            if store.back() {
                Ok(vec![format!("step={}", store.state().step)])
            } else {
                Ok(vec![format!(
                    "step unchanged (already at {})",
                    store.state().step
                )])
            }
        }
        OnboardingCommand::Update { update } => {
            store.update_data(update);
            Ok(vec!["profile updated".to_string()])
        }
        OnboardingCommand::SetSkill { name, level } => {
            store.set_skill(name.clone(), level.clone());
            Ok(vec![format!("skill set: {name}={level}")])
        }
        OnboardingCommand::RemoveSkill { name } => {
            if store.remove_skill(&name) {
                Ok(vec![format!("skill removed: {name}")])
            } else {
                Ok(vec![format!("skill not present: {name}")])
            }
        }
        OnboardingCommand::SetLink { platform, url } => {
            store.set_social_link(platform.clone(), url.clone());
            Ok(vec![format!("link set: {platform}={url}")])
        }
        OnboardingCommand::RemoveLink { platform } => {
            if store.remove_social_link(&platform) {
                Ok(vec![format!("link removed: {platform}")])
            } else {
                Ok(vec![format!("link not present: {platform}")])
            }
        }
        OnboardingCommand::Reset => {
            store.reset();
            Ok(vec!["onboarding state reset".to_string()])
        }
    }
}
