use crate::core::config::Config;
use crate::services::render::{checked_values, ChoiceOption};
use anyhow::Result;
use inquire::{MultiSelect, Select};
use log::info;

/// What the user picked, read straight off the prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub scenario_id: Option<String>,
    pub roles: Vec<String>,
}

pub fn run_selection(
    config: &Config,
    scenarios: &[ChoiceOption],
    roles: &[ChoiceOption],
) -> Result<Selection> {
    if config.unattended {
        return Ok(preset_selection(config, scenarios, roles));
    }

    let scenario_id = if scenarios.is_empty() {
        None
    } else {
        let labels: Vec<String> = scenarios.iter().map(|o| o.label.clone()).collect();
        let picked = Select::new("Scenario:", labels).raw_prompt()?;
        Some(scenarios[picked.index].value.clone())
    };

    let roles = if roles.is_empty() {
        Vec::new()
    } else {
        let labels: Vec<String> = roles.iter().map(|o| o.label.clone()).collect();
        let defaults: Vec<usize> = roles
            .iter()
            .enumerate()
            .filter(|(_, o)| o.selected)
            .map(|(i, _)| i)
            .collect();
        let picked = MultiSelect::new("Roles:", labels)
            .with_default(&defaults)
            .raw_prompt()?;

        let mut checklist = roles.to_vec();
        for (i, option) in checklist.iter_mut().enumerate() {
            option.selected = picked.iter().any(|p| p.index == i);
        }
        checked_values(&checklist)
    };

    Ok(Selection { scenario_id, roles })
}

/// Unattended mode: the configured preset, falling back to what the
/// widgets would show before any user input.
pub fn preset_selection(
    config: &Config,
    scenarios: &[ChoiceOption],
    roles: &[ChoiceOption],
) -> Selection {
    let scenario_id = config.scenario_id.clone().or_else(|| {
        scenarios
            .iter()
            .find(|o| o.selected)
            .map(|o| o.value.clone())
    });
    let roles = if config.roles.is_empty() {
        checked_values(roles)
    } else {
        config.roles.clone()
    };
    info!("Unattended selection: {:?} {:?}", scenario_id, roles);
    Selection { scenario_id, roles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Role, Scenario};
    use crate::services::render::{role_options, scenario_options};

    fn options() -> (Vec<ChoiceOption>, Vec<ChoiceOption>) {
        let scenarios = vec![
            Scenario { scenario_id: "museum".into(), name: "Museum Heist".into() },
            Scenario { scenario_id: "bank".into(), name: "Bank Job".into() },
        ];
        let roles = vec![
            Role { role_id: "hacker".into(), name: "Hacker".into() },
            Role { role_id: "mastermind".into(), name: "Mastermind".into() },
        ];
        (scenario_options(&scenarios), role_options(&roles, "mastermind"))
    }

    #[test]
    fn test_preset_defaults_to_initial_widget_state() {
        let (scenarios, roles) = options();
        let config = Config { unattended: true, ..Default::default() };

        let selection = run_selection(&config, &scenarios, &roles).unwrap();
        assert_eq!(selection.scenario_id.as_deref(), Some("museum"));
        assert_eq!(selection.roles, vec!["mastermind"]);
    }

    #[test]
    fn test_preset_from_config() {
        let (scenarios, roles) = options();
        let config = Config {
            unattended: true,
            scenario_id: Some("bank".into()),
            roles: vec!["hacker".into(), "mastermind".into()],
            ..Default::default()
        };

        let selection = preset_selection(&config, &scenarios, &roles);
        assert_eq!(selection.scenario_id.as_deref(), Some("bank"));
        assert_eq!(selection.roles, vec!["hacker", "mastermind"]);
    }

    #[test]
    fn test_preset_with_no_data() {
        let config = Config { unattended: true, ..Default::default() };
        let selection = preset_selection(&config, &[], &[]);
        assert_eq!(selection.scenario_id, None);
        assert!(selection.roles.is_empty());
    }
}
