//! Widget-independent rendering of the reference data.
//!
//! Both front-ends draw from these lists, so the browser and the CLI show
//! the same labels and the same default selection.

use crate::core::model::{Role, Scenario};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// One option per scenario, in load order, labelled `"<name> (<id>)"`.
/// The first option is selected, as a browser dropdown would do.
pub fn scenario_options(scenarios: &[Scenario]) -> Vec<ChoiceOption> {
    scenarios
        .iter()
        .enumerate()
        .map(|(i, scenario)| ChoiceOption {
            value: scenario.scenario_id.clone(),
            label: format!("{} ({})", scenario.name, scenario.scenario_id),
            selected: i == 0,
        })
        .collect()
}

/// One checkbox per role; only `default_role` starts checked.
pub fn role_options(roles: &[Role], default_role: &str) -> Vec<ChoiceOption> {
    roles
        .iter()
        .map(|role| ChoiceOption {
            value: role.role_id.clone(),
            label: role.name.clone(),
            selected: role.role_id == default_role,
        })
        .collect()
}

/// Values of the selected options, in list order.
pub fn checked_values(options: &[ChoiceOption]) -> Vec<String> {
    options
        .iter()
        .filter(|o| o.selected)
        .map(|o| o.value.clone())
        .collect()
}
