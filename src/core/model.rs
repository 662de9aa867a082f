use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub scenario_id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Role {
    pub role_id: String,
    pub name: String,
}

/// Shape of `scenarios.json`. Other top-level keys are ignored.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct ScenarioDocument {
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

/// Shape of `roles.json`.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct RoleDocument {
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Body of `POST /generate`. Field order is the wire order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GenerateRequest {
    pub scenario_id: String,
    pub roles: Vec<String>,
}

/// Reference data loaded once at startup and read-only afterwards.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ReferenceData {
    pub scenarios: Vec<Scenario>,
    pub roles: Vec<Role>,
}

impl ReferenceData {
    pub fn new(scenarios: ScenarioDocument, roles: RoleDocument) -> Self {
        Self {
            scenarios: scenarios.scenarios,
            roles: roles.roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let scenarios: ScenarioDocument = serde_json::from_str(r#"{"version": 2}"#).unwrap();
        assert!(scenarios.scenarios.is_empty());

        let roles: RoleDocument = serde_json::from_str("{}").unwrap();
        assert!(roles.roles.is_empty());
    }

    #[test]
    fn test_documents_keep_source_order_and_ignore_extra_fields() {
        let json = r#"{
            "scenarios": [
                {"scenario_id": "museum", "name": "Museum Heist", "difficulty": "hard"},
                {"scenario_id": "bank", "name": "Bank Job"}
            ]
        }"#;
        let doc: ScenarioDocument = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = doc.scenarios.iter().map(|s| s.scenario_id.as_str()).collect();
        assert_eq!(ids, vec!["museum", "bank"]);
    }

    #[test]
    fn test_generate_request_wire_format() {
        let request = GenerateRequest {
            scenario_id: "S1".to_string(),
            roles: vec!["mastermind".to_string(), "scout".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"scenario_id":"S1","roles":["mastermind","scout"]}"#
        );
    }
}
