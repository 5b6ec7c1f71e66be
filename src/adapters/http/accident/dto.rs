//! HTTP DTOs (Data Transfer Objects) for accident endpoints.
//!
//! These types define the JSON request/response structure for the accident API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::accident::{Accident, AccidentType, Rule};
use crate::domain::foundation::{AccidentId, AccidentTypeId, RuleId};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of create and edit requests.
#[derive(Debug, Clone, Deserialize)]
pub struct AccidentRequest {
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub address: String,
    /// Id of an existing accident type.
    pub type_id: AccidentTypeId,
    /// Ids of existing rules; duplicates collapse.
    #[serde(default)]
    pub rule_ids: Vec<RuleId>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccidentTypeResponse {
    pub id: AccidentTypeId,
    pub name: String,
}

impl From<&AccidentType> for AccidentTypeResponse {
    fn from(accident_type: &AccidentType) -> Self {
        Self {
            id: accident_type.id,
            name: accident_type.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleResponse {
    pub id: RuleId,
    pub name: String,
}

impl From<&Rule> for RuleResponse {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id,
            name: rule.name.clone(),
        }
    }
}

/// An accident with its type and cited rules (rules in ascending id order).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccidentResponse {
    pub id: AccidentId,
    pub name: String,
    pub text: String,
    pub address: String,
    #[serde(rename = "type")]
    pub accident_type: AccidentTypeResponse,
    pub rules: Vec<RuleResponse>,
}

impl From<&Accident> for AccidentResponse {
    fn from(accident: &Accident) -> Self {
        Self {
            id: accident.id,
            name: accident.name.clone(),
            text: accident.text.clone(),
            address: accident.address.clone(),
            accident_type: AccidentTypeResponse::from(&accident.accident_type),
            rules: accident.rules.iter().map(RuleResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::accident::RuleSet;

    #[test]
    fn request_defaults_optional_fields() {
        let req: AccidentRequest =
            serde_json::from_str(r#"{ "name": "Crash", "type_id": 1 }"#).unwrap();
        assert_eq!(req.type_id, AccidentTypeId::new(1));
        assert!(req.rule_ids.is_empty());
        assert!(req.text.is_empty());
    }

    #[test]
    fn request_without_type_is_rejected() {
        let result = serde_json::from_str::<AccidentRequest>(r#"{ "name": "Crash" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn response_nests_type_and_rules() {
        let rules: RuleSet = [
            Rule::new(RuleId::new(2), "Article 2"),
            Rule::new(RuleId::new(1), "Article 1"),
        ]
        .into_iter()
        .collect();
        let accident = Accident {
            id: AccidentId::new(7),
            name: "Crash".to_string(),
            text: "Side impact".to_string(),
            address: "Main st 1".to_string(),
            accident_type: AccidentType::new(AccidentTypeId::new(1), "Two cars"),
            rules,
        };

        let json = serde_json::to_value(AccidentResponse::from(&accident)).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["type"]["name"], "Two cars");
        assert_eq!(json["rules"][0]["id"], 1);
        assert_eq!(json["rules"][1]["name"], "Article 2");
    }
}
