//! Rule actions

use super::template::Template;
use serde::{Deserialize, Serialize};

/// Action performed when a rule fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Attach a reason rendered from the message template
    Reason {
        message: Template,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },

    /// Set the response classification (e.g. "filtered", "validation error")
    Classify { code: String },

    /// Write the rendered template into a field of the matched fact
    Enrich { field: String, value: Template },
}

impl Action {
    pub fn reason(message: impl Into<Template>) -> Self {
        Action::Reason {
            message: message.into(),
            code: None,
        }
    }

    pub fn reason_with_code(message: impl Into<Template>, code: impl Into<String>) -> Self {
        Action::Reason {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    pub fn classify(code: impl Into<String>) -> Self {
        Action::Classify { code: code.into() }
    }

    pub fn enrich(field: impl Into<String>, value: impl Into<Template>) -> Self {
        Action::Enrich {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Short name for logs and diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Reason { .. } => "reason",
            Action::Classify { .. } => "classify",
            Action::Enrich { .. } => "enrich",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            Action::reason("zipcode is empty"),
            Action::Reason {
                message: Template::from("zipcode is empty"),
                code: None
            }
        );
        assert_eq!(Action::classify("filtered").kind(), "classify");
        assert_eq!(
            Action::enrich("federal_tax_id", "{federal_tax_id}-{zip_code}").kind(),
            "enrich"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let action = Action::reason_with_code("business filtered: from {state_code}", "F001");
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "reason");
        assert_eq!(json["message"], "business filtered: from {state_code}");
        assert_eq!(json["code"], "F001");

        let back: Action = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
    }
}
