use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Review status of a homework as reported by the API.
#[derive(Serialize, Deserialize, Display, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// The human-readable verdict text shown to the user for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_status_from_str() {
        let status = HomeworkStatus::from_str("approved").unwrap();

        assert_eq!(status, HomeworkStatus::Approved);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(HomeworkStatus::from_str("staged").is_err());
    }

    #[test]
    fn displays_as_wire_value() {
        assert_eq!(HomeworkStatus::Reviewing.to_string(), "reviewing");
    }

    #[test]
    fn every_status_has_a_verdict() {
        for status in [
            HomeworkStatus::Approved,
            HomeworkStatus::Reviewing,
            HomeworkStatus::Rejected,
        ] {
            assert!(!status.verdict().is_empty());
        }
    }
}
