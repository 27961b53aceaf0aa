use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Preferred language for the callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Kn,
    Hi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Kn, Language::Hi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Kn => "kn",
            Language::Hi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| format!("Unsupported language: {}", s))
    }
}

/// Back-office follow-up state. Only `Pending` is ever written by this service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    Pending,
    Contacted,
    Converted,
    Rejected,
}

/// Channel a lead came in through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    #[default]
    Website,
}

/// Persisted farmer callback request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Village id from the reference table
    pub village: String,
    pub language: Language,
    pub submitted_at: DateTime<Utc>,
    pub status: LeadStatus,
    pub source: LeadSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// A validated submission, not yet stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    pub village: String,
    pub language: Language,
    pub user_agent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_language_from_str() {
        assert_eq!("kn".parse::<Language>(), Ok(Language::Kn));
        assert_eq!("hi".parse::<Language>(), Ok(Language::Hi));
        assert!("KN".parse::<Language>().is_err());
        assert!("xx".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_lead_wire_format() {
        let lead = Lead {
            id: "lead_1".to_string(),
            name: "Ramesh Kumar".to_string(),
            phone: "9876543210".to_string(),
            village: "kolar-kolar".to_string(),
            language: Language::Kn,
            submitted_at: "2026-01-15T10:30:00Z".parse().unwrap(),
            status: LeadStatus::Pending,
            source: LeadSource::Website,
            user_agent: None,
        };

        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["submittedAt"], "2026-01-15T10:30:00Z");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["source"], "website");
        assert_eq!(value["language"], "kn");
        assert!(value.get("userAgent").is_none());
    }

    #[test]
    fn test_lead_reads_millisecond_timestamps() {
        let value = json!({
            "id": "lead_1700000000000_abc123def",
            "name": "Asha",
            "phone": "9123456780",
            "village": "mys-mysuru",
            "language": "en",
            "submittedAt": "2026-01-15T10:30:00.123Z",
            "status": "contacted",
            "source": "website",
            "userAgent": "Mozilla/5.0"
        });

        let lead: Lead = serde_json::from_value(value).unwrap();
        assert_eq!(lead.status, LeadStatus::Contacted);
        assert_eq!(lead.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(lead.submitted_at.timestamp_subsec_millis(), 123);
    }
}
