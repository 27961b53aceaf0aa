use crate::features::leads::models::{Language, Lead, LeadSource, LeadStatus};

use chrono::{DateTime, Utc};

/// Stored pending lead from the website with the given id, phone and timestamp
pub fn sample_lead(id: &str, phone: &str, submitted_at: DateTime<Utc>) -> Lead {
    Lead {
        id: id.to_string(),
        name: "Ramesh Kumar".to_string(),
        phone: phone.to_string(),
        village: "kolar-kolar".to_string(),
        language: Language::Kn,
        submitted_at,
        status: LeadStatus::Pending,
        source: LeadSource::Website,
        user_agent: None,
    }
}
