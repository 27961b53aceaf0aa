use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::leads::models::{Lead, LeadSource, LeadStatus, NewLead};
use crate::features::leads::stores::LeadStore;
use crate::shared::constants::LEAD_ID_PREFIX;

/// Result of a lead submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Lead),
    /// Same phone already submitted inside the dedup window; nothing stored
    Duplicate { existing_id: String },
}

/// Service for capturing and listing farmer leads
pub struct LeadService {
    store: Arc<dyn LeadStore>,
    dedup_window: Duration,
    /// Serializes the load-check-save sequence of submissions
    write_lock: Mutex<()>,
}

impl LeadService {
    pub fn new(store: Arc<dyn LeadStore>, dedup_window: Duration) -> Self {
        Self {
            store,
            dedup_window,
            write_lock: Mutex::new(()),
        }
    }

    /// Store a validated lead unless the phone was seen inside the dedup window
    pub async fn submit(&self, new_lead: NewLead) -> Result<SubmitOutcome> {
        self.submit_at(new_lead, Utc::now()).await
    }

    pub(crate) async fn submit_at(
        &self,
        new_lead: NewLead,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome> {
        let _guard = self.write_lock.lock().await;

        let mut leads = self.store.load().await?;

        if let Some(existing) =
            find_recent_duplicate(&leads, &new_lead.phone, now, self.dedup_window)
        {
            tracing::info!(
                "Duplicate farmer lead suppressed: existing_id={}, village={}",
                existing.id,
                new_lead.village
            );
            return Ok(SubmitOutcome::Duplicate {
                existing_id: existing.id.clone(),
            });
        }

        // Keep submitted_at non-decreasing even if the wall clock stepped back
        let submitted_at = leads
            .iter()
            .map(|l| l.submitted_at)
            .max()
            .map_or(now, |latest| latest.max(now));

        let lead = Lead {
            id: generate_lead_id(),
            name: new_lead.name,
            phone: new_lead.phone,
            village: new_lead.village,
            language: new_lead.language,
            submitted_at,
            status: LeadStatus::Pending,
            source: LeadSource::Website,
            user_agent: new_lead.user_agent,
        };

        leads.push(lead.clone());
        self.store.save(&leads).await?;

        tracing::info!(
            id = %lead.id,
            name = %lead.name,
            village = %lead.village,
            language = %lead.language,
            submitted_at = %lead.submitted_at.to_rfc3339(),
            "New farmer lead captured"
        );

        Ok(SubmitOutcome::Created(lead))
    }

    /// All leads, newest first
    pub async fn list(&self) -> Result<Vec<Lead>> {
        let mut leads = self
            .store
            .load()
            .await
            .map_err(AppError::storage("Failed to fetch leads"))?;

        // Reverse first so leads sharing a timestamp also come out newest first
        leads.reverse();
        leads.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

        Ok(leads)
    }
}

fn find_recent_duplicate<'a>(
    leads: &'a [Lead],
    phone: &str,
    now: DateTime<Utc>,
    window: Duration,
) -> Option<&'a Lead> {
    // A window reaching past the earliest representable time has no cutoff
    let cutoff = now.checked_sub_signed(window);
    leads.iter().find(|lead| {
        lead.phone == phone && cutoff.is_none_or(|cutoff| lead.submitted_at > cutoff)
    })
}

fn generate_lead_id() -> String {
    format!("{}{}", LEAD_ID_PREFIX, Uuid::now_v7().simple())
}
