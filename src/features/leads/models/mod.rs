mod lead;

pub use lead::{Language, Lead, LeadSource, LeadStatus, NewLead};
