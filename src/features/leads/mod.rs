//! Farmer lead intake feature.
//!
//! Captures callback requests from the farmer page of the website. A lead is
//! validated, dropped as a duplicate when the same phone number submitted in
//! the last 24 hours, and otherwise appended to the lead store. Back-office
//! tooling reads the full list with the admin API key.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/leads/farmer` | No | Submit a callback request |
//! | GET | `/api/leads/farmer` | `x-api-key` | List all leads, newest first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::LeadService;
pub use stores::{InMemoryLeadStore, JsonFileLeadStore, LeadStore};
