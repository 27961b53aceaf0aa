//! Village reference table for the farmer callback form.
//!
//! The table is a fixed list of villages/towns in the Karnataka districts the
//! marketplace currently serves. Lead intake uses it to validate the submitted
//! village id; the endpoint below lets the form render its dropdown.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/villages` | No | List villages grouped by district |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::VillageService;
