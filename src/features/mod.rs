pub mod auth;
pub mod leads;
pub mod villages;
