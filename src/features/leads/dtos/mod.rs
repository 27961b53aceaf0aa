mod lead_dto;

pub use lead_dto::*;
