mod village_handler;

pub use village_handler::*;
