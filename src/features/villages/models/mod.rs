mod village;

pub use village::{Village, VILLAGES};
