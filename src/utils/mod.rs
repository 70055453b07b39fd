pub mod disk_space;
pub mod humanize;
pub mod logger;

pub use disk_space::{CapacityCheck, check_capacity, has_enough_space};
pub use humanize::{format_bytes, format_megabytes};
pub use logger::init_logging;
