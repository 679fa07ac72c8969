pub mod write_log;

pub use write_log::*;
