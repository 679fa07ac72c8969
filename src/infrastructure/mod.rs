pub mod draft;
pub mod hooks;
pub mod json_store;
pub mod plugins;
pub mod repository;

#[cfg(test)]
pub mod test_utils;

pub use draft::*;
pub use hooks::*;
pub use json_store::*;
pub use plugins::*;
pub use repository::*;
