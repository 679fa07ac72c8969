pub mod clock;
pub mod entry;
pub mod error;
pub mod journal;
pub mod policy;

pub use clock::*;
pub use entry::*;
pub use error::*;
pub use journal::*;
pub use policy::*;
