//! Application directory
//!
//! Lists applications, hands out per-application update locks and stores
//! updated application records.

mod memory;
mod traits;

pub use memory::InMemoryDirectory;
pub use traits::{ApplicationDirectory, ApplicationLock};
