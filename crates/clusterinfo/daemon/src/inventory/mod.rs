//! Node inventory clients

mod http;
mod memory;
mod traits;

pub use http::HttpInventoryClient;
pub use memory::StaticInventory;
pub use traits::NodeInventory;
