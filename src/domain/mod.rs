// Domain types and value objects
mod category;
mod horizon;

// Re-export commonly used types to the world
pub use category::{Category, Variant};
pub use horizon::{Horizon, HorizonError};
