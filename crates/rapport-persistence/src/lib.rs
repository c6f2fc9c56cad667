pub mod serialization;
pub mod state_store;
pub mod store;
pub mod traits;

pub use serialization::JsonSerializer;
pub use state_store::StateStore;
pub use store::*;
pub use traits::*;
