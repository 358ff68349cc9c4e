pub mod block;
pub mod error;
pub mod session;
pub mod uuids;

pub use block::{Acceleration, BlockEvent};
pub use error::MeshError;
pub use session::{BlockCharacteristics, assign_roles};
