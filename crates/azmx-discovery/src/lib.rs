pub mod arm;
pub mod discovery;
pub mod error;
pub mod fixed;

pub use arm::{ArmDiscovery, ArmDiscoveryConfig};
pub use discovery::Discovery;
pub use error::DiscoveryError;
pub use fixed::FixedDiscovery;
