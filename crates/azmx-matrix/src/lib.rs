mod build;
mod emit;
mod key;
mod select;
mod spn;

pub use build::build_matrix;
pub use emit::{to_pretty_json, to_set_matrix_script, to_vso_command, MATRIX_VARIABLE};
pub use key::KeyAllocator;
pub use select::{select_subscriptions, ExcludedSubscription, Selection, SelectionRequest};
pub use spn::resolve_service_connection;
