mod types;
mod tests;

pub use types::{Matrix, MatrixEntry, Subscription, SubscriptionId};
