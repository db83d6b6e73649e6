pub mod qase_client;
pub mod test_ops;

pub use qase_client::QaseClient;
pub use test_ops::{ResultSubmission, TestOpsApi};
