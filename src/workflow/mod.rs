pub mod submission_ctx;
pub mod submission_flow;

pub use submission_ctx::{ActionKind, SubmissionCtx};
pub use submission_flow::SubmissionFlow;
