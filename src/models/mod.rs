pub mod response;
pub mod submission;

pub use response::{IntersectionResponse, TestSetsResponse};
pub use submission::{FilePart, OutboundSubmission, SetSpec, SubmissionMode};
