pub mod intersection_client;

pub use intersection_client::{IntersectionClient, RawResponse};
