pub mod submission;

pub use submission::{Submission, SubmitReceipt};
