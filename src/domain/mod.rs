pub mod problem;
pub mod submission;
pub mod user;

pub use problem::{Difficulty, Problem};
pub use submission::{Submission, Verdict};
pub use user::User;
