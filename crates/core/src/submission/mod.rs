mod error;
mod rules;
mod schema;
mod types;

pub use error::SubmissionError;
pub use rules::{check_rules, DELIMITER};
pub use schema::validate;
pub use types::{
    Field, FieldErrors, RawSubmission, Submission, LABEL_FISH_BIGGER, LABEL_FISH_SMALLER,
};
