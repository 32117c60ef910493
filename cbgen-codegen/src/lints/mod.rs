//! Built-in request lints.

mod comment_breaking;
mod empty_description;
mod redundant_prefix;

pub use comment_breaking::CommentBreakingTextLint;
pub use empty_description::EmptyDescriptionLint;
pub use redundant_prefix::RedundantPrefixLint;

#[cfg(test)]
pub(crate) fn request(name: &str, author: &str, description: &str) -> crate::GenerationRequest {
    crate::GenerationRequest::new(
        name,
        author,
        description,
        chrono::NaiveDate::from_ymd_opt(2012, 4, 28).unwrap(),
    )
}
