//! Topic primitives submitted for storage in the document database.
//!
//! Inbound adapters parse raw payloads into [`Topic`] before talking to the
//! submission port, so an invalid topic never reaches an outbound call.

use thiserror::Error;

/// Maximum number of characters accepted in a topic name.
pub const TOPIC_NAME_MAX_CHARS: usize = 2000;

/// Domain error returned when topic values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicValidationError {
    /// Name was empty.
    #[error("topic name must not be empty")]
    EmptyName,
    /// Name exceeded [`TOPIC_NAME_MAX_CHARS`].
    #[error(
        "topic name must be at most {max} characters (got {actual})",
        max = TOPIC_NAME_MAX_CHARS
    )]
    NameTooLong {
        /// Number of characters supplied by the caller.
        actual: usize,
    },
    /// Content was empty.
    #[error("topic content must not be empty")]
    EmptyContent,
}

impl TopicValidationError {
    /// Name of the payload field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong { .. } => "name",
            Self::EmptyContent => "content",
        }
    }
}

/// Validated topic forwarded to the document database as one page.
///
/// ## Invariants
/// - `name` holds between 1 and [`TOPIC_NAME_MAX_CHARS`] characters.
/// - `content` is non-empty.
///
/// Both values keep caller-provided whitespace; the page is created with the
/// text exactly as submitted.
///
/// # Examples
/// ```
/// use topic_gateway::domain::Topic;
///
/// let topic = Topic::try_new("Python Basics".into(), "Python is a language.".into()).unwrap();
/// assert_eq!(topic.name(), "Python Basics");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    name: String,
    content: String,
}

impl Topic {
    /// Construct a topic from raw name/content inputs.
    pub fn try_new(name: String, content: String) -> Result<Self, TopicValidationError> {
        if name.is_empty() {
            return Err(TopicValidationError::EmptyName);
        }
        let actual = name.chars().count();
        if actual > TOPIC_NAME_MAX_CHARS {
            return Err(TopicValidationError::NameTooLong { actual });
        }
        if content.is_empty() {
            return Err(TopicValidationError::EmptyContent);
        }
        Ok(Self { name, content })
    }

    /// Title of the page to create.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Plain-text body of the page to create.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(String::new(), "body", TopicValidationError::EmptyName)]
    #[case("a".repeat(TOPIC_NAME_MAX_CHARS + 1), "body", TopicValidationError::NameTooLong { actual: TOPIC_NAME_MAX_CHARS + 1 })]
    #[case("title".to_owned(), "", TopicValidationError::EmptyContent)]
    fn invalid_topics_are_rejected(
        #[case] name: String,
        #[case] content: &str,
        #[case] expected: TopicValidationError,
    ) {
        let err = Topic::try_new(name, content.to_owned()).expect_err("invalid topic must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("x".to_owned())]
    #[case("a".repeat(TOPIC_NAME_MAX_CHARS))]
    #[case("é".repeat(TOPIC_NAME_MAX_CHARS))]
    #[case("  padded  ".to_owned())]
    fn names_within_bounds_are_accepted(#[case] name: String) {
        let topic = Topic::try_new(name.clone(), "body".to_owned()).expect("valid topic");
        assert_eq!(topic.name(), name);
        assert_eq!(topic.content(), "body");
    }

    #[rstest]
    fn name_length_counts_characters_not_bytes() {
        // 2000 two-byte characters exceed 2000 bytes but stay within the limit.
        let name = "ß".repeat(TOPIC_NAME_MAX_CHARS);
        assert!(name.len() > TOPIC_NAME_MAX_CHARS);
        assert!(Topic::try_new(name, "body".to_owned()).is_ok());
    }

    #[rstest]
    #[case(TopicValidationError::EmptyName, "name")]
    #[case(TopicValidationError::NameTooLong { actual: 2001 }, "name")]
    #[case(TopicValidationError::EmptyContent, "content")]
    fn errors_report_offending_field(
        #[case] error: TopicValidationError,
        #[case] field: &str,
    ) {
        assert_eq!(error.field(), field);
    }

    #[rstest]
    #[case(TopicValidationError::EmptyName, "topic name must not be empty")]
    #[case(
        TopicValidationError::NameTooLong { actual: 2001 },
        "topic name must be at most 2000 characters (got 2001)"
    )]
    #[case(TopicValidationError::EmptyContent, "topic content must not be empty")]
    fn errors_render_readable_messages(
        #[case] error: TopicValidationError,
        #[case] message: &str,
    ) {
        assert_eq!(error.to_string(), message);
    }
}
