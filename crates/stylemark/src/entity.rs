//! Input types: the message entity carrying markup and the run it covers.

use std::ops::Range;

use crate::parser::DIRECTIVE_SEPARATOR;

/// Something with a nullable language/metadata field.
pub trait LanguageTagged {
    fn language(&self) -> Option<&str>;
}

/// A formatting entity of a message.
///
/// Style markup rides in the `language` field, which is otherwise used for
/// code block languages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageEntity {
    /// Start character offset in the message text.
    pub offset: usize,
    /// Length in characters.
    pub length: usize,
    /// Language tag, or style markup when it contains `;`.
    pub language: Option<String>,
}

impl MessageEntity {
    pub fn new(offset: usize, length: usize, language: Option<String>) -> Self {
        Self {
            offset,
            length,
            language,
        }
    }
}

impl LanguageTagged for MessageEntity {
    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Returns true if `entity` carries style markup.
///
/// A cheap pre-filter: the entity must exist and its language field must
/// contain at least one `;`. Nothing is parsed.
///
/// # Examples
///
/// ```
/// use stylemark::{MessageEntity, validate};
///
/// let styled = MessageEntity::new(0, 5, Some("c=FF0000;B".into()));
/// let code = MessageEntity::new(0, 5, Some("rust".into()));
///
/// assert!(validate(Some(&styled)));
/// assert!(!validate(Some(&code)));
/// assert!(!validate::<MessageEntity>(None));
/// ```
pub fn validate<E: LanguageTagged + ?Sized>(entity: Option<&E>) -> bool {
    entity
        .and_then(|e| e.language())
        .is_some_and(|language| language.contains(DIRECTIVE_SEPARATOR))
}

/// A character range plus the raw markup to apply over it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRun {
    start: usize,
    end: usize,
    directives: String,
}

impl StyleRun {
    /// Create a run over `start..end`.
    ///
    /// Bounds are the caller's responsibility; they are only checked when an
    /// annotation is inserted.
    pub fn new(start: usize, end: usize, directives: impl Into<String>) -> Self {
        Self {
            start,
            end,
            directives: directives.into(),
        }
    }

    /// Build the run an entity describes, if it carries style markup.
    ///
    /// Returns `None` when `offset + length` does not fit in a `usize`.
    pub fn from_entity(entity: &MessageEntity) -> Option<Self> {
        if !validate(Some(entity)) {
            return None;
        }
        let directives = entity.language()?;
        let end = entity.offset.checked_add(entity.length)?;
        Some(Self::new(entity.offset, end, directives))
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The raw markup string.
    pub fn directives(&self) -> &str {
        &self.directives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged(Option<&'static str>);

    impl LanguageTagged for Tagged {
        fn language(&self) -> Option<&str> {
            self.0
        }
    }

    #[test]
    fn validate_requires_entity() {
        assert!(!validate::<Tagged>(None));
    }

    #[test]
    fn validate_requires_language() {
        assert!(!validate(Some(&Tagged(None))));
    }

    #[test]
    fn validate_requires_separator() {
        assert!(!validate(Some(&Tagged(Some("")))));
        assert!(!validate(Some(&Tagged(Some("B")))));
        assert!(!validate(Some(&Tagged(Some("c=FF0000")))));
        assert!(validate(Some(&Tagged(Some(";")))));
        assert!(validate(Some(&Tagged(Some("B;")))));
        assert!(validate(Some(&Tagged(Some("anything;at all")))));
    }

    #[test]
    fn run_from_entity() {
        let entity = MessageEntity::new(3, 4, Some("B;I".to_string()));
        let run = StyleRun::from_entity(&entity).unwrap();
        assert_eq!(run.range(), 3..7);
        assert_eq!(run.directives(), "B;I");
    }

    #[test]
    fn run_from_entity_with_overflowing_end() {
        let entity = MessageEntity::new(usize::MAX, 2, Some("B;I".to_string()));
        assert!(StyleRun::from_entity(&entity).is_none());

        let entity = MessageEntity::new(usize::MAX - 2, 2, Some("B;I".to_string()));
        assert_eq!(
            StyleRun::from_entity(&entity).map(|run| run.range()),
            Some(usize::MAX - 2..usize::MAX)
        );
    }

    #[test]
    fn run_from_plain_entity() {
        let entity = MessageEntity::new(0, 4, Some("python".to_string()));
        assert!(StyleRun::from_entity(&entity).is_none());
        assert!(StyleRun::from_entity(&MessageEntity::default()).is_none());
    }
}
