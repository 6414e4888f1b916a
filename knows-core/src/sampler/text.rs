//! Textual property kinds and the collaborator that produces their values.

use std::{fmt, num::NonZeroUsize};

use crate::{error::ConstraintError, random::RandomSource, schema::Constraints};

/// Default `maxLength` applied to [`TextKind::Text`].
pub const DEFAULT_TEXT_MAX_LENGTH: NonZeroUsize = match NonZeroUsize::new(200) {
    Some(value) => value,
    None => NonZeroUsize::MIN,
};

/// Domain flavour of a textual property.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TextKind {
    /// A single word.
    String,
    /// A person's full name.
    Name,
    /// A given name.
    FirstName,
    /// A family name.
    LastName,
    /// A given name followed by a family name.
    FullName,
    /// An e-mail address.
    Email,
    /// A telephone number.
    Phone,
    /// A postal address.
    Address,
    /// A city name.
    City,
    /// A country name.
    Country,
    /// A company name.
    Company,
    /// A job title.
    Job,
    /// Free text bounded by `maxLength`.
    Text,
    /// One sentence.
    Sentence,
    /// A few sentences.
    Paragraph,
    /// A web address.
    Url,
    /// A colour name.
    Color,
    /// A random version-4 UUID in hyphenated form.
    Uuid,
}

impl TextKind {
    /// Every text kind in registry order.
    pub const ALL: [Self; 18] = [
        Self::String,
        Self::Name,
        Self::FirstName,
        Self::LastName,
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::City,
        Self::Country,
        Self::Company,
        Self::Job,
        Self::Text,
        Self::Sentence,
        Self::Paragraph,
        Self::Url,
        Self::Color,
        Self::Uuid,
    ];

    /// Canonical type name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Name => "Name",
            Self::FirstName => "FirstName",
            Self::LastName => "LastName",
            Self::FullName => "FullName",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::City => "City",
            Self::Country => "Country",
            Self::Company => "Company",
            Self::Job => "Job",
            Self::Text => "Text",
            Self::Sentence => "Sentence",
            Self::Paragraph => "Paragraph",
            Self::Url => "Url",
            Self::Color => "Color",
            Self::Uuid => "Uuid",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Produces realistic text for textual property kinds.
///
/// Implementations must draw every random choice from `rng` so that a seeded
/// run stays reproducible. `max_length` is a hint; the engine truncates the
/// returned text regardless.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use knows_core::{RandomSource, TextKind, TextSource};
///
/// struct Echo;
///
/// impl TextSource for Echo {
///     fn name(&self) -> &str { "echo" }
///     fn text(&self, kind: TextKind, _: Option<NonZeroUsize>, _: &mut RandomSource) -> String {
///         kind.name().to_lowercase()
///     }
/// }
///
/// let mut rng = RandomSource::seeded(0);
/// assert_eq!(Echo.text(TextKind::City, None, &mut rng), "city");
/// ```
pub trait TextSource {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Produces one value of `kind`.
    fn text(&self, kind: TextKind, max_length: Option<NonZeroUsize>, rng: &mut RandomSource)
    -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TextSampler {
    kind: TextKind,
    max_length: Option<NonZeroUsize>,
}

impl TextSampler {
    pub(crate) fn resolve(
        kind: TextKind,
        constraints: &Constraints,
    ) -> Result<Self, ConstraintError> {
        let max_length = match constraints.max_length {
            Some(raw) => Some(
                usize::try_from(raw)
                    .ok()
                    .and_then(NonZeroUsize::new)
                    .ok_or(ConstraintError::InvalidMaxLength { got: raw })?,
            ),
            None if kind == TextKind::Text => Some(DEFAULT_TEXT_MAX_LENGTH),
            None => None,
        };
        Ok(Self { kind, max_length })
    }

    pub(crate) fn sample(&self, rng: &mut RandomSource, source: &dyn TextSource) -> String {
        let text = source.text(self.kind, self.max_length, rng);
        match self.max_length {
            Some(limit) => truncate_chars(text, limit.get()),
            None => text,
        }
    }
}

fn truncate_chars(mut text: String, limit: usize) -> String {
    if let Some((cut, _)) = text.char_indices().nth(limit) {
        text.truncate(cut);
    }
    text
}
