//! Canonical type tags and alias resolution.

use std::fmt;

use super::text::TextKind;

/// Canonical property type understood by the sampler registry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum TypeTag {
    Text(TextKind),
    Int,
    Integer,
    Float,
    Double,
    Boolean,
    Bool,
    Date,
    DateTime,
    Time,
    Year,
}

const NON_TEXT: [TypeTag; 10] = [
    TypeTag::Int,
    TypeTag::Integer,
    TypeTag::Float,
    TypeTag::Double,
    TypeTag::Boolean,
    TypeTag::Bool,
    TypeTag::Date,
    TypeTag::DateTime,
    TypeTag::Time,
    TypeTag::Year,
];

/// Uppercase spellings borrowed from other graph tools.
const ALIASES: [(&str, TypeTag); 10] = [
    ("STRING", TypeTag::Text(TextKind::String)),
    ("INTEGER", TypeTag::Int),
    ("INT64", TypeTag::Int),
    ("UINT64", TypeTag::Int),
    ("FLOAT64", TypeTag::Float),
    ("BOOLEAN", TypeTag::Boolean),
    ("BOOL", TypeTag::Bool),
    ("DATE", TypeTag::Date),
    ("DATETIME", TypeTag::DateTime),
    ("ZONED DATETIME", TypeTag::DateTime),
];

impl TypeTag {
    /// Every canonical tag, text kinds first.
    pub(crate) fn all() -> impl Iterator<Item = Self> {
        TextKind::ALL.into_iter().map(Self::Text).chain(NON_TEXT)
    }

    /// Canonical spelling used in schema documents.
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Text(kind) => kind.name(),
            Self::Int => "Int",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Bool => "Bool",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Time => "Time",
            Self::Year => "Year",
        }
    }

    /// Resolves a raw tag: exact canonical name, then the alias table keyed
    /// by the uppercased tag, then a case-insensitive canonical match.
    pub(crate) fn resolve(raw: &str) -> Option<Self> {
        if let Some(tag) = Self::all().find(|tag| tag.name() == raw) {
            return Some(tag);
        }
        let upper = raw.to_uppercase();
        if let Some((_, tag)) = ALIASES.iter().find(|(alias, _)| *alias == upper) {
            return Some(*tag);
        }
        Self::all().find(|tag| tag.name().eq_ignore_ascii_case(raw))
    }

    /// Sorted, comma-separated canonical names for error messages.
    pub(crate) fn available() -> String {
        let mut names: Vec<&str> = Self::all().map(Self::name).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::canonical("Int", TypeTag::Int)]
    #[case::canonical_integer("Integer", TypeTag::Integer)]
    #[case::alias_integer("INTEGER", TypeTag::Int)]
    #[case::alias_lowercase("int64", TypeTag::Int)]
    #[case::alias_unsigned("UINT64", TypeTag::Int)]
    #[case::alias_float("FLOAT64", TypeTag::Float)]
    #[case::alias_boolean("BOOLEAN", TypeTag::Boolean)]
    #[case::alias_bool("BOOL", TypeTag::Bool)]
    #[case::alias_date("DATE", TypeTag::Date)]
    #[case::alias_zoned("ZONED DATETIME", TypeTag::DateTime)]
    #[case::alias_string("STRING", TypeTag::Text(TextKind::String))]
    #[case::case_insensitive("email", TypeTag::Text(TextKind::Email))]
    #[case::case_insensitive_year("YEAR", TypeTag::Year)]
    fn resolves_names_and_aliases(#[case] raw: &str, #[case] expected: TypeTag) {
        assert_eq!(TypeTag::resolve(raw), Some(expected));
    }

    #[rstest]
    #[case("Decimal")]
    #[case("")]
    #[case("Int ")]
    fn rejects_unknown_tags(#[case] raw: &str) {
        assert_eq!(TypeTag::resolve(raw), None);
    }

    #[test]
    fn canonical_names_round_trip() {
        for tag in TypeTag::all() {
            assert_eq!(TypeTag::resolve(tag.name()), Some(tag));
        }
    }

    #[test]
    fn available_list_is_sorted() {
        let available = TypeTag::available();
        let names: Vec<&str> = available.split(", ").collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 28);
    }
}
