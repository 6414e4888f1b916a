//! Realistic text for `knows` graphs, drawn from embedded word pools.
//!
//! [`Lexicon`] implements [`TextSource`] so the generator can fill names,
//! addresses, companies and prose without any network or file access. Every
//! choice is taken from the run's [`RandomSource`], so seeded runs replay
//! exactly.

mod pools;

use std::num::NonZeroUsize;

use knows_core::{DEFAULT_TEXT_MAX_LENGTH, RandomSource, TextKind, TextSource};
use thiserror::Error;

/// Errors raised when assembling a [`Lexicon`] from custom pools.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// A pool the lexicon draws from contained no entries.
    #[error("word pool `{pool}` must not be empty")]
    EmptyPool {
        /// Name of the empty pool.
        pool: &'static str,
    },
    /// A pool entry was empty or whitespace only.
    #[error("word pool `{pool}` contains a blank entry at position {index}")]
    BlankEntry {
        /// Name of the offending pool.
        pool: &'static str,
        /// Zero-based position of the blank entry.
        index: usize,
    },
}

/// Vocabulary a [`Lexicon`] samples from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPools {
    /// Given names.
    pub first_names: Vec<String>,
    /// Family names.
    pub last_names: Vec<String>,
    /// City names.
    pub cities: Vec<String>,
    /// Country names.
    pub countries: Vec<String>,
    /// Street names used in addresses.
    pub streets: Vec<String>,
    /// First halves of company names.
    pub company_stems: Vec<String>,
    /// Second halves of company names.
    pub company_suffixes: Vec<String>,
    /// Job titles.
    pub jobs: Vec<String>,
    /// Colour names.
    pub colors: Vec<String>,
    /// Mail domains.
    pub domains: Vec<String>,
    /// Lower-case words used for prose, single words and URLs.
    pub words: Vec<String>,
    /// Top-level domains used in URLs.
    pub tlds: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_owned()).collect()
}

impl Default for WordPools {
    fn default() -> Self {
        Self {
            first_names: owned(pools::FIRST_NAMES),
            last_names: owned(pools::LAST_NAMES),
            cities: owned(pools::CITIES),
            countries: owned(pools::COUNTRIES),
            streets: owned(pools::STREETS),
            company_stems: owned(pools::COMPANY_STEMS),
            company_suffixes: owned(pools::COMPANY_SUFFIXES),
            jobs: owned(pools::JOBS),
            colors: owned(pools::COLORS),
            domains: owned(pools::DOMAINS),
            words: owned(pools::WORDS),
            tlds: owned(pools::TLDS),
        }
    }
}

impl WordPools {
    fn named(&self) -> [(&'static str, &[String]); 12] {
        [
            ("first_names", self.first_names.as_slice()),
            ("last_names", self.last_names.as_slice()),
            ("cities", self.cities.as_slice()),
            ("countries", self.countries.as_slice()),
            ("streets", self.streets.as_slice()),
            ("company_stems", self.company_stems.as_slice()),
            ("company_suffixes", self.company_suffixes.as_slice()),
            ("jobs", self.jobs.as_slice()),
            ("colors", self.colors.as_slice()),
            ("domains", self.domains.as_slice()),
            ("words", self.words.as_slice()),
            ("tlds", self.tlds.as_slice()),
        ]
    }

    fn validate(&self) -> Result<(), LexiconError> {
        for (pool, entries) in self.named() {
            if entries.is_empty() {
                return Err(LexiconError::EmptyPool { pool });
            }
            if let Some(index) = entries.iter().position(|entry| entry.trim().is_empty()) {
                return Err(LexiconError::BlankEntry { pool, index });
            }
        }
        Ok(())
    }
}

/// [`TextSource`] backed by [`WordPools`].
///
/// # Examples
/// ```
/// use knows_core::{RandomSource, TextKind, TextSource};
/// use knows_providers_lexicon::Lexicon;
///
/// let lexicon = Lexicon::default();
/// let mut rng = RandomSource::seeded(3);
/// let email = lexicon.text(TextKind::Email, None, &mut rng);
/// assert!(email.contains('@'));
/// ```
#[derive(Clone, Debug)]
pub struct Lexicon {
    name: String,
    pools: WordPools,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            name: "lexicon".to_owned(),
            pools: WordPools::default(),
        }
    }
}

impl Lexicon {
    /// Creates a lexicon over custom pools.
    ///
    /// # Errors
    /// Returns [`LexiconError::EmptyPool`] when any pool is empty and
    /// [`LexiconError::BlankEntry`] when an entry is blank.
    ///
    /// # Examples
    /// ```
    /// use knows_providers_lexicon::{Lexicon, LexiconError, WordPools};
    ///
    /// let pools = WordPools { cities: Vec::new(), ..WordPools::default() };
    /// let err = Lexicon::from_pools("custom", pools).expect_err("cities are empty");
    /// assert_eq!(err, LexiconError::EmptyPool { pool: "cities" });
    /// ```
    pub fn from_pools(name: impl Into<String>, pools: WordPools) -> Result<Self, LexiconError> {
        pools.validate()?;
        Ok(Self {
            name: name.into(),
            pools,
        })
    }

    /// Pools this lexicon samples from.
    #[must_use]
    pub fn pools(&self) -> &WordPools {
        &self.pools
    }

    fn sentence(&self, rng: &mut RandomSource) -> String {
        let count = rng.usize_in(4..=10);
        let mut sentence = String::new();
        for position in 0..count {
            let word = pick(&self.pools.words, rng);
            if position == 0 {
                sentence.push_str(&capitalise(word));
            } else {
                sentence.push(' ');
                sentence.push_str(word);
            }
        }
        sentence.push('.');
        sentence
    }

    fn paragraph(&self, rng: &mut RandomSource) -> String {
        let count = rng.usize_in(3..=6);
        (0..count)
            .map(|_| self.sentence(rng))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whole sentences up to `limit` characters; always at least one.
    fn prose(&self, limit: NonZeroUsize, rng: &mut RandomSource) -> String {
        let mut text = self.sentence(rng);
        loop {
            let next = self.sentence(rng);
            if text.chars().count() + 1 + next.chars().count() > limit.get() {
                return text;
            }
            text.push(' ');
            text.push_str(&next);
        }
    }

    fn email(&self, rng: &mut RandomSource) -> String {
        let first = pick(&self.pools.first_names, rng).to_lowercase();
        let last = pick(&self.pools.last_names, rng).to_lowercase();
        let number = rng.int_in(1..=99);
        let domain = pick(&self.pools.domains, rng);
        format!("{first}.{last}{number}@{domain}")
    }

    fn phone(rng: &mut RandomSource) -> String {
        let area = rng.int_in(200..=999);
        let exchange = rng.int_in(200..=999);
        let line = rng.int_in(0..=9_999);
        format!("+1-{area}-{exchange}-{line:04}")
    }

    fn address(&self, rng: &mut RandomSource) -> String {
        let number = rng.int_in(1..=999);
        let street = pick(&self.pools.streets, rng);
        let city = pick(&self.pools.cities, rng);
        format!("{number} {street}, {city}")
    }

    fn url(&self, rng: &mut RandomSource) -> String {
        let host = pick(&self.pools.words, rng);
        let tld = pick(&self.pools.tlds, rng);
        let path = pick(&self.pools.words, rng);
        format!("https://www.{host}.{tld}/{path}")
    }

    fn uuid(rng: &mut RandomSource) -> String {
        let mut bytes = [0_u8; 16];
        rng.fill_bytes(&mut bytes);
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    }
}

impl TextSource for Lexicon {
    fn name(&self) -> &str {
        &self.name
    }

    fn text(
        &self,
        kind: TextKind,
        max_length: Option<NonZeroUsize>,
        rng: &mut RandomSource,
    ) -> String {
        let pools = &self.pools;
        match kind {
            TextKind::String => pick(&pools.words, rng).to_owned(),
            TextKind::FirstName => pick(&pools.first_names, rng).to_owned(),
            TextKind::LastName => pick(&pools.last_names, rng).to_owned(),
            TextKind::Name => {
                let first = pick(&pools.first_names, rng);
                let last = pick(&pools.last_names, rng);
                format!("{first} {last}")
            }
            TextKind::FullName => {
                let first = pick(&pools.first_names, rng);
                let middle = pick(&pools.first_names, rng).chars().next().unwrap_or('A');
                let last = pick(&pools.last_names, rng);
                format!("{first} {middle}. {last}")
            }
            TextKind::Email => self.email(rng),
            TextKind::Phone => Self::phone(rng),
            TextKind::Address => self.address(rng),
            TextKind::City => pick(&pools.cities, rng).to_owned(),
            TextKind::Country => pick(&pools.countries, rng).to_owned(),
            TextKind::Company => {
                let stem = pick(&pools.company_stems, rng);
                let suffix = pick(&pools.company_suffixes, rng);
                format!("{stem} {suffix}")
            }
            TextKind::Job => pick(&pools.jobs, rng).to_owned(),
            TextKind::Text => self.prose(max_length.unwrap_or(DEFAULT_TEXT_MAX_LENGTH), rng),
            TextKind::Sentence => self.sentence(rng),
            TextKind::Paragraph => self.paragraph(rng),
            TextKind::Url => self.url(rng),
            TextKind::Color => pick(&pools.colors, rng).to_owned(),
            TextKind::Uuid => Self::uuid(rng),
        }
    }
}

fn pick<'a>(pool: &'a [String], rng: &mut RandomSource) -> &'a str {
    rng.choose(pool).map_or("", String::as_str)
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
