//! Shared test utilities for `knows-core`.

use std::num::NonZeroUsize;

use knows_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{RandomSource, TextKind, TextSource};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`TextSource`] producing `<kind>-<n>` with `n` drawn from the run's stream.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TaggedText;

impl TextSource for TaggedText {
    fn name(&self) -> &str {
        "tagged"
    }

    fn text(&self, kind: TextKind, _: Option<NonZeroUsize>, rng: &mut RandomSource) -> String {
        format!("{kind}-{}", rng.int_in(0..=999))
    }
}
