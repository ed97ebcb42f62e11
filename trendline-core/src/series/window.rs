use trendline_types::{Build, ChartConfig, TrendError};

use crate::age::AgePolicy;

/// Outcome of offering one build to the selection window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admit {
    /// The build participates; keep consuming the stream.
    Include,
    /// The build participates and fills the count cutoff; stop consuming.
    IncludeAndStop,
    /// The build is too old; it and everything older are excluded.
    Stop,
}

/// Tracks the age and count cutoffs over a newest-first build stream.
///
/// The window never reorders builds: it only truncates the prefix of the
/// already-descending stream, so exclusion is contiguous from the oldest
/// end. Either cutoff terminates consumption independently, whichever
/// triggers first.
pub(crate) struct Window<'a, A: ?Sized> {
    age: &'a A,
    remaining: Option<u32>,
}

impl<'a, A: AgePolicy + ?Sized> Window<'a, A> {
    /// Validates `config` and opens a window over it.
    pub(crate) fn open(config: &ChartConfig, age: &'a A) -> Result<Self, TrendError> {
        config.validate()?;
        Ok(Self {
            age,
            remaining: config.build_count,
        })
    }

    /// Offers the next (newer-to-older) build to the window.
    pub(crate) fn admit(&mut self, build: &Build) -> Admit {
        if self.age.is_too_old(build) {
            return Admit::Stop;
        }
        match &mut self.remaining {
            None => Admit::Include,
            Some(remaining) => {
                // validate() rejected a zero cutoff, so this never underflows
                *remaining -= 1;
                if *remaining == 0 {
                    Admit::IncludeAndStop
                } else {
                    Admit::Include
                }
            }
        }
    }
}
