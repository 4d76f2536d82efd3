//! Registry of one pump per name kind.

use std::sync::Arc;

use crate::error::Result;
use crate::http::{HttpNameSource, NameSource};
use crate::pump::Pump;
use crate::types::{Kind, DEFAULT_BASE_URL};

/// Registry mapping each [`Kind`] to its own [`Pump`].
///
/// Built once at startup and passed by reference wherever names are needed.
/// Pumps are independent; a refill for one kind never blocks the others.
///
/// # Example
/// ```ignore
/// let names = Generator::new();
/// let person = names.next_person().await?;
/// let firm = names.next(Kind::Firm).await?;
/// ```
pub struct Generator<S = HttpNameSource> {
    pumps: [Pump<S>; Kind::ALL.len()],
}

impl Generator<HttpNameSource> {
    /// Create a generator backed by the public name service.
    pub fn new() -> Self {
        Self::with_source(HttpNameSource::new(), DEFAULT_BASE_URL)
    }
}

impl Default for Generator<HttpNameSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NameSource> Generator<S> {
    /// Create a generator with a custom source and base URL. Each kind gets
    /// its own pump pointed at `{base_url}/{segment}`.
    pub fn with_source(source: S, base_url: &str) -> Self {
        let source = Arc::new(source);
        Self {
            pumps: Kind::ALL
                .map(|kind| Pump::new(source.clone(), format!("{base_url}/{}", kind.path()))),
        }
    }

    /// Return the next name of the given kind.
    pub async fn next(&self, kind: Kind) -> Result<String> {
        self.pumps[kind as usize].next().await
    }

    /// Return the next name for a kind given by its string name, e.g.
    /// `"person"`. An unrecognized name is a local validation error; no
    /// network call is made.
    pub async fn next_by_name(&self, kind: &str) -> Result<String> {
        self.next(kind.parse()?).await
    }

    /// Return the next random person name.
    pub async fn next_person(&self) -> Result<String> {
        self.next(Kind::Person).await
    }

    /// Return the next random product name.
    pub async fn next_product(&self) -> Result<String> {
        self.next(Kind::Product).await
    }

    /// Return the next random address.
    pub async fn next_address(&self) -> Result<String> {
        self.next(Kind::Address).await
    }

    /// Return the next random firm name.
    pub async fn next_firm(&self) -> Result<String> {
        self.next(Kind::Firm).await
    }

    /// Return the next random chunk of filler text.
    pub async fn next_fill(&self) -> Result<String> {
        self.next(Kind::Fill).await
    }
}
