//! Name kinds and compiled-in service configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::NameError;

/// How many names the service returns per batch. Refill buffers are sized
/// to this so a full batch never reallocates.
pub const BATCH_SIZE: usize = 1000;

/// Base URL of the public name service.
pub const DEFAULT_BASE_URL: &str = "http://code.503web.com/names";

/// Upper bound on a single fetch to the name service.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Kind of names the service can generate.
///
/// Each kind is served from its own endpoint under the service base URL;
/// see [`Kind::path`] for the URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Person names
    Person,
    /// Product names
    Product,
    /// Postal addresses
    Address,
    /// Company names
    Firm,
    /// Generic filler text
    Fill,
}

impl Kind {
    /// All kinds, in registry order. `k as usize` indexes into this array.
    pub const ALL: [Kind; 5] = [
        Kind::Person,
        Kind::Product,
        Kind::Address,
        Kind::Firm,
        Kind::Fill,
    ];

    /// URL path segment for this kind under the service base URL.
    pub fn path(self) -> &'static str {
        match self {
            Kind::Person => "name",
            Kind::Product => "product",
            Kind::Address => "address",
            Kind::Firm => "firm",
            Kind::Fill => "fill",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Kind::Person => "person",
            Kind::Product => "product",
            Kind::Address => "address",
            Kind::Firm => "firm",
            Kind::Fill => "fill",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "person" => Ok(Kind::Person),
            "product" => Ok(Kind::Product),
            "address" => Ok(Kind::Address),
            "firm" => Ok(Kind::Firm),
            "fill" => Ok(Kind::Fill),
            other => Err(NameError::UnknownKind(other.to_string())),
        }
    }
}
