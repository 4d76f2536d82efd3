//! Client of a remote name-generation service, providing a stream of random
//! names in several kinds (person, product, address, firm, filler text).
//!
//! Names are pulled from the service in batches of [`types::BATCH_SIZE`] and
//! served one at a time from a per-kind buffer, so callers pay one network
//! round trip per batch rather than per name. Each buffer refills itself
//! lazily and is safe for concurrent use.
//!
//! # Example
//! ```ignore
//! use namepump::{Generator, Kind};
//!
//! let names = Generator::new();
//!
//! let person = names.next_person().await?;
//! let firm = names.next(Kind::Firm).await?;
//! ```

pub mod error;
pub mod generator;
pub mod http;
pub mod pump;
pub mod types;

// Re-export commonly used types
pub use error::{NameError, Result};
pub use generator::Generator;
pub use http::{HttpNameSource, MockNameSource, NameSource};
pub use pump::Pump;
pub use types::{Kind, BATCH_SIZE, DEFAULT_BASE_URL, FETCH_TIMEOUT};
