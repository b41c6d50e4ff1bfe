//! Convenient imports for common usage.
//!
//! ```rust
//! use primekg::prelude::*;
//! ```

pub use crate::startup::{open_engine, refresh_engine};
pub use primekg_fetch::{prepare_data_dir, SourceFetcher, StalenessMarker};
pub use primekg_query::prelude::*;
