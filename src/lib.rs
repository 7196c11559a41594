//! List the AWS services and regions that publish IP ranges, and the IP ranges published for a
//! (service, region) pair.
//!
//! ```no_run
//! use awsipregions::{ServiceRegionIndex, ServiceRegionRangeIndex};
//!
//! let document = awsipregions::get_ranges()?;
//!
//! // Every service and the regions it publishes prefixes in
//! let catalog = ServiceRegionIndex::build(&document);
//! for (service, regions) in catalog.iter() {
//!     println!("{service}: {} regions", regions.len());
//! }
//!
//! // The prefixes for one (service, region) pair, in document order
//! let ranges = ServiceRegionRangeIndex::build(&document);
//! for ip_prefix in ranges.lookup("EC2", "us-east-1")? {
//!     println!("{ip_prefix}");
//! }
//! # Ok::<(), awsipregions::Error>(())
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::client::{get_ranges, Client, ClientBuilder, Fetch, DEFAULT_URL};
pub use crate::core::errors::{Error, Result};
pub use crate::core::index::{ServiceRegionIndex, ServiceRegionRangeIndex};
pub use crate::core::json::{parse, PrefixEntry, RangeDocument};

// Re-export the IP network crate used for netmask formatting
pub use ipnetwork;
