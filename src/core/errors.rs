use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Errors that terminate a run. None of them are retried.
#[derive(Debug, Error)]
pub enum Error {
    /// `--service` and `--region` must be supplied as a pair.
    #[error("Region and Service must be specified together")]
    FlagValidation,

    /// Transport failure retrieving the IP ranges (connect, timeout, body read).
    #[error("Failed to retrieve AWS IP Ranges: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered, but not with a success status.
    #[error("Failed to retrieve AWS IP Ranges from {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The payload is not JSON or does not have the IP ranges shape.
    #[error("Failed to decode AWS IP Ranges JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// No prefix in the document names this service.
    #[error("Service {0} not found")]
    ServiceNotFound(String),

    /// The service is known, but has no prefixes in this region.
    #[error("Region {region} not found")]
    RegionNotFound { service: String, region: String },

    /// An IP prefix string that is not valid CIDR notation.
    #[error("Invalid IP prefix: {0}")]
    InvalidPrefix(String),

    /// Writing output (stdout or the CSV file) failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV file could not be created or a record could not be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
