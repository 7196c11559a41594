use crate::core::errors::{Error, Result};
use crate::core::json::{self, RangeDocument};
use log::{info, warn};
use std::env;
use std::time::Duration;

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ retrieves and parses the AWS IP Ranges using the client
/// configuration from the environment (or the defaults).
///
/// ```no_run
/// let document = awsipregions::get_ranges()?;
/// let index = awsipregions::ServiceRegionRangeIndex::build(&document);
/// for ip_prefix in index.lookup("S3", "us-east-2")? {
///     println!("{ip_prefix}");
/// }
/// # Ok::<(), awsipregions::Error>(())
/// ```
pub fn get_ranges() -> Result<RangeDocument> {
    Client::new().get_ranges()
}

/*-------------------------------------------------------------------------------------------------
  Fetch Trait
-------------------------------------------------------------------------------------------------*/

/// A source of raw AWS IP Ranges JSON. Each call performs one retrieval; nothing is retried.
pub trait Fetch {
    fn fetch(&self) -> Result<Vec<u8>>;
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct.
///
/// ```
/// let client = awsipregions::ClientBuilder::default()
///     .url("http://localhost:8080/ip-ranges.json")
///     .timeout(5000) // 5 seconds
///     .build();
///
/// assert_eq!(client.url(), "http://localhost:8080/ip-ranges.json");
/// ```
///
/// [ClientBuilder::new] sources initial values from environment variables when they are set;
/// [ClientBuilder::default] ignores the environment.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    url: String,
    timeout: Option<u64>,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

pub const DEFAULT_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values: the published AWS IP
    /// Ranges URL and no request timeout.
    ///
    /// ```
    /// let client = awsipregions::ClientBuilder::default().build();
    ///
    /// assert_eq!(client.url(), "https://ip-ranges.amazonaws.com/ip-ranges.json");
    /// assert_eq!(client.timeout(), None);
    /// ```
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading initial configuration values from
    /// environment variables when set and default values when they are not.
    ///
    /// - `AWSIPRANGES_URL`
    /// - `AWSIPRANGES_TIMEOUT` (milliseconds)
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            url: get_env_var("AWSIPRANGES_URL").unwrap_or(default.url),
            timeout: get_env_var("AWSIPRANGES_TIMEOUT").or(default.timeout),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the URL used to retrieve the AWS IP Ranges; defaults to
    /// `https://ip-ranges.amazonaws.com/ip-ranges.json`.
    pub fn url<'s>(&'s mut self, url: &str) -> &'s mut Self {
        self.url = url.to_string();
        self
    }

    /// Set the request timeout in milliseconds. Without one, a request waits as long as the
    /// server takes.
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Client {
        Client {
            url: self.url.clone(),
            timeout: self.timeout.map(Duration::from_millis),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A blocking HTTP client for the AWS IP Ranges JSON. One GET per [Fetch::fetch] call; any
/// non-success HTTP status is an error.
///
/// ```no_run
/// let client = awsipregions::Client::new();
/// let document = client.get_ranges()?;
/// println!("{} prefixes", document.prefixes.len());
/// # Ok::<(), awsipregions::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    timeout: Option<Duration>,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /*-------------------------------------------------------------------------
      Get Ranges
    -------------------------------------------------------------------------*/

    /// Retrieve and parse the AWS IP Ranges.
    pub fn get_ranges(&self) -> Result<RangeDocument> {
        let bytes = self.fetch()?;
        json::parse(&bytes)
    }
}

impl Fetch for Client {
    fn fetch(&self) -> Result<Vec<u8>> {
        info!("Get AWS IP Ranges from URL: GET {}", self.url);

        // The blocking client otherwise applies its own 30 second default
        let http = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let response = http.get(&self.url).send().inspect_err(|error| {
            log::error!("Get AWS IP Ranges from URL: FAILED: {}", error)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Get AWS IP Ranges from URL: HTTP {}", status);
            return Err(Error::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes()?;
        info!("Get AWS IP Ranges from URL: Ok; {} bytes", bytes.len());

        Ok(bytes.to_vec())
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable; `None` when unset or unparsable.
fn get_env_var<T: std::str::FromStr>(env_var: &str) -> Option<T> {
    env::var(env_var).ok().and_then(|value| {
        value
            .parse::<T>()
            .inspect(|_| info!("Using {}: {}", env_var, value))
            .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
            .ok()
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
