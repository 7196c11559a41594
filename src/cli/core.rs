use crate::cli;
use awsipregions::{
    Client, ClientBuilder, Error, Fetch, Result, ServiceRegionIndex, ServiceRegionRangeIndex,
};
use std::io::Write;

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Select the Output Mode from CLI arguments
--------------------------------------------------------------------------------------*/

/// What a run prints. Empty `--service` / `--region` values count as not supplied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Every service and the regions it publishes prefixes in
    Catalog,

    /// The IP ranges for one (service, region) pair
    Lookup { service: String, region: String },
}

impl Mode {
    pub fn from_args(args: &cli::Args) -> Result<Mode> {
        match (args.service.is_empty(), args.region.is_empty()) {
            (true, true) => Ok(Mode::Catalog),
            (false, false) => Ok(Mode::Lookup {
                service: args.service.clone(),
                region: args.region.clone(),
            }),
            _ => Err(Error::FlagValidation),
        }
    }
}

/*--------------------------------------------------------------------------------------
  Build the AWS IP Ranges client from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_client(args: &cli::Args) -> Client {
    let mut builder = ClientBuilder::new();
    if let Some(url) = &args.url {
        builder.url(url);
    }
    if let Some(timeout) = args.timeout {
        builder.timeout(timeout);
    }
    builder.build()
}

/*--------------------------------------------------------------------------------------
  Run
--------------------------------------------------------------------------------------*/

/// Validate the arguments, retrieve and parse the AWS IP Ranges, and print the selected output.
/// Argument errors are reported before anything is fetched, and the `--csv` file is written
/// before anything is printed, so a failed run leaves stdout empty.
pub fn run<F: Fetch, W: Write>(args: &cli::Args, fetcher: &F, out: &mut W) -> Result<()> {
    let mode = Mode::from_args(args)?;

    let bytes = fetcher.fetch()?;
    let document = awsipregions::parse(&bytes)?;
    cli::log::document(&document);

    match mode {
        Mode::Catalog => {
            let index = ServiceRegionIndex::build(&document);
            cli::log::catalog(&index);

            if let Some(path) = &args.csv_file {
                cli::csv::save_catalog(&index, path)?;
            }

            match args.output {
                cli::OutputFormat::Text => cli::output::catalog_text(out, &index)?,
                cli::OutputFormat::Table => cli::output::catalog_table(out, &index)?,
            }
        }
        Mode::Lookup { service, region } => {
            let index = ServiceRegionRangeIndex::build(&document);
            let ip_prefixes = index.lookup(&service, &region)?;
            cli::log::ranges(&service, &region, ip_prefixes);

            let netmasks = if args.net_mask_format {
                Some(cli::output::in_netmask_format(ip_prefixes)?)
            } else {
                None
            };

            if let Some(path) = &args.csv_file {
                cli::csv::save_ranges(&service, &region, ip_prefixes, path)?;
            }

            match &netmasks {
                Some(netmasks) => cli::output::ranges(out, &service, &region, netmasks)?,
                None => cli::output::ranges(out, &service, &region, ip_prefixes)?,
            }
        }
    }

    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
