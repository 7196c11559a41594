use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about="List AWS services and regions, or the IP ranges for a service in a region.", long_about = None)]
pub struct Args {
    /// AWS Service (e.g. EC2); requires --region
    #[arg(short = 's', long, default_value = "")]
    pub service: String,

    /// AWS Region (e.g. us-east-1); requires --service
    #[arg(short = 'r', long, default_value = "")]
    pub region: String,

    /// Service catalog output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print IP ranges in network mask format (n.n.n.n m.m.m.m)
    #[arg(short = 'N', long)]
    pub net_mask_format: bool,

    /// Also save the results to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// URL of the AWS IP Ranges JSON [env: AWSIPRANGES_URL]
    #[arg(long)]
    pub url: Option<String>,

    /// Request timeout in milliseconds; no timeout when unset [env: AWSIPRANGES_TIMEOUT]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

/*--------------------------------------------------------------------------------------
  Output Format
--------------------------------------------------------------------------------------*/

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Service and region blocks separated by dashed lines
    #[default]
    Text,

    /// A table of services and their regions
    Table,
}

/*--------------------------------------------------------------------------------------
  Single-Dash Long Flags
--------------------------------------------------------------------------------------*/

const SINGLE_DASH_FLAGS: [&str; 2] = ["service", "region"];

/// Rewrite `-service` / `-region` (and the `-service=EC2` form) to the `--` spelling clap
/// parses; clap would otherwise read `-service` as `-s ervice`. Arguments after `--` are left
/// untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut end_of_options = false;

    for arg in args.into_iter().map(Into::into) {
        if end_of_options || arg == "--" {
            end_of_options = true;
            normalized.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|text| {
            let rest = text.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            SINGLE_DASH_FLAGS
                .contains(&name)
                .then(|| OsString::from(format!("-{text}")))
        });

        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
