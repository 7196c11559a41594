use crate::core::datetime;
use crate::core::errors::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

/// Decode an AWS IP Ranges payload. Fields other than `syncToken`, `createDate` and the IPv4
/// `prefixes` are ignored.
pub fn parse(bytes: &[u8]) -> Result<RangeDocument> {
    Ok(serde_json::from_slice(bytes)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Range Document
--------------------------------------------------------------------------------------*/

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RangeDocument {
    #[serde(rename = "syncToken")]
    pub sync_token: String,

    #[serde(rename = "createDate")]
    pub create_date: String,

    pub prefixes: Vec<PrefixEntry>,
}

impl RangeDocument {
    /// The `createDate` value as a UTC timestamp, when it uses the published date format.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        datetime::parse(&self.create_date)
    }
}

/*--------------------------------------------------------------------------------------
  Prefix Entry
--------------------------------------------------------------------------------------*/

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PrefixEntry {
    pub ip_prefix: String,
    pub region: String,
    pub service: String,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
