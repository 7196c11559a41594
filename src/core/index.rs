use crate::core::errors::{Error, Result};
use crate::core::json::RangeDocument;
use std::collections::{BTreeMap, BTreeSet};

/*-------------------------------------------------------------------------------------------------
  Service Region Index
-------------------------------------------------------------------------------------------------*/

/// The set of regions each service publishes prefixes in.
///
/// Services and regions are kept sorted, so iteration (and the catalog printed from it) is
/// deterministic across runs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceRegionIndex {
    services: BTreeMap<String, BTreeSet<String>>,
}

impl ServiceRegionIndex {
    /// Build the index with a single pass over the document's prefixes.
    pub fn build(document: &RangeDocument) -> Self {
        let mut index = Self::default();
        for prefix in &document.prefixes {
            index.insert(&prefix.service, &prefix.region);
        }
        index
    }

    /// Record `region` under `service`, creating the service's region set if absent.
    /// Returns `false` when the pair was already present.
    pub fn insert(&mut self, service: &str, region: &str) -> bool {
        self.services
            .entry(service.to_string())
            .or_default()
            .insert(region.to_string())
    }

    pub fn regions(&self, service: &str) -> Option<&BTreeSet<String>> {
        self.services.get(service)
    }

    pub fn contains(&self, service: &str, region: &str) -> bool {
        self.regions(service)
            .is_some_and(|regions| regions.contains(region))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.services.iter()
    }

    /// Number of services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/*-------------------------------------------------------------------------------------------------
  Service Region Range Index
-------------------------------------------------------------------------------------------------*/

/// The IP prefixes published for each (service, region) pair.
///
/// Keys are `service` then `region`; each sequence holds the pair's prefixes in the order they
/// appear in the source document, repeats included.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceRegionRangeIndex {
    services: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl ServiceRegionRangeIndex {
    /// Build the index with a single pass over the document's prefixes.
    pub fn build(document: &RangeDocument) -> Self {
        let mut index = Self::default();
        for prefix in &document.prefixes {
            index.insert(&prefix.service, &prefix.region, &prefix.ip_prefix);
        }
        index
    }

    /// Append `ip_prefix` to the `(service, region)` sequence, creating the service and region
    /// entries as needed.
    pub fn insert(&mut self, service: &str, region: &str, ip_prefix: &str) {
        self.services
            .entry(service.to_string())
            .or_default()
            .entry(region.to_string())
            .or_default()
            .push(ip_prefix.to_string());
    }

    pub fn regions(&self, service: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        self.services.get(service)
    }

    pub fn get(&self, service: &str, region: &str) -> Option<&[String]> {
        self.regions(service)
            .and_then(|regions| regions.get(region))
            .map(Vec::as_slice)
    }

    /// Look up the prefixes for a (service, region) pair. The region is only consulted once the
    /// service is known, so an unknown service always reports the service.
    pub fn lookup(&self, service: &str, region: &str) -> Result<&[String]> {
        let regions = self
            .regions(service)
            .ok_or_else(|| Error::ServiceNotFound(service.to_string()))?;

        regions
            .get(region)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::RegionNotFound {
                service: service.to_string(),
                region: region.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, Vec<String>>)> {
        self.services.iter()
    }

    /// Number of services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
