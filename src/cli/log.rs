use awsipregions::{RangeDocument, ServiceRegionIndex};
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Range Document
--------------------------------------------------------------------------------------*/

pub fn document(document: &RangeDocument) {
    info!("AWS IP Ranges sync token: {}", document.sync_token);
    match document.created() {
        Some(created) => info!("AWS IP Ranges created: {created}"),
        None => warn!(
            "Unrecognized AWS IP Ranges create date: {:?}",
            document.create_date
        ),
    }
    info!("AWS IP Ranges contain {} prefixes", document.prefixes.len());
}

/*--------------------------------------------------------------------------------------
  Service Catalog
--------------------------------------------------------------------------------------*/

pub fn catalog(index: &ServiceRegionIndex) {
    let count_services = index.len();
    let count_pairs: usize = index.iter().map(|(_, regions)| regions.len()).sum();
    info!("Found {count_services} service(s) in {count_pairs} service/region combination(s)");
}

/*--------------------------------------------------------------------------------------
  IP Ranges
--------------------------------------------------------------------------------------*/

pub fn ranges(service: &str, region: &str, ip_prefixes: &[String]) {
    let count = ip_prefixes.len();
    info!("Found {count} IP range(s) for service {service} in region {region}");
}
