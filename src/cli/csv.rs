use awsipregions::{Result, ServiceRegionIndex};
use log::info;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save Results to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save_catalog(index: &ServiceRegionIndex, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.serialize(["Service", "Region"])?;

    for (service, regions) in index.iter() {
        for region in regions {
            writer.serialize((service, region))?;
        }
    }

    writer.flush()?;
    info!("Saved service catalog to {:?}", path);

    Ok(())
}

pub fn save_ranges(service: &str, region: &str, ip_prefixes: &[String], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.serialize(["Service", "Region", "IP Prefix"])?;

    for ip_prefix in ip_prefixes {
        writer.serialize((service, region, ip_prefix))?;
    }

    writer.flush()?;
    info!("Saved {} IP ranges to {:?}", ip_prefixes.len(), path);

    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
