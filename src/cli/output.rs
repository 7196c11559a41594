use awsipregions::ipnetwork::IpNetwork;
use awsipregions::{Error, Result, ServiceRegionIndex};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;
use std::io::Write;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

const SEPARATOR: &str = "-----------------------";

/*--------------------------------------------------------------------------------------
  Service Catalog
--------------------------------------------------------------------------------------*/

pub fn catalog_text<W: Write>(out: &mut W, index: &ServiceRegionIndex) -> Result<()> {
    write!(
        out,
        "Please run the application specifying -service and -region with a combination listed below:\n\n"
    )?;
    writeln!(out, "{SEPARATOR}")?;

    for (service, regions) in index.iter() {
        let regions: Vec<&str> = regions.iter().map(String::as_str).collect();
        writeln!(out, "Service: {service}")?;
        writeln!(out, "Regions: [{}]", regions.join(" "))?;
        writeln!(out, "{SEPARATOR}")?;
    }

    Ok(())
}

pub fn catalog_table<W: Write>(out: &mut W, index: &ServiceRegionIndex) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Service")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Regions")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);

    for (service, regions) in index.iter() {
        let regions: Vec<&str> = regions.iter().map(String::as_str).collect();
        table.add_row(vec![
            Cell::new(service).add_attribute(Attribute::Bold),
            Cell::new(regions.join(", ")),
        ]);
    }

    writeln!(out, "{table}")?;

    Ok(())
}

/*--------------------------------------------------------------------------------------
  IP Ranges
--------------------------------------------------------------------------------------*/

pub fn ranges<W: Write>(
    out: &mut W,
    service: &str,
    region: &str,
    ip_prefixes: &[String],
) -> Result<()> {
    writeln!(out, "Service: {service}")?;
    writeln!(out, "Region: {region}")?;
    writeln!(out, "IP Ranges:")?;
    for ip_prefix in ip_prefixes {
        writeln!(out, "{ip_prefix}")?;
    }

    Ok(())
}

/// Rewrite CIDR prefixes as `network mask` pairs. Fails on the first prefix that is not valid
/// CIDR notation, before anything is printed.
pub fn in_netmask_format(ip_prefixes: &[String]) -> Result<Vec<String>> {
    ip_prefixes
        .iter()
        .map(|ip_prefix| {
            ip_prefix
                .parse::<IpNetwork>()
                .map(|network| format!("{} {}", network.network(), network.mask()))
                .map_err(|_| Error::InvalidPrefix(ip_prefix.clone()))
        })
        .collect()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    fn test_index() -> ServiceRegionIndex {
        let mut index = ServiceRegionIndex::default();
        index.insert("S3", "us-east-1");
        index.insert("EC2", "us-west-2");
        index.insert("EC2", "us-east-1");
        index
    }

    #[test]
    fn test_catalog_text() {
        let mut out = Vec::new();
        catalog_text(&mut out, &test_index()).unwrap();

        let expected = "\
Please run the application specifying -service and -region with a combination listed below:

-----------------------
Service: EC2
Regions: [us-east-1 us-west-2]
-----------------------
Service: S3
Regions: [us-east-1]
-----------------------
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_catalog_text_empty_index() {
        let mut out = Vec::new();
        catalog_text(&mut out, &ServiceRegionIndex::default()).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(output.ends_with("-----------------------\n"));
    }

    #[test]
    fn test_catalog_table() {
        let mut out = Vec::new();
        catalog_table(&mut out, &test_index()).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("EC2"));
        assert!(output.contains("us-east-1, us-west-2"));
        assert!(output.contains("S3"));
    }

    #[test]
    fn test_ranges() {
        let mut out = Vec::new();
        let ip_prefixes = vec!["10.0.0.0/8".to_string(), "10.2.0.0/16".to_string()];
        ranges(&mut out, "EC2", "us-east-1", &ip_prefixes).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Service: EC2\nRegion: us-east-1\nIP Ranges:\n10.0.0.0/8\n10.2.0.0/16\n"
        );
    }

    #[test]
    fn test_in_netmask_format() {
        let ip_prefixes = vec!["10.0.0.0/8".to_string(), "192.168.1.0/24".to_string()];
        assert_eq!(
            in_netmask_format(&ip_prefixes).unwrap(),
            ["10.0.0.0 255.0.0.0", "192.168.1.0 255.255.255.0"]
        );
    }

    #[test]
    fn test_in_netmask_format_invalid_prefix() {
        let ip_prefixes = vec!["10.0.0.0/8".to_string(), "not-a-prefix".to_string()];
        match in_netmask_format(&ip_prefixes) {
            Err(Error::InvalidPrefix(ip_prefix)) => assert_eq!(ip_prefix, "not-a-prefix"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
