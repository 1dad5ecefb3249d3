// Report adapter: machine-readable results and the human-readable report.
use crate::model::{Grouping, Listing};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// One JSON object per catalog product per line, in catalog order.
pub fn write_results(grouping: &Grouping, path: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    render_results(grouping, &mut out)?;
    out.flush()
}

fn render_results(grouping: &Grouping, out: &mut impl Write) -> io::Result<()> {
    for entry in grouping.entries() {
        let line = serde_json::to_string(entry)?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Titles grouped per product, then the unmatched listings, then whatever
/// the price filter removed.
pub fn write_report(grouping: &Grouping, removed: &[Listing], path: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    render_report(grouping, removed, &mut out)?;
    out.flush()
}

fn render_report(grouping: &Grouping, removed: &[Listing], out: &mut impl Write) -> io::Result<()> {
    for entry in grouping.entries() {
        writeln!(out, "{}", entry.product_name)?;
        for listing in &entry.listings {
            writeln!(out, "{}", listing.title)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "Unmatched")?;
    for listing in &grouping.unmatched {
        writeln!(out, "{}", listing.title)?;
    }
    writeln!(out)?;
    writeln!(out, "Removed")?;
    for listing in removed {
        writeln!(out, "{}", listing.title)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grouping;

    fn listing(title: &str) -> Listing {
        Listing {
            title: title.to_string(),
            manufacturer: "Sony".to_string(),
            currency: "USD".to_string(),
            price: "99.99".to_string(),
            product_name: None,
        }
    }

    fn sample_grouping() -> Grouping {
        let mut grouping = Grouping::new(["Sony_DSC-W310".to_string(), "Canon_SD980".to_string()]);
        grouping.push("Sony_DSC-W310", listing("Sony DSC-W310 Camera"));
        grouping.unmatched.push(listing("WOWWEE Mini combo pack"));
        grouping
    }

    #[test]
    fn results_are_one_json_object_per_product() {
        let mut buf = Vec::new();
        render_results(&sample_grouping(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["product_name"], "Sony_DSC-W310");
        assert_eq!(first["listings"][0]["title"], "Sony DSC-W310 Camera");

        // Empty buckets still get a line, unmatched listings get none.
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["product_name"], "Canon_SD980");
        assert_eq!(second["listings"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn report_lists_groups_unmatched_and_removed() {
        let mut buf = Vec::new();
        render_report(&sample_grouping(), &[listing("cheap battery")], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let expected = "Sony_DSC-W310\n\
                        Sony DSC-W310 Camera\n\
                        \n\
                        Canon_SD980\n\
                        \n\
                        Unmatched\n\
                        WOWWEE Mini combo pack\n\
                        \n\
                        Removed\n\
                        cheap battery\n";
        assert_eq!(text, expected);
    }
}
