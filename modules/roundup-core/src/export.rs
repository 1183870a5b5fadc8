//! Export of the canonical collection for offline use: one CSV with a row
//! per review, and per-platform JSON files matching the batch-export layout.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::types::{CanonicalReview, Platform};

/// Write the collection as CSV, one row per review, canonical columns.
/// Absent dates, names, and ratings become empty fields.
pub fn write_csv<W: Write>(writer: W, reviews: &[CanonicalReview]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for review in reviews {
        wtr.serialize(review)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read back a CSV written by [`write_csv`].
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<CanonicalReview>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut reviews = Vec::new();
    for record in rdr.deserialize() {
        reviews.push(record?);
    }
    Ok(reviews)
}

/// Write one `{platform}_reviews_normalized.json` file per platform present
/// in the collection. Returns the paths written.
pub fn write_platform_json(dir: &Path, reviews: &[CanonicalReview]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for platform in Platform::ALL {
        let subset: Vec<&CanonicalReview> = reviews
            .iter()
            .filter(|r| r.platform == platform)
            .collect();
        if subset.is_empty() {
            continue;
        }

        let path = dir.join(format!("{}_reviews_normalized.json", platform.slug()));
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &subset)?;

        info!(platform = %platform, count = subset.len(), path = %path.display(), "Wrote platform export");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Platform;
    use chrono::NaiveDate;

    fn sample() -> Vec<CanonicalReview> {
        vec![
            CanonicalReview {
                platform: Platform::Booking,
                review_date: Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
                reviewer_name: Some("Alice".to_string()),
                star_rating: Some(4.0),
                review_text: "Title: Great stay\nLiked: Clean".to_string(),
                replied: false,
            },
            CanonicalReview {
                platform: Platform::Google,
                review_date: None,
                reviewer_name: None,
                star_rating: None,
                review_text: "Text with, comma and \"quotes\"".to_string(),
                replied: true,
            },
        ]
    }

    #[test]
    fn csv_round_trip_recovers_field_values() {
        let reviews = sample();
        let mut buf = Vec::new();
        write_csv(&mut buf, &reviews).unwrap();

        let restored = read_csv(buf.as_slice()).unwrap();
        assert_eq!(restored, reviews);
    }

    #[test]
    fn csv_header_lists_canonical_columns() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "platform,review_date,reviewer_name,star_rating,review_text,replied"
        );
    }

    #[test]
    fn absent_fields_round_trip_as_absent() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample()).unwrap();
        let restored = read_csv(buf.as_slice()).unwrap();

        assert_eq!(restored[1].review_date, None);
        assert_eq!(restored[1].reviewer_name, None);
        assert_eq!(restored[1].star_rating, None);
        assert!(restored[1].replied);
    }

    #[test]
    fn platform_json_writes_one_file_per_platform_present() {
        let dir = std::env::temp_dir().join(format!("roundup-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let written = write_platform_json(&dir, &sample()).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "booking_reviews_normalized.json",
                "google_reviews_normalized.json"
            ]
        );

        let body = std::fs::read_to_string(&written[0]).unwrap();
        let parsed: Vec<CanonicalReview> = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].platform, Platform::Booking);

        std::fs::remove_dir_all(&dir).ok();
    }
}
