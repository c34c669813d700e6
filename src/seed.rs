use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::reviews::{Review, TIMESTAMP_FORMAT};

#[derive(Debug, Deserialize)]
struct SeedRow {
    #[serde(rename = "ReviewId", default)]
    id: Option<String>,
    #[serde(rename = "ReviewBody")]
    body: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Timestamp")]
    timestamp: String,
}

/// Loads the startup review set from a CSV file. Seed rows bypass the
/// location allow-list, but timestamps must parse so date filtering stays
/// total over the store. Columns beyond the known ones are ignored.
pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut reviews = Vec::new();
    for (index, row) in reader.deserialize::<SeedRow>().enumerate() {
        let line = index + 2; // header occupies line 1
        let row = row.with_context(|| format!("malformed seed row at line {line}"))?;
        let timestamp = NaiveDateTime::parse_from_str(&row.timestamp, TIMESTAMP_FORMAT)
            .with_context(|| format!("unparseable timestamp at line {line}"))?;

        reviews.push(Review {
            id: row.id,
            body: row.body,
            location: row.location,
            timestamp,
        });
    }

    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_without_review_ids() {
        let file = write_csv(
            "ReviewBody,Location,Timestamp\n\
             Great pool,\"Denver, Colorado\",2024-03-01 09:15:00\n\
             Noisy street,\"San Diego, California\",2024-03-05 21:40:10\n",
        );

        let reviews = load_reviews(file.path()).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].id, None);
        assert_eq!(reviews[0].body, "Great pool");
        assert_eq!(reviews[1].location, "San Diego, California");
    }

    #[test]
    fn keeps_supplied_review_ids_and_ignores_extra_columns() {
        let file = write_csv(
            "ReviewId,ReviewBody,Location,Timestamp,Rating\n\
             abc-123,Great pool,\"Denver, Colorado\",2024-03-01 09:15:00,5\n",
        );

        let reviews = load_reviews(file.path()).unwrap();
        assert_eq!(reviews[0].id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn seed_rows_skip_location_validation() {
        let file = write_csv(
            "ReviewBody,Location,Timestamp\n\
             Fine,\"Roswell, New Mexico\",2024-04-11 08:30:00\n",
        );

        let reviews = load_reviews(file.path()).unwrap();
        assert_eq!(reviews[0].location, "Roswell, New Mexico");
    }

    #[test]
    fn malformed_timestamp_fails_loading() {
        let file = write_csv(
            "ReviewBody,Location,Timestamp\n\
             Great pool,\"Denver, Colorado\",March 1st 2024\n",
        );

        let err = load_reviews(file.path()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_reviews(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }
}
