use serde::{Deserialize, Serialize};

/// Placeholder stored in any field the listing markup did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// One scraped job posting. Field order matches the export column order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Listing {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Deadline")]
    pub deadline: String,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Job Link")]
    pub job_link: String,
}

impl Listing {
    /// Spreadsheet header, in the same order as [`Listing::values`].
    pub const COLUMNS: [&'static str; 7] = [
        "Title",
        "Company",
        "Location",
        "Experience",
        "Deadline",
        "Education",
        "Job Link",
    ];

    pub fn values(&self) -> [&str; 7] {
        [
            &self.title,
            &self.company,
            &self.location,
            &self.experience,
            &self.deadline,
            &self.education,
            &self.job_link,
        ]
    }

    /// True when no field was found in the markup.
    pub fn is_blank(&self) -> bool {
        self.values().iter().all(|v| *v == NOT_AVAILABLE)
    }
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            title: NOT_AVAILABLE.to_string(),
            company: NOT_AVAILABLE.to_string(),
            location: NOT_AVAILABLE.to_string(),
            experience: NOT_AVAILABLE.to_string(),
            deadline: NOT_AVAILABLE.to_string(),
            education: NOT_AVAILABLE.to_string(),
            job_link: NOT_AVAILABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_placeholders() {
        let listing = Listing::default();
        assert!(listing.is_blank());
        assert!(listing.values().iter().all(|v| *v == "N/A"));
    }

    #[test]
    fn test_single_field_makes_listing_non_blank() {
        let listing = Listing {
            company: "Acme Ltd".to_string(),
            ..Listing::default()
        };
        assert!(!listing.is_blank());
        assert_eq!(listing.values()[1], "Acme Ltd");
    }

    #[test]
    fn test_json_keys_match_columns() {
        let json = serde_json::to_value(Listing::default()).unwrap();
        let object = json.as_object().unwrap();
        for column in Listing::COLUMNS {
            assert!(object.contains_key(column), "missing key {column}");
        }
        assert_eq!(object.len(), Listing::COLUMNS.len());
    }
}
