use std::fs;
use std::path::Path;

use common::Listing;
use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::error::Result;

const SHEET_NAME: &str = "Jobs";

/// Writes a header row plus one row per listing. Returns the number of data
/// rows written.
pub fn write_xlsx(path: &Path, listings: &[Listing]) -> Result<usize> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, column) in Listing::COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *column, &header_format)?;
    }

    for (index, listing) in listings.iter().enumerate() {
        let row = index as u32 + 1;
        for (col, value) in listing.values().iter().enumerate() {
            worksheet.write_string(row, col as u16, *value)?;
        }
    }

    create_parent_dir(path)?;
    workbook.save(path)?;

    info!(rows = listings.len(), path = %path.display(), "saved spreadsheet");
    Ok(listings.len())
}

/// Same rows as the spreadsheet, as a pretty-printed JSON array.
pub fn write_json(path: &Path, listings: &[Listing]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(listings)?;

    create_parent_dir(path)?;
    fs::write(path, json_output)?;

    info!(rows = listings.len(), path = %path.display(), "saved JSON copy");
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Reader, Xlsx};
    use tempfile::TempDir;

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    fn sample(title: &str) -> Listing {
        Listing {
            title: title.to_string(),
            company: "Acme Ltd".to_string(),
            ..Listing::default()
        }
    }

    #[test]
    fn test_write_xlsx_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.xlsx");
        let listings = vec![sample("Driver"), sample("Clerk"), sample("Chef")];

        let written = write_xlsx(&path, &listings).unwrap();
        let rows = read_rows(&path);

        assert_eq!(written, 3);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], Listing::COLUMNS.map(String::from).to_vec());
        assert_eq!(rows[1][0], "Driver");
        assert_eq!(rows[3][0], "Chef");
        assert_eq!(rows[2][1], "Acme Ltd");
        assert_eq!(rows[2][6], "N/A");
    }

    #[test]
    fn test_write_xlsx_with_no_listings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.xlsx");

        assert_eq!(write_xlsx(&path, &[]).unwrap(), 0);
        let rows = read_rows(&path);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], Listing::COLUMNS.map(String::from).to_vec());
    }

    #[test]
    fn test_write_json_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("jobs.json");
        let listings = vec![sample("Driver"), sample("Clerk")];

        write_json(&path, &listings).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Listing> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, listings);
        assert!(content.contains("\"Job Link\": \"N/A\""));
    }
}
