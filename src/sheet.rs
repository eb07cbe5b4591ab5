use std::collections::HashMap;

use anyhow::{Context, Result};

/// One record from the content sheet, keyed by the CSV header names.
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Returns the trimmed value of a column, or "" if the column is absent
    /// (short rows simply miss their trailing columns).
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(|v| v.trim()).unwrap_or("")
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Row {
        let fields = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Row { fields }
    }
}

/// Downloads the sheet export and parses it. Any transport error, non-2xx
/// status or CSV error aborts the run.
pub fn fetch_rows(url: &str) -> Result<Vec<Row>> {
    let client = reqwest::blocking::Client::builder().build()?;
    let resp = client.get(url)
        .send()
        .with_context(|| format!("Error fetching content sheet from {}", url))?
        .error_for_status()
        .with_context(|| "Content sheet request failed")?;

    // Invalid UTF-8 is replaced, not rejected, same as the sheet exporter
    let text = resp.text().with_context(|| "Error reading content sheet body")?;

    parse_rows(text.as_str())
}

/// The first record names the columns. Rows with a different field count are
/// accepted; extra fields have no header and are dropped.
pub fn parse_rows(text: &str) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()
        .with_context(|| "Error reading content sheet header")?
        .clone();

    let mut rows = vec![];
    for record in reader.records() {
        let record = record.with_context(|| "Error parsing content sheet row")?;

        let mut fields = HashMap::new();
        for (i, name) in headers.iter().enumerate() {
            if let Some(value) = record.get(i) {
                fields.insert(name.to_string(), value.to_string());
            }
        }
        rows.push(Row { fields });
    }

    Ok(rows)
}
