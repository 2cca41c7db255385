use std::io;

use textwave::{ApiKey, ContactImportEntry, ImportContactsOptions, TextWaveClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("TEXTWAVE_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTWAVE_API_KEY environment variable is required",
        )
    })?;
    let phones = std::env::var("TEXTWAVE_PHONES").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTWAVE_PHONES environment variable is required (comma-separated numbers)",
        )
    })?;

    let entries = phones
        .split(',')
        .map(|phone| ContactImportEntry::new(phone.trim()))
        .collect::<Vec<_>>();

    let client = TextWaveClient::new(ApiKey::new(api_key)?);
    let outcome = client
        .contacts()
        .import_contacts(
            &entries,
            ImportContactsOptions {
                list_id: std::env::var("TEXTWAVE_LIST_ID").ok(),
                opted_in_at: None,
            },
        )
        .await?;

    println!(
        "imported: {}, skipped duplicates: {}, errors: {}",
        outcome.imported, outcome.skipped_duplicates, outcome.total_errors
    );

    Ok(())
}
