use std::io;

use textwave::{ApiKey, SendVerificationOptions, TextWaveClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("TEXTWAVE_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTWAVE_API_KEY environment variable is required",
        )
    })?;
    let phone = std::env::var("TEXTWAVE_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTWAVE_PHONE environment variable is required",
        )
    })?;

    let client = TextWaveClient::new(ApiKey::new(api_key)?);
    let sent = client
        .verify()
        .send(&phone, SendVerificationOptions::default())
        .await?;

    println!(
        "verification: {:?}, status: {:?}, sandbox code: {:?}",
        sent.verification.id,
        sent.verification.status.as_ref().map(|s| s.as_str()),
        sent.code
    );

    Ok(())
}
