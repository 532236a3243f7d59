use std::io;

use smspilot::{Credentials, SmsPilotClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SMSPILOT_APIKEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSPILOT_APIKEY environment variable is required",
        )
    })?;

    let client = SmsPilotClient::new(Credentials::api_key(api_key)?);
    let response = client.check_balance().await?;
    println!("balance: {:?}", response.balance);

    Ok(())
}
