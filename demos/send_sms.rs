use std::io;

use smspilot::{
    CountryPrefix, Credentials, MessageText, RawPhoneNumber, SendOptions, SendSms, SenderId,
    SmsPilotClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SMSPILOT_APIKEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSPILOT_APIKEY environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("SMSPILOT_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSPILOT_PHONE environment variable is required",
        )
    })?;
    let sender = std::env::var("SMSPILOT_SENDER").unwrap_or_else(|_| "INFORM".to_owned());
    let prefix = std::env::var("SMSPILOT_PREFIX").unwrap_or_else(|_| "7".to_owned());
    let message = std::env::var("SMSPILOT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smspilot demo.".to_owned());

    let client = SmsPilotClient::new(Credentials::api_key(api_key)?);
    let request = SendSms::new(
        CountryPrefix::new(prefix)?,
        vec![RawPhoneNumber::new(phone_raw)?],
        MessageText::new(message)?,
        SenderId::new(sender)?,
        SendOptions::default(),
    )?;

    let response = client.send_sms(&request).await?;
    println!("sent, balance: {:?}", response.balance);

    Ok(())
}
