//! Typed Rust client for the SMSPilot (smspilot.ru) HTTP gateway.
//!
//! The design is layered: a domain layer of strong types, a transport layer
//! for the gateway's wire-format quirks (form fields and the line-oriented
//! plain-text responses of the legacy `api.php` endpoint), and a small client
//! layer orchestrating requests.
//!
//! ```rust,no_run
//! use smspilot::{
//!     CountryPrefix, Credentials, MessageText, RawPhoneNumber, SendOptions, SendSms, SenderId,
//!     SmsPilotClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smspilot::SmsPilotError> {
//!     let client = SmsPilotClient::new(Credentials::api_key("...")?);
//!     let request = SendSms::new(
//!         CountryPrefix::new("49")?,
//!         vec![RawPhoneNumber::new("+49123456789")?],
//!         MessageText::new("hello")?,
//!         SenderId::new("491701234567")?,
//!         SendOptions::default(),
//!     )?;
//!     let response = client.send_sms(&request).await?;
//!     println!("balance: {:?}", response.balance);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use client::{Credentials, SmsPilotClient, SmsPilotClientBuilder, SmsPilotError};
pub use config::{ConnectorStatus, Settings};
pub use domain::{
    ApiKey, BalanceResponse, CountryPrefix, MessageText, Password, RawPhoneNumber, SendOptions,
    SendSms, SendSmsResponse, SenderId, ValidationError,
};
