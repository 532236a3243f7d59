//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SendOptions, SendSms};
pub use response::{BalanceResponse, SendSmsResponse};
pub use validation::ValidationError;
pub use value::{ApiKey, CountryPrefix, MessageText, Password, RawPhoneNumber, SenderId};
