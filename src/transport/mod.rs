//! Transport layer: form encoding and the plain-text wire format.

mod balance;
mod report;
mod send;

pub use balance::encode_check_balance_form;
pub use report::{PlainReport, TransportError, decode_plain_report};
pub use send::encode_send_sms_form;
