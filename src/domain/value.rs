use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMSPilot `apikey` token.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by SMSPilot (`apikey`).
    pub const FIELD: &'static str = "apikey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMSPilot `password` form field.
///
/// The legacy `api.php` endpoint requires the field to be present but ignores
/// its value when an `apikey` is supplied; [`Password::placeholder`] is what
/// accounts authenticated by API key send.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Form field name used by SMSPilot (`password`).
    pub const FIELD: &'static str = "password";

    /// Static filler value sent alongside an API key.
    pub const PLACEHOLDER: &'static str = "xxx";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// The placeholder password used with API-key authentication.
    pub fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.to_owned())
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMSPilot sender id (`from`).
///
/// Either an alphanumeric name enabled in your SMSPilot account or a phone
/// number. Numeric senders are rewritten to the gateway's bare-digit form at
/// encode time.
///
/// Invariant: non-empty after trimming.
pub struct SenderId(String);

impl SenderId {
    /// Form field name used by SMSPilot (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`send`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by SMSPilot (`send`).
    pub const FIELD: &'static str = "send";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number as supplied by the caller (`to`), pre-normalization.
///
/// Invariant: non-empty after trimming. This type does not normalize; the
/// transport layer converts it to the bare international digit string the
/// gateway expects.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by SMSPilot (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as supplied by the caller.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Default country prefix used to internationalize national numbers.
///
/// Stored as bare digits: a leading `+` or `00` on the input is dropped.
///
/// Invariant: non-empty, ASCII digits only after stripping.
pub struct CountryPrefix(String);

impl CountryPrefix {
    /// Create a validated [`CountryPrefix`] from e.g. `"49"`, `"+49"` or `"0049"`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix('+')
            .or_else(|| trimmed.strip_prefix("00"))
            .unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidCountryPrefix {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(digits.to_owned()))
    }

    /// The prefix as bare digits, without `+` or `00`.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let api_key = ApiKey::new("  key ").unwrap();
        assert_eq!(api_key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let sender = SenderId::new(" sender ").unwrap();
        assert_eq!(sender.as_str(), "sender");
        assert!(SenderId::new("   ").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());
    }

    #[test]
    fn password_placeholder_is_the_gateway_filler() {
        assert_eq!(Password::placeholder().as_str(), "xxx");
    }

    #[test]
    fn raw_phone_number_trims_and_exposes_raw() {
        let raw = RawPhoneNumber::new(" +79251234567 ").unwrap();
        assert_eq!(raw.raw(), "+79251234567");
        assert!(RawPhoneNumber::new("").is_err());
    }

    #[test]
    fn country_prefix_strips_plus_and_double_zero() {
        assert_eq!(CountryPrefix::new("49").unwrap().digits(), "49");
        assert_eq!(CountryPrefix::new("+49").unwrap().digits(), "49");
        assert_eq!(CountryPrefix::new("0049").unwrap().digits(), "49");
        assert_eq!(CountryPrefix::new(" 7 ").unwrap().digits(), "7");
    }

    #[test]
    fn country_prefix_rejects_non_digits() {
        assert!(CountryPrefix::new("").is_err());
        assert!(CountryPrefix::new("+").is_err());
        assert!(CountryPrefix::new("4a").is_err());
    }
}
