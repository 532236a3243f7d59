use crate::domain::validation::ValidationError;
use crate::domain::value::{CountryPrefix, MessageText, RawPhoneNumber, SenderId};

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Sender override chosen by the user for this one message. When absent,
    /// the request's default sender is used.
    pub custom_sender: Option<SenderId>,
}

#[derive(Debug, Clone)]
/// One outbound message as handed over by the dispatching host.
///
/// The recipient list is kept as supplied; the gateway accepts a single
/// destination per request, so only the first entry ends up on the wire.
pub struct SendSms {
    default_prefix: CountryPrefix,
    recipients: Vec<RawPhoneNumber>,
    text: MessageText,
    default_sender: SenderId,
    options: SendOptions,
}

impl SendSms {
    pub fn new(
        default_prefix: CountryPrefix,
        recipients: Vec<RawPhoneNumber>,
        text: MessageText,
        default_sender: SenderId,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        Ok(Self {
            default_prefix,
            recipients,
            text,
            default_sender,
            options,
        })
    }

    pub fn default_prefix(&self) -> &CountryPrefix {
        &self.default_prefix
    }

    pub fn recipients(&self) -> &[RawPhoneNumber] {
        &self.recipients
    }

    /// The recipient that is actually sent to the gateway.
    ///
    /// Non-emptiness is enforced by [`SendSms::new`].
    pub fn recipient(&self) -> &RawPhoneNumber {
        &self.recipients[0]
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn default_sender(&self) -> &SenderId {
        &self.default_sender
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}
