use crate::domain::{CountryPrefix, MessageText, RawPhoneNumber, SendSms, SenderId};

/// Encode the operation-specific fields of a send request.
///
/// Credential fields (`apikey`, `password`) are pushed by the client before
/// these. The gateway takes exactly one destination, so only the first
/// recipient of the request is encoded.
pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    vec![
        (
            RawPhoneNumber::FIELD.to_owned(),
            gateway_recipient(request.default_prefix(), request.recipient()),
        ),
        (SenderId::FIELD.to_owned(), gateway_sender(request)),
        (
            MessageText::FIELD.to_owned(),
            request.text().as_str().to_owned(),
        ),
    ]
}

/// Normalize a recipient to the bare international digit string the gateway
/// expects: internationalize with the default prefix, then drop the leading
/// `+` or `00`.
fn gateway_recipient(prefix: &CountryPrefix, number: &RawPhoneNumber) -> String {
    strip_international_prefix(&national2international(prefix, number.raw())).to_owned()
}

/// Convert a national number to international form using the default prefix.
///
/// Inputs that already carry an international prefix (`+`, `00`, or the bare
/// prefix digits) are preserved, which makes the conversion idempotent.
fn national2international(prefix: &CountryPrefix, number: &str) -> String {
    if number.starts_with('+') {
        number.to_owned()
    } else if let Some(rest) = number.strip_prefix("00") {
        format!("+{rest}")
    } else if let Some(rest) = number.strip_prefix('0') {
        format!("+{}{rest}", prefix.digits())
    } else if number.starts_with(prefix.digits()) {
        format!("+{number}")
    } else {
        format!("+{}{number}", prefix.digits())
    }
}

fn strip_international_prefix(number: &str) -> &str {
    if let Some(rest) = number.strip_prefix('+') {
        rest
    } else if let Some(rest) = number.strip_prefix("00") {
        rest
    } else {
        number
    }
}

/// Pick and normalize the sender: the custom sender when one was supplied,
/// otherwise the request's default. International form is rewritten to the
/// legacy old format (`+X` -> `00X`) and the leading `00` is then dropped,
/// since the gateway wants bare digits here as well. Alphanumeric senders
/// pass through unchanged.
fn gateway_sender(request: &SendSms) -> String {
    let sender = request
        .options()
        .custom_sender
        .as_ref()
        .unwrap_or(request.default_sender());

    let old_format = match sender.as_str().strip_prefix('+') {
        Some(rest) => format!("00{rest}"),
        None => sender.as_str().to_owned(),
    };
    match old_format.strip_prefix("00") {
        Some(rest) => rest.to_owned(),
        None => old_format,
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{SendOptions, SendSms};

    use super::*;

    fn request(recipient: &str, custom_sender: Option<&str>) -> SendSms {
        SendSms::new(
            CountryPrefix::new("49").unwrap(),
            vec![RawPhoneNumber::new(recipient).unwrap()],
            MessageText::new("hello").unwrap(),
            SenderId::new("+491701234567").unwrap(),
            SendOptions {
                custom_sender: custom_sender.map(|s| SenderId::new(s).unwrap()),
            },
        )
        .unwrap()
    }

    #[test]
    fn encode_send_form_params() {
        let params = encode_send_sms_form(&request("+49123456789", None));
        assert_eq!(
            params,
            vec![
                ("to".to_owned(), "49123456789".to_owned()),
                ("from".to_owned(), "491701234567".to_owned()),
                ("send".to_owned(), "hello".to_owned()),
            ]
        );
    }

    #[test]
    fn recipient_plus_prefix_is_stripped() {
        let params = encode_send_sms_form(&request("+49123456789", None));
        assert_eq!(params[0], ("to".to_owned(), "49123456789".to_owned()));
    }

    #[test]
    fn recipient_double_zero_prefix_is_stripped() {
        let params = encode_send_sms_form(&request("0049123456789", None));
        assert_eq!(params[0], ("to".to_owned(), "49123456789".to_owned()));
    }

    #[test]
    fn national_recipient_gets_the_default_prefix() {
        let params = encode_send_sms_form(&request("0171234567", None));
        assert_eq!(params[0], ("to".to_owned(), "49171234567".to_owned()));
    }

    #[test]
    fn recipient_normalization_is_idempotent_on_bare_numbers() {
        let prefix = CountryPrefix::new("49").unwrap();
        let once = gateway_recipient(&prefix, &RawPhoneNumber::new("171234567").unwrap());
        let twice = gateway_recipient(&prefix, &RawPhoneNumber::new(once.clone()).unwrap());
        assert_eq!(once, twice);
        assert_eq!(once, "49171234567");
    }

    #[test]
    fn custom_sender_wins_over_the_default() {
        let params = encode_send_sms_form(&request("+49123456789", Some("MYSHOP")));
        assert_eq!(params[1], ("from".to_owned(), "MYSHOP".to_owned()));
    }

    #[test]
    fn numeric_senders_lose_their_international_prefix() {
        let params = encode_send_sms_form(&request("+49123456789", Some("+79251234567")));
        assert_eq!(params[1], ("from".to_owned(), "79251234567".to_owned()));

        let params = encode_send_sms_form(&request("+49123456789", Some("0079251234567")));
        assert_eq!(params[1], ("from".to_owned(), "79251234567".to_owned()));
    }
}
