#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("empty gateway response")]
    EmptyResponse,

    /// The first response line did not signal success; the line itself is the
    /// gateway's human-readable error message.
    #[error("{message}")]
    Gateway { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded plain-text gateway report.
pub struct PlainReport {
    pub balance: Option<String>,
}

/// Decode the gateway's line-oriented plain-text response.
///
/// The wire contract:
/// - success: first line starts with the literal `SUCCESS`; optional later
///   lines `balance=<value>` and `status=<code>`,
/// - failure: the first line is the error message, verbatim.
///
/// The balance value is everything after the last `=` of the first `balance`
/// line (a line without `=` is taken whole). Unless `hide_api_status` is set,
/// the first `status` line is appended to it, prefixed with `" API"`. A
/// result that is blank after trimming decodes as success without a balance.
pub fn decode_plain_report(
    body: &str,
    hide_api_status: bool,
) -> Result<PlainReport, TransportError> {
    if body.is_empty() {
        return Err(TransportError::EmptyResponse);
    }

    let mut lines = body.split('\n');
    let Some(first) = lines.next() else {
        return Err(TransportError::EmptyResponse);
    };
    if !first.starts_with("SUCCESS") {
        return Err(TransportError::Gateway {
            message: first.to_owned(),
        });
    }

    let rest: Vec<&str> = lines.collect();
    let mut balance = String::new();
    if let Some(line) = rest.iter().find(|line| line.starts_with("balance")) {
        balance.push_str(value_after_last_eq(line));
    }
    if !hide_api_status {
        if let Some(line) = rest.iter().find(|line| line.starts_with("status")) {
            balance.push_str(" API");
            balance.push_str(line);
        }
    }

    let balance = if balance.trim().is_empty() {
        None
    } else {
        Some(balance)
    };
    Ok(PlainReport { balance })
}

fn value_after_last_eq(line: &str) -> &str {
    match line.rsplit_once('=') {
        Some((_, value)) => value,
        None => line,
    }
}
