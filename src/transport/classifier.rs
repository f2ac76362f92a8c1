use crate::constants::{RESPONSE_PREAMBLE_LEN, TRANSPORT_TIMEOUT_CODE};
use crate::error::RequestError;
use crate::model::http::{ResponseEnvelope, TransportOutcome};

/// Turns a transport outcome into an envelope or a typed error.
///
/// First match wins:
/// 1. timeout code with status `0` is a [`RequestError::Timeout`]
/// 2. any other non-zero code is a [`RequestError::Connection`]
/// 3. everything else is an envelope, whatever the HTTP status
pub fn classify(outcome: TransportOutcome, timeout_secs: u64) -> Result<ResponseEnvelope, RequestError> {
    if outcome.error_code == TRANSPORT_TIMEOUT_CODE && outcome.status == 0 {
        return Err(RequestError::Timeout { timeout_secs });
    }

    if outcome.error_code != 0 {
        return Err(RequestError::Connection {
            code: outcome.error_code,
            message: outcome.error_message,
        });
    }

    Ok(ResponseEnvelope {
        status: outcome.status,
        body: strip_preamble(&outcome.response),
    })
}

/// Drops the first [`RESPONSE_PREAMBLE_LEN`] characters.
///
/// Applied to every response although requests send
/// `X-Strip-Leading-Brackets: false`; the server keeps prefixing bodies.
fn strip_preamble(response: &str) -> String {
    match response.char_indices().nth(RESPONSE_PREAMBLE_LEN) {
        Some((index, _)) => response[index..].to_string(),
        None => String::new(),
    }
}
