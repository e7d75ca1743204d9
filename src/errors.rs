use thiserror::Error;

/// Failure taxonomy for a standings load. The tokenizer, text utilities and
/// outcome classifier are total functions; the loader is the sole failure
/// boundary and maps everything it sees onto these variants.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Connectivity failure or a non-2xx HTTP status from the sheet host.
    #[error("sheet request failed{}: {message}", status_suffix(.status))]
    Network { status: Option<u16>, message: String },

    /// The response body looks like an HTML page rather than CSV. This is
    /// what a misconfigured or rate-limited publish link returns.
    #[error(
        "sheet returned an HTML page instead of CSV; check that the \
         spreadsheet is published to the web as CSV"
    )]
    Format,

    /// The payload could not be interpreted as a standings sheet at all.
    #[error("could not parse standings sheet: {0}")]
    Parse(String),
}

impl LoadError {
    pub fn status(status: u16) -> Self {
        LoadError::Network {
            status: Some(status),
            message: format!("HTTP status {status}"),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        LoadError::Network {
            status: None,
            message: message.into(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" with status {code}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_mentions_status() {
        let err = LoadError::status(502);
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn connection_error_keeps_message() {
        let err = LoadError::connection("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }
}
