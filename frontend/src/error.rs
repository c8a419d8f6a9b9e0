use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("{}", rejection_text(.status, .body))]
    Rejected { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

fn rejection_text(status: &u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please enter a description.")]
    MissingDescription,
    #[error("Please choose a category.")]
    MissingCategory,
    #[error("Please pick a date.")]
    MissingDate,
    #[error("Amount must be a number, got \"{0}\".")]
    InvalidAmount(String),
    #[error("Amount cannot be negative.")]
    NegativeAmount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_shows_server_body() {
        let err = ApiError::Rejected {
            status: 400,
            body: "description required\n".to_string(),
        };
        assert_eq!(err.to_string(), "description required");
    }

    #[test]
    fn rejected_without_body_shows_status() {
        let err = ApiError::Rejected {
            status: 502,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP 502");
    }
}
