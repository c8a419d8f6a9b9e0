use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::model::{Expense, ExpenseId, NewExpense, Statistics};

pub fn expenses_url(base: &str) -> String {
    format!("{}/api/expenses", base.trim_end_matches('/'))
}

pub fn expense_url(base: &str, id: ExpenseId) -> String {
    format!("{}/{}", expenses_url(base), id)
}

pub fn stats_url(base: &str) -> String {
    format!("{}/api/stats", base.trim_end_matches('/'))
}

/// The expense REST API. Futures are not `Send`: everything runs on the
/// browser's event loop.
#[async_trait(?Send)]
pub trait ExpenseApi {
    async fn list(&self) -> Result<Vec<Expense>, ApiError>;
    /// `Ok(None)` when the server accepted the expense but did not echo it back.
    async fn create(&self, expense: &NewExpense) -> Result<Option<Expense>, ApiError>;
    async fn remove(&self, id: ExpenseId) -> Result<(), ApiError>;
    async fn stats(&self) -> Result<Statistics, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpExpenseApi {
    base: String,
}

impl HttpExpenseApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Rejected { status, body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_ok(response).await?;
    Ok(response.json::<T>().await?)
}

/// Reads a successful create reply. Servers that only acknowledge the write,
/// e.g. with `{"success": true}`, yield `None`.
pub fn parse_created(body: &str) -> Option<Expense> {
    match serde_json::from_str::<Expense>(body) {
        Ok(expense) => Some(expense),
        Err(err) => {
            debug!("create reply is not an expense: {err}");
            None
        }
    }
}

fn logged<T>(method: &str, url: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        error!("{method} {url} failed: {err}");
    }
    result
}

#[async_trait(?Send)]
impl ExpenseApi for HttpExpenseApi {
    async fn list(&self) -> Result<Vec<Expense>, ApiError> {
        let url = expenses_url(&self.base);
        debug!("GET {url}");
        let result: Result<Vec<Expense>, ApiError> =
            async { decode(Request::get(&url).send().await?).await }.await;
        logged("GET", &url, result)
    }

    async fn create(&self, expense: &NewExpense) -> Result<Option<Expense>, ApiError> {
        let url = expenses_url(&self.base);
        debug!("POST {url}: {expense:?}");
        let result: Result<Option<Expense>, ApiError> = async {
            let response = Request::post(&url).json(expense)?.send().await?;
            let body = ensure_ok(response).await?.text().await?;
            Ok(parse_created(&body))
        }
        .await;
        logged("POST", &url, result)
    }

    async fn remove(&self, id: ExpenseId) -> Result<(), ApiError> {
        let url = expense_url(&self.base, id);
        debug!("DELETE {url}");
        let result: Result<(), ApiError> = async {
            ensure_ok(Request::delete(&url).send().await?).await?;
            Ok(())
        }
        .await;
        logged("DELETE", &url, result)
    }

    async fn stats(&self) -> Result<Statistics, ApiError> {
        let url = stats_url(&self.base);
        debug!("GET {url}");
        let result: Result<Statistics, ApiError> =
            async { decode(Request::get(&url).send().await?).await }.await;
        logged("GET", &url, result)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_same_origin_urls() {
        assert_eq!(expenses_url(""), "/api/expenses");
        assert_eq!(expense_url("", 42), "/api/expenses/42");
        assert_eq!(stats_url(""), "/api/stats");
    }

    #[test]
    fn trims_trailing_slash_from_base() {
        assert_eq!(
            expense_url("http://localhost:5000/", 7),
            "http://localhost:5000/api/expenses/7"
        );
        assert_eq!(stats_url("http://localhost:5000"), "http://localhost:5000/api/stats");
    }

    #[test]
    fn create_reply_may_be_an_acknowledgement() {
        assert_eq!(parse_created(r#"{"success": true}"#), None);
        assert_eq!(parse_created(""), None);

        let created = parse_created(
            r#"{"id": 7, "description": "Tea", "amount": 2.5, "category": "Food", "date": "2024-01-01"}"#,
        );
        assert_eq!(created.and_then(|expense| expense.id), Some(7));
    }
}
