//! Remote sheet ledger over HTTP
//!
//! Talks to a spreadsheet-style JSON API:
//!
//! - `GET  {base}/workbooks/{workbook}/sheets/{sheet}/records` returns an
//!   array of header-keyed records
//! - `POST {base}/workbooks/{workbook}/sheets/{sheet}/rows` with
//!   `{"values": [...], "value_input": "RAW"}` appends one row. `RAW` asks
//!   the sheet to store cells verbatim, so an id like `007` is not
//!   reinterpreted as the number 7.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use shared::{decode_items, decode_votes, Item, Vote};
use tracing::debug;

use crate::config::DEFAULT_STORE_TIMEOUT;
use crate::error::{ArenaError, ArenaResult};
use crate::traits::{ItemStore, VoteStore};

#[derive(Debug, Clone)]
pub struct HttpLedgerConfig {
    pub base_url: String,
    pub workbook: String,
    pub items_sheet: String,
    pub votes_sheet: String,
    /// Sent as a bearer token when present
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl Default for HttpLedgerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8787".to_string(),
            workbook: "HotOrNotTweets".to_string(),
            items_sheet: "Tweets".to_string(),
            votes_sheet: "Votes".to_string(),
            api_token: None,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

const RAW_INPUT: &str = "RAW";

#[derive(Serialize)]
struct AppendRow<'a> {
    values: [&'a str; 3],
    value_input: &'static str,
}

pub struct HttpLedger {
    client: Client,
    base_url: Url,
    config: HttpLedgerConfig,
}

impl HttpLedger {
    pub fn new(config: HttpLedgerConfig) -> ArenaResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ArenaError::config("ledger_url", e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ArenaError::config("ledger_url", "must be an absolute http(s) URL"));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ArenaError::config("http_client", e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    pub fn config(&self) -> &HttpLedgerConfig {
        &self.config
    }

    fn sheet_url(&self, sheet: &str, action: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["workbooks", self.config.workbook.as_str(), "sheets", sheet, action]);
        }
        url
    }

    fn sheet_name(&self, sheet: &str) -> String {
        format!("{}/{}", self.config.workbook, sheet)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, sheet: &str, request: RequestBuilder) -> ArenaResult<Response> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| ArenaError::unavailable(format!("{}: {e}", self.sheet_name(sheet))))?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => Err(ArenaError::NotFound {
                name: self.sheet_name(sheet),
            }),
            status => Err(ArenaError::unavailable(format!(
                "{} returned HTTP {status}",
                self.sheet_name(sheet)
            ))),
        }
    }

    async fn fetch_records(&self, sheet: &str) -> ArenaResult<Vec<Value>> {
        let request = self.client.get(self.sheet_url(sheet, "records"));
        let body: Value = self
            .send(sheet, request)
            .await?
            .json()
            .await
            .map_err(|e| ArenaError::malformed(format!("{}: {e}", self.sheet_name(sheet))))?;

        match body {
            Value::Array(rows) => Ok(rows),
            other => Err(ArenaError::malformed(format!(
                "{}: expected an array of records, got {}",
                self.sheet_name(sheet),
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl ItemStore for HttpLedger {
    async fn fetch_all(&self) -> ArenaResult<Vec<Item>> {
        let rows = self.fetch_records(&self.config.items_sheet).await?;
        let decoded = decode_items(&rows);
        debug!(items = decoded.rows.len(), rejected = decoded.rejected, "🌐 Fetched item sheet");
        Ok(decoded.into_rows())
    }
}

#[async_trait]
impl VoteStore for HttpLedger {
    async fn append(&self, vote: &Vote) -> ArenaResult<()> {
        let sheet = &self.config.votes_sheet;
        let request = self
            .client
            .post(self.sheet_url(sheet, "rows"))
            .json(&AppendRow {
                values: vote.columns(),
                value_input: RAW_INPUT,
            });
        self.send(sheet, request).await?;
        Ok(())
    }

    async fn read_all(&self) -> ArenaResult<Vec<Vote>> {
        let rows = self.fetch_records(&self.config.votes_sheet).await?;
        let decoded = decode_votes(&rows);
        debug!(votes = decoded.rows.len(), rejected = decoded.rejected, "🌐 Fetched vote sheet");
        Ok(decoded.into_rows())
    }
}
