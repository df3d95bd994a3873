use crate::config::Config;
use crate::domain::account::AccountList;
use crate::domain::currency::CurrencyAmount;
use crate::domain::feed::FeedItemList;
use crate::domain::ports::BankApi;
use crate::domain::transfer::{SavingsGoalTransferResponse, TopUpRequest};
use crate::error::{Result, RoundUpError};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Method, Request, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

const APPLICATION_JSON: &str = "application/json";

/// Authenticated JSON client for the banking API.
///
/// Holds configuration only and is safe to share between concurrent calls.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base_url: String,
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    fn request(&self, method: Method, token: &str, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(AUTHORIZATION, token)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON)
    }

    /// Issues a GET and decodes a 200 response into `T`.
    ///
    /// The bank's load balancer runs with strictest desync mitigation and rejects
    /// any GET carrying `Content-Length: 0`, so the header is stripped from the
    /// built request before it reaches the transport.
    pub async fn get<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T> {
        let request = self.get_request(token, path)?;

        log::debug!("GET {path}");
        let response = self.client.execute(request).await?;
        handle_response(response).await
    }

    fn get_request(&self, token: &str, path: &str) -> Result<Request> {
        let mut request = self.request(Method::GET, token, path).build()?;
        request.headers_mut().remove(CONTENT_LENGTH);
        Ok(request)
    }

    /// Serializes `payload` as the JSON body of a PUT and decodes a 200 response into `T`.
    pub async fn put<P, T>(&self, token: &str, path: &str, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(payload)?;

        log::debug!("PUT {path}");
        let response = self
            .request(Method::PUT, token, path)
            .body(body)
            .send()
            .await?;
        handle_response(response).await
    }
}

/// Reads the whole body, then either decodes it or reports it verbatim.
///
/// Anything other than exactly 200 is an upstream error; no distinction is made
/// between client and server failures.
async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        log::warn!("Upstream responded with {status}");
        return Err(RoundUpError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

fn timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// [`BankApi`] backed by the Starling v2 REST endpoints.
#[derive(Debug, Clone)]
pub struct StarlingBankApi {
    client: UpstreamClient,
}

impl StarlingBankApi {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(UpstreamClient::new(config)?))
    }
}

#[async_trait]
impl BankApi for StarlingBankApi {
    async fn accounts(&self, token: &str) -> Result<AccountList> {
        self.client.get(token, "/accounts").await
    }

    async fn settled_transactions_between(
        &self,
        token: &str,
        account_uid: Uuid,
        min: DateTime<Utc>,
        max: DateTime<Utc>,
    ) -> Result<FeedItemList> {
        let path = format!(
            "/feed/account/{account_uid}/settled-transactions-between?minTransactionTimestamp={}&maxTransactionTimestamp={}",
            timestamp(min),
            timestamp(max)
        );
        self.client.get(token, &path).await
    }

    async fn add_money(
        &self,
        token: &str,
        account_uid: Uuid,
        savings_goal_uid: Uuid,
        transfer_uid: Uuid,
        amount: CurrencyAmount,
    ) -> Result<SavingsGoalTransferResponse> {
        let path = format!(
            "/account/{account_uid}/savings-goals/{savings_goal_uid}/add-money/{transfer_uid}"
        );
        self.client
            .put(token, &path, &TopUpRequest::from(amount))
            .await
    }
}
