//! Mailsink async client implementation.

use crate::mapper::{deserialize, serialize, Model, Value};
use crate::models::{registry, SearchCriteria};
use crate::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use rand::distr::Alphanumeric;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Method;
use std::time::Duration;
use tokio::time::Instant;

/// Async client for the Mailsink email/SMS testing service.
///
/// Use [`Client::new`] with an API key for defaults or [`Client::builder`]
/// for custom settings like proxies, TLS behavior, and search timeouts.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    smtp_host: String,
    proxy: Option<String>,
    user_agent: String,
    poll_interval: Duration,
    search_timeout: Duration,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a new Mailsink client with default settings.
    ///
    /// # Arguments
    /// * `api_key` - The API key from your account settings
    ///
    /// # Examples
    /// ```no_run
    /// # use mailsink_client::Client;
    /// # fn main() -> Result<(), mailsink_client::Error> {
    /// let client = Client::new("YOUR_API_KEY")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Get the proxy URL if one was configured.
    ///
    /// Returns `None` when no proxy was set on the builder.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// List all messages received by a server, most recent first.
    ///
    /// # Arguments
    /// * `server` - The server identifier
    ///
    /// # Returns
    /// A `MessageListResult` model whose `items` are `MessageSummary`
    /// models (summaries carry an attachment count, not the attachments).
    ///
    /// # Examples
    /// ```no_run
    /// # use mailsink_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mailsink_client::Error> {
    /// let client = Client::new("YOUR_API_KEY")?;
    /// let result = client.list_messages("abcd1234").await?;
    /// for item in result.sequence("items").unwrap_or_default() {
    ///     println!("{item:?}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_messages(&self, server: &str) -> Result<Model> {
        let query = [("server", server.to_string())];
        self.fetch_model(Method::GET, "/api/messages", &query, None, "MessageListResult")
            .await
    }

    /// List messages received after the given instant.
    ///
    /// # Arguments
    /// * `server` - The server identifier
    /// * `received_after` - Only return messages received after this UTC instant
    pub async fn list_messages_received_after(
        &self,
        server: &str,
        received_after: DateTime<Utc>,
    ) -> Result<Model> {
        let query = [
            ("server", server.to_string()),
            (
                "receivedAfter",
                received_after.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        ];
        self.fetch_model(Method::GET, "/api/messages", &query, None, "MessageListResult")
            .await
    }

    /// Search a server for messages matching the criteria.
    ///
    /// The criteria go through the mapper engine, so unset fields are
    /// omitted from the request body. The service rejects an empty search.
    ///
    /// # Arguments
    /// * `server` - The server identifier
    /// * `criteria` - What to match on
    pub async fn search_messages(
        &self,
        server: &str,
        criteria: &SearchCriteria,
    ) -> Result<Model> {
        let body = serialize(&criteria.to_model(), registry())?;
        let query = [("server", server.to_string())];
        self.fetch_model(
            Method::POST,
            "/api/messages/search",
            &query,
            Some(&body),
            "MessageListResult",
        )
        .await
    }

    /// Wait for a message matching the criteria and return it in full.
    ///
    /// Polls the search endpoint until a match appears or the configured
    /// timeout lapses (see [`ClientBuilder::search_timeout`]), then fetches
    /// the complete message by id.
    ///
    /// # Arguments
    /// * `server` - The server identifier
    /// * `criteria` - What to match on
    ///
    /// # Examples
    /// ```no_run
    /// # use mailsink_client::{Client, SearchCriteria};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mailsink_client::Error> {
    /// let client = Client::new("YOUR_API_KEY")?;
    /// let criteria = SearchCriteria::new().sent_to("signup.abcd1234@mailsink.net");
    /// let message = client.get_message("abcd1234", &criteria).await?;
    /// println!("{}", message.str("subject").unwrap_or_default());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_message(&self, server: &str, criteria: &SearchCriteria) -> Result<Model> {
        let deadline = Instant::now() + self.search_timeout;
        loop {
            let result = self.search_messages(server, criteria).await?;
            let first = result
                .sequence("items")
                .and_then(|items| items.first())
                .cloned();
            if let Some(Value::Model(summary)) = first {
                let id = summary
                    .str("id")
                    .ok_or_else(|| Error::validation("id", "search result item has no id"))?;
                return self.get_message_by_id(id).await;
            }
            if Instant::now() >= deadline {
                return Err(Error::SearchTimeout(self.search_timeout));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Fetch a single message in full by its id.
    ///
    /// # Arguments
    /// * `id` - The message id
    ///
    /// # Returns
    /// A `Message` model with content, attachments, and metadata.
    pub async fn get_message_by_id(&self, id: &str) -> Result<Model> {
        let path = format!("/api/messages/{id}");
        self.fetch_model(Method::GET, &path, &[], None, "Message").await
    }

    /// Delete a single message.
    ///
    /// Deleting an already-deleted message surfaces the service's error as
    /// [`Error::Api`].
    ///
    /// # Arguments
    /// * `id` - The message id
    pub async fn delete_message(&self, id: &str) -> Result<()> {
        let path = format!("/api/messages/{id}");
        self.send(Method::DELETE, &path, &[], None).await?;
        Ok(())
    }

    /// Delete every message held by a server.
    ///
    /// # Arguments
    /// * `server` - The server identifier
    pub async fn delete_all_messages(&self, server: &str) -> Result<()> {
        let query = [("server", server.to_string())];
        self.send(Method::DELETE, "/api/messages", &query, None).await?;
        Ok(())
    }

    /// Run a spam analysis on a message.
    ///
    /// # Arguments
    /// * `message_id` - The message id
    ///
    /// # Returns
    /// A `SpamAnalysisResult` model with per-rule SpamAssassin scores and
    /// an overall score.
    pub async fn spam_analysis(&self, message_id: &str) -> Result<Model> {
        let path = format!("/api/analysis/spam/{message_id}");
        self.fetch_model(Method::GET, &path, &[], None, "SpamAnalysisResult")
            .await
    }

    /// List the servers on the account, most recently created first.
    pub async fn list_servers(&self) -> Result<Model> {
        self.fetch_model(Method::GET, "/api/servers", &[], None, "ServerListResult")
            .await
    }

    /// Generate a random email address routed to a server's inbox.
    ///
    /// Purely local; no request is made. Anything sent to the returned
    /// address lands in the given server.
    ///
    /// # Arguments
    /// * `server` - The server identifier
    pub fn generate_email_address(&self, server: &str) -> String {
        let local: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(10)
            .map(char::from)
            .collect();
        format!("{}.{}@{}", local.to_lowercase(), server, self.smtp_host)
    }

    /// Send a request and deserialize the JSON response into a model.
    async fn fetch_model(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
        class_name: &str,
    ) -> Result<Model> {
        let response = self.send(method, path, query, body).await?;
        let payload: serde_json::Value = response.json().await?;
        deserialize(class_name, &payload, registry())
    }

    /// Common request pattern: auth, headers, and non-2xx handling.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");

        let mut request = self
            .http
            .request(method, &url)
            .headers(self.headers())
            .basic_auth(&self.api_key, Some(""));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!("{url} answered {status}: {message}");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Build headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        headers
    }
}

const BASE_URL: &str = "https://mailsink.io";
const SMTP_HOST: &str = "mailsink.net";
const USER_AGENT_VALUE: &str = concat!("mailsink-client/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a Mailsink client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    smtp_host: String,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    poll_interval: Duration,
    search_timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Hosted service base URL and SMTP domain
    /// - No proxy
    /// - Strict TLS validation
    /// - `mailsink-client/<version>` user agent
    /// - 1 second poll interval, 10 second search timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            smtp_host: SMTP_HOST.to_string(),
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            poll_interval: Duration::from_secs(1),
            search_timeout: Duration::from_secs(10),
        }
    }

    /// Override the API base URL.
    ///
    /// Useful for self-hosted deployments or tests against a local mock.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the SMTP domain used by [`Client::generate_email_address`].
    pub fn smtp_host(mut self, smtp_host: impl Into<String>) -> Self {
        self.smtp_host = smtp_host.into();
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// How often [`Client::get_message`] re-runs its search.
    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// How long [`Client::get_message`] keeps searching before giving up
    /// with [`Error::SearchTimeout`].
    pub fn search_timeout(mut self, search_timeout: Duration) -> Self {
        self.search_timeout = search_timeout;
        self
    }

    /// Build the client.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailsink_client::Client;
    /// # fn main() -> Result<(), mailsink_client::Error> {
    /// let client = Client::builder("YOUR_API_KEY")
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            api_key: self.api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            smtp_host: self.smtp_host,
            proxy: self.proxy,
            user_agent: self.user_agent,
            poll_interval: self.poll_interval,
            search_timeout: self.search_timeout,
        })
    }
}
