//! # Mailsink Client
//! Asynchronous wrapper around the Mailsink hosted email/SMS testing HTTP API, providing methods to list, search, fetch, and delete captured messages and to run spam analysis, using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who assert on real email/SMS delivery in integration tests, demos, or automation scripts without running mail infrastructure: configure with [`ClientBuilder`], generate a test address, trigger the code under test, then wait for the message with [`Client::get_message`] and assert on its fields.
//!
//! ## Models and mappers
//! Wire payloads are not bound to bespoke structs. Every resource is described by a declarative [`Mapper`] held in a process-wide [`registry()`], and one generic engine ([`serialize`]/[`deserialize`]) walks payloads against those descriptions, producing immutable [`Model`] values. Unset optional fields stay absent (never `null`), unknown server fields are ignored, and composite references resolve by name so the model graph may be cyclic.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not a general-purpose mail client or SMTP sender. It only wraps the Mailsink service and inherits its retention and processing limits.
//!
//! ## Errors
//! All network calls surface transport and non-2xx statuses as [`Error::Request`] or [`Error::Api`]; payloads that violate a mapper description become [`Error::Validation`] or [`Error::UnknownType`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use mailsink_client::{Client, SearchCriteria};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mailsink_client::Error> {
//!     let client = Client::new("YOUR_API_KEY")?;
//!     let address = client.generate_email_address("abcd1234");
//!     // ... trigger the code under test to send a message to `address` ...
//!
//!     let criteria = SearchCriteria::new().sent_to(&address);
//!     let message = client.get_message("abcd1234", &criteria).await?;
//!     println!("Subject: {}", message.str("subject").unwrap_or_default());
//!
//!     client.delete_all_messages("abcd1234").await?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod mapper;
mod models;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use mapper::{
    deserialize, serialize, FieldDescriptor, FieldType, Mapper, Model, PrimitiveKind, Registry,
    Value,
};
pub use models::{registry, SearchCriteria};

/// Result type alias for Mailsink operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
