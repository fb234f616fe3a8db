//! # Darzi REST API Client
//!
//! Typed access to the tailoring-shop backend. The backend owns
//! persistence and referential integrity; this crate only speaks its
//! HTTP dialect and hands the wire types from `darzi-core` back and
//! forth.
//!
//! ## Module Organization
//! ```text
//! darzi-client/
//! ├── lib.rs       - ApiClient entry point (this file)
//! ├── config.rs    - Base URL and timeout settings
//! ├── error.rs     - ClientError, error-body message extraction
//! ├── http.rs      - Request plumbing and the response policy
//! └── api/         - One module per backend resource
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use darzi_client::{ApiClient, ClientConfig};
//!
//! # async fn run() -> Result<(), darzi_client::ClientError> {
//! let client = ApiClient::new(ClientConfig::from_env())?;
//! let customers = client.customers().list(Some("rahim")).await?;
//! let orders = client.orders().list(None, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

use api::{
    CustomerApi, DeliveryApi, MeasurementApi, OrderApi, PaymentApi, SampleApi, StaffApi,
    TemplateApi,
};
use http::Http;

/// Entry point to the backend API. Cheap to clone; all clones share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Http,
}

impl ApiClient {
    /// Builds a client from the given configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: Http::new(&config)?,
        })
    }

    /// Client against the default local backend.
    pub fn local() -> ClientResult<Self> {
        Self::new(ClientConfig::default())
    }

    /// Customer endpoints.
    pub fn customers(&self) -> CustomerApi<'_> {
        CustomerApi::new(&self.http)
    }

    /// Measurement template endpoints.
    pub fn templates(&self) -> TemplateApi<'_> {
        TemplateApi::new(&self.http)
    }

    /// Measurement record endpoints.
    pub fn measurements(&self) -> MeasurementApi<'_> {
        MeasurementApi::new(&self.http)
    }

    /// Order endpoints, including staff assignments.
    pub fn orders(&self) -> OrderApi<'_> {
        OrderApi::new(&self.http)
    }

    /// Payment endpoints.
    pub fn payments(&self) -> PaymentApi<'_> {
        PaymentApi::new(&self.http)
    }

    /// Delivery-tracking endpoint.
    pub fn deliveries(&self) -> DeliveryApi<'_> {
        DeliveryApi::new(&self.http)
    }

    /// Sample gallery endpoints.
    pub fn samples(&self) -> SampleApi<'_> {
        SampleApi::new(&self.http)
    }

    /// Staff endpoints.
    pub fn staff(&self) -> StaffApi<'_> {
        StaffApi::new(&self.http)
    }
}
