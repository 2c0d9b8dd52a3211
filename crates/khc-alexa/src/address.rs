//! Device address lookup
//!
//! Reads the country and postal code of the requesting device from the
//! platform's device settings API. Access is gated by a permission the user
//! grants in the companion app.

use async_trait::async_trait;
use khc_config::AlexaConfig;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::envelope::SystemState;
use crate::error::AddressError;

/// Body of a `countryAndPostalCode` lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceAddress {
    pub country_code: Option<String>,
    pub postal_code: Option<String>,
}

impl DeviceAddress {
    /// Read the address from decoded JSON
    ///
    /// Missing fields and fields that are not strings read as `None`.
    pub fn from_json(data: &Value) -> Self {
        let field = |name: &str| data.get(name).and_then(Value::as_str).map(str::to_owned);

        Self {
            country_code: field("countryCode"),
            postal_code: field("postalCode"),
        }
    }
}

/// Resolves the postal code of the device behind a request
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Postal code of the requesting device
    ///
    /// # Errors
    ///
    /// Returns an [`AddressError`] whenever no postal code can be obtained
    async fn postal_code(&self, system: &SystemState) -> Result<String, AddressError>;
}

/// HTTP client for the device address API
#[derive(Debug, Clone)]
pub struct DeviceAddressClient {
    http: reqwest::Client,
}

impl DeviceAddressClient {
    /// Create a client honouring the configured lookup timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: &AlexaConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http })
    }
}

/// Lookup URL for `device_id` under the request's API endpoint
fn address_url(api_endpoint: &str, device_id: &str) -> String {
    let base = api_endpoint.trim_end_matches('/');
    format!("{base}/v1/devices/{device_id}/settings/address/countryAndPostalCode")
}

#[async_trait]
impl AddressLookup for DeviceAddressClient {
    async fn postal_code(&self, system: &SystemState) -> Result<String, AddressError> {
        let url = address_url(&system.api_endpoint, &system.device.device_id);

        let response = self
            .http
            .get(url)
            .bearer_auth(system.api_access_token.expose_secret())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "device address request failed");
                AddressError::Transport(e)
            })?;

        match response.status() {
            StatusCode::OK => {
                let data: Value = response.json().await.map_err(|e| {
                    tracing::error!(error = %e, "device address response is not JSON");
                    AddressError::Decode(e.to_string())
                })?;

                let address = DeviceAddress::from_json(&data);
                match address.postal_code {
                    Some(postal_code) if !postal_code.is_empty() => {
                        tracing::info!(
                            postal_code = %postal_code,
                            country_code = address.country_code.as_deref().unwrap_or("-"),
                            "postal code retrieved"
                        );
                        Ok(postal_code)
                    }
                    _ => {
                        tracing::error!("postal code not found in response JSON");
                        Err(AddressError::Unavailable)
                    }
                }
            }
            StatusCode::FORBIDDEN => {
                tracing::error!("permission denied for device address API");
                Err(AddressError::Forbidden)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                tracing::error!(status = %status.as_u16(), body = %body, "failed to get postal code");
                Err(AddressError::Status(status.as_u16()))
            }
        }
    }
}
