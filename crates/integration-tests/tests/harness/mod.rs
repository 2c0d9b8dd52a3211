#![allow(dead_code)]

pub mod config;
pub mod mock_device_api;
pub mod mock_openrouter;
pub mod server;

/// Launch request envelope addressed at `api_endpoint`
pub fn launch_request(api_endpoint: &str) -> serde_json::Value {
    request_of_type("LaunchRequest", api_endpoint)
}

/// Request envelope of an arbitrary type addressed at `api_endpoint`
pub fn request_of_type(request_type: &str, api_endpoint: &str) -> serde_json::Value {
    serde_json::json!({
        "version": "1.0",
        "session": {
            "new": true,
            "sessionId": "amzn1.echo-api.session.test"
        },
        "context": {
            "System": {
                "device": {"deviceId": mock_device_api::DEVICE_ID},
                "apiEndpoint": api_endpoint,
                "apiAccessToken": mock_device_api::ACCESS_TOKEN
            }
        },
        "request": {
            "type": request_type,
            "requestId": "amzn1.echo-api.request.test",
            "locale": "de-DE",
            "timestamp": "2026-06-21T12:00:00Z"
        }
    })
}
