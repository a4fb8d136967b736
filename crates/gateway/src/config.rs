//! Gateway configuration.

use std::env;

use common::GrpcClientConfig;

/// Gateway configuration.
///
/// Listen host and port come from the `serve` arguments
/// (`GATEWAY_HOST`, `GATEWAY_PORT`).
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Content service gRPC connection
    pub content_service: GrpcClientConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a variable lookup; unset or unparsable
    /// values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GrpcClientConfig::default();

        Self {
            content_service: GrpcClientConfig {
                endpoint: lookup("CONTENT_SERVICE_URL").unwrap_or(defaults.endpoint),
                connect_timeout_ms: lookup("GRPC_CONNECT_TIMEOUT_MS")
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.connect_timeout_ms),
                request_timeout_ms: lookup("GRPC_REQUEST_TIMEOUT_MS")
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.request_timeout_ms),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> GatewayConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.content_service.endpoint, "http://localhost:50051");
        assert_eq!(config.content_service.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.content_service.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn timeouts_and_endpoint_are_overridden() {
        let config = config_from(&[
            ("CONTENT_SERVICE_URL", "http://content:6000"),
            ("GRPC_CONNECT_TIMEOUT_MS", "250"),
            ("GRPC_REQUEST_TIMEOUT_MS", "1500"),
        ]);

        assert_eq!(config.content_service.endpoint, "http://content:6000");
        assert_eq!(config.content_service.connect_timeout(), Duration::from_millis(250));
        assert_eq!(config.content_service.request_timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn malformed_timeout_keeps_default() {
        let config = config_from(&[("GRPC_REQUEST_TIMEOUT_MS", "soon")]);
        assert_eq!(config.content_service.request_timeout_ms, 30000);
    }
}
