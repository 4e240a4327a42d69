use log::*;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/ordermanagement-web";

/// Where the order management server lives. `server_url` is the deployment root (including any path prefix the server
/// is mounted under); the REST resources hang off the fixed `/api` suffix below that.
#[derive(Debug, Clone)]
pub struct OrderServerConfig {
    pub server_url: String,
}

impl Default for OrderServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl OrderServerConfig {
    pub fn new(server_url: &str) -> Self {
        Self { server_url: server_url.trim_end_matches('/').to_string() }
    }

    pub fn new_from_env_or_default() -> Self {
        let server_url = std::env::var("ORDER_SERVER_URL").unwrap_or_else(|_| {
            warn!("ORDER_SERVER_URL not set, using {DEFAULT_SERVER_URL} as default");
            DEFAULT_SERVER_URL.to_string()
        });
        Self::new(&server_url)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = OrderServerConfig::new("http://localhost:8080/ordermanagement-web/");
        assert_eq!(config.server_url, "http://localhost:8080/ordermanagement-web");
    }
}
