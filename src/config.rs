use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub app_server_host: String,
    /// `0` lets the OS pick a free port.
    #[serde(default = "default_port")]
    pub app_server_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_server_host: default_host(),
            app_server_port: default_port(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        let config = envy::from_env::<AppConfig>()?;

        if config.app_server_host.trim().is_empty() {
            return Err(envy::Error::Custom(
                "APP_SERVER_HOST cannot be empty.".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let host: IpAddr = match self.app_server_host.trim() {
            "localhost" => IpAddr::V4(Ipv4Addr::LOCALHOST),
            other => other.parse()?,
        };
        Ok(SocketAddr::new(host, self.app_server_port))
    }
}
