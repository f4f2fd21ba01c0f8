use crate::storage::resolve_data_path;
use std::{env, net::IpAddr, net::SocketAddr, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;

/// Runtime settings taken from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::from([127, 0, 0, 1]));
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            data_path: resolve_data_path(),
            addr: SocketAddr::new(host, port),
        }
    }
}
