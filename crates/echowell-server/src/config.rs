use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub struct Config {
    pub db_path: PathBuf,
    pub addr: SocketAddr,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let db_path = get("ECHOWELL_DB_PATH", "echowell.db");
        let host = get("ECHOWELL_HOST", "0.0.0.0");
        let port: u16 = get("ECHOWELL_PORT", "3000")
            .parse()
            .context("ECHOWELL_PORT must be a port number")?;
        let public_dir = get("ECHOWELL_PUBLIC_DIR", "public");

        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

        Ok(Self {
            db_path: db_path.into(),
            addr,
            public_dir: public_dir.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.db_path, PathBuf::from("echowell.db"));
        assert_eq!(config.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.public_dir, PathBuf::from("public"));
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("ECHOWELL_DB_PATH", "/var/lib/echowell/data.db"),
            ("ECHOWELL_HOST", "127.0.0.1"),
            ("ECHOWELL_PORT", "8080"),
            ("ECHOWELL_PUBLIC_DIR", "/srv/www"),
        ])
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/echowell/data.db"));
        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.public_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(load(&[("ECHOWELL_PORT", "not-a-port")]).is_err());
        assert!(load(&[("ECHOWELL_PORT", "70000")]).is_err());
    }

    #[test]
    fn bad_host_is_an_error() {
        assert!(load(&[("ECHOWELL_HOST", "not a host")]).is_err());
    }
}
