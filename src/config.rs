use crate::error::{Result, WorkflowError};

/// Runtime configuration for the server binary
#[derive(Debug, Clone)]
pub struct FlowstateConfig {
    pub bind_address: String,
    pub port: u16,
    pub json_logs: bool,
}

impl Default for FlowstateConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            json_logs: false,
        }
    }
}

impl FlowstateConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(bind_address) = std::env::var("FLOWSTATE_BIND_ADDRESS") {
            config.bind_address = bind_address;
        }

        if let Ok(port) = std::env::var("FLOWSTATE_PORT") {
            config.port = port
                .parse()
                .map_err(|e| WorkflowError::Configuration(format!("invalid port: {e}")))?;
        }

        if let Ok(json_logs) = std::env::var("FLOWSTATE_JSON_LOGS") {
            config.json_logs = matches!(json_logs.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Address string for the TCP listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
