/// Display for configuration errors.
pub mod configuration_error;

/// Defaults and setters of the in-memory configuration.
pub mod ssl_config;

/// Loading, saving and conversion of the configuration file.
pub mod ssl_config_file;
