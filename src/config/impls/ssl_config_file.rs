use crate::common::enums::ssl_config_error::SslConfigError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::impls::ssl_config::DEFAULT_RESOURCE_DIR;
use crate::config::structs::identity_file_config::IdentityFileConfig;
use crate::config::structs::ssl_config::SslConfig;
use crate::config::structs::ssl_config_file::SslConfigFile;
use crate::tls::enums::tls_policy::TlsPolicy;
use log::LevelFilter;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

impl Default for SslConfigFile {
    fn default() -> Self {
        Self::init()
    }
}

impl SslConfigFile {
    pub fn init() -> SslConfigFile {
        SslConfigFile {
            log_level: String::from("info"),
            host: Some(String::from("localhost")),
            insecure: true,
            secure: true,
            http2: true,
            sni_host_check: true,
            redirect: false,
            insecure_port: 8080,
            secure_port: 8443,
            workers: None,
            security_provider: None,
            tls_config: TlsPolicy::Intermediate,
            resource_dirs: vec![String::from(DEFAULT_RESOURCE_DIR)],
            identity: Some(IdentityFileConfig {
                pem_certificate: Some(String::from("cert.pem")),
                pem_private_key: Some(String::from("key.pem")),
                ..IdentityFileConfig::default()
            }),
            trust: None,
        }
    }

    pub fn load(data: &[u8]) -> Result<SslConfigFile, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<SslConfigFile, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file<P: AsRef<Path>>(path: P, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    /// Loads the config file, or writes a default one when `create` is set and the file is unusable.
    ///
    /// A freshly written default still returns an error so the caller can stop
    /// and let the operator edit it.
    pub fn load_from_file<P: AsRef<Path>>(path: P, create: bool) -> Result<SslConfigFile, ConfigurationError> {
        let path = path.as_ref();
        match Self::load_file(path) {
            Ok(config) => {
                config.log_level_filter()?;
                Ok(config)
            }
            Err(error) => {
                eprintln!("No config file found or corrupt: {}", path.display());
                eprintln!("[ERROR] {}", error);
                if !create {
                    eprintln!("You can either create your own config file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");
                let config_toml = toml::to_string(&Self::init()).map_err(ConfigurationError::SerializeError)?;
                match Self::save_file(path, config_toml) {
                    Ok(_) => eprintln!("Please edit {} and start again, exiting now...", path.display()),
                    Err(ref e) => eprintln!("{} could not be created, check permissions: {}", path.display(), e),
                }
                Err(error)
            }
        }
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigurationError> {
        match self.log_level.as_str() {
            "off" => Ok(LevelFilter::Off),
            "trace" => Ok(LevelFilter::Trace),
            "debug" => Ok(LevelFilter::Debug),
            "info" => Ok(LevelFilter::Info),
            "warn" => Ok(LevelFilter::Warn),
            "error" => Ok(LevelFilter::Error),
            _ => Err(ConfigurationError::InvalidLogLevel(self.log_level.clone())),
        }
    }

    /// Builds an `SslConfig`, recording the identity through the exclusive setters.
    pub fn to_ssl_config(&self) -> Result<SslConfig, SslConfigError> {
        let mut config = SslConfig {
            host: self.host.clone(),
            insecure: self.insecure,
            secure: self.secure,
            http2: self.http2,
            sni_host_check: self.sni_host_check,
            redirect: self.redirect,
            insecure_port: self.insecure_port,
            secure_port: self.secure_port,
            security_provider: self.security_provider.clone(),
            tls_config: self.tls_config.clone(),
            resource_dirs: self.resource_dirs.iter().map(PathBuf::from).collect(),
            ..SslConfig::default()
        };

        if let Some(identity) = &self.identity {
            match (&identity.pem_certificate, &identity.pem_private_key) {
                (Some(certificate), Some(private_key)) => match &identity.private_key_password {
                    Some(password) => config.pem_from_path_with_password(certificate, private_key, password.clone())?,
                    None => config.pem_from_path(certificate, private_key)?,
                },
                (None, None) => {}
                _ => return Err(SslConfigError::MissingCertAndKeyFile),
            }
            if let Some(keystore) = &identity.keystore {
                config.keystore_from_path(keystore, identity.keystore_password.clone().unwrap_or_default())?;
            }
        }

        if let Some(trust) = &self.trust {
            config.with_trust_config(|builder| {
                for certificate in &trust.certificates {
                    builder.certificate_from_path(certificate);
                }
                for store in &trust.trust_stores {
                    builder.trust_store_from_path(&store.path, store.password.clone());
                }
            });
        }
        Ok(config)
    }
}
