use crate::identity::enums::trust_source::TrustSource;
use crate::identity::structs::trust_config::TrustConfig;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

impl fmt::Debug for TrustConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.sources.iter()).finish()
    }
}

impl TrustConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn sources(&self) -> &[TrustSource] {
        &self.sources
    }

    pub(crate) fn sources_mut(&mut self) -> &mut [TrustSource] {
        &mut self.sources
    }

    pub fn certificate_from_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.sources.push(TrustSource::CertificatePath(path.into()));
        self
    }

    pub fn certificate_from_resource<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.sources.push(TrustSource::CertificateResource(name.into()));
        self
    }

    pub fn certificate_from_reader<R: Read + Send + 'static>(&mut self, reader: R) -> &mut Self {
        self.sources.push(TrustSource::CertificateReader(Some(Box::new(reader))));
        self
    }

    pub fn pem_from_string<S: Into<String>>(&mut self, pem: S) -> &mut Self {
        self.sources.push(TrustSource::PemString(pem.into()));
        self
    }

    pub fn trust_store_from_path<P: Into<PathBuf>, S: Into<String>>(&mut self, path: P, password: S) -> &mut Self {
        self.sources.push(TrustSource::TrustStorePath { path: path.into(), password: password.into() });
        self
    }

    pub fn trust_store_from_resource<N: Into<String>, S: Into<String>>(&mut self, name: N, password: S) -> &mut Self {
        self.sources.push(TrustSource::TrustStoreResource { name: name.into(), password: password.into() });
        self
    }

    pub fn trust_store_from_reader<R: Read + Send + 'static, S: Into<String>>(&mut self, reader: R, password: S) -> &mut Self {
        self.sources.push(TrustSource::TrustStoreReader {
            reader: Some(Box::new(reader)),
            password: password.into(),
        });
        self
    }
}
