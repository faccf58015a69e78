use crate::common::enums::material_error::MaterialError;
use std::path::{Path, PathBuf};

/// Finds `name` in the first resource directory that contains it.
pub fn resolve_resource<P: AsRef<Path>>(resource_dirs: &[P], name: &str) -> Result<PathBuf, MaterialError> {
    let relative = name.trim_start_matches('/');
    if relative.is_empty() {
        return Err(MaterialError::ResourceNotFound(name.to_string()));
    }
    resource_dirs
        .iter()
        .map(|dir| dir.as_ref().join(relative))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| MaterialError::ResourceNotFound(name.to_string()))
}
