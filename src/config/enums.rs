/// Config file read/parse/write failures.
pub mod configuration_error;
