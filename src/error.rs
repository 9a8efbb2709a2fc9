use thiserror::Error;

use crate::metadata::manifest::DepSection;


pub type Result<T> = std::result::Result<T, ErrorKind>;

#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error("manifest has no '{}' field", .0)]
    MissingDependencies(DepSection),

    #[error("'{section}' must be a mapping of package names, found {found}")]
    NotAMapping { section: DepSection, found: &'static str },

    #[error("io error: {}", .0)]
    Io(#[from]std::io::Error),

    #[error("parsing manifest failed: {}", .0)]
    Parse(#[from]serde_json::Error),
}
