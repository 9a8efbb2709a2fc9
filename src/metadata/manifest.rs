use std::{fmt::Display, str::FromStr};

use serde_json::{Map, Value};

use crate::error::{ErrorKind, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepSection {
    Dependencies,
    Dev,
    Optional,
    Peer,
}

impl DepSection {
    pub fn key(&self) -> &'static str {
        match self {
            DepSection::Dependencies => "dependencies",
            DepSection::Dev => "devDependencies",
            DepSection::Optional => "optionalDependencies",
            DepSection::Peer => "peerDependencies",
        }
    }
}

impl Display for DepSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug)]
pub struct Manifest {
    root: Value,
}

impl FromStr for Manifest {
    type Err = ErrorKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self { root: serde_json::from_str(s)? })
    }
}

impl Manifest {
    /// `None` when the field is absent or null, or when the root is not an object.
    pub fn section(&self, section: DepSection) -> Result<Option<&Map<String, Value>>> {
        match self.root.get(section.key()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(ErrorKind::NotAMapping { section, found: type_name(other) }),
        }
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
