use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

/// IATA-style airport code, normalised to upper case so that equality is case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AirportCode(Arc<str>);

impl AirportCode {
    pub fn new(code: &str) -> AirportCode {
        AirportCode(Arc::from(code.trim().to_ascii_uppercase()))
    }

    pub fn matches(&self, code: &str) -> bool {
        self.0.eq_ignore_ascii_case(code.trim())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Airport {
    pub code: AirportCode,
    pub description: Option<String>,
}

impl Airport {
    pub fn new(code: &str) -> Airport {
        Airport {
            code: AirportCode::new(code),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Airport {
        self.description = Some(description.into());
        self
    }
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Airport {}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
