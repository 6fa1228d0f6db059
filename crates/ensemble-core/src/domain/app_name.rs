use std::borrow::Borrow;
use std::fmt;

/// Registered name of a sub-application (the token that starts its argument slice).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppName(String);

impl AppName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// HashMap<AppName, _> を &str で引けるようにする
impl Borrow<str> for AppName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AppName {
    fn from(s: String) -> Self {
        Self(s)
    }
}
