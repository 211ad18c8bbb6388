use std::fmt;

use uuid::Uuid;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    pub fn new(value: &str) -> Result<Self, String> {
        let parsed = Uuid::parse_str(value.trim())
            .map_err(|_| "principal id must be a valid UUID".to_string())?;
        Ok(Self(parsed))
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
