#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GrantScope {
    Any,
    Owned,
    Coordinated,
}

impl GrantScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Owned => "owned",
            Self::Coordinated => "coordinated",
        }
    }
}
