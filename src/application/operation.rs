use std::fmt;

/// Operations the host may route through `invoke`. These may write state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvokeOperation {
    /// Re-seed the initial accounts
    Init,
    /// Raw, schema-free key/value write
    Write,
    /// Balance-checked transfer between two accounts
    Transfer,
}

impl InvokeOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvokeOperation::Init => "init",
            InvokeOperation::Write => "write",
            InvokeOperation::Transfer => "transfer",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "init" => Some(InvokeOperation::Init),
            "write" => Some(InvokeOperation::Write),
            "transfer" => Some(InvokeOperation::Transfer),
            _ => None,
        }
    }
}

impl fmt::Display for InvokeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only operations the host may route through `query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOperation {
    /// Raw read of the bytes under a key
    Read,
}

impl QueryOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOperation::Read => "read",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "read" => Some(QueryOperation::Read),
            _ => None,
        }
    }
}

impl fmt::Display for QueryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
