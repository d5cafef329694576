use std::fmt;

/// Stages of the startup sequence, in the only order they may be reached.
/// `Aborted` is reachable from every stage except `Ready`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BootstrapStatus {
    Unchecked,
    DatabaseEnsured,
    SchemaEnsured,
    MigrationsApplied,
    Ready,
    Aborted,
}

impl BootstrapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchecked => "unchecked",
            Self::DatabaseEnsured => "database_ensured",
            Self::SchemaEnsured => "schema_ensured",
            Self::MigrationsApplied => "migrations_applied",
            Self::Ready => "ready",
            Self::Aborted => "aborted",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Aborted)
    }
}

impl fmt::Display for BootstrapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
