#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DatabaseCreationOutcome {
    Created,
    AlreadyExisted,
}

impl DatabaseCreationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AlreadyExisted => "already_existed",
        }
    }
}
