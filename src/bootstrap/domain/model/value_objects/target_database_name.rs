use crate::bootstrap::domain::model::enums::bootstrap_domain_error::BootstrapDomainError;

const MAX_IDENTIFIER_BYTES: usize = 63;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TargetDatabaseName(String);

impl TargetDatabaseName {
    pub fn new(value: String) -> Result<Self, BootstrapDomainError> {
        let trimmed = value.trim();

        if trimmed.is_empty() || trimmed.len() > MAX_IDENTIFIER_BYTES || trimmed.contains('\0') {
            return Err(BootstrapDomainError::InvalidDatabaseName);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Double-quoted form safe to splice into DDL.
    pub fn quoted_identifier(&self) -> String {
        format!("\"{}\"", self.0.replace('"', "\"\""))
    }
}
