/// Tables owned by this service. Their presence decides the schema plan.
pub const REQUIRED_TABLES: [&str; 2] = ["audit_events", "request_records"];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SchemaPlan {
    /// None of the required tables exist; the full schema is created directly.
    FreshSchema,
    /// At least one required table exists; only pending migrations are applied.
    ExistingSchemaNeedsMigration,
}

impl SchemaPlan {
    pub fn from_existing_tables(existing_tables: &[String]) -> Self {
        let any_present = REQUIRED_TABLES
            .iter()
            .any(|required| existing_tables.iter().any(|table| table == required));

        if any_present {
            Self::ExistingSchemaNeedsMigration
        } else {
            Self::FreshSchema
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FreshSchema => "fresh_schema",
            Self::ExistingSchemaNeedsMigration => "existing_schema_needs_migration",
        }
    }
}
