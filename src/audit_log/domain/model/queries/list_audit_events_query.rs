#[derive(Clone, Debug, Default)]
pub struct ListAuditEventsQuery;

impl ListAuditEventsQuery {
    pub fn new() -> Self {
        Self
    }
}
