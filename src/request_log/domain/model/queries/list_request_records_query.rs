#[derive(Clone, Debug, Default)]
pub struct ListRequestRecordsQuery;

impl ListRequestRecordsQuery {
    pub fn new() -> Self {
        Self
    }
}
