use uuid::Uuid;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AuditEventId(Uuid);

impl AuditEventId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_random() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}
