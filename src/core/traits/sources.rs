use chrono::{DateTime, Utc};

/// Source of timestamps for `createdAt` / `updatedAt`.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of fresh request identifiers.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}
