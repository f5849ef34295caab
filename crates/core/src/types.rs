/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Users are owned by the hosted auth service and identified by UUID.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
