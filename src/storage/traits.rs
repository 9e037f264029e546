use super::{StoreError, UserRecord};

/// Operations over the account/profile pair. Each call is a standalone
/// request against persistent storage; no state is carried between calls.
pub trait UserStore {
    /// Create an account and its profile. The record's id is ignored.
    fn add_user(&self, record: &UserRecord) -> Result<(), StoreError>;
    /// Remove the profile and account rows for the given id. An unknown id
    /// is a no-op that still reports success.
    fn delete_user(&self, id: i64) -> Result<(), StoreError>;
    /// Return every account that has a profile, joined into records.
    fn list_users(&self) -> Result<Vec<UserRecord>, StoreError>;
    /// Rewrite the profile fields of the user named by the record's
    /// username. Username and id cannot be changed through this call.
    fn update_user(&self, record: &UserRecord) -> Result<(), StoreError>;
}
