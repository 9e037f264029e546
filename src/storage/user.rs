use serde::{Deserialize, Serialize};

/// Joined view of an account row and its profile row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Assigned by the store on insert; ignored on input.
    #[serde(default)]
    pub id: i64,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub description: String,
}

impl UserRecord {
    /// Return the record with its username folded to the stored spelling.
    pub fn normalized(mut self) -> Self {
        self.username = normalize_username(&self.username);
        self
    }
}

/// Usernames are compared case-insensitively; the lowercase form is the one
/// that reaches the database.
pub fn normalize_username(username: &str) -> String {
    username.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_to_lowercase() {
        assert_eq!(normalize_username("Alice"), "alice");
        assert_eq!(normalize_username("ALICE"), "alice");
        assert_eq!(normalize_username("alice"), "alice");
    }

    #[test]
    fn normalized_record_keeps_other_fields() {
        let record = UserRecord {
            id: 7,
            username: "MixedCase".to_string(),
            name: "Mixed".to_string(),
            surname: "Case".to_string(),
            description: "unchanged".to_string(),
        };
        let normalized = record.clone().normalized();
        assert_eq!(normalized.username, "mixedcase");
        assert_eq!(normalized.id, record.id);
        assert_eq!(normalized.name, record.name);
        assert_eq!(normalized.surname, record.surname);
        assert_eq!(normalized.description, record.description);
    }
}
