#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::storage::{SqliteStore, UserRecord, UserStore};

    fn record(username: &str, name: &str, surname: &str, description: &str) -> UserRecord {
        UserRecord {
            id: 0,
            username: username.to_string(),
            name: name.to_string(),
            surname: surname.to_string(),
            description: description.to_string(),
        }
    }

    /// Drive the store the way the app does, through the trait object.
    #[test]
    fn full_user_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let sqlite = SqliteStore::new(dir.path().join("users.sqlite"));
        sqlite.init().unwrap();
        let store: Arc<dyn UserStore + Send + Sync> = Arc::new(sqlite);

        store
            .add_user(&record("Mihalis", "Mihalis", "Tsoukalos", "author"))
            .unwrap();
        store
            .add_user(&record("mary", "Mary", "Doe", "reviewer"))
            .unwrap();

        let mut users = store.list_users().unwrap();
        users.sort_by_key(|u| u.id);
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "mihalis");
        assert_eq!(users[1].username, "mary");

        store
            .update_user(&record("MIHALIS", "Mihalis", "Tsoukalos", "editor"))
            .unwrap();
        let updated = store
            .list_users()
            .unwrap()
            .into_iter()
            .find(|u| u.username == "mihalis")
            .unwrap();
        assert_eq!(updated.description, "editor");

        store.delete_user(users[0].id).unwrap();
        let remaining = store.list_users().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].username, "mary");
    }
}
