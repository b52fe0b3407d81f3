use crate::errors::AppError;
use crate::models::{CompletedTask, User};
use serde::Serialize;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::{fs, sync::Mutex};
use tracing::error;

pub const USER_KEY: &str = "boring-me-user";
pub const GLOBAL_RECORDS_KEY: &str = "all-completed-tasks";

pub fn user_records_key(username: &str) -> String {
    format!("completed-tasks-{username}")
}

pub fn resolve_data_dir() -> PathBuf {
    match env::var("APP_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from("data"),
    }
}

/// String-keyed persistent store, one JSON file per key. Unreadable or
/// corrupt entries read back as empty rather than failing the caller.
pub struct Store {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl Store {
    pub async fn open(dir: PathBuf) -> Result<Self, std::io::Error> {
        fs::create_dir_all(&dir).await?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub async fn restore_user(&self) -> Option<User> {
        let path = self.key_path(USER_KEY);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                error!("failed to read stored user: {err}");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(user) => Some(user),
            Err(err) => {
                error!("stored user is corrupt, clearing it: {err}");
                let _ = fs::remove_file(&path).await;
                None
            }
        }
    }

    pub async fn save_user(&self, user: &User) -> Result<(), AppError> {
        write_json(&self.key_path(USER_KEY), user).await
    }

    pub async fn clear_user(&self) -> Result<(), AppError> {
        match fs::remove_file(self.key_path(USER_KEY)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn list_global(&self) -> Vec<CompletedTask> {
        load_records(&self.key_path(GLOBAL_RECORDS_KEY)).await
    }

    pub async fn list_for_user(&self, username: &str) -> Vec<CompletedTask> {
        load_records(&self.key_path(&user_records_key(username))).await
    }

    /// Prepends the record to the global list and then to the per-user list,
    /// each as a whole-collection overwrite. Both writes happen under one
    /// lock, global first, so a failure in between can only leave the global
    /// list ahead; the per-user list is never a superset of the global one.
    pub async fn append_record(&self, record: CompletedTask) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let global_path = self.key_path(GLOBAL_RECORDS_KEY);
        let mut global = load_records(&global_path).await;
        global.insert(0, record.clone());
        write_json(&global_path, &global).await?;

        let user_path = self.key_path(&user_records_key(&record.username));
        let mut mine = load_records(&user_path).await;
        mine.insert(0, record);
        write_json(&user_path, &mine).await?;

        Ok(())
    }
}

async fn load_records(path: &Path) -> Vec<CompletedTask> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            Vec::new()
        }
    }
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(value).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_dir(label: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!("boring_me_store_{label}_{}_{nanos}", std::process::id()));
        dir
    }

    fn record(id: &str, username: &str) -> CompletedTask {
        CompletedTask {
            id: id.to_string(),
            task_id: "c1".to_string(),
            category_id: "creative".to_string(),
            task_title: "Try a DIY project".to_string(),
            category_title: "Creative Corner".to_string(),
            date: "2024-03-15T10:00:00+00:00".to_string(),
            image_url: "data:image/png;base64,aGk=".to_string(),
            username: username.to_string(),
        }
    }

    #[tokio::test]
    async fn lists_are_empty_before_any_append() {
        let store = Store::open(unique_dir("empty")).await.unwrap();
        assert!(store.list_global().await.is_empty());
        assert!(store.list_for_user("ana").await.is_empty());
    }

    #[tokio::test]
    async fn append_prepends_and_partitions_by_username() {
        let store = Store::open(unique_dir("partition")).await.unwrap();
        store.append_record(record("record-1", "ana")).await.unwrap();
        store.append_record(record("record-2", "ben")).await.unwrap();
        store.append_record(record("record-3", "ana")).await.unwrap();

        let ana = store.list_for_user("ana").await;
        let ids: Vec<&str> = ana.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["record-3", "record-1"]);
        assert!(ana.iter().all(|r| r.username == "ana"));

        let global = store.list_global().await;
        let ids: Vec<&str> = global.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["record-3", "record-2", "record-1"]);
    }

    #[tokio::test]
    async fn user_list_is_subset_of_global_in_the_same_order() {
        let store = Store::open(unique_dir("subset")).await.unwrap();
        for i in 0..5 {
            let who = if i % 2 == 0 { "ana" } else { "ben" };
            store
                .append_record(record(&format!("record-{i}"), who))
                .await
                .unwrap();
        }

        let global: Vec<String> = store
            .list_global()
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        let ana: Vec<String> = store
            .list_for_user("ana")
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();

        let mut positions = ana
            .iter()
            .map(|id| global.iter().position(|g| g == id).expect("missing from global"));
        let mut last = positions.next().unwrap();
        for pos in positions {
            assert!(pos > last, "relative order differs between lists");
            last = pos;
        }
    }

    #[tokio::test]
    async fn duplicate_appends_are_kept() {
        let store = Store::open(unique_dir("dup")).await.unwrap();
        store.append_record(record("record-1", "ana")).await.unwrap();
        store.append_record(record("record-1", "ana")).await.unwrap();

        assert_eq!(store.list_for_user("ana").await.len(), 2);
        assert_eq!(store.list_global().await.len(), 2);
    }

    #[tokio::test]
    async fn corrupt_records_file_reads_as_empty() {
        let dir = unique_dir("corrupt");
        let store = Store::open(dir.clone()).await.unwrap();
        store.append_record(record("record-1", "ana")).await.unwrap();

        fs::write(dir.join(format!("{GLOBAL_RECORDS_KEY}.json")), b"{not json")
            .await
            .unwrap();
        assert!(store.list_global().await.is_empty());
        // the per-user key is untouched by the global key's corruption
        assert_eq!(store.list_for_user("ana").await.len(), 1);
    }

    #[tokio::test]
    async fn append_recovers_from_a_corrupt_collection() {
        let dir = unique_dir("recover");
        let store = Store::open(dir.clone()).await.unwrap();
        fs::write(dir.join(format!("{GLOBAL_RECORDS_KEY}.json")), b"42")
            .await
            .unwrap();

        store.append_record(record("record-1", "ana")).await.unwrap();
        assert_eq!(store.list_global().await.len(), 1);
    }

    #[tokio::test]
    async fn user_round_trips_and_clears() {
        let store = Store::open(unique_dir("user")).await.unwrap();
        assert!(store.restore_user().await.is_none());

        let user = User {
            username: "ana".to_string(),
        };
        store.save_user(&user).await.unwrap();
        assert_eq!(store.restore_user().await, Some(user));

        store.clear_user().await.unwrap();
        assert!(store.restore_user().await.is_none());
        // clearing twice is fine
        store.clear_user().await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_user_entry_is_cleared_on_restore() {
        let dir = unique_dir("user_corrupt");
        let store = Store::open(dir.clone()).await.unwrap();
        let path = dir.join(format!("{USER_KEY}.json"));
        fs::write(&path, b"][").await.unwrap();

        assert!(store.restore_user().await.is_none());
        assert!(fs::metadata(&path).await.is_err(), "corrupt entry not removed");
    }
}
