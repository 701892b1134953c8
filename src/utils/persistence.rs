//! JSON persistence helpers for files under ~/.slots/.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.slots/ directory path, creating it if needed.
pub fn slots_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".slots");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.slots/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(slots_dir()?.join(filename))
}

/// Load a JSON file from ~/.slots/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match save_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("ignoring malformed {}: {}", path.display(), e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.slots/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<PathBuf> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_dir_exists() {
        let dir = slots_dir().expect("slots_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(".slots"));
    }

    #[test]
    fn test_save_path_format() {
        let path = save_path("test.json").expect("save_path should succeed");
        assert!(path.to_string_lossy().ends_with(".slots/test.json"));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default("nonexistent_test_file_12345.json");
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let data = vec!["cherry".to_string(), "seven".to_string()];
        let path = save_json("persistence_test.json", &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default("persistence_test.json");
        assert_eq!(loaded, data);

        fs::remove_file(path).ok();
    }
}
