use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{window, Storage};

use crate::utils::error::{AppError, Result};

/// Browser local storage handle.
fn local_storage() -> Result<Storage> {
    window()
        .ok_or_else(|| AppError::Storage("no window object".to_string()))?
        .local_storage()
        .map_err(|_| AppError::Storage("local storage unavailable".to_string()))?
        .ok_or_else(|| AppError::Storage("local storage disabled".to_string()))
}

/// Read and decode a JSON value; `Ok(None)` when the key was never written.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>> {
    let storage = local_storage()?;
    let raw = storage
        .get_item(key)
        .map_err(|_| AppError::Storage(format!("failed to read {key}")))?;
    match raw {
        Some(text) => Ok(Some(serde_json::from_str(&text)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON value under `key`.
pub fn store_json<T: Serialize>(key: &str, value: &T) -> Result<()> {
    let storage = local_storage()?;
    let text = serde_json::to_string(value)?;
    storage
        .set_item(key, &text)
        .map_err(|_| AppError::Storage(format!("failed to write {key}")))
}
