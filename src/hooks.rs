use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::utils::storage;

/// Signal-backed state mirrored to browser local storage.
#[derive(Clone)]
pub struct PersistedState<T: Clone + 'static> {
    pub value: Signal<T>,
    key: &'static str,
}

impl<T> PersistedState<T>
where
    T: Clone + Serialize + DeserializeOwned + Default + 'static,
{
    /// 读取当前值
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// 更新信号并同步写回 localStorage
    pub fn set(&mut self, value: T) {
        if let Err(err) = storage::store_json(self.key, &value) {
            log::warn!("failed to persist {}: {}", self.key, err);
        }
        self.value.set(value);
    }
}

/// Persisted-state hook: starts from `T::default()`, loads the stored
/// value once after mount, and mirrors every `set` back to storage.
pub fn use_persisted<T>(key: &'static str) -> PersistedState<T>
where
    T: Clone + Serialize + DeserializeOwned + Default + 'static,
{
    let mut value = use_signal(T::default);

    use_effect(move || match storage::load_json::<T>(key) {
        Ok(Some(stored)) => value.set(stored),
        Ok(None) => {}
        Err(err) => log::warn!("failed to load {}: {}", key, err),
    });

    PersistedState { value, key }
}
