//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心 crate 的 `KeyValueStore`。

use esl_portal::KeyValueStore;

/// 浏览器 LocalStorage
///
/// 每次操作都重新获取 Storage 实例，不持有任何句柄。
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 配额已满或隐私模式下写入可能失败
    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
