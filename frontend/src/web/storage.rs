//! LocalStorage 封装模块
//!
//! 基于 `gloo-storage`，只暴露应用实际需要的字符串读写。

use gloo_storage::Storage;

/// 本地存储操作封装
pub struct LocalStorage;

impl LocalStorage {
    /// 获取存储的字符串值
    ///
    /// 键不存在或值无法解析时返回 `None`。
    pub fn get(key: &str) -> Option<String> {
        gloo_storage::LocalStorage::get::<String>(key).ok()
    }

    /// 设置存储值，返回是否成功
    pub fn set(key: &str, value: &str) -> bool {
        gloo_storage::LocalStorage::set(key, value).is_ok()
    }
}
