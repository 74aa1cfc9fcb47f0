//! 主题状态
//!
//! 全局的明/暗主题开关，仅在当前会话内有效。

use leptos::prelude::*;

/// 主题上下文
#[derive(Clone, Copy)]
pub struct ThemeContext {
    is_dark: RwSignal<bool>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self {
            is_dark: RwSignal::new(false),
        }
    }

    /// 当前是否为暗色主题（响应式读取）
    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    pub fn toggle(&self) {
        self.is_dark.update(|dark| *dark = !*dark);
    }

    /// DaisyUI 的 `data-theme` 值
    pub fn daisy_theme(&self) -> &'static str {
        if self.is_dark() { "dark" } else { "light" }
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
