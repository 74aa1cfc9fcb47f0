//! 定时器封装模块

use gloo_timers::callback::Timeout;

/// 延迟 `millis` 毫秒后执行一次回调
///
/// 定时器不会被取消，回调执行时组件可能已卸载，
/// 因此回调内只应操作信号（已释放的信号写入会被忽略）。
pub fn run_after<F>(millis: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis, callback).forget();
}
