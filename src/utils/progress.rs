//! 终端忙碌提示

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// 创建一个转圈提示，调用方负责在结束后 `finish_and_clear`
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    let message: String = message.into();
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
