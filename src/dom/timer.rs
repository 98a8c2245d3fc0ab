//! `setTimeout`-backed sleeping

use gloo_timers::future::TimeoutFuture;

use crate::loader::Sleep;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleep;

impl Sleep for BrowserSleep {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
