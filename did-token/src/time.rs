#[cfg(target_arch = "wasm32")]
use instant::SystemTime;
#[cfg(not(target_arch = "wasm32"))]
use std::time::SystemTime;

/// Seconds since the Unix epoch; clocks set before the epoch read as zero
pub fn now() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or_default()
}
