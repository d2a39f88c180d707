use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};
use std::time::Instant;

pub static LAST_LOG: LazyLock<Mutex<HashMap<String, Instant>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns true at most once every `seconds` for a given call site.
pub fn should_log(location: String, seconds: u64) -> bool {
    let Ok(mut last_log) = LAST_LOG.lock() else {
        return true;
    };
    if last_log
        .get(&location)
        .is_some_and(|then| then.elapsed().as_secs() < seconds)
    {
        return false;
    }
    last_log.insert(location, Instant::now());
    true
}

#[macro_export]
macro_rules! warn_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        if $crate::util::log::should_log($crate::current_location!(), $seconds) {
            ::tracing::warn!($($args),+);
        }
    }
}
