use std::sync::Mutex;

/// Every variable `DashboardConfig::apply_env` reads.
pub const DASHBOARD_ENV_KEYS: [&str; 4] = ["HOST", "PORT", "REFRESH_SECONDS", "SOLAR_PHASE_DATE"];

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with the dashboard variables set to `changes` and all others cleared.
///
/// Serialized across tests and restored on unwind, since the process
/// environment is global.
pub fn with_dashboard_env<F, R>(changes: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = EnvSnapshot::capture();

    for key in DASHBOARD_ENV_KEYS {
        std::env::remove_var(key);
    }
    for (key, value) in changes {
        std::env::set_var(key, value);
    }
    f()
}

struct EnvSnapshot {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvSnapshot {
    fn capture() -> Self {
        Self {
            saved: DASHBOARD_ENV_KEYS
                .iter()
                .map(|k| (*k, std::env::var(k).ok()))
                .collect(),
        }
    }
}

impl Drop for EnvSnapshot {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
    }
}
