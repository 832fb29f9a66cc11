// Global preferences for the app (not tied to feed content)
use std::fs;
use std::path::PathBuf;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::feed::SortKey;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GlobalPrefs {
    pub relative_timestamps: bool,
    pub show_engagement_badges: bool,
    pub default_sort: SortKey,
}

impl Default for GlobalPrefs {
    fn default() -> Self {
        Self {
            relative_timestamps: true,
            show_engagement_badges: true,
            default_sort: SortKey::Recent,
        }
    }
}

impl GlobalPrefs {
    pub fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".harborlight_prefs.json")
    }

    pub fn load() -> Self {
        let path = Self::config_path();
        if let Ok(data) = fs::read_to_string(&path) {
            if let Ok(prefs) = serde_json::from_str(&data) {
                return prefs;
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        let path = Self::config_path();
        if let Ok(data) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, data);
        }
    }
}

static GLOBAL_PREFS: OnceCell<RwLock<GlobalPrefs>> = OnceCell::new();

pub fn init_global_prefs() {
    let prefs = GlobalPrefs::load();
    GLOBAL_PREFS.set(RwLock::new(prefs)).ok();
}

pub fn global_prefs() -> std::sync::RwLockReadGuard<'static, GlobalPrefs> {
    GLOBAL_PREFS
        .get_or_init(|| RwLock::new(GlobalPrefs::default()))
        .read()
        .expect("RwLock poisoned")
}

pub fn global_prefs_mut() -> std::sync::RwLockWriteGuard<'static, GlobalPrefs> {
    GLOBAL_PREFS
        .get_or_init(|| RwLock::new(GlobalPrefs::default()))
        .write()
        .expect("RwLock poisoned")
}
