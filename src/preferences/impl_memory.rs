use crate::preferences::interface::{PersistentPreferences, PreferenceCallback};
use std::collections::HashMap;
use std::sync::Mutex;

pub struct PreferencesMemory {
    values: Mutex<HashMap<String, String>>,
    subscribers: Mutex<HashMap<String, Vec<PreferenceCallback>>>,
}

impl PreferencesMemory {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            subscribers: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for PreferencesMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistentPreferences for PreferencesMemory {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());

        if let Some(callbacks) = self.subscribers.lock().unwrap().get(key) {
            for callback in callbacks {
                callback(value);
            }
        }
        Ok(())
    }

    fn subscribe(
        &self,
        key: &str,
        callback: PreferenceCallback,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.subscribers
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push(callback);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_set_then_get() {
        let prefs = PreferencesMemory::new();

        prefs.set("region", "EU").unwrap();

        assert_eq!(prefs.get("region").unwrap(), Some("EU".to_string()));
        assert_eq!(prefs.get("theme").unwrap(), None);
    }

    #[test]
    fn test_subscribe_fires_on_set() {
        let prefs = PreferencesMemory::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let fired_clone = fired.clone();
        prefs
            .subscribe(
                "theme",
                Box::new(move |value| {
                    assert_eq!(value, "light");
                    fired_clone.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        prefs.set("theme", "light").unwrap();
        prefs.set("region", "EU").unwrap();

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
