use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::environment::Environment;
use crate::platform::CiPlatform;
use crate::Result;

/// In-memory platform for tests: inputs and environment are seeded through
/// builders, and everything written can be read back.
#[derive(Default)]
pub struct MemoryPlatform {
    environment: Environment,
    inputs: BTreeMap<String, String>,
    outputs: Mutex<BTreeMap<String, String>>,
    variables: Mutex<BTreeMap<String, String>>,
    summaries: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
}

impl MemoryPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.environment = self.environment.set(name, value);
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn outputs(&self) -> BTreeMap<String, String> {
        self.outputs.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn variables(&self) -> BTreeMap<String, String> {
        self.variables.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn summaries(&self) -> Vec<String> {
        self.summaries.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().expect("lock poisoned").clone()
    }
}

impl CiPlatform for MemoryPlatform {
    fn raw_input(&self, name: &str) -> Option<String> {
        self.inputs.get(name).cloned()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.environment.get(name).map(str::to_string)
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        self.outputs
            .lock()
            .expect("lock poisoned")
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        self.variables
            .lock()
            .expect("lock poisoned")
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn add_summary(&self, markdown: &str) -> Result<()> {
        self.summaries
            .lock()
            .expect("lock poisoned")
            .push(markdown.to_string());
        Ok(())
    }

    fn report_failure(&self, message: &str) {
        self.failures
            .lock()
            .expect("lock poisoned")
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_outputs_and_variables() {
        let platform = MemoryPlatform::new();

        platform
            .set_output("release-published", "false")
            .expect("memory write");
        platform
            .export_variable("RELEASE_PUBLISHED", "false")
            .expect("memory write");

        assert_eq!(
            platform.outputs().get("release-published"),
            Some(&"false".to_string())
        );
        assert_eq!(
            platform.variables().get("RELEASE_PUBLISHED"),
            Some(&"false".to_string())
        );
    }

    #[test]
    fn records_failures() {
        let platform = MemoryPlatform::new();

        platform.report_failure("engine exploded");

        assert_eq!(platform.failures(), vec!["engine exploded".to_string()]);
    }
}
