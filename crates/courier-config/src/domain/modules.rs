//! Ordered extension modules.

use crate::ports::BusModule;
use std::sync::Arc;

/// Modules in registration order.
#[derive(Clone, Default)]
pub struct ModuleCollection {
    modules: Vec<Arc<dyn BusModule>>,
}

impl ModuleCollection {
    /// An empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a module.
    pub fn add(&mut self, module: Arc<dyn BusModule>) {
        tracing::debug!(module = module.name(), "Module added");
        self.modules.push(module);
    }

    /// Modules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn BusModule>> {
        self.modules.iter()
    }

    /// Module names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|m| m.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl std::fmt::Debug for ModuleCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl BusModule for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_modules_keep_registration_order() {
        let mut modules = ModuleCollection::new();
        modules.add(Arc::new(Named("audit")));
        modules.add(Arc::new(Named("metrics")));
        modules.add(Arc::new(Named("audit")));

        assert_eq!(modules.len(), 3);
        assert_eq!(modules.names(), vec!["audit", "metrics", "audit"]);
        let first = modules.iter().next().unwrap();
        let last = modules.iter().last().unwrap();
        assert_eq!(first.name(), last.name());
        assert!(!Arc::ptr_eq(first, last));
    }
}
