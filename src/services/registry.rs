use super::traits::ServiceExtractor;

/// Registry of service extractors.
///
/// Populated at startup and read-only afterwards. The dispatcher is
/// agnostic to how many services are registered or what they are.
pub struct ServiceRegistry {
    services: Vec<Box<dyn ServiceExtractor>>,
}

impl ServiceRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: Vec::new(),
        }
    }

    /// Register a service.
    pub fn register(&mut self, service: Box<dyn ServiceExtractor>) {
        self.services.push(service);
    }

    /// All registered services, in registration order.
    #[must_use]
    pub fn services(&self) -> &[Box<dyn ServiceExtractor>] {
        &self.services
    }

    /// Number of registered services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
