mod registry;
mod traits;

// Service extractors
mod bunkr;
mod cyberdrop;
mod googledrive;

pub use registry::ServiceRegistry;
pub use traits::{DelegateError, Link, ServiceExtractor};

pub use bunkr::BunkrExtractor;
pub use cyberdrop::CyberdropExtractor;
pub use googledrive::GoogleDriveExtractor;

/// Registry holding every builtin service.
#[must_use]
pub fn builtin() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register(Box::new(BunkrExtractor::new()));
    registry.register(Box::new(CyberdropExtractor::new()));
    registry.register(Box::new(GoogleDriveExtractor::new()));
    registry
}
