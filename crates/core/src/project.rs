//! Project portfolio constants.

/// Status assigned to a project when the admin does not pick one.
pub const DEFAULT_STATUS: &str = "Tamamlandı";

/// Entity name used in not-found errors.
pub const ENTITY_PROJECT: &str = "Project";

/// Entity name used in not-found errors.
pub const ENTITY_CONTACT_MESSAGE: &str = "ContactMessage";
