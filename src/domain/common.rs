use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Linear id lookup; ledger collections are small and insertion-ordered.
pub fn find_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Case-insensitive name collision check used when configuring named entities.
pub fn name_exists<T: NamedEntity>(items: &[T], candidate: &str) -> bool {
    let normalized = candidate.trim().to_lowercase();
    items
        .iter()
        .any(|item| item.name().trim().to_lowercase() == normalized)
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;
