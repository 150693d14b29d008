//! # Component Module
//!
//! The four storefront components, each a read-modify-write wrapper over
//! the key-value store.
//!
//! ## Component Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Component Pattern Explained                          │
//! │                                                                         │
//! │  Each component owns one slice of the storefront's behavior and        │
//! │  abstracts store access behind a clean API.                             │
//! │                                                                         │
//! │  UI action                                                              │
//! │       │                                                                 │
//! │       │  catalog.add(draft, current_user.as_ref())                      │
//! │       ▼                                                                 │
//! │  ProductCatalog                                                         │
//! │  ├── read the collection        ◄── store.read_or_default(key)          │
//! │  ├── apply the rule             ◄── shoplite-core (pure)                │
//! │  └── write the collection back  ──► store.write(key, &list)             │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                         │
//! │  • Easy to test (MemoryStore fake)                                      │
//! │  • The storage medium is swappable                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Components
//!
//! - [`catalog::ProductCatalog`] - Product CRUD, search, sort
//! - [`account::AccountDirectory`] - Registration
//! - [`session::SessionAuth`] - Login, current user, logout
//! - [`cart::ShoppingCart`] - Cart lines and checkout summary

pub mod account;
pub mod cart;
pub mod catalog;
pub mod session;

use chrono::Utc;

/// Allocates the next record id for a collection.
///
/// Ids are the creation timestamp in milliseconds. When two records land
/// within one millisecond (or the clock steps backwards), the allocator
/// advances past the largest existing id, so ids stay unique and strictly
/// increasing.
pub(crate) fn next_record_id<I>(existing: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let now = Utc::now().timestamp_millis();

    match existing.into_iter().max() {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_collection_gets_a_timestamp() {
        let before = Utc::now().timestamp_millis();
        let id = next_record_id([]);
        let after = Utc::now().timestamp_millis();

        assert!(id >= before);
        assert!(id <= after + 1);
    }

    #[test]
    fn test_collision_advances_past_max() {
        let future = Utc::now().timestamp_millis() + 60_000;
        let id = next_record_id([future, future - 10]);
        assert_eq!(id, future + 1);
    }

    #[test]
    fn test_repeated_allocation_is_strictly_increasing() {
        let mut ids: Vec<i64> = Vec::new();
        for _ in 0..5 {
            let id = next_record_id(ids.iter().copied());
            ids.push(id);
        }

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_old_ids_do_not_hold_the_clock_back() {
        let id = next_record_id([1, 2, 3]);
        assert!(id > 1_000_000_000_000); // a current timestamp, not 4
    }
}
