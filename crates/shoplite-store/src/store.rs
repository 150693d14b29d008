//! # Key-Value Store
//!
//! The storage medium behind every component: four well-known keys, each
//! holding one JSON document.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Data Directory                                     │
//! │                                                                         │
//! │  products.json ──► Vec<Product>    the catalog                          │
//! │  users.json ─────► Vec<User>       registered accounts                  │
//! │  cart.json ──────► Vec<CartItem>   the active cart                      │
//! │  session.json ───► User            signed-in user (absent = nobody)     │
//! │                                                                         │
//! │  Components never touch files directly. They go through the             │
//! │  KeyValueStore trait, which also lets tests swap in MemoryStore.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Decode Boundary
//! `read`/`write` do the JSON step here, once. A document that does not
//! parse as the expected type surfaces as `StoreError::CorruptData` naming
//! the key, never as a stray error from inside an operation.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use shoplite_core::types::{CartItem, User};

use crate::error::{StoreError, StoreResult};
use crate::seed;

// =============================================================================
// Store Keys
// =============================================================================

/// The four collections the storefront persists.
///
/// An enum rather than free-form strings, so a typo'd key is a compile
/// error and match statements stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The product catalog (`Vec<Product>`).
    Products,
    /// Registered accounts (`Vec<User>`).
    Users,
    /// The active cart (`Vec<CartItem>`).
    Cart,
    /// The signed-in user (`User`, absent when nobody is signed in).
    Session,
}

impl StoreKey {
    /// The stable storage name for this key (also the file stem on disk).
    pub const fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Products => "products",
            StoreKey::Users => "users",
            StoreKey::Cart => "cart",
            StoreKey::Session => "session",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// KeyValueStore Trait
// =============================================================================

/// Raw string storage keyed by [`StoreKey`], plus typed helpers that do
/// the JSON step at this boundary.
///
/// Implementors only provide the three raw methods. Components are generic
/// over `S: KeyValueStore`, so production runs on [`JsonFileStore`] and
/// tests run on [`MemoryStore`] without changing a line of component code.
pub trait KeyValueStore {
    /// Returns the raw document under `key`, or `None` if absent.
    fn read_raw(&self, key: StoreKey) -> StoreResult<Option<String>>;

    /// Replaces the document under `key`.
    fn write_raw(&self, key: StoreKey, value: &str) -> StoreResult<()>;

    /// Removes the document under `key`. Removing an absent key is fine.
    fn remove(&self, key: StoreKey) -> StoreResult<()>;

    /// Reads and decodes the document under `key`.
    ///
    /// Absent key → `Ok(None)`. Present but undecodable → `CorruptData`.
    fn read<T: DeserializeOwned>(&self, key: StoreKey) -> StoreResult<Option<T>> {
        match self.read_raw(key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::CorruptData { key, source }),
        }
    }

    /// Like [`read`](Self::read), but an absent key decodes to the
    /// type's default (the empty collection, for our lists).
    fn read_or_default<T: DeserializeOwned + Default>(&self, key: StoreKey) -> StoreResult<T> {
        Ok(self.read(key)?.unwrap_or_default())
    }

    /// Encodes `value` and replaces the document under `key`.
    fn write<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)
            .map_err(|source| StoreError::Encode { key, source })?;
        self.write_raw(key, &raw)
    }
}

/// Components hold `S: KeyValueStore` by value; this lets callers hand
/// them a shared reference instead of giving up the store.
impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read_raw(&self, key: StoreKey) -> StoreResult<Option<String>> {
        (**self).read_raw(key)
    }

    fn write_raw(&self, key: StoreKey, value: &str) -> StoreResult<()> {
        (**self).write_raw(key, value)
    }

    fn remove(&self, key: StoreKey) -> StoreResult<()> {
        (**self).remove(key)
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory backend for tests and embedding.
///
/// The `Mutex` is interior plumbing so the store works through `&self`
/// like the file backend; there is no cross-thread contention to manage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<StoreKey, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<StoreKey, String>> {
        // Single-threaded usage; a poisoned lock just means an earlier
        // panic mid-write, and the map is still usable.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn read_raw(&self, key: StoreKey) -> StoreResult<Option<String>> {
        Ok(self.entries().get(&key).cloned())
    }

    fn write_raw(&self, key: StoreKey, value: &str) -> StoreResult<()> {
        self.entries().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: StoreKey) -> StoreResult<()> {
        self.entries().remove(&key);
        Ok(())
    }
}

// =============================================================================
// JSON File Store
// =============================================================================

/// Durable backend: one `<key>.json` file per collection under a data
/// directory. Process-local; writes survive across invocations.
///
/// ## Usage
/// ```rust,ignore
/// let store = JsonFileStore::open("~/.local/share/shoplite")?;
/// initialize(&store)?;
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();

        fs::create_dir_all(&dir).map_err(|source| StoreError::Write {
            path: dir.clone(),
            source,
        })?;

        debug!(dir = %dir.display(), "opened file store");
        Ok(JsonFileStore { dir })
    }

    /// The directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read_raw(&self, key: StoreKey) -> StoreResult<Option<String>> {
        let path = self.path(key);

        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    fn write_raw(&self, key: StoreKey, value: &str) -> StoreResult<()> {
        let path = self.path(key);
        fs::write(&path, value).map_err(|source| StoreError::Write { path, source })
    }

    fn remove(&self, key: StoreKey) -> StoreResult<()> {
        let path = self.path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Write { path, source }),
        }
    }
}

// =============================================================================
// First-Run Seeding
// =============================================================================

/// Prepares a store for first use. Idempotent: collections that already
/// exist are left exactly as they are.
///
/// - `products` absent → seeded with the sample catalog
/// - `users` absent → written as the empty list
/// - `cart` absent → written as the empty list
/// - `session` is never written; its default state is absence
pub fn initialize<S: KeyValueStore>(store: &S) -> StoreResult<()> {
    if store.read_raw(StoreKey::Products)?.is_none() {
        let products = seed::sample_products();
        info!(count = products.len(), "seeding product catalog");
        store.write(StoreKey::Products, &products)?;
    }

    if store.read_raw(StoreKey::Users)?.is_none() {
        store.write(StoreKey::Users, &Vec::<User>::new())?;
    }

    if store.read_raw(StoreKey::Cart)?.is_none() {
        store.write(StoreKey::Cart, &Vec::<CartItem>::new())?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
