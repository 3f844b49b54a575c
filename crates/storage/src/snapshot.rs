use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stockroom_core::ProductId;
use stockroom_inventory::{InventoryManager, Product};

use crate::error::StorageError;

/// File-backed snapshot of the full product collection.
///
/// The snapshot is one JSON document mapping product id to product record
/// (`id`, `name`, `price`, `stock`). A save replaces the whole document in a
/// single atomic step: the new content is written to a temp file in the same
/// directory and then renamed over the previous snapshot, so a concurrent
/// reader never observes a partial write and a failed save leaves the prior
/// state intact.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted collection.
    ///
    /// A missing file yields an empty inventory, not an error. A file that
    /// exists but cannot be decoded into a valid inventory fails with
    /// [`StorageError::Corrupt`]; whether that means "start empty" or "abort
    /// startup" is the caller's policy, not the adapter's.
    pub fn load(&self) -> Result<InventoryManager, StorageError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot found, starting empty");
                return Ok(InventoryManager::new());
            }
            Err(err) => return Err(StorageError::io(&self.path, err)),
        };

        let products: BTreeMap<ProductId, Product> =
            serde_json::from_slice(&raw).map_err(|err| StorageError::corrupt(&self.path, err))?;

        tracing::debug!(
            path = %self.path.display(),
            products = products.len(),
            "loaded inventory snapshot"
        );
        Ok(InventoryManager::with_products(products.into_values()))
    }

    /// Persist the full collection as one atomic snapshot, overwriting any
    /// prior state.
    pub fn save(&self, manager: &InventoryManager) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| StorageError::io(parent, err))?;
            }
        }

        let products: BTreeMap<&ProductId, &Product> = manager
            .list_products()
            .map(|product| (product.id(), product))
            .collect();
        let json = serde_json::to_vec_pretty(&products).map_err(StorageError::Encode)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(|err| StorageError::io(&tmp, err))?;
        fs::rename(&tmp, &self.path).map_err(|err| StorageError::io(&self.path, err))?;

        tracing::debug!(
            path = %self.path.display(),
            products = manager.len(),
            "saved inventory snapshot"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> SnapshotStore {
        SnapshotStore::new(dir.join("inventory.json"))
    }

    fn sample_manager() -> InventoryManager {
        let mut manager = InventoryManager::new();
        manager.add_product("P1", "Widget", 9.99, 10).unwrap();
        manager.add_product("P2", "Gadget", 2.50, 0).unwrap();
        manager
    }

    #[test]
    fn load_missing_file_yields_empty_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = store_in(dir.path()).load().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_then_load_is_a_fixed_point() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let manager = sample_manager();

        store.save(&manager).unwrap();
        let loaded = store.load().unwrap();

        let before: Vec<&Product> = manager.list_products().collect();
        let after: Vec<&Product> = loaded.list_products().collect();
        assert_eq!(before, after);

        // Saving what we loaded changes nothing on disk.
        let first = fs::read(store.path()).unwrap();
        store.save(&loaded).unwrap();
        assert_eq!(fs::read(store.path()).unwrap(), first);
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), b"{ not json").unwrap();

        assert!(matches!(store.load(), Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn load_rejects_invariant_violating_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(
            store.path(),
            br#"{"P1":{"id":"P1","name":"Widget","price":9.99,"stock":-2}}"#,
        )
        .unwrap();

        assert!(matches!(store.load(), Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn save_overwrites_prior_snapshot_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(&sample_manager()).unwrap();

        let mut updated = sample_manager();
        updated.adjust_stock("P1", -4).unwrap();
        store.save(&updated).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.get("P1").unwrap().stock(), 6);

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["inventory.json"]);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("data").join("inventory.json"));
        store.save(&sample_manager()).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }
}
