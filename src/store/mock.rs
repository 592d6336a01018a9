//! store::mock
//!
//! Mock tree store implementation for deterministic testing.
//!
//! # Design
//!
//! The mock store provides a deterministic implementation of the
//! `TreeStore` trait for use in tests. It stores trees in memory, assigns
//! incrementing ids, records every operation, and allows configuring
//! failure scenarios.
//!
//! # Example
//!
//! ```
//! use tagtree::store::mock::MockTreeStore;
//! use tagtree::store::TreeStore;
//! use tagtree::core::canonical::CanonicalNode;
//!
//! # tokio_test::block_on(async {
//! let store = MockTreeStore::new();
//!
//! let tree = CanonicalNode {
//!     name: "root".to_string(),
//!     children: None,
//!     data: Some("Data".to_string()),
//! };
//!
//! let record = store.create(&tree).await.unwrap();
//! assert_eq!(record.id, 1);
//!
//! let fetched = store.get(1).await.unwrap();
//! assert_eq!(fetched.data.name, "root");
//! # });
//! ```

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::traits::{StoreError, TreeRecord, TreeStore};
use crate::core::canonical::CanonicalNode;

/// Mock tree store for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockTreeStore {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockStoreInner>>,
}

impl Default for MockTreeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal mutable state.
#[derive(Debug)]
struct MockStoreInner {
    /// Stored trees by id (BTreeMap keeps list order deterministic).
    trees: BTreeMap<u64, CanonicalNode>,
    /// Next id to assign.
    next_id: u64,
    /// Method to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail list with the given error.
    List(StoreError),
    /// Fail get with the given error.
    Get(StoreError),
    /// Fail create with the given error.
    Create(StoreError),
    /// Fail update with the given error.
    Update(StoreError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    List,
    Get { id: u64 },
    Create { data: CanonicalNode },
    Update { id: u64, data: CanonicalNode },
}

impl MockTreeStore {
    /// Create a new empty mock store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockStoreInner {
                trees: BTreeMap::new(),
                next_id: 1,
                fail_on: None,
                operations: Vec::new(),
            })),
        }
    }

    /// Create a mock store with pre-existing trees.
    ///
    /// # Example
    ///
    /// ```
    /// use tagtree::store::mock::MockTreeStore;
    /// use tagtree::store::TreeRecord;
    /// use tagtree::core::canonical::CanonicalNode;
    ///
    /// let record = TreeRecord {
    ///     id: 42,
    ///     data: CanonicalNode {
    ///         name: "existing".to_string(),
    ///         children: None,
    ///         data: Some("Data".to_string()),
    ///     },
    /// };
    ///
    /// let store = MockTreeStore::with_trees(vec![record]);
    /// ```
    pub fn with_trees(records: Vec<TreeRecord>) -> Self {
        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        let trees: BTreeMap<u64, CanonicalNode> =
            records.into_iter().map(|r| (r.id, r.data)).collect();

        Self {
            inner: Arc::new(Mutex::new(MockStoreInner {
                trees,
                next_id: max_id + 1,
                fail_on: None,
                operations: Vec::new(),
            })),
        }
    }

    /// Configure the mock to fail on a specific operation.
    ///
    /// # Example
    ///
    /// ```
    /// use tagtree::store::mock::{FailOn, MockTreeStore};
    /// use tagtree::store::StoreError;
    ///
    /// let store = MockTreeStore::new()
    ///     .fail_on(FailOn::Create(StoreError::NetworkError("offline".into())));
    /// ```
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Clear the failure configuration.
    pub fn clear_fail_on(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_on = None;
    }

    /// Get all recorded operations.
    ///
    /// Useful for verifying the store was called correctly.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }

    /// Number of trees currently stored.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().trees.len()
    }

    /// Whether the store holds no trees.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().trees.is_empty()
    }
}

#[async_trait]
impl TreeStore for MockTreeStore {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list(&self) -> Result<Vec<TreeRecord>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::List);

        if let Some(FailOn::List(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(inner
            .trees
            .iter()
            .map(|(id, data)| TreeRecord {
                id: *id,
                data: data.clone(),
            })
            .collect())
    }

    async fn get(&self, id: u64) -> Result<TreeRecord, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::Get { id });

        if let Some(FailOn::Get(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        inner
            .trees
            .get(&id)
            .map(|data| TreeRecord {
                id,
                data: data.clone(),
            })
            .ok_or_else(|| StoreError::NotFound(format!("Tree {id} not found")))
    }

    async fn create(&self, data: &CanonicalNode) -> Result<TreeRecord, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::Create { data: data.clone() });

        if let Some(FailOn::Create(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        let id = inner.next_id;
        inner.next_id += 1;
        inner.trees.insert(id, data.clone());

        Ok(TreeRecord {
            id,
            data: data.clone(),
        })
    }

    async fn update(&self, id: u64, data: &CanonicalNode) -> Result<TreeRecord, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::Update {
            id,
            data: data.clone(),
        });

        if let Some(FailOn::Update(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        if !inner.trees.contains_key(&id) {
            return Err(StoreError::NotFound(format!("Tree {id} not found")));
        }
        inner.trees.insert(id, data.clone());

        Ok(TreeRecord {
            id,
            data: data.clone(),
        })
    }
}
