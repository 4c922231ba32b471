use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::repos::fortune::store::{FortuneRow, FortuneStore, StoreError, StoreResult};

/// Rejected input for [`MemoryFortuneStore::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidFortunes {
    #[error("duplicate fortune id {0}")]
    DuplicateId(i64),
    #[error("fortune {0} has empty text")]
    EmptyText(i64),
}

/// Fixed, in-process fortune list.
///
/// Backs the `memory` store backend and the tests. The list never changes after
/// construction, so clones share one allocation.
#[derive(Clone, Debug, Default)]
pub struct MemoryFortuneStore {
    fortunes: Arc<[FortuneRow]>,
}

impl MemoryFortuneStore {
    /// Ids must be unique and texts non-empty.
    pub fn new(fortunes: Vec<FortuneRow>) -> Result<Self, InvalidFortunes> {
        let mut ids = HashSet::with_capacity(fortunes.len());
        for fortune in &fortunes {
            if fortune.text.trim().is_empty() {
                return Err(InvalidFortunes::EmptyText(fortune.id));
            }
            if !ids.insert(fortune.id) {
                return Err(InvalidFortunes::DuplicateId(fortune.id));
            }
        }

        Ok(Self {
            fortunes: fortunes.into(),
        })
    }

    /// Store pre-loaded with a small set of fortunes for local runs.
    pub fn seeded() -> Self {
        const SEED: [(i64, &str); 6] = [
            (1000, "Do what works."),
            (1001, "Do the right thing."),
            (1002, "Always be kind."),
            (1003, "You learn from your mistakes... You will learn a lot today."),
            (1004, "You can always find happiness at work on Friday."),
            (1005, "You will be hungry again in one hour."),
        ];

        // Covered by `seeded_ids_are_unique_and_texts_non_empty`.
        Self {
            fortunes: SEED
                .iter()
                .map(|(id, text)| FortuneRow {
                    id: *id,
                    text: (*text).to_string(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fortunes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fortunes.is_empty()
    }
}

#[async_trait]
impl FortuneStore for MemoryFortuneStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list_all(&self) -> StoreResult<Vec<FortuneRow>> {
        Ok(self.fortunes.to_vec())
    }

    async fn random_fortune(&self) -> StoreResult<FortuneRow> {
        self.fortunes
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(StoreError::Empty)
    }
}
