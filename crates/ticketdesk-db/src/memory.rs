use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use ticketdesk_models::{SubjectId, SubjectRecord};

use crate::{StoreError, SubjectStore};

/// Subject store held in process memory.
///
/// The lock is only taken for the map access itself, never across an await.
#[derive(Clone, Debug, Default)]
pub struct InMemorySubjectStore {
    subjects: Arc<RwLock<HashMap<SubjectId, SubjectRecord>>>,
}

impl InMemorySubjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a record, returning the previous one.
    pub fn insert(&self, record: SubjectRecord) -> Result<Option<SubjectRecord>, StoreError> {
        let mut subjects = self.subjects.write().map_err(poisoned)?;
        Ok(subjects.insert(record.id.clone(), record))
    }

    pub fn remove(&self, id: &SubjectId) -> Result<Option<SubjectRecord>, StoreError> {
        let mut subjects = self.subjects.write().map_err(poisoned)?;
        Ok(subjects.remove(id))
    }

    /// Counts records. A poisoned lock still reports what the map holds.
    pub fn len(&self) -> usize {
        self.subjects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<SubjectRecord> for InMemorySubjectStore {
    fn from_iter<I: IntoIterator<Item = SubjectRecord>>(iter: I) -> Self {
        let subjects: HashMap<SubjectId, SubjectRecord> = iter
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();

        Self {
            subjects: Arc::new(RwLock::new(subjects)),
        }
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("subject map lock poisoned".to_string())
}

#[async_trait]
impl SubjectStore for InMemorySubjectStore {
    async fn find_subject_by_id(&self, id: &SubjectId) -> Result<Option<SubjectRecord>, StoreError> {
        let subjects = self.subjects.read().map_err(poisoned)?;
        Ok(subjects.get(id).cloned())
    }

    async fn find_subject_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubjectRecord>, StoreError> {
        let subjects = self.subjects.read().map_err(poisoned)?;
        Ok(subjects
            .values()
            .find(|record| record.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}
