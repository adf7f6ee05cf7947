//! Append-only record logs for bookings and inquiries.

use std::marker::PhantomData;

use tracing::debug;
use voyage_store::Repository;

use crate::checkout::Booking;
use crate::contact::Inquiry;
use crate::error::CommerceError;
use crate::ids::RecordId;

/// A record kept in a [`RecordLog`].
pub trait Record {
    fn id(&self) -> RecordId;
}

/// Insertion-ordered list of immutable records.
///
/// Records are only ever appended or deleted. Ids strictly increase along
/// the log.
#[derive(Debug, Clone)]
pub struct RecordLog<R, T> {
    repo: R,
    _phantom: PhantomData<fn() -> T>,
}

/// Completed checkouts.
pub type BookingLog<R> = RecordLog<R, Booking>;

/// Contact-form submissions.
pub type InquiryLog<R> = RecordLog<R, Inquiry>;

impl<R: Repository<T>, T: Record> RecordLog<R, T> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _phantom: PhantomData,
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> Result<Vec<T>, CommerceError> {
        Ok(self.repo.load()?)
    }

    /// Find a record by id.
    pub fn get(&self, id: RecordId) -> Result<Option<T>, CommerceError> {
        Ok(self.list()?.into_iter().find(|r| r.id() == id))
    }

    pub fn len(&self) -> Result<usize, CommerceError> {
        Ok(self.list()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CommerceError> {
        Ok(self.list()?.is_empty())
    }

    /// A fresh id newer than every record in the log.
    pub fn next_id(&self, now_ms: i64) -> Result<RecordId, CommerceError> {
        let newest = self.list()?.iter().map(Record::id).max();
        Ok(RecordId::generate_after(newest, now_ms))
    }

    /// Append a record. Its id must be newer than the last record's.
    pub fn append(&self, record: T) -> Result<(), CommerceError> {
        let id = record.id();
        self.repo.update(|records| {
            if records.last().is_some_and(|last| last.id() >= id) {
                return Err(CommerceError::RecordIdConflict(id.get()));
            }
            records.push(record);
            Ok(())
        })?;
        debug!(%id, "appended record");
        Ok(())
    }

    /// Delete the record with `id`. Returns whether one was found.
    pub fn delete(&self, id: RecordId) -> Result<bool, CommerceError> {
        let deleted = self.repo.update(|records| {
            let len_before = records.len();
            records.retain(|r| r.id() != id);
            Ok::<_, CommerceError>(records.len() < len_before)
        })?;
        debug!(%id, deleted, "deleted record");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde::{Deserialize, Serialize};
    use voyage_store::{Collection, MemoryStore};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: RecordId,
        text: String,
    }

    impl Record for Note {
        fn id(&self) -> RecordId {
            self.id
        }
    }

    fn note(id: u64, text: &str) -> Note {
        Note {
            id: RecordId::new(id),
            text: text.to_string(),
        }
    }

    fn log() -> RecordLog<Collection<MemoryStore, Note>, Note> {
        RecordLog::new(Collection::new(MemoryStore::new(), "notes"))
    }

    #[test]
    fn test_append_and_list_in_order() {
        let log = log();
        log.append(note(10, "a")).unwrap();
        log.append(note(20, "b")).unwrap();

        assert_eq!(log.list().unwrap(), vec![note(10, "a"), note(20, "b")]);
        assert_eq!(log.get(RecordId::new(20)).unwrap(), Some(note(20, "b")));
        assert_eq!(log.get(RecordId::new(30)).unwrap(), None);
    }

    #[test]
    fn test_stale_id_rejected() {
        let log = log();
        log.append(note(10, "a")).unwrap();
        assert_matches!(log.append(note(10, "dup")), Err(CommerceError::RecordIdConflict(10)));
        assert_matches!(log.append(note(5, "old")), Err(CommerceError::RecordIdConflict(5)));
        assert_eq!(log.len().unwrap(), 1);
    }

    #[test]
    fn test_next_id_passes_newest() {
        let log = log();
        log.append(note(u64::MAX / 2, "future")).unwrap();
        let id = log.next_id(1_000).unwrap();
        assert!(id.get() > u64::MAX / 2);
        log.append(note(id.get(), "next")).unwrap();
    }

    #[test]
    fn test_delete_preserves_others() {
        let log = log();
        for (id, text) in [(1, "a"), (2, "b"), (3, "c")] {
            log.append(note(id, text)).unwrap();
        }

        assert!(log.delete(RecordId::new(2)).unwrap());
        assert!(!log.delete(RecordId::new(2)).unwrap());
        assert_eq!(log.list().unwrap(), vec![note(1, "a"), note(3, "c")]);
    }
}
