use chrono::TimeZone;
use chrono::Utc;

use crate::error::{ListKeeperError, Result};
use crate::model::{Note, NoteColor, NoteDraft};

/// The authoritative in-memory note collection.
///
/// Single-threaded, single-writer: the store is mutated only from the UI
/// event path, so there is no locking. Notes keep insertion order, and ids
/// are assigned as `max(existing ids) + 1` (1 for an empty store).
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted notes. Order and ids are
    /// kept as-is.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// The current collection, in insertion order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Validate and append a new note, assigning the next id.
    pub fn add(&mut self, draft: NoteDraft) -> Result<Note> {
        validate(&draft.title, &draft.content)?;

        let id = self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        let note = Note {
            id,
            title: draft.title,
            content: draft.content,
            due_date: draft.due_date,
            is_completed: draft.is_completed,
            color: draft.color,
        };
        self.notes.push(note.clone());
        Ok(note)
    }

    /// Whole-record replace, matched by id.
    pub fn update(&mut self, note: Note) -> Result<()> {
        validate(&note.title, &note.content)?;

        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(slot) => {
                *slot = note;
                Ok(())
            }
            None => Err(ListKeeperError::NoteNotFound(note.id)),
        }
    }

    /// Remove by id. Deleting an absent id is a no-op, so retries are safe.
    pub fn delete(&mut self, id: i64) {
        self.notes.retain(|n| n.id != id);
    }
}

fn validate(title: &str, content: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ListKeeperError::Validation(
            "Note title must not be empty".to_string(),
        ));
    }
    if content.trim().is_empty() {
        return Err(ListKeeperError::Validation(
            "Note content must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// The demo collection the web client ships with, trimmed to a
/// representative slice. Used by `listkeeper seed` and by tests.
pub fn sample_notes() -> Vec<Note> {
    let note = |id, title: &str, content: &str, (y, mo, d, h, mi), done, color| Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        due_date: Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap(),
        is_completed: done,
        color,
    };

    vec![
        note(
            1,
            "Finalize quarterly report",
            "Compile sales data and performance metrics for the Q2 report. Draft slides for the presentation on Friday.",
            (2025, 7, 15, 17, 0),
            true,
            NoteColor::Green,
        ),
        note(
            2,
            "Grocery Shopping",
            "Milk, bread, eggs, chicken breast, spinach, and coffee beans.",
            (2025, 6, 23, 18, 0),
            false,
            NoteColor::Red,
        ),
        note(
            3,
            "Schedule dentist appointment",
            "Call Dr. Smith's office to schedule a routine check-up and cleaning.",
            (2025, 6, 20, 12, 0),
            true,
            NoteColor::Yellow,
        ),
        note(
            4,
            "Pay monthly credit card bill",
            "Due by the 25th. Check statement for any unusual charges.",
            (2025, 6, 25, 23, 59),
            false,
            NoteColor::Green,
        ),
        note(
            5,
            "Plan weekend trip to Canmore",
            "Book hotel/Airbnb, check hiking trail conditions, and make dinner reservations.",
            (2025, 8, 1, 12, 0),
            false,
            NoteColor::Blue,
        ),
        note(
            6,
            "Renew driver's license",
            "License expires in August. Gather necessary documents and visit the registry.",
            (2025, 7, 30, 9, 0),
            false,
            NoteColor::Red,
        ),
        note(
            7,
            "Fix leaky faucet in kitchen",
            "Buy a new washer kit from Canadian Tire. Watch YouTube tutorial.",
            (2025, 6, 15, 12, 0),
            false,
            NoteColor::Yellow,
        ),
        note(
            8,
            "Read \"Atomic Habits\"",
            "Finish chapter 5. Take notes on the concept of habit stacking.",
            (2025, 6, 29, 21, 0),
            false,
            NoteColor::Purple,
        ),
    ]
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    pub struct StoreFixture {
        pub store: NoteStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: NoteStore::new(),
            }
        }

        pub fn with_sample_notes(mut self) -> Self {
            self.store = NoteStore::from_notes(sample_notes());
            self
        }

        pub fn with_note(mut self, title: &str, due_date: DateTime<Utc>, is_completed: bool) -> Self {
            let draft = NoteDraft::new(title, format!("Content for {}", title), due_date)
                .completed(is_completed);
            self.store.add(draft).unwrap();
            self
        }

        /// A note due `days` from now (negative for the past), at the same
        /// time of day, so local-calendar classification is unambiguous.
        pub fn with_note_due_in(self, title: &str, days: i64, is_completed: bool) -> Self {
            self.with_note(title, Utc::now() + Duration::days(days), is_completed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::error::ListKeeperError;
    use chrono::Duration;

    fn draft(title: &str) -> NoteDraft {
        NoteDraft::new(title, "some content", Utc::now() + Duration::days(1))
    }

    #[test]
    fn add_assigns_unique_increasing_ids() {
        let mut store = NoteStore::new();
        let mut seen = Vec::new();

        for i in 0..10 {
            let note = store.add(draft(&format!("Note {}", i))).unwrap();
            assert!(
                seen.iter().all(|&prev| note.id > prev),
                "id {} not greater than all previous {:?}",
                note.id,
                seen
            );
            seen.push(note.id);
        }
    }

    #[test]
    fn first_id_is_one() {
        let mut store = NoteStore::new();
        assert_eq!(store.add(draft("A")).unwrap().id, 1);
    }

    #[test]
    fn id_is_max_plus_one_after_gaps() {
        let mut store = NoteStore::new();
        store.add(draft("A")).unwrap();
        store.add(draft("B")).unwrap();
        store.add(draft("C")).unwrap();

        // Deleting a middle note leaves the max untouched
        store.delete(2);
        assert_eq!(store.add(draft("D")).unwrap().id, 4);
    }

    #[test]
    fn add_rejects_empty_title_and_content() {
        let mut store = NoteStore::new();

        let mut no_title = draft("ok");
        no_title.title = "   ".to_string();
        assert!(matches!(
            store.add(no_title),
            Err(ListKeeperError::Validation(_))
        ));

        let mut no_content = draft("ok");
        no_content.content = String::new();
        assert!(matches!(
            store.add(no_content),
            Err(ListKeeperError::Validation(_))
        ));

        // No partial write happened
        assert!(store.is_empty());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = NoteStore::new();
        store.add(draft("A")).unwrap();
        store.add(draft("B")).unwrap();

        store.delete(1);
        let after_first: Vec<i64> = store.list().iter().map(|n| n.id).collect();
        store.delete(1);
        let after_second: Vec<i64> = store.list().iter().map(|n| n.id).collect();

        assert_eq!(after_first, vec![2]);
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn update_replaces_only_the_matching_note() {
        let mut store = NoteStore::new();
        store.add(draft("A")).unwrap();
        store.add(draft("B")).unwrap();

        let mut changed = store.get(1).unwrap().clone();
        changed.title = "A (renamed)".to_string();
        changed.is_completed = true;
        store.update(changed).unwrap();

        assert_eq!(store.get(1).unwrap().title, "A (renamed)");
        assert!(store.get(1).unwrap().is_completed);
        // The other note is untouched
        assert_eq!(store.get(2).unwrap().title, "B");
        assert!(!store.get(2).unwrap().is_completed);
    }

    #[test]
    fn update_missing_note_is_an_error() {
        let mut store = NoteStore::new();
        let mut note = store.add(draft("A")).unwrap();
        note.id = 99;

        assert!(matches!(
            store.update(note),
            Err(ListKeeperError::NoteNotFound(99))
        ));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let fixture = StoreFixture::new()
            .with_note_due_in("first", 3, false)
            .with_note_due_in("second", -1, false)
            .with_note_due_in("third", 1, true);

        let titles: Vec<&str> = fixture
            .store
            .list()
            .iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn sample_notes_have_unique_ids() {
        let notes = sample_notes();
        let mut ids: Vec<i64> = notes.iter().map(|n| n.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), notes.len());
    }
}
