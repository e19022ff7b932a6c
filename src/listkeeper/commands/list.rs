use chrono::{Local, NaiveDate};

use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{StatusFilterSet, StatusLabel};
use crate::model::Note;
use crate::notes::NoteStore;

/// Everything that narrows the visible list.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub search_term: Option<String>,
    pub statuses: StatusFilterSet,
}

/// Classify a note against `today` (the device-local calendar day).
///
/// Completion wins over the due date: a completed note is only ever
/// `Completed`, even when its due day has passed. Non-completed notes are
/// `Upcoming` strictly after today and `PastDue` on or before it.
pub fn status_of(note: &Note, today: NaiveDate) -> StatusLabel {
    if note.is_completed {
        return StatusLabel::Completed;
    }
    let due_day = note.due_date.with_timezone(&Local).date_naive();
    if due_day > today {
        StatusLabel::Upcoming
    } else {
        StatusLabel::PastDue
    }
}

/// Project the store into the visible, ordered list: search narrows first,
/// then the status selection. A pure function of its inputs; the output
/// keeps store insertion order, with no re-sorting.
pub fn project(
    notes: &[Note],
    search_term: Option<&str>,
    statuses: &StatusFilterSet,
    today: NaiveDate,
) -> Vec<Note> {
    let term_lower = search_term
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase());

    notes
        .iter()
        .filter(|note| match &term_lower {
            Some(term) => {
                note.title.to_lowercase().contains(term)
                    || note.content.to_lowercase().contains(term)
            }
            None => true,
        })
        .filter(|note| {
            statuses.passes_all() || statuses.is_selected(status_of(note, today))
        })
        .cloned()
        .collect()
}

pub fn run(store: &NoteStore, filter: &NoteFilter, today: NaiveDate) -> Result<CmdResult> {
    let listed = project(
        store.list(),
        filter.search_term.as_deref(),
        &filter.statuses,
        today,
    );
    Ok(CmdResult::default().with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::fixtures::StoreFixture;
    use crate::notes::NoteStore;

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn only(label: StatusLabel) -> StatusFilterSet {
        StatusFilterSet::from_labels(&[label])
    }

    fn titles(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn past_due_selects_only_overdue_open_notes() {
        let fixture = StoreFixture::new()
            .with_note_due_in("yesterday", -1, false)
            .with_note_due_in("tomorrow", 1, false);

        let visible = project(fixture.store.list(), None, &only(StatusLabel::PastDue), today());
        assert_eq!(titles(&visible), vec!["yesterday"]);
    }

    #[test]
    fn upcoming_selects_only_future_open_notes() {
        let fixture = StoreFixture::new()
            .with_note_due_in("yesterday", -1, false)
            .with_note_due_in("tomorrow", 1, false)
            .with_note_due_in("done tomorrow", 1, true);

        let visible = project(fixture.store.list(), None, &only(StatusLabel::Upcoming), today());
        assert_eq!(titles(&visible), vec!["tomorrow"]);
    }

    #[test]
    fn completed_overdue_note_is_completed_not_past_due() {
        let fixture = StoreFixture::new().with_note_due_in("done yesterday", -1, true);

        let past_due = project(fixture.store.list(), None, &only(StatusLabel::PastDue), today());
        assert!(past_due.is_empty());

        let completed = project(
            fixture.store.list(),
            None,
            &only(StatusLabel::Completed),
            today(),
        );
        assert_eq!(titles(&completed), vec!["done yesterday"]);
    }

    #[test]
    fn due_today_counts_as_past_due() {
        let fixture = StoreFixture::new().with_note_due_in("today", 0, false);

        let visible = project(fixture.store.list(), None, &only(StatusLabel::PastDue), today());
        assert_eq!(titles(&visible), vec!["today"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_content() {
        let fixture = StoreFixture::new().with_sample_notes();

        // "chicken breast" appears in the grocery note's content
        let visible = project(
            fixture.store.list(),
            Some("CHICKEN"),
            &StatusFilterSet::from_labels(&[StatusLabel::All]),
            today(),
        );
        assert_eq!(titles(&visible), vec!["Grocery Shopping"]);

        let by_title = project(
            fixture.store.list(),
            Some("grocery"),
            &StatusFilterSet::from_labels(&[StatusLabel::All]),
            today(),
        );
        assert_eq!(titles(&by_title), vec!["Grocery Shopping"]);
    }

    #[test]
    fn empty_search_term_matches_everything() {
        let fixture = StoreFixture::new().with_sample_notes();
        let all = StatusFilterSet::from_labels(&[StatusLabel::All]);

        let with_empty = project(fixture.store.list(), Some(""), &all, today());
        let with_none = project(fixture.store.list(), None, &all, today());
        assert_eq!(with_empty.len(), with_none.len());
    }

    #[test]
    fn all_selection_skips_status_filtering() {
        let fixture = StoreFixture::new()
            .with_note_due_in("past", -2, false)
            .with_note_due_in("future", 2, false)
            .with_note_due_in("done", -2, true);

        let visible = project(
            fixture.store.list(),
            None,
            &StatusFilterSet::from_labels(&[StatusLabel::All]),
            today(),
        );
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn multiple_selected_labels_match_any() {
        let fixture = StoreFixture::new()
            .with_note_due_in("past", -2, false)
            .with_note_due_in("future", 2, false)
            .with_note_due_in("done", 1, true);

        let statuses =
            StatusFilterSet::from_labels(&[StatusLabel::PastDue, StatusLabel::Completed]);
        let visible = project(fixture.store.list(), None, &statuses, today());
        assert_eq!(titles(&visible), vec!["past", "done"]);
    }

    #[test]
    fn output_keeps_insertion_order() {
        let fixture = StoreFixture::new()
            .with_note_due_in("c-note", 3, false)
            .with_note_due_in("a-note", 1, false)
            .with_note_due_in("b-note", 2, false);

        let visible = project(
            fixture.store.list(),
            None,
            &only(StatusLabel::Upcoming),
            today(),
        );
        assert_eq!(titles(&visible), vec!["c-note", "a-note", "b-note"]);
    }

    #[test]
    fn search_combines_with_status_selection() {
        let fixture = StoreFixture::new()
            .with_note_due_in("pay bill", -1, false)
            .with_note_due_in("pay rent", 1, false);

        let visible = project(
            fixture.store.list(),
            Some("pay"),
            &only(StatusLabel::Upcoming),
            today(),
        );
        assert_eq!(titles(&visible), vec!["pay rent"]);
    }

    #[test]
    fn run_reads_the_store() {
        let fixture = StoreFixture::new().with_note_due_in("future", 1, false);
        let filter = NoteFilter::default();

        let result = run(&fixture.store, &filter, today()).unwrap();
        assert_eq!(result.listed_notes.len(), 1);

        let empty = run(&NoteStore::new(), &filter, today()).unwrap();
        assert!(empty.listed_notes.is_empty());
    }
}
