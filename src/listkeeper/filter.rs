use std::fmt;

/// The labels the note list can be filtered by.
///
/// `All` is a derived reconciliation flag over the other three, not an
/// independent source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
    All,
    Upcoming,
    PastDue,
    Completed,
}

impl StatusLabel {
    /// The labels that classify a note (everything except `All`).
    pub const SELECTABLE: [StatusLabel; 3] = [
        StatusLabel::Upcoming,
        StatusLabel::PastDue,
        StatusLabel::Completed,
    ];
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusLabel::All => "All",
            StatusLabel::Upcoming => "Upcoming",
            StatusLabel::PastDue => "Past Due",
            StatusLabel::Completed => "Completed",
        };
        f.write_str(name)
    }
}

/// The multi-select status toggles, with their reconciliation rules.
///
/// Invariants kept by [`toggle`](StatusFilterSet::toggle):
/// - `Upcoming` is the fallback default: the selection can never become
///   empty, and turning `Upcoming` off while nothing else is on is rejected.
/// - `All` is forced on exactly when every other label is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilterSet {
    all: bool,
    upcoming: bool,
    past_due: bool,
    completed: bool,
}

impl Default for StatusFilterSet {
    fn default() -> Self {
        Self {
            all: false,
            upcoming: true,
            past_due: false,
            completed: false,
        }
    }
}

impl StatusFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection directly from a set of labels, as the CLI does from
    /// flags. The same invariants apply: an empty set falls back to
    /// `Upcoming`, and `All` (or a complete set of labels) selects everything.
    pub fn from_labels(labels: &[StatusLabel]) -> Self {
        let mut set = Self {
            all: false,
            upcoming: false,
            past_due: false,
            completed: false,
        };
        for label in labels {
            match label {
                StatusLabel::All => {
                    set.all = true;
                    set.upcoming = true;
                    set.past_due = true;
                    set.completed = true;
                }
                other => set.set(*other, true),
            }
        }
        if set.upcoming && set.past_due && set.completed {
            set.all = true;
        }
        if !(set.upcoming || set.past_due || set.completed) {
            set.upcoming = true;
        }
        set
    }

    pub fn is_selected(&self, label: StatusLabel) -> bool {
        match label {
            StatusLabel::All => self.all,
            StatusLabel::Upcoming => self.upcoming,
            StatusLabel::PastDue => self.past_due,
            StatusLabel::Completed => self.completed,
        }
    }

    fn set(&mut self, label: StatusLabel, value: bool) {
        match label {
            StatusLabel::All => self.all = value,
            StatusLabel::Upcoming => self.upcoming = value,
            StatusLabel::PastDue => self.past_due = value,
            StatusLabel::Completed => self.completed = value,
        }
    }

    /// Flip a label and reconcile. Returns the resulting state.
    ///
    /// The rule order matters: the `Upcoming` rejection is checked before the
    /// `All` bookkeeping, which resolves the case where unchecking one box
    /// would change two derived flags at once.
    pub fn toggle(&mut self, label: StatusLabel) -> Self {
        match label {
            StatusLabel::All => {
                let value = !self.all;
                self.all = value;
                self.upcoming = value;
                self.past_due = value;
                self.completed = value;
            }
            other => {
                let value = !self.is_selected(other);

                // Upcoming is the fallback default and must never leave the
                // selection empty.
                if other == StatusLabel::Upcoming && !value && !(self.past_due || self.completed) {
                    return *self;
                }

                self.set(other, value);
                if !value && self.all {
                    self.all = false;
                } else if self.upcoming && self.past_due && self.completed {
                    self.all = true;
                }
            }
        }

        if !(self.upcoming || self.past_due || self.completed) {
            self.upcoming = true;
        }
        *self
    }

    /// True when status filtering should be skipped entirely: `All` selected,
    /// or (defensively) nothing selected.
    pub fn passes_all(&self) -> bool {
        self.all || !(self.upcoming || self.past_due || self.completed)
    }

    /// The classifying labels currently selected.
    pub fn selected(&self) -> Vec<StatusLabel> {
        StatusLabel::SELECTABLE
            .into_iter()
            .filter(|l| self.is_selected(*l))
            .collect()
    }
}
