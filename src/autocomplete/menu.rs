/// One entry the menu can offer.
///
/// `label` is what gets matched and shown; `value` is what the widget writes
/// into the input when it applies a candidate on its own.
pub trait Candidate: Clone + Send + Sync + 'static {
    fn label(&self) -> &str;
    fn value(&self) -> &str;
}

impl Candidate for String {
    fn label(&self) -> &str {
        self
    }

    fn value(&self) -> &str {
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuOptions {
    /// Shortest term that triggers a search.
    pub min_length: usize,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self { min_length: 1 }
    }
}

/// Case-insensitive substring match on the label, keeping source order.
pub fn filter_candidates<T: Candidate>(source: &[T], term: &str) -> Vec<T> {
    let needle = term.to_lowercase();
    source
        .iter()
        .filter(|c| needle.is_empty() || c.label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// List visible, nothing focused.
    Suggesting,
    /// List visible with a focused candidate.
    Previewing,
    /// A candidate was confirmed; list hidden until the next search.
    Selected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusChange<T> {
    Candidate(T),
    /// Focus left the list; carries the term the user typed.
    Restored(String),
}

#[derive(Clone, Debug)]
pub struct Menu<T> {
    term: String,
    items: Vec<T>,
    active: Option<usize>,
    phase: Phase,
}

impl<T> Default for Menu<T> {
    fn default() -> Self {
        Self {
            term: String::new(),
            items: vec![],
            active: None,
            phase: Phase::Idle,
        }
    }
}

impl<T: Candidate> Menu<T> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Suggesting | Phase::Previewing)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn search(&mut self, source: &[T], term: &str, opts: MenuOptions) {
        self.term = term.to_string();
        self.active = None;

        if term.chars().count() < opts.min_length {
            self.items.clear();
            self.phase = Phase::Idle;
            return;
        }

        self.items = filter_candidates(source, term);
        self.phase = if self.items.is_empty() {
            Phase::Idle
        } else {
            Phase::Suggesting
        };
    }

    /// Keyboard navigation. Stepping past either end drops the focus and
    /// hands back the typed term.
    pub fn move_focus(&mut self, step: Step) -> Option<FocusChange<T>> {
        if !self.is_open() || self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        let next = match (self.active, step) {
            (None, Step::Next) => Some(0),
            (None, Step::Prev) => Some(last),
            (Some(i), Step::Next) if i < last => Some(i + 1),
            (Some(i), Step::Prev) if i > 0 => Some(i - 1),
            (Some(_), _) => None,
        };

        match next {
            Some(i) => {
                self.active = Some(i);
                self.phase = Phase::Previewing;
                Some(FocusChange::Candidate(self.items[i].clone()))
            }
            None => {
                self.active = None;
                self.phase = Phase::Suggesting;
                Some(FocusChange::Restored(self.term.clone()))
            }
        }
    }

    /// Pointer hover. Returns the hovered candidate.
    pub fn set_active(&mut self, index: usize) -> Option<T> {
        if !self.is_open() {
            return None;
        }
        let item = self.items.get(index)?.clone();
        self.active = Some(index);
        self.phase = Phase::Previewing;
        Some(item)
    }

    /// Confirm the focused candidate, if any.
    pub fn confirm(&mut self) -> Option<T> {
        let index = self.active?;
        self.pick(index)
    }

    /// Confirm the candidate at `index`.
    pub fn pick(&mut self, index: usize) -> Option<T> {
        if !self.is_open() {
            return None;
        }
        let item = self.items.get(index)?.clone();
        self.items.clear();
        self.active = None;
        self.phase = Phase::Selected;
        Some(item)
    }

    pub fn close(&mut self) {
        self.items.clear();
        self.active = None;
        if self.phase != Phase::Selected {
            self.phase = Phase::Idle;
        }
    }
}
