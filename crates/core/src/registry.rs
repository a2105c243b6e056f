use crate::action::Action;

/// The ordered, immutable set of actions offered by the menu.
///
/// Entries keep configuration order and duplicates are allowed. Menu options
/// are numbered from 1; the option after the last action is always exit.
pub struct ActionRegistry {
    actions: Vec<Box<dyn Action>>,
}

impl ActionRegistry {
    #[must_use]
    pub fn new(actions: Vec<Box<dyn Action>>) -> Self {
        Self { actions }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Menu number of the exit option.
    #[must_use]
    pub fn exit_option(&self) -> usize {
        self.actions.len() + 1
    }

    /// Looks up an action by its 1-based menu number.
    #[must_use]
    pub fn by_option(&self, option: usize) -> Option<&dyn Action> {
        option
            .checked_sub(1)
            .and_then(|index| self.actions.get(index))
            .map(|action| &**action)
    }

    /// Actions paired with their 1-based menu number.
    pub fn options(&self) -> impl Iterator<Item = (usize, &dyn Action)> {
        self.actions
            .iter()
            .enumerate()
            .map(|(index, action)| (index + 1, &**action))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|action| action.menu_name())
    }
}
