//! Overlay dialogs
//!
//! Only the top modal receives key events; the page underneath keeps
//! rendering.

/// A dialog drawn over the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    QuitConfirm,
    CategoryFilter,
    SalesRange,
    DateRange,
    Help,
}

#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<Modal> {
        self.stack.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Toggle-style open: pops `modal` if it is already on top
    pub fn toggle(&mut self, modal: Modal) {
        if self.top() == Some(modal) {
            self.stack.pop();
        } else {
            self.stack.push(modal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::CategoryFilter);
        stack.push(Modal::QuitConfirm);
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.top(), Some(Modal::CategoryFilter));
        assert_eq!(stack.pop(), Some(Modal::CategoryFilter));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut stack = ModalStack::new();
        stack.toggle(Modal::Help);
        assert_eq!(stack.top(), Some(Modal::Help));
        stack.toggle(Modal::Help);
        assert!(stack.is_empty());
    }
}
