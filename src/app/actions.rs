use std::collections::HashMap;
use tracing::{info, warn};

pub type ActionHandler<C> = fn(&mut C);

/// A button in the bottom toolbar and the action name it dispatches.
#[derive(Debug, Clone, Copy)]
pub struct BottomAction {
    pub label: &'static str,
    pub action: &'static str,
}

pub const REFRESH_DEPARTMENTS: &str = "refresh-departments";
pub const CLEAR_SELECTION: &str = "clear-selection";

pub const BOTTOM_ACTIONS: &[BottomAction] = &[
    BottomAction {
        label: "🔄 Refresh departments",
        action: REFRESH_DEPARTMENTS,
    },
    BottomAction {
        label: "🗑 Clear selection",
        action: CLEAR_SELECTION,
    },
];

/// Maps bottom-toolbar action names to handlers on `C`.
pub struct ActionDispatcher<C> {
    handlers: HashMap<String, ActionHandler<C>>,
}

impl<C> Default for ActionDispatcher<C> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<C> ActionDispatcher<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, action: impl Into<String>, handler: ActionHandler<C>) -> Self {
        self.handlers.insert(action.into(), handler);
        self
    }

    pub fn is_registered(&self, action: &str) -> bool {
        self.handlers.contains_key(action)
    }

    /// Logs the click and returns the handler, if any. The caller runs it so
    /// the handler can borrow the context that owns this dispatcher.
    pub fn dispatch(&self, action: &str) -> Option<ActionHandler<C>> {
        info!(action, "bottom action clicked");
        let handler = self.handlers.get(action).copied();
        if handler.is_none() {
            warn!(action, "no handler registered for bottom action");
        }
        handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        hits: u32,
    }

    fn bump(counter: &mut Counter) {
        counter.hits += 1;
    }

    #[test]
    fn registered_action_runs_handler() {
        let dispatcher = ActionDispatcher::new().register("bump", bump as ActionHandler<Counter>);
        let mut counter = Counter::default();

        if let Some(handler) = dispatcher.dispatch("bump") {
            handler(&mut counter);
        }
        assert_eq!(counter.hits, 1);
    }

    #[test]
    fn unknown_action_has_no_handler() {
        let dispatcher: ActionDispatcher<Counter> = ActionDispatcher::new().register("bump", bump);
        assert!(dispatcher.dispatch("export").is_none());
        assert!(!dispatcher.is_registered("export"));
    }

    #[test]
    fn toolbar_actions_are_unique() {
        let mut seen: Vec<&str> = BOTTOM_ACTIONS.iter().map(|a| a.action).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), BOTTOM_ACTIONS.len());
    }
}
