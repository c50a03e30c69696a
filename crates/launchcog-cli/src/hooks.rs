//! Repository-activation hooks.
//!
//! An extension point for actions that should run around an update pass.
//! Both phases default to "nothing to do"; implementors override only what
//! they need. The shipped set is currently empty.

use std::path::Path;

use crate::console::Console;

/// Context handed to each hook.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    /// The resolved input path the update pass runs over.
    pub input: &'a Path,
}

/// An action a hook asks the orchestrator to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookAction {
    /// Print a status message.
    Message(String),
}

/// A named hook contributing actions before and after the update pass.
pub trait ActivationHook: Send + Sync {
    fn name(&self) -> &'static str;

    /// Actions to run before any file is processed.
    fn actions(&self, _ctx: &HookContext<'_>) -> Vec<HookAction> {
        Vec::new()
    }

    /// Actions to run after every file has been processed. It is rare to
    /// need this phase; most hooks only implement [`Self::actions`].
    fn epilogue_actions(&self, _ctx: &HookContext<'_>) -> Vec<HookAction> {
        Vec::new()
    }
}

/// The registered hooks. Empty by default.
pub fn builtin_hooks() -> Vec<Box<dyn ActivationHook>> {
    Vec::new()
}

/// Drains a batch of hook actions through the console.
pub fn run_actions(console: &Console, actions: Vec<HookAction>) {
    for action in actions {
        match action {
            HookAction::Message(message) => console.status(&message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl ActivationHook for Noop {
        fn name(&self) -> &'static str {
            "Noop"
        }
    }

    #[test]
    fn default_hook_phases_are_empty() {
        let hook = Noop;
        let ctx = HookContext {
            input: Path::new("/repo"),
        };
        assert!(hook.actions(&ctx).is_empty());
        assert!(hook.epilogue_actions(&ctx).is_empty());
    }

    #[test]
    fn no_hooks_are_registered_by_default() {
        assert!(builtin_hooks().is_empty());
    }

    #[test]
    fn overriding_one_phase_leaves_the_other_empty() {
        struct Greeter;
        impl ActivationHook for Greeter {
            fn name(&self) -> &'static str {
                "Greeter"
            }
            fn actions(&self, _ctx: &HookContext<'_>) -> Vec<HookAction> {
                vec![HookAction::Message("hello".to_string())]
            }
        }

        let ctx = HookContext {
            input: Path::new("/repo"),
        };
        let hook = Greeter;
        assert_eq!(
            hook.actions(&ctx),
            vec![HookAction::Message("hello".to_string())]
        );
        assert!(hook.epilogue_actions(&ctx).is_empty());
    }
}
