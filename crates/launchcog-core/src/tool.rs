//! The cog-tool extension point.
//!
//! Tools are selected by name from the `import` directive of a marker pair.
//! Metadata (`name`, `description`, `source`) is separate from rendering, so
//! listing the available tools never triggers generation side effects.

use std::path::Path;

use thiserror::Error;

use crate::error::RenderError;
use crate::populate_tests::PopulateTests;

/// Everything a tool may inspect while rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The file whose marker region is being regenerated.
    pub target: &'a Path,
}

/// A generator invocable from a marker pair.
pub trait CogTool: Send + Sync {
    /// Name matched against the `import <Name>` directive.
    fn name(&self) -> &'static str;

    /// One-line description shown in the tool table.
    fn description(&self) -> &'static str;

    /// Source reference (workspace-relative path) shown in the tool table.
    fn source(&self) -> &'static str;

    /// Renders the replacement text for a marker region.
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError>;
}

/// Errors raised while registering tools.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A tool with this name is already registered.
    #[error("cog tool already registered: {0}")]
    AlreadyRegistered(String),
}

/// Registry of available cog tools, in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn CogTool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the shipped tools registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register(Box::new(PopulateTests::new()))
            .expect("builtin tool names are unique");
        registry
    }

    /// Registers a tool, rejecting duplicate names.
    pub fn register(&mut self, tool: Box<dyn CogTool>) -> Result<(), RegistryError> {
        if self.get(tool.name()).is_some() {
            return Err(RegistryError::AlreadyRegistered(tool.name().to_string()));
        }
        self.tools.push(tool);
        Ok(())
    }

    /// Looks up a tool by exact name.
    pub fn get(&self, name: &str) -> Option<&dyn CogTool> {
        self.tools
            .iter()
            .map(|tool| tool.as_ref())
            .find(|tool| tool.name() == name)
    }

    /// Iterates over registered tools in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn CogTool> {
        self.tools.iter().map(|tool| tool.as_ref())
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl CogTool for Fixed {
        fn name(&self) -> &'static str {
            "Fixed"
        }

        fn description(&self) -> &'static str {
            "emits a fixed line"
        }

        fn source(&self) -> &'static str {
            "crates/launchcog-core/src/tool.rs"
        }

        fn render(&self, _ctx: &RenderContext<'_>) -> Result<String, RenderError> {
            Ok("fixed\n".to_string())
        }
    }

    #[test]
    fn registers_and_looks_up_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(Fixed)).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("Fixed").is_some());
        assert!(registry.get("fixed").is_none());
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(Fixed)).unwrap();
        let err = registry.register(Box::new(Fixed)).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered(name) if name == "Fixed"));
    }

    #[test]
    fn builtin_registry_contains_populate_tests() {
        let registry = ToolRegistry::builtin();
        assert!(!registry.is_empty());
        assert!(registry.get("PopulateTests").is_some());
    }
}
