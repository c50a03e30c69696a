//! Typed debug-configuration records.
//!
//! Configuration blocks are built as structs and serialized with
//! `serde_json`, rather than interpolated into hand-written JSON templates.
//! That keeps field escaping correct by construction.

use serde::Serialize;

/// Grouping metadata shown in the VS Code launch picker.
#[derive(Debug, Clone, Serialize)]
pub struct Presentation {
    pub hidden: bool,
    pub group: String,
}

/// One entry of the `configurations` array in `launch.json`.
///
/// Field order here is the serialization order of the emitted block.
#[derive(Debug, Clone, Serialize)]
pub struct DebugConfiguration {
    pub name: String,
    pub presentation: Presentation,
    #[serde(rename = "type")]
    pub kind: String,
    pub request: String,
    #[serde(rename = "justMyCode")]
    pub just_my_code: bool,
    pub console: String,
    /// Module launch (`"module": "pytest"` style entries).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Direct program launch (`"program": <file>` style entries).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    pub args: Vec<String>,
    pub cwd: String,
}

impl DebugConfiguration {
    /// A python launch entry with the invariant fields filled in.
    pub fn python(name: String, group: String) -> Self {
        Self {
            name,
            presentation: Presentation {
                hidden: false,
                group,
            },
            kind: "python".to_string(),
            request: "launch".to_string(),
            just_my_code: false,
            console: "integratedTerminal".to_string(),
            module: None,
            program: None,
            args: Vec::new(),
            cwd: String::new(),
        }
    }
}

/// Renders one configuration block: a `// <filename>` provenance comment,
/// the serialized record, and the trailing comma that splices it into the
/// surrounding `configurations` array.
pub fn render_block(
    filename: &str,
    config: &DebugConfiguration,
) -> Result<String, serde_json::Error> {
    let body = serde_json::to_string_pretty(config)?;
    Ok(format!("// {}\n{},", filename, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn python_entry_has_invariant_fields() {
        let config = DebugConfiguration::python("test_foo".to_string(), "Tests".to_string());
        assert_eq!(config.kind, "python");
        assert_eq!(config.request, "launch");
        assert!(!config.just_my_code);
        assert_eq!(config.console, "integratedTerminal");
        assert!(!config.presentation.hidden);
    }

    #[test]
    fn renders_a_module_block() {
        let mut config =
            DebugConfiguration::python("test_foo".to_string(), "A/FooTests".to_string());
        config.module = Some("pytest".to_string());
        config.args = vec!["-vv".to_string()];
        config.cwd = "/repo/A/FooTests".to_string();

        let block = render_block("/repo/A/FooTests/test_foo.py", &config).unwrap();
        assert!(block.starts_with("// /repo/A/FooTests/test_foo.py\n{"));
        assert!(block.ends_with("},"));
        assert!(block.contains("\"module\": \"pytest\""));
        assert!(block.contains("\"justMyCode\": false"));
        assert!(!block.contains("\"program\""));
    }

    #[test]
    fn renders_a_program_block_without_module() {
        let mut config =
            DebugConfiguration::python("legacy_unittest".to_string(), "B".to_string());
        config.program = Some("/repo/B/legacy_unittest.py".to_string());
        config.cwd = "/repo/B".to_string();

        let block = render_block("/repo/B/legacy_unittest.py", &config).unwrap();
        assert!(block.contains("\"program\": \"/repo/B/legacy_unittest.py\""));
        assert!(!block.contains("\"module\""));
    }

    #[test]
    fn group_with_quotes_is_escaped() {
        let config = DebugConfiguration::python("n".to_string(), "we\"ird".to_string());
        let block = render_block("f.py", &config).unwrap();
        assert!(block.contains("\"group\": \"we\\\"ird\""));
    }
}
