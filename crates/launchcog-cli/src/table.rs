//! Tool help table.
//!
//! Rendered both by `launchcog tools` and as the "actionable next steps"
//! appendix when a file turns out to contain no marker pair.

use launchcog_core::ToolRegistry;

/// Builds the three-column tool table (name, description, source).
///
/// When `hyperlinks` is set (interactive console), the source cell is an
/// OSC 8 hyperlink into the repository; otherwise it is the plain
/// workspace-relative path.
pub fn tool_table(registry: &ToolRegistry, hyperlinks: bool) -> String {
    let mut rows: Vec<(String, String, String)> = vec![(
        "Name".to_string(),
        "Description".to_string(),
        "Source".to_string(),
    )];

    for tool in registry.iter() {
        rows.push((
            tool.name().to_string(),
            tool.description().to_string(),
            source_cell(tool.source(), hyperlinks),
        ));
    }

    let name_width = rows.iter().map(|(name, _, _)| name.len()).max().unwrap_or(0);
    let desc_width = rows
        .iter()
        .map(|(_, desc, _)| desc.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (index, (name, desc, source)) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:<name_width$}  {:<desc_width$}  {}\n",
            name, desc, source
        ));
        if index == 0 {
            out.push_str(&format!(
                "{}  {}  {}\n",
                "-".repeat(name_width),
                "-".repeat(desc_width),
                "-".repeat(6)
            ));
        }
    }

    out
}

fn source_cell(source: &str, hyperlinks: bool) -> String {
    if hyperlinks {
        let url = format!("{}/blob/main/{}", env!("CARGO_PKG_REPOSITORY"), source);
        format!("\u{1b}]8;;{}\u{1b}\\{}\u{1b}]8;;\u{1b}\\", url, source)
    } else {
        source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_a_row_per_registered_tool() {
        let registry = ToolRegistry::builtin();
        let table = tool_table(&registry, false);

        assert!(table.starts_with("Name"));
        for tool in registry.iter() {
            assert!(table.contains(tool.name()));
            assert!(table.contains(tool.description()));
            assert!(table.contains(tool.source()));
        }
    }

    #[test]
    fn plain_table_has_no_escape_sequences() {
        let registry = ToolRegistry::builtin();
        let table = tool_table(&registry, false);
        assert!(!table.contains('\u{1b}'));
    }

    #[test]
    fn hyperlinked_table_wraps_sources_in_osc8() {
        let registry = ToolRegistry::builtin();
        let table = tool_table(&registry, true);
        assert!(table.contains("\u{1b}]8;;"));
        assert!(table.contains("/blob/main/"));
    }
}
