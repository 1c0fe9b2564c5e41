//! # Distribution Names
//!
//! Product and executable names shown to operators, plus the renderer that
//! substitutes them into help text templates.
//!
//! Templates use `{name}` placeholders:
//!
//! | placeholder            | value                     |
//! |------------------------|---------------------------|
//! | `{workstation_product}`| [`WORKSTATION_PRODUCT`]   |
//! | `{server_product}`     | [`SERVER_PRODUCT`]        |
//! | `{exec}`               | [`EXEC`]                  |
//! | `{cli_exec}`           | [`CLI_EXEC`]              |

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Name of the workstation bundle this binary ships with.
pub const WORKSTATION_PRODUCT: &str = "Chef Workstation";

/// Name of the server that policies are pushed to.
pub const SERVER_PRODUCT: &str = "Chef Infra Server";

/// Name of this executable.
pub const EXEC: &str = "chef";

/// Executable that policyfile commands are delegated to.
pub const CLI_EXEC: &str = "chef-cli";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid")
});

fn lookup(name: &str) -> Option<&'static str> {
    match name {
        "workstation_product" => Some(WORKSTATION_PRODUCT),
        "server_product" => Some(SERVER_PRODUCT),
        "exec" => Some(EXEC),
        "cli_exec" => Some(CLI_EXEC),
        _ => None,
    }
}

/// Substitute every known placeholder in `template`.
///
/// Unknown placeholders are left in place so [`placeholders`] can report
/// them.
pub fn render(template: &str) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            lookup(&caps[1]).map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}

/// Placeholders still present in `text`.
pub fn placeholders(text: &str) -> Vec<String> {
    PLACEHOLDER
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Version line printed for `--version`.
pub fn version_line() -> String {
    format!(
        "{} version: {}",
        WORKSTATION_PRODUCT,
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_every_occurrence() {
        let rendered = render("Push to the {server_product}. Ask the {server_product}.");
        assert_eq!(
            rendered,
            "Push to the Chef Infra Server. Ask the Chef Infra Server."
        );
    }

    #[test]
    fn test_render_all_known_names() {
        let rendered = render("{workstation_product} {server_product} {exec} {cli_exec}");
        assert_eq!(rendered, "Chef Workstation Chef Infra Server chef chef-cli");
        assert!(placeholders(&rendered).is_empty());
    }

    #[test]
    fn test_render_leaves_unknown_placeholder() {
        let rendered = render("see {nope}");
        assert_eq!(rendered, "see {nope}");
        assert_eq!(placeholders(&rendered), vec!["{nope}".to_string()]);
    }

    #[test]
    fn test_render_plain_text_unchanged() {
        assert_eq!(render("no templates here"), "no templates here");
    }

    #[test]
    fn test_version_line_names_product() {
        let line = version_line();
        assert!(line.starts_with("Chef Workstation version: "));
        assert!(line.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
