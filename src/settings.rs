//! Per-user Projucer global settings.
//!
//! When a module declares `useGlobalPath` and no explicit override was
//! given on the command line, the converter falls back to the global
//! module paths stored in the user's `Projucer.settings` file.

use std::path::PathBuf;

/// Global module search paths from the user's Projucer settings.
#[derive(Debug, Clone, Default)]
pub struct GlobalPaths {
    pub juce_modules: String,
    pub user_modules: String,
}

/// Platform-conditioned location of `Projucer.settings`.
fn settings_file() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config/Projucer/Projucer.settings"))
    }
    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home).join("Library/Application Support/Projucer/Projucer.settings")
        })
    }
    #[cfg(windows)]
    {
        std::env::var_os("APPDATA")
            .map(|appdata| PathBuf::from(appdata).join("Projucer").join("Projucer.settings"))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
    {
        None
    }
}

/// Read the global module paths, if the settings file exists and holds a
/// `PROJECT_DEFAULT_SETTINGS` section.  Any failure yields `None` — the
/// caller decides whether a missing path is fatal.
pub fn read_global_paths() -> Option<GlobalPaths> {
    let source = std::fs::read_to_string(settings_file()?).ok()?;
    parse_global_paths(&source)
}

fn parse_global_paths(source: &str) -> Option<GlobalPaths> {
    let doc = roxmltree::Document::parse(source).ok()?;
    let root = doc.root_element();
    if root.tag_name().name() != "PROPERTIES" {
        return None;
    }

    let value = root.children().find(|n| {
        n.is_element() && n.attribute("name") == Some("PROJECT_DEFAULT_SETTINGS")
    })?;
    let defaults = value
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == "PROJECT_DEFAULT_SETTINGS")?;

    Some(GlobalPaths {
        juce_modules: defaults
            .attribute("defaultJuceModulePath")
            .unwrap_or("")
            .to_string(),
        user_modules: defaults
            .attribute("defaultUserModulePath")
            .unwrap_or("")
            .to_string(),
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_typical_settings_file() {
        let source = r#"
            <PROPERTIES>
              <VALUE name="PROJECT_DEFAULT_SETTINGS">
                <PROJECT_DEFAULT_SETTINGS defaultJuceModulePath="~/JUCE/modules"
                                          defaultUserModulePath="~/modules"/>
              </VALUE>
            </PROPERTIES>"#;
        let paths = parse_global_paths(source).unwrap();
        assert_eq!(paths.juce_modules, "~/JUCE/modules");
        assert_eq!(paths.user_modules, "~/modules");
    }

    #[test]
    fn missing_section_yields_none() {
        assert!(parse_global_paths("<PROPERTIES/>").is_none());
        assert!(parse_global_paths("<OTHER/>").is_none());
        assert!(parse_global_paths("garbage").is_none());
    }
}
