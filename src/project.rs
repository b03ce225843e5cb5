//! Owned model of a `.jucer` project descriptor.
//!
//! Parsing reads the whole XML document once via `roxmltree` into fully
//! owned types; the document does not outlive [`Project::parse`].  Settings
//! stay in an ordered [`AttributeBag`] per node rather than typed fields,
//! because the emission engine works in terms of attribute names (including
//! legacy/modern candidate-name pairs) and must distinguish "attribute
//! absent" from "attribute present but empty".

use crate::error::Error;
use crate::transform::{bool_like, int_value};

// ═══════════════════════════════════════════════════════════════════════════════
//  AttributeBag
// ═══════════════════════════════════════════════════════════════════════════════

/// Ordered name/value attribute pairs of one element.
///
/// Presence is significant: [`get`](Self::get) returns `None` for an absent
/// attribute and `Some("")` for a present-but-empty one.
#[derive(Debug, Clone, Default)]
pub struct AttributeBag(Vec<(String, String)>);

impl AttributeBag {
    fn from_node(node: &roxmltree::Node) -> Self {
        Self(
            node.attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The attribute value, or `""` when absent.
    pub fn get_or_default(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Type definitions
// ═══════════════════════════════════════════════════════════════════════════════

/// Root representation of a `.jucer` file (`<JUCERPROJECT>`).
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub attributes: AttributeBag,
    pub main_group: Group,
    pub modules: Vec<Module>,
    /// The `<JUCEOPTIONS>` attribute bag (per-module config flags).
    pub module_options: AttributeBag,
    /// All `<EXPORTFORMATS>` children in document order, recognized or not.
    pub exporters: Vec<Exporter>,
}

/// A `<GROUP>` (or the `<MAINGROUP>`): ordered mix of files and subgroups.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub name: String,
    pub children: Vec<GroupChild>,
}

#[derive(Debug, Clone)]
pub enum GroupChild {
    File(FileEntry),
    Group(Group),
}

/// A `<FILE>` leaf.
#[derive(Debug, Clone, Default)]
pub struct FileEntry {
    pub id: String,
    pub path: String,
    pub compile: bool,
    pub xcode_resource: bool,
    pub binary_resource: bool,
    pub compiler_flag_scheme: String,
}

/// A `<MODULE>` (or legacy `<MODULES>` child) declaration.
#[derive(Debug, Clone, Default)]
pub struct Module {
    pub id: String,
    pub use_global_path: bool,
}

/// One `<EXPORTFORMATS>` child: a toolchain/IDE target backend.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    /// The element's tag name, e.g. `XCODE_MAC` or `VS2022`.
    pub kind: String,
    pub attributes: AttributeBag,
    /// `<MODULEPATHS>` entries: module id → per-exporter path.
    pub module_paths: Vec<ModulePath>,
    pub configurations: Vec<Configuration>,
}

#[derive(Debug, Clone, Default)]
pub struct ModulePath {
    pub id: String,
    pub path: String,
}

/// A `<CONFIGURATION>` inside an exporter.  Nothing is inherited: every
/// field is read from this bag with an explicit default.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    pub attributes: AttributeBag,
}

impl Configuration {
    pub fn name(&self) -> &str {
        self.attributes.get_or_default("name")
    }

    pub fn is_debug(&self) -> bool {
        bool_like(self.attributes.get_or_default("isDebug"))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Parsing — roxmltree → owned types
// ═══════════════════════════════════════════════════════════════════════════════

impl Project {
    /// Parse a `.jucer` descriptor from its XML source.
    ///
    /// The only fatal conditions are unparsable XML and a wrong root tag;
    /// missing sections yield empty defaults.
    pub fn parse(source: &str) -> Result<Self, Error> {
        let doc = roxmltree::Document::parse(source)?;
        let root = doc.root_element();

        if root.tag_name().name() != "JUCERPROJECT" {
            return Err(Error::new("not a JUCERPROJECT document"));
        }

        let mut project = Self {
            attributes: AttributeBag::from_node(&root),
            ..Default::default()
        };

        for child in root.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "MAINGROUP" => {
                    project.main_group = Group::parse(&child);
                }
                "MODULES" => {
                    for module in child.children().filter(|n| n.is_element()) {
                        project.modules.push(Module {
                            id: module.attribute("id").unwrap_or("").to_string(),
                            use_global_path: bool_like(
                                module.attribute("useGlobalPath").unwrap_or(""),
                            ),
                        });
                    }
                }
                "JUCEOPTIONS" => {
                    project.module_options = AttributeBag::from_node(&child);
                }
                "EXPORTFORMATS" => {
                    for exporter in child.children().filter(|n| n.is_element()) {
                        project.exporters.push(Exporter::parse(&exporter));
                    }
                }
                _ => {}
            }
        }

        Ok(project)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        self.attributes.get_or_default("name")
    }

    pub fn project_type(&self) -> &str {
        self.attributes.get_or_default("projectType")
    }

    /// Look up a file entry anywhere in the group tree by its id.
    pub fn find_file_by_id(&self, id: &str) -> Option<&FileEntry> {
        fn search<'a>(group: &'a Group, id: &str) -> Option<&'a FileEntry> {
            for child in &group.children {
                match child {
                    GroupChild::File(file) if file.id == id => return Some(file),
                    GroupChild::Group(sub) => {
                        if let Some(found) = search(sub, id) {
                            return Some(found);
                        }
                    }
                    _ => {}
                }
            }
            None
        }
        search(&self.main_group, id)
    }

    /// Whether the module list names the given module id.
    pub fn has_module(&self, id: &str) -> bool {
        self.modules.iter().any(|m| m.id == id)
    }
}

impl Group {
    fn parse(node: &roxmltree::Node) -> Self {
        let mut group = Self {
            name: node.attribute("name").unwrap_or("").to_string(),
            ..Default::default()
        };

        for child in node.children().filter(|n| n.is_element()) {
            if child.tag_name().name() == "FILE" {
                group.children.push(GroupChild::File(FileEntry {
                    id: child.attribute("id").unwrap_or("").to_string(),
                    path: child.attribute("file").unwrap_or("").to_string(),
                    compile: int_value(child.attribute("compile").unwrap_or("")) == 1,
                    xcode_resource: int_value(child.attribute("xcodeResource").unwrap_or(""))
                        == 1,
                    binary_resource: int_value(child.attribute("resource").unwrap_or("")) == 1,
                    compiler_flag_scheme: child
                        .attribute("compilerFlagScheme")
                        .unwrap_or("")
                        .to_string(),
                }));
            } else {
                group.children.push(GroupChild::Group(Group::parse(&child)));
            }
        }

        group
    }
}

impl Exporter {
    fn parse(node: &roxmltree::Node) -> Self {
        let mut exporter = Self {
            kind: node.tag_name().name().to_string(),
            attributes: AttributeBag::from_node(node),
            ..Default::default()
        };

        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "MODULEPATHS" => {
                    for path in child.children().filter(|n| n.is_element()) {
                        exporter.module_paths.push(ModulePath {
                            id: path.attribute("id").unwrap_or("").to_string(),
                            path: path.attribute("path").unwrap_or("").to_string(),
                        });
                    }
                }
                "CONFIGURATIONS" => {
                    for configuration in child.children().filter(|n| n.is_element()) {
                        exporter.configurations.push(Configuration {
                            attributes: AttributeBag::from_node(&configuration),
                        });
                    }
                }
                _ => {}
            }
        }

        exporter
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        <JUCERPROJECT id="a1B2c3" name="Demo" projectType="consoleapp"
                      jucerVersion="5.4.3">
          <MAINGROUP id="root" name="Demo">
            <GROUP id="src" name="Source">
              <FILE id="f1" name="Main.cpp" compile="1" resource="0"
                    file="Source/Main.cpp"/>
              <FILE id="f2" name="readme.txt" compile="0" resource="1"
                    file="readme.txt"/>
            </GROUP>
          </MAINGROUP>
          <MODULES>
            <MODULE id="juce_core" showAllCode="1" useLocalCopy="0"
                    useGlobalPath="1"/>
          </MODULES>
          <JUCEOPTIONS JUCE_STRICT_REFCOUNTEDPOINTER="1"/>
          <EXPORTFORMATS>
            <LINUX_MAKE targetFolder="Builds/LinuxMakefile">
              <MODULEPATHS>
                <MODULEPATH id="juce_core" path="../../modules"/>
              </MODULEPATHS>
              <CONFIGURATIONS>
                <CONFIGURATION name="Debug" isDebug="1"/>
                <CONFIGURATION name="Release"/>
              </CONFIGURATIONS>
            </LINUX_MAKE>
          </EXPORTFORMATS>
        </JUCERPROJECT>"#;

    #[test]
    fn parse_minimal_project() {
        let project = Project::parse(MINIMAL).unwrap();
        assert_eq!(project.name(), "Demo");
        assert_eq!(project.project_type(), "consoleapp");
        assert_eq!(project.attributes.get("jucerVersion"), Some("5.4.3"));
        assert_eq!(project.modules.len(), 1);
        assert!(project.modules[0].use_global_path);
        assert!(project.has_module("juce_core"));
        assert!(!project.has_module("juce_dsp"));
    }

    #[test]
    fn parse_rejects_wrong_root() {
        assert!(Project::parse("<NOTAPROJECT/>").is_err());
        assert!(Project::parse("not xml at all").is_err());
    }

    #[test]
    fn group_children_keep_document_order() {
        let project = Project::parse(MINIMAL).unwrap();
        assert_eq!(project.main_group.name, "Demo");
        let GroupChild::Group(source) = &project.main_group.children[0] else {
            panic!("expected a subgroup first");
        };
        assert_eq!(source.name, "Source");
        assert_eq!(source.children.len(), 2);
        let GroupChild::File(main) = &source.children[0] else {
            panic!("expected a file");
        };
        assert!(main.compile);
        assert!(!main.binary_resource);
        let GroupChild::File(readme) = &source.children[1] else {
            panic!("expected a file");
        };
        assert!(!readme.compile);
        assert!(readme.binary_resource);
    }

    #[test]
    fn file_lookup_by_id_recurses() {
        let project = Project::parse(MINIMAL).unwrap();
        assert_eq!(
            project.find_file_by_id("f2").map(|f| f.path.as_str()),
            Some("readme.txt")
        );
        assert!(project.find_file_by_id("nope").is_none());
    }

    #[test]
    fn exporter_parse_collects_sections() {
        let project = Project::parse(MINIMAL).unwrap();
        let exporter = &project.exporters[0];
        assert_eq!(exporter.kind, "LINUX_MAKE");
        assert_eq!(
            exporter.attributes.get("targetFolder"),
            Some("Builds/LinuxMakefile")
        );
        assert_eq!(exporter.module_paths[0].path, "../../modules");
        assert_eq!(exporter.configurations.len(), 2);
        assert!(exporter.configurations[0].is_debug());
        assert!(!exporter.configurations[1].is_debug());
    }

    #[test]
    fn absent_and_empty_attributes_stay_distinct() {
        let bag = AttributeBag::from_pairs(&[("present", ""), ("set", "x")]);
        assert_eq!(bag.get("present"), Some(""));
        assert!(bag.has("present"));
        assert_eq!(bag.get("absent"), None);
        assert!(!bag.has("absent"));
        assert_eq!(bag.get_or_default("absent"), "");
    }
}
