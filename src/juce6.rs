//! `juce6` mode: CMake output for JUCE 6's first-party CMake support.
//!
//! Unlike the `reprojucer` mode, this targets `find_package(JUCE)` directly
//! and only needs the project identity up front.

use crate::project::Project;
use crate::writer::{LineWriter, wln};

pub fn write_juce6_cmake_lists(project: &Project) -> String {
    let mut w = LineWriter::new();

    // Audio plugins need juce_add_plugin, which requires a newer CMake.
    let cmake_version = if project.project_type() == "audioplug" {
        "3.15"
    } else {
        "3.12"
    };

    wln!(w);
    wln!(w, "cmake_minimum_required(VERSION {cmake_version})");
    wln!(w);
    wln!(w, "project(\"{}\")", project.name());
    wln!(w);
    wln!(w);
    wln!(w, "find_package(JUCE CONFIG REQUIRED)");

    w.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_app_preamble() {
        let project = Project::parse(
            r#"<JUCERPROJECT id="x" name="Tool" projectType="consoleapp"/>"#,
        )
        .unwrap();
        let out = write_juce6_cmake_lists(&project);
        assert!(out.contains("cmake_minimum_required(VERSION 3.12)"));
        assert!(out.contains("project(\"Tool\")"));
        assert!(out.contains("find_package(JUCE CONFIG REQUIRED)"));
    }

    #[test]
    fn audio_plugin_needs_newer_cmake() {
        let project = Project::parse(
            r#"<JUCERPROJECT id="x" name="Plug" projectType="audioplug"/>"#,
        )
        .unwrap();
        let out = write_juce6_cmake_lists(&project);
        assert!(out.contains("cmake_minimum_required(VERSION 3.15)"));
    }
}
