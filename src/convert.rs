//! `.jucer` → Reprojucer-based `CMakeLists.txt` emission.
//!
//! One linear pass over the parsed [`Project`] assembles the whole script
//! in memory: preamble, project settings, file blocks, modules, then one
//! `jucer_export_target(…)` per recognized exporter with one
//! `jucer_export_target_configuration(…)` per build configuration.
//!
//! The engine reads attributes by name (checking modern names before their
//! deprecated spellings), applies a per-field transform, and renders the
//! result through one of the three statement shapes in [`crate::writer`].
//! An attribute a transform cannot map degrades to a commented placeholder,
//! never an error; the only fatal conditions here are an invalid version
//! string and an unresolvable global module path.

use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Error;
use crate::paths::{child_from_working_directory, relative_path_from};
use crate::project::{AttributeBag, Configuration, Exporter, FileEntry, Group, GroupChild, Project};
use crate::settings;
use crate::transform::{
    bool_like, cmake_path, description_of_size_in_bytes, escape, ids_to_strings, int_value,
    make_valid_configuration_name, make_valid_identifier, parse_preprocessor_definitions,
    parse_search_paths, tokens, unquoted, whitespace_tokens,
};
use crate::version::{Feature, FormatVintage};
use crate::writer::{LineWriter, wln};

type Transform<'f> = &'f dyn Fn(&str) -> String;
type ListTransform<'f> = &'f dyn Fn(&str) -> Vec<String>;

// ═══════════════════════════════════════════════════════════════════════════════
//  Options
// ═══════════════════════════════════════════════════════════════════════════════

/// Everything one conversion run needs besides the parsed descriptor.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Descriptor path as given on the command line.
    pub jucer_file_path: String,
    /// Optional path to `Reprojucer.cmake` (already validated).
    pub reprojucer_file_path: Option<String>,
    /// Explicit global "JUCE Modules" path; empty means not given.
    pub juce_modules_path: String,
    /// Explicit global "User Modules" path; empty means not given.
    pub user_modules_path: String,
    /// Require a CMake variable for the descriptor location instead of
    /// baking the path into the output.
    pub relocatable: bool,
    /// Format-version override (`latest`, `x.y.z`, or a snapshot marker).
    pub jucer_version: Option<String>,
    /// Directory the output file will live in (used for relative paths).
    pub output_dir: PathBuf,
    /// License-conditioned default for the usage-reporting and splash
    /// screen toggles.
    pub license_based_default: &'static str,
}

const TAG_LINE: &str =
    " # Required for closed source applications without an Indie or Pro JUCE license";

// ═══════════════════════════════════════════════════════════════════════════════
//  Entry point
// ═══════════════════════════════════════════════════════════════════════════════

/// Convert a parsed descriptor into the full output script.
pub fn write_reprojucer_cmake_lists(
    opts: &ConvertOptions,
    project: &Project,
) -> Result<String, Error> {
    let jucer_file = child_from_working_directory(&opts.jucer_file_path);

    let version_str = match &opts.jucer_version {
        Some(v) => v.clone(),
        None => project
            .attributes
            .get("jucerVersion")
            .unwrap_or("latest")
            .to_string(),
    };
    let vintage = FormatVintage::parse(&version_str)?;

    // ── Global module paths ──────────────────────────────────────────────

    let mut needs_juce_global = false;
    let mut needs_user_global = false;
    for module in &project.modules {
        if module.use_global_path {
            if module.id.starts_with("juce_") {
                needs_juce_global = true;
            } else {
                needs_user_global = true;
            }
        }
    }

    let stored_paths = if (needs_juce_global && opts.juce_modules_path.is_empty())
        || (needs_user_global && opts.user_modules_path.is_empty())
    {
        settings::read_global_paths()
    } else {
        None
    };

    let juce_modules_global_path = if !opts.juce_modules_path.is_empty() {
        opts.juce_modules_path.clone()
    } else if needs_juce_global {
        stored_paths
            .as_ref()
            .map(|p| p.juce_modules.clone())
            .unwrap_or_default()
    } else {
        String::new()
    };

    if needs_juce_global && juce_modules_global_path.is_empty() {
        return Err(Error::new(format!(
            "At least one JUCE module used in {} relies on the global \"JUCE Modules\" \
             path set in Projucer. You must provide this path using \
             --juce-modules=\"<global-JUCE-modules-path>\".",
            opts.jucer_file_path
        )));
    }

    let user_modules_global_path = if !opts.user_modules_path.is_empty() {
        opts.user_modules_path.clone()
    } else if needs_user_global {
        stored_paths
            .as_ref()
            .map(|p| p.user_modules.clone())
            .unwrap_or_default()
    } else {
        String::new()
    };

    if needs_user_global && user_modules_global_path.is_empty() {
        return Err(Error::new(format!(
            "At least one user module used in {} relies on the global \"User Modules\" \
             path set in Projucer. You must provide this path using \
             --user-modules=\"<global-user-modules-path>\".",
            opts.jucer_file_path
        )));
    }

    // ── Emission ─────────────────────────────────────────────────────────

    let file_name = jucer_file
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    let jucer_file_cmake_var = file_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        + "_FILE";

    let mut writer = CmakeWriter {
        w: LineWriter::new(),
        opts,
        project,
        jucer_file,
        version_str,
        vintage,
        juce_modules_global_path,
        user_modules_global_path,
        jucer_file_cmake_var,
        configuration_names: Vec::new(),
    };

    writer.write_all();
    Ok(writer.w.into_string())
}

// ═══════════════════════════════════════════════════════════════════════════════
//  CmakeWriter
// ═══════════════════════════════════════════════════════════════════════════════

struct CmakeWriter<'a> {
    w: LineWriter,
    opts: &'a ConvertOptions,
    project: &'a Project,
    jucer_file: PathBuf,
    version_str: String,
    vintage: FormatVintage,
    juce_modules_global_path: String,
    user_modules_global_path: String,
    jucer_file_cmake_var: String,
    /// Memoized original → normalized configuration names; one warning per
    /// distinct rename, stable within a run.
    configuration_names: Vec<(String, String)>,
}

impl CmakeWriter<'_> {
    fn supports(&self, feature: Feature) -> bool {
        self.vintage.supports(feature)
    }

    // ─── Setting emission helpers ────────────────────────────────────────

    fn convert_setting(
        &mut self,
        bag: &AttributeBag,
        attr: &str,
        keyword: &str,
        transform: Option<Transform>,
    ) {
        let raw = bag.get_or_default(attr);
        let value = match transform {
            Some(f) => f(raw),
            None => raw.to_string(),
        };
        self.w.keyword_quoted(keyword, &value);
    }

    fn convert_setting_if_defined(
        &mut self,
        bag: &AttributeBag,
        attr: &str,
        keyword: &str,
        transform: Option<Transform>,
    ) {
        if bag.has(attr) {
            self.convert_setting(bag, attr, keyword, transform);
        }
    }

    fn convert_setting_with_default(
        &mut self,
        bag: &AttributeBag,
        attr: &str,
        keyword: &str,
        default: &str,
    ) {
        if bag.has(attr) {
            self.convert_setting(bag, attr, keyword, None);
        } else {
            self.w.keyword_quoted(keyword, default);
        }
    }

    fn convert_onoff_setting(
        &mut self,
        bag: &AttributeBag,
        attr: &str,
        keyword: &str,
        transform: Option<Transform>,
    ) {
        let value = match transform {
            Some(f) => f(bag.get_or_default(attr)),
            None => match bag.get(attr) {
                Some(raw) => if bool_like(raw) { "ON" } else { "OFF" }.to_string(),
                None => String::new(),
            },
        };
        self.w.keyword_unquoted(keyword, &value);
    }

    fn convert_onoff_setting_if_defined(
        &mut self,
        bag: &AttributeBag,
        attr: &str,
        keyword: &str,
        transform: Option<Transform>,
    ) {
        if bag.has(attr) {
            self.convert_onoff_setting(bag, attr, keyword, transform);
        }
    }

    fn convert_onoff_setting_with_default(
        &mut self,
        bag: &AttributeBag,
        attr: &str,
        keyword: &str,
        default: &str,
    ) {
        if bag.has(attr) {
            self.convert_onoff_setting(bag, attr, keyword, None);
        } else {
            self.w.keyword_unquoted(keyword, default);
        }
    }

    fn convert_setting_as_list(
        &mut self,
        bag: &AttributeBag,
        attr: &str,
        keyword: &str,
        transform: Option<ListTransform>,
    ) {
        let raw = bag.get_or_default(attr);
        let values = match transform {
            Some(f) => f(raw),
            None => raw.lines().map(str::to_string).collect(),
        };
        self.w.keyword_list(keyword, &values);
    }

    fn convert_setting_as_list_if_defined(
        &mut self,
        bag: &AttributeBag,
        attr: &str,
        keyword: &str,
        transform: Option<ListTransform>,
    ) {
        if bag.has(attr) {
            self.convert_setting_as_list(bag, attr, keyword, transform);
        }
    }

    /// `userNotes` passthrough: an indented `# NOTES` comment block.
    fn write_user_notes(&mut self, bag: &AttributeBag) {
        if let Some(notes) = bag.get("userNotes") {
            wln!(self.w, "  # NOTES");
            for line in notes.lines() {
                wln!(self.w, "  #   {line}");
            }
        }
    }

    // ─── Shared defaults ─────────────────────────────────────────────────

    fn default_company_name(&self) -> String {
        let company = self.project.attributes.get_or_default("companyName");
        if company.is_empty() {
            "yourcompany".to_string()
        } else {
            company.to_string()
        }
    }

    fn default_bundle_identifier(&self) -> String {
        let project_name = make_valid_identifier(self.project.name());
        if self.supports(Feature::CompanyBundleIdentifier) {
            format!(
                "com.{}.{}",
                make_valid_identifier(&self.default_company_name()),
                project_name
            )
        } else {
            format!("com.yourcompany.{project_name}")
        }
    }

    // ─── Sections ────────────────────────────────────────────────────────

    fn write_all(&mut self) {
        self.write_preamble();
        self.write_include();
        self.write_project_file_variable();
        self.write_global_paths();
        self.write_project_begin();
        self.write_project_settings();
        self.write_audio_plugin_settings();
        self.write_project_files();
        self.write_project_modules();
        self.write_appconfig_header();
        self.write_export_targets();
        wln!(self.w, "jucer_project_end()");
    }

    fn write_preamble(&mut self) {
        wln!(self.w);
        wln!(self.w, "cmake_minimum_required(VERSION 3.4)");
        wln!(self.w);
        wln!(self.w, "project(\"{}\")", self.project.name());
        wln!(self.w);
        wln!(self.w);
    }

    fn write_include(&mut self) {
        match &self.opts.reprojucer_file_path {
            Some(reprojucer_file_path) => {
                let reprojucer_dir = child_from_working_directory(reprojucer_file_path)
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default();
                let relative = relative_path_from(&reprojucer_dir, &self.opts.output_dir);
                wln!(
                    self.w,
                    "list(APPEND CMAKE_MODULE_PATH \"{}\")",
                    cmake_path(&relative)
                );
            }
            None => {
                wln!(
                    self.w,
                    "# list(APPEND CMAKE_MODULE_PATH \
                     \"${{CMAKE_CURRENT_LIST_DIR}}/<relative_path_to_reprojucer>/cmake\")"
                );
            }
        }
        wln!(self.w, "include(Reprojucer)");
        wln!(self.w);
        wln!(self.w);
    }

    fn write_project_file_variable(&mut self) {
        let var = self.jucer_file_cmake_var.clone();
        if self.opts.relocatable {
            wln!(self.w, "if(NOT DEFINED {var})");
            wln!(self.w, "  message(FATAL_ERROR \"{var} must be defined\")");
            wln!(self.w, "endif()");
            wln!(self.w);
            wln!(self.w, "get_filename_component({var}");
            wln!(self.w, "  \"${{{var}}}\" ABSOLUTE");
            wln!(self.w, "  BASE_DIR \"${{CMAKE_BINARY_DIR}}\"");
            wln!(self.w, ")");
        } else {
            wln!(self.w, "set({var}");
            let relative = relative_path_from(&self.jucer_file, &self.opts.output_dir);
            wln!(self.w, "  \"{}\"", cmake_path(&relative));
            wln!(self.w, ")");
        }
        wln!(self.w);
        wln!(self.w);
    }

    fn write_global_paths(&mut self) {
        if !self.juce_modules_global_path.is_empty() {
            println!(
                "Using '{}' as global \"JUCE Modules\" path.",
                self.juce_modules_global_path
            );
            wln!(
                self.w,
                "set(JUCE_MODULES_GLOBAL_PATH \"{}\")",
                cmake_path(&self.juce_modules_global_path)
            );
        }

        if !self.user_modules_global_path.is_empty() {
            println!(
                "Using '{}' as global \"User Modules\" path.",
                self.user_modules_global_path
            );
            wln!(
                self.w,
                "set(USER_MODULES_GLOBAL_PATH \"{}\")",
                cmake_path(&self.user_modules_global_path)
            );
        }

        if !self.juce_modules_global_path.is_empty() || !self.user_modules_global_path.is_empty()
        {
            wln!(self.w);
            wln!(self.w);
        }
    }

    fn write_project_begin(&mut self) {
        let project = self.project;
        wln!(self.w, "jucer_project_begin(");
        if project.attributes.has("jucerFormatVersion") {
            let format_version = project.attributes.get_or_default("jucerFormatVersion");
            self.w.keyword_quoted("JUCER_FORMAT_VERSION", format_version);
        }
        if self.version_str != "latest" {
            let version = self.version_str.clone();
            self.w.keyword_quoted("JUCER_VERSION", &version);
        }
        let file_var = format!("${{{}}}", self.jucer_file_cmake_var);
        self.w.keyword_quoted("PROJECT_FILE", &file_var);
        self.convert_setting(&project.attributes, "id", "PROJECT_ID", None);
        wln!(self.w, ")");
        wln!(self.w);
    }

    fn write_project_settings(&mut self) {
        let project = self.project;
        let attrs = &project.attributes;

        wln!(self.w, "jucer_project_settings(");
        self.convert_setting(attrs, "name", "PROJECT_NAME", None);
        self.convert_setting_with_default(attrs, "version", "PROJECT_VERSION", "1.0.0");

        self.convert_setting_if_defined(attrs, "companyName", "COMPANY_NAME", None);
        self.convert_setting_if_defined(attrs, "companyCopyright", "COMPANY_COPYRIGHT", None);
        self.convert_setting_if_defined(attrs, "companyWebsite", "COMPANY_WEBSITE", None);
        self.convert_setting_if_defined(attrs, "companyEmail", "COMPANY_EMAIL", None);

        self.convert_onoff_setting_if_defined(
            attrs,
            "useAppConfig",
            "USE_GLOBAL_APPCONFIG_HEADER",
            None,
        );
        self.convert_onoff_setting_if_defined(
            attrs,
            "addUsingNamespaceToJuceHeader",
            "ADD_USING_NAMESPACE_JUCE_TO_JUCE_HEADER",
            None,
        );

        let license_default = self.opts.license_based_default;

        if self.supports(Feature::AppUsageReporting) {
            if attrs.has("reportAppUsage") {
                self.convert_onoff_setting(
                    attrs,
                    "reportAppUsage",
                    "REPORT_JUCE_APP_USAGE",
                    Some(&|value| {
                        format!("{}{TAG_LINE}", if bool_like(value) { "ON" } else { "OFF" })
                    }),
                );
            } else {
                self.w.keyword_unquoted(
                    "REPORT_JUCE_APP_USAGE",
                    &format!("{license_default}{TAG_LINE}"),
                );
            }
        }

        if self.supports(Feature::SplashScreen) {
            if attrs.has("displaySplashScreen") {
                self.convert_onoff_setting(
                    attrs,
                    "displaySplashScreen",
                    "DISPLAY_THE_JUCE_SPLASH_SCREEN",
                    Some(&|value| {
                        format!("{}{TAG_LINE}", if bool_like(value) { "ON" } else { "OFF" })
                    }),
                );
            } else {
                self.w.keyword_unquoted(
                    "DISPLAY_THE_JUCE_SPLASH_SCREEN",
                    &format!("{license_default}{TAG_LINE}"),
                );
            }

            self.convert_setting_if_defined(
                attrs,
                "splashScreenColour",
                "SPLASH_SCREEN_COLOUR",
                None,
            );
        }

        let project_type_description = match project.project_type() {
            "guiapp" => "GUI Application",
            "consoleapp" => "Console Application",
            "library" => "Static Library",
            "dll" => "Dynamic Library",
            "audioplug" => "Audio Plug-in",
            _ => "",
        };
        self.w.keyword_quoted("PROJECT_TYPE", project_type_description);

        let default_bundle_identifier = self.default_bundle_identifier();
        self.convert_setting_with_default(
            attrs,
            "bundleIdentifier",
            "BUNDLE_IDENTIFIER",
            &default_bundle_identifier,
        );

        self.convert_setting_if_defined(
            attrs,
            "maxBinaryFileSize",
            "BINARYDATACPP_SIZE_LIMIT",
            Some(&|value| {
                if value.is_empty() {
                    "Default".to_string()
                } else {
                    description_of_size_in_bytes(int_value(value))
                }
            }),
        );

        if attrs.has("includeBinaryInJuceHeader") {
            self.convert_onoff_setting(attrs, "includeBinaryInJuceHeader", "INCLUDE_BINARYDATA", None);
        } else {
            self.convert_onoff_setting_if_defined(
                attrs,
                "includeBinaryInAppConfig",
                "INCLUDE_BINARYDATA",
                None,
            );
        }
        self.convert_setting_if_defined(attrs, "binaryDataNamespace", "BINARYDATA_NAMESPACE", None);

        if attrs.has("cppLanguageStandard") {
            self.convert_setting(
                attrs,
                "cppLanguageStandard",
                "CXX_LANGUAGE_STANDARD",
                Some(&|value| {
                    match value {
                        "11" => "C++11",
                        "14" => "C++14",
                        "17" => "C++17",
                        "20" => "C++20",
                        "latest" => "Use Latest",
                        _ => "",
                    }
                    .to_string()
                }),
            );
        } else if self.supports(Feature::DefaultCxx14) {
            self.w.keyword_quoted("CXX_LANGUAGE_STANDARD", "C++14");
        } else if self.supports(Feature::DefaultCxx11) {
            self.w.keyword_quoted("CXX_LANGUAGE_STANDARD", "C++11");
        }

        self.convert_setting_as_list_if_defined(
            attrs,
            "defines",
            "PREPROCESSOR_DEFINITIONS",
            Some(&|value| parse_preprocessor_definitions(value)),
        );
        self.convert_setting_as_list_if_defined(
            attrs,
            "headerPath",
            "HEADER_SEARCH_PATHS",
            Some(&|value| parse_search_paths(value)),
        );

        self.convert_setting_if_defined(
            attrs,
            "postExportShellCommandPosix",
            "POST_EXPORT_SHELL_COMMAND_MACOS_LINUX",
            None,
        );
        self.convert_setting_if_defined(
            attrs,
            "postExportShellCommandWin",
            "POST_EXPORT_SHELL_COMMAND_WINDOWS",
            None,
        );

        self.write_user_notes(attrs);

        wln!(self.w, ")");
        wln!(self.w);
    }

    // ─── Audio plugin settings ───────────────────────────────────────────

    fn write_audio_plugin_settings(&mut self) {
        let project = self.project;
        if project.project_type() != "audioplug" {
            return;
        }
        let attrs = &project.attributes;

        wln!(self.w, "jucer_audio_plugin_settings(");

        let vst_is_legacy = self.supports(Feature::VstIsLegacy);
        let formats_as_list = self.supports(Feature::PluginFormatsList);

        if formats_as_list {
            if attrs.has("pluginFormats") {
                let supports_unity = self.supports(Feature::UnityPlugin);
                self.convert_setting_as_list(
                    attrs,
                    "pluginFormats",
                    "PLUGIN_FORMATS",
                    Some(&|value| {
                        let mut table: Vec<(&str, &str)> = Vec::new();
                        if !vst_is_legacy {
                            table.push(("buildVST", "VST"));
                        }
                        table.extend([
                            ("buildVST3", "VST3"),
                            ("buildAU", "AU"),
                            ("buildAUv3", "AUv3"),
                            ("buildRTAS", "RTAS"),
                            ("buildAAX", "AAX"),
                            ("buildStandalone", "Standalone"),
                        ]);
                        if supports_unity {
                            table.push(("buildUnity", "Unity"));
                        }
                        table.push(("enableIAA", "Enable IAA"));
                        if vst_is_legacy {
                            table.push(("buildVST", "VST (Legacy)"));
                        }
                        ids_to_strings(&tokens(value, ",", ""), &table)
                    }),
                );
            } else {
                self.convert_setting_as_list(
                    attrs,
                    "pluginFormats",
                    "PLUGIN_FORMATS",
                    Some(&|_| {
                        vec![
                            if vst_is_legacy { "VST3" } else { "VST" }.to_string(),
                            "AU".to_string(),
                            "Standalone".to_string(),
                        ]
                    }),
                );
            }

            if attrs.has("pluginCharacteristicsValue") {
                self.convert_setting_as_list(
                    attrs,
                    "pluginCharacteristicsValue",
                    "PLUGIN_CHARACTERISTICS",
                    Some(&|value| {
                        ids_to_strings(
                            &tokens(value, ",", ""),
                            &[
                                ("pluginIsSynth", "Plugin is a Synth"),
                                ("pluginWantsMidiIn", "Plugin MIDI Input"),
                                ("pluginProducesMidiOut", "Plugin MIDI Output"),
                                ("pluginIsMidiEffectPlugin", "MIDI Effect Plugin"),
                                ("pluginEditorRequiresKeys", "Plugin Editor Requires Keyboard Focus"),
                                ("pluginRTASDisableBypass", "Disable RTAS Bypass"),
                                ("pluginAAXDisableBypass", "Disable AAX Bypass"),
                                ("pluginRTASDisableMultiMono", "Disable RTAS Multi-Mono"),
                                ("pluginAAXDisableMultiMono", "Disable AAX Multi-Mono"),
                            ],
                        )
                    }),
                );
            } else {
                wln!(self.w, "  # PLUGIN_CHARACTERISTICS");
            }
        } else {
            self.convert_onoff_setting_with_default(attrs, "buildVST", "BUILD_VST", "ON");
            self.convert_onoff_setting_with_default(attrs, "buildVST3", "BUILD_VST3", "OFF");
            self.convert_onoff_setting_with_default(attrs, "buildAU", "BUILD_AUDIOUNIT", "ON");
            self.convert_onoff_setting_with_default(attrs, "buildAUv3", "BUILD_AUDIOUNIT_V3", "OFF");
            self.convert_onoff_setting_with_default(attrs, "buildRTAS", "BUILD_RTAS", "OFF");
            self.convert_onoff_setting_with_default(attrs, "buildAAX", "BUILD_AAX", "OFF");
            if self.supports(Feature::StandalonePlugin) {
                self.convert_onoff_setting_with_default(
                    attrs,
                    "buildStandalone",
                    "BUILD_STANDALONE_PLUGIN",
                    "OFF",
                );
                self.convert_onoff_setting_with_default(
                    attrs,
                    "enableIAA",
                    "ENABLE_INTER_APP_AUDIO",
                    "OFF",
                );
            }
        }

        let project_name = project.name().to_string();
        self.convert_setting_with_default(attrs, "pluginName", "PLUGIN_NAME", &project_name);
        self.convert_setting_with_default(attrs, "pluginDesc", "PLUGIN_DESCRIPTION", &project_name);

        let default_company_name = self.default_company_name();
        self.convert_setting_with_default(
            attrs,
            "pluginManufacturer",
            "PLUGIN_MANUFACTURER",
            &default_company_name,
        );
        self.convert_setting_with_default(
            attrs,
            "pluginManufacturerCode",
            "PLUGIN_MANUFACTURER_CODE",
            "Manu",
        );

        let default_plugin_code = {
            let project_id = attrs.get_or_default("id");
            let s = make_valid_identifier(&format!("{project_id}{project_id}")) + "xxxx";
            format!("{}{}", s[..1].to_uppercase(), s[1..4].to_lowercase())
        };
        self.convert_setting_with_default(attrs, "pluginCode", "PLUGIN_CODE", &default_plugin_code);

        self.convert_setting(attrs, "pluginChannelConfigs", "PLUGIN_CHANNEL_CONFIGURATIONS", None);

        let plugin_characteristics = tokens(
            attrs.get_or_default("pluginCharacteristicsValue"),
            ",",
            "",
        );
        let contains = |id: &str| plugin_characteristics.iter().any(|c| c == id);

        let is_synth = if formats_as_list {
            contains("pluginIsSynth")
        } else {
            bool_like(attrs.get_or_default("pluginIsSynth"))
        };

        if !formats_as_list {
            self.w
                .keyword_unquoted("PLUGIN_IS_A_SYNTH", if is_synth { "ON" } else { "OFF" });
            self.convert_onoff_setting_with_default(
                attrs,
                "pluginWantsMidiIn",
                "PLUGIN_MIDI_INPUT",
                "OFF",
            );
            self.convert_onoff_setting_with_default(
                attrs,
                "pluginProducesMidiOut",
                "PLUGIN_MIDI_OUTPUT",
                "OFF",
            );
            self.convert_onoff_setting_with_default(
                attrs,
                "pluginIsMidiEffectPlugin",
                "MIDI_EFFECT_PLUGIN",
                "OFF",
            );
            self.convert_onoff_setting_with_default(
                attrs,
                "pluginEditorRequiresKeys",
                "KEY_FOCUS",
                "OFF",
            );
        }

        if formats_as_list {
            let default_bundle_identifier = self.default_bundle_identifier();
            self.convert_setting_with_default(
                attrs,
                "aaxIdentifier",
                "PLUGIN_AAX_IDENTIFIER",
                &default_bundle_identifier,
            );
        }
        let default_au_prefix = make_valid_identifier(&project_name) + "AU";
        self.convert_setting_with_default(
            attrs,
            "pluginAUExportPrefix",
            "PLUGIN_AU_EXPORT_PREFIX",
            &default_au_prefix,
        );

        if formats_as_list {
            if attrs.has("pluginAUMainType") {
                self.convert_setting(
                    attrs,
                    "pluginAUMainType",
                    "PLUGIN_AU_MAIN_TYPE",
                    Some(&au_main_type_constant),
                );
            } else {
                self.convert_setting(
                    attrs,
                    "pluginAUMainType",
                    "PLUGIN_AU_MAIN_TYPE",
                    Some(&|_| {
                        if contains("pluginIsMidiEffectPlugin") {
                            "kAudioUnitType_MIDIProcessor" // 'aumi'
                        } else if contains("pluginIsSynth") {
                            "kAudioUnitType_MusicDevice" // 'aumu'
                        } else if contains("pluginWantsMidiIn") {
                            "kAudioUnitType_MusicEffect" // 'aumf'
                        } else {
                            "kAudioUnitType_Effect" // 'aufx'
                        }
                        .to_string()
                    }),
                );
            }
        } else {
            self.convert_setting(attrs, "pluginAUMainType", "PLUGIN_AU_MAIN_TYPE", None);
        }
        self.convert_onoff_setting_if_defined(
            attrs,
            "pluginAUIsSandboxSafe",
            "PLUGIN_AU_IS_SANDBOX_SAFE",
            None,
        );

        let midi_counts = self.supports(Feature::VstMidiChannelCounts);
        if attrs.has("pluginVSTNumMidiInputs") || (midi_counts && contains("pluginWantsMidiIn")) {
            self.convert_setting_with_default(
                attrs,
                "pluginVSTNumMidiInputs",
                "PLUGIN_VST_NUM_MIDI_INPUTS",
                "16",
            );
        }
        if attrs.has("pluginVSTNumMidiOutputs")
            || (midi_counts && contains("pluginProducesMidiOut"))
        {
            self.convert_setting_with_default(
                attrs,
                "pluginVSTNumMidiOutputs",
                "PLUGIN_VST_NUM_MIDI_OUTPUTS",
                "16",
            );
        }

        if !vst_is_legacy {
            let keyword = if self.supports(Feature::VstCategoryKeyword) {
                "PLUGIN_VST_CATEGORY"
            } else {
                "VST_CATEGORY"
            };
            let default = if formats_as_list {
                if is_synth { "kPlugCategSynth" } else { "kPlugCategEffect" }
            } else {
                ""
            };
            self.convert_setting_with_default(attrs, "pluginVSTCategory", keyword, default);
        }

        if attrs.has("pluginVST3Category") || formats_as_list {
            if attrs.has("pluginVST3Category") {
                self.convert_setting_as_list(
                    attrs,
                    "pluginVST3Category",
                    "PLUGIN_VST3_CATEGORY",
                    Some(&|value| {
                        let mut categories = tokens(value, ",", "");
                        for sentinel in ["Instrument", "Fx"] {
                            if let Some(index) =
                                categories.iter().position(|c| c == sentinel)
                            {
                                let category = categories.remove(index);
                                categories.insert(0, category);
                            }
                        }
                        categories
                    }),
                );
            } else {
                self.convert_setting_as_list(
                    attrs,
                    "pluginVST3Category",
                    "PLUGIN_VST3_CATEGORY",
                    Some(&|_| {
                        if is_synth {
                            vec!["Instrument".to_string(), "Synth".to_string()]
                        } else {
                            vec!["Fx".to_string()]
                        }
                    }),
                );
            }
        }

        if formats_as_list {
            if attrs.has("pluginRTASCategory") {
                self.convert_setting_as_list(
                    attrs,
                    "pluginRTASCategory",
                    "PLUGIN_RTAS_CATEGORY",
                    Some(&|value| ids_to_strings(&tokens(value, ",", ""), RTAS_CATEGORIES)),
                );
            } else {
                self.convert_setting_as_list(
                    attrs,
                    "pluginRTASCategory",
                    "PLUGIN_RTAS_CATEGORY",
                    Some(&|_| {
                        vec![
                            if is_synth {
                                "ePlugInCategory_SWGenerators"
                            } else {
                                "ePlugInCategory_None"
                            }
                            .to_string(),
                        ]
                    }),
                );
            }

            if attrs.has("pluginAAXCategory") {
                self.convert_setting_as_list(
                    attrs,
                    "pluginAAXCategory",
                    "PLUGIN_AAX_CATEGORY",
                    Some(&|value| ids_to_strings(&tokens(value, ",", ""), AAX_CATEGORIES)),
                );
            } else {
                self.convert_setting_as_list(
                    attrs,
                    "pluginAAXCategory",
                    "PLUGIN_AAX_CATEGORY",
                    Some(&|_| {
                        vec![
                            if is_synth {
                                "AAX_ePlugInCategory_SWGenerators"
                            } else {
                                "AAX_ePlugInCategory_None"
                            }
                            .to_string(),
                        ]
                    }),
                );
            }
        } else {
            self.convert_setting(attrs, "pluginRTASCategory", "PLUGIN_RTAS_CATEGORY", None);
            self.convert_setting(attrs, "pluginAAXCategory", "PLUGIN_AAX_CATEGORY", None);
        }

        if vst_is_legacy {
            self.convert_setting_with_default(
                attrs,
                "pluginVSTCategory",
                "PLUGIN_VST_LEGACY_CATEGORY",
                if is_synth { "kPlugCategSynth" } else { "kPlugCategEffect" },
            );
        }

        if !formats_as_list {
            self.convert_setting(attrs, "aaxIdentifier", "PLUGIN_AAX_IDENTIFIER", None);
        }

        wln!(self.w, ")");
        wln!(self.w);
    }

    // ─── Files ───────────────────────────────────────────────────────────

    fn write_project_files(&mut self) {
        let project = self.project;
        let has_schemes = !project
            .attributes
            .get_or_default("compilerFlagSchemes")
            .is_empty();
        let mut stack = Vec::new();
        self.write_group(&project.main_group, &mut stack, has_schemes);
    }

    /// Depth-first traversal preserving source order: consecutive files
    /// accumulate into one block, flushed whenever a subgroup interrupts
    /// the run and once more on leaving the group.
    fn write_group(&mut self, group: &Group, stack: &mut Vec<String>, has_schemes: bool) {
        stack.push(group.name.clone());
        let full_group_name = stack.join("/");

        let mut files: Vec<&FileEntry> = Vec::new();
        for child in &group.children {
            match child {
                GroupChild::File(file) => files.push(file),
                GroupChild::Group(subgroup) => {
                    self.flush_files(&full_group_name, &files, has_schemes);
                    files.clear();
                    self.write_group(subgroup, stack, has_schemes);
                }
            }
        }
        self.flush_files(&full_group_name, &files, has_schemes);

        stack.pop();
    }

    fn flush_files(&mut self, full_group_name: &str, files: &[&FileEntry], has_schemes: bool) {
        if files.is_empty() {
            return;
        }

        // Column alignment is per block: pad to this block's longest path.
        let longest = files
            .iter()
            .map(|f| f.path.chars().count())
            .max()
            .unwrap_or(0);
        const NINE_SPACES: &str = "         ";
        let mark = |flag: bool| if flag { "x" } else { "." };

        wln!(self.w, "jucer_project_files(\"{full_group_name}\"");
        if has_schemes {
            wln!(
                self.w,
                "# Compile   Xcode     Binary    File{}Compiler Flag",
                " ".repeat(longest)
            );
            wln!(
                self.w,
                "#           Resource  Resource{}Scheme",
                " ".repeat(longest + 6)
            );
        } else {
            wln!(self.w, "# Compile   Xcode     Binary    File");
            wln!(self.w, "#           Resource  Resource");
        }

        for file in files {
            let scheme = if file.compiler_flag_scheme.is_empty() {
                String::new()
            } else {
                format!(
                    "{}\"{}\"",
                    " ".repeat(longest - file.path.chars().count() + 2),
                    file.compiler_flag_scheme
                )
            };
            wln!(
                self.w,
                "  {}{NINE_SPACES}{}{NINE_SPACES}{}{NINE_SPACES}\"{}\"{}",
                mark(file.compile),
                mark(file.xcode_resource),
                mark(file.binary_resource),
                file.path,
                scheme
            );
        }

        wln!(self.w, ")");
        wln!(self.w);
    }

    // ─── Modules ─────────────────────────────────────────────────────────

    fn write_project_modules(&mut self) {
        let project = self.project;
        let module_paths = project
            .exporters
            .first()
            .map(|e| e.module_paths.as_slice())
            .unwrap_or(&[]);

        let juce_modules_dir = child_from_working_directory(&self.juce_modules_global_path);
        let user_modules_dir = child_from_working_directory(&self.user_modules_global_path);
        let jucer_dir = self
            .jucer_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        for module in &project.modules {
            let module_name = module.id.as_str();
            let is_juce_module = module_name.starts_with("juce_");
            let module_path = module_paths
                .iter()
                .find(|mp| mp.id == module_name)
                .map(|mp| mp.path.as_str())
                .unwrap_or("");

            wln!(self.w, "jucer_project_module(");
            wln!(self.w, "  {module_name}");
            let path_value = if module.use_global_path {
                if is_juce_module {
                    "${JUCE_MODULES_GLOBAL_PATH}".to_string()
                } else {
                    "${USER_MODULES_GLOBAL_PATH}".to_string()
                }
            } else {
                module_path.replace('\\', "/")
            };
            wln!(self.w, "  PATH \"{path_value}\"");

            let module_header = if module.use_global_path {
                if is_juce_module {
                    juce_modules_dir.clone()
                } else {
                    user_modules_dir.clone()
                }
            } else {
                jucer_dir.join(module_path)
            }
            .join(module_name)
            .join(format!("{module_name}.h"));

            if !module_header.is_file() {
                warn!(
                    "Couldn't find a module header for {} module at \"{}\".",
                    module_name,
                    module_header.display()
                );
            }
            let header_source = std::fs::read_to_string(&module_header).unwrap_or_default();

            for line in header_source.lines() {
                if let Some(module_option) = line.strip_prefix("/** Config: ") {
                    let value = match project.module_options.get_or_default(module_option) {
                        "1" | "enabled" => "ON",
                        "0" | "disabled" => "OFF",
                        _ => "",
                    };
                    self.w.keyword_unquoted(module_option, value);
                }
            }

            wln!(self.w, ")");
            wln!(self.w);
        }
    }

    // ─── AppConfig user section ──────────────────────────────────────────

    fn write_appconfig_header(&mut self) {
        let app_config_file = self
            .jucer_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
            .join("JuceLibraryCode")
            .join("AppConfig.h");

        let contents = std::fs::read_to_string(&app_config_file).unwrap_or_default();
        if contents.is_empty() {
            return;
        }

        let lines: Vec<&str> = contents.lines().collect();
        let mut user_code_section: Vec<&str> = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            if line.contains("[BEGIN_USER_CODE_SECTION]") {
                for &user_line in &lines[index + 1..] {
                    if user_line.contains("[END_USER_CODE_SECTION]") {
                        break;
                    }
                    user_code_section.push(user_line);
                }
                break;
            }
        }

        let default_section = [
            "",
            "// (You can add your own code in this section, and the Projucer will not \
             overwrite it)",
            "",
        ];

        if user_code_section != default_section {
            wln!(self.w, "jucer_appconfig_header(");
            wln!(self.w, "  USER_CODE_SECTION");
            wln!(
                self.w,
                "\"{}\"",
                escape("\\\"", &user_code_section.join("\n"))
            );
            wln!(self.w, ")");
            wln!(self.w);
        }
    }

    // ─── Exporters ───────────────────────────────────────────────────────

    fn exporter_name(&self, kind: &str) -> Option<&'static str> {
        Some(match kind {
            "XCODE_MAC" => {
                if self.supports(Feature::MacOsNaming) {
                    "Xcode (macOS)"
                } else {
                    "Xcode (MacOSX)"
                }
            }
            "XCODE_IPHONE" => "Xcode (iOS)",
            "VS2022" => "Visual Studio 2022",
            "VS2019" => "Visual Studio 2019",
            "VS2017" => "Visual Studio 2017",
            "VS2015" => "Visual Studio 2015",
            "VS2013" => "Visual Studio 2013",
            "LINUX_MAKE" => "Linux Makefile",
            "CODEBLOCKS_WINDOWS" => "Code::Blocks (Windows)",
            "CODEBLOCKS_LINUX" => "Code::Blocks (Linux)",
            _ => return None,
        })
    }

    fn write_export_targets(&mut self) {
        let project = self.project;
        for exporter in &project.exporters {
            // Unrecognized exporter kinds are skipped, not an error.
            let Some(exporter_name) = self.exporter_name(&exporter.kind) else {
                continue;
            };

            self.write_exporter(exporter, exporter_name);

            for configuration in &exporter.configurations {
                self.write_exporter_configuration(exporter, exporter_name, configuration);
            }
        }
    }

    fn write_exporter(&mut self, exporter: &Exporter, exporter_name: &str) {
        let project = self.project;
        let attrs = &exporter.attributes;
        let kind = exporter.kind.as_str();

        let is_xcode = kind == "XCODE_MAC" || kind == "XCODE_IPHONE";
        let is_vs = matches!(kind, "VS2022" | "VS2019" | "VS2017" | "VS2015" | "VS2013");

        wln!(self.w, "jucer_export_target(");
        wln!(self.w, "  \"{exporter_name}\"");

        // Settings resolved relative to the target folder get a comment
        // naming their consumers, first-seen order, no duplicates.
        let mut need_target_folder: Vec<&str> = Vec::new();
        if project.attributes.has("headerPath") {
            need_target_folder.push("HEADER_SEARCH_PATHS");
        }
        if is_xcode {
            if attrs.has("frameworkSearchPaths") {
                need_target_folder.push("FRAMEWORK_SEARCH_PATHS");
            }
            if attrs.has("prebuildCommand") {
                need_target_folder.push("PREBUILD_SHELL_SCRIPT");
            }
            if attrs.has("postbuildCommand") {
                need_target_folder.push("POSTBUILD_SHELL_SCRIPT");
            }
        }
        for configuration in &exporter.configurations {
            if configuration.attributes.has("headerPath") {
                need_target_folder.push("HEADER_SEARCH_PATHS");
            }
            if configuration.attributes.has("libraryPath") {
                need_target_folder.push("EXTRA_LIBRARY_SEARCH_PATHS");
            }
            if is_vs {
                if configuration.attributes.has("prebuildCommand") {
                    need_target_folder.push("PREBUILD_COMMAND");
                }
                if configuration.attributes.has("postbuildCommand") {
                    need_target_folder.push("POSTBUILD_COMMAND");
                }
            }
        }
        let mut used_by: Vec<&str> = Vec::new();
        for item in need_target_folder {
            if !used_by.contains(&item) {
                used_by.push(item);
            }
        }
        if !used_by.is_empty() {
            wln!(
                self.w,
                "  TARGET_PROJECT_FOLDER \"{}\" # used by {}",
                attrs.get_or_default("targetFolder"),
                used_by.join(", ")
            );
        }

        // ── Plugin SDK folders ───────────────────────────────────────────

        let is_audio_plugin = project.project_type() == "audioplug";
        let plugin_formats = tokens(project.attributes.get_or_default("pluginFormats"), ",", "");
        let has_audio_processors = project.has_module("juce_audio_processors");

        let has_vst2_interface = self.supports(Feature::BundledVst2Interface);
        let is_vst_audio_plugin = is_audio_plugin
            && (plugin_formats.iter().any(|f| f == "buildVST")
                || bool_like(project.attributes.get_or_default("buildVST")));
        let plugin_host_vst = project.module_options.get_or_default("JUCE_PLUGINHOST_VST");
        let is_vst_plugin_host =
            has_audio_processors && (plugin_host_vst == "enabled" || plugin_host_vst == "1");

        if !has_vst2_interface && (is_vst_audio_plugin || is_vst_plugin_host) {
            self.convert_setting(attrs, "vstFolder", "VST_SDK_FOLDER", None);
        }

        let vst_is_legacy = self.supports(Feature::VstIsLegacy);
        if vst_is_legacy && (is_vst_audio_plugin || is_vst_plugin_host) {
            self.convert_setting(attrs, "vstLegacyFolder", "VST_LEGACY_SDK_FOLDER", None);
        }

        let supports_vst3 = kind == "XCODE_MAC" || is_vs;
        let is_vst3_audio_plugin = is_audio_plugin
            && (plugin_formats.iter().any(|f| f == "buildVST3")
                || bool_like(project.attributes.get_or_default("buildVST3")));
        let plugin_host_vst3 = project.module_options.get_or_default("JUCE_PLUGINHOST_VST3");
        let is_vst3_plugin_host =
            has_audio_processors && (plugin_host_vst3 == "enabled" || plugin_host_vst3 == "1");

        if supports_vst3 && (is_vst3_audio_plugin || is_vst3_plugin_host) {
            self.convert_setting(attrs, "vst3Folder", "VST3_SDK_FOLDER", None);
        }

        let supports_aax_rtas = kind == "XCODE_MAC" || is_vs;
        if supports_aax_rtas && is_audio_plugin {
            if plugin_formats.iter().any(|f| f == "buildAAX")
                || bool_like(project.attributes.get_or_default("buildAAX"))
            {
                self.convert_setting(attrs, "aaxFolder", "AAX_SDK_FOLDER", None);
            }
            if plugin_formats.iter().any(|f| f == "buildRTAS")
                || bool_like(project.attributes.get_or_default("buildRTAS"))
            {
                self.convert_setting(attrs, "rtasFolder", "RTAS_SDK_FOLDER", None);
            }
        }

        // ── Compiler & linker ────────────────────────────────────────────

        self.convert_setting_as_list_if_defined(
            attrs,
            "extraDefs",
            "EXTRA_PREPROCESSOR_DEFINITIONS",
            Some(&|value| parse_preprocessor_definitions(value)),
        );
        self.convert_setting_as_list_if_defined(
            attrs,
            "extraCompilerFlags",
            "EXTRA_COMPILER_FLAGS",
            Some(&|value| whitespace_tokens(value)),
        );

        let mut schemes: Vec<String> = Vec::new();
        for scheme in tokens(
            project.attributes.get_or_default("compilerFlagSchemes"),
            ",",
            "",
        ) {
            if !scheme.is_empty() && !schemes.contains(&scheme) {
                schemes.push(scheme);
            }
        }
        for scheme in &schemes {
            self.convert_setting_if_defined(
                attrs,
                scheme,
                &format!("COMPILER_FLAGS_FOR_{scheme}"),
                None,
            );
        }

        self.convert_setting_as_list_if_defined(
            attrs,
            "extraLinkerFlags",
            "EXTRA_LINKER_FLAGS",
            Some(&|value| whitespace_tokens(value)),
        );
        self.convert_setting_as_list_if_defined(
            attrs,
            "externalLibraries",
            "EXTERNAL_LIBRARIES_TO_LINK",
            None,
        );

        self.convert_onoff_setting_if_defined(
            attrs,
            "enableGNUExtensions",
            "GNU_COMPILER_EXTENSIONS",
            None,
        );

        // ── Icons ────────────────────────────────────────────────────────

        let icon_path = |file_id: &str| -> String {
            if !file_id.is_empty() {
                if let Some(file) = project.find_file_by_id(file_id) {
                    return file.path.clone();
                }
            }
            "<None>".to_string()
        };
        self.convert_setting_if_defined(attrs, "smallIcon", "ICON_SMALL", Some(&icon_path));
        self.convert_setting_if_defined(attrs, "bigIcon", "ICON_LARGE", Some(&icon_path));

        // ── Xcode ────────────────────────────────────────────────────────

        if kind == "XCODE_IPHONE" {
            self.convert_setting_if_defined(
                attrs,
                "customXcassetsFolder",
                "CUSTOM_XCASSETS_FOLDER",
                None,
            );
            self.convert_setting_if_defined(
                attrs,
                "customLaunchStoryboard",
                "CUSTOM_LAUNCH_STORYBOARD",
                None,
            );
        }

        if is_xcode {
            self.convert_setting_as_list_if_defined(
                attrs,
                "customXcodeResourceFolders",
                "CUSTOM_XCODE_RESOURCE_FOLDERS",
                Some(&|value| value.lines().map(|line| line.trim().to_string()).collect()),
            );

            if is_audio_plugin {
                self.convert_onoff_setting_if_defined(
                    attrs,
                    "duplicateAppExResourcesFolder",
                    "ADD_DUPLICATE_RESOURCES_FOLDER_TO_APP_EXTENSION",
                    None,
                );
            }
        }

        if kind == "XCODE_IPHONE" {
            self.convert_setting_if_defined(
                attrs,
                "iosDeviceFamily",
                "DEVICE_FAMILY",
                Some(&|value| {
                    match value {
                        "1" => "iPhone",
                        "2" => "iPad",
                        "1,2" => "Universal",
                        other => other,
                    }
                    .to_string()
                }),
            );

            let orientation_label = |value: &str| -> String {
                match value {
                    "portraitlandscape" => "Portrait and Landscape",
                    "portrait" => "Portrait",
                    "landscape" => "Landscape",
                    other => other,
                }
                .to_string()
            };
            let orientation_list = |value: &str| -> Vec<String> {
                ids_to_strings(
                    &tokens(value, ",", ""),
                    &[
                        ("UIInterfaceOrientationPortrait", "Portrait"),
                        ("UIInterfaceOrientationPortraitUpsideDown", "Portrait Upside Down"),
                        ("UIInterfaceOrientationLandscapeLeft", "Landscape Left"),
                        ("UIInterfaceOrientationLandscapeRight", "Landscape Right"),
                    ],
                )
            };
            for (attr, keyword) in [
                ("iosScreenOrientation", "IPHONE_SCREEN_ORIENTATION"),
                ("iPadScreenOrientation", "IPAD_SCREEN_ORIENTATION"),
            ] {
                if let Some(value) = attrs.get(attr) {
                    let orientations = orientation_list(value);
                    if !orientations.is_empty() {
                        self.w.keyword_list(keyword, &orientations);
                    } else {
                        self.w.keyword_quoted(keyword, &orientation_label(value));
                    }
                }
            }

            self.convert_onoff_setting_if_defined(
                attrs,
                "UIFileSharingEnabled",
                "FILE_SHARING_ENABLED",
                None,
            );
            self.convert_onoff_setting_if_defined(
                attrs,
                "UISupportsDocumentBrowser",
                "SUPPORT_DOCUMENT_BROWSER",
                None,
            );
            self.convert_onoff_setting_if_defined(
                attrs,
                "UIStatusBarHidden",
                "STATUS_BAR_HIDDEN",
                None,
            );
        }

        if kind == "XCODE_MAC" && project.project_type() == "guiapp" {
            self.convert_setting_as_list_if_defined(
                attrs,
                "documentExtensions",
                "DOCUMENT_FILE_EXTENSIONS",
                Some(&|value| tokens(value, ",", "")),
            );
        }

        self.convert_onoff_setting_if_defined(
            attrs,
            "useLegacyBuildSystem",
            "USE_LEGACY_BUILD_SYSTEM",
            None,
        );

        if kind == "XCODE_MAC" {
            self.convert_setting_as_list_if_defined(
                attrs,
                "xcodeValidArchs",
                "VALID_ARCHITECTURES",
                Some(&|value| tokens(value, ",", "")),
            );

            self.convert_onoff_setting_if_defined(attrs, "appSandbox", "USE_APP_SANDBOX", None);
            self.convert_onoff_setting_if_defined(
                attrs,
                "appSandboxInheritance",
                "APP_SANDBOX_INHERITANCE",
                None,
            );
            self.convert_setting_as_list_if_defined(
                attrs,
                "appSandboxOptions",
                "APP_SANDBOX_OPTIONS",
                Some(&|value| ids_to_strings(&tokens(value, ",", ""), APP_SANDBOX_OPTIONS)),
            );

            self.convert_onoff_setting_if_defined(
                attrs,
                "hardenedRuntime",
                "USE_HARDENED_RUNTIME",
                None,
            );
            let hardened_runtime_options = if self.supports(Feature::CategorisedHardenedRuntimeOptions) {
                HARDENED_RUNTIME_OPTIONS_CATEGORISED
            } else {
                HARDENED_RUNTIME_OPTIONS_PLAIN
            };
            self.convert_setting_as_list_if_defined(
                attrs,
                "hardenedRuntimeOptions",
                "HARDENED_RUNTIME_OPTIONS",
                Some(&|value| ids_to_strings(&tokens(value, ",", ""), hardened_runtime_options)),
            );
        }

        if is_xcode {
            self.convert_onoff_setting_if_defined(
                attrs,
                "microphonePermissionNeeded",
                "MICROPHONE_ACCESS",
                None,
            );
            self.convert_setting_if_defined(
                attrs,
                "microphonePermissionsText",
                "MICROPHONE_ACCESS_TEXT",
                None,
            );
            self.convert_onoff_setting_if_defined(
                attrs,
                "cameraPermissionNeeded",
                "CAMERA_ACCESS",
                None,
            );
            self.convert_setting_if_defined(attrs, "cameraPermissionText", "CAMERA_ACCESS_TEXT", None);
            self.convert_onoff_setting_if_defined(
                attrs,
                "iosBluetoothPermissionNeeded",
                "BLUETOOTH_ACCESS",
                None,
            );
            self.convert_setting_if_defined(
                attrs,
                "iosBluetoothPermissionText",
                "BLUETOOTH_ACCESS_TEXT",
                None,
            );
        }

        if kind == "XCODE_MAC" {
            self.convert_onoff_setting_if_defined(
                attrs,
                "sendAppleEventsPermissionNeeded",
                "SEND_APPLE_EVENTS",
                None,
            );
            self.convert_setting_if_defined(
                attrs,
                "sendAppleEventsPermissionText",
                "SEND_APPLE_EVENTS_TEXT",
                None,
            );
        }

        if is_xcode {
            self.convert_onoff_setting_if_defined(
                attrs,
                "iosInAppPurchasesValue",
                "IN_APP_PURCHASES_CAPABILITY",
                None,
            );
        }

        if kind == "XCODE_IPHONE" {
            self.convert_onoff_setting_if_defined(attrs, "iosContentSharing", "CONTENT_SHARING", None);
            self.convert_onoff_setting_if_defined(
                attrs,
                "iosBackgroundAudio",
                "AUDIO_BACKGROUND_CAPABILITY",
                None,
            );
            self.convert_onoff_setting_if_defined(
                attrs,
                "iosBackgroundBle",
                "BLUETOOTH_MIDI_BACKGROUND_CAPABILITY",
                None,
            );
            self.convert_onoff_setting_if_defined(attrs, "iosAppGroups", "APP_GROUPS_CAPABILITY", None);
            self.convert_onoff_setting_if_defined(attrs, "iCloudPermissions", "ICLOUD_PERMISSIONS", None);
        }

        if is_xcode {
            self.convert_onoff_setting_if_defined(
                attrs,
                "iosPushNotifications",
                "PUSH_NOTIFICATIONS_CAPABILITY",
                None,
            );

            self.convert_setting_if_defined(attrs, "customPList", "CUSTOM_PLIST", None);
            self.convert_onoff_setting_if_defined(attrs, "PListPreprocess", "PLIST_PREPROCESS", None);
            self.convert_onoff_setting_if_defined(attrs, "pListPreprocess", "PLIST_PREPROCESS", None);

            let jucer_dir = self
                .jucer_file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            let target_folder = attrs.get_or_default("targetFolder").to_string();
            let prefix_header_path = move |value: &str| -> String {
                if value.is_empty() {
                    return String::new();
                }
                let header = jucer_dir.join(&target_folder).join(value);
                relative_path_from(&header, &jucer_dir)
            };
            self.convert_setting_if_defined(
                attrs,
                "PListPrefixHeader",
                "PLIST_PREFIX_HEADER",
                Some(&prefix_header_path),
            );
            self.convert_setting_if_defined(
                attrs,
                "pListPrefixHeader",
                "PLIST_PREFIX_HEADER",
                Some(&prefix_header_path),
            );

            self.convert_onoff_setting_if_defined(
                attrs,
                "suppressPlistResourceUsage",
                "SUPPRESS_AUDIOUNIT_PLIST_RESOURCE_USAGE_KEY",
                None,
            );

            let frameworks_keyword = if self.supports(Feature::SystemFrameworksKeyword) {
                "EXTRA_SYSTEM_FRAMEWORKS"
            } else {
                "EXTRA_FRAMEWORKS"
            };
            self.convert_setting_as_list_if_defined(
                attrs,
                "extraFrameworks",
                frameworks_keyword,
                Some(&|value| {
                    tokens(value, ",;", "\"'")
                        .iter()
                        .map(|framework| framework.trim().to_string())
                        .collect()
                }),
            );
            self.convert_setting_as_list_if_defined(
                attrs,
                "frameworkSearchPaths",
                "FRAMEWORK_SEARCH_PATHS",
                None,
            );
            self.convert_setting_as_list_if_defined(
                attrs,
                "extraCustomFrameworks",
                "EXTRA_CUSTOM_FRAMEWORKS",
                None,
            );
            self.convert_setting_as_list_if_defined(
                attrs,
                "embeddedFrameworks",
                "EMBEDDED_FRAMEWORKS",
                None,
            );
            self.convert_setting_as_list_if_defined(attrs, "xcodeSubprojects", "XCODE_SUBPROJECTS", None);
            self.convert_setting_if_defined(attrs, "prebuildCommand", "PREBUILD_SHELL_SCRIPT", None);
            self.convert_setting_if_defined(attrs, "postbuildCommand", "POSTBUILD_SHELL_SCRIPT", None);
            self.convert_setting_if_defined(
                attrs,
                "bundleIdentifier",
                "EXPORTER_BUNDLE_IDENTIFIER",
                None,
            );
            self.convert_setting_if_defined(
                attrs,
                "iosDevelopmentTeamID",
                "DEVELOPMENT_TEAM_ID",
                None,
            );
        }

        if kind == "XCODE_IPHONE" {
            self.convert_setting_as_list_if_defined(
                attrs,
                "iosAppGroupsId",
                "APP_GROUP_ID",
                Some(&|value| {
                    tokens(value, ";", "")
                        .iter()
                        .map(|group| group.trim().to_string())
                        .collect()
                }),
            );
        }

        if is_xcode {
            self.convert_onoff_setting_if_defined(
                attrs,
                "keepCustomXcodeSchemes",
                "KEEP_CUSTOM_XCODE_SCHEMES",
                None,
            );
            self.convert_onoff_setting_if_defined(attrs, "useHeaderMap", "USE_HEADERMAP", None);
        }

        // ── Visual Studio ────────────────────────────────────────────────

        if is_vs {
            self.convert_setting_if_defined(attrs, "msvcManifestFile", "MANIFEST_FILE", None);

            if let Some(toolset) = attrs.get("toolset") {
                if toolset.is_empty() {
                    wln!(self.w, "  # PLATFORM_TOOLSET \"(default)\"");
                } else {
                    wln!(self.w, "  # PLATFORM_TOOLSET \"{toolset}\"");
                }
            }

            let modern_labels = self.supports(Feature::ModernDefaultLabels);
            self.convert_setting_if_defined(
                attrs,
                "IPPLibrary",
                "USE_IPP_LIBRARY",
                Some(&move |value| {
                    match value {
                        "" => "No",
                        "true" => {
                            if modern_labels {
                                "Yes (Default Mode)"
                            } else {
                                "Yes (Default Linking)"
                            }
                        }
                        "Parallel_Static" => "Multi-Threaded Static Library",
                        "Sequential" => "Single-Threaded Static Library",
                        "Parallel_Dynamic" => "Multi-Threaded DLL",
                        "Sequential_Dynamic" => "Single-Threaded DLL",
                        _ => "",
                    }
                    .to_string()
                }),
            );

            self.convert_setting_if_defined(
                attrs,
                "IPP1ALibrary",
                "USE_IPP_LIBRARY_ONE_API",
                Some(&|value| {
                    match value {
                        "" => "No",
                        "true" => "Yes (Default Linking)",
                        "Static_Library" => "Static Library",
                        "Dynamic_Library" => "Dynamic Library",
                        other => other,
                    }
                    .to_string()
                }),
            );

            self.convert_setting_if_defined(
                attrs,
                "MKL1ALibrary",
                "USE_MKL_LIBRARY_ONE_API",
                Some(&|value| {
                    if value.is_empty() { "No" } else { value }.to_string()
                }),
            );

            self.convert_setting_if_defined(
                attrs,
                "windowsTargetPlatformVersion",
                "WINDOWS_TARGET_PLATFORM",
                None,
            );

            if kind == "VS2017" {
                self.convert_setting_if_defined(
                    attrs,
                    "cppLanguageStandard",
                    "CXX_STANDARD_TO_USE",
                    Some(&|value| {
                        match value {
                            "" => "(default)",
                            "stdcpp14" => "C++14",
                            "stdcpplatest" => "Latest C++ Standard",
                            _ => "",
                        }
                        .to_string()
                    }),
                );
            }
        }

        // ── Linux Makefile ───────────────────────────────────────────────

        if kind == "LINUX_MAKE" {
            self.convert_setting_if_defined(
                attrs,
                "cppLanguageStandard",
                "CXX_STANDARD_TO_USE",
                Some(&|value| {
                    match value {
                        "-std=c++03" => "C++03",
                        "-std=c++11" => "C++11",
                        "-std=c++14" => "C++14",
                        _ => "",
                    }
                    .to_string()
                }),
            );

            self.convert_setting_as_list_if_defined(
                attrs,
                "linuxExtraPkgConfig",
                "PKGCONFIG_LIBRARIES",
                Some(&|value| tokens(value, " ", "\"'")),
            );
        }

        // ── Code::Blocks ─────────────────────────────────────────────────

        if kind == "CODEBLOCKS_WINDOWS" {
            self.convert_setting_if_defined(
                attrs,
                "codeBlocksWindowsTarget",
                "TARGET_PLATFORM",
                Some(&|value| {
                    WINDOWS_TARGETS
                        .iter()
                        .find(|(id, _)| *id == value)
                        .map(|(_, label)| label.to_string())
                        .unwrap_or_default()
                }),
            );
        }

        self.write_user_notes(attrs);

        wln!(self.w, ")");
        wln!(self.w);
    }

    // ─── Configurations ──────────────────────────────────────────────────

    fn write_exporter_configuration(
        &mut self,
        exporter: &Exporter,
        exporter_name: &str,
        configuration: &Configuration,
    ) {
        let attrs = &configuration.attributes;
        let kind = exporter.kind.as_str();

        let is_xcode = kind == "XCODE_MAC" || kind == "XCODE_IPHONE";
        let is_vs = matches!(kind, "VS2022" | "VS2019" | "VS2017" | "VS2015" | "VS2013");

        wln!(self.w, "jucer_export_target_configuration(");
        wln!(self.w, "  \"{exporter_name}\"");

        self.write_configuration_name(configuration);

        let is_debug = configuration.is_debug();
        self.w
            .keyword_unquoted("DEBUG_MODE", if is_debug { "ON" } else { "OFF" });

        self.convert_setting_if_defined(attrs, "targetName", "BINARY_NAME", None);
        self.convert_setting_if_defined(attrs, "binaryPath", "BINARY_LOCATION", None);

        self.convert_setting_as_list_if_defined(
            attrs,
            "headerPath",
            "HEADER_SEARCH_PATHS",
            Some(&|value| parse_search_paths(value)),
        );
        self.convert_setting_as_list_if_defined(
            attrs,
            "libraryPath",
            "EXTRA_LIBRARY_SEARCH_PATHS",
            Some(&|value| parse_search_paths(value)),
        );

        self.convert_setting_as_list_if_defined(
            attrs,
            "defines",
            "PREPROCESSOR_DEFINITIONS",
            Some(&|value| parse_preprocessor_definitions(value)),
        );

        self.convert_onoff_setting_if_defined(
            attrs,
            "linkTimeOptimisation",
            "LINK_TIME_OPTIMISATION",
            None,
        );

        if !attrs.has("linkTimeOptimisation")
            && is_vs
            && !is_debug
            && self.supports(Feature::WholeProgramOptimisationAsLto)
        {
            self.convert_onoff_setting_if_defined(
                attrs,
                "wholeProgramOptimisation",
                "LINK_TIME_OPTIMISATION",
                Some(&|value| {
                    if int_value(value) == 0 { "ON" } else { "OFF" }.to_string()
                }),
            );
        }

        if is_xcode || is_vs {
            self.convert_onoff_setting_if_defined(
                attrs,
                "usePrecompiledHeaderFile",
                "USE_PRECOMPILED_HEADER",
                None,
            );
            self.convert_setting_if_defined(
                attrs,
                "precompiledHeaderFile",
                "PRECOMPILED_HEADER_FILE",
                None,
            );
        }

        if is_xcode {
            self.convert_setting_if_defined(
                attrs,
                "recommendedWarnings",
                "ADD_RECOMMENDED_COMPILER_WARNING_FLAGS",
                Some(&|value| {
                    match value {
                        "LLVM" => "Enabled",
                        "" => "Disabled",
                        _ => "",
                    }
                    .to_string()
                }),
            );
        } else if matches!(kind, "CODEBLOCKS_LINUX" | "CODEBLOCKS_WINDOWS" | "LINUX_MAKE") {
            self.convert_setting_if_defined(
                attrs,
                "recommendedWarnings",
                "ADD_RECOMMENDED_COMPILER_WARNING_FLAGS",
                Some(&|value| {
                    match value {
                        "GCC" => "GCC",
                        "GCC-7" => "GCC 7 and below",
                        "LLVM" => "LLVM",
                        "" => "Disabled",
                        _ => "",
                    }
                    .to_string()
                }),
            );
        }

        self.convert_setting_if_defined(
            attrs,
            "optimisation",
            "OPTIMISATION",
            Some(&move |value| {
                if is_vs {
                    match int_value(value) {
                        1 => "No optimisation",
                        2 => "Minimise size",
                        3 => "Maximise speed",
                        _ => "",
                    }
                    .to_string()
                } else {
                    match int_value(value) {
                        1 => "-O0 (no optimisation)",
                        2 => "-Os (minimise code size)",
                        3 => "-O3 (fastest with safe optimisations)",
                        4 => "-O1 (fast)",
                        5 => "-O2 (faster)",
                        6 => "-Ofast (uses aggressive optimisations)",
                        _ => "",
                    }
                    .to_string()
                }
            }),
        );

        let vst_is_legacy = self.supports(Feature::VstIsLegacy);

        if is_xcode {
            self.convert_onoff_setting_if_defined(
                attrs,
                "enablePluginBinaryCopyStep",
                "ENABLE_PLUGIN_COPY_STEP",
                None,
            );

            if !vst_is_legacy {
                if attrs.has("xcodeVstBinaryLocation") {
                    self.convert_setting(attrs, "xcodeVstBinaryLocation", "VST_BINARY_LOCATION", None);
                } else {
                    self.convert_setting_if_defined(
                        attrs,
                        "vstBinaryLocation",
                        "VST_BINARY_LOCATION",
                        None,
                    );
                }
            }

            // Older descriptors used xcode-prefixed spellings.
            for (old_attr, new_attr, keyword) in [
                ("xcodeVst3BinaryLocation", "vst3BinaryLocation", "VST3_BINARY_LOCATION"),
                ("xcodeAudioUnitBinaryLocation", "auBinaryLocation", "AU_BINARY_LOCATION"),
                ("xcodeRtasBinaryLocation", "rtasBinaryLocation", "RTAS_BINARY_LOCATION"),
                ("xcodeAaxBinaryLocation", "aaxBinaryLocation", "AAX_BINARY_LOCATION"),
            ] {
                if attrs.has(old_attr) {
                    self.convert_setting(attrs, old_attr, keyword, None);
                } else {
                    self.convert_setting_if_defined(attrs, new_attr, keyword, None);
                }
            }

            self.convert_setting_if_defined(
                attrs,
                "unityPluginBinaryLocation",
                "UNITY_BINARY_LOCATION",
                None,
            );
            if vst_is_legacy {
                self.convert_setting_if_defined(
                    attrs,
                    "vstBinaryLocation",
                    "VST_LEGACY_BINARY_LOCATION",
                    None,
                );
            }
        }

        if kind == "XCODE_IPHONE" {
            self.convert_setting_if_defined(attrs, "iosBaseSDK", "IOS_BASE_SDK", None);

            if attrs.has("iosDeploymentTarget") {
                self.convert_setting(attrs, "iosDeploymentTarget", "IOS_DEPLOYMENT_TARGET", None);
            } else {
                self.convert_setting_if_defined(
                    attrs,
                    "iosCompatibility",
                    "IOS_DEPLOYMENT_TARGET",
                    None,
                );
            }
        }

        if kind == "XCODE_MAC" {
            let modern_labels = self.supports(Feature::ModernDefaultLabels);
            let macos_naming = self.supports(Feature::MacOsNaming);

            if attrs.has("macOSBaseSDK") {
                self.convert_setting(attrs, "macOSBaseSDK", "MACOS_BASE_SDK", None);
            } else {
                self.convert_setting_if_defined(
                    attrs,
                    "osxSDK",
                    if macos_naming {
                        "MACOS_BASE_SDK_VERSION"
                    } else {
                        "OSX_BASE_SDK_VERSION"
                    },
                    Some(&move |value| {
                        if value == "default" {
                            if modern_labels { "Default" } else { "Use Default" }.to_string()
                        } else if MACOS_SDKS.contains(&value) {
                            value.to_string()
                        } else {
                            String::new()
                        }
                    }),
                );
            }

            if attrs.has("macOSDeploymentTarget") {
                self.convert_setting(
                    attrs,
                    "macOSDeploymentTarget",
                    "MACOS_DEPLOYMENT_TARGET",
                    None,
                );
            } else {
                self.convert_setting_if_defined(
                    attrs,
                    "osxCompatibility",
                    if macos_naming {
                        "MACOS_DEPLOYMENT_TARGET"
                    } else {
                        "OSX_DEPLOYMENT_TARGET"
                    },
                    Some(&move |value| {
                        if value == "default" {
                            if modern_labels { "Default" } else { "Use Default" }.to_string()
                        } else if MACOS_SDKS.contains(&value) {
                            value[..value.len() - 4].to_string()
                        } else {
                            String::new()
                        }
                    }),
                );
            }

            if !macos_naming {
                self.convert_setting_if_defined(
                    attrs,
                    "osxArchitecture",
                    "OSX_ARCHITECTURE",
                    Some(&move |value| {
                        match value {
                            "default" => {
                                if modern_labels {
                                    "Default"
                                } else {
                                    "Use Default"
                                }
                            }
                            "Native" => "Native architecture of build machine",
                            "32BitUniversal" => "Universal Binary (32-bit)",
                            "64BitUniversal" => "Universal Binary (32/64-bit)",
                            "64BitIntel" => "64-bit Intel",
                            _ => "",
                        }
                        .to_string()
                    }),
                );
            } else {
                self.convert_setting_if_defined(
                    attrs,
                    "osxArchitecture",
                    "MACOS_ARCHITECTURE",
                    Some(&|value| {
                        match value {
                            "Native" => "Native architecture of build machine",
                            "32BitUniversal" => "Standard 32-bit",
                            "64BitUniversal" => "Standard 32/64-bit",
                            "64BitIntel" => "Standard 64-bit",
                            _ => "",
                        }
                        .to_string()
                    }),
                );
            }
        }

        if is_xcode {
            self.convert_setting_as_list_if_defined(
                attrs,
                "customXcodeFlags",
                "CUSTOM_XCODE_FLAGS",
                Some(&|value| {
                    tokens(value, ",", "\"'")
                        .iter()
                        .filter(|flag| !flag.is_empty())
                        .map(|flag| {
                            let (key, val) = match flag.split_once('=') {
                                Some((key, val)) => (key, val),
                                None => (flag.as_str(), ""),
                            };
                            format!("{} = {}", key.trim(), val.trim())
                        })
                        .collect()
                }),
            );

            self.convert_setting_as_list_if_defined(
                attrs,
                "plistPreprocessorDefinitions",
                "PLIST_PREPROCESSOR_DEFINITIONS",
                Some(&|value| parse_preprocessor_definitions(value)),
            );

            self.convert_setting_if_defined(
                attrs,
                "cppLanguageStandard",
                "CXX_LANGUAGE_STANDARD",
                Some(&|value| {
                    match value {
                        "" => "Use Default",
                        "c++98" => "C++98",
                        "gnu++98" => "GNU++98",
                        "c++11" => "C++11",
                        "gnu++11" => "GNU++11",
                        "c++14" => "C++14",
                        "gnu++14" => "GNU++14",
                        _ => "",
                    }
                    .to_string()
                }),
            );

            let modern_labels = self.supports(Feature::ModernDefaultLabels);
            self.convert_setting_if_defined(
                attrs,
                "cppLibType",
                "CXX_LIBRARY",
                Some(&move |value| {
                    match value {
                        "" => {
                            if modern_labels {
                                "Default"
                            } else {
                                "Use Default"
                            }
                        }
                        "libc++" => "LLVM libc++",
                        "libstdc++" => "GNU libstdc++",
                        _ => "",
                    }
                    .to_string()
                }),
            );

            self.convert_setting_if_defined(
                attrs,
                "codeSigningIdentity",
                "CODE_SIGNING_IDENTITY",
                None,
            );
            self.convert_onoff_setting_if_defined(attrs, "fastMath", "RELAX_IEEE_COMPLIANCE", None);
            self.convert_onoff_setting_if_defined(
                attrs,
                "stripLocalSymbols",
                "STRIP_LOCAL_SYMBOLS",
                None,
            );
        }

        if is_vs {
            self.convert_onoff_setting_if_defined(
                attrs,
                "enablePluginBinaryCopyStep",
                "ENABLE_PLUGIN_COPY_STEP",
                None,
            );

            if !vst_is_legacy {
                self.convert_setting_if_defined(
                    attrs,
                    "vstBinaryLocation",
                    "VST_BINARY_LOCATION",
                    None,
                );
            }
            self.convert_setting_if_defined(attrs, "vst3BinaryLocation", "VST3_BINARY_LOCATION", None);
            self.convert_setting_if_defined(attrs, "rtasBinaryLocation", "RTAS_BINARY_LOCATION", None);
            self.convert_setting_if_defined(attrs, "aaxBinaryLocation", "AAX_BINARY_LOCATION", None);
            self.convert_setting_if_defined(
                attrs,
                "unityPluginBinaryLocation",
                "UNITY_BINARY_LOCATION",
                None,
            );
            if vst_is_legacy {
                self.convert_setting_if_defined(
                    attrs,
                    "vstBinaryLocation",
                    "VST_LEGACY_BINARY_LOCATION",
                    None,
                );
            }

            self.convert_setting_if_defined(
                attrs,
                "winWarningLevel",
                "WARNING_LEVEL",
                Some(&|value| {
                    match int_value(value) {
                        2 => "Low",
                        3 => "Medium",
                        _ => "High",
                    }
                    .to_string()
                }),
            );

            self.convert_onoff_setting_if_defined(
                attrs,
                "warningsAreErrors",
                "TREAT_WARNINGS_AS_ERRORS",
                None,
            );

            let modern_labels = self.supports(Feature::ModernDefaultLabels);
            self.convert_setting_if_defined(
                attrs,
                "useRuntimeLibDLL",
                "RUNTIME_LIBRARY",
                Some(&move |value| {
                    match value {
                        "" => {
                            if modern_labels {
                                "Default"
                            } else {
                                "(Default)"
                            }
                        }
                        "0" => "Use static runtime",
                        "1" => "Use DLL runtime",
                        _ => "",
                    }
                    .to_string()
                }),
            );

            if !self.supports(Feature::WholeProgramOptimisationAsLto) {
                self.convert_setting_if_defined(
                    attrs,
                    "wholeProgramOptimisation",
                    "WHOLE_PROGRAM_OPTIMISATION",
                    Some(&|value| {
                        if value.is_empty() {
                            "Enable when possible".to_string()
                        } else if int_value(value) > 0 {
                            "Always disable".to_string()
                        } else {
                            String::new()
                        }
                    }),
                );
            }

            self.convert_onoff_setting_if_defined(
                attrs,
                "multiProcessorCompilation",
                "MULTI_PROCESSOR_COMPILATION",
                None,
            );
            self.convert_onoff_setting_if_defined(
                attrs,
                "enableIncrementalLinking",
                "INCREMENTAL_LINKING",
                None,
            );

            if !is_debug {
                self.convert_onoff_setting_if_defined(
                    attrs,
                    "alwaysGenerateDebugSymbols",
                    "FORCE_GENERATION_OF_DEBUG_SYMBOLS",
                    None,
                );
            }

            self.convert_setting_if_defined(attrs, "prebuildCommand", "PREBUILD_COMMAND", None);
            self.convert_setting_if_defined(attrs, "postbuildCommand", "POSTBUILD_COMMAND", None);
            self.convert_onoff_setting_if_defined(attrs, "generateManifest", "GENERATE_MANIFEST", None);

            self.convert_setting_if_defined(
                attrs,
                "characterSet",
                "CHARACTER_SET",
                Some(&|value| {
                    if value.is_empty() { "Default" } else { value }.to_string()
                }),
            );

            if let Some(win_architecture) = attrs.get("winArchitecture") {
                if win_architecture.is_empty() {
                    wln!(self.w, "  # ARCHITECTURE");
                } else {
                    wln!(self.w, "  # ARCHITECTURE \"{win_architecture}\"");
                }
            }

            self.convert_setting_if_defined(
                attrs,
                "debugInformationFormat",
                "DEBUG_INFORMATION_FORMAT",
                Some(&|value| {
                    match value {
                        "None" => "None",
                        "OldStyle" => "C7 Compatible (/Z7)",
                        "ProgramDatabase" => "Program Database (/Zi)",
                        "EditAndContinue" => "Program Database for Edit And Continue (/ZI)",
                        _ => "",
                    }
                    .to_string()
                }),
            );

            self.convert_onoff_setting_if_defined(attrs, "fastMath", "RELAX_IEEE_COMPLIANCE", None);
        }

        if kind == "LINUX_MAKE" {
            self.convert_setting_if_defined(
                attrs,
                "linuxArchitecture",
                "ARCHITECTURE",
                Some(&|value| {
                    match value {
                        "" => "<None>",
                        "-march=native" => "Native",
                        "-m32" => "32-bit (-m32)",
                        "-m64" => "64-bit (-m64)",
                        "-march=armv6" => "ARM v6",
                        "-march=armv7" => "ARM v7",
                        _ => "",
                    }
                    .to_string()
                }),
            );

            self.convert_onoff_setting_if_defined(
                attrs,
                "enablePluginBinaryCopyStep",
                "ENABLE_PLUGIN_COPY_STEP",
                None,
            );

            self.convert_setting_if_defined(attrs, "vst3BinaryLocation", "VST3_BINARY_LOCATION", None);
            self.convert_setting_if_defined(
                attrs,
                "unityPluginBinaryLocation",
                "UNITY_BINARY_LOCATION",
                None,
            );
            self.convert_setting_if_defined(
                attrs,
                "vstBinaryLocation",
                "VST_LEGACY_BINARY_LOCATION",
                None,
            );
        }

        let code_blocks_architecture = |value: &str| -> String {
            match value {
                "-m32" => "32-bit (-m32)",
                "" | "-m64" => "64-bit (-m64)",
                "-march=armv6" => "ARM v6",
                "-march=armv7" => "ARM v7",
                _ => "",
            }
            .to_string()
        };

        if kind == "CODEBLOCKS_WINDOWS"
            && (attrs.has("windowsCodeBlocksArchitecture")
                || self.supports(Feature::CodeBlocksDefaultArchitecture))
        {
            self.convert_setting(
                attrs,
                "windowsCodeBlocksArchitecture",
                "ARCHITECTURE",
                Some(&code_blocks_architecture),
            );
        }

        if kind == "CODEBLOCKS_LINUX"
            && (attrs.has("linuxCodeBlocksArchitecture")
                || self.supports(Feature::CodeBlocksDefaultArchitecture))
        {
            self.convert_setting(
                attrs,
                "linuxCodeBlocksArchitecture",
                "ARCHITECTURE",
                Some(&code_blocks_architecture),
            );
        }

        self.write_user_notes(attrs);

        wln!(self.w, ")");
        wln!(self.w);
    }

    /// `NAME` line with memoized normalization and collision suffixing.
    fn write_configuration_name(&mut self, configuration: &Configuration) {
        let original = configuration.name();

        let already_valid = !original.is_empty()
            && original.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if already_valid {
            self.w.keyword_quoted("NAME", original);
            return;
        }

        if !self.configuration_names.iter().any(|(o, _)| o == original) {
            let base = make_valid_configuration_name(original);
            let mut valid = base.clone();
            let mut suffix = 1;
            while self.configuration_names.iter().any(|(_, v)| *v == valid) {
                valid = format!("{base}_{suffix}");
                suffix += 1;
            }

            warn!(
                "\"{original}\" is not a valid CMake build configuration name. It has been \
                 changed to \"{valid}\" in the generated CMakeLists.txt file."
            );
            self.configuration_names
                .push((original.to_string(), valid));
        }

        let valid = self
            .configuration_names
            .iter()
            .find(|(o, _)| o == original)
            .map(|(_, v)| v.clone())
            .unwrap_or_default();
        let jucer_file_name = self
            .jucer_file
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        wln!(
            self.w,
            "  NAME \"{valid}\" # originally \"{original}\" in {jucer_file_name}"
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Static mapping tables
// ═══════════════════════════════════════════════════════════════════════════════

fn au_main_type_constant(value: &str) -> String {
    match unquoted(value) {
        "aufx" => "kAudioUnitType_Effect",
        "aufc" => "kAudioUnitType_FormatConverter",
        "augn" => "kAudioUnitType_Generator",
        "aumi" => "kAudioUnitType_MIDIProcessor",
        "aumx" => "kAudioUnitType_Mixer",
        "aumu" => "kAudioUnitType_MusicDevice",
        "aumf" => "kAudioUnitType_MusicEffect",
        "auol" => "kAudioUnitType_OfflineEffect",
        "auou" => "kAudioUnitType_Output",
        "aupn" => "kAudioUnitType_Panner",
        _ => "",
    }
    .to_string()
}

const RTAS_CATEGORIES: &[(&str, &str)] = &[
    ("0", "ePlugInCategory_None"),
    ("1", "ePlugInCategory_EQ"),
    ("2", "ePlugInCategory_Dynamics"),
    ("4", "ePlugInCategory_PitchShift"),
    ("8", "ePlugInCategory_Reverb"),
    ("16", "ePlugInCategory_Delay"),
    ("32", "ePlugInCategory_Modulation"),
    ("64", "ePlugInCategory_Harmonic"),
    ("128", "ePlugInCategory_NoiseReduction"),
    ("256", "ePlugInCategory_Dither"),
    ("512", "ePlugInCategory_SoundField"),
    ("1024", "ePlugInCategory_HWGenerators"),
    ("2048", "ePlugInCategory_SWGenerators"),
    ("4096", "ePlugInCategory_WrappedPlugin"),
    ("8192", "ePlugInCategory_Effect"),
];

const AAX_CATEGORIES: &[(&str, &str)] = &[
    ("0", "AAX_ePlugInCategory_None"),
    ("1", "AAX_ePlugInCategory_EQ"),
    ("2", "AAX_ePlugInCategory_Dynamics"),
    ("4", "AAX_ePlugInCategory_PitchShift"),
    ("8", "AAX_ePlugInCategory_Reverb"),
    ("16", "AAX_ePlugInCategory_Delay"),
    ("32", "AAX_ePlugInCategory_Modulation"),
    ("64", "AAX_ePlugInCategory_Harmonic"),
    ("128", "AAX_ePlugInCategory_NoiseReduction"),
    ("256", "AAX_ePlugInCategory_Dither"),
    ("512", "AAX_ePlugInCategory_SoundField"),
    ("1024", "AAX_ePlugInCategory_HWGenerators"),
    ("2048", "AAX_ePlugInCategory_SWGenerators"),
    ("4096", "AAX_ePlugInCategory_WrappedPlugin"),
    ("8192", "AAX_EPlugInCategory_Effect"),
];

const APP_SANDBOX_OPTIONS: &[(&str, &str)] = &[
    ("com.apple.security.network.server", "Network: Incoming Connections (Server)"),
    ("com.apple.security.network.client", "Network: Outgoing Connections (Client)"),
    ("com.apple.security.device.camera", "Hardware: Camera"),
    ("com.apple.security.device.microphone", "Hardware: Microphone"),
    ("com.apple.security.device.usb", "Hardware: USB"),
    ("com.apple.security.print", "Hardware: Printing"),
    ("com.apple.security.device.bluetooth", "Hardware: Bluetooth"),
    ("com.apple.security.personal-information.addressbook", "App Data: Contacts"),
    ("com.apple.security.personal-information.location", "App Data: Location"),
    ("com.apple.security.personal-information.calendars", "App Data: Calendar"),
    (
        "com.apple.security.files.user-selected.read-only",
        "File Access: User Selected File (Read Only)",
    ),
    (
        "com.apple.security.files.user-selected.read-write",
        "File Access: User Selected File (Read/Write)",
    ),
    (
        "com.apple.security.files.downloads.read-only",
        "File Access: Downloads Folder (Read Only)",
    ),
    (
        "com.apple.security.files.downloads.read-write",
        "File Access: Downloads Folder (Read/Write)",
    ),
    (
        "com.apple.security.files.pictures.read-only",
        "File Access: Pictures Folder (Read Only)",
    ),
    (
        "com.apple.security.files.pictures.read-write",
        "File Access: Pictures Folder (Read/Write)",
    ),
    (
        "com.apple.security.assets.music.read-only",
        "File Access: Music Folder (Read Only)",
    ),
    (
        "com.apple.security.assets.music.read-write",
        "File Access: Music Folder (Read/Write)",
    ),
    (
        "com.apple.security.assets.movies.read-only",
        "File Access: Movies Folder (Read Only)",
    ),
    (
        "com.apple.security.assets.movies.read-write",
        "File Access: Movies Folder (Read/Write)",
    ),
    (
        "com.apple.security.temporary-exception.audio-unit-host",
        "Temporary Exception: Audio Unit Hosting",
    ),
    (
        "com.apple.security.temporary-exception.mach-lookup.global-name",
        "Temporary Exception: Global Mach Service",
    ),
    (
        "com.apple.security.temporary-exception.mach-register.global-name",
        "Temporary Exception: Global Mach Service Dynamic Registration",
    ),
    (
        "com.apple.security.temporary-exception.files.home-relative-path.read-only",
        "Temporary Exception: Home Directory File Access (Read Only)",
    ),
    (
        "com.apple.security.temporary-exception.files.home-relative-path.read-write",
        "Temporary Exception: Home Directory File Access (Read/Write)",
    ),
    (
        "com.apple.security.temporary-exception.files.absolute-path.read-only",
        "Temporary Exception: Absolute Path File Access (Read Only)",
    ),
    (
        "com.apple.security.temporary-exception.files.absolute-path.read-write",
        "Temporary Exception: Absolute Path File Access (Read/Write)",
    ),
    (
        "com.apple.security.temporary-exception.iokit-user-client-class",
        "Temporary Exception: IOKit User Client Class",
    ),
    (
        "com.apple.security.temporary-exception.shared-preference.read-only",
        "Temporary Exception: Shared Preference Domain (Read Only)",
    ),
    (
        "com.apple.security.temporary-exception.shared-preference.read-write",
        "Temporary Exception: Shared Preference Domain (Read/Write)",
    ),
];

const HARDENED_RUNTIME_OPTIONS_CATEGORISED: &[(&str, &str)] = &[
    (
        "com.apple.security.cs.allow-jit",
        "Runtime Exceptions: Allow Execution of JIT-compiled Code",
    ),
    (
        "com.apple.security.cs.allow-unsigned-executable-memory",
        "Runtime Exceptions: Allow Unsigned Executable Memory",
    ),
    (
        "com.apple.security.cs.allow-dyld-environment-variables",
        "Runtime Exceptions: Allow DYLD Environment Variables",
    ),
    (
        "com.apple.security.cs.disable-library-validation",
        "Runtime Exceptions: Disable Library Validation",
    ),
    (
        "com.apple.security.cs.disable-executable-page-protection",
        "Runtime Exceptions: Disable Executable Memory Protection",
    ),
    ("com.apple.security.cs.debugger", "Runtime Exceptions: Debugging Tool"),
    ("com.apple.security.device.audio-input", "Resource Access: Audio Input"),
    ("com.apple.security.device.camera", "Resource Access: Camera"),
    ("com.apple.security.personal-information.location", "Resource Access: Location"),
    (
        "com.apple.security.personal-information.addressbook",
        "Resource Access: Address Book",
    ),
    ("com.apple.security.personal-information.calendars", "Resource Access: Calendar"),
    (
        "com.apple.security.personal-information.photos-library",
        "Resource Access: Photos Library",
    ),
    ("com.apple.security.automation.apple-events", "Resource Access: Apple Events"),
];

const HARDENED_RUNTIME_OPTIONS_PLAIN: &[(&str, &str)] = &[
    ("com.apple.security.cs.allow-jit", "Allow Execution of JIT-compiled Code"),
    (
        "com.apple.security.cs.allow-unsigned-executable-memory",
        "Allow Unsigned Executable Memory",
    ),
    (
        "com.apple.security.cs.allow-dyld-environment-variables",
        "Allow DYLD Environment Variables",
    ),
    ("com.apple.security.cs.disable-library-validation", "Disable Library Validation"),
    (
        "com.apple.security.cs.disable-executable-page-protection",
        "Disable Executable Memory Protection",
    ),
    ("com.apple.security.cs.debugger", "Debugging Tool"),
    ("com.apple.security.device.audio-input", "Audio Input"),
    ("com.apple.security.device.camera", "Camera"),
    ("com.apple.security.personal-information.location", "Location"),
    ("com.apple.security.personal-information.addressbook", "Address Book"),
    ("com.apple.security.personal-information.calendars", "Calendar"),
    ("com.apple.security.personal-information.photos-library", "Photos Library"),
    ("com.apple.security.automation.apple-events", "Apple Events"),
];

const WINDOWS_TARGETS: &[(&str, &str)] = &[
    ("0x0400", "Windows NT 4.0"),
    ("0x0500", "Windows 2000"),
    ("0x0501", "Windows XP"),
    ("0x0502", "Windows Server 2003"),
    ("0x0600", "Windows Vista"),
    ("0x0601", "Windows 7"),
    ("0x0602", "Windows 8"),
    ("0x0603", "Windows 8.1"),
    ("0x0A00", "Windows 10"),
];

const MACOS_SDKS: &[&str] = &[
    "10.5 SDK",
    "10.6 SDK",
    "10.7 SDK",
    "10.8 SDK",
    "10.9 SDK",
    "10.10 SDK",
    "10.11 SDK",
    "10.12 SDK",
    "10.13 SDK",
    "10.14 SDK",
    "10.15 SDK",
    "10.16 SDK",
    "11.0 SDK",
    "11.1 SDK",
];
