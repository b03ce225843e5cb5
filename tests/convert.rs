//! End-to-end conversion tests: parsed descriptor in, full script out.

use jucer2cmake::convert::{ConvertOptions, write_reprojucer_cmake_lists};
use jucer2cmake::project::Project;

fn options() -> ConvertOptions {
    ConvertOptions {
        jucer_file_path: "Demo.jucer".to_string(),
        reprojucer_file_path: None,
        juce_modules_path: String::new(),
        user_modules_path: String::new(),
        relocatable: false,
        jucer_version: None,
        output_dir: std::env::current_dir().unwrap(),
        license_based_default: "OFF",
    }
}

fn convert_with(xml: &str, adjust: impl FnOnce(&mut ConvertOptions)) -> String {
    let project = Project::parse(xml).unwrap();
    let mut opts = options();
    adjust(&mut opts);
    write_reprojucer_cmake_lists(&opts, &project).unwrap()
}

fn convert(xml: &str) -> String {
    convert_with(xml, |_| {})
}

/// Assert that every needle occurs, in the given order.
fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut pos = 0;
    for needle in needles {
        match haystack[pos..].find(needle) {
            Some(offset) => pos += offset + needle.len(),
            None => panic!("missing or out of order: {needle:?}\n--- output ---\n{haystack}"),
        }
    }
}

const CONSOLE_APP: &str = r#"
    <JUCERPROJECT id="a1B2c3" name="Demo" projectType="consoleapp"
                  jucerVersion="5.4.3">
      <MAINGROUP id="root" name="Demo">
        <GROUP id="src" name="Source">
          <FILE id="f1" name="Main.cpp" compile="1" resource="0"
                file="Source/Main.cpp"/>
        </GROUP>
      </MAINGROUP>
      <MODULES>
        <MODULE id="juce_core" showAllCode="1" useLocalCopy="0" useGlobalPath="0"/>
      </MODULES>
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

// ─── End-to-end scenario ─────────────────────────────────────────────────

#[test]
fn console_app_produces_ordered_blocks() {
    let out = convert(CONSOLE_APP);

    assert_in_order(
        &out,
        &[
            "cmake_minimum_required(VERSION 3.4)",
            "project(\"Demo\")",
            "include(Reprojucer)",
            "set(Demo_jucer_FILE",
            "jucer_project_begin(",
            "  JUCER_VERSION \"5.4.3\"",
            "  PROJECT_ID \"a1B2c3\"",
            "jucer_project_settings(",
            "  PROJECT_NAME \"Demo\"",
            "  PROJECT_VERSION \"1.0.0\"",
            "  PROJECT_TYPE \"Console Application\"",
            "jucer_project_files(\"Demo/Source\"",
            "  x         .         .         \"Source/Main.cpp\"",
            "jucer_project_module(",
            "  juce_core",
            "  PATH \"../../modules\"",
            "jucer_export_target(",
            "  \"Linux Makefile\"",
            "jucer_export_target_configuration(",
            "  NAME \"Debug\"",
            "  DEBUG_MODE ON",
            "jucer_export_target_configuration(",
            "  NAME \"Release\"",
            "  DEBUG_MODE OFF",
            "jucer_project_end()",
        ],
    );

    // No audio-plugin block for a console app.
    assert!(!out.contains("jucer_audio_plugin_settings"));
}

#[test]
fn conversion_is_deterministic() {
    assert_eq!(convert(CONSOLE_APP), convert(CONSOLE_APP));
}

#[test]
fn relocatable_requires_a_cmake_variable() {
    let out = convert_with(CONSOLE_APP, |opts| opts.relocatable = true);
    assert_in_order(
        &out,
        &[
            "if(NOT DEFINED Demo_jucer_FILE)",
            "  message(FATAL_ERROR \"Demo_jucer_FILE must be defined\")",
            "endif()",
            "get_filename_component(Demo_jucer_FILE",
            "  \"${Demo_jucer_FILE}\" ABSOLUTE",
            "  BASE_DIR \"${CMAKE_BINARY_DIR}\"",
        ],
    );
    assert!(!out.contains("set(Demo_jucer_FILE"));
}

#[test]
fn unrecognized_exporters_are_skipped() {
    let xml = CONSOLE_APP.replace("LINUX_MAKE", "ANDROIDSTUDIO");
    let out = convert(&xml);
    assert!(!out.contains("jucer_export_target("));
    // The rest of the document still converts.
    assert!(out.contains("jucer_project_end()"));
}

#[test]
fn project_name_is_escaped_in_quoted_settings() {
    let xml = CONSOLE_APP.replace(r#"name="Demo""#, r#"name="Va&quot;lue\""#);
    let out = convert(&xml);
    assert!(out.contains("  PROJECT_NAME \"Va\\\"lue\""), "{out}");
}

// ─── Grouping ────────────────────────────────────────────────────────────

#[test]
fn file_blocks_preserve_interleaved_source_order() {
    let xml = r#"
        <JUCERPROJECT id="x" name="Demo" projectType="consoleapp" jucerVersion="5.4.3">
          <MAINGROUP id="root" name="Demo">
            <GROUP id="a" name="A">
              <FILE id="f1" compile="1" resource="0" file="one.cpp"/>
              <GROUP id="b" name="B">
                <FILE id="f2" compile="1" resource="0" file="two.cpp"/>
              </GROUP>
              <FILE id="f3" compile="1" resource="0" file="three.cpp"/>
            </GROUP>
          </MAINGROUP>
        </JUCERPROJECT>"#;
    let out = convert(xml);

    assert_in_order(
        &out,
        &[
            "jucer_project_files(\"Demo/A\"",
            "\"one.cpp\"",
            "jucer_project_files(\"Demo/A/B\"",
            "\"two.cpp\"",
            "jucer_project_files(\"Demo/A\"",
            "\"three.cpp\"",
        ],
    );
    assert_eq!(out.matches("jucer_project_files(").count(), 3);
}

#[test]
fn compiler_flag_scheme_column_aligns_per_block() {
    let xml = r#"
        <JUCERPROJECT id="x" name="Demo" projectType="consoleapp" jucerVersion="5.4.3"
                      compilerFlagSchemes="NoWarnings">
          <MAINGROUP id="root" name="Demo">
            <GROUP id="src" name="Source">
              <FILE id="f1" compile="1" resource="0" file="a.cpp"
                    compilerFlagScheme="NoWarnings"/>
              <FILE id="f2" compile="1" resource="0" file="longer/path.cpp"/>
            </GROUP>
          </MAINGROUP>
          <EXPORTFORMATS>
            <LINUX_MAKE targetFolder="Builds/LinuxMakefile">
              <CONFIGURATIONS/>
            </LINUX_MAKE>
          </EXPORTFORMATS>
        </JUCERPROJECT>"#;
    let out = convert(xml);

    // The scheme column starts two spaces past this block's longest path.
    let longest = "longer/path.cpp".len();
    let padding = " ".repeat(longest - "a.cpp".len() + 2);
    assert!(
        out.contains(&format!(
            "  x         .         .         \"a.cpp\"{padding}\"NoWarnings\""
        )),
        "{out}"
    );
    // Header rows pad by the longest path length too.
    assert!(out.contains(&format!(
        "# Compile   Xcode     Binary    File{}Compiler Flag",
        " ".repeat(longest)
    )));
    assert!(out.contains(&format!(
        "#           Resource  Resource{}Scheme",
        " ".repeat(longest + 6)
    )));
    // The scheme never defines per-exporter flags here, so no setting line.
    assert!(!out.contains("COMPILER_FLAGS_FOR_"));
}

// ─── Configuration name normalization ────────────────────────────────────

#[test]
fn colliding_configuration_names_get_numeric_suffixes() {
    let xml = r#"
        <JUCERPROJECT id="x" name="Demo" projectType="consoleapp" jucerVersion="5.4.3">
          <MAINGROUP id="root" name="Demo"/>
          <EXPORTFORMATS>
            <LINUX_MAKE targetFolder="Builds/LinuxMakefile">
              <CONFIGURATIONS>
                <CONFIGURATION name="Debug Build" isDebug="1"/>
                <CONFIGURATION name="Debug   Build" isDebug="1"/>
              </CONFIGURATIONS>
            </LINUX_MAKE>
          </EXPORTFORMATS>
        </JUCERPROJECT>"#;
    let out = convert(xml);

    assert!(out.contains("  NAME \"Debug_Build\" # originally \"Debug Build\" in Demo.jucer"));
    assert!(out.contains("  NAME \"Debug_Build_1\" # originally \"Debug   Build\" in Demo.jucer"));
    assert_eq!(out.matches("\"Debug_Build_1\"").count(), 1);
}

#[test]
fn repeated_configuration_name_reuses_its_normalization() {
    let xml = r#"
        <JUCERPROJECT id="x" name="Demo" projectType="consoleapp" jucerVersion="5.4.3">
          <MAINGROUP id="root" name="Demo"/>
          <EXPORTFORMATS>
            <LINUX_MAKE targetFolder="B">
              <CONFIGURATIONS>
                <CONFIGURATION name="Debug Build" isDebug="1"/>
              </CONFIGURATIONS>
            </LINUX_MAKE>
            <CODEBLOCKS_LINUX targetFolder="C">
              <CONFIGURATIONS>
                <CONFIGURATION name="Debug Build" isDebug="1"/>
              </CONFIGURATIONS>
            </CODEBLOCKS_LINUX>
          </EXPORTFORMATS>
        </JUCERPROJECT>"#;
    let out = convert(xml);

    // Same original name, same normalized name, in both exporters.
    assert_eq!(out.matches("  NAME \"Debug_Build\" # originally").count(), 2);
    assert!(!out.contains("Debug_Build_1"));
}

// ─── Version gating ──────────────────────────────────────────────────────

const AUDIO_PLUGIN_MODERN: &str = r#"
    <JUCERPROJECT id="q2W3e4" name="Verb" projectType="audioplug"
                  jucerVersion="5.4.3" companyName="Acme"
                  pluginFormats="buildVST3,buildStandalone">
      <MAINGROUP id="root" name="Verb">
        <GROUP id="src" name="Source">
          <FILE id="f1" compile="1" resource="0" file="Source/Plugin.cpp"/>
        </GROUP>
      </MAINGROUP>
      <EXPORTFORMATS>
        <XCODE_MAC targetFolder="Builds/MacOSX">
          <CONFIGURATIONS>
            <CONFIGURATION name="Release" isDebug="0" osxSDK="default"/>
          </CONFIGURATIONS>
        </XCODE_MAC>
      </EXPORTFORMATS>
    </JUCERPROJECT>"#;

#[test]
fn modern_audio_plugin_settings() {
    let out = convert(AUDIO_PLUGIN_MODERN);

    assert_in_order(
        &out,
        &[
            "jucer_audio_plugin_settings(",
            "  PLUGIN_FORMATS",
            "    \"VST3\"",
            "    \"Standalone\"",
            "  # PLUGIN_CHARACTERISTICS",
            "  PLUGIN_NAME \"Verb\"",
            "  PLUGIN_DESCRIPTION \"Verb\"",
            "  PLUGIN_MANUFACTURER \"Acme\"",
            "  PLUGIN_MANUFACTURER_CODE \"Manu\"",
            "  # PLUGIN_CHANNEL_CONFIGURATIONS",
            "  PLUGIN_AAX_IDENTIFIER \"com.Acme.Verb\"",
            "  PLUGIN_VST_LEGACY_CATEGORY \"kPlugCategEffect\"",
        ],
    );

    // 5.4 bundle identifiers derive from the company name.
    assert!(out.contains("  BUNDLE_IDENTIFIER \"com.Acme.Verb\""));
    // Splash screen settings exist from 5.0 on, with the license default.
    assert!(out.contains("  DISPLAY_THE_JUCE_SPLASH_SCREEN OFF #"));
    // VST3 SDK folder is asked about for a VST3 plugin on an Xcode exporter.
    assert!(out.contains("  # VST3_SDK_FOLDER"));
    // The bundled VST2 interface makes the VST2 SDK folder unnecessary.
    assert!(!out.contains("VST_SDK_FOLDER"));
    // 5.4.3 predates the "macOS" renaming.
    assert!(out.contains("  \"Xcode (MacOSX)\""));
    assert!(out.contains("  OSX_BASE_SDK_VERSION \"Default\""));
}

const AUDIO_PLUGIN_LEGACY: &str = r#"
    <JUCERPROJECT id="q2W3e4" name="OldVerb" projectType="audioplug"
                  jucerVersion="4.2.3" buildVST="1">
      <MAINGROUP id="root" name="OldVerb"/>
      <EXPORTFORMATS>
        <XCODE_MAC targetFolder="Builds/MacOSX">
          <CONFIGURATIONS/>
        </XCODE_MAC>
      </EXPORTFORMATS>
    </JUCERPROJECT>"#;

#[test]
fn legacy_audio_plugin_settings() {
    let out = convert(AUDIO_PLUGIN_LEGACY);

    // Pre-5.3.1 formats are individual toggles with documented defaults.
    assert_in_order(
        &out,
        &[
            "  BUILD_VST ON",
            "  BUILD_VST3 OFF",
            "  BUILD_AUDIOUNIT ON",
            "  BUILD_AUDIOUNIT_V3 OFF",
            "  BUILD_RTAS OFF",
            "  BUILD_AAX OFF",
            "  PLUGIN_IS_A_SYNTH OFF",
            "  PLUGIN_MIDI_INPUT OFF",
        ],
    );
    // 4.2.3 has no standalone plugin support and no splash settings.
    assert!(!out.contains("BUILD_STANDALONE_PLUGIN"));
    assert!(!out.contains("DISPLAY_THE_JUCE_SPLASH_SCREEN"));
    // No bundled VST2 interface yet: the SDK folder setting appears.
    assert!(out.contains("  # VST_SDK_FOLDER"));
    // Old-style bundle identifier.
    assert!(out.contains("  BUNDLE_IDENTIFIER \"com.yourcompany.OldVerb\""));
}

#[test]
fn version_override_takes_precedence() {
    let out = convert_with(AUDIO_PLUGIN_LEGACY, |opts| {
        opts.jucer_version = Some("5.4.3".to_string());
    });
    assert!(out.contains("  JUCER_VERSION \"5.4.3\""));
    assert!(out.contains("DISPLAY_THE_JUCE_SPLASH_SCREEN"));
}

#[test]
fn invalid_version_is_fatal() {
    let project = Project::parse(CONSOLE_APP).unwrap();
    let mut opts = options();
    opts.jucer_version = Some("not-a-version".to_string());
    let err = write_reprojucer_cmake_lists(&opts, &project).unwrap_err();
    assert!(err.message.contains("not a valid Jucer version"));
}

// ─── Snapshot markers ────────────────────────────────────────────────────

#[test]
fn snapshot_marker_with_bundled_vst2_interface() {
    let out = convert_with(AUDIO_PLUGIN_LEGACY, |opts| {
        opts.jucer_version = Some("9f31d64".to_string());
    });
    assert!(out.contains("  JUCER_VERSION \"9f31d64\""));
    // This snapshot bundles the VST2 interface, so no SDK folder setting.
    assert!(!out.contains("VST_SDK_FOLDER"));
    // Snapshot-era descriptors still use individual format toggles.
    assert!(out.contains("  BUILD_VST ON"));
}

#[test]
fn snapshot_marker_before_bundled_vst2_interface() {
    let out = convert_with(AUDIO_PLUGIN_LEGACY, |opts| {
        opts.jucer_version = Some("70949aa".to_string());
    });
    assert!(out.contains("  # VST_SDK_FOLDER"));
}

#[test]
fn unrecognized_snapshot_marker_falls_back_to_default() {
    let out = convert_with(AUDIO_PLUGIN_LEGACY, |opts| {
        opts.jucer_version = Some("abcdef1".to_string());
    });
    // The default snapshot bundles the VST2 interface.
    assert!(!out.contains("VST_SDK_FOLDER"));
}

// ─── Exporters ───────────────────────────────────────────────────────────

#[test]
fn target_folder_comment_names_its_consumers() {
    let xml = r#"
        <JUCERPROJECT id="x" name="Demo" projectType="consoleapp" jucerVersion="5.4.3">
          <MAINGROUP id="root" name="Demo"/>
          <EXPORTFORMATS>
            <VS2019 targetFolder="Builds/VisualStudio2019">
              <CONFIGURATIONS>
                <CONFIGURATION name="Debug" isDebug="1" headerPath="inc"
                               libraryPath="lib" prebuildCommand="echo hi"/>
              </CONFIGURATIONS>
            </VS2019>
          </EXPORTFORMATS>
        </JUCERPROJECT>"#;
    let out = convert(xml);

    assert!(out.contains(
        "  TARGET_PROJECT_FOLDER \"Builds/VisualStudio2019\" # used by \
         HEADER_SEARCH_PATHS, EXTRA_LIBRARY_SEARCH_PATHS, PREBUILD_COMMAND"
    ));
    assert_in_order(
        &out,
        &[
            "jucer_export_target_configuration(",
            "  HEADER_SEARCH_PATHS",
            "    \"inc\"",
            "  EXTRA_LIBRARY_SEARCH_PATHS",
            "    \"lib\"",
            "  PREBUILD_COMMAND \"echo hi\"",
        ],
    );
}

#[test]
fn vs_optimisation_labels_differ_from_gcc() {
    let xml = r#"
        <JUCERPROJECT id="x" name="Demo" projectType="consoleapp" jucerVersion="5.4.3">
          <MAINGROUP id="root" name="Demo"/>
          <EXPORTFORMATS>
            <VS2019 targetFolder="B">
              <CONFIGURATIONS>
                <CONFIGURATION name="Release" optimisation="3"/>
              </CONFIGURATIONS>
            </VS2019>
            <LINUX_MAKE targetFolder="C">
              <CONFIGURATIONS>
                <CONFIGURATION name="Release" optimisation="3"/>
              </CONFIGURATIONS>
            </LINUX_MAKE>
          </EXPORTFORMATS>
        </JUCERPROJECT>"#;
    let out = convert(xml);
    assert!(out.contains("  OPTIMISATION \"Maximise speed\""));
    assert!(out.contains("  OPTIMISATION \"-O3 (fastest with safe optimisations)\""));
}

#[test]
fn unknown_enum_value_degrades_to_placeholder() {
    let xml = r#"
        <JUCERPROJECT id="x" name="Demo" projectType="consoleapp" jucerVersion="5.4.3">
          <MAINGROUP id="root" name="Demo"/>
          <EXPORTFORMATS>
            <LINUX_MAKE targetFolder="B">
              <CONFIGURATIONS>
                <CONFIGURATION name="Release" optimisation="99"/>
              </CONFIGURATIONS>
            </LINUX_MAKE>
          </EXPORTFORMATS>
        </JUCERPROJECT>"#;
    let out = convert(xml);
    assert!(out.contains("  # OPTIMISATION"));
    assert!(out.contains("jucer_project_end()"));
}

#[test]
fn empty_list_transform_emits_placeholder() {
    // A defines attribute that parses to zero definitions must come out as
    // a commented placeholder, never an empty block.
    let xml = CONSOLE_APP.replace(
        r#"jucerVersion="5.4.3""#,
        r#"jucerVersion="5.4.3" defines="   ""#,
    );
    let out = convert(&xml);
    assert!(out.contains("  # PREPROCESSOR_DEFINITIONS"));
}

#[test]
fn present_but_empty_differs_from_absent() {
    // An empty companyName still emits a (commented) line; an absent one
    // emits nothing.
    let with_empty = convert(&CONSOLE_APP.replace(
        r#"jucerVersion="5.4.3""#,
        r#"jucerVersion="5.4.3" companyName="""#,
    ));
    let without = convert(CONSOLE_APP);
    assert!(with_empty.contains("  # COMPANY_NAME"));
    assert!(!without.contains("COMPANY_NAME"));
}

// ─── Modules & filesystem-backed sections ────────────────────────────────

#[test]
fn module_options_resolve_against_the_module_header() {
    let dir = tempfile::tempdir().unwrap();
    let module_dir = dir.path().join("modules").join("juce_core");
    std::fs::create_dir_all(&module_dir).unwrap();
    std::fs::write(
        module_dir.join("juce_core.h"),
        "/** Config: JUCE_FORCE_DEBUG\n*/\n\
         /** Config: JUCE_LOG_ASSERTIONS\n*/\n\
         /** Config: JUCE_CHECK_MEMORY_LEAKS\n*/\n",
    )
    .unwrap();

    let xml = r#"
        <JUCERPROJECT id="x" name="Demo" projectType="consoleapp" jucerVersion="5.4.3">
          <MAINGROUP id="root" name="Demo"/>
          <MODULES>
            <MODULE id="juce_core" useGlobalPath="0"/>
          </MODULES>
          <JUCEOPTIONS JUCE_FORCE_DEBUG="1" JUCE_LOG_ASSERTIONS="disabled"/>
          <EXPORTFORMATS>
            <LINUX_MAKE targetFolder="B">
              <MODULEPATHS>
                <MODULEPATH id="juce_core" path="modules"/>
              </MODULEPATHS>
              <CONFIGURATIONS/>
            </LINUX_MAKE>
          </EXPORTFORMATS>
        </JUCERPROJECT>"#;

    let jucer_path = dir.path().join("Demo.jucer");
    let out = convert_with(xml, |opts| {
        opts.jucer_file_path = jucer_path.to_string_lossy().into_owned();
    });

    assert_in_order(
        &out,
        &[
            "jucer_project_module(",
            "  juce_core",
            "  PATH \"modules\"",
            "  JUCE_FORCE_DEBUG ON",
            "  JUCE_LOG_ASSERTIONS OFF",
            "  # JUCE_CHECK_MEMORY_LEAKS",
        ],
    );
}

#[test]
fn global_module_path_is_used_and_announced() {
    let xml = r#"
        <JUCERPROJECT id="x" name="Demo" projectType="consoleapp" jucerVersion="5.4.3">
          <MAINGROUP id="root" name="Demo"/>
          <MODULES>
            <MODULE id="juce_core" useGlobalPath="1"/>
          </MODULES>
          <EXPORTFORMATS>
            <LINUX_MAKE targetFolder="B">
              <CONFIGURATIONS/>
            </LINUX_MAKE>
          </EXPORTFORMATS>
        </JUCERPROJECT>"#;
    let out = convert_with(xml, |opts| {
        opts.juce_modules_path = "/opt/JUCE/modules".to_string();
    });

    assert!(out.contains("set(JUCE_MODULES_GLOBAL_PATH \"/opt/JUCE/modules\")"));
    assert!(out.contains("  PATH \"${JUCE_MODULES_GLOBAL_PATH}\""));
}

#[test]
fn missing_global_module_path_is_an_actionable_error() {
    let xml = r#"
        <JUCERPROJECT id="x" name="Demo" projectType="consoleapp" jucerVersion="5.4.3">
          <MAINGROUP id="root" name="Demo"/>
          <MODULES>
            <MODULE id="my_custom_module" useGlobalPath="1"/>
          </MODULES>
        </JUCERPROJECT>"#;
    let project = Project::parse(xml).unwrap();
    let err = write_reprojucer_cmake_lists(&options(), &project).unwrap_err();
    assert!(err.message.contains("--user-modules"), "{}", err.message);
}

#[test]
fn custom_appconfig_user_section_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let library_dir = dir.path().join("JuceLibraryCode");
    std::fs::create_dir_all(&library_dir).unwrap();
    std::fs::write(
        library_dir.join("AppConfig.h"),
        "// [BEGIN_USER_CODE_SECTION]\n\
         #define MY_FLAG 1\n\
         // [END_USER_CODE_SECTION]\n",
    )
    .unwrap();

    let jucer_path = dir.path().join("Demo.jucer");
    let out = convert_with(CONSOLE_APP, |opts| {
        opts.jucer_file_path = jucer_path.to_string_lossy().into_owned();
    });

    assert_in_order(
        &out,
        &[
            "jucer_appconfig_header(",
            "  USER_CODE_SECTION",
            "\"#define MY_FLAG 1\"",
        ],
    );
}

#[test]
fn default_appconfig_user_section_is_omitted() {
    let dir = tempfile::tempdir().unwrap();
    let library_dir = dir.path().join("JuceLibraryCode");
    std::fs::create_dir_all(&library_dir).unwrap();
    std::fs::write(
        library_dir.join("AppConfig.h"),
        "// [BEGIN_USER_CODE_SECTION]\n\
         \n\
         // (You can add your own code in this section, and the Projucer will not overwrite it)\n\
         \n\
         // [END_USER_CODE_SECTION]\n",
    )
    .unwrap();

    let jucer_path = dir.path().join("Demo.jucer");
    let out = convert_with(CONSOLE_APP, |opts| {
        opts.jucer_file_path = jucer_path.to_string_lossy().into_owned();
    });

    assert!(!out.contains("jucer_appconfig_header"));
}

// ─── User notes ──────────────────────────────────────────────────────────

#[test]
fn user_notes_become_comment_blocks() {
    let xml = CONSOLE_APP.replace(
        r#"jucerVersion="5.4.3""#,
        "jucerVersion=\"5.4.3\" userNotes=\"first line&#10;second line\"",
    );
    let out = convert(&xml);
    assert_in_order(
        &out,
        &["  # NOTES", "  #   first line", "  #   second line", ")"],
    );
}
