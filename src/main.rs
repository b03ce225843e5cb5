//! Command-line entry point.
//!
//! Two conversion modes exist: `reprojucer` (the full Reprojucer.cmake
//! translation) and `juce6` (a preamble for JUCE 6's own CMake support).
//! Every fatal error exits with status 1; the generated file is only
//! touched when its content actually changed.

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;

use jucer2cmake::convert::{ConvertOptions, write_reprojucer_cmake_lists};
use jucer2cmake::error::Error;
use jucer2cmake::juce6::write_juce6_cmake_lists;
use jucer2cmake::paths::child_from_working_directory;
use jucer2cmake::project::Project;
use jucer2cmake::writer::{WriteOutcome, write_if_changed};

/// Default for the license-gated toggles (usage reporting, splash screen).
/// Threaded into the emission engine rather than baked into it, so a
/// paid-license build only has to change this one value.
const LICENSE_BASED_DEFAULT: &str = "OFF";

#[derive(Parser)]
#[command(
    name = "jucer2cmake",
    version,
    about = "Converts a .jucer file into a CMakeLists.txt file",
    long_about = "Converts a .jucer file into a CMakeLists.txt file.\n\
                  The CMakeLists.txt file is written in the current working directory."
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Generate a CMakeLists.txt that uses Reprojucer.cmake
    Reprojucer {
        /// Path to the .jucer file to convert
        jucer_project_file: String,
        /// Path to Reprojucer.cmake
        reprojucer_file: Option<String>,
        /// Global path to JUCE modules
        #[arg(long, value_name = "path")]
        juce_modules: Option<String>,
        /// Global path to user modules
        #[arg(long, value_name = "path")]
        user_modules: Option<String>,
        /// Makes the CMakeLists.txt file independent from the location of
        /// the .jucer file, but requires defining a variable when calling
        /// cmake
        #[arg(long)]
        relocatable: bool,
        /// Use this Jucer version instead of the one in the .jucer file
        #[arg(long, value_name = "version")]
        jucer_version: Option<String>,
    },
    /// Generate a CMakeLists.txt for JUCE 6's CMake support
    Juce6 {
        /// Path to the .jucer file to convert
        jucer_project_file: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => "error",
                log::Level::Warn => "warning",
                log::Level::Info => "info",
                log::Level::Debug => "debug",
                log::Level::Trace => "trace",
            };
            writeln!(buf, "{level}: {}", record.args())
        })
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help/--version print to stdout and succeed; usage errors
            // print to stderr and fail.
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli.mode {
        Mode::Reprojucer {
            jucer_project_file,
            reprojucer_file,
            juce_modules,
            user_modules,
            relocatable,
            jucer_version,
        } => {
            if let Some(reprojucer) = &reprojucer_file {
                if !reprojucer.ends_with("Reprojucer.cmake")
                    || !child_from_working_directory(reprojucer).is_file()
                {
                    return Err(Error::new(format!(
                        "'{reprojucer}' is not a valid Reprojucer.cmake file."
                    )));
                }
            }

            if let Some(path) = &juce_modules {
                if path.is_empty() || !child_from_working_directory(path).is_dir() {
                    return Err(Error::new(format!(
                        "No such directory (--juce-modules): '{path}'"
                    )));
                }
            }
            if let Some(path) = &user_modules {
                if path.is_empty() || !child_from_working_directory(path).is_dir() {
                    return Err(Error::new(format!(
                        "No such directory (--user-modules): '{path}'"
                    )));
                }
            }

            let project = load_project(&jucer_project_file)?;

            let opts = ConvertOptions {
                jucer_file_path: jucer_project_file,
                reprojucer_file_path: reprojucer_file,
                juce_modules_path: juce_modules.unwrap_or_default(),
                user_modules_path: user_modules.unwrap_or_default(),
                relocatable,
                jucer_version,
                output_dir: std::env::current_dir()?,
                license_based_default: LICENSE_BASED_DEFAULT,
            };

            let output = write_reprojucer_cmake_lists(&opts, &project)?;
            finish(&output)
        }
        Mode::Juce6 { jucer_project_file } => {
            let project = load_project(&jucer_project_file)?;
            let output = write_juce6_cmake_lists(&project);
            finish(&output)
        }
    }
}

fn load_project(path: &str) -> Result<Project, Error> {
    let file = child_from_working_directory(path);
    let source = std::fs::read_to_string(&file)
        .map_err(|_| Error::new(format!("'{path}' is not a valid Jucer project.")))?;
    Project::parse(&source)
        .map_err(|_| Error::new(format!("'{path}' is not a valid Jucer project.")))
}

/// Idempotence-checked write: identical content leaves the file (and its
/// mtime) alone.
fn finish(contents: &str) -> Result<(), Error> {
    let output_file = std::env::current_dir()?.join("CMakeLists.txt");
    match write_if_changed(&output_file, contents)? {
        WriteOutcome::UpToDate => {
            println!("{} is already up-to-date.", output_file.display());
        }
        WriteOutcome::Written => {
            println!("{} has been successfully generated.", output_file.display());
        }
    }
    Ok(())
}
