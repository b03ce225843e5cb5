pub mod convert;
pub mod error;
pub mod juce6;
pub mod lineage;
pub mod paths;
pub mod project;
pub mod settings;
pub mod transform;
pub mod version;
pub mod writer;

pub use convert::{ConvertOptions, write_reprojucer_cmake_lists};
pub use error::Error;
pub use project::Project;
pub use version::{Feature, FormatVintage, Version};
