//! Format-version compatibility oracle.
//!
//! `.jucer` files carry a `jucerVersion` attribute naming the exporter
//! release that wrote them.  Field names, defaults, and whole setting
//! groups changed across releases, so the emission code asks this module
//! capability questions ("does this vintage list plugin formats as a
//! comma-list?") instead of comparing raw version strings inline.
//!
//! Two vintages exist: a plain three-part version tuple, and — for files
//! that predate version stamping — a historical snapshot marker handled by
//! [`crate::lineage`].  [`FormatVintage`] unifies both behind a single
//! [`supports`](FormatVintage::supports) query.

use crate::error::Error;
use crate::lineage::Marker;

// ═══════════════════════════════════════════════════════════════════════════════
//  Version
// ═══════════════════════════════════════════════════════════════════════════════

/// A three-part `major.minor.patch` format version, totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(pub u32, pub u32, pub u32);

impl Version {
    /// Sentinel for `"latest"`: newer than any released format version.
    pub const LATEST: Version = Version(1000, 0, 0);

    /// Parse a `jucerVersion` string.  `"latest"` maps to [`Version::LATEST`].
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s == "latest" {
            return Ok(Self::LATEST);
        }

        let invalid = || Error::new(format!("'{s}' is not a valid Jucer version."));

        let tokens: Vec<&str> = s.split('.').collect();
        if tokens.len() != 3 {
            return Err(invalid());
        }

        let part = |t: &str| t.parse::<u32>().map_err(|_| invalid());
        Ok(Self(part(tokens[0])?, part(tokens[1])?, part(tokens[2])?))
    }

    pub fn is_latest(self) -> bool {
        self == Self::LATEST
    }

    /// Does a descriptor written by this version exhibit `feature`?
    ///
    /// Monotonic in the version order: once a feature is introduced it stays
    /// supported, unless the table lists an explicit end version (used for
    /// settings that were later removed again).
    pub fn supports(self, feature: Feature) -> bool {
        FEATURE_RANGES
            .iter()
            .find(|(f, _, _)| *f == feature)
            .is_some_and(|&(_, since, until)| {
                self >= since && until.is_none_or(|u| self < u)
            })
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.0, self.1, self.2)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Features
// ═══════════════════════════════════════════════════════════════════════════════

/// Capabilities and behavior changes tied to the descriptor vintage.
///
/// Each variant names an observable difference in how the project format is
/// written out, not the release that introduced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// The `reportAppUsage` project setting exists (5.x only).
    AppUsageReporting,
    /// Splash-screen licensing settings exist.
    SplashScreen,
    /// Default bundle identifiers are derived from the company name.
    CompanyBundleIdentifier,
    /// C++11 is the implied default language standard.
    DefaultCxx11,
    /// C++14 is the implied default language standard.
    DefaultCxx14,
    /// Plugin formats are declared through the `pluginFormats` comma-list
    /// (and plugin characteristics through `pluginCharacteristicsValue`).
    PluginFormatsList,
    /// The Unity plugin format exists.
    UnityPlugin,
    /// VST2 is a legacy plugin format (`vstLegacyFolder` et al.).
    VstIsLegacy,
    /// Ships its own VST2 interface headers, so no VST2 SDK folder is
    /// needed for VST2 builds or hosting.
    BundledVst2Interface,
    /// `pluginVSTNumMidiInputs`/`pluginVSTNumMidiOutputs` settings exist.
    VstMidiChannelCounts,
    /// Hardened-runtime options are labeled with their category prefix.
    CategorisedHardenedRuntimeOptions,
    /// Default labels read `"Default"` rather than `"(Default)"` or
    /// `"Use Default"`.
    ModernDefaultLabels,
    /// `wholeProgramOptimisation` maps onto link-time optimisation.
    WholeProgramOptimisationAsLto,
    /// "macOS" naming: exporter display name and `MACOS_*` keywords.
    MacOsNaming,
    /// Standalone plugin builds and inter-app audio exist.
    StandalonePlugin,
    /// Code::Blocks configurations have an implied default architecture.
    CodeBlocksDefaultArchitecture,
    /// The VST category keyword is `PLUGIN_VST_CATEGORY` (previously
    /// `VST_CATEGORY`).
    VstCategoryKeyword,
    /// Xcode frameworks keyword is `EXTRA_SYSTEM_FRAMEWORKS` (previously
    /// `EXTRA_FRAMEWORKS`).
    SystemFrameworksKeyword,
}

/// `(feature, introduced, removed)` — ordered, first match wins.
///
/// `removed` is exclusive; `None` means the feature was never superseded.
const FEATURE_RANGES: &[(Feature, Version, Option<Version>)] = &[
    (Feature::AppUsageReporting, Version(5, 0, 0), Some(Version(6, 0, 0))),
    (Feature::SplashScreen, Version(5, 0, 0), None),
    (Feature::CompanyBundleIdentifier, Version(5, 4, 0), None),
    (Feature::DefaultCxx11, Version(5, 0, 3), None),
    (Feature::DefaultCxx14, Version(5, 2, 1), None),
    (Feature::PluginFormatsList, Version(5, 3, 1), None),
    (Feature::UnityPlugin, Version(5, 3, 2), None),
    (Feature::VstIsLegacy, Version(5, 3, 3), None),
    (Feature::BundledVst2Interface, Version(4, 2, 4), None),
    (Feature::VstMidiChannelCounts, Version(5, 4, 2), None),
    (Feature::CategorisedHardenedRuntimeOptions, Version(5, 4, 4), None),
    (Feature::ModernDefaultLabels, Version(5, 2, 1), None),
    (Feature::WholeProgramOptimisationAsLto, Version(5, 2, 0), None),
    (Feature::MacOsNaming, Version(6, 0, 2), None),
    (Feature::StandalonePlugin, Version(5, 0, 0), None),
    (Feature::CodeBlocksDefaultArchitecture, Version(5, 0, 0), Some(Version(5, 2, 1))),
    (Feature::VstCategoryKeyword, Version(5, 3, 1), None),
    (Feature::SystemFrameworksKeyword, Version(5, 3, 3), None),
];

// ═══════════════════════════════════════════════════════════════════════════════
//  FormatVintage — version tuple or historical snapshot
// ═══════════════════════════════════════════════════════════════════════════════

/// How the descriptor's format vintage was specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVintage {
    /// A plain `major.minor.patch` version (or the `latest` sentinel).
    Version(Version),
    /// A historical snapshot marker for pre-versioning descriptors.
    Snapshot(Marker),
}

impl FormatVintage {
    /// Parse a version string or snapshot marker.
    ///
    /// `"latest"` and `x.y.z` strings become [`FormatVintage::Version`]; a
    /// 7-digit hex identifier becomes [`FormatVintage::Snapshot`].  Anything
    /// else is a validation error.  An unrecognized (but well-formed)
    /// snapshot marker is *not* an error; capability queries on it fall back
    /// to the default snapshot deterministically.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s == "latest" || s.contains('.') {
            return Version::parse(s).map(FormatVintage::Version);
        }
        Marker::parse(s)
            .map(FormatVintage::Snapshot)
            .map_err(|_| Error::new(format!("'{s}' is not a valid Jucer version.")))
    }

    pub fn supports(self, feature: Feature) -> bool {
        match self {
            FormatVintage::Version(v) => v.supports(feature),
            FormatVintage::Snapshot(m) => m.supports(feature),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_plain_version() {
        assert_eq!(Version::parse("5.4.3").unwrap(), Version(5, 4, 3));
    }

    #[test]
    fn parse_latest() {
        let v = Version::parse("latest").unwrap();
        assert!(v.is_latest());
        assert!(v > Version(6, 1, 6));
    }

    #[test]
    fn parse_rejects_bad_strings() {
        for s in ["", "5.4", "5.4.3.2", "5.x.3", "five", "5..3"] {
            assert!(Version::parse(s).is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Version(5, 3, 2) < Version(5, 3, 3));
        assert!(Version(5, 3, 2) < Version(5, 4, 0));
        assert!(Version(5, 10, 0) > Version(5, 9, 9));
    }

    #[test]
    fn feature_thresholds() {
        assert!(!Version(5, 3, 0).supports(Feature::PluginFormatsList));
        assert!(Version(5, 3, 1).supports(Feature::PluginFormatsList));
        assert!(!Version(5, 3, 2).supports(Feature::VstIsLegacy));
        assert!(Version(5, 3, 3).supports(Feature::VstIsLegacy));
        assert!(Version::LATEST.supports(Feature::MacOsNaming));
    }

    #[test]
    fn superseded_features_have_an_end() {
        assert!(!Version(4, 3, 1).supports(Feature::AppUsageReporting));
        assert!(Version(5, 0, 0).supports(Feature::AppUsageReporting));
        assert!(Version(5, 4, 7).supports(Feature::AppUsageReporting));
        assert!(!Version(6, 0, 0).supports(Feature::AppUsageReporting));
        assert!(!Version::LATEST.supports(Feature::AppUsageReporting));
    }

    #[test]
    fn vintage_parse_dispatch() {
        assert!(matches!(
            FormatVintage::parse("5.4.3").unwrap(),
            FormatVintage::Version(_)
        ));
        assert!(matches!(
            FormatVintage::parse("latest").unwrap(),
            FormatVintage::Version(v) if v.is_latest()
        ));
        assert!(matches!(
            FormatVintage::parse("75cd666").unwrap(),
            FormatVintage::Snapshot(_)
        ));
        assert!(FormatVintage::parse("not-a-version").is_err());
        assert!(FormatVintage::parse("75cd66").is_err());
    }

    proptest! {
        /// For features with no end version, `supports` is monotonic: false
        /// strictly below the threshold, true at and above it.
        #[test]
        fn supports_is_monotonic(major in 0u32..12, minor in 0u32..8, patch in 0u32..8) {
            let v = Version(major, minor, patch);
            for &(feature, since, until) in FEATURE_RANGES {
                if until.is_none() {
                    prop_assert_eq!(v.supports(feature), v >= since);
                }
            }
        }
    }
}
