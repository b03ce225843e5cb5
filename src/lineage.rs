//! Historical snapshot oracle.
//!
//! Descriptors written before format versions were stamped into the file
//! are identified by the development snapshot that produced them: a 7-digit
//! hex marker.  This module keeps the explicit total order of recognized
//! snapshots (newest first) and answers the same capability questions as
//! [`crate::version`] for that era.
//!
//! Lookups never fail: a well-formed marker that is not in the table
//! deterministically falls back to [`DEFAULT_MARKER`], so the emission
//! engine keeps processing regardless of which snapshot it is handed.

use crate::error::Error;
use crate::version::Feature;

// ═══════════════════════════════════════════════════════════════════════════════
//  Marker
// ═══════════════════════════════════════════════════════════════════════════════

/// A 7-hex-digit snapshot identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker(pub u32);

/// The snapshot assumed when a marker is not in [`SUPPORTED_SNAPSHOTS`].
pub const DEFAULT_MARKER: Marker = Marker(0x75cd666);

/// Oldest snapshot that ships its own VST2 interface headers
/// ("Use a bespoke VST2 interface").
const BUNDLED_VST2_INTERFACE_SINCE: u32 = 0x9f31d64;

impl Marker {
    /// Parse a marker from its textual form: exactly 7 lowercase hex digits.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let well_formed = s.len() == 7
            && s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if !well_formed {
            return Err(Error::new(format!("'{s}' is not a valid snapshot marker.")));
        }
        // 7 hex digits always fit in a u32.
        Ok(Self(u32::from_str_radix(s, 16).expect("7 hex digits")))
    }

    /// Whether this marker appears in the recognized snapshot order.
    pub fn is_recognized(self) -> bool {
        self.position().is_some()
    }

    /// Position in [`SUPPORTED_SNAPSHOTS`]: 0 is the newest snapshot.
    fn position(self) -> Option<usize> {
        SUPPORTED_SNAPSHOTS.iter().position(|&m| m == self.0)
    }

    /// Does a descriptor from this snapshot exhibit `feature`?
    ///
    /// Unrecognized markers answer as [`DEFAULT_MARKER`] — never an error.
    pub fn supports(self, feature: Feature) -> bool {
        let position = match self.position() {
            Some(position) => position,
            None => DEFAULT_MARKER.position().expect("default marker is recognized"),
        };

        match feature {
            Feature::BundledVst2Interface => {
                let since = SUPPORTED_SNAPSHOTS
                    .iter()
                    .position(|&m| m == BUNDLED_VST2_INTERFACE_SINCE)
                    .expect("threshold marker is recognized");
                position <= since
            }
            // Everything else postdates the snapshot era.
            _ => false,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:07x}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Snapshot order — newest first
// ═══════════════════════════════════════════════════════════════════════════════

/// Every recognized snapshot, newest first.
#[rustfmt::skip]
pub const SUPPORTED_SNAPSHOTS: &[u32] = &[
    0x75cd666, // Partially reverted fix for new VST3 SDK 3.6.7 by removing any depe...
    0x14d6096, // Added support for VST3 SDK 3.6.7
    0xf5dafc4, // Fixed a bug in an Objective-C drag and drop helper class
    0x95085c1, // Listed all modules under the ISC license in the README
    0xb09a236, // Fixed a leak of OnScreenKeyboard
    0xdc5e039, // Fixed multiple file drag and drop on OS X
    0x7778383, // Added code to only show the onscreen keyboard if Windows is in tab...
    0x6977128, // Fixed a crash in the AAX wrapper when no AAX meters are present
    0xfc9937d, // JUCE version 4.3.1
    0x03b0df1, // Re-saved all projects
    0xe0aff60, // Bump version number to 4.3.1
    0x284fc82, // Tidied up some Projucer code that was causing build errors in VS...
    0xc754f6c, // Fixed the SVG parser for an edge-case path string sequence, and ...
    0x859567f, // Fixed a compiler warning on iOS
    0x64f0027, // Added a workaround for a macOS Sierra font rendering issue which...
    0xa6d3c97, // Fixed a bug on OSX where images with SingleChannel PixelFormat w...
    0x4474d55, // Fixed an issue where VST2 would report wrong input layout for pl...
    0xd13be21, // Added support for enabling/disabling sidechains in AAX
    0xd16123a, // Added a new optional in/out parameter to AudioProcessor::Bus::is...
    0x4b507cd, // Fixed Xcode exporter macro escapes for '"'
    0xd0b6d6c, // Check all mouse sources when exiting modal loop
    0xce14b66, // Fixed a bug where a mouse enter event wouldn't be sent to the Co...
    0x06dde9d, // Removed unnecessary check in macOS/iOS URL session cancel
    0x3370ada, // Fixed a compiler warning on newest version of gcc
    0xb144923, // Removed multi-character constant which triggered warnings on som...
    0xa84c166, // Fixed an issue where an iOS background download task would not r...
    0x7e1279e, // Fixed an int sign conversion warning
    0x9b1ae84, // Fixed bug when maximum number of plug-in io channels is one
    0x96ea465, // Resaved all projects
    0x46e21fe, // Updated win32 Process::isForegroundProcess() method to use proce...
    0xd0b0644, // Fixed compiler error in AUv3_Wrapper
    0xd8ead14, // Removed a duplicate header file
    0x1baaddb, // Added code to properly escape non-ascii characters in URLs passe...
    0xa554d0e, // Added to the AudioProcessorValueTreeState documentation
    0xba512e9, // Renamed 'generic' parameter Category enum to something less generic
    0xda3f3a8, // Fixed bug creating dynamic libraries with the Linux Makefile and...
    0xf2b2fb2, // Fixed JUCE_VST3_CAN_REPLACE_VST2 behaviour
    0x7897331, // Added support for level meter parameter categories
    0x2a98306, // Fixed bug in OSX network code where Content-Type headers were no...
    0xfcd5a47, // Added a bit-twiddling helper method: findHighestSetBit()
    0x0ebd5bc, // Modified the repaint throttling to detect whether the app is a p...
    0x0d7a77d, // Improved AudioProcessorValueTreeState documentation
    0x83a4f74, // Added support saving/restoring plugin bus layouts in the audio h...
    0x101a59a, // Fixed bug updating MacOS system tray icon
    0xa6c4a02, // Avoided an unused variable warning in the OSX network code
    0x4b69d0f, // Fixed buffer size and sample rate changes in iOS background audio
    0xc52f147, // Improved a variable name
    0x7d4d853, // Fixed AAX SDK relative path bug on Windows
    0x4c1d4f0, // Added method TabbedComponent::moveTab()
    0x2ad22dc, // Added workaround to check the state of the on-screen keyboard on...
    0x7120d7d, // Fix for HTTPS POST requests with keep-alive failing on OS X vers...
    0x5849710, // Added iOS support for BLOCKS examples
    0x1e5865c, // Restored original iOS sample rate after querying all available s...
    0x25e72a7, // Fixed some issues with the Linux Code::Blocks exporter
    0xf918827, // Clarified some comments in the Logger class
    0x92f3a1e, // Miscellaneous fixes for some PVS static analyser warnings
    0xf3be41c, // Fixed a bug in the Windows FileChooser where two backslashes wou...
    0xd4b4780, // Fixed some spelling mistakes in comments
    0x7eb534a, // Added method ValueTree::getRoot()
    0xa15d79d, // Added new methods Rectangle::withRightX() and withBottomY()
    0x2c8b98b, // Added windows native code to show and hide the on-screen keyboar...
    0xf1baf9b, // Added VST hosting support for begin/endParameterChangeGesture, a...
    0x9e0370c, // Made sure the File::getNonexistentChildFile() method's putNumber...
    0xeb07aaf, // Added some TRANS macros to some internal OSX menu item strings
    0x5eeaf5a, // Added move semantics to AudioBuffer
    0xaae0b15, // Added begin/end iteration to HashMap
    0xb184ca9, // Removed an accidentally-committed method from String
    0xb90077c, // Cleaned up some warnings in the PNG code
    0x6f27a1d, // Typo fixes
    0xab0c519, // Workaround for an android-specific bug in String::formatted()
    0x158bc98, // Fixed an issue restoring VST3 GUI state
    0xa7ee1a7, // Added missing initialiser in Path::Iterator constructor
    0xaae6471, // Minor compile fix in the javascript parser for VS2013
    0xaf07915, // Fixed Linux message thread assertion in AudioProcessorValueTreeS...
    0x2d96e37, // Changed the default sidechain layout to stereo in the NoiseGate ...
    0xdd13702, // Added support for drag and drop of text on OSX, via DragAndDropC...
    0xb1d3069, // Added a new Projucer Xcode target option "Keep custom Xcode sche...
    0x7a02a83, // Make sure that the OSX SDK is new enough when compiling AUv3 tar...
    0x27c353c, // Fixed an issue when compiling with newer external png libraries
    0x32db13e, // CPP/C/CXX/LDFLAGS should be appended to JUCE_CPPFLAGS etc. in li...
    0xae3ee34, // Fixed an issue when including an external and newer version of zlib
    0xa6d3d19, // Fixed a few minor bugs in X11 windowing code
    0xf284620, // Whitespace cleanup
    0x3104616, // Added some copy/paste options for module paths to the Projucer's...
    0xa9b29ba, // Added support for lambdas in var::NativeFunction
    0x901913a, // Added new method FlexItem::withAlignSelf()
    0xaac01b2, // Fixed a couple of spelling mistakes
    0xd90ca6c, // Fixed a typo in the OpenGL demo code
    0xddaaaa6, // Removed 'const' from the Projucer's component editor's generated...
    0xf85bbb2, // Fixed an issue where resizing a VST2 plug-in on a HiDPI monitor ...
    0x53ae78f, // Fix for javascript parseInt of strings that start with a zero bu...
    0xcab4569, // Fixed a typo which lead the MSVC exporter to incorrectly recogni...
    0x688110f, // Fixed a littlefoot interpreter bug involving 32-bit integer lite...
    0x8638630, // Fixed unused parameter error in BluetoothMIDISelector overlay
    0x4b881b0, // Added an exit callback to BluetoothMidiDevicePairingDialogue::op...
    0x4d02823, // BLOCKS API: Added a few littlefoot function definitions to the l...
    0x1354998, // Added C++11 functions to Doxygen
    0x21aad5e, // Fixed IO channels when selecting <<none>> as OS X audio device
    0x8567338, // Changed the colour of module icons in the Projucer based on thei...
    0x2e84129, // Updated the juce_audio_basics, juce_audio_devices, juce_blocks_b...
    0xe91d0f9, // Fixed a bug where the URL's DownloadTask would not indicate an e...
    0xfdeea46, // Fixed a bug where a downloaded file may have been incomplete whe...
    0xe31a0b1, // Resaved all projects
    0x8869fce, // Fixed minor documentation typo in a recent PropertiesFile commit
    0x806d99d, // Added an option to have a properties file suffix be appended to ...
    0x05888a0, // BLOCKS API: Added some functionality (not yet supported in publi...
    0xe75128a, // Added a second createMemoryMappedReader method to AudioFormat an...
    0x1c4b687, // Fixed a bug where the high resolution timer could hang when stop...
    0x3fa62bc, // Fixed some misnamed Doxygen parameters
    0x9f1254a, // Removed JucePlugin_{Max,Min}NumInputChannels from the VST wrapper
    0x2f06fdf, // Updated the standalone BLOCKS SDK build
    0x38a47d4, // Added a call to getToggleState() in ShapeButton::paintButton() t...
    0xffc687a, // Added TargetExt vcxproj property to MSVC
    0x9a130f2, // Set avoidReallocating argument of AudioBuffer::makeCopyOf() to t...
    0x2952b52, // Renamed instances of FileHelpers to MacFileHelpers in iOS implem...
    0xfb08261, // Fixed VS2013 warning in File::NaturalFileComparator struct
    0x3516e45, // Fixed a typo in littlefoot function argument passing
    0x8cd578b, // Added the ability to set a custom BinaryData namespace in the Pr...
    0x4d48dfe, // Removed a defunct comment
    0xe8a80ef, // Added Bitwig Studio to PluginHostType
    0xa0ed11e, // Made File::NaturalFileComparator::compareElements() method const
    0xcd752ed, // MidiFile::writeTo() method now returns false if unsuccessful
    0xf6727f2, // Added label parameter to all AudioParameter constructors
    0x36f561a, // Changed FileHelpers namespace to MacFileHelpers in juce_mac_File...
    0xe93eee0, // Added NaturalFileComparator struct to File. Reverted File::compa...
    0xc5d3c26, // Added workaround to fix a false re-save warning in the Projucer ...
    0x1ecc686, // Changed order of parameters in FlexItem::Margin constructor to m...
    0xbd9697b, // Fixed a compiler error on older gcc versions
    0xa816a44, // Disabled Ableton Live's plug-in auto-suspend if the plug-in repo...
    0x8e768fc, // Added method littlefoot::Runner::isProgramValid()
    0xd6fc589, // Reverted File::compareFilenames() method to not compare filename...
    0xfa7768a, // Fixed Projucer live-build error with LittleFoot compiler
    0xc545b58, // Added another constructor to FlexItem::Margin
    0x17600a2, // Added copy constructor and copy assignment operator to MidiFile
    0x8e7ed3a, // Fixed MacOS 10.12 deprecations
    0x18c896f, // Changed Line::getPointAlongLineProportionally method to work pro...
    0x910cab7, // Added a WaveLab workaround by adding tmp buffers when WaveLab li...
    0xb86e133, // Fixed a bug where the AU/AUv3 wrapper would create a spurious in...
    0xa3ef455, // Ignored deprecation warnings in the OS X VST3 SDK
    0x0f01433, // Fixed an uninitialised variable in OnlineUnlockStatus
    0x0ee2398, // Fixed compile error in recent commit on VS2015
    0x92c219f, // OSC: fixed bug where, if one OSCBundle contains multiple OSCBund...
    0x3945f1d, // OSC: added unit tests for round-trip correctness (receiver to se...
    0x8313ba7, // Added a workaround for DSP Quattro
    0xd91b07c, // Changed depcrecated use of old dragOperationStarted/Ended to be ...
    0xb5fb095, // Fixed a few VS2008 build errors
    0x267cfb8, // Fixed scoping of a conditional
    0x2ec8fb4, // Fixed error restoring VST3 state in FL Studio
    0xacf554a, // Fixed erroneous assertion when saving VST3 states
    0x40dfba1, // MPESynthesiser: Added interface to set tracking mode for pressur...
    0x80778a8, // Fixed a couple of compiler warnings in the LittleFoot runner class
    0x7bd5c05, // Fixed touch event bug on Windows where touches weren't being rec...
    0x0df1e0b, // Added sourceDetails parameter to dragOperationStarted and dragOp...
    0x2f00cb1, // Tidied up ListenerList tests
    0x1225653, // Fixed bug when setting AudioProcessorValueTreeState values befor...
    0x6340e54, // Fixed a bug where StreamingSocket::isLocal would only return tru...
    0x1e2cb6f, // Changed documentation for OutputStream::setNewLineString() to re...
    0xb517884, // Fixed MSCV2015 compiler warning in VST3 wrapper
    0xc43ca07, // Fixed a typo in the BLOCKS documentation
    0x284bc70, // Added a workaround for WaveLab invisible editor bug
    0x2f5b8e5, // Changed File::compareFilenames() method to use String::compareNa...
    0x27dd794, // Added missing const qualifier to AudioDeviceManager::getAudioDev...
    0xda5805f, // Fixed a race condition in iOS DownloadTask implementation
    0x119640f, // Fixed positioning of VST3 windows in Reaper
    0xc0987f2, // Fixed a false positive in ASAN in a recent bug fix commit to OSX...
    0x57fdbd4, // Fixed a potential access after free bug when creating typefaces ...
    0x60b5f72, // Fixed a bug in Windows where clicking outside an application aft...
    0x7467195, // Minor tidying-up
    0x436f047, // Fixed a bug where the maximum number of channels in VST2 was lim...
    0x990b7b3, // Fix for openGL components when global scale factors are applied
    0x8154ccc, // Added a fix for a potential wrap-around bug in BufferingAudioSource
    0x61fd2a3, // Fixed a MSVC 2015 warning in mp3 audio decoder
    0x00c0671, // Added sub-menu support to ComboBoxes
    0x6641b9d, // Updated BlocksMonitor example to display correct topology with c...
    0x8a93ddc, // Fixed a typo in recent studio one parameter workaround
    0xee373af, // Added AlertWindow LookAndFeel methods to offer more control on b...
    0x388251b, // Made message queue throttling more precise by using Time::getMil...
    0xeba80c3, // Tweaked buffering audio source so it can more easily be used in ...
    0xe49022b, // Added JUCE_USE_STUDIO_ONE_COMPATIBLE_PARAMETERS option to workar...
    0x9a7ee9f, // Added support for iOS custom delegates - use at your own risk
    0xf93b174, // Fixed error in variable name
    0x37f3481, // Potentially fixed an issue with the message thread being flooded...
    0xcff1793, // Exposed some functions when building JUCE as a DLL
    0xcaa65e8, // Add new URL::downloadToFile method
    0xfd86a73, // Fixed DLL compilation of juce_tracktion_marketplace
    0xf5d3278, // Projucer: avoid failing assertions from File
    0x1349f65, // Projucer: the DiagnosticReceiver interface is an implementation ...
    0x63a71ff, // Fixed a bug where the VST3 plug-in wrapper would not respect the...
    0x1c2d147, // Added LookAndFeel getAlertWindowButtonWidth method to override t...
    0xee4fe9e, // Updated BlocksSynth example to draw waveshapes on the Lightpad...
    0xe384fa7, // Added Timer to MainComponent to stop touches from triggering m...
    0x020f858, // Doxygen updated for BlocksSynth tutorial and LittleFoot Langua...
    0x1cc8a95, // Class comment added to top of WaveshapeProgram.h
    0x24364ec, // auto-generated comment removed from top of WaveshapeProgram.h
    0x15cab58, // Xcode strict warnings
    0x8c55f73, // MSVC warnings
    0xb2d0328, // Code cleanup & WaveshapeProgram documentation
    0xe5d6770, // Working LittleFoot program for waveshape drawing
    0x91e8d27, // LED drawing using LittleFoot
    0x39344e0, // WaveshapeProgram.h added, LittleFoot program started
    0x2ae5d22, // Resaved all projects
    0xb82773b, // Fixed older MacOS compatibility for ListenerList tests
    0x6fb0aa4, // Added a StringArray constructor to var
    0xd438fa5, // Fixed issues with AudioProcessorValueTreeState parameter synchro...
    0x5a2ebef, // Fixed a bug where the bundle exit function would be called befor...
    0xc3ea4f8, // Fixed a warning in MSVC 2013 in JUCE's URL class
    0x3f72a03, // Fixed whitespace in last commit
    0xc2caad4, // Added missing CoInitialize when using ASIO audio device
    0x8499e29, // Fixed a VS2013 warning in juce_URL
    0x3b630f3, // Added new WebInputStream class for more fine-grained control on ...
    0x76fa906, // Added a LittleFoot section to the BLOCKS SDK documentation sidebar
    0xec2fd97, // Changed BLOCKS Doxygen stylesheet to better match developer.roli...
    0x3fb4edb, // BLOCKS SDK: Fixed the order of south and west DNA ports in the t...
    0x58bd2b1, // Added a few extra FlexItem convenience methods
    0x63eabb4, // Fixed a bug where identical initialiser lines would be removed
    0xaa5d1d1, // Tweaked CoreAudio to allow buffer sizes of 2048
    0xbfd5605, // Added comments to specify what File::create vs. FileOutputStream...
    0x826fdfe, // Added callback to get number of keywaves of an on-screen seaboar...
    0xde84462, // BLOCKS example apps: some cleanup, enabled DUMP_TOPOLOGY flag
    0x7bb0fe4, // Update copyright and make docstrings more compatible with Doxygen
    0xa85f026, // BLOCKS documentation improvements
    0x0464728, // Fixed bug when maximum number of plug-in io channels is one
    0xa08cedb, // Fix for HTTPS POST requests with keep-alive failing on OS X vers...
    0x1066a6d, // Added C++11 functions to Doxygen
    0xbb56cb2, // Fixed an uninitialised variable in OnlineUnlockStatus
    0x169b5ed, // Update copyright and improve BLOCKS documentation
    0xf88013e, // JUCE version 4.3.0
    0xefd4bb6, // Re-saved all projects
    0x363ceb0, // Bump version number to 4.3.0
    0xb5ef6d7, // Whitespace clean-up
    0x6f6d0af, // Fixed a bug where we didn't search the correct directory for the...
    0xf3c313b, // Added label to BlocksSynth and BlocksDrawing example windows
    0x73764c2, // Fixed beforeDate in standalone BLOCKS SDK MacOS example
    0x980ece4, // Projucer: add anchor #indie to the link target for the subscribe...
    0x76b3689, // Added BLOCKS module
    0x01380b1, // Fixed a typo in the SSE 4.1/4.2 detection logic
    0x8d02f61, // Projucer: add free-to-use license for the live-build engine
    0x4aa0f31, // Allow to specify the stack size for each thread in a thread pool...
    0x439ecc3, // Projucer: workaround broken "Open Recent" submenu
    0x701fd8a, // Added a workaround for a strange bug with monospace fonts in OS ...
    0x6711016, // Fixed a bug that could make surround plug-ins fail AU validation...
    0x7cdcb19, // Added a convenient function to get all channel sets with a parti...
    0xf415b09, // Enabled cookies in the juce curl backend to align the behaviour ...
    0x15bed81, // Fixed a flex box bug where the first item in a list of too large...
    0xae13dd6, // Added an option to escape round brackets in URLs
    0x75ea6db, // Renamed bounds member variable in Component to "boundsRelativeTo...
    0x5d02569, // Added a method to ThreadPool to query the number of threads assi...
    0x56c5c8e, // Fixed an issue in CachedValue where setValue would not actually ...
    0xb36b64a, // Projucer: simple pop-up menu to copy diagnostic messages to clip...
    0x26e0aa7, // Fixed a crash on quit when windows are open in the Juce Demo's w...
    0xe435325, // Fix typo and increase maximum size of the "Member initialisers" ...
    0x1845437, // Only moan about all-lowercase AU manufacturer codes
    0xc4d36d1, // Whitespace clean-up
    0x76a9b7d, // Projucer: link to privacy policy in EULA and re-save jucer project
    0x23a248f, // Added method VSTPluginFormat::getPluginInstanceFromVstEffectInte...
    0xf54b7fb, // Moved the DiscRecording dependency in the module descriptions fr...
    0xeac52c9, // Fixed a bug in the projucer that would create incorrect post bui...
    0x288e56d, // Fixed a bug in the Projucer that would incorrectly mark relative...
    0x5e0efc6, // Projucer: extend interface DiagnosticMessage::handleRecoverableE...
    0xa931b47, // Added a non-sense if statement to BufferingAudioSource to surpre...
    0x3e7b599, // Moved audio CD burner/reader to juce_audio_utils
    0xbd3166a, // Updated the URL of the "Forgot Password" button in the Projucer
    0x348dc1f, // Fixed a bug where the Projucer would delete rsrc files in your ~...
    0xc587d4b, // Minor code style tidy-ups
    0x7d07f51, // Added missing juce_osc dependency on juce_events
    0xa5e3b7a, // Added check and warning when entering only lowercase AU plugin i...
    0x84a16f6, // Fixed Projucer to check for the correct file when looking for th...
    0x6c52bf5, // Changed the way windows modifiers are probed in an attempt to fi...
    0x255dc1d, // Fixed documentation typo
    0x0bcc53c, // Removed juce_audio_formats header from juce_audio_devices
    0xff52d76, // Fixed a bug in DirectoryIterator where the result would be incon...
    0xa347689, // Moved simple sound player to audio_utils module
    0x1fcae36, // Changed flac writer to respect the current stream position when ...
    0x29bed6c, // Fixed warnings in cryptographic unit test code
    0xc6a75d0, // Changed the way windows modifiers are probed in an attempt to fi...
    0x2a37ba0, // Added gradle-wrapper when saving projects so that it is now poss...
    0x676ad43, // Added more compare operators to Identifier class
    0x9e4741f, // Fixed an AAX bug where the sidechain buffer was not cleared when...
    0x14957e7, // Avoided some FLAC debug output being printed if your app defines...
    0x62ac568, // Made sure that colours are updated when the look and feel of a T...
    0x57742a5, // Fixed warning of MSVC compilers in latest commit
    0x852fe34, // Added support for encrypting/decrypting blocks of data with Blow...
    0xcdb7285, // Fixed AAX post build script to consider SDK paths containing whi...
    0x285635c, // Added notch and all pass filters
    0x9d08f8f, // Fixed a documentation typo.
    0x4a6473a, // Removed the isLocked() method from ReadWriteLock
    0xf301ed7, // Added an isLocked() method to ReadWriteLock that checks whether ...
    0xe03e41b, // Projucer: hard shutdown of the compiler process in release build...
    0xbacf194, // Small tweak to the bluetooth iOS menu to make it as wide as poss...
    0x773e708, // Removed unecessary path seperators in MSVC post-build scripts
    0x3bd7ef4, // Projucer: menu adjustments
    0x0ed9003, // Fixed bundle ref initialisation of statically linked VSTs on iOS
    0x13c501d, // Removed unnecessary memory allocation when assigning a big integ...
    0xf374eb6, // Fixed SortedSet::remove() to return the removed element
    0xc1e2e6a, // Fixed size of bluetooth midi pairing dialogue to accommodate mor...
    0x8f1d37a, // Fix addAllModulesInFolder to scan only 2 subfolder levels
    0x46b38d7, // Removed code which is not used anymore
    0xedd828a, // Fix memory leak in BluetoothMidiSelectorOverlay
    0x13c4946, // Changed lowResamplingQuality to kCGInterpolationNone on OS X and...
    0x6c39897, // Added 'inclusive' and 'exclusive' to documentation for Random::n...
    0x8263d70, // Continue drawing if a negative dashLen was hit
    0x7686db6, // Fixed a typo in my latest commit
    0x59a47d1, // Fixed possible dead-lock
    0xe8cdc65, // Fixed Array::remove (ElementType*) so that if given an invalid p...
    0xa440c16, // Added Graphics::ResamplingQuality::noResampling
    0x0121a02, // Added optional parameter to restore audio settings state in Audi...
    0x321ca8c, // Fixed AUv3_Wrapper include path
    0xb24aadc, // Added ColourIds to allow alternate colouring of TreeViewItems
    0xd892109, // Fixed a warning in recent commit
    0x40994fc, // Added checks to make sure that the current interface orientation...
    0x848073d, // Always remove silence flag in AU render callback
    0x27be047, // Allow disabling the main bus in VST3 plug-ins with the revised m...
    0x225e8da, // Added waitForNextAudioBlockReady method to BufferingAudioSource
    0x2104c50, // Added const qualifier to MidiEventHolder argument of MidiMessage...
    0x2785059, // Restored non-flushing behaviour of FileOutputStream
    0x848b400, // Avoided warning in release builds in AudioUnit hosting code
    0xbf85f4c, // Cache the result of isRunningInAppExtensionSandbox
    0x495e2bf, // Fixed file flushing for FileOutputStream on Windows
    0x728bf27, // Projucer: support recoverable error warnings for live-builds
    0xd19ba05, // Added support for saving audio/midi setting in standalone wrappers
    0x80ff164, // Added preprocessor macro JucePlugin_VSTChunkStructureVersion to ...
    0x83d0854, // Added a microphone permission option to the iOS exporter
    0xfc1214e, // Fixed ambiguous sign in AudioThumbnail implementation
    0x3fb55ff, // Fixed a compiler error which occured in gcc based compilers
    0x71de185, // Fixed typo in linux-only Projucer code
    0xc98f71d, // Fix Process::setDockIconVisible() may not turn the process into ...
    0x21c6fc7, // Added an option to enable/disable pre-buffering in BufferingAudi...
    0x4b96ffb, // Projucer: restrict menu item "Launch Application" to GUIApplicat...
    0xa0350e4, // Projucer: add feature download & install live-build engine (incl...
    0x42b8156, // Fixed crashes in old 32-bit Carbon plugin editor windows when ru...
    0xe14895e, // Added macOS version 12 to SystemStats
    0xaff5ea5, // Replaced two instances of src[1] with src[0] in the render4Pixel...
    0x6f4571b, // Tweaked VST wrapper so that MIDI effect plug-ins work even if th...
    0xef50b8d, // Fixed trying to write to invalid input buffer when AUs connected...
    0x679ef3f, // Fixed a bug where VST plug-in editors using OpenGL would not wor...
    0x4f06ff9, // Third time lucky: hopefully fixed a white-noise issue when pulli...
    0xc14eb04, // Fixed automation bug when switching between presets in VST and VST3
    0x5a365ed, // Removed assertion which gets hit by too many VST plug-ins
    0x8835a24, // Fixed another typo and removed unecessary for loop
    0x1be76c1, // Added more methods to IIRCoefficients to generate coeffecients f...
    0xcbbf76b, // Made sure buffers are prepared before clearing them in the AU wr...
    0xb0457a9, // Fixed a typo in the VST wrapper
    0x1b217d1, // Zero out buffers if pulling audio returns an error in the AU wra...
    0x4fa0516, // Revised multibus API and added support for multibus hosting
    0x680d758, // JUCE version 4.2.4
    0xebf19aa, // Re-save all projects
    0x4eb8933, // Bump version number to 4.2.4
    0x05b15c4, // If the jucer file does not specify a macOS/iOS deployment target...
    0x0862167, // Fixed a compiler warning for MIDI effect plug-ins
    0x0c87af8, // Fixed Linux compile error in Projucer
    0xacefbcd, // Fixed a typo that was preventing some config settings showing up...
    0x9fa0d49, // Added an option JUCE_ALLOW_STATIC_NULL_VARIABLES that can be use...
    0xd03755c, // Fixed a potential memory leak
    0x48ac634, // Fixed the MSVC exporter to combine multiple internal post-build ...
    0x231a6e4, // Fix some warnings in MSVC
    0x8ec9443, // Projucer various fixes
    0xe35aba3, // Added a standard iterator to NamedValueSet
    0x2fd331f, // Modified compile-time error to warn the user that juce_audio_dev...
    0xcbb8536, // Fixed potential crash in mac's legacy WebInputStream implementation
    0xceefc5b, // Avoided a dead-lock in a recent commit to WebInputStream on mac
    0x6d56e48, // Add support for retina mouse cursors on OS X
    0x5f748bb, // Added a method to get the internal viewport of a PropertyPanel
    0xc67c1d4, // Added missing JUCE_API keywords
    0xff40b46, // Added support for automatically creating AAX plugin bundles on W...
    0xf37787d, // Fixed incorrect comparison in right shift operator of BigInteger
    0xb94a68c, // Array: added new method removeIf to remove objects based on an a...
    0xcf8d655, // Fixed a possible race condition in mac's implementation of WebIn...
    0x9177a94, // Added a check in Button to detect self-deletion as a side-effect...
    0x1f2eaeb, // Added support for accessing the properties of a javascript objec...
    0x913a868, // Fixed a crash on exit error in the plug-in host on windows/linux
    0x16525c0, // Fixed some typos.
    0xd73f776, // Fixed a bug where FlexBox would still be compiled on older versi...
    0x004f829, // Reverted #bea45f84 - this only fixed SVG positioning bugs for li...
    0x9276540, // Fix to avoid negative width assertion when drawing fitted text i...
    0x56423ae, // Changed Windows windowing so that the resizeStart() and resizeEn...
    0xed0c032, // Added a styleChanged flag to enable setText() to take effect aft...
    0x29320a0, // Changed maxSensibleMidiFileSize in MidiFile from 2mb to 200mb to...
    0xbea45f8, // Fixed SVG child-transform rendering bug.
    0xe74849c, // Fixed a missing call to lf.preparePopupMenuWindow in PopupMenu
    0x151e3f7, // Added a LookAndFeel method preparePopupMenuWindow() to allow the...
    0x132c1d6, // Removed "C" after all mono channel names
    0x1a28e7a, // Fixed modulo zero bug in VST bus arrangement
    0x821dea8, // Fixed implicit conversion warnings in BigInteger
    0xc94be5d, // Fixed an issue where repaints could be dropped when the host is ...
    0xf257536, // Fixed #100: If base sdk version is newer than 10.12 then no need...
    0x16e6c6f, // Slider and NormalisableRange changed to use standard library mat...
    0xc10b042, // Fixed a potential leak in ScopedPointer
    0x70530a9, // Added beginParameterChange() and endParameterChange() methods to...
    0x19d654d, // Added symmetric skew option to NormalisableRange class. Added op...
    0x5c46c65, // Changed the documentation for AudioProcessorValueTreeState::Slid...
    0xf0555e6, // Fixed JucePlugin_IsSynth compiler warning.
    0x7be711e, // Added some functions writeLittleEndianBitsInBuffer() and readLit...
    0xa9d8434, // Resaved all projects
    0xc0c912a, // Modified BigInteger so that small (128-bit) values don't require...
    0x28bb28a, // Fixed a trailing "\" bug in the VS intermediates path
    0xc23e95d, // Defined HAVE_LROUND for non-MSVC compilers when building FLAC libs
    0x979d3b6, // Fixed crash on internal changes within aggregate audio devices o...
    0x17dee9a, // Restore depecated VST opcodes for CarbonWrapperComponents
    0xddb8796, // Fixed VSTs erroneously wanting midi input
    0x1ddd394, // Restore missing VST opcode.
    0xd873d24, // Fix some Xcode warnings in the VST and VST3 wrappers.
    0xcb6b4b7, // Remove VST editor idle
    0x881dfce, // Fix deadlock in handleRouteChange for iOS audio.
    0x6ba384f, // Fixed some missing definitions in the VST hosting for Carbon com...
    0x7fad254, // Added output level metering to AudioDeviceManager
    0x1942e3d, // Added begin/end iterator methods for ValueTree, for handy range-...
    0xea76779, // modified sliderValueChanged() to notify host only on mouse clicks
    0x47c48b2, // Changed Projucer LoginForm "Remember login" button to tick box
    0x9f31d64, // Use a bespoke VST2 interface
    0x1e9af22, // modified valueChanged() to notify host only on mouse clicks.
    0x08b2116, // Make the mousemove behaviour of OS X plug-ins the same as their ...
    0x48db4fa, // Fix for the copy constructor of DrawableRectangle
    0x55194a0, // On Windows, suppressed the behaviour that pressing the ALT key t...
    0xa46191a, // Native OSX menu bar: avoided some duplicated menu bar flashes wh...
    0xb1ab450, // Avoided a warning in some OSX network code
    0xc353ac3, // Avoided a race condition when cancelling HTTP stream on OSX
    0xc7db4bb, // Avoided a compiler warning on OS X due to unused private fields ...
    0x773c963, // Whitespace.
    0xe2dc460, // Made the Desktop class clear any pending animations before shutt...
    0x6547452, // Fixed a leak of bubbleMessage object in juce demo
    0x91f2453, // Fixed a bug in UndoManager when using undoCurrentTransactionOnly
    0x2417676, // Increased buffer size for names read by the VST host, and change...
    0x3f83eed, // Minor tidying up
    0xe9832ff, // Added a symmetric skew option to Slider
    0x79dd695, // added ScopedLock to iOSAudioIODevice::handleRouteChange method t...
    0x8e10f16, // Dialog window to ask whether to keep current project or re-load ...
    0x1470928, // Use effGetProductString when getting the name of a VST-2 plugin
    0x82224d7, // Avoided a couple of warnings in iOS builds with older SDKs
    0x999f484, // Stopped the ColourSelector sending a change message from its con...
    0x3104cbe, // Added an optional notification argument to ColourSelector::setCu...
    0xcbdf707, // Windows touch with CallOutBox bug fix
    0xc7b3472, // Partially undo commits #99186e5 and #89d938d and use less-intrus...
    0x8f7d9f7, // Workaround to avoid an assertion when using File::invokedExecuta...
    0x59cc979, // Deallocate all nodes in the graph before calling JUCEApplication...
    0x8994f37, // Added some FlexBox layout classes, and a demo page for this in t...
    0xaa1acb3, // Avoid unnecessary calls to AudioUnitInitialize.
    0x0159102, // Fix ResamplingQuality documentation
    0xb936786, // Remove the recently added shouldReleaseFocusOnMainMenuBarAccess ...
    0xec9c033, // Add exclusive flag to MemoryMappedFile
    0x89d938d, // Make sure to not remove a native component twice
    0x99186e5, // Call removeFromDesktop when an external host tries to remove a j...
    0x1631dac, // whitespace
    0x9062ad9, // Windows 10 update touch events bug fix
    0xbc17cb9, // Changed UndoManager so that if a transaction is aborted with und...
    0xaa15039, // Automatically connect midi input devices on mobile in standalone...
    0x5ba1723, // Removed the juce_tracktion_marketplace module's dependency on ju...
    0x3d1b2d6, // Added a cast to some VST code to avoid a C++14 warning
    0x1a1897b, // Made the OSX HTTP stream respond to the return value of the open...
    0x675f594, // fixed silly typo
    0xf0a00bf, // AlertWindow::show() only sets window to always on top if there a...
    0x49b9619, // Added a cast to avoid a warning in Array
    0xbc77b00, // MIDI network session enabled for iOS simulator
    0x17a07a0, // Add a flag to release the focus of a component when the user acc...
    0xb67b1dd, // Add an issue template for GitHub.
    0x7a9c22e, // AlertWindow::show() method sets AlertWindow to be always on top ...
    0xa744cd3, // Added a bool handler for JUCE_LIVE_CONSTANT
    0xc217164, // Add low quality mode for juce CameraDevice
    0x26b6f01, // Replace all "zeros" with "nullptr" in code documentation when re...
    0xbf582f6, // Fix errors and warnings on mingw-w64
    0x1e41898, // Fix a memory leak in linux ALSA code for MidiInput/MidiOutput
    0x1053dc5, // Allow having zero programs in VST
    0x4cf3c02, // Send parameter changes to processor when received via the EditCo...
    0x3d1dc4a, // Fix bug where previously applied context transformation was not ...
    0xe6ad9b5, // Add option to not re-allocate memory when making a copy of an Au...
    0xb50f941, // First connect controller and component and then load the state i...
    0xa258295, // Don't repeatedly set the wantsFocus flag if it hasn't changed
    0x962cfc7, // Clarify what happens when maxNumChars is zero in the TextPropert...
    0x9100d1c, // Synthesiser and MPESynthesiser: added an additional parameter to...
    0x6fdb7e3, // Also add assembler files to MSVC projects
    0x7287830, // Fix AUv3 OS X version compiler error message
    0xf5398fc, // Added additional dontScrollToShowThisRange parameter to selectRa...
    0x9e1edc7, // Add support for hosting staticly compiled VSTs on all platforms
    0x1696c23, // Add support for hosting staticly linked VSTs
    0x88736e3, // Make splash screens fullscreen on mobile platforms
    0x65e1b60, // Add missing overrides in FileTreeComponent
    0x4b64584, // Fix small typo
    0x56d5f7b, // Don't update the rendering graph if the graph is not prepared
    0x8b1374d, // Don't call processBlock on a AudioProcessorGraph's node if it is...
    0xcdf899c, // Don't keep on showing the auto-updater dialog box if the user cl...
    0x035f865, // Fix steppy scrolling if the content component of a viewport was ...
    0x142ce5e, // Fix a typo in the previous commit
    0x69cd509, // Add missing getNumSteps override to AudioProcessorValueTree para...
    0x88803f6, // Don't call methods that require modal loops in Standalone filter...
    0xe5f306e, // Fix bad property id when registering AU event listener
    0xca62e56, // Revert support for hosting your own VST bundles on iOS
    0xa8a7fa2, // Added a missing newline in the juce_tracktion_marketplace keygen
    0x4998930, // Added expiry time support to the juce_tracktion_marketplace module
    0x05835ec, // Generate bitcode bundles on iOS
    0x9e6988a, // For drag-and-drop on win32, prioritised file-drag mode over text...
    0x97e058b, // Added a couple of proportional Rectangle methods
    0xd493311, // Only reopen stdout, stderr, stdin if they haven't already been o...
    0x70f4b0d, // Add more details to the documentation of the setResizable method...
    0x8b1b855, // Throttle repaints when repainting in a plug-in to avoid steppy a...
    0x6b8c720, // Tidied up a few things in the Line class, and added a Line::from...
    0xa604c03, // Added a definition that's missing in some very obscure win32 setups
    0xebb60c7, // Add missing new line at end of file
    0x6039a19, // Add new line to end of juce_AAX_Modifier_Injector.h
    0x7600723, // Correctly account for midi ports in Alsa when listing/opening de...
    0x872f84d, // Check for hash collisions when generating integer parameter ids ...
    0x5e9c256, // Label attribute of AudioProcessorParamater should be public
    0xab3e628, // Added mouse-up event pressure handling
    0xa050e07, // Fix incorrect parameter id <-> index conversion when hosting AUs
    0x3ff5ed0, // Reject any inconsistent VST-2 channel layout requests
    0x3791939, // Fix unused warning in AU plugin client release build
    0x437cb4e, // Only detect which corner is being resized on the first live resi...
    0x0df194d, // Added method URL::withNewDomainAndPath()
    0xc6249d2, // Clear http headers after redirects
    0xb439452, // Changed the Array::remove() method to return void, and added an ...
    0xdd245ef, // Have curl follow re-directions automatically
    0x332dcac, // Added a method Range::expanded()
    0xc9aca28, // Add pkg-config support for linux
    0xf83554c, // Add a User-Agent http header to curl requests
    0xc552872, // Never define JUCE_SUPPORT_CARBON on iOS
    0x01c73ff, // Optimisation for look and feel drawing of zero-size title bars
    0xa700774, // Tidied up a comment
    0xed67e40, // Added a customisable callback object to PopupMenu
    0x0a4b2ae, // Return parent row number if any of the tree view item's paraents...
    0x3592d61, // Add an issue template for GitHub.
    0x572868f, // Fix incorrect parameter id <-> index conversion when hosting AUs
    0x41ab0d9, // Never define JUCE_SUPPORT_CARBON on iOS
    0x630ab88, // Version number update
    0xb6d78f8, // Avoided an analyser warning on iOS
    0x89dade2, // Fixed a compile problem with the GNU c++ library
    0xe7c9cf3, // Made iOS build use updated HTTP API, and turned off deprecation wa...
    0x2f36d03, // Do a case-insensitive compare on core http headers in windows netw...
    0xb729764, // Fix a bug in URL::findEndOfScheme
    0x6fc1242, // Added some constructors to ReferenceCountedObjectPtr and ScopedPoi...
    0x38c897f, // Return nullptr from URL::createInputStream if a request times out
    0x2ca0c92, // Add beginParameterChangeGesture/endParameterChangeGesture support ...
    0xf7f35f5, // Add fallback to legacy networking code for pre OS X 10.10
    0x3461b12, // Draw custom line ends if arrow width is zero
    0x300485a, // Added a Javascript array indexOf method
    0x31f935c, // Added a new Graphics::drawImage method that takes a Rectangle<float>
    0x3969000, // Avoid a compile error due to steinberg renaming a constant in thei...
    0x14a9368, // AudioDeviceManager::initialiseFromXML(): made the default buffer s...
    0xe4592d1, // Projucer: tweak to the way GCC -D flags are generated
    0x8a9fbc3, // Resaved some project files
    0x5960afd, // Cleaned up a few functions in Graphics, and optimised drawEllipse ...
    0x6e0c168, // Removed a defunct workaround for an obscure bug in old Windows PCI...
    0xd29608a, // Minor documentation corrections.
    0xb46be0f, // Change projucer version to match JUCE version
    0xd9a3e76, // Fix a warning in the previous commit
    0xf6cd130, // Add redirect support to NSURLSession code
    0x1a40df9, // Revert commit d0c238d: Use getParameterText to respond to AU's kAu...
    0xf7d7f8a, // Clear unused outputs when bypassing a plug-in
    0x943c89d, // Added some extra locking in the destructor of a Mac HTTP stream im...
    0x84810b7, // Fixed some code that used a C++11 function
    0x1861c82, // Add window property to JuceAppStartupDelegate
    0x2be34b3, // Added some linux build files to the .gitignore
    0x37cffb7, // Added a Javascript array splice method
    0x16913f2, // Added a unit test
    0x69a7506, // Made File remove any redundant "/./" subfolders of paths that it i...
    0xd0c238d, // Use getParameterText to respond to AU's kAudioUnitProperty_Paramet...
    0x4097fab, // Fixed a silly typo!
    0x021209e, // Changed ImagePixelData::clone to return a smart pointer rather tha...
    0xf8516f2, // Refactored the OSX/iOS HTTP streaming code to use the newer NSURLS...
    0x95c66f5, // Make sure timer is stopped before releasing a VST plugin
    0xa33abe6, // Added method VSTPluginFormat::createCustomVSTFromMainCall() for lo...
    0x8b1438a, // Made PopupMenu avoid overwriting a custom shortcut key description...
    0x329e54d, // Replace std::move with static_cast to fix errors in old compilers
    0x58f2e1b, // Add support for isCurrentlyModal to detect if the current componen...
    0x1f6fa5c, // Re-save all projects
    0xb1a7441, // Align manufacturer code of sample plug-ins in JUCE repo ('ROLI')
    0x70ed6eb, // Add original four-char code as comment next to hex literal in AppC...
    0xadfc6e9, // Re-save projects
    0xb6f4d35, // Avoid char literals in auto-generated AppConfig.h files
    0x042bd2b, // Fix identifying the scheme portion of a URL
    0x72083c1, // Do not represent the numpad divide key as a slash key character
    0x16fde67, // Allow write access to all files if a user has effective root permi...
    0x074c909, // Fix minor typo in OS X function key mappings
    0xbb56ba4, // Add CRLF between JUCE http headers and user http headers
    0xcc6f0a1, // Replace CR and CRLF endings with unix (LF) style endings in xml do...
    0x4eec614, // Remove default keywords from MidiMessageSequence to be compatible ...
    0x320c5b6, // Add removeChannel to AudioChannelSet
    0x5e0d3fd, // Add possibility for an InterprocessConnectionServer to bind to a c...
    0x6810791, // Make sure that the legacy AU rez file is correct for midi effect AUs
    0x54e2351, // Fix compile error in AAX wrapper
    0x877d834, // Fix compiler error on VS2015 in recent commit
    0x9ecc1e9, // Fix an issue when hosting Waves plug-ins
    0xa0259ce, // Add support for plug-ins which do not want to use a resize corner
    0xc484a9e, // Fix some minor warnings on OS X 32-bit
    0x3ddd2db, // Allow access to all URLs in the JUCE Demo
    0x8cd6f49, // Add program change parameter to VST-3 plug-ins
    0xfc69dc0, // Changed addIfNotAlreadyThere method of all array classes to return...
    0x9481773, // Added *.xcscmblueprint to gitignore (a type of file generated by X...
    0x1a5f71b, // Added some logic to MidiDataConcatenator that avoids asserting on ...
    0xec40f09, // Updated version numbers in modules, and resaved example projects
    0xf58eda8, // Added 32K as a supported ASIO sample rate
    0xe993eb7, // Whitespace.
    0x920c19d, // UnitTest: added new functions expectNotEquals, expectGreaterThan, ...
    0x58ca067, // Avoided spacer components in a ToolBar getting keyboard focus
    0x7abbf67, // Tweaked the iOS audio device to make the default buffer size play ...
    0x61e71eb, // Add incremental linking option for Visual Studio exporters
    0xe8da23d, // Enable live comilation for Windows
    0xb841406, // Fixed a compiler warning
    0xb4e1e68, // UnitTest: added method expectWithinAbsoluteError for floating poin...
    0x74554a2, // Improved performance of some BigInteger methods by adding Montgome...
    0x565d664, // Fixed a typo in a comment
    0xdb7ada5, // Avoided compile problems when the JUCE_USE_CUSTOM_AU3_STANDALONE_A...
    0xdcf9246, // Reduced the footprint of MidiMessage, and added some move operator...
    0x23c361a, // Fixed a minor compiler warning
    0x3852771, // Always send VST3 editor parameter changes to the VST3 processor
    0x93b8fc1, // Reverted MPEZone: added copy constructor and copy assignment opera...
    0x42a3145, // MPEZone: added copy constructor and copy assignment operator.
    0xc807cbc, // MPEZone: cleaned up and clarified doxygen comments.
    0xcf39ad4, // Fix multiple compile errors on older gcc versions
    0x8c99b63, // Fixed a warning and a wrong indentation in MidiMessage.
    0x0141d0e, // Connecting an output node to a processor is an input and vice versa
    0x07bc151, // MidiMessage: moved two useful helper functions into the public int...
    0x968cee4, // Remove unnecessary code after moving to static shared code library
    0x1635f47, // Modify buttonColourId and buttonOnColourId to be different colours
    0xa714feb, // Fix incorrect number of output buses in standalone plug-in client
    0x0a040c6, // Update avtive ports when opening JACK audio device
    0x0ea9e33, // Enable subclassing of StandaloneFilterApp
    0xf5391cd, // Only report one midi in & out bus in VST3 wrapper
    0x437b5c2, // Third time lucky?
    0xb003543, // Fix typo in last commit
    0xc5a7fe6, // Add additional checks to enable/disable AUv3 support
    0x9069d70, // Fix bug in AudioGraphIOProcessor
    0xfe14210, // Fix incorrect order of includes in VST_wrapper.mm
    0x749bffe, // Add missing ifdefs from recent commit
    0xf11a2b2, // Fix modifier keys in AAX plug-ins on Windows 10
    0x54243ef, // Support hosting your own VST bundles on iOS
    0xa3c377b, // Move kAudioUnitProperty_MaximumFramesPerSlice setting/query after ...
    0x8df262a, // Don't use placement new for MemoryBlock assignment operator in var...
    0x0d52caf, // Make sure AAX wrapper calls releaseResources
    0x24a63ae, // If ChildProcess is not interested in stdout/stderr, then redirect ...
    0xbda4b78, // Add missing assignment operator to var class
    0x4e91fd7, // Add an extra byte when copying VST2 strings
    0xac9973f, // Add support for creating popup menus inside parent components
    0x77a8b9e, // Fix a few warnings
    0x8e53286, // Fix some warnings in VS2013 in the recent commits
    0x4205123, // Fix an edge-case if the last stored editor window size is zero
    0xebb0a15, // Add options to make AuidoProcessorEditors resizable with constraints
    0x25f8faf, // Add windowIgnoresMouseClicks flag to tooltip windows
    0xee7a56a, // Fix potential crash if DAW probes non-existent bus
    0xb3ee880, // Set kAudioUnitProperty_MaximumFramesPerSlice on iOS
    0x2c3783e, // Workaround for loading Izotope Plug-Ins
    0x368ce48, // Fix a race condition in the plugin scanner
    0x4c900be, // Added some init code to enable stdout, stderr, stdin in the specia...
    0xc9c6aa0, // Merge branch 'master' into develop
    0xfe37653, // Fixed JUCE_BUILDNUMBER which was not correctly updated to 4.2.2.
    0x1bd850d, // Minor tidy up of yesterday's VST3 preset commit
    0x7eb80b8, // Ensure that AudioUnitUninitialize is called on the message threa...
    0x5098232, // Tidy up a few warning
    0x993a2e4, // Do not allow specifying the JUCE folder as a modules folder
    0xf4086ad, // Support factory programs in VST3 hosting
    0x93a41cf, // Call setProcessing (false) when resting a VST3 plug-in
    0xf0dd881, // Fixed a typo in the projucer's button colour handling
    0xf5324af, // Added some defenses against parsing corrupted metadata blocks in...
    0x1a973a2, // Ignore linux scale factor if it is ten or larger
    0xfc8c628, // Add more detailed comment on why getting the "getPluginFactory" ...
    0xe12c801, // Always add build scripts - even for Aggregate targets
    0x4827003, // Made Component::internalFocusLoss pass on the focus-change cause...
    0xe13286a, // Minor comment correction
    0x3aee68e, // Added a method to create a ModalCallbackFunction from a lambda f...
    0x12eeade, // Added some missing 'override's
    0x79dca43, // Workaround for VST-3 plug-ins which do not change their paramete...
    0x0d96a8b, // Avoided some false negatives in the JSON unit tests
    0x6b98901, // Fix link errors when build VST plug-ins with VST 3 hosting support
    0x2c3a2ea, // Simplified some demo plugin code to avoid a display update problem
    0x09d6409, // Refactored some demo code to avoid a problem when using String::...
    0xdbf9156, // Fix RTAS support
    0x6b6dedb, // Add some minor changes to stay compatible with GCC 4.4
    0x7056128, // Add intersect method to AudioChannelSet
    0xaf6198b, // Add support for plug-ins to report the IDs of their parameters
    0x2c7a0e0, // Fixed a wrong preprocessor macro which caused plugin hosting to br...
    0xa0835a5, // Added a parseFloat method to the Javascript parser
    0xf2bca43, // Fix AUv3 version check for iOS
    0xf36205f, // Fixed a couple of comment typos
    0xe602dd6, // Improved some comments for MemoryBlock base-64 methods
    0xd1030fa, // Projucer: added some missing 'override' specifiers
    0x688ac3b, // Updated a comment
    0x340f4ce, // Android exporter: set buildToolsVersion to 23.0.2
    0xd6ed722, // Updated Android Studio build settings in projects.
    0x908e1e9, // Android Studio exporter: changed default toolchain back to clang (...
    0x0162c97, // Android exporter: update default settings to gradle-experimental:0...
    0xd9e3cda, // Removed a few references to var::null
    0xfe7ebbd, // Projucer: Updated the default Visual Studio version to 2015
    0x708e357, // Prevented ColourGradient from having multiple colour stops at 0
    0xd32c64d, // Avoided an unused variable warning
    0xaf9491c, // Fix typo in previous commit by incorrectly checking the OS X version
    0x8ababdd, // Fixed the SVG parser to stop it creating too many colour stops in ...
    0x01e2e53, // Added an assertion to catch some unexpected behaviour in the CoreG...
    0x0cd926a, // Fix a bug which stopped multi-bus VST3 synths from working properl...
    0x7196e57, // Don't try to build VST/VST3 hosting code on iOS and add missing he...
    0x1cbd0a0, // Projucer: stopped files with certain extensions (e.g. txt) being a...
    0xe05e9a4, // Added an assertion in AudioThumbnail
    0xe034958, // Added some desktop scale compensation to drag + drop on Windows
    0xbf48687, // Made the OSX window code handle custom desktop scale factors when ...
    0xaa3ead5, // Resaved a demo component file
    0x6fc08dd, // Added a workaround for Android GL glitches when pausing the app
    0x676b27e, // Added a MidiDataConcatenator to the linux MIDI implementation, to ...
    0x0708b7a, // Added AAX macro JucePlugin_AAXDisableSaveRestore to set the AAX_eP...
    0xb9aaa88, // Fix for Synthesiser rendering 0 length blocks
    0x5188904, // Avoided a conversion warning
    0xa0795e8, // Avoided an overflow in some extreme edge-case uses of WAVAudioFormat
    0x49a7ca4, // Improved the String::createStringFromData method to fall back to a...
    0xc1799c9, // Fixed a problem with negative values in MidiMessage::getKeySignatu...
    0x81ff3a8, // Projucer: fixed an edge-case where the UI would misbehave if you'r...
    0xb6e8869, // Projucer: Fixed module dependency checker
    0x0c3057e, // Re-saved projects.
    0x2332c72, // Fixed generation of Carbon resources for AU plug-ins (was broken b...
    0x2682f7d, // Updated ChangeLog.txt
    0x46a090b, // Tweaked the login in the Synthesiser and MPESynthesiserBase classe...
    0x6ef3f1e, // Added asserts to clarify that WebBrowserComponent is not implement...
    0x0d1f621, // Fix crash & assertion when running multi-bus plug-ins in Cakewalk
    0x1675f82, // Fixed a mistake in BigInteger::inverseModulo()
    0x0b3a11e, // Updated version number to 4.2.1
    0x9da130c, // Update comment on estimatedSamplesPerBlock parameter used in the p...
    0x00dd576, // Don't create an asserting VST2 plug-in when creating a new plug-in...
    0x818287e, // Fix assertion when scanning plug-ins on Windows
    0x9678eef, // Stripped out some defunct VS2003 code
    0x6dd2fbe, // AUv3: added compiler error if compiling with deployment target < 1...
    0x0ef8bdb, // Android Studio exporter: fixed and refactored the way include path...
    0x6047817, // Android Studio exporter: changed default toolchain to gcc, as clan...
    0x26d07ea, // Android Studio exporter: do not write a toolchainVersion into the ...
    0x4ef602f, // Fix C++-98 compilation errors in AudioPluginFormat code
    0xd64396e, // Removed rogue file
    0x8920e1b, // Resaved projects
    0xfad8d05, // Projucer: improved the set of browsable files that are added to ta...
    0x1601c90, // Fixed some merge-noise in NetworkGraphicsDemo
    0x325aeb1, // Resaved projects
    0x753c24c, // Fix to KnownPluginList::addToMenu ticks
    0x61b2759, // Fix plug-in projects with whitespaces in their name
    0xe130ce1, // Projucer: fixed a suffix error when generating linux host projects
    0x8462849, // Re-saved projects.
    0xf2c50b8, // Android studio exporter: fixed include paths to work with new modu...
    0x8dfb1c5, // JuceDemoPlugin.jucer: removed wrong AAX path that was saved there ...
    0x71abee4, // Android Studio exporter: added option to specify build tools optio...
    0xbb1fe3d, // Android Studio exporter: removed unused build setting.
    0x2fa6c20, // Fixed bug in Android Ant exporter due to mixed up build settings.
    0x1e41e3d, // Fixed bug in AAX/RTAS Xcode export: installation paths were mixed up.
    0x4b1cabb, // Minor refactoring, clean-up, whitespace.
    0x6d69f1b, // Added new Xcode option to strip of local symbols (off by default).
    0xf6efbed, // Remove default symbol visibility for JUCE shared code
    0x37073c3, // Using static linking instead of a framework for the shared code of...
    0xf5c19ef, // Fixed Android build settings of all .jucer files to use new defaul...
    0xb94d281, // Refactored Android exporters to use CachedValue and get rid of som...
    0x8f4c4c9, // Fixed typo in LADSPA code
    0x4c0bc70, // Deleted some defunct Mac PowerPC code
    0x42a956c, // Added a workaround for an obscure GL race condition when closing c...
    0x05f9001, // Fixed some MSVC warnings in CachedValue
    0x968f838, // Added an option to KnownPluginList::addToMenu for specifying a tic...
    0x3d1cf53, // Added colour IDs for ToggleButton tick colour
    0xf74338a, // Resaved projects
    0xe030a58, // Projucer: fixes for binary paths and Android Studio
    0xa439c6a, // Added new class: CachedValue
    0x905533c, // Minor formatting tidyups
    0x45e2b00, // Added a method ValueTree::getPropertyPointer()
    0x3c68007, // Fixed capitalisation
    0x60cd2d7, // Projucer: fixed the way the GUI editor generates include paths
    0x6fc4d5a, // Fixed a bug in the Javascript parser involving array dereferencing
    0x486cb0c, // Projucer: tidied up an include path in a template file
    0x85a5dfb, // Projucer: corrected some help text
    0x8343f34, // Found a few missing 'override' specifiers
    0x6d03314, // Projucer: updated EULA
    0x59f2885, // Minor refactoring for a bit more clarity in the deprecated Xcode p...
    0x367f6ee, // Fixed bug with wrong checksum for deprecated Xcode post-build script.
    0x54d3cfa, // Projucer: Fixed a bug that could cause focus to seemingly jump aro...
    0x544b8d0, // Simplified some Projucer GUI editor code + added a missing slider ...
    0x06d8d41, // Added a method to StandaloneFilterApp to allow customisation of th...
    0xeffb421, // Projucer: Updated some font use and removed the EULA if running wi...
    0x025d04c, // Projucer: Added warning when trying to load projects with out-of-d...
    0x871c3a9, // Removed some code that prevented RTL TextLayouts having their boun...
    0xbb7189b, // Added kerning support to the DirectWrite layout code
    0x48b35c4, // Workaround for long filenames in Process::openDocument on OSX
    0x82350ba, // Re-saved Projucer with itself.
    0x68451ee, // Projucer: fixed bug where whitespace in the "additional frameworks...
    0xcaffbba, // Projucer: better workaround missing framework symbols: adding fram...
    0xc096b1a, // Reverted: Projucer: workaround missing framework symbols during Li...
    0xe04b7ff, // Added some extra time-out settings to the Linux CURL code
    0xe1205ec, // Re-added a WaveLab workaround in the VST wrapper
    0xbe3acc9, // Tidied up an out of date method in LADSPAPluginFormat
    0xd80ceb0, // PlugInSamples: re-saved projects to fix accidentally added local A...
    0xd9b0b53, // Corrected a rogue header comment
    0x7d64417, // Re-saved all audio plug-in projects.
    0x0eb0f27, // Fixed Carbon host support for AudioUnit v2 by fixing the Projucer'...
    0xef5aefe, // Re-saved all example projects that have AAX enabled by default.
    0x92a1747, // Fixed AAX plug-in builds with new module format on OS X.
    0x5fcea26, // Projucer: workaround missing framework symbols during Live build: ...
    0x3b65c5c, // Projucer AppearanceSettingsTab: added missing resized() function; ...
    0xc08375a, // added *.VC.db to .gitignore to ignore some files generated by Visu...
    0xe9edecc, // Resaved projects
    0xe1098c8, // Projucer: Fixed failure to scan deep file hierarchies when buildin...
    0x9abd4ee, // Added some extra tolerance settings to some Path methods
    0x0a0c550, // Projucer: made sure that RTAS files are built with stdcall in MSVC
    0xb6261b9, // .gitignore: added JUCECompileEngine.dylib to ignored files in case...
    0xfb864a5, // Corrected some spelling mistakes in comments
    0x7d178fe, // (Fixed mistake in last commit)
    0x32178f4, // Tidied up some AUv3 code
    0x5049bab, // Projucer: Fixed a typo that prevented the OSXLibs setting working
    0x15f4789, // Projucer: Added a sanity-check to prevent compilation if some modu...
    0x23b1d89, // Projucer: made the login form remember the last username
    0xbc58656, // Projucer: made build panel UI update when signing out
    0x1182aec, // Improved a comment
    0xc34f13a, // Fixed a linkage problem in some release plugin builds
    0x26d6cb9, // Fixed a few integer conversion warnings.
    0x17e2acb, // Fixed a couple of AUv3 bugs
    0x9dda845, // Changed Projucer deployment target to 10.9 in Debug config (was 'd...
    0x63ef9c1, // Fix compilation errors in AU format when compiling for older OS ta...
    0xcdeb0b5, // Undo removal of setNumThreads in plug-in scanner
    0x44359cb, // Fix missing std::nullptr defines
    0x24f05c4, // Whitespace.
    0x9066ed4, // Projucer: fixed unreachable code warning in ProjectContentComponen...
    0xc77fea9, // Projucer Visual Studio: switched to default platform toolset witho...
    0x70949aa, // Added several new features: support for AudioUnit v3, new simplifi...
];

// ═══════════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_marker() {
        assert_eq!(Marker::parse("75cd666").unwrap(), Marker(0x75cd666));
        assert_eq!(Marker::parse("0000000").unwrap(), Marker(0));
    }

    #[test]
    fn parse_rejects_malformed_markers() {
        for s in ["", "75cd66", "75cd6660", "75cd66g", "75CD666", "5.3.1"] {
            assert!(Marker::parse(s).is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn default_marker_is_newest() {
        assert_eq!(SUPPORTED_SNAPSHOTS[0], DEFAULT_MARKER.0);
        assert!(DEFAULT_MARKER.is_recognized());
    }

    #[test]
    fn vst2_interface_threshold() {
        // The newest snapshot bundles the VST2 interface...
        assert!(DEFAULT_MARKER.supports(Feature::BundledVst2Interface));
        // ...the threshold snapshot itself does...
        assert!(Marker(0x9f31d64).supports(Feature::BundledVst2Interface));
        // ...and the one right below it does not.
        let since = SUPPORTED_SNAPSHOTS
            .iter()
            .position(|&m| m == 0x9f31d64)
            .unwrap();
        assert!(!Marker(SUPPORTED_SNAPSHOTS[since + 1]).supports(Feature::BundledVst2Interface));
        // The oldest recognized snapshot predates it.
        assert!(
            !Marker(*SUPPORTED_SNAPSHOTS.last().unwrap())
                .supports(Feature::BundledVst2Interface)
        );
    }

    #[test]
    fn unrecognized_marker_falls_back_to_default() {
        let unknown = Marker::parse("1234bad").unwrap();
        assert!(!unknown.is_recognized());
        assert_eq!(
            unknown.supports(Feature::BundledVst2Interface),
            DEFAULT_MARKER.supports(Feature::BundledVst2Interface)
        );
        assert!(!unknown.supports(Feature::PluginFormatsList));
    }

    #[test]
    fn snapshots_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for &m in SUPPORTED_SNAPSHOTS {
            assert!(seen.insert(m), "duplicate snapshot {m:#09x}");
        }
    }
}
