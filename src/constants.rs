//! Global constants used throughout the msm-scaffold codebase.
//!
//! Marker strings, header text and notebook identity live here so the
//! extractor, renderer and writers agree on them.

/// Marker opening an embedded metadata block inside a template source.
pub const META_BEGIN: &str = "Meta\n----\n";

/// Marker closing an embedded metadata block. Searched for after [`META_BEGIN`].
pub const META_END: &str = "\n----\n";

/// Metadata key listing files from ancestor directories a template needs.
pub const DEPENDS_KEY: &str = "depends";

/// First header line: tool name and template format version.
pub const HEADER_TITLE: &str = "msm-scaffold autogenerated template version 2";

/// Attribution notice appended to every generated header.
pub const HEADER_ATTRIBUTION: &str = "please cite msmbuilder in any publications";

/// Infix used for backup names: `<name>.bak.<N>`.
pub const BACKUP_INFIX: &str = "bak";

/// Jupyter kernel name written into notebook metadata.
pub const KERNEL_NAME: &str = "python3";

/// Jupyter kernel display name written into notebook metadata.
pub const KERNEL_DISPLAY_NAME: &str = "Python 3";

/// nbformat major version of generated notebooks.
pub const NBFORMAT: u32 = 4;

/// nbformat minor version of generated notebooks.
pub const NBFORMAT_MINOR: u32 = 4;

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "MSM_SCAFFOLD_CONFIG";
