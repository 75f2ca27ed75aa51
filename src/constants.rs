// Centralized defaults & fixed names
pub const DEFAULT_INPUT_DIR: &str = "modules";
pub const DEFAULT_OUTPUT_DIR: &str = "bibles";
pub const OSIS_NAMESPACE: &str = "http://www.bibletechnologies.net/2003/OSIS/namespace";
pub const MODULE_SUFFIX: &str = ".xml";
pub const OUTPUT_EXTENSION: &str = "json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const VERSE_NOT_FOUND: &str = "Verse not found";
