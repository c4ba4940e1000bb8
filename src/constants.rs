/// Lossy WebP quality applied to every converted image (0-100).
pub const WEBP_QUALITY: f32 = 85.0;

pub const TARGET_EXTENSION: &str = "webp";

/// Lowercase source extensions, matched case-insensitively against file names.
pub const SOURCE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Largest width or height libwebp can encode.
pub const WEBP_MAX_DIMENSION: u32 = 16383;

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️";
pub const ERROR_PREFIX: &str = "❌";
pub const INFO_PREFIX: &str = "📋";
pub const SIZE_PREFIX: &str = "📊";
