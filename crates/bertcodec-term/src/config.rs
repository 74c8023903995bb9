/// Default maximum nesting depth of tuples and lists.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default maximum size of a single binary: 16 MiB.
pub const DEFAULT_MAX_BINARY_SIZE: usize = 16 * 1024 * 1024;

/// Default maximum element count of a single tuple or list.
pub const DEFAULT_MAX_COLLECTION_LEN: usize = 1024 * 1024;

/// Bounds applied by the primitive codec.
///
/// Decoding enforces every limit. Encoding only enforces `max_depth`, since
/// the caller already owns the data being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TermConfig {
    /// Maximum nesting depth of tuples and lists. Default: 512.
    pub max_depth: usize,
    /// Maximum size of one binary in bytes. Default: 16 MiB.
    pub max_binary_size: usize,
    /// Maximum element count of one tuple or list. Default: 1 Mi.
    pub max_collection_len: usize,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_binary_size: DEFAULT_MAX_BINARY_SIZE,
            max_collection_len: DEFAULT_MAX_COLLECTION_LEN,
        }
    }
}
