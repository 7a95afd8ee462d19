/// Options for decoding a `SELECT OSE` response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseConfig {
    /// Fail with [`Error::MissingDirectoryEntries`](crate::Error::MissingDirectoryEntries)
    /// when the PPSE data holds no directory entry. Off by default: a wallet
    /// without applications yields an empty response.
    pub require_directory_entries: bool,
}

impl ParseConfig {
    /// Strict decoding, directory entries must be present
    pub const fn strict() -> Self {
        Self {
            require_directory_entries: true,
        }
    }
}
