/// Default number of records skipped by a listing.
pub const DEFAULT_SKIP: u32 = 0;

/// Default upper bound on the records returned by a listing.
pub const DEFAULT_LIMIT: u32 = 100;

/// Offset/limit window for listing records.
///
/// Records come back in the storage engine's default order (ascending id).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Page {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}
