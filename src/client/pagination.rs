//! Pagination parameters for list endpoints

use super::payload::Payload;

/// Paging through a principal list.
///
/// `start` is the id of the last principal already seen; it is not included
/// in the next page.
///
/// # Example
/// ```ignore
/// let params = PageParams::new().start("u:cam:bob").limit(25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    /// Principal id to start after
    pub start: Option<String>,
    /// Maximum number of entries to return
    pub limit: Option<u32>,
}

impl PageParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.limit.is_none()
    }

    /// Query payload with only the parameters that are set
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload
            .insert_opt("start", self.start.clone())
            .insert_opt("limit", self.limit);
        payload
    }
}
