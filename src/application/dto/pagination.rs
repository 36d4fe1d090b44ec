use serde::Deserialize;
use utoipa::IntoParams;

pub const MAX_PAGE_LIMIT: u32 = 100;

/// `limit`/`offset` query parameters. Each listing applies its own default
/// limit when none is given.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageRequest {
    /// How many items fit on one page.
    pub limit: Option<u32>,
    /// How many items to skip before the page.
    pub offset: Option<u32>,
}

impl PageRequest {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self { limit, offset }
    }

    /// Resolved `(limit, offset)`, with the limit clamped to
    /// `1..=MAX_PAGE_LIMIT`.
    pub fn resolve(self, default_limit: u32) -> (u32, u32) {
        let limit = self
            .limit
            .unwrap_or(default_limit)
            .clamp(1, MAX_PAGE_LIMIT);
        (limit, self.offset.unwrap_or(0))
    }
}
