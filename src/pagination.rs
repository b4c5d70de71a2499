use serde::Serialize;

/// Page requested when the caller does not supply a usable one.
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when the caller does not supply a usable one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Parses a positive integer query value, falling back to `default` when the
/// value is missing, unparsable or zero.
pub fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&value| value > 0)
        .unwrap_or(default)
}

/// Metadata describing one page of a list response.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page_number: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl PageMeta {
    pub fn new(page_number: usize, page_size: usize, total: usize) -> Self {
        let page_number = if page_number == 0 { 1 } else { page_number };
        let page_size = if page_size == 0 {
            DEFAULT_ITEMS_PER_PAGE
        } else {
            page_size
        };

        Self {
            page_number,
            page_size,
            total,
            total_pages: total.div_ceil(page_size),
        }
    }
}
