pub const DEFAULT_SUMMARY_MARKERS: [&str; 3] = ["total", "pending:", "sold:"];

pub const DEFAULT_PLACEHOLDER_PRICES: [&str; 2] = ["0", "$0.00"];

/// Heuristics deciding which data rows are silently skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImporterConfig {
    pub summary_markers: Vec<String>,
    pub placeholder_prices: Vec<String>
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            summary_markers: DEFAULT_SUMMARY_MARKERS.iter().map(|marker| marker.to_string()).collect(),
            placeholder_prices: DEFAULT_PLACEHOLDER_PRICES.iter().map(|price| price.to_string()).collect()
        }
    }
}

impl ImporterConfig {
    pub fn is_summary_row(&self, first_cell: &str) -> bool {
        let first_cell = first_cell.to_lowercase();

        self.summary_markers.iter().any(|marker| first_cell.contains(marker.as_str()))
    }

    pub fn is_placeholder_price(&self, price: &str) -> bool {
        price.is_empty() || self.placeholder_prices.iter().any(|placeholder| placeholder == price)
    }
}
