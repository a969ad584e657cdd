//! Which side of the housing market a dataset describes.

use serde::{Deserialize, Serialize};

/// Rent listings carry a monthly rent in `price_chf`; buy listings carry a
/// purchase price. The two are never mixed in one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    Rent,
    Buy,
}

impl Market {
    pub fn label(self) -> &'static str {
        match self {
            Market::Rent => "Rent",
            Market::Buy => "Buy",
        }
    }

    /// Human-readable name of the `price_chf` column for this market.
    pub fn price_label(self) -> &'static str {
        match self {
            Market::Rent => "Monthly Rent (CHF)",
            Market::Buy => "Purchase Price (CHF)",
        }
    }

    /// Name used for the per-m² metric column in ranking tables.
    pub fn metric_label(self) -> &'static str {
        match self {
            Market::Rent => "Avg Rent/m²",
            Market::Buy => "Avg Buy Price/m²",
        }
    }

    pub fn other(self) -> Market {
        match self {
            Market::Rent => Market::Buy,
            Market::Buy => Market::Rent,
        }
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_flips_market() {
        assert_eq!(Market::Rent.other(), Market::Buy);
        assert_eq!(Market::Buy.other(), Market::Rent);
    }

    #[test]
    fn serde_roundtrip_is_lowercase() {
        let s = serde_json::to_string(&Market::Rent).unwrap();
        assert_eq!(s, "\"rent\"");
        let m: Market = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(m, Market::Buy);
    }
}
