//! Plain data row types.

/// Written in place of every derived value when a pair cannot be priced.
pub const UNAVAILABLE: &str = "N/A";

/// One input pair plus the input record it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairRow {
    pub origin: String,
    pub dest:   String,
    /// All input columns, padded or truncated to the header width.
    pub fields: Vec<String>,
}

/// Derived values for a priced pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PairFigures {
    pub haversine_km:   f64,
    pub road_km:        f64,
    pub delivery_price: f64,
}

/// A processed pair.  `figures` is `None` when either pincode is unknown.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRow {
    pub pair:    PairRow,
    pub figures: Option<PairFigures>,
}
