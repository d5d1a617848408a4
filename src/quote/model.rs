use serde::{Deserialize, Serialize};

use crate::core::wire::or_default;

/// A market snapshot for one instrument from `GET /marketdata/quotes`.
///
/// Prices are in the instrument's trading currency; `*_in_long` fields are
/// epoch milliseconds. Fields absent from the payload, or sent as `null`, read as zero/empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    #[serde(deserialize_with = "or_default")]
    pub asset_type: String,
    #[serde(deserialize_with = "or_default")]
    pub asset_main_type: String,
    #[serde(deserialize_with = "or_default")]
    pub cusip: String,
    #[serde(deserialize_with = "or_default")]
    pub asset_sub_type: String,
    #[serde(deserialize_with = "or_default")]
    pub symbol: String,
    #[serde(deserialize_with = "or_default")]
    pub description: String,

    #[serde(deserialize_with = "or_default")]
    pub bid_price: f64,
    #[serde(deserialize_with = "or_default")]
    pub bid_size: u64,
    #[serde(deserialize_with = "or_default")]
    pub bid_id: String,
    #[serde(deserialize_with = "or_default")]
    pub ask_price: f64,
    #[serde(deserialize_with = "or_default")]
    pub ask_size: u64,
    #[serde(deserialize_with = "or_default")]
    pub ask_id: String,
    #[serde(deserialize_with = "or_default")]
    pub last_price: f64,
    #[serde(deserialize_with = "or_default")]
    pub last_size: u64,
    #[serde(deserialize_with = "or_default")]
    pub last_id: String,

    #[serde(deserialize_with = "or_default")]
    pub open_price: f64,
    #[serde(deserialize_with = "or_default")]
    pub high_price: f64,
    #[serde(deserialize_with = "or_default")]
    pub low_price: f64,
    #[serde(deserialize_with = "or_default")]
    pub bid_tick: String,
    #[serde(deserialize_with = "or_default")]
    pub close_price: f64,
    #[serde(deserialize_with = "or_default")]
    pub net_change: f64,
    #[serde(deserialize_with = "or_default")]
    pub total_volume: u64,
    #[serde(deserialize_with = "or_default")]
    pub quote_time_in_long: i64,
    #[serde(deserialize_with = "or_default")]
    pub trade_time_in_long: i64,
    #[serde(deserialize_with = "or_default")]
    pub mark: f64,

    #[serde(deserialize_with = "or_default")]
    pub exchange: String,
    #[serde(deserialize_with = "or_default")]
    pub exchange_name: String,
    #[serde(deserialize_with = "or_default")]
    pub marginable: bool,
    #[serde(deserialize_with = "or_default")]
    pub shortable: bool,
    #[serde(deserialize_with = "or_default")]
    pub volatility: f64,
    #[serde(deserialize_with = "or_default")]
    pub digits: i32,

    #[serde(rename = "52WkHigh", deserialize_with = "or_default")]
    pub week_52_high: f64,
    #[serde(rename = "52WkLow", deserialize_with = "or_default")]
    pub week_52_low: f64,
    /// Net asset value (funds only).
    #[serde(rename = "nAV", deserialize_with = "or_default")]
    pub nav: f64,
    #[serde(deserialize_with = "or_default")]
    pub pe_ratio: f64,
    #[serde(deserialize_with = "or_default")]
    pub div_amount: f64,
    #[serde(deserialize_with = "or_default")]
    pub div_yield: f64,
    #[serde(deserialize_with = "or_default")]
    pub div_date: String,
    #[serde(deserialize_with = "or_default")]
    pub security_status: String,

    #[serde(deserialize_with = "or_default")]
    pub regular_market_last_price: f64,
    #[serde(deserialize_with = "or_default")]
    pub regular_market_last_size: u64,
    #[serde(deserialize_with = "or_default")]
    pub regular_market_net_change: f64,
    #[serde(deserialize_with = "or_default")]
    pub regular_market_trade_time_in_long: i64,
    #[serde(deserialize_with = "or_default")]
    pub net_percent_change_in_double: f64,
    #[serde(deserialize_with = "or_default")]
    pub mark_change_in_double: f64,
    #[serde(deserialize_with = "or_default")]
    pub mark_percent_change_in_double: f64,
    #[serde(deserialize_with = "or_default")]
    pub regular_market_percent_change_in_double: f64,

    /// Whether the snapshot is delayed rather than real-time.
    #[serde(deserialize_with = "or_default")]
    pub delayed: bool,
    #[serde(deserialize_with = "or_default")]
    pub realtime_entitled: bool,
}
