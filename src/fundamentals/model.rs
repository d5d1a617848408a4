use serde::{Deserialize, Serialize};

use crate::core::wire::{num, or_default};

/// One entry of the instruments endpoint with `projection=fundamental`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstrumentFundamentals {
    #[serde(deserialize_with = "or_default")]
    pub fundamental: Fundamental,
    /// CUSIP identifier.
    #[serde(deserialize_with = "or_default")]
    pub cusip: String,
    #[serde(deserialize_with = "or_default")]
    pub symbol: String,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    #[serde(deserialize_with = "or_default")]
    pub exchange: String,
    #[serde(deserialize_with = "or_default")]
    pub asset_type: String,
}

/// Valuation, profitability, leverage and volume metrics for an instrument.
///
/// Numeric fields accept JSON numbers or numeric strings; absent or `null` values read as `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fundamental {
    #[serde(deserialize_with = "or_default")]
    pub symbol: String,

    /* 52-week range */
    #[serde(deserialize_with = "num")]
    pub high52: f64,
    #[serde(deserialize_with = "num")]
    pub low52: f64,

    /* dividends */
    #[serde(deserialize_with = "num")]
    pub dividend_amount: f64,
    #[serde(deserialize_with = "num")]
    pub dividend_yield: f64,
    /// Expected ex-dividend date, as sent by the API.
    #[serde(deserialize_with = "or_default")]
    pub dividend_date: String,

    /* valuation */
    #[serde(deserialize_with = "num")]
    pub pe_ratio: f64,
    #[serde(deserialize_with = "num")]
    pub peg_ratio: f64,
    #[serde(deserialize_with = "num")]
    pub pb_ratio: f64,
    #[serde(deserialize_with = "num")]
    pub pr_ratio: f64,
    #[serde(deserialize_with = "num")]
    pub pcf_ratio: f64,

    /* margins */
    #[serde(rename = "grossMarginTTM", deserialize_with = "num")]
    pub gross_margin_ttm: f64,
    #[serde(rename = "grossMarginMRQ", deserialize_with = "num")]
    pub gross_margin_mrq: f64,
    #[serde(rename = "netProfitMarginTTM", deserialize_with = "num")]
    pub net_profit_margin_ttm: f64,
    #[serde(rename = "netProfitMarginMRQ", deserialize_with = "num")]
    pub net_profit_margin_mrq: f64,
    #[serde(rename = "operatingMarginTTM", deserialize_with = "num")]
    pub operating_margin_ttm: f64,
    #[serde(rename = "operatingMarginMRQ", deserialize_with = "num")]
    pub operating_margin_mrq: f64,

    /* returns */
    #[serde(deserialize_with = "num")]
    pub return_on_equity: f64,
    #[serde(deserialize_with = "num")]
    pub return_on_assets: f64,
    #[serde(deserialize_with = "num")]
    pub return_on_investment: f64,

    /* liquidity and leverage */
    #[serde(deserialize_with = "num")]
    pub quick_ratio: f64,
    #[serde(deserialize_with = "num")]
    pub current_ratio: f64,
    #[serde(deserialize_with = "num")]
    pub interest_coverage: f64,
    #[serde(deserialize_with = "num")]
    pub total_debt_to_capital: f64,
    #[serde(deserialize_with = "num")]
    pub lt_debt_to_equity: f64,
    #[serde(deserialize_with = "num")]
    pub total_debt_to_equity: f64,

    /* earnings and revenue */
    #[serde(rename = "epsTTM", deserialize_with = "num")]
    pub eps_ttm: f64,
    #[serde(rename = "epsChangePercentTTM", deserialize_with = "num")]
    pub eps_change_percent_ttm: f64,
    #[serde(deserialize_with = "num")]
    pub eps_change_year: f64,
    #[serde(deserialize_with = "num")]
    pub eps_change: f64,
    #[serde(deserialize_with = "num")]
    pub rev_change_year: f64,
    #[serde(rename = "revChangeTTM", deserialize_with = "num")]
    pub rev_change_ttm: f64,
    #[serde(deserialize_with = "num")]
    pub rev_change_in: f64,

    /* size */
    #[serde(deserialize_with = "num")]
    pub shares_outstanding: f64,
    #[serde(deserialize_with = "num")]
    pub market_cap_float: f64,
    #[serde(deserialize_with = "num")]
    pub market_cap: f64,
    #[serde(deserialize_with = "num")]
    pub book_value_per_share: f64,

    /* short interest */
    #[serde(deserialize_with = "num")]
    pub short_int_to_float: f64,
    #[serde(deserialize_with = "num")]
    pub short_int_day_to_cover: f64,

    #[serde(deserialize_with = "num")]
    pub div_growth_rate_3_year: f64,
    #[serde(deserialize_with = "num")]
    pub dividend_pay_amount: f64,
    /// Payment date (as opposed to the ex-dividend date).
    #[serde(deserialize_with = "or_default")]
    pub dividend_pay_date: String,

    /// Correlation to the broad market.
    #[serde(deserialize_with = "num")]
    pub beta: f64,

    /* average volume */
    #[serde(deserialize_with = "num")]
    pub vol_1_day_avg: f64,
    #[serde(deserialize_with = "num")]
    pub vol_10_day_avg: f64,
    #[serde(deserialize_with = "num")]
    pub vol_3_month_avg: f64,
}
