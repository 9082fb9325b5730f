use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub code: String,
    pub trade_type: String,
    pub trade_date: Option<NaiveDate>,
    pub nav: f64,
    pub shares: f64,
    pub amount: f64,
    pub fee: f64,
    pub principal: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldingRecord {
    pub code: String,
    pub name: String,
    pub fund_type: String,
    pub inception_date: Option<NaiveDate>,
    pub short_name: String,
}
