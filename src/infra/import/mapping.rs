use chrono::NaiveDate;

use crate::domain::entities::record::{HoldingRecord, TradeRecord};
use crate::domain::entities::template::{Language, TemplateKind};
use crate::format::parse_amount;
use crate::infra::import::detect::column_matches;
use crate::infra::import::signature::signature_for;

/// Where each canonical column of a template landed in the actual header
/// row. Index positions follow the signature's column order; unmatched
/// columns read as empty strings.
pub struct ColumnMap {
    indices: Vec<Option<usize>>,
}

impl ColumnMap {
    pub fn index_of(&self, column: usize) -> Option<usize> {
        self.indices.get(column).copied().flatten()
    }

    pub fn matched_count(&self) -> usize {
        self.indices.iter().filter(|index| index.is_some()).count()
    }

    pub fn value<'a>(&self, row: &'a [String], column: usize) -> &'a str {
        self.index_of(column)
            .and_then(|index| row.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Locates each canonical column among the headers with the same
/// bidirectional containment rule the detector scores with. The first
/// matching header wins.
pub fn map_columns(headers: &[String], language: Language, kind: TemplateKind) -> ColumnMap {
    let canonical = signature_for(language).columns(kind);
    let cells: Vec<String> = headers
        .iter()
        .map(|cell| cell.trim().to_lowercase())
        .collect();

    let indices = canonical
        .iter()
        .map(|column| {
            let column = column.to_lowercase();
            cells
                .iter()
                .position(|cell| !cell.is_empty() && column_matches(cell, &column))
        })
        .collect();

    ColumnMap { indices }
}

// trade signature column order
const TRADE_CODE: usize = 0;
const TRADE_TYPE: usize = 1;
const TRADE_DATE: usize = 2;
const TRADE_NAV: usize = 3;
const TRADE_SHARES: usize = 4;
const TRADE_AMOUNT: usize = 5;
const TRADE_FEE: usize = 6;
const TRADE_PRINCIPAL: usize = 7;

// holding signature column order
const HOLDING_CODE: usize = 0;
const HOLDING_NAME: usize = 1;
const HOLDING_TYPE: usize = 2;
const HOLDING_INCEPTION: usize = 3;
const HOLDING_SHORT_NAME: usize = 4;

pub fn extract_trades(rows: &[Vec<String>], language: Language) -> Vec<TradeRecord> {
    let Some((headers, data)) = rows.split_first() else {
        return Vec::new();
    };
    let map = map_columns(headers, language, TemplateKind::Trade);

    let mut records = Vec::new();
    for row in data {
        let code = map.value(row, TRADE_CODE).trim().to_string();
        if code.is_empty() || is_summary_label(&code) {
            continue;
        }
        records.push(TradeRecord {
            code,
            trade_type: map.value(row, TRADE_TYPE).trim().to_string(),
            trade_date: parse_date(map.value(row, TRADE_DATE)),
            nav: parse_amount(map.value(row, TRADE_NAV)),
            shares: parse_amount(map.value(row, TRADE_SHARES)),
            amount: parse_amount(map.value(row, TRADE_AMOUNT)),
            fee: parse_amount(map.value(row, TRADE_FEE)),
            principal: parse_amount(map.value(row, TRADE_PRINCIPAL)),
        });
    }
    records
}

pub fn extract_holdings(rows: &[Vec<String>], language: Language) -> Vec<HoldingRecord> {
    let Some((headers, data)) = rows.split_first() else {
        return Vec::new();
    };
    let map = map_columns(headers, language, TemplateKind::Holding);

    let mut records = Vec::new();
    for row in data {
        let code = map.value(row, HOLDING_CODE).trim().to_string();
        if code.is_empty() || is_summary_label(&code) {
            continue;
        }
        records.push(HoldingRecord {
            code,
            name: map.value(row, HOLDING_NAME).trim().to_string(),
            fund_type: map.value(row, HOLDING_TYPE).trim().to_string(),
            inception_date: parse_date(map.value(row, HOLDING_INCEPTION)),
            short_name: map.value(row, HOLDING_SHORT_NAME).trim().to_string(),
        });
    }
    records
}

fn is_summary_label(value: &str) -> bool {
    ["合计", "总计", "小计", "Total", "Totale"]
        .iter()
        .any(|token| value.contains(token))
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    None
}
