//! Import side of a personal fund/holdings tracker: detects which language
//! an uploaded trade/holding template is written in, maps its columns, and
//! extracts typed records, plus the formatting helpers the tracker's UI
//! uses to render amounts.

pub mod domain;
pub mod format;
pub mod infra;
pub mod usecase;

pub use domain::entities::record::{HoldingRecord, TradeRecord};
pub use domain::entities::template::{Language, TemplateKind};
pub use format::{format_amount, format_percent, parse_amount, trend_class};
pub use infra::import::csv::{read_csv_rows, CsvSource};
pub use infra::import::detect::{detect_from_rows, detect_template_language, header_match_score};
pub use infra::import::mapping::{extract_holdings, extract_trades, map_columns, ColumnMap};
pub use infra::import::open_source;
pub use infra::import::signature::{signature_for, TemplateSignature, SIGNATURES};
pub use infra::import::xlsx::{read_xlsx_rows, XlsxSource};
pub use usecase::ports::source::{SourceError, TableSource};
pub use usecase::services::import_service::{HoldingImport, ImportService, TradeImport};
