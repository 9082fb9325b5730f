use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::entities::record::{HoldingRecord, TradeRecord};
use crate::domain::entities::template::{Language, TemplateKind};
use crate::infra::import::detect::{detect_from_rows, detect_template_language};
use crate::infra::import::mapping::{extract_holdings, extract_trades};
use crate::infra::import::open_source;

#[derive(Debug, Clone, PartialEq)]
pub struct TradeImport {
    pub language: Language,
    pub trades: Vec<TradeRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoldingImport {
    pub language: Language,
    pub holdings: Vec<HoldingRecord>,
}

#[derive(Debug, Default)]
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    /// Never fails: an unreadable template reports the default language.
    pub fn detect_language(&self, path: &Path, kind: TemplateKind) -> Language {
        detect_template_language(open_source(path).as_mut(), kind)
    }

    pub fn import_trades(&self, path: &Path) -> Result<TradeImport> {
        let rows = open_source(path)
            .read_rows()
            .with_context(|| format!("failed to read trade template: {}", path.display()))?;

        let language = detect_from_rows(&rows, TemplateKind::Trade);
        let trades = extract_trades(&rows, language);
        info!(
            template = %path.display(),
            language = %language,
            count = trades.len(),
            "imported trade template"
        );

        Ok(TradeImport { language, trades })
    }

    pub fn import_holdings(&self, path: &Path) -> Result<HoldingImport> {
        let rows = open_source(path)
            .read_rows()
            .with_context(|| format!("failed to read holding template: {}", path.display()))?;

        let language = detect_from_rows(&rows, TemplateKind::Holding);
        let holdings = extract_holdings(&rows, language);
        info!(
            template = %path.display(),
            language = %language,
            count = holdings.len(),
            "imported holding template"
        );

        Ok(HoldingImport { language, holdings })
    }
}
