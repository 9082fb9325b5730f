use crate::domain::entities::template::{Language, TemplateKind};

/// Canonical column vocabulary for one template language. Declaration
/// order in [`SIGNATURES`] doubles as the tie-break order for detection.
pub struct TemplateSignature {
    pub language: Language,
    pub trade_columns: &'static [&'static str],
    pub holding_columns: &'static [&'static str],
}

impl TemplateSignature {
    pub fn columns(&self, kind: TemplateKind) -> &'static [&'static str] {
        match kind {
            TemplateKind::Trade => self.trade_columns,
            TemplateKind::Holding => self.holding_columns,
        }
    }
}

pub const SIGNATURES: &[TemplateSignature] = &[
    TemplateSignature {
        language: Language::En,
        trade_columns: &[
            "Code",
            "Trade Type",
            "Trade Date",
            "NAV Per Unit",
            "Trade Shares",
            "Trade Amount",
            "Trade Fee",
            "Gross Amount",
        ],
        holding_columns: &["Code", "Name", "Type", "Setup Date", "Short Name"],
    },
    TemplateSignature {
        language: Language::Zh,
        trade_columns: &[
            "持仓代码",
            "交易类型",
            "交易日期",
            "单位净值",
            "交易份数",
            "交易金额",
            "交易费用",
            "交易本金",
        ],
        holding_columns: &["基金代码", "基金名称", "基金类型", "成立日期", "基金简称"],
    },
    TemplateSignature {
        language: Language::It,
        trade_columns: &[
            "Codice",
            "Tipo di Transazione",
            "Data di Transazione",
            "NAV per Quota",
            "Quote Scambiate",
            "Importo",
            "Commissione",
            "Importo Lordo",
        ],
        holding_columns: &["Codice", "Nome", "Tipo", "Data di Costituzione", "Nome Breve"],
    },
];

pub fn signature_for(language: Language) -> &'static TemplateSignature {
    SIGNATURES
        .iter()
        .find(|signature| signature.language == language)
        .unwrap_or(&SIGNATURES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_signature_has_columns_for_both_kinds() {
        for signature in SIGNATURES {
            assert!(
                !signature.trade_columns.is_empty(),
                "{} trade columns should not be empty",
                signature.language
            );
            assert!(
                !signature.holding_columns.is_empty(),
                "{} holding columns should not be empty",
                signature.language
            );
        }
    }

    #[test]
    fn default_language_is_declared_first() {
        assert_eq!(
            SIGNATURES[0].language,
            Language::default(),
            "fallback language should win all-zero ties by declaration order"
        );
    }

    #[test]
    fn signature_lookup_finds_every_language() {
        for language in [Language::En, Language::Zh, Language::It] {
            assert_eq!(signature_for(language).language, language);
        }
    }
}
