use serde::{Deserialize, Serialize};

/// One month of a sales line.
///
/// The month is kept as the raw code from the data file so that lines with
/// an unexpected code still count toward totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthEntry {
    #[serde(rename = "mes", alias = "month")]
    pub month: String,
    #[serde(rename = "qtde", alias = "quantity", default)]
    pub quantity: f64,
    #[serde(rename = "valor", alias = "amount", default)]
    pub amount: f64,
}

/// Sales line for a UF / client / product combination across months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "uf", alias = "state")]
    pub state: String,
    #[serde(rename = "cliente", alias = "client")]
    pub client: String,
    #[serde(rename = "produto", alias = "product")]
    pub product: String,
    #[serde(rename = "meses", alias = "months", default)]
    pub months: Vec<MonthEntry>,
}

impl SalesRecord {
    pub fn total_amount(&self) -> f64 {
        self.months.iter().map(|m| m.amount).sum()
    }

    pub fn total_quantity(&self) -> f64 {
        self.months.iter().map(|m| m.quantity).sum()
    }
}

/// Calendar month, identified in the data by its Portuguese three-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Jan,
    Fev,
    Mar,
    Abr,
    Mai,
    Jun,
    Jul,
    Ago,
    Set,
    Out,
    Nov,
    Dez,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Fev,
        Month::Mar,
        Month::Abr,
        Month::Mai,
        Month::Jun,
        Month::Jul,
        Month::Ago,
        Month::Set,
        Month::Out,
        Month::Nov,
        Month::Dez,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Fev => "fev",
            Month::Mar => "mar",
            Month::Abr => "abr",
            Month::Mai => "mai",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Ago => "ago",
            Month::Set => "set",
            Month::Out => "out",
            Month::Nov => "nov",
            Month::Dez => "dez",
        }
    }

    /// Full month name shown on charts and selects
    pub fn label(&self) -> &'static str {
        match self {
            Month::Jan => "Janeiro",
            Month::Fev => "Fevereiro",
            Month::Mar => "Março",
            Month::Abr => "Abril",
            Month::Mai => "Maio",
            Month::Jun => "Junho",
            Month::Jul => "Julho",
            Month::Ago => "Agosto",
            Month::Set => "Setembro",
            Month::Out => "Outubro",
            Month::Nov => "Novembro",
            Month::Dez => "Dezembro",
        }
    }

    pub fn from_code(code: &str) -> Option<Month> {
        let code = code.trim().to_lowercase();
        Month::ALL.into_iter().find(|m| m.code() == code)
    }

    /// Canonical code for a raw one (`" JAN"` -> `"jan"`); unknown codes are kept as is.
    ///
    /// Every comparison between month codes goes through this.
    pub fn normalize_code(code: &str) -> String {
        Month::from_code(code)
            .map(|m| m.code().to_string())
            .unwrap_or_else(|| code.to_string())
    }

    /// Label for a raw month code, falling back to the code itself
    pub fn label_for_code(code: &str) -> String {
        Month::from_code(code)
            .map(|m| m.label().to_string())
            .unwrap_or_else(|| code.to_string())
    }
}
