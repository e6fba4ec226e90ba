// Wire shape of one expense record.
//
// Field keys and category labels follow the records already in the shared
// realtime database; the read side coerces them leniently.

use crate::shared::core::coerce::{lenient_f64, lenient_string};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Alimentação")]
    Food,
    #[serde(rename = "Hospedagem")]
    Lodging,
    #[serde(rename = "Transporte")]
    Transport,
    #[default]
    #[serde(rename = "Outros")]
    Other,
}

impl ExpenseCategory {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Alimentação" => Self::Food,
            "Hospedagem" => Self::Lodging,
            "Transporte" => Self::Transport,
            _ => Self::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Alimentação",
            Self::Lodging => "Hospedagem",
            Self::Transport => "Transporte",
            Self::Other => "Outros",
        }
    }
}

fn lenient_category<'de, D>(deserializer: D) -> Result<ExpenseCategory, D::Error>
where
    D: Deserializer<'de>,
{
    let label = lenient_string(deserializer)?;
    Ok(label
        .as_deref()
        .map(ExpenseCategory::from_label)
        .unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "descricao", default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(rename = "categoria", default, deserialize_with = "lenient_category")]
    pub category: ExpenseCategory,
    #[serde(rename = "valor", default, deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    #[serde(rename = "data", default, deserialize_with = "lenient_string")]
    pub spent_on: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: Option<String>,
}

impl Expense {
    /// Read one store record; a non-object member degrades to defaults.
    pub fn from_record(record: &Json) -> Self {
        serde_json::from_value(record.clone()).unwrap_or_default()
    }
}
