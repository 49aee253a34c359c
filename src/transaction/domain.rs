//! Core transaction domain types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    category::{CategoryId, CategoryType},
    dates::{iso_date, parse_iso_date},
    listing::SortColumn,
    project::ProjectId,
};

/// The currencies a transaction can be entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    /// Turkish lira, labelled "TL" in forms.
    #[default]
    #[serde(rename = "TRY")]
    Try,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Try, Currency::Usd, Currency::Eur];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Try => "TRY",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Currency::Try => "TL",
            other => other.code(),
        }
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TRY" => Ok(Currency::Try),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(Error::InvalidCurrency(other.to_owned())),
        }
    }
}

/// Identifier the API assigns to a transaction.
pub type TransactionId = i64;

/// An income or expense as the API returns it.
///
/// `tl_total` is the amount in Turkish lira, which the API works out from the
/// exchange rate on the transaction date.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub transaction_type: CategoryType,
    pub project_id: ProjectId,
    pub category_id: CategoryId,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub date: String,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tl_total: Option<f64>,
}

/// The JSON body for creating or updating a transaction.
#[derive(Debug, PartialEq, Serialize)]
pub struct TransactionBody {
    #[serde(rename = "type")]
    pub transaction_type: CategoryType,
    pub project_id: ProjectId,
    pub category_id: CategoryId,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub amount: f64,
    pub currency: Currency,
    pub description: Option<String>,
}

/// The raw values of the add and edit transaction forms.
///
/// Every field is text so that an unselected drop-down or an empty input
/// reaches [TransactionFormData::validate] instead of failing to deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionFormData {
    #[serde(rename = "type", default)]
    pub transaction_type: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub description: String,
}

impl TransactionFormData {
    /// Check the form before anything is sent to the API.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingTransactionFields] if the project, category or
    /// date is missing or the amount is missing or zero.
    pub fn validate(&self) -> Result<TransactionBody, Error> {
        let transaction_type = self.transaction_type.parse()?;
        let currency = self.currency.parse()?;

        let project_id = parse_id(&self.project_id);
        let category_id = parse_id(&self.category_id);
        let date = parse_iso_date(&self.date);
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount != 0.0);

        let (Some(project_id), Some(category_id), Some(date), Some(amount)) =
            (project_id, category_id, date, amount)
        else {
            return Err(Error::MissingTransactionFields);
        };

        let description = self.description.trim();

        Ok(TransactionBody {
            transaction_type,
            project_id,
            category_id,
            date,
            amount,
            currency,
            description: (!description.is_empty()).then(|| description.to_owned()),
        })
    }
}

fn parse_id(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// The columns the transaction list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionSortColumn {
    #[default]
    Id,
    Type,
    ProjectName,
    CategoryName,
    Date,
    Amount,
    Currency,
    TlTotal,
}

impl SortColumn for TransactionSortColumn {
    fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::Id),
            "type" => Some(Self::Type),
            "project_name" => Some(Self::ProjectName),
            "category_name" => Some(Self::CategoryName),
            "date" => Some(Self::Date),
            "amount" => Some(Self::Amount),
            "currency" => Some(Self::Currency),
            "tl_total" => Some(Self::TlTotal),
            _ => None,
        }
    }

    fn as_query_value(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Type => "type",
            Self::ProjectName => "project_name",
            Self::CategoryName => "category_name",
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Currency => "currency",
            Self::TlTotal => "tl_total",
        }
    }
}
