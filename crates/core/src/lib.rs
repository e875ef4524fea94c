use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Ils,
    Gbp,
    Euro,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Ils, Currency::Gbp, Currency::Euro];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ils => "ILS",
            Currency::Gbp => "GBP",
            Currency::Euro => "EURO",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.as_str() == value)
            .ok_or_else(|| UnknownCurrency(value.to_string()))
    }
}

/// Caller-supplied fields of a cost entry. This is also the shape echoed
/// back after a successful insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInput {
    pub sum: f64,
    pub currency: Currency,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A persisted cost entry.
///
/// `year`, `month` and `day` are taken from the local calendar date of
/// `date_added` when the row is inserted and are never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub id: i64,
    pub sum: f64,
    pub currency: Currency,
    pub category: String,
    pub description: Option<String>,
    pub date_added: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CostRecord {
    pub fn summary(&self) -> CostInput {
        CostInput {
            sum: self.sum,
            currency: self.currency,
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }

    pub fn item(&self) -> CostItem {
        CostItem {
            sum: self.sum,
            currency: self.currency,
            category: self.category.clone(),
            description: self.description.clone(),
            date: CostDate { day: self.day },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostDate {
    pub day: u32,
}

/// One row of the monthly table. `sum` stays in the currency it was
/// recorded in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub sum: f64,
    pub currency: Currency,
    pub category: String,
    pub description: Option<String>,
    pub date: CostDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportTotal {
    pub currency: Currency,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthReport {
    pub year: i32,
    pub month: u32,
    pub costs: Vec<CostItem>,
    pub total: ReportTotal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTotal {
    pub month: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateTableError {
    #[error("rate table is missing {0}")]
    Missing(Currency),
    #[error("rate for {currency} must be a positive number, got {value}")]
    InvalidFactor { currency: Currency, value: f64 },
    #[error("USD must map to 1, got {0}")]
    UsdNotPivot(f64),
}

/// Exchange factors relative to USD.
///
/// Every table holds a finite positive factor for each [`Currency`] and
/// maps USD to exactly 1, so lookups never fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawRateTable",
    into = "BTreeMap<Currency, f64>"
)]
pub struct RateTable {
    ils: f64,
    gbp: f64,
    euro: f64,
}

impl RateTable {
    pub fn new(ils: f64, gbp: f64, euro: f64) -> Result<Self, RateTableError> {
        let table = Self { ils, gbp, euro };
        for currency in [Currency::Ils, Currency::Gbp, Currency::Euro] {
            let value = table.rate(currency);
            if !value.is_finite() || value <= 0.0 {
                return Err(RateTableError::InvalidFactor { currency, value });
            }
        }
        Ok(table)
    }

    /// Static rates used whenever the live source cannot be used.
    pub fn fallback() -> Self {
        Self {
            ils: 3.4,
            gbp: 0.6,
            euro: 0.7,
        }
    }

    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => 1.0,
            Currency::Ils => self.ils,
            Currency::Gbp => self.gbp,
            Currency::Euro => self.euro,
        }
    }
}

/// Wire shape of a rate table. Keys other than the four codes are ignored,
/// so sources may carry metadata such as `base` or `date`.
#[derive(Debug, Deserialize)]
struct RawRateTable {
    #[serde(rename = "USD")]
    usd: Option<f64>,
    #[serde(rename = "ILS")]
    ils: Option<f64>,
    #[serde(rename = "GBP")]
    gbp: Option<f64>,
    #[serde(rename = "EURO")]
    euro: Option<f64>,
}

impl TryFrom<RawRateTable> for RateTable {
    type Error = RateTableError;

    fn try_from(raw: RawRateTable) -> Result<Self, Self::Error> {
        let usd = raw.usd.ok_or(RateTableError::Missing(Currency::Usd))?;
        if usd != 1.0 {
            return Err(RateTableError::UsdNotPivot(usd));
        }
        Self::new(
            raw.ils.ok_or(RateTableError::Missing(Currency::Ils))?,
            raw.gbp.ok_or(RateTableError::Missing(Currency::Gbp))?,
            raw.euro.ok_or(RateTableError::Missing(Currency::Euro))?,
        )
    }
}

impl From<RateTable> for BTreeMap<Currency, f64> {
    fn from(table: RateTable) -> Self {
        Currency::ALL
            .into_iter()
            .map(|currency| (currency, table.rate(currency)))
            .collect()
    }
}

/// Converts `amount` from one currency to another through USD.
pub fn convert(amount: f64, from: Currency, to: Currency, rates: &RateTable) -> f64 {
    if from == to {
        return amount;
    }
    amount / rates.rate(from) * rates.rate(to)
}

pub fn month_report(
    year: i32,
    month: u32,
    currency: Currency,
    records: &[CostRecord],
    rates: &RateTable,
) -> MonthReport {
    let costs = records.iter().map(CostRecord::item).collect();
    let total = records
        .iter()
        .map(|record| convert(record.sum, record.currency, currency, rates))
        .sum();
    MonthReport {
        year,
        month,
        costs,
        total: ReportTotal { currency, total },
    }
}

/// Sums converted amounts per category, keeping the order in which each
/// category first appears in `records`.
pub fn category_totals(
    records: &[CostRecord],
    currency: Currency,
    rates: &RateTable,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let value = convert(record.sum, record.currency, currency, rates);
        match positions.get(record.category.as_str()) {
            Some(&index) => totals[index].value += value,
            None => {
                positions.insert(record.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    name: record.category.clone(),
                    value,
                });
            }
        }
    }
    totals
}

/// Twelve calendar-ordered buckets, zero when a month has no records.
pub fn monthly_totals(
    records: &[CostRecord],
    currency: Currency,
    rates: &RateTable,
) -> Vec<MonthTotal> {
    let mut slots = [0.0_f64; 12];
    for record in records {
        let slot = usize::try_from(record.month)
            .ok()
            .and_then(|month| month.checked_sub(1))
            .and_then(|index| slots.get_mut(index));
        if let Some(slot) = slot {
            *slot += convert(record.sum, record.currency, currency, rates);
        }
    }
    MONTH_LABELS
        .iter()
        .zip(slots)
        .map(|(label, total)| MonthTotal {
            month: (*label).to_string(),
            total,
        })
        .collect()
}
