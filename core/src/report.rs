//! Report assembly: maps the day's query results onto the template's
//! named placeholders.
//!
//! Placeholder keys are fixed by the email template:
//!   -cash-sales-, -credit-sales-,
//!   -customer-{rank}-name-, -customer-{rank}-sales-,
//!   -product-{rank}-name-,  -product-{rank}-sales-
//! with ranks 1-indexed. Keys are unique within one report.

use crate::{currency::CurrencyFormatter, error::ReportResult, store::SalesStore};
use serde::Serialize;

/// One placeholder binding sent to the email template engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Substitution {
    pub key: String,
    pub value: String,
}

impl Substitution {
    fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

pub struct ReportBuilder<'a> {
    store: &'a SalesStore,
    formatter: CurrencyFormatter,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(store: &'a SalesStore, formatter: CurrencyFormatter) -> Self {
        Self { store, formatter }
    }

    /// Build the full ordered substitution set for today's report.
    ///
    /// Channel totals come first, then customers, then products. Each
    /// ranked entity contributes a name substitution immediately
    /// followed by its formatted sales value. Missing ranks are simply
    /// absent, never padded with empty placeholders.
    pub fn build_substitutions(&self) -> ReportResult<Vec<Substitution>> {
        let mut subs = Vec::new();

        subs.push(Substitution::new(
            "-cash-sales-",
            self.formatter.format(self.store.cash_sales()?),
        ));
        subs.push(Substitution::new(
            "-credit-sales-",
            self.formatter.format(self.store.credit_sales()?),
        ));

        for (i, customer) in self.store.top_customers()?.iter().enumerate() {
            let rank = i + 1;
            subs.push(Substitution::new(
                format!("-customer-{rank}-name-"),
                customer.name.clone(),
            ));
            subs.push(Substitution::new(
                format!("-customer-{rank}-sales-"),
                self.formatter.format(Some(customer.amount)),
            ));
        }

        for (i, product) in self.store.top_products()?.iter().enumerate() {
            let rank = i + 1;
            subs.push(Substitution::new(
                format!("-product-{rank}-name-"),
                product.name.clone(),
            ));
            subs.push(Substitution::new(
                format!("-product-{rank}-sales-"),
                self.formatter.format(Some(product.amount)),
            ));
        }

        log::debug!("report contains {} substitutions", subs.len());
        Ok(subs)
    }
}
