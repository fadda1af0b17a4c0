//! Line item domain type.

use daftar_shared::types::{ItemId, UnitId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tax::TaxCode;

use super::types::LineDerived;

/// One purchasable/sellable unit entry on an invoice or return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog item reference, zero when unselected.
    pub item_id: ItemId,
    /// Unit of measure reference, zero when unselected.
    pub unit_id: UnitId,
    /// Entered quantity. Ignored by return flows, which treat every line
    /// as one unit.
    pub quantity: Decimal,
    /// Cost (purchase flows) or price (sales flows) per unit.
    pub unit_amount: Decimal,
    /// VAT code; `None` means no tax line at all.
    pub tax_code: Option<TaxCode>,
    /// Whether `unit_amount` already contains the tax component.
    pub tax_included: bool,
    /// Derived amounts, refreshed on every recompute.
    pub derived: LineDerived,
}

impl LineItem {
    /// Creates a fresh row with the entry-form defaults: one unit of
    /// nothing, untaxed, tax-exclusive.
    #[must_use]
    pub fn new() -> Self {
        Self {
            item_id: ItemId::default(),
            unit_id: UnitId::default(),
            quantity: Decimal::ONE,
            unit_amount: Decimal::ZERO,
            tax_code: None,
            tax_included: false,
            derived: LineDerived::default(),
        }
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}
