//! Cart pricing calculations.

use crate::cart::CartLine;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Shipping and tax rules used to derive cart totals. Amounts are USD cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingPolicy {
    /// Subtotals strictly above this ship free.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold_cents: i64,
    /// Flat shipping fee below the threshold.
    #[serde(default = "default_flat_shipping")]
    pub flat_shipping_cents: i64,
    /// Sales tax in basis points (800 = 8%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate_bps: u32,
}

fn default_free_shipping_threshold() -> i64 {
    10_000
}

fn default_flat_shipping() -> i64 {
    999
}

fn default_tax_rate() -> u32 {
    800
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold_cents: default_free_shipping_threshold(),
            flat_shipping_cents: default_flat_shipping(),
            tax_rate_bps: default_tax_rate(),
        }
    }
}

impl PricingPolicy {
    pub fn free_shipping_threshold(&self) -> Money {
        Money::usd(self.free_shipping_threshold_cents)
    }

    /// Free above the threshold, flat fee otherwise (including exactly at it).
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal.amount_cents > self.free_shipping_threshold_cents {
            Money::zero(Currency::USD)
        } else {
            Money::usd(self.flat_shipping_cents)
        }
    }

    /// Tax on the subtotal, rounded to the cent.
    pub fn tax_for(&self, subtotal: Money) -> Money {
        subtotal.apply_rate_bps(self.tax_rate_bps)
    }

    /// Derive totals from cart lines.
    ///
    /// An empty slice still pays the flat shipping fee. Only a cleared cart
    /// carries all-zero totals, see [`CartTotals::zero`].
    pub fn totals_for(&self, lines: &[CartLine]) -> CartTotals {
        let line_totals: Vec<Money> = lines.iter().map(CartLine::line_total).collect();
        let subtotal = Money::sum(line_totals.iter(), Currency::USD);
        let shipping = self.shipping_for(subtotal);
        let tax = self.tax_for(subtotal);

        CartTotals {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// Derived totals of a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of price x quantity over all lines.
    pub subtotal: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Sales tax.
    pub tax: Money,
    /// subtotal + shipping + tax.
    pub total: Money,
}

impl CartTotals {
    /// Totals of a new or cleared cart.
    pub fn zero() -> Self {
        Self {
            subtotal: Money::zero(Currency::USD),
            shipping: Money::zero(Currency::USD),
            tax: Money::zero(Currency::USD),
            total: Money::zero(Currency::USD),
        }
    }

    /// Check if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.subtotal.is_zero() && self.shipping.is_zero() && self.tax.is_zero() && self.total.is_zero()
    }

    pub fn has_free_shipping(&self) -> bool {
        !self.subtotal.is_zero() && self.shipping.is_zero()
    }
}

impl Default for CartTotals {
    fn default() -> Self {
        Self::zero()
    }
}
