//! Purchase-level business rules, applied to aggregated totals.

use crate::config::PurchaseRules;
use crate::error::{PurchaseError, Result};
use crate::pricing::TicketTotals;

impl PurchaseRules {
    /// Checks the totals against the rules, in order: an adult is present,
    /// the party is within the size limit, the infant ratio holds.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidPurchase`] for the first rule broken.
    pub fn check(&self, totals: &TicketTotals) -> Result<()> {
        if totals.adults == 0 {
            return Err(PurchaseError::invalid_purchase(
                "At least one adult ticket is required",
            ));
        }

        if totals.total_tickets > self.max_tickets_per_purchase {
            return Err(PurchaseError::invalid_purchase(format!(
                "Maximum of {} tickets can be purchased",
                self.max_tickets_per_purchase
            )));
        }

        // adults >= 1 here, so the ratio is well-defined
        let allowed_infants =
            u64::from(totals.adults) * u64::from(self.max_infants_per_adult);
        if u64::from(totals.infants) > allowed_infants {
            return Err(PurchaseError::invalid_purchase(format!(
                "Maximum of {} infants per adult allowed",
                self.max_infants_per_adult
            )));
        }

        Ok(())
    }
}
