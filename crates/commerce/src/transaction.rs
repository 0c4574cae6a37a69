use serde::{Deserialize, Serialize};

use telecart_core::ValueObject;

/// Metadata identifying a completed transaction.
///
/// Purchase and refund require a non-blank transaction id; everything else
/// is optional context forwarded to the backend. Monetary amounts are in
/// the smallest currency unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionAttributes {
    #[serde(rename = "ti", default, skip_serializing_if = "Option::is_none")]
    transaction_id: Option<String>,
    #[serde(rename = "tr", default, skip_serializing_if = "Option::is_none")]
    revenue: Option<i64>,
    #[serde(rename = "tt", default, skip_serializing_if = "Option::is_none")]
    tax: Option<i64>,
    #[serde(rename = "tsh", default, skip_serializing_if = "Option::is_none")]
    shipping: Option<i64>,
    #[serde(rename = "tcc", default, skip_serializing_if = "Option::is_none")]
    coupon_code: Option<String>,
    #[serde(rename = "ta", default, skip_serializing_if = "Option::is_none")]
    affiliation: Option<String>,
}

impl TransactionAttributes {
    pub fn new(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: Some(transaction_id.into()),
            ..Self::default()
        }
    }

    pub fn with_revenue(mut self, revenue: i64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn with_tax(mut self, tax: i64) -> Self {
        self.tax = Some(tax);
        self
    }

    pub fn with_shipping(mut self, shipping: i64) -> Self {
        self.shipping = Some(shipping);
        self
    }

    pub fn with_coupon_code(mut self, coupon_code: impl Into<String>) -> Self {
        self.coupon_code = Some(coupon_code.into());
        self
    }

    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn revenue(&self) -> Option<i64> {
        self.revenue
    }

    pub fn tax(&self) -> Option<i64> {
        self.tax
    }

    pub fn shipping(&self) -> Option<i64> {
        self.shipping
    }

    pub fn coupon_code(&self) -> Option<&str> {
        self.coupon_code.as_deref()
    }

    pub fn affiliation(&self) -> Option<&str> {
        self.affiliation.as_deref()
    }

    /// True when a usable (non-blank) transaction id is present.
    pub fn has_transaction_id(&self) -> bool {
        self.transaction_id()
            .is_some_and(|id| !id.trim().is_empty())
    }
}

impl ValueObject for TransactionAttributes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_transaction_id() {
        let attributes = TransactionAttributes::default();
        assert_eq!(attributes.transaction_id(), None);
        assert!(!attributes.has_transaction_id());
    }

    #[test]
    fn blank_transaction_id_is_unusable() {
        assert!(!TransactionAttributes::new("   ").has_transaction_id());
        assert!(TransactionAttributes::new("txn-1").has_transaction_id());
    }

    #[test]
    fn setters_chain() {
        let attributes = TransactionAttributes::new("txn-1")
            .with_revenue(12_50)
            .with_tax(110)
            .with_shipping(0)
            .with_coupon_code("SPRING")
            .with_affiliation("web");

        assert_eq!(attributes.transaction_id(), Some("txn-1"));
        assert_eq!(attributes.revenue(), Some(1250));
        assert_eq!(attributes.tax(), Some(110));
        assert_eq!(attributes.shipping(), Some(0));
        assert_eq!(attributes.coupon_code(), Some("SPRING"));
        assert_eq!(attributes.affiliation(), Some("web"));
    }

    #[test]
    fn unset_fields_are_omitted_from_the_wire() {
        let json: serde_json::Value =
            serde_json::to_value(TransactionAttributes::new("txn-1")).unwrap();
        assert_eq!(json["ti"], "txn-1");
        assert!(json.get("tr").is_none());
        assert!(json.get("tcc").is_none());
    }
}
