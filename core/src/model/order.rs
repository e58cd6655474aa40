use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw order as returned by the commerce API's order resource.
///
/// Monetary and quantity fields stay as loose JSON values: the API sends
/// decimal strings ("100.00"), but numbers and nulls show up too, and a bad
/// field must not reject the whole order. They are read through
/// [`NumericField`] when an order is folded into its group. The nested
/// customer and line items are [`Lenient`] for the same reason.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Order {
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub customer: Option<Lenient<Customer>>,

    #[serde(default)]
    pub total_price: Option<Value>,
    #[serde(default)]
    pub total_discounts: Option<Value>,
    #[serde(default)]
    pub current_subtotal_price: Option<Value>,
    #[serde(default)]
    pub current_total_price: Option<Value>,
    #[serde(default)]
    pub total_tax: Option<Value>,
    #[serde(default)]
    pub total_duties: Option<Value>,

    // Only `shop_money.amount` inside this object is read as shipping.
    #[serde(default)]
    pub total_shipping_price_set: Option<Value>,

    #[serde(default)]
    pub line_items: Option<Lenient<Vec<Lenient<LineItem>>>>,
}

/// A nested value that either has the expected shape or is kept as raw JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Lenient<T> {
    Parsed(T),
    Malformed(Value),
}

impl<T> Lenient<T> {
    pub fn parsed(&self) -> Option<&T> {
        match self {
            Lenient::Parsed(value) => Some(value),
            Lenient::Malformed(_) => None,
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Lenient::Parsed(value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Customer {
    #[serde(default)]
    pub orders_count: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LineItem {
    #[serde(default)]
    pub quantity: Option<Value>,
}

impl Order {
    /// Shipping charged in the shop's currency, if the nested price set carries one.
    pub fn shipping_amount(&self) -> Option<&Value> {
        self.total_shipping_price_set
            .as_ref()?
            .get("shop_money")?
            .get("amount")
    }

    /// Lifetime order count of the customer, as reported on this order.
    /// A customer that is not an object reads as unparseable.
    pub fn lifetime_orders(&self) -> NumericField {
        match &self.customer {
            None => NumericField::Missing,
            Some(Lenient::Parsed(customer)) => NumericField::read(customer.orders_count.as_ref()),
            Some(Lenient::Malformed(raw)) => NumericField::Unparseable(raw.to_string()),
        }
    }

    /// Line items as listed; an entry that is not an object is `Malformed`.
    pub fn line_items(&self) -> &[Lenient<LineItem>] {
        match &self.line_items {
            Some(Lenient::Parsed(items)) => items,
            _ => &[],
        }
    }

    /// The raw `line_items` value when it is present but not a list.
    pub fn malformed_line_items(&self) -> Option<&Value> {
        match &self.line_items {
            Some(Lenient::Malformed(raw)) => Some(raw),
            _ => None,
        }
    }
}

/// Outcome of reading one numeric field off an order.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericField {
    Value(f64),
    /// Absent, null or an empty string.
    Missing,
    /// Present but not a finite number; carries the raw text.
    Unparseable(String),
}

impl NumericField {
    pub fn read(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => NumericField::Missing,
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v.is_finite() => NumericField::Value(v),
                _ => NumericField::Unparseable(n.to_string()),
            },
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return NumericField::Missing;
                }
                match trimmed.parse::<f64>() {
                    Ok(v) if v.is_finite() => NumericField::Value(v),
                    _ => NumericField::Unparseable(s.clone()),
                }
            }
            Some(other) => NumericField::Unparseable(other.to_string()),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            NumericField::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_field_read() {
        assert_eq!(NumericField::read(Some(&json!("100.00"))), NumericField::Value(100.0));
        assert_eq!(NumericField::read(Some(&json!(12.5))), NumericField::Value(12.5));
        assert_eq!(NumericField::read(Some(&json!(" 3 "))), NumericField::Value(3.0));
        assert_eq!(NumericField::read(Some(&json!("-4.5"))), NumericField::Value(-4.5));
        assert_eq!(NumericField::read(None), NumericField::Missing);
        assert_eq!(NumericField::read(Some(&Value::Null)), NumericField::Missing);
        assert_eq!(NumericField::read(Some(&json!(""))), NumericField::Missing);
        assert_eq!(
            NumericField::read(Some(&json!("not-a-number"))),
            NumericField::Unparseable("not-a-number".to_string())
        );
        assert_eq!(
            NumericField::read(Some(&json!("NaN"))),
            NumericField::Unparseable("NaN".to_string())
        );
        assert!(matches!(NumericField::read(Some(&json!({"amount": "1"}))), NumericField::Unparseable(_)));
    }

    #[test]
    fn test_deserialize_api_order() {
        let raw = json!({
            "id": 450789469,
            "created_at": "2024-01-15T10:00:00-05:00",
            "total_price": "100.00",
            "total_discounts": "10.00",
            "current_subtotal_price": "90.00",
            "total_tax": "9.00",
            "current_total_price": "99.00",
            "customer": {"id": 207119551, "orders_count": 1},
            "line_items": [{"quantity": 2, "title": "Shirt"}],
            "total_shipping_price_set": {
                "shop_money": {"amount": "5.00", "currency_code": "USD"},
                "presentment_money": {"amount": "6.80", "currency_code": "CAD"}
            }
        });

        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(order.created_at.as_deref(), Some("2024-01-15T10:00:00-05:00"));
        assert_eq!(order.lifetime_orders(), NumericField::Value(1.0));
        assert_eq!(order.shipping_amount(), Some(&json!("5.00")));
        assert_eq!(order.line_items().len(), 1);
        assert_eq!(order.total_duties, None);
    }

    #[test]
    fn test_flat_shipping_is_not_read() {
        let raw = json!({
            "created_at": "2024-01-15T10:00:00Z",
            "total_shipping_price": "5.00",
            "line_items": null
        });

        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(order.shipping_amount(), None);
        assert!(order.line_items().is_empty());
        assert_eq!(order.lifetime_orders(), NumericField::Missing);
    }

    #[test]
    fn test_wrong_shapes_do_not_reject_the_order() {
        let raw = json!({
            "created_at": "2024-06-01T10:00:00Z",
            "customer": "guest",
            "line_items": [{"quantity": 2}, null, "gift-card"]
        });

        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(
            order.lifetime_orders(),
            NumericField::Unparseable("\"guest\"".to_string())
        );
        let items = order.line_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].parsed(), Some(&LineItem { quantity: Some(json!(2)) }));
        assert_eq!(items[1], Lenient::Malformed(Value::Null));
        assert_eq!(items[2], Lenient::Malformed(json!("gift-card")));

        let listed_as_text: Order =
            serde_json::from_value(json!({"created_at": "2024-06-01", "line_items": "none"})).unwrap();
        assert!(listed_as_text.line_items().is_empty());
        assert_eq!(listed_as_text.malformed_line_items(), Some(&json!("none")));
    }
}
