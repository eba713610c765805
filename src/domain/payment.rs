use std::ops::RangeInclusive;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Serialize, Serializer};

/// Payments reference an order id drawn from this range, independent of any
/// order the session actually created.
pub const PAYMENT_ORDER_IDS: RangeInclusive<u64> = 1..=100;

/// Payment amount bounds, in cents.
pub const AMOUNT_CENTS: RangeInclusive<u32> = 1_000..=100_000;

/// Body of `POST /app/api/payments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub order_id: u64,
    pub amount: Amount,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::CreditCard, Self::DebitCard, Self::Paypal];
}

/// A monetary amount held as whole cents, written on the wire as a decimal
/// number with at most two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(u32);

impl Amount {
    pub fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    #[cfg(test)]
    pub fn cents(self) -> u32 {
        self.0
    }

    /// Uniform over `[10.00, 1000.00]`, rounded to the cent.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let lo = *AMOUNT_CENTS.start() as f64 / 100.0;
        let hi = *AMOUNT_CENTS.end() as f64 / 100.0;
        let cents = (rng.random_range(lo..=hi) * 100.0).round() as u32;
        Self::from_cents(cents.clamp(*AMOUNT_CENTS.start(), *AMOUNT_CENTS.end()))
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl PaymentRequest {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            order_id: rng.random_range(PAYMENT_ORDER_IDS),
            amount: Amount::random(rng),
            payment_method: *PaymentMethod::ALL
                .choose(rng)
                .unwrap_or(&PaymentMethod::CreditCard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn test_payment_wire_shape() {
        let payment = PaymentRequest {
            order_id: 17,
            amount: Amount::from_cents(12_345),
            payment_method: PaymentMethod::DebitCard,
        };

        assert_eq!(
            serde_json::to_value(&payment).unwrap(),
            json!({ "orderId": 17, "amount": 123.45, "paymentMethod": "DEBIT_CARD" })
        );
    }

    #[test]
    fn test_payment_methods_use_api_names() {
        let names: Vec<_> = PaymentMethod::ALL
            .iter()
            .map(|m| serde_json::to_value(m).unwrap())
            .collect();
        assert_eq!(names, vec![json!("CREDIT_CARD"), json!("DEBIT_CARD"), json!("PAYPAL")]);
    }

    #[test]
    fn test_amount_in_range_with_two_decimals() {
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..10_000 {
            let amount = Amount::random(&mut rng);
            assert!(AMOUNT_CENTS.contains(&amount.cents()));

            let written = serde_json::to_string(&amount).unwrap();
            let decimals = written.split('.').nth(1).map_or(0, str::len);
            assert!(decimals <= 2, "{written} has more than two decimals");

            let value: f64 = written.parse().unwrap();
            assert!((10.0..=1000.0).contains(&value));
        }
    }

    #[test]
    fn test_random_payment_order_id_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2_000 {
            let payment = PaymentRequest::random(&mut rng);
            assert!(PAYMENT_ORDER_IDS.contains(&payment.order_id));
        }
    }
}
