use serde::Serialize;
use utoipa::ToSchema;

use super::{mean, value_counts};
use crate::dataset::Dataset;

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct PaymentTypeCount {
    pub payment_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct PaymentMix {
    /// Sorted by count, most used first.
    pub counts: Vec<PaymentTypeCount>,
    pub total_transactions: usize,
    pub average_payment_value: Option<f64>,
    pub most_common: Option<String>,
}

pub fn payment_mix(dataset: &Dataset) -> PaymentMix {
    let counts: Vec<PaymentTypeCount> =
        value_counts(dataset.payments.iter().filter_map(|p| p.payment_type.as_deref()))
            .into_iter()
            .map(|(payment_type, count)| PaymentTypeCount {
                payment_type,
                count,
            })
            .collect();

    let most_common = counts.first().map(|c| c.payment_type.clone());

    PaymentMix {
        counts,
        total_transactions: dataset.payments.len(),
        average_payment_value: mean(dataset.payments.iter().map(|p| p.payment_value)),
        most_common,
    }
}
