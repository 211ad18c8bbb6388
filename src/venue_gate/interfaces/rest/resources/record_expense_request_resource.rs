use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RecordExpenseRequestResource {
    #[validate(length(min = 1))]
    pub category_id: String,
    #[validate(length(min = 1, max = 200))]
    pub item_name: String,
    #[schema(value_type = String, example = "1250.00")]
    pub amount: Decimal,
}
