use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CityQuery {
    /// Comma separated state codes. Absent selects the default states; empty
    /// selects none.
    pub states: Option<String>,
}
