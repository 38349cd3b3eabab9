use gs_core::RedeemCode;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRequest {
    /// Account redeeming the code (required)
    #[serde(default)]
    pub user_id: i64,

    /// Code to redeem; matched case-insensitively (required)
    #[serde(default)]
    pub redeem_code: Option<RedeemCode>,
}
