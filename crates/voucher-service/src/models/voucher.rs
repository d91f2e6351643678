//! 凭证实体定义

use serde::{Deserialize, Serialize};

/// 优惠凭证
///
/// 凭证码全局唯一（区分大小写），折扣为整数百分比。
/// `used` 一旦置为 true 不再回退，凭证不会被删除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: i64,
    /// 凭证码（唯一标识）
    pub code: String,
    /// 折扣百分比（0-100）
    pub discount: i32,
    /// 是否已被核销
    pub used: bool,
}

impl Voucher {
    /// 检查凭证是否仍可核销
    pub fn is_redeemable(&self) -> bool {
        !self.used
    }
}
