//! 数据传输对象定义

use serde::{Deserialize, Serialize};

/// 核销结果
///
/// 非持久化的订单摘要。折扣未生效时 `final_amount` 与原金额一致，
/// 但 `discount` 仍回报凭证上的折扣值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// 订单原始金额
    pub amount: f64,
    /// 凭证折扣百分比
    pub discount: i32,
    /// 折后金额（未核销时与 amount 相同）
    pub final_amount: f64,
    /// 折扣是否实际生效
    pub applied: bool,
}

impl OrderSummary {
    /// 折扣生效的订单结果
    pub fn applied(amount: f64, discount: i32) -> Self {
        Self {
            amount,
            discount,
            final_amount: amount * (1.0 - f64::from(discount) / 100.0),
            applied: true,
        }
    }

    /// 折扣未生效的订单结果，金额原样返回
    pub fn not_applied(amount: f64, discount: i32) -> Self {
        Self {
            amount,
            discount,
            final_amount: amount,
            applied: false,
        }
    }
}
