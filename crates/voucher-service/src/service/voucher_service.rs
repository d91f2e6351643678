//! 凭证核销服务
//!
//! 处理凭证创建与核销的核心业务逻辑，包括：
//! - 凭证码唯一性检查
//! - 凭证存在性校验
//! - 核销资格判定（未使用 + 金额门槛）
//! - 折后金额计算
//!
//! ## 核销流程
//!
//! 1. 查询凭证 -> 2. 资格判定 -> 3. 标记已使用 -> 4. 计算折后金额

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::error::{Result, VoucherError};
use crate::models::Voucher;
use crate::repository::VoucherRepositoryTrait;
use crate::service::dto::OrderSummary;

/// 可享受折扣的最低订单金额
const MIN_AMOUNT_FOR_DISCOUNT: f64 = 100.0;

/// 凭证核销服务
///
/// 负责凭证创建与核销的完整流程。
///
/// ## 并发限制
///
/// `apply_voucher` 先读取凭证再写入使用标记，两次存储调用之间没有互斥。
/// 同一张未使用凭证被并发核销时，双方都可能读到 `used = false` 并各自生效。
/// 需要严格一次核销时，应由存储层提供「仅当未使用时置为已使用」的条件更新原语。
pub struct VoucherService<R>
where
    R: VoucherRepositoryTrait,
{
    voucher_repo: Arc<R>,
}

impl<R> VoucherService<R>
where
    R: VoucherRepositoryTrait,
{
    pub fn new(voucher_repo: Arc<R>) -> Self {
        Self { voucher_repo }
    }

    /// 创建凭证
    ///
    /// 凭证码已存在时返回冲突错误，不产生任何写入。
    /// 折扣取值范围由调用方保证，这里不做区间校验。
    #[instrument(skip(self))]
    pub async fn create_voucher(&self, code: &str, discount: i32) -> Result<Voucher> {
        if self.voucher_repo.get_voucher_by_code(code).await?.is_some() {
            warn!(code = %code, "凭证码已存在，拒绝创建");
            return Err(VoucherError::VoucherAlreadyExists {
                code: code.to_string(),
            });
        }

        let voucher = self.voucher_repo.create_voucher(code, discount).await?;

        info!(code = %code, discount = discount, "凭证创建成功");

        Ok(voucher)
    }

    /// 核销凭证
    ///
    /// 凭证不存在时返回冲突错误；凭证已使用或金额低于门槛时
    /// 返回 `applied = false` 的订单结果，不产生存储写入。
    #[instrument(skip(self))]
    pub async fn apply_voucher(&self, code: &str, amount: f64) -> Result<OrderSummary> {
        let voucher = self
            .voucher_repo
            .get_voucher_by_code(code)
            .await?
            .ok_or_else(|| VoucherError::VoucherNotFound {
                code: code.to_string(),
            })?;

        if !Self::is_applicable(&voucher, amount) {
            info!(
                code = %code,
                amount = amount,
                used = voucher.used,
                "折扣未生效，金额原样返回"
            );
            return Ok(OrderSummary::not_applied(amount, voucher.discount));
        }

        // 标记已使用，返回值不参与结果计算
        self.voucher_repo.use_voucher(code).await?;

        let summary = OrderSummary::applied(amount, voucher.discount);

        info!(
            code = %code,
            amount = amount,
            discount = voucher.discount,
            final_amount = summary.final_amount,
            "凭证核销成功"
        );

        Ok(summary)
    }

    /// 核销资格判定：凭证未使用且金额达到门槛
    fn is_applicable(voucher: &Voucher, amount: f64) -> bool {
        voucher.is_redeemable() && amount >= MIN_AMOUNT_FOR_DISCOUNT
    }
}
