//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Voucher;

/// 凭证仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoucherRepositoryTrait: Send + Sync {
    /// 按凭证码查询，无副作用
    async fn get_voucher_by_code(&self, code: &str) -> Result<Option<Voucher>>;

    /// 持久化新凭证（used = false）
    ///
    /// 唯一性检查由调用方完成，数据库的 UNIQUE 约束兜底
    async fn create_voucher(&self, code: &str, discount: i32) -> Result<Voucher>;

    /// 将凭证标记为已使用；对已使用凭证重复调用等价于无操作
    async fn use_voucher(&self, code: &str) -> Result<()>;
}
