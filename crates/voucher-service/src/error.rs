//! 凭证服务错误类型
//!
//! 业务错误只有「冲突」一类：创建时凭证码已存在、核销时凭证不存在。
//! 其余不可核销场景不是错误，以 `applied = false` 的正常结果返回。

use thiserror::Error;

/// 凭证服务错误类型
#[derive(Debug, Error)]
pub enum VoucherError {
    /// 创建时凭证码已被占用
    ///
    /// 错误文案为对外契约的一部分，调用方按原文透传
    #[error("Voucher already exist.")]
    VoucherAlreadyExists { code: String },

    /// 核销时凭证不存在
    #[error("Voucher does not exist.")]
    VoucherNotFound { code: String },

    // === 系统错误 ===
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

/// 凭证服务 Result 类型别名
pub type Result<T> = std::result::Result<T, VoucherError>;

impl VoucherError {
    /// 检查是否为业务错误（非系统错误）
    pub fn is_business_error(&self) -> bool {
        !matches!(self, Self::Database(_))
    }

    /// 获取错误码（用于对外响应）
    ///
    /// 两种业务冲突共用同一错误码，调用方靠文案区分
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::VoucherAlreadyExists { .. } | Self::VoucherNotFound { .. } => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}
