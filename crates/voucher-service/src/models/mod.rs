//! 凭证服务领域模型
//!
//! 包含凭证系统的核心实体定义

pub mod voucher;

pub use voucher::Voucher;
