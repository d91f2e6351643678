//! 凭证核销服务
//!
//! 给定凭证码与订单金额，判定折扣是否可用并计算订单最终金额。
//!
//! ## 核心功能
//!
//! - **凭证创建**：凭证码全局唯一，重复创建返回冲突错误
//! - **凭证核销**：校验凭证存在性与使用状态、订单金额门槛，计算折后金额
//! - **仓储抽象**：存储层以 trait 形式注入，支持 mock 测试与实现替换
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `error`: 错误类型定义
//! - `repository`: 数据库仓储层
//! - `service`: 业务服务层
//!
//! ## 并发说明
//!
//! `apply_voucher` 是「读取-判断-写入」两步存储调用，两步之间没有互斥。
//! 同一张未使用凭证被并发核销时，双方都可能读到 `used = false` 并各自生效。
//! 需要严格一次核销时，应由存储层提供「仅当未使用时置为已使用」的条件更新原语。

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{Result, VoucherError};
pub use models::Voucher;
pub use repository::{VoucherRepository, VoucherRepositoryTrait};
pub use service::{VoucherService, dto};
