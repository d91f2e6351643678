//! 服务层
//!
//! 实现凭证业务逻辑，协调仓储层。
//!
//! ## 模块结构
//!
//! - `dto`: 数据传输对象定义
//! - `voucher_service`: 凭证创建与核销服务

pub mod dto;
pub mod voucher_service;

pub use dto::*;
pub use voucher_service::VoucherService;
