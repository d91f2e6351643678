//! 凭证仓储
//!
//! 提供凭证实体的数据访问

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::VoucherRepositoryTrait;
use crate::error::Result;
use crate::models::Voucher;

/// 凭证仓储
///
/// 基于 PostgreSQL 的生产实现，对应 `migrations/` 下的 vouchers 表
pub struct VoucherRepository {
    pool: PgPool,
}

impl VoucherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoucherRepositoryTrait for VoucherRepository {
    /// 按凭证码查询单个凭证
    async fn get_voucher_by_code(&self, code: &str) -> Result<Option<Voucher>> {
        let voucher = sqlx::query_as::<_, Voucher>(
            r#"
            SELECT id, code, discount, used
            FROM vouchers
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(voucher)
    }

    /// 创建凭证
    ///
    /// 返回新插入的完整记录
    async fn create_voucher(&self, code: &str, discount: i32) -> Result<Voucher> {
        let voucher = sqlx::query_as::<_, Voucher>(
            r#"
            INSERT INTO vouchers (code, discount, used)
            VALUES ($1, $2, false)
            RETURNING id, code, discount, used
            "#,
        )
        .bind(code)
        .bind(discount)
        .fetch_one(&self.pool)
        .await?;

        Ok(voucher)
    }

    /// 标记凭证为已使用
    async fn use_voucher(&self, code: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE vouchers
            SET used = true
            WHERE code = $1
            "#,
        )
        .bind(code)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
