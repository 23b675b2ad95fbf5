use customer_core_api::domain::NewCustomer;
use customer_core_api::error::CustomerResult;
use customer_core_db::models::customer::CustomerModel;
use tracing::debug;
use uuid::Uuid;

use crate::error::translate;
use crate::utils::TryFromRow;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &CustomerRepositoryImpl,
        customer: NewCustomer,
    ) -> CustomerResult<CustomerModel> {
        let customer = customer.normalized();
        let id = Uuid::new_v4();

        let mut tx = repo.pool.begin().await.map_err(translate)?;

        let row = sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone,
                      NULL::text AS pan_number,
                      'NOT_FOUND'::verification_status AS status,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .fetch_one(&mut *tx)
        .await
        .map_err(translate)?;

        let created = CustomerModel::try_from_row(&row)?;

        // Every customer owns exactly one verification from birth
        sqlx::query(
            r#"
            INSERT INTO verifications (customer_id, status, created_at, updated_at)
            VALUES ($1, 'NOT_FOUND', $2, $2)
            "#,
        )
        .bind(id)
        .bind(created.created_at)
        .execute(&mut *tx)
        .await
        .map_err(translate)?;

        tx.commit().await.map_err(translate)?;

        debug!(customer_id = %id, "customer inserted");
        Ok(created)
    }
}
