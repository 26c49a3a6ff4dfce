//! PostgreSQL implementation of ProductRepository
//!
//! Identifiers are left unquoted, so PostgreSQL folds `userId` and `userid`
//! to the same lowercase column. The queries below spell them lowercase.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};
use tracing::instrument;

use crate::error::{MessageErr, MessageResult, PRODUCT_NOT_FOUND, STORE_FAILURE};
use crate::models::{DeleteConfirmation, NewProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

const GET_PRODUCT_BY_ID: &str = r#"
    SELECT id, title, userid, price, createdat, updatedat
    FROM products
    WHERE id = $1
"#;

const GET_PRODUCTS: &str = r#"
    SELECT id, title, price, userid, createdat, updatedat
    FROM products
    ORDER BY id ASC
"#;

const CREATE_PRODUCT: &str = r#"
    INSERT INTO products (title, price, userid)
    VALUES ($1, $2, $3)
    RETURNING id, title, price, userid, createdat, updatedat
"#;

const UPDATE_PRODUCT_BY_ID: &str = r#"
    UPDATE products
    SET title = $1, price = $2, updatedat = now()
    WHERE id = $3
"#;

const DELETE_PRODUCT_BY_ID: &str = r#"
    DELETE FROM products
    WHERE id = $1
"#;

/// Row shape shared by every SELECT/RETURNING above
#[derive(Debug, FromQueryResult)]
struct ProductRow {
    id: i32,
    title: String,
    price: i32,
    userid: i32,
    createdat: DateTime<Utc>,
    updatedat: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            title: row.title,
            price: row.price,
            user_id: row.userid,
            created_at: row.createdat,
            updated_at: row.updatedat,
        }
    }
}

/// ProductRepository backed by a pooled SeaORM connection
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn statement<I>(sql: &str, values: I) -> Statement
    where
        I: IntoIterator<Item = sea_orm::Value>,
    {
        Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self, input), fields(user_id = input.user_id))]
    async fn create_product(&self, input: NewProduct) -> MessageResult<Product> {
        let stmt = Self::statement(
            CREATE_PRODUCT,
            [input.title.into(), input.price.into(), input.user_id.into()],
        );

        let row = ProductRow::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                tracing::error!("INSERT ... RETURNING produced no row");
                MessageErr::internal_server_error(STORE_FAILURE)
            })?;

        tracing::info!(product_id = row.id, "Created product");
        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn get_product_by_id(&self, id: i32) -> MessageResult<Product> {
        let stmt = Self::statement(GET_PRODUCT_BY_ID, [id.into()]);

        ProductRow::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .map(Product::from)
            .ok_or_else(|| MessageErr::not_found(PRODUCT_NOT_FOUND))
    }

    #[instrument(skip(self))]
    async fn get_products(&self) -> MessageResult<Vec<Product>> {
        let stmt = Self::statement(GET_PRODUCTS, []);

        let rows = ProductRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self, input), fields(product_id = input.id))]
    async fn update_product_by_id(&self, input: UpdateProduct) -> MessageResult<()> {
        let id = input.id;
        let stmt = Self::statement(
            UPDATE_PRODUCT_BY_ID,
            [input.title.into(), input.price.into(), id.into()],
        );

        let result = self.db.execute_raw(stmt).await?;
        if result.rows_affected() == 0 {
            return Err(MessageErr::not_found(PRODUCT_NOT_FOUND));
        }

        tracing::info!(product_id = id, "Updated product");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: i32) -> MessageResult<DeleteConfirmation> {
        let stmt = Self::statement(DELETE_PRODUCT_BY_ID, [id.into()]);

        let result = self.db.execute_raw(stmt).await?;

        tracing::info!(
            product_id = id,
            rows_affected = result.rows_affected(),
            "Deleted product"
        );
        Ok(DeleteConfirmation::default())
    }
}
