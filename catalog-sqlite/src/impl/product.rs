use crate::Db;
use crate::types::{ProductId, ProductRow};
use catalog_core::{
    models::{ProductData, ProductRecord},
    ports::ProductRepository,
};

impl ProductRepository for Db {
    async fn list_products(&self) -> Result<Vec<ProductRecord<Self::ProductId>>, Self::Error> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            select
                id, category, unit_price
            from
                product
            order by
                seq
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_product(
        &self,
        data: ProductData,
    ) -> Result<ProductRecord<Self::ProductId>, Self::Error> {
        // `id` is unique, so a collision surfaces as a constraint error
        // instead of overwriting an existing product.
        let product_id = ProductId::generate();
        sqlx::query(
            r#"
            insert into
                product (id, category, unit_price)
            values
                ($1, $2, $3)
            "#,
        )
        .bind(product_id)
        .bind(&data.category)
        .bind(data.unit_price)
        .execute(&self.writer)
        .await?;

        Ok(ProductRecord {
            id: product_id,
            data,
        })
    }

    async fn get_product(
        &self,
        product_id: Self::ProductId,
    ) -> Result<Option<ProductRecord<Self::ProductId>>, Self::Error> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            select
                id, category, unit_price
            from
                product
            where
                id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into))
    }
}
