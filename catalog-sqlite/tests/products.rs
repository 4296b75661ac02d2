use catalog_core::{models::ProductData, ports::ProductRepository as _};
use catalog_sqlite::{Db, config::SqliteConfig, types::ProductId};
use std::time::Duration;

fn shoes() -> ProductData {
    ProductData {
        category: "Shoes".to_string(),
        unit_price: 80.0,
    }
}

#[tokio::test]
async fn create_then_read_back() -> anyhow::Result<()> {
    let db = Db::open(&SqliteConfig::default()).await?;

    let created = db.create_product(shoes()).await?;
    assert_eq!(created.data, shoes());

    let fetched = db.get_product(created.id).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}

#[tokio::test]
async fn unknown_id_is_none() -> anyhow::Result<()> {
    let db = Db::open(&SqliteConfig::default()).await?;
    db.create_product(shoes()).await?;

    assert_eq!(db.get_product(ProductId::generate()).await?, None);

    Ok(())
}

#[tokio::test]
async fn list_keeps_creation_order() -> anyhow::Result<()> {
    let db = Db::open(&SqliteConfig::default()).await?;
    assert!(db.list_products().await?.is_empty());

    let mut created = Vec::new();
    for (category, unit_price) in [("Shoes", 80.0), ("Hats", 12.5), ("Socks", 0.0)] {
        let data = ProductData {
            category: category.to_string(),
            unit_price,
        };
        created.push(db.create_product(data).await?);
    }

    let listed = db.list_products().await?;
    assert_eq!(listed, created);

    let mut ids = listed.iter().map(|p| p.id).collect::<Vec<_>>();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    Ok(())
}

#[tokio::test]
async fn in_memory_products_survive_idle_periods() -> anyhow::Result<()> {
    let db = Db::open(&SqliteConfig {
        idle_timeout: Some(Duration::from_secs(1)),
        ..Default::default()
    })
    .await?;

    let created = db.create_product(shoes()).await?;
    tokio::time::sleep(Duration::from_secs(3)).await;

    assert_eq!(db.list_products().await?, vec![created.clone()]);
    let again = db.create_product(shoes()).await?;
    assert_eq!(db.list_products().await?, vec![created, again]);

    Ok(())
}

#[tokio::test]
async fn schema_refuses_negative_prices() -> anyhow::Result<()> {
    let db = Db::open(&SqliteConfig::default()).await?;

    let result = db
        .create_product(ProductData {
            category: "Shoes".to_string(),
            unit_price: -1.0,
        })
        .await;
    assert!(result.is_err());

    let result = db
        .create_product(ProductData {
            category: "   ".to_string(),
            unit_price: 1.0,
        })
        .await;
    assert!(result.is_err());

    assert!(db.list_products().await?.is_empty());

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_ids() -> anyhow::Result<()> {
    let db = Db::open(&SqliteConfig::default()).await?;

    let tasks = (0..16)
        .map(|i| {
            let db = db.clone();
            tokio::spawn(async move {
                db.create_product(ProductData {
                    category: format!("Category {i}"),
                    unit_price: i as f64,
                })
                .await
            })
        })
        .collect::<Vec<_>>();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await??.id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 16);
    assert_eq!(db.list_products().await?.len(), 16);

    Ok(())
}

#[tokio::test]
async fn file_database_persists_across_opens() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("catalog-{}.db", ProductId::generate()));
    let config = SqliteConfig {
        database_path: Some(path.clone()),
        ..Default::default()
    };

    let created = {
        let db = Db::open(&config).await?;
        let created = db.create_product(shoes()).await?;
        db.writer.close().await;
        db.reader.close().await;
        created
    };

    let db = Db::open(&config).await?;
    assert_eq!(db.get_product(created.id).await?, Some(created));
    db.writer.close().await;
    db.reader.close().await;

    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }

    Ok(())
}
