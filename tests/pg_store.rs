use std::collections::HashSet;

use fortune_service::repos::fortune::{FortuneStore, PgFortuneStore};

// Needs a reachable Postgres with a `fortune (id BIGINT PRIMARY KEY, text TEXT NOT NULL)`
// table holding at least one row:
//   DATABASE_URL=postgres://... cargo test --test pg_store -- --ignored
#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn random_fortune_is_one_of_the_listed_rows() {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
    let store = PgFortuneStore::connect(&url, 2).await.unwrap();

    let all = store.list_all().await.unwrap();
    assert!(!all.is_empty());
    let ids: HashSet<i64> = all.iter().map(|f| f.id).collect();
    assert_eq!(ids.len(), all.len());

    for _ in 0..20 {
        let picked = store.random_fortune().await.unwrap();
        assert!(all.contains(&picked));
    }
}
