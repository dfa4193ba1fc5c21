//! Pagination engine against a live PostgreSQL database

mod common;

use std::collections::HashSet;

use pagekit_core::db::{ProductRepo, UserRepo};
use pagekit_core::models::{NewProduct, NewUser, Product, User};
use pagekit_core::{paginate, paginate_and_sort, FilterBag, PageError, Pagination, PaginationRequest, ProductFilter, Record, SortOrder};
use sqlx::PgPool;

async fn insert_products(pool: &PgPool, category: &str, rows: &[(&str, &str, i32)]) -> Vec<Product> {
    let repo = ProductRepo::new(pool);
    let mut created = Vec::new();
    for (name, price, stock) in rows {
        let product = NewProduct::new(name, None, price, Some(category), *stock).unwrap();
        created.push(repo.create(&product).await.unwrap());
    }
    created
}

fn products(page: pagekit_core::Page<Record>) -> Vec<Product> {
    page.data
        .into_iter()
        .map(|record| match record {
            Record::Product(p) => p,
            other => panic!("expected product, got {other:?}"),
        })
        .collect()
}

#[tokio::test]
#[ignore = "requires database"]
async fn round_trip_returns_exactly_inserted_users() {
    let pool = common::pool().await;
    let tag = common::tag();
    let users: Vec<NewUser> = (0..7)
        .map(|i| NewUser::new(&format!("rt {tag} {i}"), 30 + i, &format!("{tag}.{i}@example.com")).unwrap())
        .collect();
    assert_eq!(UserRepo::new(&pool).insert_many(&users).await.unwrap(), 7);

    let request = PaginationRequest::new("users").filter("name", tag.as_str()).page_size(10);
    let page = paginate_and_sort(&pool, &request).await.unwrap();

    assert_eq!(page.data.len(), 7);
    assert_eq!(page.pagination.total_count, 7);
    assert_eq!(page.pagination.total_pages, 1);
    assert!(!page.pagination.has_next);
    assert!(!page.pagination.has_previous);
}

#[tokio::test]
#[ignore = "requires database"]
async fn pages_are_full_until_the_last() {
    let pool = common::pool().await;
    let category = format!("pages-{}", common::tag());
    let rows: Vec<(String, i32)> = (0..25).map(|i| (format!("item {i}"), i)).collect();
    let rows: Vec<(&str, &str, i32)> = rows.iter().map(|(n, i)| (n.as_str(), "1.00", *i)).collect();
    insert_products(&pool, &category, &rows).await;

    let mut seen = HashSet::new();
    for (page_no, expected_len) in [(1, 10), (2, 10), (3, 5)] {
        let request = PaginationRequest::new("products")
            .filter("category", category.as_str())
            .page(page_no)
            .page_size(10);
        let page = paginate_and_sort(&pool, &request).await.unwrap();

        assert_eq!(page.pagination.total_count, 25);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.current_page, page_no as u32);
        assert_eq!(page.pagination.has_next, page_no < 3);
        assert_eq!(page.pagination.has_previous, page_no > 1);

        let items = products(page);
        assert_eq!(items.len(), expected_len);
        for item in items {
            assert!(seen.insert(item.id), "row repeated across pages");
        }
    }
    assert_eq!(seen.len(), 25);

    let beyond = PaginationRequest::new("products")
        .filter("category", category.as_str())
        .page(5)
        .page_size(10);
    let page = paginate_and_sort(&pool, &beyond).await.unwrap();
    assert!(page.data.is_empty());
    assert!(!page.pagination.has_next);
    assert!(page.pagination.has_previous);
}

#[tokio::test]
#[ignore = "requires database"]
async fn filters_are_conjunctive() {
    let pool = common::pool().await;
    let tag = common::tag();
    let cat_x = format!("x-{tag}");
    let cat_y = format!("y-{tag}");
    let a = insert_products(&pool, &cat_x, &[("A", "10", 1)]).await;
    insert_products(&pool, &cat_y, &[("B", "10", 1)]).await;

    let request = PaginationRequest::new("products")
        .filter("category", cat_x.as_str())
        .filter("minPrice", 5);
    let items = products(paginate_and_sort(&pool, &request).await.unwrap());

    assert_eq!(items, a);
}

#[tokio::test]
#[ignore = "requires database"]
async fn inverted_range_matches_nothing() {
    let pool = common::pool().await;
    let category = format!("inv-{}", common::tag());
    insert_products(&pool, &category, &[("p", "20", 3)]).await;

    let request = PaginationRequest::new("products")
        .filter("category", category.as_str())
        .filter("minPrice", "50")
        .filter("maxPrice", "10");
    let page = paginate_and_sort(&pool, &request).await.unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total_count, 0);
    assert_eq!(page.pagination.total_pages, 0);
    assert!(!page.pagination.has_next);
    assert!(!page.pagination.has_previous);
}

#[tokio::test]
#[ignore = "requires database"]
async fn in_stock_maps_to_unit_count() {
    let pool = common::pool().await;
    let category = format!("stock-{}", common::tag());
    let created = insert_products(&pool, &category, &[("empty", "1", 0), ("five", "1", 5)]).await;
    let (empty, five) = (&created[0], &created[1]);

    let page_for = |in_stock: bool| {
        let filter = ProductFilter {
            category: Some(category.clone()),
            in_stock: Some(in_stock),
            ..Default::default()
        };
        let pool = pool.clone();
        async move {
            paginate::<Product>(&pool, &filter, None, SortOrder::Asc, Pagination::default())
                .await
                .unwrap()
        }
    };

    let in_stock = page_for(true).await;
    assert_eq!(in_stock.data, vec![five.clone()]);

    let out_of_stock = page_for(false).await;
    assert_eq!(out_of_stock.data, vec![empty.clone()]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn sorts_by_requested_column_and_falls_back_on_unknown() {
    let pool = common::pool().await;
    let category = format!("sort-{}", common::tag());
    insert_products(&pool, &category, &[("mid", "5.50", 1), ("high", "99.99", 1), ("low", "0.10", 1)]).await;

    let request = PaginationRequest::new("products")
        .filter("category", category.as_str())
        .sort("price", SortOrder::Desc);
    let prices: Vec<String> = products(paginate_and_sort(&pool, &request).await.unwrap())
        .into_iter()
        .map(|p| p.price)
        .collect();
    assert_eq!(prices, vec!["99.99", "5.50", "0.10"]);

    let request = PaginationRequest::new("products")
        .filter("category", category.as_str())
        .sort("no_such_column", SortOrder::Asc);
    let page = paginate_and_sort(&pool, &request).await.unwrap();
    let ids: Vec<_> = products(page).into_iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
#[ignore = "requires database"]
async fn user_filters_by_email_and_age_range() {
    let pool = common::pool().await;
    let tag = common::tag();
    let repo = UserRepo::new(&pool);
    for (i, age) in [17, 18, 30, 31].into_iter().enumerate() {
        let user = NewUser::new("Range", age, &format!("u{i}.{tag}@example.com")).unwrap();
        repo.create(&user).await.unwrap();
    }

    let filters = FilterBag::new()
        .with("email", tag.as_str())
        .with("minAge", "18")
        .with("maxAge", 30);
    let request = PaginationRequest::new("users").filters(filters).sort("age", SortOrder::Asc);
    let page = paginate_and_sort(&pool, &request).await.unwrap();

    let ages: Vec<i32> = page
        .data
        .into_iter()
        .map(|record| match record {
            Record::User(User { age, .. }) => age,
            other => panic!("expected user, got {other:?}"),
        })
        .collect();
    assert_eq!(ages, vec![18, 30]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn like_wildcards_in_terms_match_literally() {
    let pool = common::pool().await;
    let category = format!("wild-{}", common::tag());
    insert_products(&pool, &category, &[("100% cotton", "1", 1), ("100 cotton", "1", 1)]).await;

    let request = PaginationRequest::new("products")
        .filter("category", category.as_str())
        .filter("name", "100%");
    let items = products(paginate_and_sort(&pool, &request).await.unwrap());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "100% cotton");
}

#[tokio::test]
#[ignore = "requires database"]
async fn unsupported_entity() {
    let pool = common::pool().await;
    let err = paginate_and_sort(&pool, &PaginationRequest::new("orders"))
        .await
        .unwrap_err();
    assert!(matches!(err, PageError::UnsupportedEntity { .. }));
}
