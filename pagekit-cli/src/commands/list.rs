//! Paginated listing command

use anyhow::{Context, Result};
use clap::Parser;
use pagekit_core::{paginate_and_sort, FilterBag, PagekitConfig, PaginationRequest, SortOrder};

use super::{connect, print_json};

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Entity to list (users, products)
    pub entity: String,

    /// 1-based page number
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: i64,

    /// Rows per page (default: config `[pagination] default_page_size`)
    #[arg(long)]
    pub page_size: Option<i64>,

    /// Column to sort by (unknown columns fall back to id)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "asc")]
    pub sort_order: SortOrder,

    /// Filter as key=value, repeatable (e.g. --filter minAge=18 --filter name=ali)
    #[arg(long = "filter", short = 'f', value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,
}

fn parse_filter(pair: &str) -> Result<(String, String), String> {
    FilterBag::parse_pair(pair).ok_or_else(|| format!("expected key=value, got '{pair}'"))
}

impl ListArgs {
    fn into_request(self, default_page_size: u32) -> PaginationRequest {
        let mut request = PaginationRequest::new(self.entity)
            .page(self.page)
            .page_size(self.page_size.unwrap_or(i64::from(default_page_size)))
            .filters(self.filters.into_iter().collect());
        request.sort_by = self.sort_by;
        request.sort_order = self.sort_order;
        request
    }
}

pub async fn run_list(args: ListArgs, config: &PagekitConfig) -> Result<()> {
    let request = args.into_request(config.pagination.default_page_size);

    // Reject bad input before opening a connection
    request.entity.parse::<pagekit_core::EntityKind>()?;
    request.pagination()?;

    let pool = connect(config).await?;
    let page = paginate_and_sort(&pool, &request)
        .await
        .with_context(|| format!("Failed to list {}", request.entity))?;

    tracing::debug!(
        rows = page.data.len(),
        total = page.pagination.total_count,
        "page fetched"
    );
    print_json(&page)
}
