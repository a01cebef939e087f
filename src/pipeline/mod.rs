//! Collection, filtering and WHOIS enrichment for one request.

mod context;

use std::time::Instant;

use log::info;

use crate::error_handling::RunStats;
use crate::listing::{
    collect_domains, filter_by_keywords, listing_sources_for_days, DateRange, KeywordTally,
};
use crate::whois::{enrich, WhoisRecord};

pub use context::PipelineContext;

/// Result of one pipeline run.
#[derive(Debug, Default)]
pub struct PipelineOutcome {
    /// Enriched records, in collection order
    pub records: Vec<WhoisRecord>,
    /// Per-keyword match counts; `None` when every domain was requested
    pub tally: Option<KeywordTally>,
    /// Domains collected from the listing site, before filtering
    pub domains_found: usize,
}

/// Runs collection, the optional keyword filter and WHOIS enrichment.
///
/// Every day of `dates` is collected for every TLD. Local failures (listing
/// pages, WHOIS lookups) are counted and logged at the end; they never fail
/// the run.
pub async fn run_pipeline(
    ctx: &PipelineContext,
    dates: &DateRange,
    keywords: Option<&[String]>,
) -> PipelineOutcome {
    let start = Instant::now();
    let stats = RunStats::new();

    info!(
        "Starting run for {} ({} days), keywords: {:?}",
        dates,
        dates.len(),
        keywords
    );

    let sources = listing_sources_for_days(&ctx.listing_host, dates.days());
    let domains = collect_domains(&ctx.client, &sources, ctx.max_pages, &stats).await;
    let domains_found = domains.len();

    let (domains, tally) = match keywords {
        Some(keywords) => {
            let (filtered, tally) = filter_by_keywords(domains, keywords);
            info!(
                "{} of {} domains match the keywords",
                filtered.len(),
                domains_found
            );
            (filtered, Some(tally))
        }
        None => (domains, None),
    };

    let records = enrich(ctx.whois.as_ref(), &domains, &stats).await;

    info!(
        "Run finished in {:.1}s: {} domains found, {} enriched",
        start.elapsed().as_secs_f64(),
        domains_found,
        records.len()
    );
    if stats.total() > 0 {
        info!("Recovered failures during the run:");
        stats.log_summary();
    }

    PipelineOutcome {
        records,
        tally,
        domains_found,
    }
}
