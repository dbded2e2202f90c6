//! Pagination driver: follows continuation tokens until the API stops
//! returning one, persisting every raw page as a line of JSON.
//!
//! There is no cap on the number of pages; an API that keeps returning tokens
//! keeps the loop running.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::fetch::PageFetcher;
use crate::meeting::Meeting;
use crate::pacing::Pacer;

/// Fetch every page for `meeting`, writing each to `out` as one JSON line in
/// fetch order. Returns the number of pages fetched.
pub fn fetch_all<F, P, W>(
    fetcher: &mut F,
    pacer: &mut P,
    meeting: &Meeting,
    out: &mut W,
) -> Result<usize>
where
    F: PageFetcher + ?Sized,
    P: Pacer + ?Sized,
    W: Write,
{
    let mut token: Option<String> = None;
    let mut pages = 0usize;
    loop {
        let page = fetcher
            .fetch_page(meeting, token.as_deref())
            .with_context(|| {
                format!(
                    "fetch page {} of {} {}",
                    pages + 1,
                    meeting.meeting_type,
                    meeting.id
                )
            })?;
        pages += 1;
        writeln!(out, "{}", page.to_line()).context("write raw page")?;
        log::info!(
            "fetched page {} ({} entries)",
            pages,
            page.as_map()
                .get("participants")
                .and_then(|v| v.as_array())
                .map_or(0, Vec::len)
        );
        match page.next_page_token() {
            Some(next) => {
                token = Some(next.to_string());
                log::debug!("more pages remain; pausing before next request");
                pacer.pause();
            }
            None => break,
        }
    }
    out.flush().context("flush raw pages")?;
    Ok(pages)
}

/// Run [`fetch_all`] into a freshly truncated file at `path`.
pub fn fetch_to_file<F, P>(
    fetcher: &mut F,
    pacer: &mut P,
    meeting: &Meeting,
    path: &Path,
) -> Result<usize>
where
    F: PageFetcher + ?Sized,
    P: Pacer + ?Sized,
{
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let pages = fetch_all(fetcher, pacer, meeting, &mut out)
        .with_context(|| format!("write {}", path.display()))?;
    log::info!("wrote {} raw pages to {}", pages, path.display());
    Ok(pages)
}
