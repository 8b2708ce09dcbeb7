// Shared test helpers: a mock portal and a scraper pointed at it.

use httptest::Server;
use tempfile::TempDir;

use ecourts_scraper::dates::{format_target_date, local_today};
use ecourts_scraper::{CourtScraper, DateSelector, ScraperConfig};

/// Builds a scraper whose portal root is the mock server and whose output
/// goes to `dir`.
#[allow(dead_code)] // Used by other test files
pub fn scraper_for(server: &Server, dir: &TempDir) -> CourtScraper {
    let config = ScraperConfig {
        base_url: format!("http://{}/", server.addr()),
        timeout_seconds: 5,
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    CourtScraper::new(&config).expect("Failed to build scraper")
}

/// Search form page carrying a token.
#[allow(dead_code)]
pub fn form_page(token: &str) -> String {
    format!(
        r#"<html><body><form method="post">
<input type="hidden" name="csrf_token" value="{token}">
<input name="cnr_number"></form></body></html>"#
    )
}

/// Results page with one row listed on the selected date.
#[allow(dead_code)]
pub fn results_page_listed(date: DateSelector, pdf_href: &str) -> String {
    let day = format_target_date(date, local_today());
    format!(
        r#"<html><body><table>
<tr><th>Sr</th><th>Court</th><th>Date</th><th>Order</th></tr>
<tr><td>Disposed</td><td>Old matter</td><td>01-01-2001</td><td></td></tr>
<tr><td> 17 </td><td>Court of District Judge, Saket</td><td>Next hearing {day}</td>
<td><a href="{pdf_href}">Order</a></td></tr>
</table></body></html>"#
    )
}

/// Results page where nothing is listed on any recent date.
#[allow(dead_code)]
pub fn results_page_unlisted() -> String {
    r#"<html><body><table>
<tr><td>3</td><td>Court of Civil Judge</td><td>01-01-2001</td></tr>
</table></body></html>"#
        .to_string()
}

/// Files in `dir` whose names start with `prefix`.
#[allow(dead_code)]
pub fn files_with_prefix(dir: &TempDir, prefix: &str) -> Vec<std::path::PathBuf> {
    std::fs::read_dir(dir.path())
        .expect("Failed to read output dir")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(prefix))
        })
        .collect()
}
