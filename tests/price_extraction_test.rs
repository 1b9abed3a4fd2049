use brick_price_report::services::{extract_price, PriceFetcher};
use brick_price_report::ScrapeError;

/// 构造一个第一个表格第一行第一个单元格为指定文本的页面
fn page_with_cell(cell_text: &str) -> String {
    format!(
        "<html><body><div>header</div><table><tr><td>{}</td></tr></table></body></html>",
        cell_text
    )
}

#[test]
fn document_without_table_is_no_table() {
    let result = extract_price("<html><body><p>nothing here</p></body></html>");
    assert!(matches!(result, Err(ScrapeError::NoTable)));
}

#[test]
fn table_without_rows_is_no_row() {
    let result = extract_price("<html><body><table></table></body></html>");
    assert!(matches!(result, Err(ScrapeError::NoRow)));
}

#[test]
fn row_without_data_cells_is_no_cell() {
    let result = extract_price("<html><body><table><tr><th>only a header</th></tr></table></body></html>");
    assert!(matches!(result, Err(ScrapeError::NoCell)));
}

#[test]
fn cell_without_marker_is_no_price() {
    let result = extract_price(&page_with_cell("Min Price: EUR 3.00\nMax Price: EUR 9.00"));
    assert!(matches!(result, Err(ScrapeError::NoPrice)));
}

#[test]
fn marker_text_up_to_line_break_parses_as_price() {
    let html = page_with_cell("Times Sold: 12\nAvg Price: EUR 12.50\nfoo");
    assert_eq!(extract_price(&html).unwrap(), 12.50);
}

#[test]
fn unparseable_price_is_bad_price() {
    let html = page_with_cell("Avg Price: EUR twelve\nfoo");
    assert!(matches!(extract_price(&html), Err(ScrapeError::BadPrice { .. })));
}

#[test]
fn only_the_first_table_is_consulted() {
    let html = "<html><body><table><tr><td>Avg Price: EUR 8.00\nx</td></tr></table>\
                <table><tr><td>Avg Price: EUR 99.00\nx</td></tr></table></body></html>";
    assert_eq!(extract_price(html).unwrap(), 8.00);
}

#[test]
fn lookup_url_follows_the_catalog_template() {
    let fetcher = PriceFetcher::new("http://www.bricklink.com");
    assert_eq!(
        fetcher.lookup_url("75192-1"),
        "http://www.bricklink.com/catalogPG.asp?S=75192-1"
    );
}
