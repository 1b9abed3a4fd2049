use brick_price_report::infrastructure::with_deadline;
use brick_price_report::ScrapeError;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn deadline_expiry_is_a_timeout_scrape_error() {
    // 永不完成的渲染：时钟暂停时 tokio 会自动快进到超时点
    let stalled = std::future::pending::<Result<String, std::io::Error>>();
    let result = with_deadline(
        stalled,
        "http://www.bricklink.com/catalogPG.asp?S=8880-1",
        Duration::from_secs(30),
    )
    .await;

    match result {
        Err(ScrapeError::Timeout { url, limit_secs }) => {
            assert_eq!(limit_secs, 30);
            assert!(url.contains("8880-1"));
        }
        other => panic!("期望超时错误，实际: {:?}", other),
    }
}

#[tokio::test]
async fn render_failure_folds_into_a_render_scrape_error() {
    let failed = std::future::ready(Err::<String, _>(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    )));
    let result = with_deadline(failed, "http://www.bricklink.com/catalogPG.asp?S=x", Duration::from_secs(30)).await;

    assert!(matches!(result, Err(ScrapeError::Render { .. })));
}

#[tokio::test]
async fn completed_render_passes_the_html_through() {
    let done = std::future::ready(Ok::<_, std::io::Error>("<html></html>".to_string()));
    let html = with_deadline(done, "about:blank", Duration::from_secs(30))
        .await
        .unwrap();

    assert_eq!(html, "<html></html>");
}
