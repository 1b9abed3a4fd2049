use brick_price_report::{render_report, LegoSet};

fn set(number: &str, name: &str, quantity: u32, rrp: Option<f64>, price: Option<f64>) -> LegoSet {
    LegoSet {
        number: number.to_string(),
        name: name.to_string(),
        quantity,
        rrp,
        price,
    }
}

#[test]
fn empty_collection_prints_only_the_empty_message() {
    assert_eq!(render_report(&[]), "Empty Lego set collection");
}

#[test]
fn profit_is_price_minus_rrp_to_two_decimals() {
    let sets = [set("75192-1", "Millennium Falcon", 2, Some(10.0), Some(15.0))];
    let report = render_report(&sets);

    let data_row = report.lines().nth(2).unwrap();
    assert!(data_row.contains("5.00"));
}

#[test]
fn any_unpriced_set_suppresses_the_total_line() {
    let sets = [
        set("75192-1", "Millennium Falcon", 2, Some(10.0), Some(15.0)),
        set("8880-1", "Super Car", 1, None, None),
    ];
    let report = render_report(&sets);

    assert!(!report.contains("Total price of the collection"));
    // 未定价的行用 ? 占位，行本身不会丢
    let unpriced_row = report.lines().nth(3).unwrap();
    assert!(unpriced_row.starts_with("8880-1"));
    assert!(unpriced_row.contains('?'));
}

#[test]
fn fully_priced_collection_prints_the_total() {
    let sets = [set("8880-1", "Super Car", 3, Some(5.0), Some(7.0))];
    let report = render_report(&sets);

    assert!(report.ends_with("Total price of the collection: 21.00 EUR"));
}

#[test]
fn columns_are_padded_and_pipe_delimited() {
    let sets = [set("8880-1", "Super Car", 1, Some(120.0), None)];
    let report = render_report(&sets);
    let mut lines = report.lines();

    let header = lines.next().unwrap();
    assert!(header.starts_with("Number"));
    assert_eq!(header.matches('|').count(), 5);
    // 每列左对齐补齐到 24 个字符
    assert_eq!(header.split('|').next().unwrap().len(), 24);

    let rule = lines.next().unwrap();
    assert_eq!(rule.len(), header.len());
    assert!(rule.chars().all(|c| c == '-'));
}

#[test]
fn missing_values_render_as_question_marks() {
    let sets = [set("8880-1", "Super Car", 1, None, None)];
    let report = render_report(&sets);

    let data_row = report.lines().nth(2).unwrap();
    let cells: Vec<&str> = data_row.split('|').map(str::trim).collect();
    assert_eq!(cells[3], "?");
    assert_eq!(cells[4], "?");
    assert_eq!(cells[5], "?");
}
