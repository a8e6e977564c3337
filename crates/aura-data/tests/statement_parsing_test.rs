//! Integration tests for statement parsing and line-item lookup

use aura_data::row::aligned_values;
use aura_data::{Periods, RowLookup, Statement, StatementKind, get_item};

const BALANCE_SHEET: &str = r#"{
    "data": [
        {"item": "货币资金", "2020": 150.0, "2021": 180.0, "2025_Q1": 175.5},
        {"item": "应收票据及应收账款", "2020": 80.0, "2021": "95.5"},
        {"item": "存货", "2020": 60.0, "2021": null},
        {"item": "流动资产合计", "2020": 400.0, "2021": 450.0},
        {"item": "非流动负债合计", "2020": 200.0, "2021": 210.0},
        {"item": "流动负债合计", "2020": 250.0, "2021": 260.0},
        {"item": "资产总计", "2020": 1000.0, "2021": 1200.0}
    ]
}"#;

fn balance_sheet() -> Statement {
    Statement::from_json_str(StatementKind::BalanceSheet, BALANCE_SHEET).unwrap()
}

#[test]
fn test_lookup_through_statement() {
    let bs = balance_sheet();

    let receivable = bs.find("应收账款").unwrap();
    assert_eq!(receivable.item, "应收票据及应收账款");
    assert_eq!(receivable.value("2021"), Some(95.5));

    // exact label wins over the earlier "非流动负债合计"
    let current_debt = bs.find("流动负债合计").unwrap();
    assert_eq!(current_debt.value("2020"), Some(250.0));
}

#[test]
fn test_catalog_items_resolve_against_statement() {
    let bs = balance_sheet();
    let periods = Periods::from(vec!["2020", "2021", "2025_Q1"]);

    let cash = get_item("cash").unwrap();
    let values = aligned_values(bs.find(cash.label), &periods);
    assert_eq!(values, vec![Some(150.0), Some(180.0), Some(175.5)]);

    let goodwill = aligned_values(bs.find("商誉"), &periods);
    assert_eq!(goodwill.len(), periods.len());
    assert!(goodwill.iter().all(Option::is_none));
}

#[test]
fn test_snapshot_for_drilldown() {
    let bs = balance_sheet();
    let snapshot = bs.snapshot("2021");
    assert_eq!(snapshot.len(), bs.len());
    assert_eq!(snapshot[2], ("存货", None));
    assert_eq!(snapshot[6], ("资产总计", Some(1200.0)));
}

#[test]
fn test_roundtrip_preserves_rows() {
    let bs = balance_sheet();
    let json = serde_json::to_string(&bs.rows).unwrap();
    let again = Statement::from_json_str(StatementKind::BalanceSheet, &json).unwrap();
    assert_eq!(again.rows, bs.rows);
}
