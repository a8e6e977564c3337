//! Integration tests for report assembly from statement payloads.

use approx::assert_relative_eq;
use aura_data::{Periods, Statement, StatementKind};
use aura_output::{EngineConfig, ExportFormat, Exporter, TrendRequest, build_report};
use aura_ratios::PrecomputedRatios;
use aura_trend::TrendMode;
use rstest::rstest;

const BALANCE_SHEET: &str = r#"{"data": [
    {"item": "货币资金", "2020": 500000, "2021": 650000, "2022": 390000},
    {"item": "存货", "2020": 200, "2021": 240, "2022": "-"},
    {"item": "流动资产合计", "2020": 700, "2021": 800, "2022": 760},
    {"item": "资产总计", "2020": 1000, "2021": 1200, "2022": 1250},
    {"item": "流动负债合计", "2020": 350, "2021": 400, "2022": 380},
    {"item": "负债合计", "2020": 600, "2021": 720, "2022": 700},
    {"item": "所有者权益合计", "2020": 400, "2021": 480, "2022": 550}
]}"#;

const INCOME_STATEMENT: &str = r#"[
    {"item": "营业收入", "2020": 900, "2021": 1080, "2022": 1000},
    {"item": "营业成本", "2020": 600, "2021": 720, "2022": 700},
    {"item": "净利润", "2020": 80, "2021": 96, "2022": 55}
]"#;

fn statements() -> (Statement, Statement) {
    let bs = Statement::from_json_str(StatementKind::BalanceSheet, BALANCE_SHEET).unwrap();
    let is = Statement::from_json_str(StatementKind::IncomeStatement, INCOME_STATEMENT).unwrap();
    (bs, is)
}

fn periods() -> Periods {
    "2020,2021,2022".parse().unwrap()
}

#[rstest]
#[case(TrendMode::Value, [Some(60.0), Some(60.0), Some(56.0)])]
#[case(TrendMode::Yoy, [None, Some(0.0), Some(-6.67)])]
#[case(TrendMode::Qoq, [None, Some(0.0), Some(-6.67)])]
fn test_debt_ratio_by_mode(#[case] mode: TrendMode, #[case] expected: [Option<f64>; 3]) {
    let (bs, is) = statements();
    let request = TrendRequest::new(periods(), mode, ["debt_ratio"]);
    let report = build_report(&request, &bs, &is, None, &EngineConfig::default()).unwrap();

    let series = report.get("debt_ratio").unwrap();
    assert!(series.is_ratio);
    assert_eq!(series.values, expected.to_vec());
}

#[test]
fn test_mixed_request_in_abnormal_mode() {
    let (bs, is) = statements();
    let request = TrendRequest::new(
        periods(),
        TrendMode::Abnormal,
        ["cash", "roe", "not_a_metric", "inventory_turnover"],
    );
    let report = build_report(&request, &bs, &is, None, &EngineConfig::default()).unwrap();

    let keys: Vec<&str> = report.series.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["cash", "roe", "inventory_turnover"]);

    // cash: 500000 -> 650000 -> 390000 gives +30% and -40%
    let cash = report.get("cash").unwrap();
    assert_eq!(cash.values, vec![None, Some(30.0), Some(-40.0)]);
    assert_eq!(cash.anomalies.len(), 2);

    // roe: 20%, 20%, 10% gives 0% then -50%
    let roe = report.get("roe").unwrap();
    assert_eq!(roe.values, vec![None, Some(0.0), Some(-50.0)]);
    assert_eq!(roe.anomalies.len(), 1);
    assert_eq!(roe.anomalies[0].index, 2);

    // inventory is unreported ("-") in 2022
    let turnover = report.get("inventory_turnover").unwrap();
    assert_eq!(turnover.values, vec![None, Some(0.0), None]);

    assert_eq!(report.anomaly_count(), 3);
    // lowest plotted value is roe's -50%
    assert!(report.axis_floor() <= -55.0);
}

#[test]
fn test_precomputed_ratios_replace_computation() {
    let (bs, is) = statements();
    let precomputed = PrecomputedRatios::from_json_str(
        r#"{"data": {"2020": {"资产负债率": 61.234}, "2021": {"资产负债率": 59.1}}}"#,
    )
    .unwrap();
    let request = TrendRequest::new(periods(), TrendMode::Value, ["debt_ratio", "current_ratio"]);
    let report =
        build_report(&request, &bs, &is, Some(&precomputed), &EngineConfig::default()).unwrap();

    assert_eq!(report.ratio_source, "precomputed");
    let debt = report.get("debt_ratio").unwrap();
    assert_relative_eq!(debt.values[0].unwrap(), 61.234);
    assert_relative_eq!(debt.values[1].unwrap(), 59.1);
    assert_eq!(debt.values[2], None);
    assert_eq!(
        report.get("current_ratio").unwrap().values,
        vec![None, None, None]
    );
}

#[test]
fn test_config_threshold_applies() {
    let (bs, is) = statements();
    let config = EngineConfig::from_toml_str("[trend]\nanomaly_threshold = 35.0").unwrap();
    let request = TrendRequest::new(periods(), TrendMode::Abnormal, ["cash"]);
    let report = build_report(&request, &bs, &is, None, &config).unwrap();

    let cash = report.get("cash").unwrap();
    assert_eq!(cash.anomalies.len(), 1);
    assert_eq!(cash.anomalies[0].index, 2);
}

#[test]
fn test_full_export_workflow() {
    let (bs, is) = statements();
    let request = TrendRequest::new(periods(), TrendMode::Value, ["total_assets", "current_ratio"]);
    let report = build_report(&request, &bs, &is, None, &EngineConfig::default()).unwrap();

    let ascii = report.to_ascii_table();
    assert!(ascii.contains("资产总计"));
    assert!(ascii.contains("流动比率"));
    assert!(ascii.contains("2.00"));

    let markdown = report.to_markdown();
    assert!(markdown.contains("| Metric | 2020 | 2021 | 2022 |"));

    let csv = report.export_to_string(ExportFormat::Csv).unwrap();
    assert_eq!(csv.lines().count(), 1 + 2 * 3);

    let df = report.to_dataframe().unwrap();
    assert_eq!(df.shape(), (3, 3));
}

#[rstest]
#[case(TrendMode::Value)]
#[case(TrendMode::Yoy)]
fn test_oversized_precision_keeps_values_finite(#[case] mode: TrendMode) {
    let (bs, is) = statements();
    let config =
        EngineConfig::from_toml_str("[ratios]\nprecision = 400\n\n[trend]\nprecision = 400")
            .unwrap();
    let request = TrendRequest::new(periods(), mode, ["debt_ratio", "cash"]);
    let report = build_report(&request, &bs, &is, None, &config).unwrap();

    for series in &report.series {
        assert_eq!(series.values.len(), 3);
        assert!(
            series.values.iter().skip(1).all(|v| v.is_some_and(f64::is_finite)),
            "{} in {mode}",
            series.key
        );
    }
}
