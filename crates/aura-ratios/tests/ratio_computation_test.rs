//! Integration tests for client-side ratio computation

use approx::assert_relative_eq;
use aura_data::{FinancialRow, Periods, Statement, StatementKind};
use aura_ratios::frame::MAX_PRECISION;
use aura_ratios::solvency::DebtRatio;
use aura_ratios::{
    PrecomputedRatios, Ratio, RatioConfig, RatioContext, RatioKind, RatioSource, compute_ratios,
};
use rstest::rstest;

fn row(item: &str, values: &[(&str, Option<f64>)]) -> FinancialRow {
    values
        .iter()
        .fold(FinancialRow::new(item), |r, &(p, v)| r.with_value(p, v))
}

fn periods() -> Periods {
    Periods::from(vec!["2020", "2021", "2022"])
}

fn balance_sheet() -> Statement {
    Statement::new(
        StatementKind::BalanceSheet,
        vec![
            row("货币资金", &[("2020", Some(100.0)), ("2021", Some(120.0))]),
            row("应收票据及应收账款", &[("2020", Some(50.0)), ("2021", Some(80.0)), ("2022", Some(0.0))]),
            row("存货", &[("2020", Some(40.0)), ("2021", None), ("2022", Some(25.0))]),
            row("流动资产合计", &[("2020", Some(300.0)), ("2021", Some(330.0)), ("2022", Some(360.0))]),
            row("资产总计", &[("2020", Some(1000.0)), ("2021", Some(1200.0)), ("2022", Some(0.0))]),
            row("短期借款", &[("2020", Some(100.0)), ("2021", Some(90.0))]),
            row("长期借款", &[("2020", Some(150.0))]),
            row("流动负债合计", &[("2020", Some(200.0)), ("2021", Some(220.0)), ("2022", Some(0.0))]),
            row("负债合计", &[("2020", Some(600.0)), ("2021", Some(720.0)), ("2022", Some(700.0))]),
            row("所有者权益（或股东权益）合计", &[("2020", Some(400.0)), ("2021", Some(480.0)), ("2022", None)]),
        ],
    )
}

fn income_statement() -> Statement {
    Statement::new(
        StatementKind::IncomeStatement,
        vec![
            row("一、营业总收入", &[("2020", Some(800.0)), ("2021", Some(900.0)), ("2022", Some(950.0))]),
            row("其中：营业成本", &[("2020", Some(500.0)), ("2021", Some(560.0)), ("2022", Some(600.0))]),
            row("归属于母公司所有者的净利润", &[("2020", Some(55.0)), ("2021", Some(70.0))]),
            row("净利润", &[("2020", Some(60.0)), ("2021", Some(72.0)), ("2022", Some(-10.0))]),
        ],
    )
}

fn compute() -> aura_ratios::RatioSet {
    let bs = balance_sheet();
    let is = income_statement();
    let source = RatioSource::Raw {
        balance_sheet: &bs,
        income_statement: &is,
    };
    compute_ratios(&source, &periods(), &RatioConfig::default()).unwrap()
}

#[test]
fn test_every_series_matches_period_count() {
    let set = compute();
    for (kind, series) in set.iter() {
        assert_eq!(series.len(), 3, "{kind}");
    }
}

#[rstest]
#[case(RatioKind::DebtRatio, [Some(60.0), Some(60.0), None])]
#[case(RatioKind::CurrentRatio, [Some(1.5), Some(1.5), None])]
#[case(RatioKind::QuickRatio, [Some(1.3), Some(1.5), None])]
#[case(RatioKind::InterestDebtRatio, [Some(25.0), Some(7.5), None])]
#[case(RatioKind::Roe, [Some(15.0), Some(15.0), None])]
#[case(RatioKind::CapitalAccumulationRatio, [None, Some(20.0), None])]
#[case(RatioKind::MainNetProfitRatio, [Some(7.5), Some(8.0), Some(-1.05)])]
#[case(RatioKind::AssetTurnover, [Some(0.8), Some(0.75), None])]
#[case(RatioKind::ReceivableTurnover, [Some(16.0), Some(11.25), None])]
#[case(RatioKind::InventoryTurnover, [Some(12.5), None, Some(24.0)])]
fn test_ratio_values(#[case] kind: RatioKind, #[case] expected: [Option<f64>; 3]) {
    let set = compute();
    let actual = set.get(kind);
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        match (a, e) {
            (Some(a), Some(e)) => assert_relative_eq!(*a, e, epsilon = 1e-9),
            (None, None) => {}
            _ => panic!("{kind}[{i}]: expected {e:?}, got {a:?}"),
        }
    }
}

#[test]
fn test_debt_ratio_end_to_end() {
    let bs = vec![
        row("资产总计", &[("2020", Some(1000.0)), ("2021", Some(1200.0))]),
        row("负债合计", &[("2020", Some(600.0)), ("2021", Some(720.0))]),
    ];
    let is: Vec<FinancialRow> = Vec::new();
    let periods = Periods::from(vec!["2020", "2021"]);
    let source = RatioSource::select(None, &bs, &is);
    let set = compute_ratios(&source, &periods, &RatioConfig::default()).unwrap();

    assert_eq!(set.get(RatioKind::DebtRatio), &[Some(60.0), Some(60.0)]);
    // nothing from the income statement
    assert_eq!(set.get(RatioKind::Roe), &[None, None]);
}

#[test]
fn test_missing_statements_yield_all_null() {
    let empty: Vec<FinancialRow> = Vec::new();
    let periods = periods();
    let source = RatioSource::select(None, &empty, &empty);
    let set = compute_ratios(&source, &periods, &RatioConfig::default()).unwrap();
    for (kind, series) in set.iter() {
        assert_eq!(series.len(), periods.len());
        assert!(series.iter().all(Option::is_none), "{kind} should be all null");
    }
}

#[test]
fn test_precision_is_configurable() {
    let bs = vec![
        row("流动资产合计", &[("2020", Some(1.0))]),
        row("流动负债合计", &[("2020", Some(3.0))]),
    ];
    let is: Vec<FinancialRow> = Vec::new();
    let periods = Periods::from(vec!["2020"]);
    let source = RatioSource::select(None, &bs, &is);

    let two = compute_ratios(&source, &periods, &RatioConfig::default()).unwrap();
    assert_eq!(two.get(RatioKind::CurrentRatio), &[Some(0.33)]);

    let four = compute_ratios(&source, &periods, &RatioConfig { precision: 4 }).unwrap();
    assert_eq!(four.get(RatioKind::CurrentRatio), &[Some(0.3333)]);
}

#[test]
fn test_precomputed_source_wins_when_present() {
    let bs = balance_sheet();
    let is = income_statement();
    let precomputed = PrecomputedRatios::new()
        .with_value("2020", "资产负债率", 61.5)
        .with_value("2022", "资产负债率", 58.25);
    let source = RatioSource::select(Some(&precomputed), &bs, &is);
    let set = compute_ratios(&source, &periods(), &RatioConfig::default()).unwrap();

    assert_eq!(set.get(RatioKind::DebtRatio), &[Some(61.5), None, Some(58.25)]);
    assert!(set.get(RatioKind::CurrentRatio).iter().all(Option::is_none));
}

#[test]
fn test_precision_is_capped() {
    let bs = vec![
        row("资产总计", &[("2020", Some(1000.0)), ("2021", Some(3.0))]),
        row("负债合计", &[("2020", Some(600.0)), ("2021", Some(1.0))]),
    ];
    let is: Vec<FinancialRow> = Vec::new();
    let periods = Periods::from(vec!["2020", "2021"]);
    let source = RatioSource::select(None, &bs, &is);

    let capped = compute_ratios(&source, &periods, &RatioConfig { precision: MAX_PRECISION }).unwrap();
    for precision in [309, 400, u32::MAX] {
        let set = compute_ratios(&source, &periods, &RatioConfig { precision }).unwrap();
        let series = set.get(RatioKind::DebtRatio);
        assert!(series.iter().flatten().all(|v| v.is_finite()), "precision {precision}");
        assert_eq!(series, capped.get(RatioKind::DebtRatio));
    }
    assert_relative_eq!(capped.get(RatioKind::DebtRatio)[0].unwrap(), 60.0);
}

#[test]
fn test_interest_debt_null_when_no_component_reported() {
    let bs = vec![
        row("资产总计", &[("2020", Some(1000.0)), ("2021", Some(1000.0))]),
        row("短期借款", &[("2021", Some(0.0))]),
    ];
    let is: Vec<FinancialRow> = Vec::new();
    let periods = Periods::from(vec!["2020", "2021"]);
    let source = RatioSource::select(None, &bs, &is);
    let set = compute_ratios(&source, &periods, &RatioConfig::default()).unwrap();

    // 2020 reports none of the three components; 2021 reports a zero
    assert_eq!(set.get(RatioKind::InterestDebtRatio), &[None, Some(0.0)]);
}

#[test]
fn test_single_ratio_compute_matches_batch() {
    let bs = balance_sheet();
    let is = income_statement();
    let periods = periods();
    let config = RatioConfig::default();
    let ctx = RatioContext::new(&bs, &is, &periods, &config);

    let single = DebtRatio.compute(&ctx).unwrap();
    assert_eq!(single.as_slice(), compute().get(RatioKind::DebtRatio));
}
