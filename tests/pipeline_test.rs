use perfdash::{analyze, AnalyticsError, Decimal, PortfolioConfig, TradeRecord};

fn d(s: &str) -> Decimal {
    Decimal::from_str_canonical(s).unwrap()
}

fn trade(date: &str, pnl: &str) -> TradeRecord {
    let entry = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    TradeRecord::new(entry, d(pnl))
}

fn config(capital: &str, charges: &str) -> PortfolioConfig {
    PortfolioConfig::new(d(capital), d(charges))
}

fn reference_trades() -> Vec<TradeRecord> {
    vec![
        trade("2024-01-05", "1000"),
        trade("2024-01-10", "-500"),
        trade("2024-01-20", "2000"),
    ]
}

#[test]
fn test_reference_scenario_no_charges() {
    let report = analyze(&config("300000", "0"), vec![reference_trades()]).unwrap();

    let net: Vec<_> = report.trades.iter().map(|t| t.net_pnl).collect();
    assert_eq!(net, vec![d("1000"), d("-500"), d("2000")]);

    let equity: Vec<_> = report.trades.iter().map(|t| t.equity).collect();
    assert_eq!(equity, vec![d("301000"), d("300500"), d("302500")]);

    let peak: Vec<_> = report.trades.iter().map(|t| t.peak_equity).collect();
    assert_eq!(peak, vec![d("301000"), d("301000"), d("302500")]);

    let drawdown: Vec<_> = report.trades.iter().map(|t| t.drawdown).collect();
    assert_eq!(drawdown, vec![d("0"), d("-500"), d("0")]);

    assert_eq!(report.summary.total_profit, d("2500"));
    assert_eq!(
        report.summary.total_return_pct.round_dp(3).to_string(),
        "0.833"
    );
}

#[test]
fn test_charges_amortized_flat_across_trades() {
    // 9000 over 3 trades: 3000 each, regardless of each trade's magnitude.
    let report = analyze(&config("300000", "9000"), vec![reference_trades()]).unwrap();

    let net: Vec<_> = report.trades.iter().map(|t| t.net_pnl).collect();
    assert_eq!(net, vec![d("-2000"), d("-3500"), d("-1000")]);

    // Deducted charges reassemble to the configured total.
    let deducted: Decimal = report
        .trades
        .iter()
        .map(|t| t.trade.pnl - t.net_pnl)
        .sum();
    assert_eq!(deducted, d("9000"));
}

#[test]
fn test_empty_upload_is_a_valid_run() {
    let report = analyze(&config("300000", "5000"), vec![vec![]]).unwrap();

    assert!(report.trades.is_empty());
    assert!(report.aggregates.monthly_pnl.is_empty());
    assert_eq!(report.summary.total_profit, Decimal::zero());
    assert_eq!(report.summary.total_return_pct, Decimal::zero());
    assert_eq!(report.summary.avg_monthly_profit, Decimal::zero());
    assert_eq!(report.summary.max_drawdown, Decimal::zero());
    assert_eq!(report.summary.max_drawdown_pct, Decimal::zero());
}

#[test]
fn test_invalid_capital_rejected_before_pipeline() {
    let err = analyze(&config("0", "0"), vec![reference_trades()]).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidConfig(_)));
}

#[test]
fn test_peak_nondecreasing_and_drawdown_nonpositive() {
    let trades = vec![
        trade("2024-01-01", "250"),
        trade("2024-01-02", "-900"),
        trade("2024-02-01", "40.5"),
        trade("2024-02-15", "1200"),
        trade("2024-03-01", "-1"),
        trade("2024-03-02", "-0.25"),
    ];
    let report = analyze(&config("50000", "120"), vec![trades]).unwrap();

    let mut prev_peak = Decimal::zero();
    for t in &report.trades {
        assert!(t.peak_equity >= prev_peak);
        assert!(t.drawdown <= Decimal::zero());
        prev_peak = t.peak_equity;
    }
}

#[test]
fn test_dataset_opening_underwater_has_no_drawdown_until_peak_lost() {
    // A lone losing trade is its own equity peak: drawdown stays 0 and no
    // loss is reported against starting capital.
    let report = analyze(&config("100000", "0"), vec![vec![trade("2024-01-05", "-1000")]]).unwrap();

    assert_eq!(report.trades[0].equity, d("99000"));
    assert_eq!(report.trades[0].peak_equity, d("99000"));
    assert_eq!(report.trades[0].drawdown, Decimal::zero());
    assert_eq!(report.summary.max_drawdown, Decimal::zero());
    assert_eq!(report.summary.max_drawdown_pct, Decimal::zero());
    assert_eq!(report.aggregates.yearly_max_drawdown[&2024], Decimal::zero());
}

#[test]
fn test_monthly_buckets_partition_total_profit() {
    let trades = vec![
        trade("2023-11-01", "300"),
        trade("2023-12-15", "-120.5"),
        trade("2024-01-05", "1000"),
        trade("2024-01-10", "-500"),
        trade("2024-06-20", "2000"),
    ];
    let report = analyze(&config("300000", "777"), vec![trades]).unwrap();

    let bucket_sum: Decimal = report.aggregates.monthly_pnl.values().copied().sum();
    assert_eq!(bucket_sum, report.summary.total_profit);

    let yearly_sum: Decimal = report.aggregates.yearly_pnl.values().copied().sum();
    assert_eq!(yearly_sum, report.summary.total_profit);
}

#[test]
fn test_pipeline_is_idempotent() {
    let cfg = config("300000", "9000");
    let first = analyze(&cfg, vec![reference_trades()]).unwrap();
    let second = analyze(&cfg, vec![reference_trades()]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_merge_order_independence() {
    let a = vec![trade("2024-01-05", "1000"), trade("2024-03-01", "700")];
    let b = vec![trade("2024-02-10", "-500"), trade("2024-04-01", "50")];

    let cfg = config("300000", "400");
    let forward = analyze(&cfg, vec![a.clone(), b.clone()]).unwrap();
    let reversed = analyze(&cfg, vec![b, a]).unwrap();

    assert_eq!(forward, reversed);
}

#[test]
fn test_passthrough_columns_survive_the_pipeline() {
    let trades = vec![trade("2024-01-05", "1000")
        .with_extra(vec![("Trade #".to_string(), "T-42".to_string())])];
    let report = analyze(&config("300000", "0"), vec![trades]).unwrap();
    assert_eq!(report.trades[0].trade.extra[0].1, "T-42");
}

#[test]
fn test_same_day_trades_accumulate_in_input_order() {
    let trades = vec![
        trade("2024-01-05", "1000").with_extra(vec![("Trade #".into(), "first".into())]),
        trade("2024-01-05", "-400").with_extra(vec![("Trade #".into(), "second".into())]),
    ];
    let report = analyze(&config("300000", "0"), vec![trades]).unwrap();

    assert_eq!(report.trades[0].trade.extra[0].1, "first");
    assert_eq!(report.trades[0].equity, d("301000"));
    assert_eq!(report.trades[1].equity, d("300600"));
    assert_eq!(report.trades[1].drawdown, d("-400"));
}
