use trendline_types::{Build, ChartConfig};

#[test]
fn chart_config_roundtrip() {
    let cfg = ChartConfig {
        use_build_date_as_domain: true,
        build_count: Some(25),
        time_zone: chrono_tz::Europe::Rome,
    };

    let json = serde_json::to_string(&cfg).expect("serialize chart config");
    let de: ChartConfig = serde_json::from_str(&json).expect("deserialize chart config");

    assert!(de.use_build_date_as_domain);
    assert_eq!(de.build_count, Some(25));
    assert_eq!(de.time_zone, chrono_tz::Europe::Rome);
}

#[test]
fn chart_config_defaults_to_build_domain_in_utc() {
    let cfg = ChartConfig::default();

    assert!(!cfg.use_build_date_as_domain);
    assert_eq!(cfg.build_count, None);
    assert_eq!(cfg.time_zone, chrono_tz::UTC);
    assert!(cfg.validate().is_ok());
}

#[test]
fn zero_build_count_is_rejected() {
    let cfg = ChartConfig {
        build_count: Some(0),
        ..ChartConfig::default()
    };

    let err = cfg.validate().expect_err("zero cutoff must not validate");
    assert!(matches!(err, trendline_types::TrendError::InvalidConfig(_)));
}

#[test]
fn build_ordering_follows_build_number() {
    let mut builds = vec![Build::new(3, 300), Build::new(1, 100), Build::new(2, 200)];
    builds.sort();

    let numbers: Vec<u64> = builds.iter().map(|b| b.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn build_date_respects_time_zone() {
    // 2023-01-01 23:30 UTC is already 2023-01-02 in Rome (UTC+1 in winter).
    let build = Build::new(7, 1_672_615_800_000);

    assert_eq!(
        build.date(chrono_tz::UTC).to_string(),
        "2023-01-01".to_string()
    );
    assert_eq!(
        build.date(chrono_tz::Europe::Rome).to_string(),
        "2023-01-02".to_string()
    );
}
