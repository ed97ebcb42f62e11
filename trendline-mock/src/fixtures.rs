use trendline_types::Build;

/// Canned newest-first histories with per-build (high, normal, low) counts.
pub fn by_job(job: &str) -> Option<Vec<(Build, [i64; 3])>> {
    match job {
        "stable" => Some(build(vec![
            (4, "2023-01-03T10:00:00", [0, 2, 5]),
            (3, "2023-01-02T15:30:00", [1, 3, 4]),
            (2, "2023-01-02T09:00:00", [1, 1, 2]),
            (1, "2023-01-01T12:00:00", [2, 4, 4]),
        ])),
        "nightly" => Some(build(vec![
            (12, "2023-01-04T02:00:00", [3, 0, 1]),
            (11, "2023-01-02T02:00:00", [5, 2, 0]),
        ])),
        _ => None,
    }
}

fn build(rows: Vec<(u64, &str, [i64; 3])>) -> Vec<(Build, [i64; 3])> {
    rows.into_iter()
        .map(|(number, ts, counts)| {
            let millis = chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S")
                .unwrap()
                .and_utc()
                .timestamp_millis();
            (Build::new(number, millis), counts)
        })
        .collect()
}
