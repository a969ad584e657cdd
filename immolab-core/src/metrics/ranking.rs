//! Canton aggregation and ranking.

use polars::prelude::*;

use super::per_area::with_price_per_m2;
use super::{require_columns, MetricsError};

/// Fixed label set for the top three ranks.
const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Mean price per m² for each canton, sorted descending by the mean.
///
/// Output columns: `{canton, avg_price_per_m2}`. Cantons whose listings all
/// lack a usable metric sort last (null mean). Empty input yields an empty
/// table, not an error.
pub fn average_price_per_m2_by_canton(df: &DataFrame) -> Result<DataFrame, MetricsError> {
    require_columns(df, &["canton"], "canton aggregation")?;
    let with_ratio = with_price_per_m2(df)?;

    let agg = with_ratio
        .lazy()
        .group_by_stable([col("canton")])
        .agg([col("price_per_m2").mean().alias("avg_price_per_m2")])
        .sort(
            ["avg_price_per_m2"],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_nulls_last(true)
                .with_maintain_order(true),
        )
        .collect()?;

    Ok(agg)
}

/// Rank cantons by mean price per m², medals for the top three.
///
/// Output columns: `{Rank, Canton, <metric_name>}`. The rank sequence is
/// 1..N over the descending sort; ties keep the table's incoming row order
/// (the sort is stable).
pub fn rank_cantons(df: &DataFrame, metric_name: &str) -> Result<DataFrame, MetricsError> {
    let agg = average_price_per_m2_by_canton(df)?;

    let cantons: Vec<Option<String>> = agg
        .column("canton")?
        .str()?
        .into_iter()
        .map(|opt| opt.map(str::to_string))
        .collect();
    let means: Vec<Option<f64>> = agg
        .column("avg_price_per_m2")?
        .f64()?
        .into_iter()
        .collect();
    let ranks: Vec<String> = (0..agg.height()).map(rank_label).collect();

    let out = df!(
        "Rank" => ranks,
        "Canton" => cantons,
        metric_name => means,
    )?;
    Ok(out)
}

fn rank_label(index: usize) -> String {
    match MEDALS.get(index) {
        Some(medal) => (*medal).to_string(),
        None => (index + 1).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canton_means_match_hand_computation() {
        let df = df!(
            "canton" => &["VD", "VD", "ZH"],
            "price_chf" => &[2000.0, 1500.0, 3000.0],
            "area_m2" => &[50.0, 30.0, 100.0],
        )
        .unwrap();

        let result = average_price_per_m2_by_canton(&df).unwrap();
        assert_eq!(result.height(), 2);

        let vd_avg = (2000.0 / 50.0 + 1500.0 / 30.0) / 2.0;
        let zh_avg = 3000.0 / 100.0;

        let cantons = result.column("canton").unwrap().str().unwrap();
        let means = result.column("avg_price_per_m2").unwrap().f64().unwrap();

        // VD (45.0) ranks above ZH (30.0)
        assert_eq!(cantons.get(0), Some("VD"));
        assert!((means.get(0).unwrap() - vd_avg).abs() < 1e-9);
        assert_eq!(cantons.get(1), Some("ZH"));
        assert!((means.get(1).unwrap() - zh_avg).abs() < 1e-9);
    }

    #[test]
    fn ranking_is_descending() {
        let df = df!(
            "canton" => &["VD", "VD", "ZH", "GE"],
            "price_chf" => &[2000.0, 1500.0, 3000.0, 4000.0],
            "area_m2" => &[50.0, 30.0, 100.0, 80.0],
        )
        .unwrap();

        let result = average_price_per_m2_by_canton(&df).unwrap();
        let cantons = result.column("canton").unwrap().str().unwrap();

        // GE (50.0) > VD (45.0) > ZH (30.0)
        assert_eq!(cantons.get(0), Some("GE"));
        assert_eq!(cantons.get(1), Some("VD"));
        assert_eq!(cantons.get(2), Some("ZH"));
    }

    #[test]
    fn top_three_get_medals_rest_numeric() {
        let df = df!(
            "canton" => &["A", "B", "C", "D", "E"],
            "price_chf" => &[5000.0, 4000.0, 3000.0, 2000.0, 1000.0],
            "area_m2" => &[100.0, 100.0, 100.0, 100.0, 100.0],
        )
        .unwrap();

        let result = rank_cantons(&df, "Avg Rent/m²").unwrap();
        assert_eq!(result.height(), 5);

        let ranks = result.column("Rank").unwrap().str().unwrap();
        assert_eq!(ranks.get(0), Some("🥇"));
        assert_eq!(ranks.get(1), Some("🥈"));
        assert_eq!(ranks.get(2), Some("🥉"));
        assert_eq!(ranks.get(3), Some("4"));
        assert_eq!(ranks.get(4), Some("5"));

        // metric column carries the caller's label
        assert!(result.schema().contains("Avg Rent/m²"));
    }

    #[test]
    fn ties_keep_incoming_row_order() {
        let df = df!(
            "canton" => &["BE", "AG", "LU"],
            "price_chf" => &[1000.0, 1000.0, 1000.0],
            "area_m2" => &[50.0, 50.0, 50.0],
        )
        .unwrap();

        let result = average_price_per_m2_by_canton(&df).unwrap();
        let cantons = result.column("canton").unwrap().str().unwrap();
        assert_eq!(cantons.get(0), Some("BE"));
        assert_eq!(cantons.get(1), Some("AG"));
        assert_eq!(cantons.get(2), Some("LU"));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let df = df!(
            "canton" => Vec::<String>::new(),
            "price_chf" => Vec::<f64>::new(),
            "area_m2" => Vec::<f64>::new(),
        )
        .unwrap();

        let result = rank_cantons(&df, "Avg Rent/m²").unwrap();
        assert_eq!(result.height(), 0);
    }

    #[test]
    fn missing_canton_is_a_validation_error() {
        let df = df!(
            "price_chf" => &[2000.0],
            "area_m2" => &[50.0],
        )
        .unwrap();

        assert!(matches!(
            average_price_per_m2_by_canton(&df),
            Err(MetricsError::MissingColumn { ref column, .. }) if column == "canton"
        ));
    }
}
