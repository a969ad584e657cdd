//! Cross-dataset price-to-rent ratio.
//!
//! The ratio is the number of years of rent needed to equal the purchase
//! price at the same location: `buy_price / (12 × rent_price)`. The formula
//! is fixed. The join is strictly inner — a location with only one market's
//! data produces no ratio, even when that empties the result.

use polars::prelude::*;

use super::{require_columns, MetricsError};

/// Pre-aggregate a listing table to one row per zip code.
///
/// Groups by `zip_code` (and `canton` when present) and takes the mean
/// `price_chf`. This is the expected input shape for [`price_to_rent`].
pub fn mean_price_by_zip(df: &DataFrame) -> Result<DataFrame, MetricsError> {
    require_columns(df, &["zip_code", "price_chf"], "zip aggregation")?;

    let mut keys = vec![col("zip_code")];
    if df.schema().contains("canton") {
        keys.push(col("canton"));
    }

    let agg = df
        .clone()
        .lazy()
        .group_by_stable(keys)
        .agg([col("price_chf").mean()])
        .collect()?;
    Ok(agg)
}

/// Join buy-side and rent-side zip aggregates and compute the ratio.
///
/// Join key is `zip_code`, extended to `(zip_code, canton)` when canton is
/// present on both sides so that same-zip rows in different cantons are not
/// collapsed. Missing required columns on either input are a validation
/// error, never a silently empty result.
///
/// Output columns:
/// `{zip_code, canton?, buy_price_chf, rent_price_chf, price_to_rent_ratio}`.
pub fn price_to_rent(buy: &DataFrame, rent: &DataFrame) -> Result<DataFrame, MetricsError> {
    require_columns(buy, &["zip_code", "price_chf"], "price_to_rent (buy input)")?;
    require_columns(rent, &["zip_code", "price_chf"], "price_to_rent (rent input)")?;

    let join_on_canton = buy.schema().contains("canton") && rent.schema().contains("canton");

    let mut buy_cols = vec![col("zip_code"), col("price_chf").alias("buy_price_chf")];
    let mut rent_cols = vec![col("zip_code"), col("price_chf").alias("rent_price_chf")];
    let mut on = vec![col("zip_code")];
    let mut out_cols = vec![col("zip_code")];
    if join_on_canton {
        buy_cols.insert(1, col("canton"));
        rent_cols.insert(1, col("canton"));
        on.push(col("canton"));
        out_cols.push(col("canton"));
    }
    out_cols.extend([
        col("buy_price_chf"),
        col("rent_price_chf"),
        col("price_to_rent_ratio"),
    ]);

    let joined = buy
        .clone()
        .lazy()
        .select(buy_cols)
        .join(
            rent.clone().lazy().select(rent_cols),
            on.clone(),
            on,
            JoinArgs::new(JoinType::Inner),
        )
        .with_column(
            when(col("rent_price_chf").gt(lit(0.0)))
                .then(col("buy_price_chf") / (lit(12.0) * col("rent_price_chf")))
                .otherwise(lit(NULL))
                .alias("price_to_rent_ratio"),
        )
        .select(out_cols)
        .collect()?;

    Ok(joined)
}

/// Per-canton mean price of both markets, side by side.
///
/// The join is outer: a canton present in only one market keeps its row with
/// a null on the other side, so the comparison never hides half the picture.
/// Output columns: `{canton, rent_price_chf, buy_price_chf}`, canton order
/// alphabetical.
pub fn market_comparison(rent: &DataFrame, buy: &DataFrame) -> Result<DataFrame, MetricsError> {
    require_columns(rent, &["canton", "price_chf"], "market comparison (rent input)")?;
    require_columns(buy, &["canton", "price_chf"], "market comparison (buy input)")?;

    let rent_agg = rent
        .clone()
        .lazy()
        .group_by_stable([col("canton")])
        .agg([col("price_chf").mean().alias("rent_price_chf")]);
    let buy_agg = buy
        .clone()
        .lazy()
        .group_by_stable([col("canton")])
        .agg([col("price_chf").mean().alias("buy_price_chf")]);

    let merged = rent_agg
        .join(
            buy_agg,
            [col("canton")],
            [col("canton")],
            JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns),
        )
        .sort(
            ["canton"],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .collect()?;
    Ok(merged)
}

/// Median years-to-break-even per canton, most expensive first.
///
/// Input is the [`price_to_rent`] output; the median (not the mean) keeps a
/// single outlier zip from dominating a canton.
pub fn median_ratio_by_canton(ratios: &DataFrame) -> Result<DataFrame, MetricsError> {
    require_columns(
        ratios,
        &["canton", "price_to_rent_ratio"],
        "break-even aggregation",
    )?;

    let agg = ratios
        .clone()
        .lazy()
        .group_by_stable([col("canton")])
        .agg([col("price_to_rent_ratio").median()])
        .sort(
            ["price_to_rent_ratio"],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_nulls_last(true)
                .with_maintain_order(true),
        )
        .collect()?;
    Ok(agg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_matches_fixed_formula() {
        let buy = df!(
            "zip_code" => &[1000i64],
            "price_chf" => &[1_000_000.0],
        )
        .unwrap();
        let rent = df!(
            "zip_code" => &[1000i64],
            "price_chf" => &[2000.0],
        )
        .unwrap();

        let result = price_to_rent(&buy, &rent).unwrap();
        assert_eq!(result.height(), 1);

        let ratio = result.column("price_to_rent_ratio").unwrap().f64().unwrap();
        let expected = 1_000_000.0 / (12.0 * 2000.0);
        assert!((ratio.get(0).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn disjoint_zip_codes_yield_empty_result() {
        let buy = df!(
            "zip_code" => &[1000i64, 1001],
            "price_chf" => &[1_000_000.0, 900_000.0],
        )
        .unwrap();
        let rent = df!(
            "zip_code" => &[8001i64, 8002],
            "price_chf" => &[2000.0, 2500.0],
        )
        .unwrap();

        let result = price_to_rent(&buy, &rent).unwrap();
        assert_eq!(result.height(), 0);
    }

    #[test]
    fn join_extends_to_canton_when_both_sides_have_it() {
        // Same zip in two cantons must not collapse into one pair.
        let buy = df!(
            "zip_code" => &[1000i64, 1000],
            "canton" => &["VD", "FR"],
            "price_chf" => &[1_000_000.0, 800_000.0],
        )
        .unwrap();
        let rent = df!(
            "zip_code" => &[1000i64, 1000],
            "canton" => &["VD", "FR"],
            "price_chf" => &[2000.0, 1500.0],
        )
        .unwrap();

        let result = price_to_rent(&buy, &rent).unwrap();
        assert_eq!(result.height(), 2);
        assert!(result.schema().contains("canton"));
    }

    #[test]
    fn canton_on_one_side_only_falls_back_to_zip_join() {
        let buy = df!(
            "zip_code" => &[1000i64],
            "canton" => &["VD"],
            "price_chf" => &[1_000_000.0],
        )
        .unwrap();
        let rent = df!(
            "zip_code" => &[1000i64],
            "price_chf" => &[2000.0],
        )
        .unwrap();

        let result = price_to_rent(&buy, &rent).unwrap();
        assert_eq!(result.height(), 1);
        assert!(!result.schema().contains("canton"));
    }

    #[test]
    fn missing_columns_are_a_validation_error_on_either_side() {
        let good = df!(
            "zip_code" => &[1000i64],
            "price_chf" => &[2000.0],
        )
        .unwrap();
        let bad = df!("zip_code" => &[1000i64]).unwrap();

        assert!(matches!(
            price_to_rent(&bad, &good),
            Err(MetricsError::MissingColumn { ref column, .. }) if column == "price_chf"
        ));
        assert!(matches!(
            price_to_rent(&good, &bad),
            Err(MetricsError::MissingColumn { ref column, .. }) if column == "price_chf"
        ));
    }

    #[test]
    fn non_positive_rent_yields_null_ratio() {
        let buy = df!(
            "zip_code" => &[1000i64],
            "price_chf" => &[1_000_000.0],
        )
        .unwrap();
        let rent = df!(
            "zip_code" => &[1000i64],
            "price_chf" => &[0.0],
        )
        .unwrap();

        let result = price_to_rent(&buy, &rent).unwrap();
        let ratio = result.column("price_to_rent_ratio").unwrap().f64().unwrap();
        assert_eq!(ratio.get(0), None);
    }

    #[test]
    fn mean_price_by_zip_groups_per_location() {
        let df = df!(
            "zip_code" => &[1000i64, 1000, 8001],
            "canton" => &["VD", "VD", "ZH"],
            "price_chf" => &[2000.0, 3000.0, 4000.0],
        )
        .unwrap();

        let agg = mean_price_by_zip(&df).unwrap();
        assert_eq!(agg.height(), 2);

        let price = agg.column("price_chf").unwrap().f64().unwrap();
        assert_eq!(price.get(0), Some(2500.0));
        assert_eq!(price.get(1), Some(4000.0));
    }

    #[test]
    fn market_comparison_keeps_one_sided_cantons() {
        let rent = df!(
            "canton" => &["VD", "VD", "GE"],
            "price_chf" => &[2000.0, 3000.0, 2200.0],
        )
        .unwrap();
        let buy = df!(
            "canton" => &["VD", "ZH"],
            "price_chf" => &[1_000_000.0, 1_500_000.0],
        )
        .unwrap();

        let merged = market_comparison(&rent, &buy).unwrap();
        assert_eq!(merged.height(), 3);

        let cantons = merged.column("canton").unwrap().str().unwrap();
        assert_eq!(cantons.get(0), Some("GE"));
        assert_eq!(cantons.get(1), Some("VD"));
        assert_eq!(cantons.get(2), Some("ZH"));

        let rents = merged.column("rent_price_chf").unwrap().f64().unwrap();
        let buys = merged.column("buy_price_chf").unwrap().f64().unwrap();
        // GE has no buy data, ZH no rent data; VD averages both sides
        assert_eq!(buys.get(0), None);
        assert_eq!(rents.get(1), Some(2500.0));
        assert_eq!(buys.get(1), Some(1_000_000.0));
        assert_eq!(rents.get(2), None);
    }

    #[test]
    fn market_comparison_requires_canton_on_both_sides() {
        let with_canton = df!(
            "canton" => &["VD"],
            "price_chf" => &[2000.0],
        )
        .unwrap();
        let without = df!("price_chf" => &[1_000_000.0]).unwrap();

        assert!(matches!(
            market_comparison(&with_canton, &without),
            Err(MetricsError::MissingColumn { ref column, .. }) if column == "canton"
        ));
    }

    #[test]
    fn median_break_even_sorts_descending() {
        let ratios = df!(
            "canton" => &["VD", "VD", "ZH"],
            "price_to_rent_ratio" => &[30.0, 40.0, 20.0],
        )
        .unwrap();

        let agg = median_ratio_by_canton(&ratios).unwrap();
        let cantons = agg.column("canton").unwrap().str().unwrap();
        assert_eq!(cantons.get(0), Some("VD"));
        assert_eq!(cantons.get(1), Some("ZH"));

        let med = agg.column("price_to_rent_ratio").unwrap().f64().unwrap();
        assert_eq!(med.get(0), Some(35.0));
    }
}
