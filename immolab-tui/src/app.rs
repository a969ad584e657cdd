//! Dashboard state — single-owner, main-thread only.
//!
//! The datasets are loaded once through [`DatasetStore`] and every filter
//! change recomputes the visible tables from the in-memory copies. The
//! tables are extracted into plain row vectors so rendering never touches
//! polars.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use polars::prelude::*;

use immolab_core::data::DatasetStore;
use immolab_core::domain::Market;
use immolab_core::metrics::{
    market_comparison, mean_price_by_zip, median_ratio_by_canton, price_to_rent, rank_cantons,
    with_price_per_m2, MetricsError,
};

const ROOMS_STEP: f64 = 0.5;

/// One row of the canton ranking table.
#[derive(Debug, Clone)]
pub struct RankedRow {
    pub rank_label: String,
    pub canton: String,
    pub value: f64,
}

/// One row of the per-zip price-to-rent table.
#[derive(Debug, Clone)]
pub struct RatioRow {
    pub zip_code: i64,
    pub canton: Option<String>,
    pub buy_price: f64,
    pub rent_price: f64,
    pub ratio: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct MedianRow {
    pub canton: String,
    pub ratio: Option<f64>,
}

/// One row of the rent-vs-buy comparison, per canton. A market without data
/// for the canton shows as None.
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub canton: String,
    pub rent_price: Option<f64>,
    pub buy_price: Option<f64>,
}

/// Headline numbers for the filtered active market.
#[derive(Debug, Clone, Default)]
pub struct Kpis {
    pub listing_count: usize,
    pub mean_price: Option<f64>,
    pub mean_area: Option<f64>,
    pub mean_price_per_m2: Option<f64>,
    pub canton_count: usize,
}

/// Sidebar filter state. Canton and room filters apply to both markets;
/// the price range applies to the active market only.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub all_cantons: Vec<String>,
    pub selected: BTreeSet<String>,
    pub min_rooms: f64,
    pub max_rooms: f64,
    pub rooms_limit: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub price_limit: f64,
}

impl Filters {
    fn from_datasets(rent: &DataFrame, buy: &DataFrame, market: Market) -> Self {
        let mut cantons = BTreeSet::new();
        for df in [rent, buy] {
            if !df.schema().contains("canton") {
                continue;
            }
            if let Ok(ca) = df.column("canton").and_then(|c| c.str().map(|s| s.clone())) {
                for c in ca.into_iter().flatten() {
                    cantons.insert(c.to_string());
                }
            }
        }
        let all_cantons: Vec<String> = cantons.iter().cloned().collect();

        let mut rooms_max = 0.0f64;
        for df in [rent, buy] {
            if let Some(max) = numeric_max(df, "rooms") {
                rooms_max = rooms_max.max(max);
            }
        }
        let rooms_limit = if rooms_max > 0.0 {
            round_up(rooms_max, ROOMS_STEP)
        } else {
            10.0
        };

        let mut filters = Self {
            all_cantons,
            selected: cantons,
            min_rooms: 0.0,
            max_rooms: rooms_limit,
            rooms_limit,
            min_price: 0.0,
            max_price: 0.0,
            price_limit: 0.0,
        };
        let active = match market {
            Market::Rent => rent,
            Market::Buy => buy,
        };
        filters.set_price_bounds(active, market);
        filters
    }

    /// Re-derive the price range from the active market's data.
    pub fn set_price_bounds(&mut self, active: &DataFrame, market: Market) {
        let step = price_step(market);
        self.price_limit = numeric_max(active, "price_chf")
            .map(|max| round_up(max, step))
            .unwrap_or(step);
        self.min_price = 0.0;
        self.max_price = self.price_limit;
    }
}

/// Price cap step per keypress, scaled to the market's magnitude.
pub fn price_step(market: Market) -> f64 {
    match market {
        Market::Rent => 100.0,
        Market::Buy => 50_000.0,
    }
}

fn round_up(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

fn numeric_max(df: &DataFrame, name: &str) -> Option<f64> {
    if !df.schema().contains(name) {
        return None;
    }
    df.column(name).ok()?.f64().ok()?.max()
}

/// Row mask for the sidebar filters. A row with a missing value in a
/// filtered column is dropped: an unknown canton, room count, or price
/// cannot be shown as satisfying a range.
pub(crate) fn apply_filters(
    df: &DataFrame,
    filters: &Filters,
    apply_price: bool,
) -> Result<DataFrame, PolarsError> {
    if df.height() == 0 {
        return Ok(df.clone());
    }
    let mut mask = BooleanChunked::full("mask".into(), true, df.height());

    if df.schema().contains("canton") {
        let canton = df.column("canton")?.str()?;
        let member: BooleanChunked = canton
            .into_iter()
            .map(|c| Some(c.is_some_and(|c| filters.selected.contains(c))))
            .collect();
        mask = &mask & &member;
    }
    if df.schema().contains("rooms") {
        let rooms = df.column("rooms")?.f64()?;
        let in_range: BooleanChunked = rooms
            .into_iter()
            .map(|r| Some(r.is_some_and(|r| r >= filters.min_rooms && r <= filters.max_rooms)))
            .collect();
        mask = &mask & &in_range;
    }
    if apply_price && df.schema().contains("price_chf") {
        let price = df.column("price_chf")?.f64()?;
        let in_range: BooleanChunked = price
            .into_iter()
            .map(|p| {
                Some(p.is_some_and(|p| p >= filters.min_price && p <= filters.max_price))
            })
            .collect();
        mask = &mask & &in_range;
    }
    df.filter(&mask)
}

struct ComputedTables {
    kpis: Kpis,
    ranking: Vec<RankedRow>,
    comparisons: Vec<ComparisonRow>,
    ratios: Vec<RatioRow>,
    medians: Vec<MedianRow>,
}

fn compute_tables(
    rent: &DataFrame,
    buy: &DataFrame,
    market: Market,
    filters: &Filters,
) -> Result<ComputedTables, MetricsError> {
    // The comparison and ratio sections honor the canton and room filters on
    // both markets; the price range only narrows the active market's side.
    let rent_filtered = apply_filters(rent, filters, market == Market::Rent)?;
    let buy_filtered = apply_filters(buy, filters, market == Market::Buy)?;
    let active = match market {
        Market::Rent => &rent_filtered,
        Market::Buy => &buy_filtered,
    };

    let ranking_df = rank_cantons(active, market.metric_label())?;
    let mut ranking = Vec::with_capacity(ranking_df.height());
    {
        let labels = ranking_df.column("Rank")?.str()?;
        let cantons = ranking_df.column("Canton")?.str()?;
        let values = ranking_df.column(market.metric_label())?.f64()?;
        for i in 0..ranking_df.height() {
            ranking.push(RankedRow {
                rank_label: labels.get(i).unwrap_or_default().to_string(),
                canton: cantons.get(i).unwrap_or_default().to_string(),
                value: values.get(i).unwrap_or(f64::NAN),
            });
        }
    }

    let mean_price = if active.schema().contains("price_chf") {
        active.column("price_chf")?.f64()?.mean()
    } else {
        None
    };
    let mean_area = if active.schema().contains("area_m2") {
        active.column("area_m2")?.f64()?.mean()
    } else {
        None
    };
    let mean_price_per_m2 = if active.schema().contains("price_chf")
        && active.schema().contains("area_m2")
    {
        with_price_per_m2(active)?
            .column("price_per_m2")?
            .f64()?
            .mean()
    } else {
        None
    };
    let kpis = Kpis {
        listing_count: active.height(),
        mean_price,
        mean_area,
        mean_price_per_m2,
        canton_count: ranking.len(),
    };

    let comparable = [&rent_filtered, &buy_filtered].iter().all(|df| {
        df.schema().contains("canton") && df.schema().contains("price_chf")
    });
    let comparisons = if comparable {
        let merged = market_comparison(&rent_filtered, &buy_filtered)?;
        let cantons = merged.column("canton")?.str()?;
        let rents = merged.column("rent_price_chf")?.f64()?;
        let buys = merged.column("buy_price_chf")?.f64()?;
        (0..merged.height())
            .map(|i| ComparisonRow {
                canton: cantons.get(i).unwrap_or_default().to_string(),
                rent_price: rents.get(i),
                buy_price: buys.get(i),
            })
            .collect()
    } else {
        Vec::new()
    };

    let joinable = [&rent_filtered, &buy_filtered].iter().all(|df| {
        df.schema().contains("zip_code") && df.schema().contains("price_chf")
    });
    let (ratios, medians) = if joinable {
        let rent_agg = mean_price_by_zip(&rent_filtered)?;
        let buy_agg = mean_price_by_zip(&buy_filtered)?;
        let ratio_df = price_to_rent(&buy_agg, &rent_agg)?;

        let mut rows = extract_ratio_rows(&ratio_df)?;
        rows.sort_by(|a, b| match (a.ratio, b.ratio) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        let medians = if ratio_df.height() > 0 && ratio_df.schema().contains("canton") {
            let agg = median_ratio_by_canton(&ratio_df)?;
            let cantons = agg.column("canton")?.str()?;
            let values = agg.column("price_to_rent_ratio")?.f64()?;
            (0..agg.height())
                .map(|i| MedianRow {
                    canton: cantons.get(i).unwrap_or_default().to_string(),
                    ratio: values.get(i),
                })
                .collect()
        } else {
            Vec::new()
        };
        (rows, medians)
    } else {
        (Vec::new(), Vec::new())
    };

    Ok(ComputedTables {
        kpis,
        ranking,
        comparisons,
        ratios,
        medians,
    })
}

fn extract_ratio_rows(ratio_df: &DataFrame) -> Result<Vec<RatioRow>, MetricsError> {
    let zips = ratio_df.column("zip_code")?.i64()?;
    let cantons = if ratio_df.schema().contains("canton") {
        Some(ratio_df.column("canton")?.str()?)
    } else {
        None
    };
    let buys = ratio_df.column("buy_price_chf")?.f64()?;
    let rents = ratio_df.column("rent_price_chf")?.f64()?;
    let values = ratio_df.column("price_to_rent_ratio")?.f64()?;

    let mut rows = Vec::with_capacity(ratio_df.height());
    for i in 0..ratio_df.height() {
        rows.push(RatioRow {
            zip_code: zips.get(i).unwrap_or(0),
            canton: cantons.and_then(|c| c.get(i)).map(str::to_string),
            buy_price: buys.get(i).unwrap_or(f64::NAN),
            rent_price: rents.get(i).unwrap_or(f64::NAN),
            ratio: values.get(i),
        });
    }
    Ok(rows)
}

pub struct App {
    pub running: bool,
    pub market: Market,
    pub filters: Filters,
    /// Cursor into `filters.all_cantons`.
    pub cursor: usize,
    pub kpis: Kpis,
    pub ranking: Vec<RankedRow>,
    pub comparisons: Vec<ComparisonRow>,
    pub ratios: Vec<RatioRow>,
    pub medians: Vec<MedianRow>,
    pub loaded_at: Option<NaiveDateTime>,
    pub rent_rows: usize,
    pub buy_rows: usize,
    pub status: Option<String>,
    /// Set when the datasets cannot be loaded; the UI shows the error screen
    /// until a reload succeeds.
    pub fatal_error: Option<String>,
    store: DatasetStore,
}

impl App {
    pub fn new(store: DatasetStore) -> Self {
        let mut app = Self {
            running: true,
            market: Market::Rent,
            filters: Filters::default(),
            cursor: 0,
            kpis: Kpis::default(),
            ranking: Vec::new(),
            comparisons: Vec::new(),
            ratios: Vec::new(),
            medians: Vec::new(),
            loaded_at: None,
            rent_rows: 0,
            buy_rows: 0,
            status: None,
            fatal_error: None,
            store,
        };
        app.load_datasets(false);
        app
    }

    /// Drop the in-memory copy and load fresh from disk.
    pub fn reload(&mut self) {
        self.load_datasets(true);
        if self.fatal_error.is_none() {
            self.status = Some(format!(
                "Reloaded: {} rent / {} buy rows",
                self.rent_rows, self.buy_rows
            ));
        }
    }

    fn load_datasets(&mut self, force: bool) {
        // Keep the canton selection across a manual reload where possible.
        let previous_selection = self
            .loaded_at
            .is_some()
            .then(|| self.filters.selected.clone());

        let loaded = if force {
            self.store.reload()
        } else {
            self.store.get()
        };
        let (rent, buy, meta) = match loaded {
            Ok(l) => (l.rent.clone(), l.buy.clone(), l.meta.clone()),
            Err(e) => {
                self.fatal_error = Some(e.to_string());
                return;
            }
        };

        self.fatal_error = None;
        self.loaded_at = Some(meta.loaded_at);
        self.rent_rows = meta.rent_rows;
        self.buy_rows = meta.buy_rows;
        self.filters = Filters::from_datasets(&rent, &buy, self.market);
        if let Some(previous) = previous_selection {
            self.filters.selected = self
                .filters
                .all_cantons
                .iter()
                .filter(|c| previous.contains(*c))
                .cloned()
                .collect();
        }
        self.cursor = self
            .cursor
            .min(self.filters.all_cantons.len().saturating_sub(1));
        self.recompute();
    }

    /// Recompute every visible table from the stored datasets.
    pub fn recompute(&mut self) {
        if self.fatal_error.is_some() {
            return;
        }
        let (rent, buy) = match self.store.get() {
            Ok(l) => (l.rent.clone(), l.buy.clone()),
            Err(e) => {
                self.fatal_error = Some(e.to_string());
                return;
            }
        };
        match compute_tables(&rent, &buy, self.market, &self.filters) {
            Ok(tables) => {
                self.kpis = tables.kpis;
                self.ranking = tables.ranking;
                self.comparisons = tables.comparisons;
                self.ratios = tables.ratios;
                self.medians = tables.medians;
                // A stale failure message must not outlive the recovery.
                self.status = None;
            }
            Err(e) => self.status = Some(format!("Recompute failed: {e}")),
        }
    }

    pub fn set_market(&mut self, market: Market) {
        self.market = market;
        if let Ok(loaded) = self.store.get() {
            let active = loaded.market(market).clone();
            self.filters.set_price_bounds(&active, market);
        }
        self.recompute();
    }

    pub fn toggle_market(&mut self) {
        self.set_market(self.market.other());
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.filters.all_cantons.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle_canton(&mut self) {
        if let Some(canton) = self.filters.all_cantons.get(self.cursor).cloned() {
            if !self.filters.selected.remove(&canton) {
                self.filters.selected.insert(canton);
            }
            self.recompute();
        }
    }

    pub fn select_all_cantons(&mut self) {
        self.filters.selected = self.filters.all_cantons.iter().cloned().collect();
        self.recompute();
    }

    pub fn clear_canton_selection(&mut self) {
        self.filters.selected.clear();
        self.recompute();
    }

    pub fn adjust_min_rooms(&mut self, delta: f64) {
        let next = (self.filters.min_rooms + delta).clamp(0.0, self.filters.max_rooms);
        if next != self.filters.min_rooms {
            self.filters.min_rooms = next;
            self.recompute();
        }
    }

    pub fn adjust_max_rooms(&mut self, delta: f64) {
        let next =
            (self.filters.max_rooms + delta).clamp(self.filters.min_rooms, self.filters.rooms_limit);
        if next != self.filters.max_rooms {
            self.filters.max_rooms = next;
            self.recompute();
        }
    }

    pub fn adjust_min_price(&mut self, steps: f64) {
        let step = price_step(self.market);
        let next = (self.filters.min_price + steps * step).clamp(0.0, self.filters.max_price);
        if next != self.filters.min_price {
            self.filters.min_price = next;
            self.recompute();
        }
    }

    pub fn adjust_max_price(&mut self, steps: f64) {
        let step = price_step(self.market);
        let floor = self.filters.min_price.max(step);
        let next = (self.filters.max_price + steps * step).clamp(floor, self.filters.price_limit);
        if next != self.filters.max_price {
            self.filters.max_price = next;
            self.recompute();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{sample_app, write_csv};
    use super::*;

    #[test]
    fn filters_derive_bounds_from_both_datasets() {
        let (_files, app) = sample_app();
        assert_eq!(app.filters.all_cantons, vec!["VD", "ZH"]);
        assert_eq!(app.filters.selected.len(), 2);
        // rooms go up to 4.5 (buy side)
        assert_eq!(app.filters.rooms_limit, 4.5);
        // rent market active: cap covers the most expensive rent listing
        assert_eq!(app.filters.max_price, 3000.0);
    }

    #[test]
    fn canton_filter_masks_rows() {
        let df = df!(
            "canton" => &["VD", "ZH", "VD"],
            "price_chf" => &[1000.0, 2000.0, 3000.0],
        )
        .unwrap();
        let mut filters = Filters {
            all_cantons: vec!["VD".into(), "ZH".into()],
            selected: ["VD".to_string()].into_iter().collect(),
            min_rooms: 0.0,
            max_rooms: 10.0,
            rooms_limit: 10.0,
            min_price: 0.0,
            max_price: 10_000.0,
            price_limit: 10_000.0,
        };

        let filtered = apply_filters(&df, &filters, true).unwrap();
        assert_eq!(filtered.height(), 2);

        filters.max_price = 1500.0;
        let filtered = apply_filters(&df, &filters, true).unwrap();
        assert_eq!(filtered.height(), 1);

        // price range ignored when not applied
        let filtered = apply_filters(&df, &filters, false).unwrap();
        assert_eq!(filtered.height(), 2);

        filters.min_price = 1500.0;
        filters.max_price = 10_000.0;
        let filtered = apply_filters(&df, &filters, true).unwrap();
        // only the 3000 CHF VD row clears the floor
        assert_eq!(filtered.height(), 1);
    }

    #[test]
    fn rows_with_missing_rooms_are_filtered_out() {
        let df = df!(
            "canton" => &["VD", "VD", "VD"],
            "rooms" => &[Some(1.0), Some(3.0), None],
        )
        .unwrap();
        let filters = Filters {
            all_cantons: vec!["VD".into()],
            selected: ["VD".to_string()].into_iter().collect(),
            min_rooms: 2.0,
            max_rooms: 10.0,
            rooms_limit: 10.0,
            min_price: 0.0,
            max_price: 1.0,
            price_limit: 1.0,
        };
        let filtered = apply_filters(&df, &filters, true).unwrap();
        // the 1.0-room row is out of range; the unknown-rooms row cannot be
        // shown as in range either
        assert_eq!(filtered.height(), 1);
        let rooms = filtered.column("rooms").unwrap().f64().unwrap();
        assert_eq!(rooms.get(0), Some(3.0));
    }

    #[test]
    fn recompute_fills_ranking_and_ratios() {
        let (_files, app) = sample_app();

        assert_eq!(app.kpis.listing_count, 3);
        assert_eq!(app.ranking.len(), 2);
        // VD mean rent/m² = (40 + 50) / 2 = 45 beats ZH's 30
        assert_eq!(app.ranking[0].canton, "VD");
        assert!((app.ranking[0].value - 45.0).abs() < 1e-9);
        assert_eq!(app.ranking[0].rank_label, "🥇");

        // both zips overlap between the two markets
        assert_eq!(app.ratios.len(), 2);
        assert_eq!(app.medians.len(), 2);

        // rent-vs-buy comparison covers both cantons
        assert_eq!(app.comparisons.len(), 2);
        assert_eq!(app.comparisons[0].canton, "VD");
        assert_eq!(app.comparisons[0].rent_price, Some(1750.0));
        assert_eq!(app.comparisons[0].buy_price, Some(1_000_000.0));
        assert_eq!(app.comparisons[1].canton, "ZH");
    }

    #[test]
    fn price_cap_narrows_only_the_active_side_of_the_comparison() {
        let (_files, mut app) = sample_app();

        // rent active; cap below the 2'000 and 3'000 rent rows
        app.filters.max_price = 1600.0;
        app.recompute();

        assert_eq!(app.kpis.listing_count, 1);

        // only the 1003/VD rent row survives, buy side untouched
        assert_eq!(app.comparisons.len(), 2);
        assert_eq!(app.comparisons[0].canton, "VD");
        assert_eq!(app.comparisons[0].rent_price, Some(1500.0));
        assert_eq!(app.comparisons[0].buy_price, Some(1_000_000.0));
        assert_eq!(app.comparisons[1].canton, "ZH");
        assert_eq!(app.comparisons[1].rent_price, None);
        assert_eq!(app.comparisons[1].buy_price, Some(1_500_000.0));

        // the ratio join sees the same rent side: no overlapping zips remain
        assert!(app.ratios.is_empty());
    }

    #[test]
    fn successful_recompute_clears_a_stale_failure_message() {
        let (_files, mut app) = sample_app();
        app.status = Some("Recompute failed: synthetic".to_string());

        app.select_all_cantons();
        assert_eq!(app.status, None);
    }

    #[test]
    fn deselecting_a_canton_shrinks_the_tables() {
        let (_files, mut app) = sample_app();

        // cursor starts on VD (sorted order)
        app.toggle_canton();
        assert!(!app.filters.selected.contains("VD"));
        assert_eq!(app.kpis.listing_count, 1);
        assert_eq!(app.ranking.len(), 1);
        assert_eq!(app.ranking[0].canton, "ZH");
        // the comparison and the join now only see ZH
        assert_eq!(app.comparisons.len(), 1);
        assert_eq!(app.comparisons[0].canton, "ZH");
        assert_eq!(app.ratios.len(), 1);
        assert_eq!(app.ratios[0].zip_code, 8001);
    }

    #[test]
    fn min_price_floor_drops_cheap_listings() {
        let (_files, mut app) = sample_app();
        assert_eq!(app.kpis.listing_count, 3);

        // 16 rent steps of 100 CHF → floor at 1'600, dropping the 1'500 row
        app.adjust_min_price(16.0);
        assert_eq!(app.filters.min_price, 1600.0);
        assert_eq!(app.kpis.listing_count, 2);

        // the floor cannot cross the cap
        app.adjust_min_price(1000.0);
        assert_eq!(app.filters.min_price, app.filters.max_price);
    }

    #[test]
    fn market_toggle_rescales_the_price_cap() {
        let (_files, mut app) = sample_app();
        assert_eq!(app.filters.max_price, 3000.0);

        app.toggle_market();
        assert_eq!(app.market, Market::Buy);
        assert_eq!(app.filters.max_price, 1_500_000.0);
        assert_eq!(app.kpis.listing_count, 2);
    }

    #[test]
    fn missing_files_show_the_error_screen_until_reload_succeeds() {
        let store = DatasetStore::new("/nonexistent/rent.csv", "/nonexistent/buy.csv");
        let mut app = App::new(store);
        assert!(app.fatal_error.is_some());

        app.reload();
        assert!(app.fatal_error.is_some());
    }

    #[test]
    fn reload_preserves_the_canton_selection() {
        let (files, mut app) = sample_app();

        app.toggle_canton(); // deselect VD
        assert_eq!(app.filters.selected.len(), 1);

        // append a row behind the store's back, then reload
        {
            use std::io::Write;
            let mut file = std::fs::OpenOptions::new()
                .append(true)
                .open(files.rent.path())
                .unwrap();
            writeln!(file, "1201,GE,2500,3.0,60").unwrap();
        }
        app.reload();

        assert_eq!(app.rent_rows, 4);
        assert_eq!(app.filters.all_cantons, vec!["GE", "VD", "ZH"]);
        // VD stays deselected; the new canton is not auto-selected
        assert!(!app.filters.selected.contains("VD"));
        assert!(!app.filters.selected.contains("GE"));
        assert!(app.filters.selected.contains("ZH"));
    }

    #[test]
    fn datasets_without_zip_codes_skip_the_ratio_section() {
        let rent = write_csv("canton,price_chf,rooms,area_m2\nVD,2000,3.5,50\n");
        let buy = write_csv("canton,price_chf,rooms,area_m2\nVD,1000000,4.5,120\n");
        let store = DatasetStore::new(rent.path(), buy.path());
        let app = App::new(store);

        assert!(app.fatal_error.is_none());
        assert_eq!(app.ranking.len(), 1);
        assert!(app.ratios.is_empty());
        assert!(app.medians.is_empty());
    }
}
