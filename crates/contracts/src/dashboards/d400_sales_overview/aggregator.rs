use std::collections::HashMap;

use super::dto::{Dimension, DimensionRow, MonthlyPoint, RankingEntry, SalesOverview};
use crate::domain::a001_sales_record::{Month, SalesRecord};
use crate::shared::filters::FilterSelection;

/// Maximum number of entries in the ranking
pub const RANKING_LIMIT: usize = 10;

/// Reduce sales records into a per-dimension overview.
///
/// Records failing the state/client/product filters are dropped, month
/// entries outside the month filter are skipped. Rows keep the order in which
/// their key first appears in `records`. Month codes are stored in canonical
/// form (see [`Month::normalize_code`]).
pub fn aggregate(
    records: &[SalesRecord],
    filters: &FilterSelection,
    dimension: Dimension,
) -> SalesOverview {
    let mut rows: Vec<DimensionRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| filters.allows_record(r)) {
        let key = dimension.key_of(record);
        let pos = *index.entry(key).or_insert_with(|| {
            rows.push(DimensionRow::new(key));
            rows.len() - 1
        });
        let row = &mut rows[pos];

        for entry in &record.months {
            if !filters.allows_month(&entry.month) {
                continue;
            }
            row.months
                .entry(Month::normalize_code(&entry.month))
                .or_default()
                .add(entry.quantity, entry.amount);
            row.total_quantity += entry.quantity;
            row.total_amount += entry.amount;
        }
    }

    let total_amount: f64 = rows.iter().map(|r| r.total_amount).sum();
    let total_quantity: f64 = rows.iter().map(|r| r.total_quantity).sum();
    let average_ticket = if total_quantity > 0.0 {
        total_amount / total_quantity
    } else {
        0.0
    };

    let ranking = build_ranking(&rows);
    let monthly = build_monthly(&rows, filters);

    SalesOverview {
        dimension,
        rows,
        total_quantity,
        total_amount,
        average_ticket,
        ranking,
        monthly,
    }
}

fn build_ranking(rows: &[DimensionRow]) -> Vec<RankingEntry> {
    let mut ranked: Vec<&DimensionRow> = rows.iter().collect();
    // sort_by is stable: ties keep first-appearance order
    ranked.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount));
    ranked
        .into_iter()
        .take(RANKING_LIMIT)
        .map(|r| RankingEntry {
            key: r.key.clone(),
            amount: r.total_amount,
        })
        .collect()
}

fn build_monthly(rows: &[DimensionRow], filters: &FilterSelection) -> Vec<MonthlyPoint> {
    let codes: Vec<String> = if filters.months.is_empty() {
        Month::ALL.iter().map(|m| m.code().to_string()).collect()
    } else {
        filters.months.iter().map(|m| Month::normalize_code(m)).collect()
    };

    codes
        .into_iter()
        .map(|code| {
            let amount = rows.iter().map(|r| r.amount_in(&code)).sum();
            let quantity = rows.iter().map(|r| r.quantity_in(&code)).sum();
            MonthlyPoint {
                label: Month::label_for_code(&code),
                month: code,
                amount,
                quantity,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_record::MonthEntry;

    fn record(state: &str, client: &str, product: &str, months: &[(&str, f64, f64)]) -> SalesRecord {
        SalesRecord {
            state: state.to_string(),
            client: client.to_string(),
            product: product.to_string(),
            months: months
                .iter()
                .map(|(m, q, a)| MonthEntry {
                    month: m.to_string(),
                    quantity: *q,
                    amount: *a,
                })
                .collect(),
        }
    }

    fn sample() -> Vec<SalesRecord> {
        vec![
            record("SP", "Alfa", "Caneta", &[("jan", 10.0, 100.0), ("fev", 5.0, 50.0)]),
            record("RJ", "Beta", "Lápis", &[("jan", 2.0, 40.0), ("mar", 1.0, 20.0)]),
            record("SP", "Gama", "Lápis", &[("fev", 4.0, 80.0)]),
            record("MG", "Alfa", "Caneta", &[("dez", 3.0, 30.0)]),
        ]
    }

    #[test]
    fn test_no_filters_totals_match_whole_set() {
        let records = sample();
        let overview = aggregate(&records, &FilterSelection::default(), Dimension::State);

        let expected_amount: f64 = records.iter().map(|r| r.total_amount()).sum();
        let expected_qty: f64 = records.iter().map(|r| r.total_quantity()).sum();
        assert_eq!(overview.total_amount, expected_amount);
        assert_eq!(overview.total_quantity, expected_qty);
        assert_eq!(overview.total_amount, 320.0);
        assert_eq!(overview.total_quantity, 25.0);
        assert_eq!(overview.average_ticket, 320.0 / 25.0);
    }

    #[test]
    fn test_rows_keep_first_appearance_order() {
        let overview = aggregate(&sample(), &FilterSelection::default(), Dimension::State);
        let keys: Vec<&str> = overview.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["SP", "RJ", "MG"]);

        let sp = &overview.rows[0];
        assert_eq!(sp.total_amount, 230.0);
        assert_eq!(sp.amount_in("fev"), 130.0);
        assert_eq!(sp.quantity_in("fev"), 9.0);
        assert_eq!(sp.amount_in("mar"), 0.0);
    }

    #[test]
    fn test_group_by_client_and_product() {
        let by_client = aggregate(&sample(), &FilterSelection::default(), Dimension::Client);
        assert_eq!(by_client.distinct_count(), 3);
        assert_eq!(by_client.rows[0].key, "Alfa");
        assert_eq!(by_client.rows[0].total_amount, 180.0);

        let by_product = aggregate(&sample(), &FilterSelection::default(), Dimension::Product);
        assert_eq!(by_product.distinct_count(), 2);
        assert_eq!(by_product.rows[1].key, "Lápis");
        assert_eq!(by_product.rows[1].total_amount, 140.0);
    }

    #[test]
    fn test_state_filter_restricts_contributions() {
        let filters = FilterSelection {
            states: vec!["SP".into()],
            ..Default::default()
        };
        let records = sample();
        let overview = aggregate(&records, &filters, Dimension::Client);

        let expected: f64 = records
            .iter()
            .filter(|r| r.state == "SP")
            .map(|r| r.total_amount())
            .sum();
        assert_eq!(overview.total_amount, expected);
        let keys: Vec<&str> = overview.rows.iter().map(|r| r.key.as_str()).collect();
        // Alfa also buys in MG, but only the SP line counts
        assert_eq!(keys, vec!["Alfa", "Gama"]);
        assert_eq!(overview.rows[0].total_amount, 150.0);
    }

    #[test]
    fn test_client_and_product_filters() {
        let filters = FilterSelection {
            clients: vec!["Alfa".into(), "Beta".into()],
            products: vec!["Caneta".into()],
            ..Default::default()
        };
        let overview = aggregate(&sample(), &filters, Dimension::State);
        let keys: Vec<&str> = overview.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["SP", "MG"]);
        assert_eq!(overview.total_amount, 180.0);
    }

    #[test]
    fn test_month_filter_skips_other_months() {
        let filters = FilterSelection {
            months: vec!["fev".into()],
            ..Default::default()
        };
        let overview = aggregate(&sample(), &filters, Dimension::State);

        assert_eq!(overview.total_amount, 130.0);
        assert_eq!(overview.monthly.len(), 1);
        assert_eq!(overview.monthly[0].label, "Fevereiro");
        assert_eq!(overview.monthly[0].amount, 130.0);
        // rows are created for every matching record even when no month survives
        let rj = overview.rows.iter().find(|r| r.key == "RJ").unwrap();
        assert_eq!(rj.total_amount, 0.0);
        assert!(rj.months.is_empty());
    }

    #[test]
    fn test_monthly_series_has_twelve_points_without_month_filter() {
        let overview = aggregate(&sample(), &FilterSelection::default(), Dimension::Product);
        assert_eq!(overview.monthly.len(), 12);
        assert_eq!(overview.monthly[0].month, "jan");
        assert_eq!(overview.monthly[0].amount, 140.0);
        assert_eq!(overview.monthly[0].quantity, 12.0);
        assert_eq!(overview.monthly[11].label, "Dezembro");
        assert_eq!(overview.monthly[11].amount, 30.0);
        assert_eq!(overview.monthly[5].amount, 0.0);
    }

    #[test]
    fn test_monthly_series_follows_filter_cardinality_and_order() {
        let filters = FilterSelection {
            months: vec!["mar".into(), "jan".into(), "xyz".into()],
            ..Default::default()
        };
        let overview = aggregate(&sample(), &filters, Dimension::State);
        let months: Vec<&str> = overview.monthly.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["mar", "jan", "xyz"]);
        assert_eq!(overview.monthly[2].label, "xyz");
        assert_eq!(overview.monthly[2].amount, 0.0);
    }

    #[test]
    fn test_ranking_sorted_and_truncated() {
        let records: Vec<SalesRecord> = (0..15)
            .map(|i| record("SP", &format!("Cliente {i:02}"), "P", &[("jan", 1.0, i as f64 * 10.0)]))
            .collect();
        let overview = aggregate(&records, &FilterSelection::default(), Dimension::Client);

        assert_eq!(overview.rows.len(), 15);
        assert_eq!(overview.ranking.len(), RANKING_LIMIT);
        assert_eq!(overview.ranking[0].key, "Cliente 14");
        assert_eq!(overview.ranking[9].key, "Cliente 05");
        assert!(overview
            .ranking
            .windows(2)
            .all(|w| w[0].amount >= w[1].amount));
    }

    #[test]
    fn test_ranking_ties_keep_first_appearance() {
        let records = vec![
            record("BA", "A", "P", &[("jan", 1.0, 50.0)]),
            record("CE", "B", "P", &[("jan", 1.0, 50.0)]),
            record("AM", "C", "P", &[("jan", 1.0, 70.0)]),
        ];
        let overview = aggregate(&records, &FilterSelection::default(), Dimension::State);
        let keys: Vec<&str> = overview.ranking.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["AM", "BA", "CE"]);
    }

    #[test]
    fn test_unknown_month_codes_count_toward_totals() {
        let records = vec![record("SP", "A", "P", &[("jan", 1.0, 10.0), ("13", 1.0, 5.0)])];
        let overview = aggregate(&records, &FilterSelection::default(), Dimension::State);
        assert_eq!(overview.total_amount, 15.0);
        let series_sum: f64 = overview.monthly.iter().map(|p| p.amount).sum();
        assert_eq!(series_sum, 10.0);
    }

    #[test]
    fn test_upper_case_month_codes_are_canonical() {
        let records = vec![record("SP", "A", "P", &[("JAN", 2.0, 100.0), (" fev", 1.0, 10.0)])];

        let overview = aggregate(&records, &FilterSelection::default(), Dimension::State);
        assert_eq!(overview.total_amount, 110.0);
        assert_eq!(overview.rows[0].amount_in("jan"), 100.0);
        assert_eq!(overview.rows[0].amount_in("JAN"), 100.0);
        assert_eq!(overview.rows[0].quantity_in(" Jan "), 2.0);
        assert_eq!(overview.monthly[0].amount, 100.0);
        assert_eq!(overview.monthly[1].amount, 10.0);

        let filters = FilterSelection {
            months: vec!["jan".into()],
            ..Default::default()
        };
        let filtered = aggregate(&records, &filters, Dimension::State);
        assert_eq!(filtered.total_amount, 100.0);
        assert_eq!(filtered.monthly.len(), 1);
        assert_eq!(filtered.monthly[0].amount, 100.0);

        let upper_filter = FilterSelection {
            months: vec!["FEV".into()],
            ..Default::default()
        };
        let by_upper = aggregate(&records, &upper_filter, Dimension::State);
        assert_eq!(by_upper.monthly[0].month, "fev");
        assert_eq!(by_upper.monthly[0].label, "Fevereiro");
        assert_eq!(by_upper.monthly[0].amount, 10.0);
    }

    #[test]
    fn test_empty_input_gives_zero_totals() {
        let overview = aggregate(&[], &FilterSelection::default(), Dimension::State);
        assert!(overview.rows.is_empty());
        assert!(overview.ranking.is_empty());
        assert_eq!(overview.total_amount, 0.0);
        assert_eq!(overview.total_quantity, 0.0);
        assert_eq!(overview.average_ticket, 0.0);
        assert_eq!(overview.monthly.len(), 12);
        assert!(overview.monthly.iter().all(|p| p.amount == 0.0));
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let records = sample();
        let filters = FilterSelection {
            states: vec!["SP".into(), "RJ".into()],
            months: vec!["jan".into(), "fev".into()],
            ..Default::default()
        };
        let first = aggregate(&records, &filters, Dimension::Product);
        let second = aggregate(&records, &filters, Dimension::Product);
        assert_eq!(first, second);
    }
}
