//! Tests for summary statistics, missing counts, correlation, ranking and cleaning.

use crate::helpers::{names, table, FOODS_CSV};
use food_explorer::data::{DataProcessor, Macronutrient};
use food_explorer::stats::{CorrelationMatrix, StatsCalculator, TopNRanking, DEFAULT_TOP_N};
use food_explorer::ExplorerError;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn summary_covers_numeric_columns_in_order() {
    let summaries = StatsCalculator::summary_stats(&table(FOODS_CSV)).unwrap();
    let columns: Vec<&str> = summaries.iter().map(|s| s.column.as_str()).collect();
    assert_eq!(
        columns,
        vec![
            "Unnamed: 0",
            "Caloric Value",
            "Fat",
            "Protein",
            "Carbohydrates",
            "Sugars"
        ]
    );
}

#[test]
fn summary_of_caloric_value() {
    let summaries = StatsCalculator::summary_stats(&table(FOODS_CSV)).unwrap();
    let calories = summaries
        .iter()
        .find(|s| s.column == "Caloric Value")
        .unwrap();

    let values = [52.0, 89.0, 403.0, 130.0, 579.0];
    let mean = values.iter().sum::<f64>() / 5.0;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 4.0;

    assert_eq!(calories.count, 5);
    assert!(close(calories.mean, 250.6));
    assert!(close(calories.std, var.sqrt()));
    assert_eq!(calories.min, 52.0);
    assert_eq!(calories.p25, 89.0);
    assert_eq!(calories.p50, 130.0);
    assert_eq!(calories.p75, 403.0);
    assert_eq!(calories.max, 579.0);
}

#[test]
fn summary_counts_only_present_values() {
    let summaries = StatsCalculator::summary_stats(&table(FOODS_CSV)).unwrap();
    let fat = summaries.iter().find(|s| s.column == "Fat").unwrap();
    assert_eq!(fat.count, 4);
    assert_eq!(fat.min, 0.2);
    assert_eq!(fat.max, 49.9);
}

#[test]
fn summary_is_bit_identical_across_calls() {
    let t = table(FOODS_CSV);
    let first = StatsCalculator::summary_stats(&t).unwrap();
    let second = StatsCalculator::summary_stats(&t).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.column, b.column);
        assert_eq!(a.count, b.count);
        for (x, y) in [
            (a.mean, b.mean),
            (a.std, b.std),
            (a.min, b.min),
            (a.p25, b.p25),
            (a.p50, b.p50),
            (a.p75, b.p75),
            (a.max, b.max),
        ] {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }
}

#[test]
fn missing_counts_follow_declared_order() {
    let t = table("a,b,c\n1,x,\n,y,\n3,,\n,z,1\n5,w,\n");
    let counts = StatsCalculator::missing_counts(&t);
    let pairs: Vec<(&str, usize)> = counts
        .iter()
        .map(|c| (c.column.as_str(), c.missing))
        .collect();
    assert_eq!(pairs, vec![("a", 2), ("b", 1), ("c", 4)]);
}

#[test]
fn correlation_is_symmetric_with_unit_diagonal() {
    let t = table(FOODS_CSV);
    let columns = names(&["Caloric Value", "Fat", "Protein", "Carbohydrates", "Sugars"]);
    let m = CorrelationMatrix::compute(&t, &columns).unwrap();

    assert_eq!(m.columns, columns);
    for i in 0..m.len() {
        assert_eq!(m.get(i, i), 1.0);
        for j in 0..m.len() {
            assert_eq!(m.get(i, j).to_bits(), m.get(j, i).to_bits());
            assert!((-1.0..=1.0).contains(&m.get(i, j)));
        }
    }
}

#[test]
fn correlation_follows_input_order() {
    let t = table("x,y\n1,2\n2,4\n3,7\n");
    let forward = CorrelationMatrix::compute(&t, &names(&["x", "y"])).unwrap();
    let backward = CorrelationMatrix::compute(&t, &names(&["y", "x"])).unwrap();
    assert_eq!(backward.columns, names(&["y", "x"]));
    assert_eq!(forward.get(0, 1).to_bits(), backward.get(1, 0).to_bits());
}

#[test]
fn constant_column_correlation_is_nan() {
    let t = table("a,b\n1,5\n2,5\n3,5\n");
    let m = CorrelationMatrix::compute(&t, &names(&["a", "b"])).unwrap();
    assert_eq!(m.get(0, 0), 1.0);
    assert!(m.get(1, 1).is_nan());
    assert!(m.get(0, 1).is_nan());
    assert!(m.get(1, 0).is_nan());
}

#[test]
fn correlation_rejects_unknown_and_text_columns() {
    let t = table(FOODS_CSV);
    for bad in ["Food", "nope"] {
        let err = CorrelationMatrix::compute(&t, &names(&["Fat", bad])).unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidColumn { .. }));
    }
}

#[test]
fn top_n_on_small_table_returns_all_rows_descending() {
    let t = table(FOODS_CSV);
    let ranking = TopNRanking::compute(&t, "Caloric Value", "Food", DEFAULT_TOP_N).unwrap();

    assert_eq!(ranking.len(), 5);
    let labels: Vec<&str> = ranking
        .rows
        .iter()
        .map(|r| r.label.as_deref().unwrap())
        .collect();
    assert_eq!(labels, vec!["almonds", "cheddar", "rice", "banana", "apple"]);
    let values: Vec<f64> = ranking.rows.iter().map(|r| r.value.unwrap()).collect();
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(ranking.rows[0].row, 4);
}

#[test]
fn top_n_truncates() {
    let t = table(FOODS_CSV);
    let ranking = TopNRanking::compute(&t, "Caloric Value", "Unnamed: 0", 2).unwrap();
    let labels: Vec<&str> = ranking
        .rows
        .iter()
        .map(|r| r.label.as_deref().unwrap())
        .collect();
    assert_eq!(labels, vec!["4", "2"]);
}

#[test]
fn top_n_ties_keep_table_order() {
    let t = table("name,score\na,3\nb,5\nc,3\nd,5\n");
    let ranking = TopNRanking::compute(&t, "score", "name", 10).unwrap();
    let labels: Vec<&str> = ranking
        .rows
        .iter()
        .map(|r| r.label.as_deref().unwrap())
        .collect();
    assert_eq!(labels, vec!["b", "d", "a", "c"]);
}

#[test]
fn top_n_puts_absent_values_last() {
    let t = table("name,score\na,\nb,2\nc,1\n");
    let ranking = TopNRanking::compute(&t, "score", "name", 10).unwrap();
    let values: Vec<Option<f64>> = ranking.rows.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![Some(2.0), Some(1.0), None]);
    assert_eq!(ranking.rows[2].label.as_deref(), Some("a"));
}

#[test]
fn top_n_rejects_invalid_columns() {
    let t = table(FOODS_CSV);

    let text_rank = TopNRanking::compute(&t, "Food", "Food", 10).unwrap_err();
    assert!(matches!(text_rank, ExplorerError::InvalidColumn { .. }));

    let missing_rank = TopNRanking::compute(&t, "Energy", "Food", 10).unwrap_err();
    assert!(matches!(missing_rank, ExplorerError::InvalidColumn { .. }));

    let missing_label = TopNRanking::compute(&t, "Fat", "Name", 10).unwrap_err();
    assert!(matches!(missing_label, ExplorerError::InvalidColumn { .. }));
}

#[test]
fn cleaning_drops_rows_missing_a_macronutrient() {
    let t = table(FOODS_CSV);
    let cleaned = DataProcessor::drop_missing_macronutrients(
        &t,
        &[Macronutrient::Fat, Macronutrient::Protein],
    )
    .unwrap();

    assert_eq!(cleaned.row_count(), 4);
    assert_eq!(cleaned.column_names(), t.column_names());
    let foods: Vec<Option<String>> = cleaned.text_values("Food").unwrap();
    assert_eq!(
        foods,
        vec![
            Some("apple".to_string()),
            Some("cheddar".to_string()),
            Some("rice".to_string()),
            Some("almonds".to_string()),
        ]
    );
    assert_eq!(
        cleaned.numeric_values("Fat").unwrap(),
        vec![Some(0.2), Some(33.0), Some(0.3), Some(49.9)]
    );
}

#[test]
fn cleaning_without_macronutrients_keeps_everything() {
    let t = table("name,v\na,\nb,2\n");
    let cleaned = DataProcessor::drop_missing_macronutrients(&t, &[]).unwrap();
    assert_eq!(cleaned.row_count(), 2);
    assert_eq!(cleaned.missing_count("v").unwrap(), 1);
}
