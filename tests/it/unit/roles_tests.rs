//! Tests for column role inference.

use crate::helpers::{names, table, FOODS_CSV, PLAIN_CSV};
use food_explorer::data::{
    infer_calorie_column, infer_label_column, CalorieColumn, ColumnRoles, LabelRule, Macronutrient,
};

#[test]
fn unnamed_index_beats_food() {
    let label = infer_label_column(&names(&["Unnamed: 0", "Food", "Fat"]));
    assert_eq!(label.name, "Unnamed: 0");
    assert_eq!(label.rule, LabelRule::RowIndex);
}

#[test]
fn capitalised_food_beats_lowercase() {
    let label = infer_label_column(&names(&["food", "Food"]));
    assert_eq!(label.name, "Food");
    assert_eq!(label.rule, LabelRule::Food);
}

#[test]
fn first_column_is_the_fallback_label() {
    let label = infer_label_column(&names(&["name", "kcal"]));
    assert_eq!(label.name, "name");
    assert_eq!(label.rule, LabelRule::FirstColumn);
}

#[test]
fn calorie_lookup_is_case_insensitive_substring() {
    assert_eq!(
        infer_calorie_column(&names(&["Food", "Caloric Value"])),
        CalorieColumn::Present("Caloric Value".to_string())
    );
    assert_eq!(
        infer_calorie_column(&names(&["food", "calories_per_100g"])),
        CalorieColumn::Present("calories_per_100g".to_string())
    );
    assert_eq!(
        infer_calorie_column(&names(&["food", "energy"])),
        CalorieColumn::Absent
    );
}

#[test]
fn calorie_lookup_takes_first_match() {
    let found = infer_calorie_column(&names(&["Calories (kcal)", "calorie_density"]));
    assert_eq!(found.name(), Some("Calories (kcal)"));
}

#[test]
fn roles_for_full_dataset() {
    let roles = ColumnRoles::infer(&table(FOODS_CSV));

    assert_eq!(
        roles.numeric_columns,
        names(&[
            "Unnamed: 0",
            "Caloric Value",
            "Fat",
            "Protein",
            "Carbohydrates",
            "Sugars"
        ])
    );
    assert_eq!(roles.macronutrient_columns, Macronutrient::ALL.to_vec());
    assert_eq!(roles.label_column.name, "Unnamed: 0");
    assert_eq!(roles.calorie_column.name(), Some("Caloric Value"));
}

#[test]
fn roles_for_plain_dataset() {
    let roles = ColumnRoles::infer(&table(PLAIN_CSV));

    assert_eq!(roles.numeric_columns, names(&["id", "energy", "water"]));
    assert!(roles.macronutrient_columns.is_empty());
    assert_eq!(roles.label_column.name, "food");
    assert_eq!(roles.calorie_column, CalorieColumn::Absent);
}

#[test]
fn macronutrients_keep_fixed_order_not_table_order() {
    let roles = ColumnRoles::infer(&table("Carbohydrates,Protein,name\n1,2,x\n"));
    assert_eq!(
        roles.macronutrient_columns,
        vec![Macronutrient::Protein, Macronutrient::Carbohydrates]
    );
}
