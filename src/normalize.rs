//! Normal-form views of the `repairs` table.
//!
//! The decomposition is fixed to the `repairs` shape: `laptop_brands` holds a
//! `", "`-joined list of brands, which is exactly the repeating group the 1NF
//! step breaks apart. Nothing here infers functional dependencies, and nothing
//! is written back to storage; every view is rebuilt from the fetched table.

use std::collections::{HashMap, HashSet};

use crate::constants::{BRAND_SEPARATOR, fields};
use crate::models::{Cell, Column, KeyKind, Row, Table};

pub const ORIGINAL_EXPLANATION: &str =
    "The original table before normalization. Note that laptop_brands can contain multiple values.";

pub const FIRST_NF_EXPLANATION: &str = "1NF ensures atomic values with no repeating groups. Each laptop brand is now in a separate row.";

pub const SECOND_NF_EXPLANATION: &str = "2NF removes partial dependencies by separating the main repair records from the laptop brands.";

pub const THIRD_NF_EXPLANATION: &str =
    "3NF removes transitive dependencies by creating a separate users table.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstNormalForm {
    pub repairs: Table,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondNormalForm {
    pub repairs: Table,
    pub brands: Table,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThirdNormalForm {
    pub users: Table,
    pub repairs: Table,
    pub brands: Table,
    pub explanation: &'static str,
}

/// All four views of one fetch of the `repairs` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalization {
    pub original: Table,
    pub first: FirstNormalForm,
    pub second: SecondNormalForm,
    pub third: ThirdNormalForm,
}

impl Normalization {
    #[must_use]
    pub fn from_table(original: Table) -> Self {
        let first = to_first_normal_form(&original);
        let second = to_second_normal_form(&first);
        let third = to_third_normal_form(&second);

        Self {
            original,
            first,
            second,
            third,
        }
    }
}

/// Explodes each row into one row per brand token.
///
/// Rows whose `laptop_brands` is absent or NULL are copied as they are.
#[must_use]
pub fn to_first_normal_form(source: &Table) -> FirstNormalForm {
    let mut rows = Vec::with_capacity(source.rows.len());

    for row in &source.rows {
        match row.get(fields::LAPTOP_BRANDS).and_then(Cell::as_text) {
            Some(brands) => {
                for brand in brands.split(BRAND_SEPARATOR) {
                    let mut single = row.clone();
                    single.insert(fields::LAPTOP_BRANDS.to_string(), Cell::from(brand.trim()));
                    rows.push(single);
                }
            }
            None => rows.push(row.clone()),
        }
    }

    FirstNormalForm {
        repairs: Table::with_rows(source.columns.clone(), rows),
        explanation: FIRST_NF_EXPLANATION,
    }
}

/// Splits the 1NF rows into `repairs` (one row per id, first occurrence wins)
/// and `brands` (one row per 1NF row, duplicates kept).
#[must_use]
pub fn to_second_normal_form(first: &FirstNormalForm) -> SecondNormalForm {
    let mut repairs = Table::new(vec![
        Column::new(fields::ID, "int", KeyKind::Primary),
        Column::new(fields::USERNAME, "varchar(255)", KeyKind::None),
        Column::new(fields::SUBMIT_DATE, "datetime", KeyKind::None),
    ]);
    let mut brands = Table::new(vec![
        Column::new(fields::REPAIR_ID, "int", KeyKind::Primary),
        Column::new(fields::BRAND, "varchar(255)", KeyKind::Primary),
    ]);

    let mut seen_ids: HashSet<Cell> = HashSet::new();

    for row in &first.repairs.rows {
        let id = field(row, fields::ID);

        if seen_ids.insert(id.clone()) {
            repairs.rows.push(Row::from([
                (fields::ID.to_string(), id.clone()),
                (fields::USERNAME.to_string(), field(row, fields::USERNAME)),
                (fields::SUBMIT_DATE.to_string(), field(row, fields::SUBMIT_DATE)),
            ]));
        }

        brands.rows.push(Row::from([
            (fields::REPAIR_ID.to_string(), id),
            (fields::BRAND.to_string(), field(row, fields::LAPTOP_BRANDS)),
        ]));
    }

    SecondNormalForm {
        repairs,
        brands,
        explanation: SECOND_NF_EXPLANATION,
    }
}

/// Moves usernames into a `users` table with sequential ids assigned in
/// first-seen order, and points `repairs` at it through `user_id`.
#[must_use]
pub fn to_third_normal_form(second: &SecondNormalForm) -> ThirdNormalForm {
    let mut users = Table::new(vec![
        Column::new(fields::USERNAME, "varchar(255)", KeyKind::Primary),
        Column::new(fields::USER_ID, "int", KeyKind::None),
    ]);
    let mut repairs = Table::new(vec![
        Column::new(fields::ID, "int", KeyKind::Primary),
        Column::new(fields::USER_ID, "int", KeyKind::Foreign),
        Column::new(fields::SUBMIT_DATE, "datetime", KeyKind::None),
    ]);

    let mut user_ids: HashMap<Cell, i64> = HashMap::new();
    let mut next_user_id: i64 = 1;

    for row in &second.repairs.rows {
        let username = field(row, fields::USERNAME);

        let user_id = *user_ids.entry(username.clone()).or_insert_with(|| {
            let assigned = next_user_id;
            next_user_id += 1;
            users.rows.push(Row::from([
                (fields::USERNAME.to_string(), username),
                (fields::USER_ID.to_string(), Cell::Integer(assigned)),
            ]));
            assigned
        });

        repairs.rows.push(Row::from([
            (fields::ID.to_string(), field(row, fields::ID)),
            (fields::USER_ID.to_string(), Cell::Integer(user_id)),
            (fields::SUBMIT_DATE.to_string(), field(row, fields::SUBMIT_DATE)),
        ]));
    }

    ThirdNormalForm {
        users,
        repairs,
        brands: second.brands.clone(),
        explanation: THIRD_NF_EXPLANATION,
    }
}

fn field(row: &Row, name: &str) -> Cell {
    row.get(name).cloned().unwrap_or(Cell::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_columns() -> Vec<Column> {
        vec![
            Column::new("id", "INTEGER", KeyKind::Primary),
            Column::new("username", "varchar", KeyKind::None),
            Column::new("laptop_brands", "varchar", KeyKind::None),
            Column::new("submit_date", "datetime_text", KeyKind::None),
        ]
    }

    fn order_row(id: i64, username: &str, brands: &str, submit_date: &str) -> Row {
        Row::from([
            ("id".to_string(), Cell::from(id)),
            ("username".to_string(), Cell::from(username)),
            ("laptop_brands".to_string(), Cell::from(brands)),
            ("submit_date".to_string(), Cell::from(submit_date)),
        ])
    }

    fn sample_table() -> Table {
        Table::with_rows(
            source_columns(),
            vec![
                order_row(1, "alice", "HP, Dell", "2026-03-01 09:00:00"),
                order_row(2, "bob", "Lenovo", "2026-03-01 10:00:00"),
                order_row(3, "alice", "Asus, Acer, Apple", "2026-03-02 08:30:00"),
            ],
        )
    }

    fn texts(table: &Table, field: &str) -> Vec<String> {
        table.rows.iter().map(|r| r[field].to_string()).collect()
    }

    #[test]
    fn test_first_nf_explodes_brands_in_order() {
        let source = Table::with_rows(
            source_columns(),
            vec![order_row(7, "carol", "A, B, C", "2026-03-01 09:00:00")],
        );

        let first = to_first_normal_form(&source);

        assert_eq!(first.repairs.len(), 3);
        assert_eq!(texts(&first.repairs, "laptop_brands"), ["A", "B", "C"]);
        for row in &first.repairs.rows {
            assert_eq!(row["id"], Cell::Integer(7));
            assert_eq!(row["username"], Cell::from("carol"));
            assert_eq!(row["submit_date"], Cell::from("2026-03-01 09:00:00"));
        }
        assert_eq!(first.repairs.columns, source.columns);
        assert_eq!(first.explanation, FIRST_NF_EXPLANATION);
    }

    #[test]
    fn test_first_nf_trims_tokens() {
        let source = Table::with_rows(
            source_columns(),
            vec![
                order_row(1, "dave", " HP ,  Dell", "t"),
                order_row(2, "dave", "Acer,Asus", "t"),
            ],
        );

        let first = to_first_normal_form(&source);

        // Only ", " separates tokens
        assert_eq!(
            texts(&first.repairs, "laptop_brands"),
            ["HP", "Dell", "Acer,Asus"]
        );
    }

    #[test]
    fn test_first_nf_passes_through_rows_without_brands() {
        let mut row = order_row(1, "erin", "ignored", "t");
        row.remove("laptop_brands");
        let mut null_row = order_row(2, "erin", "ignored", "t");
        null_row.insert("laptop_brands".to_string(), Cell::Null);

        let source = Table::with_rows(source_columns(), vec![row.clone(), null_row.clone()]);
        let first = to_first_normal_form(&source);

        assert_eq!(first.repairs.rows, vec![row, null_row]);
    }

    #[test]
    fn test_first_nf_keeps_source_then_token_order() {
        let first = to_first_normal_form(&sample_table());

        let ids: Vec<String> = texts(&first.repairs, "id");
        assert_eq!(ids, ["1", "1", "2", "3", "3", "3"]);
        assert_eq!(
            texts(&first.repairs, "laptop_brands"),
            ["HP", "Dell", "Lenovo", "Asus", "Acer", "Apple"]
        );
    }

    #[test]
    fn test_second_nf_dedupes_repairs_by_id() {
        let first = to_first_normal_form(&sample_table());
        let second = to_second_normal_form(&first);

        assert_eq!(second.repairs.len(), 3);
        assert_eq!(texts(&second.repairs, "id"), ["1", "2", "3"]);
        assert_eq!(texts(&second.repairs, "username"), ["alice", "bob", "alice"]);
        assert!(second.repairs.rows.iter().all(|r| r.len() == 3));

        assert_eq!(second.brands.len(), first.repairs.len());
        assert_eq!(texts(&second.brands, "repair_id"), ["1", "1", "2", "3", "3", "3"]);
        assert_eq!(second.explanation, SECOND_NF_EXPLANATION);
    }

    #[test]
    fn test_second_nf_column_keys() {
        let second = to_second_normal_form(&to_first_normal_form(&sample_table()));

        let keys: Vec<KeyKind> = second.repairs.columns.iter().map(|c| c.key).collect();
        assert_eq!(keys, [KeyKind::Primary, KeyKind::None, KeyKind::None]);

        let keys: Vec<KeyKind> = second.brands.columns.iter().map(|c| c.key).collect();
        assert_eq!(keys, [KeyKind::Primary, KeyKind::Primary]);
    }

    #[test]
    fn test_second_nf_keeps_duplicate_brand_pairs() {
        let source = Table::with_rows(
            source_columns(),
            vec![order_row(1, "frank", "HP, HP", "t")],
        );

        let second = to_second_normal_form(&to_first_normal_form(&source));

        assert_eq!(second.repairs.len(), 1);
        assert_eq!(second.brands.len(), 2);
        assert_eq!(second.brands.rows[0], second.brands.rows[1]);
    }

    #[test]
    fn test_third_nf_assigns_user_ids_in_first_seen_order() {
        let source = Table::with_rows(
            source_columns(),
            vec![
                order_row(1, "zoe", "HP", "t1"),
                order_row(2, "adam", "Dell", "t2"),
                order_row(3, "zoe", "Acer", "t3"),
                order_row(4, "mia", "Asus", "t4"),
            ],
        );

        let third = Normalization::from_table(source).third;

        assert_eq!(texts(&third.users, "username"), ["zoe", "adam", "mia"]);
        assert_eq!(texts(&third.users, "user_id"), ["1", "2", "3"]);
        assert_eq!(texts(&third.repairs, "user_id"), ["1", "2", "1", "3"]);
        assert!(third.repairs.rows.iter().all(|r| !r.contains_key("username")));
        assert_eq!(
            third.repairs.column("user_id").map(|c| c.key),
            Some(KeyKind::Foreign)
        );
        assert_eq!(third.explanation, THIRD_NF_EXPLANATION);
    }

    #[test]
    fn test_third_nf_passes_brands_through() {
        let normalization = Normalization::from_table(sample_table());
        assert_eq!(normalization.third.brands, normalization.second.brands);
    }

    #[test]
    fn test_brand_counts_round_trip_per_user() {
        let source = sample_table();
        let normalization = Normalization::from_table(source.clone());
        let third = &normalization.third;

        for user in &third.users.rows {
            let user_id = &user["user_id"];
            let repair_ids: HashSet<&Cell> = third
                .repairs
                .rows
                .iter()
                .filter(|r| &r["user_id"] == user_id)
                .map(|r| &r["id"])
                .collect();
            let brand_rows = third
                .brands
                .rows
                .iter()
                .filter(|b| repair_ids.contains(&b["repair_id"]))
                .count();

            let expected: usize = source
                .rows
                .iter()
                .filter(|r| r["username"] == user["username"])
                .map(|r| r["laptop_brands"].to_string().split(", ").count())
                .sum();

            assert_eq!(brand_rows, expected);
        }
    }

    #[test]
    fn test_single_order_scenario() {
        let source = Table::with_rows(
            source_columns(),
            vec![order_row(1, "alice", "HP, Dell", "T")],
        );

        let n = Normalization::from_table(source);

        assert_eq!(texts(&n.first.repairs, "laptop_brands"), ["HP", "Dell"]);
        assert_eq!(
            n.second.repairs.rows,
            vec![Row::from([
                ("id".to_string(), Cell::Integer(1)),
                ("username".to_string(), Cell::from("alice")),
                ("submit_date".to_string(), Cell::from("T")),
            ])]
        );
        assert_eq!(texts(&n.second.brands, "brand"), ["HP", "Dell"]);
        assert_eq!(
            n.third.users.rows,
            vec![Row::from([
                ("username".to_string(), Cell::from("alice")),
                ("user_id".to_string(), Cell::Integer(1)),
            ])]
        );
        assert_eq!(
            n.third.repairs.rows,
            vec![Row::from([
                ("id".to_string(), Cell::Integer(1)),
                ("user_id".to_string(), Cell::Integer(1)),
                ("submit_date".to_string(), Cell::from("T")),
            ])]
        );
    }

    #[test]
    fn test_empty_table_yields_empty_views() {
        let n = Normalization::from_table(Table::new(source_columns()));

        assert!(n.original.is_empty());
        assert!(n.first.repairs.is_empty());
        assert!(n.second.repairs.is_empty());
        assert!(n.second.brands.is_empty());
        assert!(n.third.users.is_empty());
        assert!(n.third.repairs.is_empty());
        assert!(n.third.brands.is_empty());
        assert_eq!(n.third.repairs.columns.len(), 3);
    }
}
