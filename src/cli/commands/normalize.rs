//! Normalize command handler

use crate::config::Config;
use crate::constants::REPAIRS_TABLE;
use crate::db::Store;
use crate::models::Table;
use crate::normalize::{self, Normalization};

pub async fn cmd_normalize(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let n = Normalization::from_table(store.load_table(REPAIRS_TABLE).await?);

    println!("== Original Data Structure");
    print_table("repairs", &n.original);
    println!("{}", normalize::ORIGINAL_EXPLANATION);
    println!();

    println!("== First Normal Form (1NF)");
    print_table("repairs_1nf", &n.first.repairs);
    println!("{}", n.first.explanation);
    println!();

    println!("== Second Normal Form (2NF)");
    print_table("repairs_2nf", &n.second.repairs);
    print_table("laptop_brands_2nf", &n.second.brands);
    println!("{}", n.second.explanation);
    println!();

    println!("== Third Normal Form (3NF)");
    print_table("users_3nf", &n.third.users);
    print_table("repairs_3nf", &n.third.repairs);
    print_table("laptop_brands_3nf", &n.third.brands);
    println!("{}", n.third.explanation);

    Ok(())
}

fn print_table(name: &str, table: &Table) {
    println!();
    println!("Table: {name}");
    print!("{}", format_table(table));
}

fn format_table(table: &Table) -> String {
    let headers: Vec<String> = table
        .columns
        .iter()
        .map(|c| match c.key.label() {
            Some(key) => format!("{} ({key})", c.field),
            None => c.field.clone(),
        })
        .collect();

    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            table
                .columns
                .iter()
                .map(|c| row.get(&c.field).map(ToString::to_string).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = format_line(&headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_line(&rule, &widths));

    if cells.is_empty() {
        out.push_str("(no data)\n");
    }
    for row in &cells {
        out.push_str(&format_line(row, &widths));
    }

    out
}

fn format_line(values: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = values
        .iter()
        .zip(widths)
        .map(|(v, &w)| format!("{v:<w$}"))
        .collect();
    format!("| {} |\n", padded.join(" | "))
}
