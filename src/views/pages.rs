use std::fmt::{self, Write};

use super::{
    Layout, NORMALIZE_LINK, ORDER_FORM_LINK, TableView, VIEW_ORDERS_LINK, escape, nav_links,
};
use crate::constants::routes;
use crate::models::{Order, Table};
use crate::normalize::{self, Normalization};

pub const NO_RECORDS_MESSAGE: &str = "No repair orders found in the database.";

#[must_use]
pub fn order_form(brands: &[String]) -> String {
    let mut body = String::new();
    // Writing into a String cannot fail
    let _ = write_order_form(&mut body, brands);

    Layout::new("Laptop Repair Form", body)
        .container_class("container form-container")
        .scripts(&["orderform.js"])
        .to_string()
}

fn write_order_form(out: &mut String, brands: &[String]) -> fmt::Result {
    write!(
        out,
        "<form action=\"{}\" method=\"POST\">\
         <label for=\"username\">Username:</label>\
         <input type=\"text\" id=\"username\" name=\"username\" placeholder=\"Enter your username\" required>\
         <label>Select Laptop Brand(s):</label>\
         <div class=\"brand-selection\">",
        routes::ORDER_FORM
    )?;

    for (index, brand) in brands.iter().enumerate() {
        let brand = escape(brand);
        write!(
            out,
            "<div class=\"brand-option\">\
             <input type=\"checkbox\" id=\"brand-{index}\" name=\"laptop_brand[]\" value=\"{brand}\">\
             <label for=\"brand-{index}\" class=\"brand-label\"><span class=\"brand-name\">{brand}</span></label>\
             </div>"
        )?;
    }

    out.push_str("</div><button type=\"submit\">Submit Repair Request</button></form>");
    nav_links(out, &[VIEW_ORDERS_LINK, NORMALIZE_LINK])
}

/// Listing page. `Err` carries the storage failure to show inline.
#[must_use]
pub fn orders(result: Result<&[Order], String>) -> String {
    let mut body = String::new();
    let _ = write_orders(&mut body, result);
    Layout::new("Laptop Repair Orders", body).to_string()
}

fn write_orders(out: &mut String, result: Result<&[Order], String>) -> fmt::Result {
    match result {
        Ok([]) => write!(out, "<div class=\"no-records\">{NO_RECORDS_MESSAGE}</div>")?,
        Ok(orders) => {
            out.push_str(
                "<table class=\"data-table\"><tr><th>ID</th><th>Username</th>\
                 <th>Laptop Brands</th><th>Submission Date</th></tr>",
            );
            for order in orders {
                write!(
                    out,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    order.id,
                    escape(&order.username),
                    escape(&order.laptop_brands),
                    escape(&order.submit_date)
                )?;
            }
            out.push_str("</table>");
        }
        Err(message) => write!(
            out,
            "<div class=\"no-records\">Error: {}</div>",
            escape(&message)
        )?,
    }

    nav_links(out, &[ORDER_FORM_LINK, NORMALIZE_LINK])
}

struct Section<'a> {
    id: &'static str,
    label: &'static str,
    heading: &'static str,
    tables: Vec<(&'static str, Option<&'a Table>)>,
    explanation: &'static str,
}

/// Normalization page: every view is rendered up front, only the first is
/// visible until a tab is clicked.
#[must_use]
pub fn normalization(result: Result<&Normalization, String>) -> String {
    let data = result.as_ref().ok().copied();
    let sections = [
        Section {
            id: "nf-original",
            label: "Original Data",
            heading: "Original Data Structure",
            tables: vec![("repairs", data.map(|n| &n.original))],
            explanation: normalize::ORIGINAL_EXPLANATION,
        },
        Section {
            id: "nf-first",
            label: "Convert to 1NF",
            heading: "First Normal Form (1NF)",
            tables: vec![("repairs_1nf", data.map(|n| &n.first.repairs))],
            explanation: normalize::FIRST_NF_EXPLANATION,
        },
        Section {
            id: "nf-second",
            label: "Convert to 2NF",
            heading: "Second Normal Form (2NF)",
            tables: vec![
                ("repairs_2nf", data.map(|n| &n.second.repairs)),
                ("laptop_brands_2nf", data.map(|n| &n.second.brands)),
            ],
            explanation: normalize::SECOND_NF_EXPLANATION,
        },
        Section {
            id: "nf-third",
            label: "Convert to 3NF",
            heading: "Third Normal Form (3NF)",
            tables: vec![
                ("users_3nf", data.map(|n| &n.third.users)),
                ("repairs_3nf", data.map(|n| &n.third.repairs)),
                ("laptop_brands_3nf", data.map(|n| &n.third.brands)),
            ],
            explanation: normalize::THIRD_NF_EXPLANATION,
        },
    ];

    let failure = result.as_ref().err().map(String::as_str).unwrap_or_default();

    let mut body = String::new();
    let _ = write_normalization(&mut body, &sections, failure);

    Layout::new("Database Normalization Tool", body)
        .container_class("container wide")
        .scripts(&["normalize.js"])
        .to_string()
}

fn write_normalization(out: &mut String, sections: &[Section<'_>], failure: &str) -> fmt::Result {
    out.push_str("<div class=\"buttons\">");
    for (index, section) in sections.iter().enumerate() {
        let active = if index == 0 { " active" } else { "" };
        write!(
            out,
            "<button type=\"button\" class=\"normalize-btn{active}\" data-view=\"{}\">{}</button>",
            section.id, section.label
        )?;
    }
    out.push_str("</div><div id=\"normalization-results\">");

    for (index, section) in sections.iter().enumerate() {
        let hidden = if index == 0 { "" } else { " hidden" };
        write!(
            out,
            "<section id=\"{}\" class=\"nf-view\"{hidden}><h3>{}</h3>",
            section.id, section.heading
        )?;
        for (name, table) in &section.tables {
            let view = match table {
                Some(table) => TableView::new(name, table),
                None => TableView::failed(name, failure),
            };
            write!(out, "{view}")?;
        }
        write!(
            out,
            "<div class=\"explanation\">{}</div></section>",
            escape(section.explanation)
        )?;
    }

    out.push_str("</div>");
    nav_links(out, &[ORDER_FORM_LINK, VIEW_ORDERS_LINK])
}

/// Blunt terminal page for rejected or failed requests.
#[must_use]
pub fn error(message: &str) -> String {
    let mut body = String::new();
    let _ = write!(body, "<div class=\"error\">{}</div>", escape(message));
    let _ = nav_links(&mut body, &[ORDER_FORM_LINK]);
    Layout::new("Request Failed", body).to_string()
}
