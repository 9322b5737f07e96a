//! Server-rendered HTML.
//!
//! Every dynamic string goes through [`escape`] before it reaches markup.

pub mod pages;
pub mod table;

pub use table::TableView;

use std::borrow::Cow;
use std::fmt;

use crate::constants::routes;

/// Escapes text for use in element content or a quoted attribute.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}

/// Shared page chrome: stylesheet, heading, navigation and trailing scripts.
pub struct Layout<'a> {
    pub title: &'a str,
    pub container_class: &'a str,
    pub body: String,
    pub scripts: &'a [&'a str],
}

impl<'a> Layout<'a> {
    pub fn new(title: &'a str, body: String) -> Self {
        Self {
            title,
            container_class: "container",
            body,
            scripts: &[],
        }
    }

    #[must_use]
    pub fn container_class(mut self, class: &'a str) -> Self {
        self.container_class = class;
        self
    }

    #[must_use]
    pub fn scripts(mut self, scripts: &'a [&'a str]) -> Self {
        self.scripts = scripts;
        self
    }
}

impl fmt::Display for Layout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = escape(self.title);

        write!(
            f,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title}</title>\n\
             <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
             </head>\n<body>\n<div class=\"{class}\">\n\
             <div class=\"form-header\"><h2>{title}</h2></div>\n",
            class = escape(self.container_class),
        )?;
        f.write_str(&self.body)?;
        f.write_str("\n</div>\n")?;

        for script in self.scripts {
            writeln!(f, "<script src=\"/static/{}\"></script>", escape(script))?;
        }

        f.write_str("</body>\n</html>\n")
    }
}

pub(crate) fn nav_links(f: &mut impl fmt::Write, links: &[(&str, &str)]) -> fmt::Result {
    f.write_str("<div class=\"buttons\">")?;
    for (href, label) in links {
        write!(
            f,
            "<a href=\"{}\" class=\"back-btn\">{}</a>",
            escape(href),
            escape(label)
        )?;
    }
    f.write_str("</div>")
}

pub(crate) const ORDER_FORM_LINK: (&str, &str) = (routes::ORDER_FORM, "Submit New Repair");
pub(crate) const VIEW_ORDERS_LINK: (&str, &str) = (routes::VIEW_ORDERS, "View All Orders");
pub(crate) const NORMALIZE_LINK: (&str, &str) = (routes::NORMALIZE, "Normalization Table");
