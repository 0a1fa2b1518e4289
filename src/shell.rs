use std::path::Path;

use tracing::{info, warn};

use crate::console::routes::{RenderMode, Route};

const APP_TITLE: &str = "ebankingfrontend";

const DEFAULT_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>ebankingfrontend</title>
  <base href="/">
  <meta name="viewport" content="width=device-width, initial-scale=1">
</head>
<body>
  <app-root></app-root>
</body>
</html>
"#;

/// The application shell every page route is served from.
#[derive(Debug, Clone)]
pub struct Shell {
    template: String,
}

impl Shell {
    pub fn new(template: impl Into<String>) -> Self {
        Shell {
            template: template.into(),
        }
    }

    /// Reads `index.html` from the browser output, or uses the built-in shell.
    pub fn load(browser_dist: &str) -> Self {
        let index = Path::new(browser_dist).join("index.html");
        match std::fs::read_to_string(&index) {
            Ok(template) => {
                info!("Loaded application shell from: {}", index.display());
                Shell::new(template)
            }
            Err(err) => {
                warn!(
                    "No application shell at {} ({}), using built-in template",
                    index.display(),
                    err
                );
                Shell::new(DEFAULT_TEMPLATE)
            }
        }
    }

    pub fn render(&self, route: Route) -> String {
        match route.render_mode() {
            RenderMode::Client => self.template.clone(),
            RenderMode::Prerender => {
                let title = format!("<title>{} - {}</title>", APP_TITLE, route.title());
                let marker = format!(
                    "<meta name=\"rendered-route\" content=\"{}\">\n</head>",
                    route.path()
                );
                let html = replace_title(&self.template, &title);
                html.replacen("</head>", &marker, 1)
            }
        }
    }
}

fn replace_title(html: &str, title: &str) -> String {
    match (html.find("<title>"), html.find("</title>")) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{}{}", &html[..start], title, &html[end + "</title>".len()..])
        }
        _ => html.to_string(),
    }
}
