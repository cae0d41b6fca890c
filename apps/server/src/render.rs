//! Server-side page rendering.
//!
//! The only page is `index.html`; it is compiled into the binary and rendered
//! with Tera. Every render receives `app_version` and `current_year` on top of
//! the view's own fields.

use chrono::{Datelike, Local};
use goaltracker_core::goals::Goal;
use serde::Serialize;
use tera::{Context, Tera};

const INDEX_TEMPLATE: &str = "index.html";
const INDEX_SOURCE: &str = include_str!("../templates/index.html");

/// View model for the index page.
#[derive(Serialize, Debug, Clone, Default)]
pub struct IndexView {
    pub goals: Vec<Goal>,
    pub added: bool,
    pub deleted: bool,
    pub edited: bool,
}

pub struct PageRenderer {
    tera: Tera,
    app_version: String,
}

impl PageRenderer {
    pub fn new(app_version: impl Into<String>) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, INDEX_SOURCE)?;
        Ok(Self {
            tera,
            app_version: app_version.into(),
        })
    }

    pub fn render_index(&self, view: &IndexView) -> Result<String, tera::Error> {
        let mut context = Context::from_serialize(view)?;
        context.insert("app_version", &self.app_version);
        context.insert("current_year", &Local::now().year());
        self.tera.render(INDEX_TEMPLATE, &context)
    }
}
