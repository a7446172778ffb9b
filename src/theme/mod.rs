//! HTML rendering
//!
//! Renders the blog front page and single article pages with Tera. The
//! templates are compiled into the binary, so there is nothing to install
//! next to it.

use serde::Serialize;
use std::error::Error as StdError;
use tera::{Context as TeraContext, Tera};

use crate::config::BlogConfig;
use crate::models::Article;
use crate::services::format_ordinal_date;

mod error;

pub use error::ThemeError;

const TEMPLATES: [(&str, &str); 3] = [
    ("base.html", include_str!("templates/base.html")),
    ("blog.html", include_str!("templates/blog.html")),
    ("article.html", include_str!("templates/article.html")),
];

/// Template-ready view of an article
#[derive(Debug, Serialize)]
struct RenderedArticle<'a> {
    slug: &'a str,
    title: &'a str,
    headline: &'a str,
    content: &'a str,
    author: String,
    added_at: String,
}

impl<'a> From<&'a Article> for RenderedArticle<'a> {
    fn from(article: &'a Article) -> Self {
        Self {
            slug: &article.slug,
            title: &article.title,
            headline: &article.headline,
            content: &article.content,
            author: article.author.full_name(),
            added_at: format_ordinal_date(&article.added_at),
        }
    }
}

/// Renders blog pages from the bundled templates
pub struct BlogRenderer {
    tera: Tera,
    blog: BlogConfig,
}

impl BlogRenderer {
    /// Compile the bundled templates
    pub fn new(blog: BlogConfig) -> Result<Self, ThemeError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)
            .map_err(|e| ThemeError::InvalidTemplate(error_chain(&e)))?;

        Ok(Self { tera, blog })
    }

    /// The front page: title, banner, then articles in the given order
    pub fn render_blog(&self, articles: &[Article]) -> Result<String, ThemeError> {
        let articles: Vec<RenderedArticle<'_>> = articles.iter().map(Into::into).collect();

        let mut context = self.base_context();
        context.insert("banner", &self.blog.banner);
        context.insert("articles", &articles);

        self.render("blog.html", &context)
    }

    /// A single article page
    pub fn render_article(&self, article: &Article) -> Result<String, ThemeError> {
        let mut context = self.base_context();
        context.insert("article", &RenderedArticle::from(article));

        self.render("article.html", &context)
    }

    fn base_context(&self) -> TeraContext {
        let mut context = TeraContext::new();
        context.insert("blog_title", &self.blog.title);
        context
    }

    fn render(&self, template: &str, context: &TeraContext) -> Result<String, ThemeError> {
        self.tera.render(template, context).map_err(|e| {
            ThemeError::TemplateError(format!("Failed to render '{}': {}", template, error_chain(&e)))
        })
    }
}

/// Flatten a Tera error and its causes into one message
fn error_chain(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(s) = source {
        message.push_str(&format!("\n  Caused by: {}", s));
        source = s.source();
    }
    message
}
