//! Tera-backed renderer.
//!
//! Templates only need `{{ name }}` and `{{ namespace }}`, but authors get
//! the rest of the tera language (filters, conditionals) for free.

use std::error::Error as _;
use std::path::Path;

use dct_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::DctResult,
};
use tera::{Context, Tera};
use tracing::{instrument, trace};

/// Name the source is registered under. Has no `.html` suffix, so tera does
/// not autoescape the output.
const TEMPLATE_NAME: &str = "artifact";

/// Renders templates with the [`tera`] engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeraRenderer;

impl TeraRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for TeraRenderer {
    #[instrument(skip_all, fields(origin = %origin.display()))]
    fn render(&self, source: &str, context: &RenderContext, origin: &Path) -> DctResult<String> {
        let mut ctx = Context::new();
        for (key, value) in context.variables() {
            ctx.insert(key, value);
        }

        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, source)
            .map_err(|e| rendering_failed(origin, &e))?;

        let rendered = tera
            .render(TEMPLATE_NAME, &ctx)
            .map_err(|e| rendering_failed(origin, &e))?;

        trace!(bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }
}

/// Tera keeps the useful part of its errors in the source chain.
fn rendering_failed(origin: &Path, err: &tera::Error) -> ApplicationError {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }

    ApplicationError::RenderingFailed {
        path: origin.to_path_buf(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dct_core::error::DctError;

    fn render(source: &str) -> DctResult<String> {
        TeraRenderer::new().render(
            source,
            &RenderContext::new("Test", "Shop.Features.Orders"),
            Path::new("command.tera"),
        )
    }

    #[test]
    fn substitutes_name_and_namespace() {
        let out = render("namespace {{ namespace }};\n\npublic record {{ name }}Command;\n").unwrap();
        assert_eq!(
            out,
            "namespace Shop.Features.Orders;\n\npublic record TestCommand;\n"
        );
    }

    #[test]
    fn does_not_escape_markup() {
        let out = TeraRenderer::new()
            .render(
                "{{ name }}",
                &RenderContext::new("List<int>", "N"),
                Path::new("t.tera"),
            )
            .unwrap();
        assert_eq!(out, "List<int>");
    }

    #[test]
    fn filters_are_available() {
        assert_eq!(render("{{ name | lower }}").unwrap(), "test");
    }

    #[test]
    fn syntax_error_names_the_template() {
        let err = render("{{ name ").unwrap_err();
        match err {
            DctError::Application(ApplicationError::RenderingFailed { path, .. }) => {
                assert_eq!(path, Path::new("command.tera"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_variable_is_an_error() {
        assert!(render("{{ missing }}").is_err());
    }
}
