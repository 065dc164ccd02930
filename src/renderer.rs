use crate::error::Result;
use minijinja::{AutoEscape, Environment};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Executes a template expression and returns whether it evaluates to true.
    ///
    /// An empty expression is true.
    ///
    /// # Arguments
    /// * `expr` - Expression to evaluate
    /// * `context` - Context variables for evaluation
    ///
    /// # Returns
    /// * `Result<bool>` - Whether the expression evaluates to true
    fn execute_expression(&self, expr: &str, context: &serde_json::Value)
        -> Result<bool>;
}

/// MiniJinja-based template rendering engine.
///
/// Prompt messages are plain terminal text, so auto-escaping is off.
#[derive(Clone)]
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }

    fn execute_expression(
        &self,
        expr_str: &str,
        context: &serde_json::Value,
    ) -> Result<bool> {
        if expr_str.trim().is_empty() {
            return Ok(true);
        }
        let expr = self.env.compile_expression(expr_str)?;
        Ok(expr.eval(context)?.is_true())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_with_answers() {
        let renderer = MiniJinjaRenderer::new();
        let rendered = renderer
            .render("Hello, {{ name }} <{{ email }}>", &json!({"name": "Ann", "email": "a@b.io"}))
            .unwrap();
        assert_eq!(rendered, "Hello, Ann <a@b.io>");
    }

    #[test]
    fn missing_variables_render_empty() {
        let renderer = MiniJinjaRenderer::new();
        assert_eq!(renderer.render("[{{ nope }}]", &json!({})).unwrap(), "[]");
    }

    #[test]
    fn evaluates_expressions() {
        let renderer = MiniJinjaRenderer::new();
        let context = json!({"use_db": true, "features": ["api", "db"]});
        assert!(renderer.execute_expression("", &context).unwrap());
        assert!(renderer.execute_expression("use_db", &context).unwrap());
        assert!(renderer.execute_expression("'db' in features", &context).unwrap());
        assert!(!renderer.execute_expression("not use_db", &context).unwrap());
        assert!(renderer.execute_expression("use_db ==", &context).is_err());
    }
}
