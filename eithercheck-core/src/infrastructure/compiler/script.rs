// eithercheck-core/src/infrastructure/compiler/script.rs

// Turns a ClientOptions payload into browser code. The page is expected to provide
// a `messages` array and a jQuery-style `$`.

use std::sync::LazyLock;

use minijinja::{Environment, context};

use super::embed::to_embeddable_json;
use crate::domain::client::ClientOptions;
use crate::error::EitherError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::ClientRenderer;

const EITHER_REQUIRED_TEMPLATE: &str = r#"(function(){
    var options = {{ options }};
    var values = [];
    values.push($('#' + options.attribute).val());
    for (var i = 0; i < options.eitherAttributes.length; i++) {
        values.push($('#' + options.eitherAttributes[i]).val());
    }
    if (values.filter(function(e){
            return {% if trim %}$.trim(e || ''){% else %}(e || ''){% endif %}.length > 0;
        }).length == 0) {
        messages.push(options.message);
    }
})();
"#;

const CLIENT_CALL_TEMPLATE: &str = "eitherRequired(messages, {{ options }});";

/// Reusable browser function taking the options payload, for pages that load it once
/// and only receive data per field.
pub const CLIENT_RUNTIME: &str = include_str!("../../../assets/either_required.js");

static SHARED: LazyLock<ScriptRenderer<'static>> = LazyLock::new(ScriptRenderer::new);

pub struct ScriptRenderer<'a> {
    env: Environment<'a>,
}

impl<'a> ScriptRenderer<'a> {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Payloads are JSON already made safe for embedding.
        env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);
        Self { env }
    }

    /// Process-wide renderer.
    pub fn shared() -> &'static ScriptRenderer<'static> {
        &SHARED
    }

    /// Self-contained fragment checking the inputs named in `options`.
    pub fn render_either_required(
        &self,
        options: &ClientOptions,
    ) -> Result<String, InfrastructureError> {
        self.render(EITHER_REQUIRED_TEMPLATE, options)
    }

    /// One-line call into `CLIENT_RUNTIME`.
    pub fn render_client_call(&self, options: &ClientOptions) -> Result<String, InfrastructureError> {
        self.render(CLIENT_CALL_TEMPLATE, options)
    }

    fn render(&self, template: &str, options: &ClientOptions) -> Result<String, InfrastructureError> {
        let embedded = to_embeddable_json(options)?;
        self.env
            .render_str(template, context! { options => embedded, trim => options.trim })
            .map_err(InfrastructureError::TemplateError)
    }
}

impl<'a> Default for ScriptRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ClientRenderer for ScriptRenderer<'a> {
    fn render_check(&self, options: &ClientOptions) -> Result<String, EitherError> {
        Ok(self.render_either_required(options)?)
    }
}
