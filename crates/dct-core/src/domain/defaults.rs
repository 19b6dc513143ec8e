//! Built-in content written by `dct init`.
//!
//! The templates are framework-owned and rewritten on every `init`; the
//! config file is user-owned and only written when missing.

/// A default template shipped with dct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinTemplate {
    /// Artifact type, also the template file stem.
    pub kind: &'static str,
    pub source: &'static str,
}

pub const COMMAND_TEMPLATE: BuiltinTemplate = BuiltinTemplate {
    kind: "command",
    source: "namespace {{ namespace }};\n\npublic record {{ name }}Command;\n",
};

pub const QUERY_TEMPLATE: BuiltinTemplate = BuiltinTemplate {
    kind: "query",
    source: "namespace {{ namespace }};\n\npublic record {{ name }}Query;\n",
};

pub const HANDLER_TEMPLATE: BuiltinTemplate = BuiltinTemplate {
    kind: "handler",
    source: "namespace {{ namespace }};\n\npublic class {{ name }}Handler\n{\n}\n",
};

pub const BUILTIN_TEMPLATES: [BuiltinTemplate; 3] =
    [COMMAND_TEMPLATE, QUERY_TEMPLATE, HANDLER_TEMPLATE];

/// `.gitignore` placed inside the marker directory: ignore everything in it
/// except the templates.
pub const MARKER_GITIGNORE: &str = "*\n!.gitignore\n!templates/\n!templates/**\n";

/// Artifact types of the built-in templates.
pub fn builtin_kinds() -> [&'static str; 3] {
    BUILTIN_TEMPLATES.map(|t| t.kind)
}
