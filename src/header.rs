use std::path::PathBuf;

use askama::Template;

use crate::strip::strip_comments;

/// How the embedded source is exposed to the including translation unit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HeaderStyle {
    /// `std::string& name()` returning a function-local static
    #[default]
    Function,
    /// a namespace-scope `std::string` variable
    Constant,
}

/// Options for one header, built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// the shader source to embed
    pub input_path: PathBuf,
    /// overrides the identifier derived from the input file name
    pub name: Option<String>,
    pub namespace: Option<String>,
    /// wins over `namespace`
    pub no_namespace: bool,
    /// skip `#include <string>`
    pub no_include: bool,
    /// constant style only
    pub no_static: bool,
    /// strip comments and blank lines; function style only
    pub release: bool,
    pub style: HeaderStyle,
}

impl HeaderConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            name: None,
            namespace: None,
            no_namespace: false,
            no_include: false,
            no_static: false,
            release: false,
            style: HeaderStyle::default(),
        }
    }

    /// The explicit name, or the input file name without its last extension.
    pub fn identifier(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self
                .input_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// The namespace to wrap the declaration in, if any.
    pub fn namespace(&self) -> Option<&str> {
        if self.no_namespace {
            return None;
        }

        self.namespace.as_deref()
    }

    /// The text placed between the raw literal delimiters.
    fn embedded_content(&self, source: &str) -> String {
        match self.style {
            HeaderStyle::Function if self.release => strip_comments(source).trim().to_string(),
            HeaderStyle::Function => source.trim().to_string(),
            HeaderStyle::Constant => source.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "header.hpp.askama", escape = "none")]
struct HeaderTemplate<'a> {
    include_string: bool,
    namespace: Option<&'a str>,
    style: HeaderStyle,
    is_static: bool,
    name: &'a str,
    literal: String,
}

/// Renders the header for already loaded shader `source`.
pub fn generate_header(config: &HeaderConfig, source: &str) -> Result<String, askama::Error> {
    let name = config.identifier();
    let content = config.embedded_content(source);

    HeaderTemplate {
        include_string: !config.no_include,
        namespace: config.namespace(),
        style: config.style,
        is_static: !config.no_static,
        name: &name,
        literal: raw_string_literal(&content),
    }
    .render()
}

const FALLBACK_DELIMITER: &str = "shader";

/// Wraps `content` in a C++ raw string literal.
/// A delimiter is only added when `)"` would end the literal early.
pub fn raw_string_literal(content: &str) -> String {
    let delimiter = std::iter::once(String::new())
        .chain((0..).map(|i| match i {
            0 => FALLBACK_DELIMITER.to_string(),
            i => format!("{FALLBACK_DELIMITER}{i}"),
        }))
        .find(|delimiter| !content.contains(&format!("){delimiter}\"")))
        .unwrap_or_default();

    format!("R\"{delimiter}({content}){delimiter}\"")
}
