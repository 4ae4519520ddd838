//! Call-site model shared by the tracer core and observation sources

use serde::{Deserialize, Serialize};

use crate::format;

/// One function argument, as reported by an observation source
///
/// The engine never reflects on live host values. Whatever runtime feeds the
/// tracer renders each argument into one of these shapes up front; everything
/// downstream (filtering, signatures, the log) works on this model only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgValue {
    /// An object or instance, identified by its runtime type name
    Object { type_name: String },
    /// An array, sequence or mapping, identified by element count
    Array { len: usize },
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Null,
}

/// How a method was invoked on its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    Instance,
    Static,
}

impl CallType {
    /// Separator between owner and function name in a rendered signature
    pub fn separator(self) -> &'static str {
        match self {
            CallType::Instance => "->",
            CallType::Static => "::",
        }
    }
}

/// The kind of caller an observation describes
///
/// A method call carries its owning type and call qualifier; a plain function
/// call carries the source file it was defined in. The two filter axes hang
/// off this distinction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerKind {
    Method { owner: String, call_type: CallType },
    Function { source_file: String },
}

/// A transient description of the immediate caller at one observation event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSite {
    pub kind: CallerKind,
    pub function: String,
    #[serde(default)]
    pub args: Vec<ArgValue>,
}

impl CallSite {
    /// Build a method call site
    pub fn method(
        owner: impl Into<String>,
        call_type: CallType,
        function: impl Into<String>,
        args: Vec<ArgValue>,
    ) -> Self {
        Self {
            kind: CallerKind::Method {
                owner: owner.into(),
                call_type,
            },
            function: function.into(),
            args,
        }
    }

    /// Build a plain function call site
    pub fn function(
        function: impl Into<String>,
        source_file: impl Into<String>,
        args: Vec<ArgValue>,
    ) -> Self {
        Self {
            kind: CallerKind::Function {
                source_file: source_file.into(),
            },
            function: function.into(),
            args,
        }
    }

    /// Owning type name, if this is a method call
    pub fn owner(&self) -> Option<&str> {
        match &self.kind {
            CallerKind::Method { owner, .. } => Some(owner),
            CallerKind::Function { .. } => None,
        }
    }

    /// Render the comparable textual identity of this call
    ///
    /// `Owner::function(args)` or `owner->function(args)` for methods,
    /// `function(args)` for plain functions. Two observations with the same
    /// signature while control has not left the frame are the same open call.
    pub fn signature(&self) -> String {
        let args = format::format_args(&self.args);
        match &self.kind {
            CallerKind::Method { owner, call_type } => {
                format!("{}{}{}({})", owner, call_type.separator(), self.function, args)
            }
            CallerKind::Function { .. } => format!("{}({})", self.function, args),
        }
    }
}
