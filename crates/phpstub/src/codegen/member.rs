//! Rendering of single members: constants, parameters, callables, properties
//!
//! Pure text production. Every callable body is the empty `{}`; the stubs
//! exist for static tooling, not execution. Member-level renderers return
//! chunks indented for a declaration body and terminated with a newline;
//! [`render_define`] is the one top-level form.

use crate::ir::{
    doc_type_of, quote_string, ConstDef, FunctionDef, MethodDef, ParamDef, PhpType, PropertyDef,
};

const INDENT: &str = "    ";

/// Render a module-level constant as a `define` statement.
///
/// The constant name goes through the same single-quote escaping as string
/// values, so names carrying `\` namespace separators survive verbatim.
pub fn render_define(constant: &ConstDef) -> String {
    format!(
        "define({}, {});\n",
        quote_string(&constant.name),
        constant.value.to_literal()
    )
}

/// Render a class constant.
pub fn render_class_const(constant: &ConstDef) -> String {
    format!(
        "{}const {} = {};\n",
        INDENT,
        constant.name,
        constant.value.to_literal()
    )
}

/// Render one parameter for a signature position:
/// `<type> <&><...>$name[ = <default>]`.
///
/// The reference and variadic markers each render when their flag is set;
/// the source model makes them exclusive but the renderer does not rely on
/// that. A default is emitted only for optional, non-variadic parameters;
/// when an optional parameter's default could not be resolved at
/// reflection time, the `null` literal stands in.
pub fn render_param(param: &ParamDef) -> String {
    let mut out = String::new();
    if let Some(ty) = &param.ty {
        let annotation = ty.annotation();
        if !annotation.is_empty() {
            out.push_str(&annotation);
            out.push(' ');
        }
    }
    if param.by_ref {
        out.push('&');
    }
    if param.variadic {
        out.push_str("...");
    }
    out.push('$');
    out.push_str(&param.name);
    if param.optional && !param.variadic {
        let literal = match &param.default {
            Some(value) => value.to_literal(),
            None => {
                log::debug!("no resolvable default for ${}, substituting null", param.name);
                "null".to_string()
            }
        };
        out.push_str(" = ");
        out.push_str(&literal);
    }
    out
}

/// Render a free function: doc block plus empty-body signature.
pub fn render_function(function: &FunctionDef) -> String {
    let mut out = String::new();
    if let Some(doc) = doc_block(&function.params, function.ret.as_ref()) {
        out.push_str(&doc);
    }
    out.push_str(&format!(
        "{}function {}({}){{}}\n",
        INDENT,
        function.name,
        param_list(&function.params)
    ));
    out
}

/// Render a public method: doc block plus empty-body signature, with a
/// `static` qualifier when the descriptor says so.
pub fn render_method(method: &MethodDef) -> String {
    let mut out = String::new();
    if let Some(doc) = doc_block(&method.params, method.ret.as_ref()) {
        out.push_str(&doc);
    }
    let qualifier = if method.is_static { " static" } else { "" };
    out.push_str(&format!(
        "{}public{} function {}({}){{}}\n",
        INDENT,
        qualifier,
        method.name,
        param_list(&method.params)
    ));
    out
}

/// Render a public property. No type, default, or doc comment: reflection
/// does not expose property defaults reliably.
pub fn render_property(property: &PropertyDef) -> String {
    let qualifier = if property.is_static { " static" } else { "" };
    format!("{}public{} ${};\n", INDENT, qualifier, property.name)
}

fn param_list(params: &[ParamDef]) -> String {
    let rendered: Vec<String> = params.iter().map(render_param).collect();
    rendered.join(", ")
}

/// Doc block for a callable: one `@var` line per parameter in declared
/// order, then one `@return` line.
///
/// Suppressed entirely when there are no parameters and no declared return
/// type, so zero-information callables do not get a vacuous comment.
fn doc_block(params: &[ParamDef], ret: Option<&PhpType>) -> Option<String> {
    if params.is_empty() && ret.is_none() {
        return None;
    }
    let mut out = String::new();
    out.push_str(INDENT);
    out.push_str("/**\n");
    for param in params {
        out.push_str(&format!(
            "{} * @var {} ${}\n",
            INDENT,
            doc_type_of(param.ty.as_ref()),
            param.name
        ));
    }
    out.push_str(&format!("{} * @return {}\n", INDENT, doc_type_of(ret)));
    out.push_str(INDENT);
    out.push_str(" */\n");
    Some(out)
}
