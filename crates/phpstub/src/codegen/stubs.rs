//! Whole-file stub assembly
//!
//! [`StubGenerator`] composes the rendered members of one module into
//! complete file bodies: the flat constants file, the namespace-grouped
//! functions file, and one file per class-like declaration with
//! shape-specific member blocks.

use crate::codegen::member;
use crate::ir::{ClassDef, ClassKind, ExtensionModule, FunctionDef};
use indexmap::IndexMap;

/// Generator for the stub files of one module
pub struct StubGenerator<'a> {
    module: &'a ExtensionModule,
}

impl<'a> StubGenerator<'a> {
    /// Create a new generator for a module
    pub fn new(module: &'a ExtensionModule) -> Self {
        Self { module }
    }

    /// Generate the constants file: one `define` per module constant, in
    /// enumeration order, no grouping.
    pub fn consts_file(&self) -> String {
        let mut out = String::from("<?php\n");
        for constant in &self.module.constants {
            out.push_str(&member::render_define(constant));
        }
        out
    }

    /// Generate the functions file: one `namespace` block per distinct
    /// namespace in first-encounter order, each holding that namespace's
    /// functions.
    ///
    /// The global namespace gets a block with no name after the keyword,
    /// keeping the layout uniform regardless of namespace depth.
    pub fn functions_file(&self) -> String {
        let mut grouped: IndexMap<&str, Vec<&FunctionDef>> = IndexMap::new();
        for function in &self.module.functions {
            grouped
                .entry(function.namespace.as_str())
                .or_default()
                .push(function);
        }

        let mut out = String::from("<?php\n");
        for (namespace, functions) in &grouped {
            if namespace.is_empty() {
                out.push_str("namespace\n{\n");
            } else {
                out.push_str(&format!("namespace {}\n{{\n", namespace));
            }
            let chunks: Vec<String> = functions
                .iter()
                .map(|function| member::render_function(function))
                .collect();
            out.push_str(&chunks.join("\n"));
            out.push_str("}\n");
        }
        out
    }

    /// Generate one class-like declaration file.
    ///
    /// Member blocks render as constants, properties, methods, in that
    /// order, any of which may be empty. Interfaces never render
    /// properties, even when the descriptor reports them.
    pub fn class_file(&self, class: &ClassDef) -> String {
        let keyword = match class.kind {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Trait => "trait",
        };

        let mut out = String::from("<?php\n");
        if !class.namespace.is_empty() {
            out.push_str(&format!("namespace {};\n", class.namespace));
        }
        out.push('\n');
        out.push_str(&format!("{} {}\n{{\n", keyword, class.name));

        let mut chunks: Vec<String> = Vec::new();
        for constant in &class.constants {
            chunks.push(member::render_class_const(constant));
        }
        if class.kind != ClassKind::Interface {
            for property in &class.properties {
                chunks.push(member::render_property(property));
            }
        }
        for method in &class.methods {
            chunks.push(member::render_method(method));
        }
        out.push_str(&chunks.join("\n"));
        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ConstDef, MethodDef, ParamDef, PhpType, PhpValue, PropertyDef};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_consts_file() {
        let module = ExtensionModule::new("demo", "1.0.0")
            .const_def(ConstDef::new("MY_CONST", PhpValue::Int(42)))
            .const_def(ConstDef::new("NAME", PhpValue::string("demo")));

        let out = StubGenerator::new(&module).consts_file();
        assert_eq!(
            out,
            "<?php\ndefine('MY_CONST', 42);\ndefine('NAME', 'demo');\n"
        );
    }

    #[test]
    fn test_functions_file_groups_by_namespace() {
        let module = ExtensionModule::new("demo", "1.0.0")
            .function(
                FunctionDef::new("foo")
                    .in_namespace("ns")
                    .param(ParamDef::typed("x", PhpType::named("int")))
                    .returns(PhpType::named("bool")),
            )
            .function(FunctionDef::new("bar").in_namespace("ns"))
            .function(FunctionDef::new("other").in_namespace("two"));

        let out = StubGenerator::new(&module).functions_file();
        assert!(out.starts_with("<?php\n"));
        assert!(out.contains("namespace ns\n{\n"));
        assert!(out.contains("namespace two\n{\n"));
        assert_eq!(out.matches("namespace ns\n").count(), 1, "one block per namespace");
        assert!(out.contains("    function foo(int $x){}\n"));
        assert!(out.contains(" * @var int $x\n"));
        assert!(out.contains(" * @return bool\n"));
        assert!(out.contains("    function bar(){}\n"));
        // ns functions stay inside the ns block
        let ns_block = &out[out.find("namespace ns").unwrap()..out.find("namespace two").unwrap()];
        assert!(ns_block.contains("function foo"));
        assert!(ns_block.contains("function bar"));
        assert!(!ns_block.contains("function other"));
    }

    #[test]
    fn test_global_namespace_block_is_uniform() {
        let module = ExtensionModule::new("demo", "1.0.0")
            .function(FunctionDef::new("strlen_like"));

        let out = StubGenerator::new(&module).functions_file();
        assert_eq!(
            out,
            "<?php\nnamespace\n{\n    function strlen_like(){}\n}\n"
        );
    }

    #[test]
    fn test_class_file_layout() {
        let class = ClassDef::class("MyClass")
            .in_namespace("ns")
            .const_def(ConstDef::new("LIMIT", PhpValue::Int(10)))
            .property(PropertyDef::new("count").as_static())
            .method(MethodDef::new("bar").returns(PhpType::named("void")));

        let module = ExtensionModule::new("demo", "1.0.0");
        let out = StubGenerator::new(&module).class_file(&class);
        assert_eq!(
            out,
            "<?php\nnamespace ns;\n\nclass MyClass\n{\n    const LIMIT = 10;\n\n    public static $count;\n\n    /**\n     * @return void\n     */\n    public function bar(){}\n}\n"
        );
    }

    #[test]
    fn test_interface_omits_properties() {
        let class = ClassDef::interface("Handler")
            .method(MethodDef::new("handle"))
            .property(PropertyDef::new("state"));

        let module = ExtensionModule::new("demo", "1.0.0");
        let out = StubGenerator::new(&module).class_file(&class);
        assert!(out.contains("interface Handler\n{\n"));
        assert!(out.contains("    public function handle(){}\n"));
        assert!(!out.contains("$state"));
    }

    #[test]
    fn test_trait_keeps_properties() {
        let class = ClassDef::trait_def("Countable")
            .property(PropertyDef::new("count"))
            .method(MethodDef::new("increment"));

        let module = ExtensionModule::new("demo", "1.0.0");
        let out = StubGenerator::new(&module).class_file(&class);
        assert!(out.contains("trait Countable\n{\n"));
        assert!(out.contains("    public $count;\n"));
        assert!(out.contains("    public function increment(){}\n"));
    }

    #[test]
    fn test_global_class_has_no_namespace_statement() {
        let class = ClassDef::class("Plain");
        let module = ExtensionModule::new("demo", "1.0.0");
        let out = StubGenerator::new(&module).class_file(&class);
        assert_eq!(out, "<?php\n\nclass Plain\n{\n}\n");
    }
}
