//! Lexer, parser, and AST for the **mockshot scene markup** (`.msml`).
//!
//! Dependency-free, so editor tooling can read scene files without the
//! raster engine.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Document`, `Node`, `Prop`, `Value`, `Span` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token`, `TokenWithPos` |
//! | [`parser`] | `parse_str` entry point |
//!
//! ```rust
//! use mockshot_markup::parse_str;
//!
//! let src = r#"
//!     Scene "chat" {
//!         width: 1290  height: 2796
//!         Block "Hello!" { fill: user_bubble  align: trailing }
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.root.kind, "Scene");
//! assert_eq!(doc.root.children[0].content.as_deref(), Some("Hello!"));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Document, Node, Prop, Span, Value};
pub use error::ParseError;
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> Document { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn empty_scene() { ok("Scene { }"); }
    #[test] fn bare_node_without_block() {
        let doc = ok(r#"Scene "s""#);
        assert_eq!(doc.root.content.as_deref(), Some("s"));
        assert!(doc.root.props.is_empty());
    }
    #[test] fn props_and_children_mix() {
        let doc = ok(r#"Scene "chat" {
            width: 390
            Background { start: bg_primary  end: #050a19 }
            height: 844
            Spacer { height: 12 }
        }"#);
        let root = &doc.root;
        assert_eq!(root.prop("width"), Some(&Value::Number(390.0)));
        assert_eq!(root.prop("height"), Some(&Value::Number(844.0)));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].prop("start"), Some(&Value::Ident("bg_primary".into())));
        assert_eq!(root.children[0].prop("end"), Some(&Value::Color([5, 10, 25, 255])));
    }
    #[test] fn later_prop_wins() {
        let doc = ok("Block { radius: 4  radius: 9 }");
        assert_eq!(doc.root.prop("radius").and_then(Value::as_number), Some(9.0));
    }
    #[test] fn comments_anywhere() {
        ok("/* head */ Scene { // line\n /* in */ width: 8 /* tail */ }");
    }
    #[test] fn string_escapes() {
        let doc = ok(r#"Label "say \"hi\"\n" { }"#);
        assert_eq!(doc.root.content.as_deref(), Some("say \"hi\"\n"));
    }
    #[test] fn bools_and_negatives() {
        let doc = ok("Label { bold: true  y: -120  ratio: 0.75 }");
        assert_eq!(doc.root.prop("bold").and_then(Value::as_bool), Some(true));
        assert_eq!(doc.root.prop("y").and_then(Value::as_number), Some(-120.0));
        assert_eq!(doc.root.prop("ratio").and_then(Value::as_number), Some(0.75));
    }
    #[test] fn spans_are_recorded() {
        let doc = ok("Scene {\n  width: 10\n  Bar { }\n}");
        assert_eq!(doc.root.span, Span { line: 1, col: 1 });
        assert_eq!(doc.root.prop_entry("width").map(|p| p.span), Some(Span { line: 2, col: 3 }));
        assert_eq!(doc.root.children[0].span, Span { line: 3, col: 3 });
    }
    #[test] fn children_by_kind() {
        let doc = ok("Scene { Block { } Label { } Block { } }");
        assert_eq!(doc.root.children_of("Block").count(), 2);
    }
    #[test] fn value_display() {
        assert_eq!(Value::Color([0, 122, 255, 255]).to_string(), "#007aff");
        assert_eq!(Value::Color([0, 0, 0, 128]).to_string(), "#00000080");
        assert_eq!(Value::Str("a".into()).to_string(), "\"a\"");
    }
    #[test] fn err_unclosed_block() {
        let e = err("Scene {\n  width: 1\n");
        assert_eq!((e.line, e.col), (1, 7));
    }
    #[test] fn err_double_colon() {
        let e = err("Scene { width: : 8 }");
        assert_eq!((e.line, e.col), (1, 16));
    }
    #[test] fn err_trailing_root() { err("Scene { } Scene { }"); }
    #[test] fn err_missing_root() { err("   "); }
    #[test] fn err_bad_color() { err("Block { fill: #xyz }"); }
    #[test] fn err_unclosed_string() { err(r#"Label "oops { }"#); }
    #[test] fn display_has_position() {
        assert_eq!(
            err("Scene { 12 }").to_string(),
            "msml parse error at 1:9: unexpected Number(12.0) inside block; expected `key: value` or a node name"
        );
    }
}
