mod common;
use common::*;

// Self parameters
#[test]
fn test_shorthand_self() {
    assert_matches(
        RuleName::ShorthandSelf,
        &["self", "mut self", "&self", "&mut self", "&'a self", "& 'a mut self"],
    );
    assert_no_match(RuleName::ShorthandSelf, &["self: Self", "&", "mut"]);
}

#[test]
fn test_typed_self() {
    assert_matches(
        RuleName::TypedSelf,
        &["self: Self", "self : Self", "self:Self", "mut self: Box<Self>"],
    );
    assert_no_match(RuleName::TypedSelf, &["self", "&self: Self"]);
}

#[test]
fn test_self_param() {
    assert_matches(
        RuleName::SelfParam,
        &[
            "self",
            "mut self",
            "&self",
            "&mut self",
            "&'a self",
            "self: Self",
            "mut self : Rc<Self>",
            "#[test] self",
            "#[test] &'a mut self",
            "#[test] self: Self",
        ],
    );
    assert_no_match(RuleName::SelfParam, &["self:", "#[test]", "Self"]);
}

// Constants
#[test]
fn test_constant_items() {
    assert_matches(
        RuleName::ConstantItem,
        &[
            "const BITS: [u32; 2] = [BIT1, BIT2];",
            "const MAX: Self;",
            "const NAME: &str = \"name\";",
            "const DEFAULT: Option<Vec<u8>> = None;",
            "const _: () = assert!(true);",
        ],
    );
    assert_no_match(
        RuleName::ConstantItem,
        &["const BITS: [u32; 2] = [BIT1, BIT2]", "const : u8 = 1;"],
    );
}

// Enumerations
#[test]
fn test_enum_items() {
    assert_matches(
        RuleName::EnumItem,
        &[
            "Dog",
            "Cat(u8)",
            "Bird { wings: u8, name: String }",
            "FreeCollector = 0",
            "FreeCollectorForPair(foo) = 42",
            "#[default] Unit",
            "/// Documented.\nDocumented",
        ],
    );
    assert_no_match(RuleName::EnumItem, &["Dog(", "= 1", "Dog Cat"]);
}

#[test]
fn test_enum_item_attributes_stack_or_concatenate() {
    let stacked = "#[serde(rename = \"lowercase\")]\n#[allow(unused)]\nDog";
    let concatenated = "#[serde(rename = \"lowercase\")]#[allow(unused)] Dog";
    assert!(matches(RuleName::EnumItem, stacked));
    assert!(matches(RuleName::EnumItem, concatenated));

    let stacked_tree = snapshot_match(RuleName::EnumItem, stacked);
    let concatenated_tree = snapshot_match(RuleName::EnumItem, concatenated);
    let strip = |tree: &str| -> Vec<String> {
        tree.lines()
            .map(|line| line.split('@').next().unwrap_or_default().to_string())
            .collect()
    };
    assert_eq!(strip(&stacked_tree), strip(&concatenated_tree));
}

#[test]
fn test_enumerations() {
    assert_matches(
        RuleName::Enumeration,
        &[
            "enum Empty {}",
            "enum Animal { Dog, Cat(u8), }",
            "enum Gc { FreeCollector = 0, FreeCollectorForPair(foo) = 42 }",
            "enum Cow<'a, B: ?Sized + 'a> where B: ToOwned { Borrowed(&'a B), Owned(<B as ToOwned>::Owned) }",
            "enum Buffer<T = u8, const N: usize = 64> { Inline([T; N]), Heap(Vec<T>) }",
        ],
    );
    assert_no_match(
        RuleName::Enumeration,
        &["enum Empty", "enum E { A B }", "enum E { A,, B }"],
    );
}

// Structs
#[test]
fn test_structs() {
    assert_matches(
        RuleName::Struct,
        &[
            "struct Unit;",
            "struct Pair(u8, u8);",
            "struct Point {x:i32, y: i32}",
            "struct Point { x: i32, y: i32, }",
            "struct Ref<'a> { inner: &'a str }",
            "struct Set<T: Eq + Hash> { items: HashSet<T> }",
            "struct Timer<const DUR: u32 = 1> { elapsed: u32 }",
            "struct Tagged { #[serde(default)] pub(crate) tag: Option<String> }",
            "struct Wrapper<T>(pub T) where T: Clone;",
        ],
    );
    assert_matches(RuleName::StructStruct, &["struct Empty {}"]);
    assert_matches(RuleName::TupleStruct, &["struct Empty();"]);
    assert_no_match(
        RuleName::Struct,
        &["struct Point {x:i32, y: i32", "struct Pair(u8, u8)", "struct {}"],
    );
}

#[test]
fn test_functions_and_traits() {
    assert_matches(
        RuleName::Item,
        &[
            "pub fn new(x: i32, y: i32) -> Self { Self { x, y } }",
            "fn area(&self) -> f64 { self.0 * self.1 }",
            "pub async unsafe fn run<'a>(&'a mut self) {}",
            "trait Shape { fn area(&self) -> f64; fn name(&self) -> &str { \"shape\" } }",
            "impl<T> Shape for Square<T> where T: Into<f64> { fn area(&self) -> f64 { 0.0 } }",
            "type Result<T> = std::result::Result<T, Error>;",
            "extern \"C\" { fn puts(s: *const u8) -> i32; }",
            "mod nested { pub mod deeper {} }",
            "use crate::{a::*, b::{self, C}};",
            "pub(super) static NAME: &str = \"x\";",
        ],
    );
}

#[test]
fn test_function_tree() {
    insta::assert_snapshot!(snapshot_match(RuleName::Function, "fn f(&self) {}"), @r###"
    Function@0..14
      KwFn@0..2 "fn"
      Identifier@3..4
        Ident@3..4 "f"
      LParen@4..5 "("
      FunctionParameters@5..10
        SelfParam@5..10
          ShorthandSelf@5..10
            Ampersand@5..6 "&"
            KwSelfValue@6..10 "self"
      RParen@10..11 ")"
      BlockExpression@12..14
        LBrace@12..13 "{"
        RBrace@13..14 "}"
    "###);
}
