//! Integration tests for the parser using sample programs
//!
//! Each sample under `docs/samples/` is parsed and rendered, and the output
//! is pinned with a snapshot to catch regressions in shape or labels.

use mel::mel::ast::AstNode;
use mel::mel::formats::{serialize_ast_tag, FormatRegistry};
use mel::mel::parsing::parse;
use mel::mel::testing::assert_node;
use std::fs;

/// Helper function to read sample program content
fn read_sample_program(path: &str) -> String {
    fs::read_to_string(path).expect("Failed to read sample program")
}

fn render_sample(path: &str) -> String {
    let source = read_sample_program(path);
    let program = parse(&source).expect("sample should parse");
    program.render_tree().join("\n")
}

#[test]
fn test_000_demo_tree() {
    let tree = render_sample("docs/samples/000-demo.mel");

    insta::assert_snapshot!(tree, @r###"
...
├ Console
│ └ ReadLine
│   └ w
├ Console
│ └ WriteLine
│   └ +
│     ├ 12.0
│     └ 6.0
├ int
│ └ a
├ =
│ ├ a
│ └ 12.0
├ =
│ ├ double
│ │ └ c
│ └ 12.0
├ class
│ ├ Main
│ └ public int main
│   ├ params
│   │ └ int
│   │   └ a
│   └ ...
│     └ =
│       ├ int
│       │ └ c
│       └ 0.0
├ if
│ ├ &&
│ │ ├ >
│ │ │ ├ a
│ │ │ └ 12.0
│ │ └ !=
│ │   ├ b
│ │   └ 10.0
│ └ ...
│   └ return
│     └ 12.0
├ while
│ ├ ==
│ │ ├ a
│ │ └ b
│ └ ...
│   └ if
│     ├ >=
│     │ ├ a
│     │ └ c
│     └ ...
│       ├ =
│       │ ├ int
│       │ │ └ a
│       │ └ 0.0
│       └ return
│         └ c
└ for
  ├ =
  │ ├ int
  │ │ └ a
  │ └ 0.0
  ├ <
  │ ├ a
  │ └ 10.0
  ├ ==
  │ ├ a
  │ └ 12.0
  └ ...
    └ if
      ├ >=
      │ ├ a
      │ └ c
      └ ...
        └ return
          └ c
"###);
}

#[test]
fn test_000_demo_statement_kinds() {
    let program = parse(&read_sample_program("docs/samples/000-demo.mel")).unwrap();
    let kinds: Vec<&str> = program.children().iter().map(|c| c.node_type()).collect();

    assert_eq!(
        kinds,
        vec![
            "ConsoleCall",
            "ConsoleCall",
            "ParamDecl",
            "Assign",
            "Assign",
            "Class",
            "If",
            "While",
            "For",
        ]
    );
}

#[test]
fn test_010_expressions_tree() {
    let tree = render_sample("docs/samples/010-expressions.mel");

    insta::assert_snapshot!(tree, @r###"
...
├ =
│ ├ x
│ └ +
│   ├ +
│   │ ├ 1.0
│   │ └ 2.0
│   └ 3.0
├ =
│ ├ y
│ └ +
│   ├ 1.0
│   └ +
│     ├ 2.0
│     └ 3.0
├ =
│ ├ z
│ └ -
│   ├ +
│   │ ├ a
│   │ └ *
│   │   ├ b
│   │   └ c
│   └ d
├ =
│ ├ w
│ └ +
│   ├ a
│   └ >
│     ├ b
│     └ c
└ =
  ├ v
  └ *
    ├ -4.0
    └ 25.0
"###);
}

#[test]
fn test_020_classes_tag_format() {
    let program = parse(&read_sample_program("docs/samples/020-classes.mel")).unwrap();

    insta::assert_snapshot!(serialize_ast_tag(&program), @r###"
<StmtList>...<children>
  <Class>class<children>
    <Identifier>Shape</Identifier>
    <Method>public double area<children>
      <ParamDeclList>params<children>
        <ParamDecl>double<children>
          <Identifier>w</Identifier>
        </children></ParamDecl>
        <ParamDecl>double<children>
          <Identifier>h</Identifier>
        </children></ParamDecl>
      </children></ParamDeclList>
      <StmtList>...<children>
        <Return>return<children>
          <BinaryOp>*<children>
            <Identifier>w</Identifier>
            <Identifier>h</Identifier>
          </children></BinaryOp>
        </children></Return>
      </children></StmtList>
    </children></Method>
    <Method>private void reset<children>
      <StmtList>...<children>
        <ConsoleCall>Console<children>
          <ConsoleOutput>WriteLine<children>
            <NumberLiteral>0.0</NumberLiteral>
          </children></ConsoleOutput>
        </children></ConsoleCall>
      </children></StmtList>
    </children></Method>
  </children></Class>
</children></StmtList>
"###);
}

#[test]
fn test_020_classes_method_without_params() {
    let program = parse(&read_sample_program("docs/samples/020-classes.mel")).unwrap();

    assert_node(&program).child(0, |class| {
        class
            .node_type("Class")
            .child_count(3)
            .child(1, |area| {
                area.label("public double area").child_labels(&["params", "..."]);
            })
            .child(2, |reset| {
                reset.label("private void reset").child_labels(&["..."]);
            });
    });
}

#[test]
fn test_every_sample_renders_in_every_format() {
    let registry = FormatRegistry::global();
    for path in [
        "docs/samples/000-demo.mel",
        "docs/samples/010-expressions.mel",
        "docs/samples/020-classes.mel",
    ] {
        let program = parse(&read_sample_program(path)).unwrap();
        for format in registry.list_formats() {
            let output = registry
                .serialize(&program, &format)
                .unwrap_or_else(|e| panic!("{path} in {format}: {e}"));
            assert!(!output.is_empty(), "{path} in {format} is empty");
        }
    }
}
