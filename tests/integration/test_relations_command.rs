//! End-to-end runs of the umlgraph binary

use crate::common::TestProject;
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};

const ORDER: &str = r#"
namespace Shop
{
    public class Order
    {
        public class Line { }
        private readonly Line first;
    }
}
"#;

const INVOICE: &str = r#"
namespace Shop
{
    public abstract class Document { }
    public class Invoice : Document
    {
        private Order order = new Order();
    }
}
"#;

fn run(project: &TestProject, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_umlgraph"))
        .current_dir(project.path())
        .env_remove("UMLGRAPH_SEMANTIC")
        .env_remove("UMLGRAPH_OUTPUT__FORMAT")
        .args(args)
        .output()
        .expect("Failed to run umlgraph")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn file_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

#[test]
fn test_relations_plantuml() {
    let project = TestProject::new();
    let order = project.add_file("Order.cs", ORDER);
    let invoice = project.add_file("Invoice.cs", INVOICE);

    let args = ["relations", file_arg(&order), file_arg(&invoice)];
    let output = run(&project, &args);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");

    let diagram = stdout(&output);
    assert!(diagram.starts_with("@startuml\n"));
    assert!(diagram.ends_with("@enduml\n"));
    assert!(diagram.contains("class \"Shop.@Order.Line\"\n"));
    assert!(diagram.contains("abstract class Shop.Document\n"));
    assert!(diagram.contains("Shop.Order --> \"first\" \"Shop.@Order.Line\"\n"));
    assert!(diagram.contains("Shop.Order +-- \"Shop.@Order.Line\"\n"));
    assert!(diagram.contains("Shop.Document <|-- Shop.Invoice\n"));
    assert!(diagram.contains("Shop.Invoice o-> \"order\" Shop.Order\n"));
}

#[test]
fn test_relations_syntax_only() {
    let project = TestProject::new();
    let order = project.add_file("Order.cs", ORDER);

    let output = run(&project, &["relations", "--syntax-only", file_arg(&order)]);
    assert!(output.status.success());

    let diagram = stdout(&output);
    assert!(diagram.contains("Order --> \"first\" Line\n"));
    assert!(diagram.contains("Order +-- Line\n"));
    assert!(!diagram.contains("@Order"));
}

#[test]
fn test_relations_without_definitions() {
    let project = TestProject::new();
    let order = project.add_file("Order.cs", ORDER);

    let args = ["relations", "--no-definitions", file_arg(&order)];
    let output = run(&project, &args);
    assert!(output.status.success());

    let diagram = stdout(&output);
    assert!(!diagram.contains("class "));
    assert!(diagram.contains("Shop.Order +-- \"Shop.@Order.Line\"\n"));
}

#[test]
fn test_relations_json() {
    let project = TestProject::new();
    let invoice = project.add_file("Invoice.cs", INVOICE);

    let output = run(&project, &["relations", "--json", file_arg(&invoice)]);
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output)).expect("Invalid JSON");
    assert_eq!(json["status"], "success");
    assert_eq!(json["exit_code"], 0);

    let relationships = json["data"]["relationships"]
        .as_array()
        .expect("relationships array");
    assert_eq!(relationships.len(), 2);
    assert_eq!(relationships[0]["kind"], "inheritance");
    assert_eq!(relationships[1]["kind"], "aggregation");
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let project = TestProject::new();
    let notes = project.add_file("Notes.txt", "class Note { }");

    let output = run(&project, &["relations", "--json", file_arg(&notes)]);
    assert_eq!(output.status.code(), Some(8));

    let json: Value = serde_json::from_str(&stdout(&output)).expect("Invalid JSON");
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "UNSUPPORTED_FILE_TYPE");
}

#[test]
fn test_missing_file_is_io_error() {
    let project = TestProject::new();
    let missing = project.path().join("Missing.cs");

    let output = run(&project, &["relations", file_arg(&missing)]);
    assert_eq!(output.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_names_command() {
    let project = TestProject::new();
    let order = project.add_file("Order.cs", ORDER);

    let output = run(&project, &["names", file_arg(&order)]);
    assert!(output.status.success());

    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "Shop.Order\tclass Shop.Order",
            "\"Shop.@Order.Line\"\tclass \"Shop.@Order.Line\"",
        ]
    );
}

#[test]
fn test_project_settings_are_applied() {
    let project = TestProject::new();
    project.add_file(
        ".umlgraph/settings.toml",
        "semantic = false\n\n[output]\nformat = \"json\"\ndefinitions = false\n",
    );
    let order = project.add_file("Order.cs", ORDER);

    let output = run(&project, &["relations", file_arg(&order)]);
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output)).expect("Invalid JSON");
    let definitions = json["data"]["definitions"].as_array();
    assert_eq!(definitions.map(Vec::len), Some(0));
    let target = &json["data"]["relationships"][0]["target"];
    assert_eq!(target["identifier"], "Order");
}
