//! Relationship extraction over whole files

use crate::common::{edges, relations};
use umlgraph::RelationKind;

#[test]
fn test_nested_type_with_field() {
    let code = r#"
class Outer
{
    class Inner { }
    private readonly Inner item;
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(relationships.len(), 2, "one nesting edge, one association");

    let nesting = relationships
        .iter()
        .find(|r| r.kind() == &RelationKind::Nesting)
        .unwrap();
    assert_eq!(nesting.source().identifier, "Outer");
    assert_eq!(nesting.target().identifier, "Inner");

    let association = relationships
        .iter()
        .find(|r| r.kind() == &RelationKind::Association)
        .unwrap();
    assert_eq!(association.source().identifier, "Inner");
    assert_eq!(association.target().identifier, "Outer");
    assert_eq!(association.source_label(), Some("item"));
    assert_eq!(association.target_label(), None);
    assert_eq!(association.label(), None);
}

#[test]
fn test_nested_type_with_field_resolved() {
    let code = r#"
class Outer
{
    class Inner { }
    private readonly Inner item;
}
"#;

    let relationships = relations(&[code], true);
    assert_eq!(
        edges(&relationships),
        vec![
            (
                "\"@Outer.Inner\"".to_string(),
                RelationKind::Association,
                "Outer".to_string()
            ),
            (
                "Outer".to_string(),
                RelationKind::Nesting,
                "\"@Outer.Inner\"".to_string()
            ),
        ]
    );
}

#[test]
fn test_generic_type_inherits() {
    let code = "class Container { } class Box<T> : Container { }";

    let relationships = relations(&[code], false);
    assert_eq!(relationships.len(), 1);

    let inheritance = relationships.iter().next().unwrap();
    assert_eq!(inheritance.kind(), &RelationKind::Inheritance);
    assert_eq!(inheritance.source().identifier, "Container");
    assert_eq!(inheritance.target().identifier, "\"Box`1\"");
    assert_eq!(inheritance.target().type_arguments, "<T>");
    assert_eq!(inheritance.label(), None);
}

#[test]
fn test_one_edge_per_base() {
    let code = r#"
interface IShape { }
abstract class Shape { }
class Circle : Shape, IShape { }
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        edges(&relationships),
        vec![
            (
                "Shape".to_string(),
                RelationKind::Inheritance,
                "Circle".to_string()
            ),
            (
                "IShape".to_string(),
                RelationKind::Inheritance,
                "Circle".to_string()
            ),
        ]
    );
}

#[test]
fn test_initialized_field_is_aggregation() {
    let code = r#"
class Item { }
class Cart
{
    private Item first = new Item();
    private Item second;
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        edges(&relationships),
        vec![
            (
                "Item".to_string(),
                RelationKind::Aggregation,
                "Cart".to_string()
            ),
            (
                "Item".to_string(),
                RelationKind::Association,
                "Cart".to_string()
            ),
        ]
    );
    let labels: Vec<_> = relationships.iter().map(|r| r.source_label()).collect();
    assert_eq!(labels, vec![Some("first"), Some("second")]);
    assert!(relationships.iter().all(|r| r.target_label().is_none()));
}

#[test]
fn test_property_initializer_is_aggregation() {
    let code = r#"
class Engine { }
class Car
{
    public Engine Main { get; set; } = new Engine();
    public Engine Spare { get; set; }
}
"#;

    let relationships = relations(&[code], false);
    let kinds: Vec<_> = relationships.iter().map(|r| r.kind().clone()).collect();
    assert_eq!(
        kinds,
        vec![RelationKind::Aggregation, RelationKind::Association]
    );
    let labels: Vec<_> = relationships.iter().map(|r| r.source_label()).collect();
    assert_eq!(labels, vec![Some("Main"), Some("Spare")]);
}

#[test]
fn test_nullable_property_uses_inner_type() {
    let code = r#"
class Address { }
class Customer
{
    public Address? Billing { get; set; }
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        edges(&relationships),
        vec![(
            "Address".to_string(),
            RelationKind::Association,
            "Customer".to_string()
        )]
    );
}

#[test]
fn test_primitive_members_produce_nothing() {
    let code = r#"
class Counter
{
    private int count;
    public string Name { get; set; }
    private bool enabled = true;
}
"#;

    assert!(relations(&[code], false).is_empty());
}

#[test]
fn test_multiple_declarators_each_get_an_edge() {
    let code = r#"
class Point { }
class Segment
{
    private Point start, end;
}
"#;

    let relationships = relations(&[code], false);
    let labels: Vec<_> = relationships.iter().map(|r| r.source_label()).collect();
    assert_eq!(labels, vec![Some("start"), Some("end")]);
}

#[test]
fn test_generic_member_label_carries_arguments() {
    let code = r#"
class Order { }
class Customer
{
    private List<Order> orders;
}
"#;

    let relationships = relations(&[code], false);
    let edge = relationships.iter().next().unwrap();
    assert_eq!(edge.source().identifier, "\"List`1\"");
    assert_eq!(edge.source().type_arguments, "<Order>");
    assert_eq!(edge.source_label(), Some("orders<Order>"));
}

#[test]
fn test_record_parameters_are_members() {
    let code = r#"
class Money { }
record Price(Money Amount, int Quantity);
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        edges(&relationships),
        vec![(
            "Money".to_string(),
            RelationKind::Association,
            "Price".to_string()
        )]
    );
    assert_eq!(
        relationships.iter().next().unwrap().source_label(),
        Some("Amount")
    );
}

#[test]
fn test_record_parameter_default_is_aggregation() {
    let code = r#"
class Money { }
record Price(Money Amount = null);
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        edges(&relationships),
        vec![(
            "Money".to_string(),
            RelationKind::Aggregation,
            "Price".to_string()
        )]
    );
}

#[test]
fn test_method_parameters_need_an_attribute() {
    let code = r#"
class Job { }
class Scheduler
{
    public Scheduler(Job first) { }
    public void Run(Job job) { }
}
"#;

    assert!(relations(&[code], false).is_empty());
}

#[test]
fn test_ignore_attribute_suppresses_association() {
    let code = r#"
class Cache { }
class Service
{
    [PlantUmlIgnoreAssociation]
    private Cache cache;

    private Cache fallback;
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(relationships.len(), 1);
    assert_eq!(
        relationships.iter().next().unwrap().source_label(),
        Some("fallback")
    );
}

#[test]
fn test_qualified_member_type_keeps_written_qualification() {
    let code = r#"
class Service
{
    private Shop.Order order;
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        edges(&relationships),
        vec![(
            "Shop.Order".to_string(),
            RelationKind::Association,
            "Service".to_string()
        )]
    );
}

#[test]
fn test_files_merge_in_order() {
    let first = "class A { } class B : A { }";
    let second = "class C { } class D : C { }";

    let relationships = relations(&[first, second], false);
    let targets: Vec<_> = relationships
        .iter()
        .map(|r| r.target().identifier.clone())
        .collect();
    assert_eq!(targets, vec!["B", "D"]);
}
