//! Association attributes overriding inferred edges

use crate::common::{edges, relations};
use umlgraph::RelationKind;

#[test]
fn test_constructor_parameter_override() {
    let code = r#"
interface ILogger { }
class Service
{
    public Service(
        [PlantUmlAssociation(Association = "..>", RootLabel = "uses", LeafLabel = "1", Label = "logging")]
        ILogger logger)
    {
    }
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(relationships.len(), 1);

    let edge = relationships.iter().next().unwrap();
    assert_eq!(edge.source().identifier, "Service");
    assert_eq!(edge.target().identifier, "ILogger");
    assert_eq!(edge.kind(), &RelationKind::Custom("..>".to_string()));
    assert_eq!(edge.source_label(), Some("uses"));
    assert_eq!(edge.target_label(), Some("1"));
    assert_eq!(edge.label(), Some("logging"));
}

#[test]
fn test_named_override_on_nullable_collection_parameter() {
    let code = r#"
interface ILogger { }
class Service
{
    public Service(
        [PlantUmlAssociation("..>", Name = "Logger", NodeLabel = "Injection")]
        IEnumerable<ILogger>? logger)
    {
    }
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        edges(&relationships),
        vec![(
            "Service".to_string(),
            RelationKind::Custom("..>".to_string()),
            "Logger".to_string()
        )]
    );

    let edge = relationships.iter().next().unwrap();
    assert_eq!(edge.target().type_arguments, "");
    assert_eq!(edge.label(), Some("Injection"));
    assert_eq!(edge.source_label(), None);
    assert_eq!(edge.target_label(), None);
}

#[test]
fn test_override_replaces_field_association() {
    let code = r#"
class Item { }
class Catalog
{
    [PlantUmlAssociation(Association = "*--", LeafType = typeof(Item), NodeLabel = nameof(Items))]
    public List<Item> Items { get; } = new List<Item>();
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        edges(&relationships),
        vec![(
            "Catalog".to_string(),
            RelationKind::Custom("*--".to_string()),
            "Item".to_string()
        )]
    );
    assert_eq!(relationships.iter().next().unwrap().label(), Some("Items"));
}

#[test]
fn test_explicit_name_wins_over_leaf_type() {
    let code = r#"
class Item { }
class Catalog
{
    [PlantUmlAssociation(Name = "Product", LeafType = typeof(Item))]
    private Item item;
}
"#;

    let relationships = relations(&[code], false);
    let edge = relationships.iter().next().unwrap();
    assert_eq!(edge.target().identifier, "Product");
    assert_eq!(edge.kind(), &RelationKind::Link);
}

#[test]
fn test_positional_association_symbol() {
    let code = r#"
class Wheel { }
class Car
{
    [PlantUmlAssociation("o--")]
    private Wheel wheel;
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        relationships.iter().next().unwrap().kind(),
        &RelationKind::Custom("o--".to_string())
    );
}

#[test]
fn test_several_overrides_on_one_member() {
    let code = r#"
class Part { }
class Spare { }
class Machine
{
    [PlantUmlAssociation(Association = "*--")]
    [PlantUmlAssociation(Association = "..>", LeafType = typeof(Spare))]
    private Part part;
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        edges(&relationships),
        vec![
            (
                "Machine".to_string(),
                RelationKind::Custom("*--".to_string()),
                "Part".to_string()
            ),
            (
                "Machine".to_string(),
                RelationKind::Custom("..>".to_string()),
                "Spare".to_string()
            ),
        ]
    );
}

#[test]
fn test_override_once_per_field_declaration() {
    let code = r#"
class Point { }
class Segment
{
    [PlantUmlAssociation(Association = "*--")]
    private Point start, end;
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(relationships.len(), 1);
}

#[test]
fn test_method_parameter_override() {
    let code = r#"
class Job { }
class Scheduler
{
    public void Run([PlantUmlAssociation(Association = "..>")] Job job) { }
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        edges(&relationships),
        vec![(
            "Scheduler".to_string(),
            RelationKind::Custom("..>".to_string()),
            "Job".to_string()
        )]
    );
}

#[test]
fn test_open_generic_leaf_type() {
    let code = r#"
class Repository<TKey, TEntity> { }
class Service
{
    [PlantUmlAssociation(Association = "..>", LeafType = typeof(Repository<,>))]
    private object repository;
}
"#;

    let syntax_only = relations(&[code], false);
    assert_eq!(
        syntax_only.iter().next().unwrap().target().identifier,
        "\"Repository`2\""
    );

    let resolved = relations(&[code], true);
    assert_eq!(
        resolved.iter().next().unwrap().target().identifier,
        "\"Repository`2\""
    );
}

#[test]
fn test_attribute_suffix_and_namespace_are_ignored() {
    let code = r#"
class Wheel { }
class Car
{
    [Diagrams.PlantUmlAssociationAttribute(Association = "o--")]
    private Wheel wheel;
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(relationships.len(), 1);
    assert_eq!(
        relationships.iter().next().unwrap().kind(),
        &RelationKind::Custom("o--".to_string())
    );
}

#[test]
fn test_unrelated_attributes_keep_inferred_edge() {
    let code = r#"
class Wheel { }
class Car
{
    [Obsolete("use Wheels")]
    private Wheel wheel;
}
"#;

    let relationships = relations(&[code], false);
    assert_eq!(
        relationships.iter().next().unwrap().kind(),
        &RelationKind::Association
    );
}
