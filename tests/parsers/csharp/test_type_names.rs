//! Declared type names and definition lines

use crate::common::{declared_names, definitions, relations};
use umlgraph::render::render_diagram;

#[test]
fn test_declared_names_syntax_only() {
    let code = r#"
namespace Shop
{
    class Order
    {
        class Line { }
    }
    class Cache<TKey, TValue> { }
    delegate void Changed(Order order);
}
"#;

    let names: Vec<String> = declared_names(&[code], false)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        names,
        vec!["Order", "Line", "\"Cache`2\"<TKey,TValue>", "Changed"]
    );
}

#[test]
fn test_declared_names_resolved() {
    let code = r#"
namespace Shop
{
    class Order
    {
        class Line { }
    }
    class Cache<TKey, TValue> { }
}
"#;

    let names: Vec<String> = declared_names(&[code], true)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        names,
        vec![
            "Shop.Order",
            "\"Shop.@Order.Line\"",
            "\"Shop.Cache`2\"<TKey,TValue>",
        ]
    );
}

#[test]
fn test_definitions_across_files() {
    let shapes = r#"
namespace Geometry
{
    public abstract class Shape { }
    public interface IScalable { }
}
"#;
    let figures = r#"
namespace Geometry
{
    public sealed class Square : Shape, IScalable { }
    public readonly record struct Corner(int X, int Y);
    public class Grid<TCell> { }
}
"#;

    assert_eq!(
        definitions(&[shapes, figures], true),
        vec![
            "abstract class Geometry.Shape",
            "interface Geometry.IScalable",
            "class Geometry.Square",
            "struct Geometry.Corner <<record>>",
            "class \"Geometry.Grid`1\"<TCell>",
        ]
    );
}

#[test]
fn test_definitions_without_model_use_placeholders() {
    let code = r#"
public abstract class Shape { }
public class Grid<TCell> { }
public class Table<TRow, TColumn, TCell> { }
"#;

    assert_eq!(
        definitions(&[code], false),
        vec![
            "class Shape",
            "class \"Grid`1\"<T>",
            "class \"Table`3\"<T1,T2,T3>",
        ]
    );
}

#[test]
fn test_no_definition_has_trailing_whitespace() {
    let code = r#"
namespace N
{
    public abstract class A { }
    public record B(int X);
    public class C<T> { }
    public enum D { One }
}
"#;

    for semantic in [false, true] {
        for line in definitions(&[code], semantic) {
            assert_eq!(line, line.trim_end(), "trailing whitespace in {line:?}");
        }
    }
}

#[test]
fn test_rendered_diagram() {
    let code = r#"
class Outer
{
    class Inner { }
    private readonly Inner item;
}
class Container { }
class Box<T> : Container { }
"#;

    let lines = definitions(&[code], false);
    let relationships = relations(&[code], false);
    let diagram = render_diagram(&lines, &relationships);

    assert_eq!(
        diagram,
        "@startuml\n\
         class Outer\n\
         class Inner\n\
         class Container\n\
         class \"Box`1\"<T>\n\
         Outer --> \"item\" Inner\n\
         Outer +-- Inner\n\
         Container <|-- \"Box`1\"\n\
         @enduml\n"
    );
}
