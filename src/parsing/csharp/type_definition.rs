//! Type definition lines
//!
//! The header a diagram prints for a declared type:
//!
//! ```text
//! abstract class Shop.Shape
//! class "Shop.Box`1"<T>
//! class Shop.Point <<record>>
//! ```
//!
//! Kind, `abstract` and the record stereotype come from the semantic model.
//! Without an answer the line degrades to `class`, non-abstract, non-record,
//! with placeholder parameters derived from the arity suffix.

use crate::parsing::csharp::generic_types::{parse_arity, placeholder_parameters};
use crate::parsing::csharp::resolution::{
    SemanticModel, TypeKind, TypeSymbol, de_escape, resolve_safe_name,
};
use crate::parsing::csharp::syntax::TypeDeclaration;
use crate::relationship::TypeNameText;

/// Definition line for a declaration.
pub fn type_definition_text(
    decl: &TypeDeclaration,
    source: &str,
    model: Option<&dyn SemanticModel>,
) -> String {
    let name = TypeNameText::from_declaration(decl, source, model);

    let Some(model) = model else {
        return syntax_only_definition(&name.identifier);
    };
    if resolve_safe_name(decl.node(), source, Some(model)).is_none() {
        return syntax_only_definition(&name.identifier);
    }

    match model.type_by_metadata_name(&de_escape(&name.identifier)) {
        Some(symbol) => rich_definition(&symbol, &name.identifier),
        None => {
            tracing::debug!("no named type for '{}'", name.identifier);
            syntax_only_definition(&name.identifier)
        }
    }
}

fn rich_definition(symbol: &TypeSymbol, identifier: &str) -> String {
    let abstract_keyword = if symbol.kind == TypeKind::Class && symbol.is_abstract {
        "abstract "
    } else {
        ""
    };
    let type_parameters = if symbol.type_parameters.is_empty() {
        String::new()
    } else {
        format!("<{}>", symbol.type_parameters.join(","))
    };
    let record = if symbol.is_record { " <<record>>" } else { "" };

    format!(
        "{abstract_keyword}{} {identifier}{type_parameters}{record}",
        symbol.kind.keyword()
    )
}

/// `class X`, or `class "X`N"<T..>` when the identifier encodes an arity.
pub fn syntax_only_definition(identifier: &str) -> String {
    match parse_arity(identifier) {
        Some(arity) => format!("class {identifier}{}", placeholder_parameters(arity)),
        None => format!("class {identifier}"),
    }
}
