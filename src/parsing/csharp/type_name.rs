//! Type name text for C# syntax
//!
//! Builds [`TypeNameText`] for the three shapes a type name can take:
//!
//! - [`NameSite::Simple`]: a reference such as `Item` or `List<Item>`
//! - [`NameSite::OpenGeneric`]: a generic reference where only its shape matters
//! - [`NameSite::Declaration`]: a type being declared
//!
//! Each shape asks the semantic model first, then falls back to syntax.
//! Without a model the same rules run on source text alone.

use crate::parsing::csharp::generic_types::{argument_list, arity_suffixed, placeholder_parameters};
use crate::parsing::csharp::qualified::qualified_type_name;
use crate::parsing::csharp::resolution::{
    ESCAPE_MARKER, SemanticModel, resolve_safe_name, safe_type_parameters,
};
use crate::parsing::csharp::syntax::{GenericName, NameSyntax, TypeDeclaration};
use crate::relationship::TypeNameText;

/// Syntactic shape a type name is built from.
#[derive(Debug, Clone, Copy)]
pub enum NameSite<'tree> {
    Simple(NameSyntax<'tree>),
    OpenGeneric(GenericName<'tree>),
    Declaration(TypeDeclaration<'tree>),
}

impl TypeNameText {
    /// Build the name text for any site.
    pub fn from_site(site: NameSite, source: &str, model: Option<&dyn SemanticModel>) -> Self {
        match site {
            NameSite::Simple(name) => Self::from_name(name, source, model),
            NameSite::OpenGeneric(generic) => Self::from_open_generic(generic, source, model),
            NameSite::Declaration(decl) => Self::from_declaration(&decl, source, model),
        }
    }

    /// A referenced name. Generic references keep their written arguments.
    pub fn from_name(name: NameSyntax, source: &str, model: Option<&dyn SemanticModel>) -> Self {
        let identifier = resolve_safe_name(name.node(), source, model)
            .unwrap_or_else(|| qualified_type_name(name.node(), name.identifier(source), source));

        match name {
            NameSyntax::Generic(generic) => Self::new(
                arity_suffixed(&identifier, generic.arity()),
                argument_list(&generic.argument_texts(source)),
            ),
            NameSyntax::Identifier(_) => Self::new(quote_if_needed(identifier), String::new()),
        }
    }

    /// A generic reference by shape: arguments are the resolved type's own
    /// parameter names, or placeholders.
    pub fn from_open_generic(
        generic: GenericName,
        source: &str,
        model: Option<&dyn SemanticModel>,
    ) -> Self {
        let identifier = resolve_safe_name(generic.node(), source, model).unwrap_or_else(|| {
            qualified_type_name(generic.node(), generic.identifier(source), source)
        });
        let arity = generic.arity();
        let type_arguments = safe_type_parameters(generic.node(), source, model)
            .unwrap_or_else(|| placeholder_parameters(arity));

        Self::new(arity_suffixed(&identifier, arity), type_arguments)
    }

    /// A type being declared. Generic declarations keep their parameter list
    /// as written.
    pub fn from_declaration(
        decl: &TypeDeclaration,
        source: &str,
        model: Option<&dyn SemanticModel>,
    ) -> Self {
        let identifier = resolve_safe_name(decl.node(), source, model)
            .unwrap_or_else(|| qualified_type_name(decl.node(), decl.name(source), source));

        let parameters = decl.type_parameter_texts(source);
        if parameters.is_empty() {
            Self::new(quote_if_needed(identifier), String::new())
        } else {
            Self::new(
                arity_suffixed(&identifier, parameters.len()),
                argument_list(&parameters),
            )
        }
    }
}

/// Quote identifiers that diagram syntax would misread: the escape marker, or
/// argument brackets left in a qualifier such as `A.B<int>.C`.
fn quote_if_needed(identifier: String) -> String {
    if identifier.contains(ESCAPE_MARKER) || identifier.contains('<') {
        format!("\"{identifier}\"")
    } else {
        identifier
    }
}
