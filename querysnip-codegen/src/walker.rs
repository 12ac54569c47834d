//! Recursive type-to-declaration walker.
//!
//! Walks a resolved type descriptor and produces the declaration fragments
//! a generated example needs, plus a reference token for the type itself.
//! Nested composite declarations are emitted before their containers.

use crate::error::CodegenError;
use crate::target::Target;
use querysnip_schema::{PrimitiveKind, Schema, Type, TypeCategory, resolve_type};
use std::collections::HashSet;

/// Result of walking a type: supporting declarations plus the token that
/// refers to the type at a use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedType {
    /// Declaration fragments, nested types before their containers.
    /// Empty for targets that render composites inline.
    pub declarations: Vec<String>,
    /// Type token usable in a field or response type position.
    pub token: String,
}

/// Walker over a schema type graph for one target language.
pub struct DeclarationWalker<'a> {
    target: Target,
    schema: &'a Schema,
    anonymous_types: &'a [Type],
}

/// Mutable traversal state.
struct WalkState {
    declarations: Vec<String>,
    /// Fully-qualified names currently on the recursion path. A revisit
    /// breaks the cycle with a by-name forward reference.
    path: Vec<String>,
    /// Names already declared, so shared types are emitted once.
    emitted: HashSet<String>,
}

impl<'a> DeclarationWalker<'a> {
    /// Creates a walker for the given target over a schema and anonymous
    /// type registry.
    #[must_use]
    pub fn new(target: Target, schema: &'a Schema, anonymous_types: &'a [Type]) -> Self {
        Self {
            target,
            schema,
            anonymous_types,
        }
    }

    /// Walks a type, producing its declarations and reference token.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if an attribute's type name does not
    /// resolve against the schema or anonymous registry.
    pub fn reference(&self, ty: &Type) -> Result<WalkedType, CodegenError> {
        let mut state = WalkState {
            declarations: Vec::new(),
            path: Vec::new(),
            emitted: HashSet::new(),
        };
        let token = self.type_token(ty, &mut state)?;
        Ok(WalkedType {
            declarations: state.declarations,
            token,
        })
    }

    fn type_token(&self, ty: &Type, state: &mut WalkState) -> Result<String, CodegenError> {
        match ty.category() {
            TypeCategory::Scalar => Ok(self.scalar_token(ty)),
            TypeCategory::Collection => {
                let element = self.element_type(ty)?;
                let inner = self.type_token(&element, state)?;
                Ok(self.target.sequence_type(&inner))
            }
            TypeCategory::Composite => {
                if state.path.contains(&ty.name.fully_qualified_name) {
                    // Cycle: refer to the in-progress type by name instead
                    // of recursing.
                    return Ok(ty.name.short_display_name.clone());
                }
                if self.target.named_declarations() {
                    if !state.emitted.contains(&ty.name.fully_qualified_name) {
                        let declaration = self.fields_of(ty, state, |target, fields| {
                            target.declaration(&ty.name.short_display_name, fields)
                        })?;
                        state.declarations.push(declaration);
                        state.emitted.insert(ty.name.fully_qualified_name.clone());
                    }
                    Ok(ty.name.short_display_name.clone())
                } else {
                    self.fields_of(ty, state, |target, fields| {
                        target.declaration(&ty.name.short_display_name, fields)
                    })
                }
            }
        }
    }

    /// Resolves and renders a composite's fields in declaration order,
    /// then hands them to `render`. Nested declarations land in `state`
    /// before the rendered result is used.
    fn fields_of(
        &self,
        ty: &Type,
        state: &mut WalkState,
        render: impl FnOnce(Target, &[String]) -> String,
    ) -> Result<String, CodegenError> {
        state.path.push(ty.name.fully_qualified_name.clone());
        let mut fields = Vec::with_capacity(ty.attributes.len());
        for attribute in &ty.attributes {
            let resolved = resolve_type(self.schema, &attribute.type_name, self.anonymous_types)?;
            let token = self.type_token(&resolved, state)?;
            fields.push(self.target.field(&attribute.name, &token));
        }
        state.path.pop();
        Ok(render(self.target, &fields))
    }

    /// Member type of a collection descriptor.
    fn element_type(&self, ty: &Type) -> Result<Type, CodegenError> {
        if let Some(member) = &ty.collection_type {
            return Ok((**member).clone());
        }
        if let Some(parameter) = ty.name.parameters.first() {
            return Ok(resolve_type(
                self.schema,
                &parameter.fully_qualified_name,
                self.anonymous_types,
            )?);
        }
        tracing::warn!(
            type_name = %ty.name.fully_qualified_name,
            "collection type has no member type, falling back to Any"
        );
        Ok(Type::scalar("lang.taxi.Any", "lang.taxi.Any"))
    }

    /// Maps a scalar through the target's primitive table.
    ///
    /// An unmapped primitive is a diagnostic, not a failure: the walker
    /// proceeds with the primitive's short name as a placeholder token.
    fn scalar_token(&self, ty: &Type) -> String {
        let Some(base) = &ty.base_primitive_type_name else {
            tracing::warn!(
                type_name = %ty.name.fully_qualified_name,
                target = self.target.label(),
                "scalar type has no base primitive, using its own name"
            );
            return ty.name.short_display_name.clone();
        };
        match PrimitiveKind::from_name(&base.fully_qualified_name) {
            Some(kind) => self.target.scalar_type(kind).to_string(),
            None => {
                tracing::warn!(
                    primitive = %base.fully_qualified_name,
                    target = self.target.label(),
                    "no mapping for primitive type, using placeholder"
                );
                base.short_display_name.clone()
            }
        }
    }
}
