//! Target language descriptors.
//!
//! Each target carries its primitive mapping table and declaration syntax.
//! The declaration walker is shared; per-target differences are capability
//! flags and rendering methods here, not separate walkers.

use querysnip_schema::PrimitiveKind;

/// A client code generation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Kotlin with Reactor (`Mono`/`Flux`) response wrappers.
    Kotlin,
    /// TypeScript with RxJS response wrappers.
    Typescript,
}

impl Target {
    /// Display label for the generator list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kotlin => "Kotlin",
            Self::Typescript => "TypeScript",
        }
    }

    /// Syntax highlighting tag for generated code.
    #[must_use]
    pub const fn language(self) -> &'static str {
        match self {
            Self::Kotlin => "kotlin",
            Self::Typescript => "typescript",
        }
    }

    /// Whether composite types get a named wrapping declaration.
    ///
    /// Kotlin emits `data class` declarations; TypeScript renders composite
    /// types as inline object-literal annotations instead.
    #[must_use]
    pub const fn named_declarations(self) -> bool {
        match self {
            Self::Kotlin => true,
            Self::Typescript => false,
        }
    }

    /// Maps a base primitive kind to the target's scalar type name.
    ///
    /// Total over [`PrimitiveKind`]; schema primitives outside the closed
    /// set never reach this table (see the walker's placeholder path).
    #[must_use]
    pub const fn scalar_type(self, kind: PrimitiveKind) -> &'static str {
        match self {
            Self::Kotlin => match kind {
                PrimitiveKind::String => "String",
                PrimitiveKind::Boolean => "Boolean",
                PrimitiveKind::Decimal => "BigDecimal",
                PrimitiveKind::Instant => "Instant",
                PrimitiveKind::Time => "LocalTime",
                PrimitiveKind::LocalDate => "LocalDate",
                PrimitiveKind::Double => "Double",
                PrimitiveKind::Integer => "Int",
                PrimitiveKind::Any => "Any",
            },
            Self::Typescript => match kind {
                PrimitiveKind::String => "string",
                PrimitiveKind::Boolean => "boolean",
                PrimitiveKind::Decimal => "number",
                PrimitiveKind::Instant => "Date",
                PrimitiveKind::Time => "string",
                PrimitiveKind::LocalDate => "Date",
                PrimitiveKind::Double => "number",
                PrimitiveKind::Integer => "number",
                PrimitiveKind::Any => "any",
            },
        }
    }

    /// Renders the target's natural sequence type over an element token.
    #[must_use]
    pub fn sequence_type(self, element: &str) -> String {
        match self {
            Self::Kotlin => format!("List<{element}>"),
            Self::Typescript => format!("{element}[]"),
        }
    }

    /// Renders one field entry.
    #[must_use]
    pub fn field(self, name: &str, type_token: &str) -> String {
        match self {
            Self::Kotlin => format!("   val {name} : {type_token}"),
            Self::Typescript => format!("'{name}' : {type_token}"),
        }
    }

    /// Renders a composite declaration from its field entries.
    ///
    /// For Kotlin this is a named `data class`; for TypeScript it is the
    /// bare object-literal type, since the target needs no named wrapper.
    #[must_use]
    pub fn declaration(self, type_name: &str, fields: &[String]) -> String {
        match self {
            Self::Kotlin => format!("data class {type_name}(\n{}\n)", fields.join(",\n")),
            Self::Typescript => format!("{{{}}}", fields.join(", ")),
        }
    }
}
