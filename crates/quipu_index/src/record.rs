//! Symbol records produced by index builders.
//!
//! A record is everything the expansion engine needs to document one named
//! entity: its canonical name, its docstring, and the shape details for its
//! kind (lambda list for operators, slots for record types).

/// Kind discriminant for records and type-tag lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    Function,
    Macro,
    GenericFunction,
    Method,
    Variable,
    Struct,
    Class,
    Type,
    ForeignFunction,
    ForeignType,
    ForeignStruct,
    ForeignUnion,
    ForeignEnum,
    ForeignBitfield,
    Condition,
}

/// Details shared by every callable-like record (functions, macros, methods,
/// named types with a definition form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorDetails {
    /// Canonical (upper-case) symbol name.
    pub name: String,
    /// Raw docstring text, may contain markup and nested references.
    pub docstring: String,
    /// Parameter list in declaration order, canonical case.
    pub lambda_list: Vec<String>,
}

impl OperatorDetails {
    pub fn new(
        name: impl Into<String>,
        docstring: impl Into<String>,
        lambda_list: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            docstring: docstring.into(),
            lambda_list,
        }
    }
}

/// Details for value bindings. Variables have no lambda list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDetails {
    pub name: String,
    pub docstring: String,
}

impl VariableDetails {
    pub fn new(name: impl Into<String>, docstring: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docstring: docstring.into(),
        }
    }
}

/// One slot (field) of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRecord {
    pub name: String,
    /// Empty for slots the source never documented.
    pub docstring: String,
}

impl SlotRecord {
    pub fn new(name: impl Into<String>, docstring: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docstring: docstring.into(),
        }
    }
}

/// Details for record types (structs, classes, foreign aggregates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDetails {
    pub name: String,
    pub docstring: String,
    /// Slots in definition order.
    pub slots: Vec<SlotRecord>,
}

impl RecordDetails {
    pub fn new(
        name: impl Into<String>,
        docstring: impl Into<String>,
        slots: Vec<SlotRecord>,
    ) -> Self {
        Self {
            name: name.into(),
            docstring: docstring.into(),
            slots,
        }
    }
}

/// One indexed symbol.
///
/// Index producers gain record kinds over time, so consumers must treat this
/// enum as open: match the kinds they understand and degrade politely on the
/// rest. `Condition` already exercises that path today because the type-tag
/// vocabulary has no spelling for it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolRecord {
    Function(OperatorDetails),
    Macro(OperatorDetails),
    GenericFunction(OperatorDetails),
    Method(OperatorDetails),
    Variable(VariableDetails),
    Struct(RecordDetails),
    Class(RecordDetails),
    Type(OperatorDetails),
    ForeignFunction(OperatorDetails),
    ForeignType(OperatorDetails),
    ForeignStruct(RecordDetails),
    ForeignUnion(RecordDetails),
    ForeignEnum(RecordDetails),
    ForeignBitfield(RecordDetails),
    Condition(RecordDetails),
}

impl SymbolRecord {
    /// Kind discriminant, used by the index to filter queries.
    pub fn category(&self) -> SymbolCategory {
        match self {
            SymbolRecord::Function(_) => SymbolCategory::Function,
            SymbolRecord::Macro(_) => SymbolCategory::Macro,
            SymbolRecord::GenericFunction(_) => SymbolCategory::GenericFunction,
            SymbolRecord::Method(_) => SymbolCategory::Method,
            SymbolRecord::Variable(_) => SymbolCategory::Variable,
            SymbolRecord::Struct(_) => SymbolCategory::Struct,
            SymbolRecord::Class(_) => SymbolCategory::Class,
            SymbolRecord::Type(_) => SymbolCategory::Type,
            SymbolRecord::ForeignFunction(_) => SymbolCategory::ForeignFunction,
            SymbolRecord::ForeignType(_) => SymbolCategory::ForeignType,
            SymbolRecord::ForeignStruct(_) => SymbolCategory::ForeignStruct,
            SymbolRecord::ForeignUnion(_) => SymbolCategory::ForeignUnion,
            SymbolRecord::ForeignEnum(_) => SymbolCategory::ForeignEnum,
            SymbolRecord::ForeignBitfield(_) => SymbolCategory::ForeignBitfield,
            SymbolRecord::Condition(_) => SymbolCategory::Condition,
        }
    }

    /// Canonical symbol name.
    pub fn name(&self) -> &str {
        match self {
            SymbolRecord::Function(op)
            | SymbolRecord::Macro(op)
            | SymbolRecord::GenericFunction(op)
            | SymbolRecord::Method(op)
            | SymbolRecord::Type(op)
            | SymbolRecord::ForeignFunction(op)
            | SymbolRecord::ForeignType(op) => &op.name,
            SymbolRecord::Variable(var) => &var.name,
            SymbolRecord::Struct(rec)
            | SymbolRecord::Class(rec)
            | SymbolRecord::ForeignStruct(rec)
            | SymbolRecord::ForeignUnion(rec)
            | SymbolRecord::ForeignEnum(rec)
            | SymbolRecord::ForeignBitfield(rec)
            | SymbolRecord::Condition(rec) => &rec.name,
        }
    }

    /// Raw docstring text.
    pub fn docstring(&self) -> &str {
        match self {
            SymbolRecord::Function(op)
            | SymbolRecord::Macro(op)
            | SymbolRecord::GenericFunction(op)
            | SymbolRecord::Method(op)
            | SymbolRecord::Type(op)
            | SymbolRecord::ForeignFunction(op)
            | SymbolRecord::ForeignType(op) => &op.docstring,
            SymbolRecord::Variable(var) => &var.docstring,
            SymbolRecord::Struct(rec)
            | SymbolRecord::Class(rec)
            | SymbolRecord::ForeignStruct(rec)
            | SymbolRecord::ForeignUnion(rec)
            | SymbolRecord::ForeignEnum(rec)
            | SymbolRecord::ForeignBitfield(rec)
            | SymbolRecord::Condition(rec) => &rec.docstring,
        }
    }

    /// Human-readable kind spelling, used in degradation messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SymbolRecord::Function(_) => "function",
            SymbolRecord::Macro(_) => "macro",
            SymbolRecord::GenericFunction(_) => "generic-function",
            SymbolRecord::Method(_) => "method",
            SymbolRecord::Variable(_) => "variable",
            SymbolRecord::Struct(_) => "struct",
            SymbolRecord::Class(_) => "class",
            SymbolRecord::Type(_) => "type",
            SymbolRecord::ForeignFunction(_) => "cfunction",
            SymbolRecord::ForeignType(_) => "ctype",
            SymbolRecord::ForeignStruct(_) => "cstruct",
            SymbolRecord::ForeignUnion(_) => "cunion",
            SymbolRecord::ForeignEnum(_) => "cenum",
            SymbolRecord::ForeignBitfield(_) => "cbitfield",
            SymbolRecord::Condition(_) => "condition",
        }
    }
}
