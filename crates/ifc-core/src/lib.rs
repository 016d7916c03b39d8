#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Format vocabulary for module interface files.
//!
//! This crate contains:
//! - Index newtypes (tagged and plain) and [`Sequence`]
//! - Sort enumerations for every tagged category
//! - Fixed-size record layouts and their decoders ([`Record`])
//!
//! Loading, validation and rendering live in `ifc-lib`.

pub mod index;
pub mod records;
pub mod sorts;


pub use index::{
    ChartIndex, DeclIndex, ExprIndex, IndexError, MAX_OFFSET, NameIndex, PartitionIndex,
    ScopeIndex, Sequence, TAG_BITS, TextOffset, TypeIndex,
};
pub use records::{
    AliasDeclaration, DeclReference, Declaration, DesignatedType, EnumerationDeclaration,
    ExpansionType, ForallType, FunctionDeclaration, FunctionType, FundamentalType,
    LvalueReference, ModuleReference, NamedDeclExpression, OperatorFunctionName,
    ParameterDeclaration, QualifiedType, Qualifiers, Record, RvalueReference, ScopeDeclaration,
    ScopeDescriptor, SyntacticType, TemplateDeclaration, TemplateId, TupleExpression, TupleType,
    TypeExpression, UnilevelChart, UsingDeclaration, VariableDeclaration,
};
pub use sorts::{
    ChartSort, DeclSort, ExprSort, NameSort, ParameterSort, TypeBasis, TypePrecision, TypeSign,
    TypeSort,
};
