//! Closed views over tagged indices.
//!
//! Each resolver turns a tagged index into the record it addresses. Sorts
//! this reader has no partition for, and tags no sort enum knows, resolve to
//! `Unsupported(tag)`. Sort matches are exhaustive so a new sort has to be
//! placed deliberately.

use ifc_core::{
    AliasDeclaration, ChartIndex, ChartSort, DeclIndex, DeclReference, DeclSort,
    DesignatedType, EnumerationDeclaration, ExpansionType, ExprIndex, ExprSort, ForallType,
    FunctionDeclaration, FunctionType, FundamentalType, LvalueReference, NameIndex, NameSort,
    NamedDeclExpression, OperatorFunctionName, ParameterDeclaration, QualifiedType,
    RvalueReference, ScopeDeclaration, SyntacticType, TemplateDeclaration, TemplateId,
    TextOffset, TupleExpression, TupleType, TypeExpression, TypeIndex, TypeSort, UnilevelChart,
    UsingDeclaration, VariableDeclaration,
};

use super::{File, FileError};

/// A resolved declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decl<'a> {
    VendorExtension,
    Variable(&'a VariableDeclaration),
    Scope(&'a ScopeDeclaration),
    Enumeration(&'a EnumerationDeclaration),
    Alias(&'a AliasDeclaration),
    Template(&'a TemplateDeclaration),
    Function(&'a FunctionDeclaration),
    UsingDeclaration(&'a UsingDeclaration),
    Parameter(&'a ParameterDeclaration),
    Reference(&'a DeclReference),
    Unsupported(u8),
}

/// A resolved type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Type<'a> {
    Fundamental(&'a FundamentalType),
    Designated(&'a DesignatedType),
    Syntactic(&'a SyntacticType),
    Expansion(&'a ExpansionType),
    LvalueReference(&'a LvalueReference),
    RvalueReference(&'a RvalueReference),
    Function(&'a FunctionType),
    Qualified(&'a QualifiedType),
    Tuple(&'a TupleType),
    Forall(&'a ForallType),
    Unsupported(u8),
}

/// A resolved expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expr<'a> {
    Type(&'a TypeExpression),
    NamedDecl(&'a NamedDeclExpression),
    Tuple(&'a TupleExpression),
    TemplateId(&'a TemplateId),
    Unsupported(u8),
}

/// A resolved template parameter chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chart<'a> {
    None,
    Unilevel(&'a UnilevelChart),
    Multilevel,
    Unsupported(u8),
}

/// A resolved name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Name<'a> {
    Identifier(&'a str),
    Operator(&'a OperatorFunctionName),
    Unsupported(u8),
}

impl File {
    pub fn decl(&self, index: DeclIndex) -> Result<Decl<'_>, FileError> {
        let Some(sort) = index.sort() else {
            return Ok(Decl::Unsupported(index.tag()));
        };
        Ok(match sort {
            DeclSort::VendorExtension => Decl::VendorExtension,
            DeclSort::Variable => Decl::Variable(self.variables().at(index)?),
            DeclSort::Scope => Decl::Scope(self.scope_declarations().at(index)?),
            DeclSort::Enumeration => Decl::Enumeration(self.enumerations().at(index)?),
            DeclSort::Alias => Decl::Alias(self.alias_declarations().at(index)?),
            DeclSort::Template => Decl::Template(self.template_declarations().at(index)?),
            DeclSort::Function => Decl::Function(self.functions().at(index)?),
            DeclSort::UsingDeclaration => {
                Decl::UsingDeclaration(self.using_declarations().at(index)?)
            }
            DeclSort::Parameter => Decl::Parameter(self.parameters().at(index)?),
            DeclSort::Reference => Decl::Reference(self.decl_references().at(index)?),
            DeclSort::Enumerator
            | DeclSort::Field
            | DeclSort::Bitfield
            | DeclSort::Temploid
            | DeclSort::PartialSpecialization
            | DeclSort::Specialization
            | DeclSort::DefaultArgument
            | DeclSort::Concept
            | DeclSort::Method
            | DeclSort::Constructor
            | DeclSort::InheritedConstructor
            | DeclSort::Destructor
            | DeclSort::Prolongation
            | DeclSort::Friend
            | DeclSort::Expansion
            | DeclSort::DeductionGuide
            | DeclSort::Barren
            | DeclSort::Tuple
            | DeclSort::SyntaxTree
            | DeclSort::Intrinsic
            | DeclSort::Property
            | DeclSort::OutputSegment => Decl::Unsupported(index.tag()),
        })
    }

    pub fn ty(&self, index: TypeIndex) -> Result<Type<'_>, FileError> {
        let Some(sort) = index.sort() else {
            return Ok(Type::Unsupported(index.tag()));
        };
        Ok(match sort {
            TypeSort::Fundamental => Type::Fundamental(self.fundamental_types().at(index)?),
            TypeSort::Designated => Type::Designated(self.designated_types().at(index)?),
            TypeSort::Syntactic => Type::Syntactic(self.syntactic_types().at(index)?),
            TypeSort::Expansion => Type::Expansion(self.expansion_types().at(index)?),
            TypeSort::LvalueReference => {
                Type::LvalueReference(self.lvalue_references().at(index)?)
            }
            TypeSort::RvalueReference => {
                Type::RvalueReference(self.rvalue_references().at(index)?)
            }
            TypeSort::Function => Type::Function(self.function_types().at(index)?),
            TypeSort::Qualified => Type::Qualified(self.qualified_types().at(index)?),
            TypeSort::Tuple => Type::Tuple(self.tuple_types().at(index)?),
            TypeSort::Forall => Type::Forall(self.forall_types().at(index)?),
            TypeSort::VendorExtension
            | TypeSort::Tor
            | TypeSort::Pointer
            | TypeSort::PointerToMember
            | TypeSort::Method
            | TypeSort::Array
            | TypeSort::Typename
            | TypeSort::Base
            | TypeSort::Decltype
            | TypeSort::Placeholder
            | TypeSort::Unaligned
            | TypeSort::SyntaxTree => Type::Unsupported(index.tag()),
        })
    }

    pub fn expr(&self, index: ExprIndex) -> Result<Expr<'_>, FileError> {
        let Some(sort) = index.sort() else {
            return Ok(Expr::Unsupported(index.tag()));
        };
        Ok(match sort {
            ExprSort::Type => Expr::Type(self.type_expressions().at(index)?),
            ExprSort::NamedDecl => Expr::NamedDecl(self.decl_expressions().at(index)?),
            ExprSort::Tuple => Expr::Tuple(self.tuple_expressions().at(index)?),
            ExprSort::TemplateId => Expr::TemplateId(self.template_ids().at(index)?),
            ExprSort::VendorExtension
            | ExprSort::Empty
            | ExprSort::Literal
            | ExprSort::Lambda
            | ExprSort::UnresolvedId
            | ExprSort::UnqualifiedId
            | ExprSort::SimpleIdentifier
            | ExprSort::Pointer
            | ExprSort::QualifiedName
            | ExprSort::Path
            | ExprSort::Read
            | ExprSort::Monad
            | ExprSort::Dyad
            | ExprSort::Triad
            | ExprSort::String
            | ExprSort::Temporary
            | ExprSort::Call
            | ExprSort::MemberInitializer
            | ExprSort::MemberAccess
            | ExprSort::InheritancePath
            | ExprSort::InitializerList
            | ExprSort::Cast
            | ExprSort::Condition
            | ExprSort::ExpressionList
            | ExprSort::SizeofType
            | ExprSort::Alignof
            | ExprSort::Label
            | ExprSort::UnusedSort0
            | ExprSort::Typeid
            | ExprSort::DestructorCall
            | ExprSort::SyntaxTree
            | ExprSort::FunctionString
            | ExprSort::CompoundString
            | ExprSort::StringSequence
            | ExprSort::Initializer
            | ExprSort::Requires
            | ExprSort::UnaryFoldExpression
            | ExprSort::BinaryFoldExpression
            | ExprSort::HierarchyConversion
            | ExprSort::ProductTypeValue
            | ExprSort::SumTypeValue
            | ExprSort::UnusedSort1
            | ExprSort::ArrayValue
            | ExprSort::DynamicDispatch
            | ExprSort::VirtualFunctionConversion
            | ExprSort::Placeholder
            | ExprSort::Expansion
            | ExprSort::Generic
            | ExprSort::Nullptr
            | ExprSort::This
            | ExprSort::TemplateReference
            | ExprSort::Statement
            | ExprSort::TypeTraitIntrinsic
            | ExprSort::DesignatedInitializer
            | ExprSort::PackedTemplateArguments
            | ExprSort::Tokens
            | ExprSort::AssignInitializer => Expr::Unsupported(index.tag()),
        })
    }

    pub fn chart(&self, index: ChartIndex) -> Result<Chart<'_>, FileError> {
        let Some(sort) = index.sort() else {
            return Ok(Chart::Unsupported(index.tag()));
        };
        Ok(match sort {
            ChartSort::None => Chart::None,
            ChartSort::Unilevel => Chart::Unilevel(self.unilevel_charts().at(index)?),
            ChartSort::Multilevel => Chart::Multilevel,
        })
    }

    pub fn name(&self, index: NameIndex) -> Result<Name<'_>, FileError> {
        let Some(sort) = index.sort() else {
            return Ok(Name::Unsupported(index.tag()));
        };
        Ok(match sort {
            NameSort::Identifier => Name::Identifier(self.get_string(TextOffset(index.offset()))?),
            NameSort::Operator => Name::Operator(self.operator_names().at(index)?),
            NameSort::Conversion
            | NameSort::Literal
            | NameSort::Template
            | NameSort::Specialization
            | NameSort::SourceFile
            | NameSort::Guide => Name::Unsupported(index.tag()),
        })
    }
}
