use std::fmt;

use ifc_core::{DeclIndex, ScopeDeclaration, TypeBasis};

use super::{PresentError, Presenter};
use crate::file::{Decl, Type};

impl<W: fmt::Write> Presenter<'_, W> {
    /// Present one declaration, starting at the current indentation.
    ///
    /// A reference into an imported unit writes nothing of its own; the
    /// imported declaration is presented in its place.
    pub fn present_decl(&mut self, index: DeclIndex) -> Result<(), PresentError> {
        self.descend(|p| p.decl(index))
    }

    /// Present the name of the declaration a type or using-declaration
    /// refers to.
    pub fn present_referred_decl(&mut self, index: DeclIndex) -> Result<(), PresentError> {
        self.descend(|p| p.referred_decl(index))
    }

    fn decl(&mut self, index: DeclIndex) -> Result<(), PresentError> {
        let file = self.file;
        let decl = file.decl(index)?;
        if !matches!(decl, Decl::Reference(_)) {
            self.write_indent()?;
        }

        match decl {
            Decl::VendorExtension => self.write("Vendor Extension\n"),
            Decl::Variable(variable) => {
                self.write("Variable '")?;
                self.present_name(variable.name)?;
                self.write("', type: ")?;
                self.present_type(variable.ty)?;
                self.write("\n")
            }
            Decl::Scope(scope) => self.scope(scope),
            Decl::Enumeration(enumeration) => {
                writeln!(self, "Enumeration '{}'", file.get_string(enumeration.name)?)
            }
            Decl::Alias(alias) => writeln!(self, "Alias '{}'", file.get_string(alias.name)?),
            Decl::Template(template) => {
                self.present_chart(template.chart)?;
                self.write("\n")?;
                self.present_decl(template.entity)
            }
            Decl::Function(function) => {
                self.write("Function '")?;
                self.present_name(function.name)?;
                self.write("', type: ")?;
                self.present_type(function.ty)?;
                self.write("\n")
            }
            Decl::UsingDeclaration(using) => {
                self.write("Using '")?;
                self.present_referred_decl(using.resolution)?;
                self.write("'\n")
            }
            Decl::Reference(reference) => self.cross_file(reference, Self::present_decl),
            Decl::Parameter(_) | Decl::Unsupported(_) => {
                writeln!(self, "Unsupported DeclSort '{}'", index.tag())
            }
        }
    }

    fn scope(&mut self, scope: &ScopeDeclaration) -> Result<(), PresentError> {
        let file = self.file;
        let Type::Fundamental(kind) = file.ty(scope.ty)? else {
            return Err(PresentError::contract(format!(
                "scope type has sort tag {}, expected a fundamental type",
                scope.ty.tag()
            )));
        };

        match kind.basis() {
            Some(TypeBasis::Class) => self.write("Class")?,
            Some(TypeBasis::Struct) => self.write("Struct")?,
            Some(TypeBasis::Union) => self.write("Union")?,
            Some(TypeBasis::Namespace) => self.write("Namespace")?,
            Some(TypeBasis::Interface) => self.write("__interface")?,
            _ => write!(self, "Unknown Scope '{}'", kind.basis_tag())?,
        }
        self.write(" '")?;
        self.present_name(scope.name)?;
        self.write("'")?;

        if scope.initializer.is_null() {
            self.write(": incomplete")?;
        } else {
            let descriptor = file.scope_descriptors().at(scope.initializer)?;
            let members = file.scope_members(descriptor)?;
            self.write(" {\n")?;
            self.indent += 2;
            let result = self.present_members(members);
            self.indent -= 2;
            result?;
            self.write_indent()?;
            self.write("}")?;
        }
        self.write("\n")
    }

    fn referred_decl(&mut self, index: DeclIndex) -> Result<(), PresentError> {
        let file = self.file;
        match file.decl(index)? {
            Decl::Parameter(parameter) => self.write(file.get_string(parameter.name)?),
            Decl::Scope(scope) => self.present_name(scope.name),
            Decl::Template(template) => self.present_name(template.name),
            Decl::Function(function) => self.present_name(function.name),
            Decl::Reference(reference) => self.cross_file(reference, Self::present_referred_decl),
            Decl::VendorExtension
            | Decl::Variable(_)
            | Decl::Enumeration(_)
            | Decl::Alias(_)
            | Decl::UsingDeclaration(_)
            | Decl::Unsupported(_) => write!(self, "Unsupported DeclSort '{}'", index.tag()),
        }
    }
}
