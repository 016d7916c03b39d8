use std::fmt;

use ifc_core::{FundamentalType, Qualifiers, TypeBasis, TypeIndex, TypePrecision, TypeSign};

use super::{PresentError, Presenter};
use crate::file::Type;

impl<W: fmt::Write> Presenter<'_, W> {
    pub fn present_type(&mut self, index: TypeIndex) -> Result<(), PresentError> {
        self.descend(|p| p.ty(index))
    }

    fn ty(&mut self, index: TypeIndex) -> Result<(), PresentError> {
        let file = self.file;
        match file.ty(index)? {
            Type::Fundamental(fundamental) => self.fundamental(fundamental),
            Type::Designated(designated) => self.present_referred_decl(designated.decl),
            Type::Syntactic(syntactic) => self.syntactic(syntactic.expr),
            Type::Expansion(expansion) => {
                self.present_type(expansion.pack)?;
                self.write("...")
            }
            Type::LvalueReference(reference) => {
                self.present_type(reference.referee)?;
                self.write("&")
            }
            Type::RvalueReference(reference) => {
                self.present_type(reference.referee)?;
                self.write("&&")
            }
            Type::Function(function) => {
                self.present_type(function.target)?;
                self.write("(")?;
                self.present_type(function.source)?;
                self.write(")")
            }
            Type::Qualified(qualified) => {
                self.qualifiers(qualified.qualifiers)?;
                self.present_type(qualified.unqualified)
            }
            Type::Tuple(tuple) => {
                let elements = file.type_heap().slice(tuple.0)?;
                self.separated(elements, ", ", |p, element| p.present_type(*element))
            }
            Type::Forall(_) | Type::Unsupported(_) => {
                write!(self, "Unsupported TypeSort '{}'", index.tag())
            }
        }
    }

    fn qualifiers(&mut self, qualifiers: Qualifiers) -> Result<(), PresentError> {
        if qualifiers.contains(Qualifiers::CONST) {
            self.write("const ")?;
        }
        if qualifiers.contains(Qualifiers::VOLATILE) {
            self.write("volatile ")?;
        }
        if qualifiers.contains(Qualifiers::RESTRICT) {
            self.write("__restrict ")?;
        }
        Ok(())
    }

    fn fundamental(&mut self, ty: &FundamentalType) -> Result<(), PresentError> {
        match ty.sign() {
            Some(TypeSign::Plain) => {}
            Some(TypeSign::Signed) => self.write("signed ")?,
            Some(TypeSign::Unsigned) => self.write("unsigned ")?,
            None => write!(self, "Unsupported Sign '{}' ", ty.sign_tag())?,
        }

        match ty.precision() {
            Some(TypePrecision::Default) => {}
            Some(TypePrecision::Short) => {
                expect_int_basis(ty, "short")?;
                return self.write("short");
            }
            Some(TypePrecision::Long) => self.write("long ")?,
            Some(TypePrecision::Bit64) => {
                expect_int_basis(ty, "long long")?;
                return self.write("long long");
            }
            Some(
                TypePrecision::Bit8
                | TypePrecision::Bit16
                | TypePrecision::Bit32
                | TypePrecision::Bit128,
            )
            | None => write!(self, "Unsupported Bitness '{}' ", ty.precision_tag())?,
        }

        let keyword = match ty.basis() {
            Some(TypeBasis::Void) => "void",
            Some(TypeBasis::Bool) => "bool",
            Some(TypeBasis::Char) => "char",
            Some(TypeBasis::WcharT) => "wchar_t",
            Some(TypeBasis::Int) => "int",
            Some(TypeBasis::Float) => "float",
            Some(TypeBasis::Double) => "double",
            _ => return write!(self, "fundamental type {{{}}}", ty.basis_tag()),
        };
        self.write(keyword)
    }
}

/// `short` and `long long` only ever qualify `int`.
fn expect_int_basis(ty: &FundamentalType, precision: &str) -> Result<(), PresentError> {
    if ty.basis() == Some(TypeBasis::Int) {
        return Ok(());
    }
    Err(PresentError::contract(format!(
        "'{precision}' precision on fundamental basis {}, expected int",
        ty.basis_tag()
    )))
}
