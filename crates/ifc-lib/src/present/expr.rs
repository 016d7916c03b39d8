use std::fmt;

use ifc_core::{DeclSort, ExprIndex, ExprSort, NamedDeclExpression, TemplateId};

use super::{PresentError, Presenter};
use crate::file::Expr;

impl<W: fmt::Write> Presenter<'_, W> {
    pub fn present_expr(&mut self, index: ExprIndex) -> Result<(), PresentError> {
        self.descend(|p| p.expr(index))
    }

    fn expr(&mut self, index: ExprIndex) -> Result<(), PresentError> {
        let file = self.file;
        match file.expr(index)? {
            Expr::Type(ty) => self.present_type(ty.denotation),
            Expr::NamedDecl(named) => self.named_decl(named),
            Expr::Tuple(tuple) => {
                let elements = file.expr_heap().slice(tuple.seq)?;
                self.separated(elements, ", ", |p, element| p.present_expr(*element))
            }
            Expr::TemplateId(template_id) => self.template_id(template_id),
            Expr::Unsupported(tag) => write!(self, "Unsupported ExprSort'{tag}'"),
        }
    }

    /// Only declarations owned by imported units are named here.
    fn named_decl(&mut self, named: &NamedDeclExpression) -> Result<(), PresentError> {
        let resolution = named.resolution;
        if resolution.sort() != Some(DeclSort::Reference) {
            return write!(
                self,
                "Declaration of unsupported kind '{}'",
                resolution.tag()
            );
        }
        let file = self.file;
        let reference = file.decl_references().at(resolution)?;
        self.cross_file(reference, Self::present_referred_decl)
    }

    fn template_id(&mut self, template_id: &TemplateId) -> Result<(), PresentError> {
        self.present_expr(template_id.primary)?;
        self.write("<")?;
        self.present_expr(template_id.arguments)?;
        self.write(">")
    }

    /// A type spelled as an expression. Only template-ids are rendered.
    pub(super) fn syntactic(&mut self, expr: ExprIndex) -> Result<(), PresentError> {
        if expr.sort() != Some(ExprSort::TemplateId) {
            return write!(
                self,
                "Syntactic Type of unsupported expression kind '{}'",
                expr.tag()
            );
        }
        let file = self.file;
        let template_id = file.template_ids().at(expr)?;
        self.template_id(template_id)
    }
}
