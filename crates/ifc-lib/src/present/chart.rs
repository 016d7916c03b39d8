use std::fmt;

use ifc_core::{ChartIndex, ChartSort, NameIndex, ParameterDeclaration, ParameterSort, TypeBasis};

use super::{PresentError, Presenter};
use crate::file::{Chart, Name, Type};

impl<W: fmt::Write> Presenter<'_, W> {
    /// Present a template parameter list, e.g. `template<typename T> `.
    pub fn present_chart(&mut self, index: ChartIndex) -> Result<(), PresentError> {
        self.descend(|p| p.chart(index))
    }

    pub fn present_name(&mut self, index: NameIndex) -> Result<(), PresentError> {
        let file = self.file;
        match file.name(index)? {
            Name::Identifier(text) => self.write(text),
            Name::Operator(operator) => {
                self.write("operator")?;
                self.write(file.get_string(operator.encoded)?)
            }
            Name::Unsupported(tag) => write!(self, "Unsupported NameSort '{tag}'"),
        }
    }

    fn chart(&mut self, index: ChartIndex) -> Result<(), PresentError> {
        let file = self.file;
        match file.chart(index)? {
            Chart::None => self.write("template<> "),
            Chart::Unilevel(chart) => {
                let parameters = file.parameters().slice(chart.0)?;
                self.write("template<")?;
                self.separated(parameters, ", ", Self::template_parameter)?;
                self.write("> ")
            }
            Chart::Multilevel => self.write("Chart.Multilevel presentation is unsupported "),
            Chart::Unsupported(tag) => write!(self, "Unsupported ChartSort '{tag}' "),
        }
    }

    fn template_parameter(&mut self, parameter: &ParameterDeclaration) -> Result<(), PresentError> {
        match parameter.sort() {
            Some(ParameterSort::Type) => self.write("typename")?,
            Some(ParameterSort::NonType) => self.present_type(parameter.ty)?,
            Some(ParameterSort::Template) => self.template_template_parameter(parameter)?,
            Some(ParameterSort::Object) => {
                return Err(PresentError::contract(
                    "function parameter in a template parameter chart",
                ));
            }
            None => write!(self, "Unsupported ParameterSort '{}'", parameter.sort_tag())?,
        }

        if parameter.pack {
            self.write("...")?;
        }
        if !parameter.name.is_null() {
            let file = self.file;
            write!(self, " {}", file.get_string(parameter.name)?)?;
        }
        Ok(())
    }

    /// `template<...> typename`: the parameter's type must be a forall over
    /// a unilevel chart whose subject is the `typename` fundamental type.
    fn template_template_parameter(
        &mut self,
        parameter: &ParameterDeclaration,
    ) -> Result<(), PresentError> {
        let file = self.file;
        let Type::Forall(forall) = file.ty(parameter.ty)? else {
            return Err(PresentError::contract(format!(
                "template template parameter type has sort tag {}, expected forall",
                parameter.ty.tag()
            )));
        };
        if forall.chart.sort() != Some(ChartSort::Unilevel) {
            return Err(PresentError::contract(format!(
                "template template parameter chart has sort tag {}, expected unilevel",
                forall.chart.tag()
            )));
        }
        let subject_is_typename = match file.ty(forall.subject)? {
            Type::Fundamental(subject) => subject.basis() == Some(TypeBasis::Typename),
            _ => false,
        };
        if !subject_is_typename {
            return Err(PresentError::contract(
                "template template parameter does not parameterize 'typename'",
            ));
        }

        self.present_chart(forall.chart)?;
        self.write("typename")
    }
}
