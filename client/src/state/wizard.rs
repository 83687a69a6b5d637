//! Step wizard: a linear four-stage selection funnel.
//!
//! DESIGN
//! ======
//! The current stage is a tagged enum so an out-of-range step cannot exist.
//! Each select operation records its own field and advances exactly one
//! stage, saturating at the roadmap. There is no back or reset transition;
//! the funnel only moves forward until the component is dropped.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::util::catalog::Catalog;

/// One stage of the funnel, numbered 1 through 4.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    UserType,
    Degree,
    Field,
    Roadmap,
}

impl WizardStep {
    pub const ALL: [Self; 4] = [Self::UserType, Self::Degree, Self::Field, Self::Roadmap];

    /// 1-based position in the funnel.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::UserType => 1,
            Self::Degree => 2,
            Self::Field => 3,
            Self::Roadmap => 4,
        }
    }

    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == number)
    }

    /// The following stage; the roadmap is terminal.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::UserType => Self::Degree,
            Self::Degree => Self::Field,
            Self::Field | Self::Roadmap => Self::Roadmap,
        }
    }

    /// Catalog offered at this stage; `None` for the roadmap.
    #[must_use]
    pub fn catalog(self) -> Option<Catalog> {
        match self {
            Self::UserType => Some(Catalog::UserTypes),
            Self::Degree => Some(Catalog::Degrees),
            Self::Field => Some(Catalog::Fields),
            Self::Roadmap => None,
        }
    }
}

/// Selections collected so far and the stage being shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub user_type: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
}

impl WizardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the user type and advance. Ids are not validated.
    pub fn select_user_type(&mut self, id: &str) {
        self.user_type = Some(id.to_owned());
        self.advance();
    }

    /// Record the degree and advance. Ids are not validated.
    pub fn select_degree(&mut self, id: &str) {
        self.degree = Some(id.to_owned());
        self.advance();
    }

    /// Record the field and advance. Ids are not validated.
    pub fn select_field(&mut self, id: &str) {
        self.field = Some(id.to_owned());
        self.advance();
    }

    /// Dispatch a choice from `catalog` to the matching select operation.
    pub fn select(&mut self, catalog: Catalog, id: &str) {
        match catalog {
            Catalog::UserTypes => self.select_user_type(id),
            Catalog::Degrees => self.select_degree(id),
            Catalog::Fields => self.select_field(id),
        }
    }

    /// The id recorded for `catalog`, if any.
    #[must_use]
    pub fn selection(&self, catalog: Catalog) -> Option<&str> {
        match catalog {
            Catalog::UserTypes => self.user_type.as_deref(),
            Catalog::Degrees => self.degree.as_deref(),
            Catalog::Fields => self.field.as_deref(),
        }
    }

    /// Whether the button for `id` in `catalog` is highlighted.
    #[must_use]
    pub fn is_selected(&self, catalog: Catalog, id: &str) -> bool {
        self.selection(catalog) == Some(id)
    }

    /// Progress circle `number` is filled once that stage is reached.
    #[must_use]
    pub fn circle_filled(&self, number: u8) -> bool {
        self.step.number() >= number
    }

    /// Connector after circle `number` is filled once that stage is passed.
    #[must_use]
    pub fn connector_filled(&self, number: u8) -> bool {
        self.step.number() > number
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.step == WizardStep::Roadmap
    }

    fn advance(&mut self) {
        self.step = self.step.next();
    }
}
