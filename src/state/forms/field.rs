//! Form field identifiers and the option sets behind the select and checkbox inputs

/// Identifies one input of the application form.
///
/// The declaration order is the on-screen order, and `ErrorMap` iterates in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    PreferredInterviewTime,
}

/// How a field is edited and drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Checkbox,
}

impl FieldId {
    pub const ALL: [FieldId; 9] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::PhoneNumber,
        FieldId::Position,
        FieldId::RelevantExperience,
        FieldId::PortfolioUrl,
        FieldId::ManagementExperience,
        FieldId::AdditionalSkills,
        FieldId::PreferredInterviewTime,
    ];

    /// Label shown on the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Position => "Applying for Position",
            Self::RelevantExperience => "Relevant Experience (Years)",
            Self::PortfolioUrl => "Portfolio URL",
            Self::ManagementExperience => "Management Experience",
            Self::AdditionalSkills => "Additional Skills",
            Self::PreferredInterviewTime => "Preferred Interview Time",
        }
    }

    /// Label used for the row in the submitted summary
    pub fn summary_label(&self) -> &'static str {
        match self {
            Self::RelevantExperience => "Relevant Experience",
            other => other.label(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Position => FieldKind::Select,
            Self::AdditionalSkills => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    /// Whether this field is only shown for some positions
    pub fn is_role_field(&self) -> bool {
        matches!(
            self,
            Self::RelevantExperience | Self::PortfolioUrl | Self::ManagementExperience
        )
    }

    /// Greyed-out hint drawn inside an empty text input
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Email => Some("name@example.com"),
            Self::PhoneNumber => Some("digits only"),
            Self::PortfolioUrl => Some("https://"),
            Self::PreferredInterviewTime => Some("YYYY-MM-DDTHH:MM"),
            _ => None,
        }
    }
}

/// Position the applicant is applying for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
        }
    }

    /// Fields shown only while this position is selected, in display order
    pub fn role_fields(&self) -> &'static [FieldId] {
        match self {
            Self::Developer => &[FieldId::RelevantExperience],
            Self::Designer => &[FieldId::RelevantExperience, FieldId::PortfolioUrl],
            Self::Manager => &[FieldId::ManagementExperience],
        }
    }

    pub fn shows(&self, field: FieldId) -> bool {
        self.role_fields().contains(&field)
    }
}

/// Options of the position select, starting with the "nothing selected" entry
pub const POSITION_OPTIONS: [Option<Position>; 4] = [
    None,
    Some(Position::Developer),
    Some(Position::Designer),
    Some(Position::Manager),
];

/// Label of a position select option
pub fn position_option_label(option: Option<Position>) -> &'static str {
    match option {
        None => "Select a position",
        Some(p) => p.label(),
    }
}

/// Step through the position options, wrapping at either end
pub fn cycle_position(current: Option<Position>, forward: bool) -> Option<Position> {
    let len = POSITION_OPTIONS.len();
    let index = POSITION_OPTIONS
        .iter()
        .position(|o| *o == current)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    POSITION_OPTIONS[next]
}

/// Whether a field is visible for the given position selection
pub fn is_field_visible(field: FieldId, position: Option<Position>) -> bool {
    if field.is_role_field() {
        position.is_some_and(|p| p.shows(field))
    } else {
        true
    }
}

/// A selectable additional skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    JavaScript,
    Css,
    Python,
    React,
    NodeJs,
    MongoDb,
}

impl Skill {
    pub const ALL: [Skill; 6] = [
        Skill::JavaScript,
        Skill::Css,
        Skill::Python,
        Skill::React,
        Skill::NodeJs,
        Skill::MongoDb,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Css => "CSS",
            Self::Python => "Python",
            Self::React => "React",
            Self::NodeJs => "Node.js",
            Self::MongoDb => "Mongo DB",
        }
    }
}
