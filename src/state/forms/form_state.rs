//! Application form values and the focus cursor that edits them

use super::field::{cycle_position, is_field_visible, FieldId, Position, Skill};

/// Number of buttons in the actions panel (0=Submit, 1=Copy Summary, 2=Quit)
pub const ACTION_BUTTON_COUNT: usize = 3;

/// The record entered by the applicant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationValues {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: Option<Position>,
    pub relevant_experience: String,
    pub portfolio_url: String,
    pub management_experience: String,
    /// Selected skills in the order they were ticked; never holds duplicates
    pub additional_skills: Vec<Skill>,
    pub preferred_interview_time: String,
}

impl ApplicationValues {
    /// Text value of a text field, `None` for the select and checkbox fields
    pub fn text(&self, field: FieldId) -> Option<&str> {
        let value = match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::PhoneNumber => &self.phone_number,
            FieldId::RelevantExperience => &self.relevant_experience,
            FieldId::PortfolioUrl => &self.portfolio_url,
            FieldId::ManagementExperience => &self.management_experience,
            FieldId::PreferredInterviewTime => &self.preferred_interview_time,
            FieldId::Position | FieldId::AdditionalSkills => return None,
        };
        Some(value.as_str())
    }

    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::FullName => Some(&mut self.full_name),
            FieldId::Email => Some(&mut self.email),
            FieldId::PhoneNumber => Some(&mut self.phone_number),
            FieldId::RelevantExperience => Some(&mut self.relevant_experience),
            FieldId::PortfolioUrl => Some(&mut self.portfolio_url),
            FieldId::ManagementExperience => Some(&mut self.management_experience),
            FieldId::PreferredInterviewTime => Some(&mut self.preferred_interview_time),
            FieldId::Position | FieldId::AdditionalSkills => None,
        }
    }

    /// Tick or untick a skill. Ticking appends, so the set keeps selection order.
    pub fn toggle_skill(&mut self, skill: Skill) {
        if let Some(index) = self.additional_skills.iter().position(|s| *s == skill) {
            self.additional_skills.remove(index);
        } else {
            self.additional_skills.push(skill);
        }
    }

    /// Fields currently shown for the selected position, in display order
    pub fn visible_fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|f| is_field_visible(*f, self.position))
            .collect()
    }
}

/// Something that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusItem {
    Field(FieldId),
    /// The actions panel; `ApplicationForm::selected_button` picks the button
    Actions,
}

/// Form values plus the editing cursor
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub values: ApplicationValues,
    /// Index into `focus_items()`
    pub active_item: usize,
    /// Highlighted skill inside the checkbox group
    pub skill_cursor: usize,
    pub selected_button: usize,
}

impl ApplicationForm {
    /// Focusable items in tab order. Hidden role fields are skipped.
    pub fn focus_items(&self) -> Vec<FocusItem> {
        let mut items: Vec<FocusItem> = self
            .values
            .visible_fields()
            .into_iter()
            .map(FocusItem::Field)
            .collect();
        items.push(FocusItem::Actions);
        items
    }

    pub fn active(&self) -> FocusItem {
        let items = self.focus_items();
        items
            .get(self.active_item)
            .copied()
            .unwrap_or(FocusItem::Actions)
    }

    /// The focused field, if focus is not on the actions panel
    pub fn active_field(&self) -> Option<FieldId> {
        match self.active() {
            FocusItem::Field(id) => Some(id),
            FocusItem::Actions => None,
        }
    }

    pub fn is_active(&self, item: FocusItem) -> bool {
        self.active() == item
    }

    pub fn next_item(&mut self) {
        let count = self.focus_items().len();
        self.active_item = (self.active_item + 1) % count;
    }

    pub fn prev_item(&mut self) {
        let count = self.focus_items().len();
        if self.active_item == 0 {
            self.active_item = count - 1;
        } else {
            self.active_item -= 1;
        }
    }

    /// Move focus to an item. Returns false if the item is not currently shown.
    pub fn focus(&mut self, item: FocusItem) -> bool {
        match self.focus_items().iter().position(|i| *i == item) {
            Some(index) => {
                self.active_item = index;
                true
            }
            None => false,
        }
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            if let Some(value) = self.values.text_mut(field) {
                value.push(c);
            }
        }
    }

    /// Remove the last character of the focused text field
    pub fn pop_char(&mut self) {
        if let Some(field) = self.active_field() {
            if let Some(value) = self.values.text_mut(field) {
                value.pop();
            }
        }
    }

    /// Change the position selection, keeping focus on the position select.
    pub fn set_position(&mut self, position: Option<Position>) {
        let focused_position = self.is_active(FocusItem::Field(FieldId::Position));
        let previous = self.active();
        self.values.position = position;
        if focused_position || !self.focus(previous) {
            self.focus(FocusItem::Field(FieldId::Position));
        }
    }

    pub fn cycle_position(&mut self, forward: bool) {
        let next = cycle_position(self.values.position, forward);
        self.set_position(next);
    }

    pub fn move_skill_cursor(&mut self, forward: bool) {
        let len = Skill::ALL.len();
        self.skill_cursor = if forward {
            (self.skill_cursor + 1) % len
        } else {
            (self.skill_cursor + len - 1) % len
        };
    }

    pub fn toggle_skill_at_cursor(&mut self) {
        if let Some(skill) = Skill::ALL.get(self.skill_cursor) {
            self.values.toggle_skill(*skill);
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % ACTION_BUTTON_COUNT;
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = ACTION_BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::FieldKind;
    use pretty_assertions::assert_eq;

    fn fields(form: &ApplicationForm) -> Vec<FocusItem> {
        form.focus_items()
    }

    mod application_values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_empty() {
            let values = ApplicationValues::default();
            assert!(values.full_name.is_empty());
            assert!(values.position.is_none());
            assert!(values.additional_skills.is_empty());
        }

        #[test]
        fn test_text_accessors_cover_text_fields_only() {
            let mut values = ApplicationValues::default();
            for field in FieldId::ALL {
                let is_text = field.kind() == FieldKind::Text;
                assert_eq!(values.text(field).is_some(), is_text, "{field:?}");
                assert_eq!(values.text_mut(field).is_some(), is_text, "{field:?}");
            }
        }

        #[test]
        fn test_toggle_skill_adds_then_removes() {
            let mut values = ApplicationValues::default();
            values.toggle_skill(Skill::Python);
            assert!(values.additional_skills.contains(&Skill::Python));
            values.toggle_skill(Skill::Python);
            assert!(!values.additional_skills.contains(&Skill::Python));
            assert!(values.additional_skills.is_empty());
        }

        #[test]
        fn test_toggle_skill_keeps_selection_order_without_duplicates() {
            let mut values = ApplicationValues::default();
            values.toggle_skill(Skill::React);
            values.toggle_skill(Skill::Css);
            values.toggle_skill(Skill::React);
            values.toggle_skill(Skill::React);
            assert_eq!(values.additional_skills, vec![Skill::Css, Skill::React]);
        }

        #[test]
        fn test_visible_fields_per_position() {
            let mut values = ApplicationValues::default();
            assert_eq!(values.visible_fields().len(), 6);

            values.position = Some(Position::Designer);
            assert_eq!(
                values.visible_fields(),
                vec![
                    FieldId::FullName,
                    FieldId::Email,
                    FieldId::PhoneNumber,
                    FieldId::Position,
                    FieldId::RelevantExperience,
                    FieldId::PortfolioUrl,
                    FieldId::AdditionalSkills,
                    FieldId::PreferredInterviewTime,
                ]
            );
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_full_name() {
            let form = ApplicationForm::default();
            assert_eq!(form.active(), FocusItem::Field(FieldId::FullName));
        }

        #[test]
        fn test_actions_panel_is_last() {
            let form = ApplicationForm::default();
            assert_eq!(fields(&form).last(), Some(&FocusItem::Actions));
        }

        #[test]
        fn test_next_item_wraps() {
            let mut form = ApplicationForm::default();
            let count = form.focus_items().len();
            for _ in 0..count {
                form.next_item();
            }
            assert_eq!(form.active_item, 0);
        }

        #[test]
        fn test_prev_item_wraps_to_actions() {
            let mut form = ApplicationForm::default();
            form.prev_item();
            assert_eq!(form.active(), FocusItem::Actions);
        }

        #[test]
        fn test_hidden_fields_are_not_focusable() {
            let mut form = ApplicationForm::default();
            assert!(!form.focus(FocusItem::Field(FieldId::PortfolioUrl)));
            form.values.position = Some(Position::Designer);
            assert!(form.focus(FocusItem::Field(FieldId::PortfolioUrl)));
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_edits_focused_field() {
            let mut form = ApplicationForm::default();
            form.focus(FocusItem::Field(FieldId::Email));
            for c in "a@b.co".chars() {
                form.push_char(c);
            }
            form.pop_char();
            assert_eq!(form.values.email, "a@b.c");
            assert!(form.values.full_name.is_empty());
        }

        #[test]
        fn test_typing_on_select_is_ignored() {
            let mut form = ApplicationForm::default();
            form.focus(FocusItem::Field(FieldId::Position));
            form.push_char('x');
            form.pop_char();
            assert!(form.values.position.is_none());
        }

        #[test]
        fn test_position_change_keeps_focus_on_select() {
            let mut form = ApplicationForm::default();
            form.focus(FocusItem::Field(FieldId::Position));
            form.cycle_position(true);
            form.cycle_position(true);
            assert_eq!(form.values.position, Some(Position::Designer));
            assert_eq!(form.active(), FocusItem::Field(FieldId::Position));
            form.next_item();
            assert_eq!(form.active(), FocusItem::Field(FieldId::RelevantExperience));
        }

        #[test]
        fn test_position_change_keeps_hidden_values() {
            let mut form = ApplicationForm::default();
            form.set_position(Some(Position::Designer));
            form.focus(FocusItem::Field(FieldId::PortfolioUrl));
            for c in "https://me.dev".chars() {
                form.push_char(c);
            }
            form.set_position(Some(Position::Manager));
            assert_eq!(form.values.portfolio_url, "https://me.dev");
            assert!(!form
                .focus_items()
                .contains(&FocusItem::Field(FieldId::PortfolioUrl)));
        }

        #[test]
        fn test_position_change_moves_focus_off_hidden_field() {
            let mut form = ApplicationForm::default();
            form.set_position(Some(Position::Manager));
            form.focus(FocusItem::Field(FieldId::ManagementExperience));
            form.set_position(None);
            assert_eq!(form.active(), FocusItem::Field(FieldId::Position));
        }

        #[test]
        fn test_position_change_preserves_unrelated_focus() {
            let mut form = ApplicationForm::default();
            form.focus(FocusItem::Field(FieldId::AdditionalSkills));
            form.set_position(Some(Position::Designer));
            assert_eq!(form.active(), FocusItem::Field(FieldId::AdditionalSkills));
        }

        #[test]
        fn test_skill_cursor_wraps_and_toggles() {
            let mut form = ApplicationForm::default();
            form.move_skill_cursor(false);
            assert_eq!(form.skill_cursor, Skill::ALL.len() - 1);
            form.toggle_skill_at_cursor();
            assert_eq!(form.values.additional_skills, vec![Skill::MongoDb]);
            form.move_skill_cursor(true);
            assert_eq!(form.skill_cursor, 0);
        }

        #[test]
        fn test_buttons_wrap() {
            let mut form = ApplicationForm::default();
            form.prev_button();
            assert_eq!(form.selected_button, ACTION_BUTTON_COUNT - 1);
            form.next_button();
            assert_eq!(form.selected_button, 0);
        }
    }
}
