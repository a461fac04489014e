/// When a form field should trigger a preview refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    /// Refresh (debounced) on every keystroke.
    PerKeystroke,
    /// Refresh (debounced) only when the value is committed.
    OnCommit,
}

impl RefreshTrigger {
    /// Classify by the DOM-reported field type (`HTMLInputElement.type`
    /// and friends: `"text"`, `"number"`, `"checkbox"`, `"select-one"`,
    /// `"textarea"`, ...).
    ///
    /// Only free-typed fields refresh per keystroke; everything else waits
    /// for the value to be committed.
    pub fn for_field_type(field_type: &str) -> Self {
        match field_type {
            "text" | "number" => RefreshTrigger::PerKeystroke,
            _ => RefreshTrigger::OnCommit,
        }
    }

    /// The DOM event this trigger listens for.
    pub fn dom_event_name(self) -> &'static str {
        match self {
            RefreshTrigger::PerKeystroke => "input",
            RefreshTrigger::OnCommit => "change",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_fields_refresh_per_keystroke() {
        assert_eq!(
            RefreshTrigger::for_field_type("text"),
            RefreshTrigger::PerKeystroke
        );
        assert_eq!(
            RefreshTrigger::for_field_type("number"),
            RefreshTrigger::PerKeystroke
        );
    }

    #[test]
    fn test_other_fields_refresh_on_commit() {
        for field_type in ["checkbox", "select-one", "textarea", "file", "radio", ""] {
            assert_eq!(
                RefreshTrigger::for_field_type(field_type),
                RefreshTrigger::OnCommit,
                "field type {:?} should commit on change",
                field_type
            );
        }
    }

    #[test]
    fn test_event_names() {
        assert_eq!(RefreshTrigger::PerKeystroke.dom_event_name(), "input");
        assert_eq!(RefreshTrigger::OnCommit.dom_event_name(), "change");
    }
}
