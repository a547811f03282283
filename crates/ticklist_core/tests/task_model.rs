use ticklist_core::{normalize_description, Task, TaskValidationError};

#[test]
fn normalize_trims_surrounding_whitespace() {
    let normalized = normalize_description("  buy milk \n").unwrap();
    assert_eq!(normalized, "buy milk");
}

#[test]
fn normalize_rejects_blank_input() {
    assert_eq!(
        normalize_description("   "),
        Err(TaskValidationError::EmptyDescription)
    );
    assert_eq!(
        normalize_description(""),
        Err(TaskValidationError::EmptyDescription)
    );
}

#[test]
fn mark_completed_is_one_way() {
    let mut task = Task {
        id: 1,
        description: "walk dog".to_string(),
        completed: false,
    };
    task.mark_completed();
    assert!(task.completed);
}

#[test]
fn validate_rejects_blank_description() {
    let task = Task {
        id: 7,
        description: " ".to_string(),
        completed: false,
    };
    assert_eq!(task.validate(), Err(TaskValidationError::EmptyDescription));
}
