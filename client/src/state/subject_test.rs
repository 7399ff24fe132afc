use super::*;

#[test]
fn default_is_male_front() {
    let state = SubjectState::default();
    assert_eq!(state.sex, Sex::Male);
    assert_eq!(state.view, View::Front);
}

#[test]
fn subject_key_reflects_fields() {
    let state = SubjectState { sex: Sex::Female, view: View::Back };
    assert_eq!(state.subject(), Subject::new(Sex::Female, View::Back));
}

#[test]
fn labels_track_the_view() {
    let front = SubjectState { sex: Sex::Male, view: View::Front };
    assert_eq!(front.view_label(), "Front");
    assert_eq!(front.switch_label(), "Switch to back");

    let back = SubjectState { sex: Sex::Male, view: View::Back };
    assert_eq!(back.view_label(), "Back");
    assert_eq!(back.switch_label(), "Switch to front");
}
