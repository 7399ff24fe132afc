use super::*;

// --- Resolution ---

#[test]
fn every_subject_resolves_to_a_distinct_image() {
    let subjects = [
        Subject::new(Sex::Male, View::Front),
        Subject::new(Sex::Male, View::Back),
        Subject::new(Sex::Female, View::Front),
        Subject::new(Sex::Female, View::Back),
    ];
    let srcs: Vec<&str> = subjects.iter().map(|s| body_image_src(*s)).collect();
    for (i, a) in srcs.iter().enumerate() {
        for (j, b) in srcs.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn image_src_encodes_sex_and_view() {
    let src = body_image_src(Subject::new(Sex::Female, View::Back));
    assert_eq!(src, "/assets/body-female-back.png");
}

// --- Export filename ---

#[test]
fn export_filename_matches_pattern() {
    assert_eq!(
        export_filename(Subject::new(Sex::Male, View::Front)),
        "pain-diagram-male-front.png"
    );
    assert_eq!(
        export_filename(Subject::new(Sex::Female, View::Back)),
        "pain-diagram-female-back.png"
    );
}

// --- View toggling ---

#[test]
fn view_toggles_round_trip() {
    assert_eq!(View::Front.toggled(), View::Back);
    assert_eq!(View::Back.toggled(), View::Front);
    assert_eq!(View::Front.toggled().toggled(), View::Front);
}

// --- Defaults ---

#[test]
fn default_subject_is_male_front() {
    let subject = Subject::default();
    assert_eq!(subject.sex, Sex::Male);
    assert_eq!(subject.view, View::Front);
}

// --- Display / serde ---

#[test]
fn display_is_lowercase() {
    assert_eq!(Sex::Male.to_string(), "male");
    assert_eq!(Sex::Female.to_string(), "female");
    assert_eq!(View::Front.to_string(), "front");
    assert_eq!(View::Back.to_string(), "back");
}

#[test]
fn serde_uses_lowercase_names() {
    let subject = Subject::new(Sex::Female, View::Back);
    let json = serde_json::to_string(&subject).expect("serialize");
    assert_eq!(json, r#"{"sex":"female","view":"back"}"#);
    let parsed: Subject = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, subject);
}
