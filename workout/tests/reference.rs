use pretty_assertions::assert_eq;
use workout::{Package, Training, WorkoutError, summarize};

#[derive(Debug, serde::Deserialize)]
struct ReferenceCsv {
    package: String,
    message: String,
}

fn reference() -> Vec<ReferenceCsv> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/reference.csv");

    csv::Reader::from_path(path)
        .expect("reference file exists")
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .expect("reference file is valid")
}

#[test]
fn summary_lines_match_reference() {
    let reference = reference();
    assert!(!reference.is_empty());

    for ReferenceCsv { package, message } in reference {
        let workout = package
            .parse::<Package>()
            .and_then(|this| this.read())
            .unwrap_or_else(|e| panic!("{package}: {e}"));

        let info = workout
            .show_training_info()
            .unwrap_or_else(|e| panic!("{package}: {e}"));

        assert_eq!(info.get_message(), message);
    }
}

#[test]
fn summary_is_repeatable() {
    for ReferenceCsv { package, .. } in reference() {
        let workout = package
            .parse::<Package>()
            .and_then(|this| this.read())
            .expect("valid package");

        assert_eq!(workout.show_training_info(), workout.show_training_info());
    }
}

#[test]
fn summarize_keeps_order() {
    let packages = reference()
        .into_iter()
        .map(|this| this.package.parse::<Package>().expect("valid package"))
        .collect::<Vec<_>>();

    let expected = reference()
        .into_iter()
        .map(|this| this.message)
        .collect::<Vec<_>>();

    let actual = summarize(&packages)
        .expect("valid packages")
        .iter()
        .map(|this| this.get_message())
        .collect::<Vec<_>>();

    assert_eq!(actual, expected);
}

#[test]
fn unknown_workout_is_reported() {
    let package = "XYZ:1,2,3".parse::<Package>().expect("well formed package");

    assert_eq!(
        package.read(),
        Err(WorkoutError::UnknownWorkoutType("XYZ".to_owned()))
    );
}

#[test]
fn zero_duration_is_reported() {
    let error = "RUN:15000,0,75"
        .parse::<Package>()
        .and_then(|this| this.read())
        .expect_err("zero duration");

    assert_eq!(error, WorkoutError::DivisionByZero { field: "duration" });
    assert_eq!(
        error.to_string(),
        "Division by zero: 'duration' must not be zero"
    );
}

#[test]
fn overflowing_metrics_are_reported() {
    for input in ["RUN:15000,1e-320,75", "SWM:720,1,1e308,25,40"] {
        let workout = input
            .parse::<Package>()
            .and_then(|this| this.read())
            .expect("inputs pass construction");

        assert!(
            matches!(
                workout.show_training_info(),
                Err(WorkoutError::InvalidValue {
                    reason: "must be finite",
                    ..
                })
            ),
            "{input}"
        );
    }
}

#[test]
fn summarize_rejects_overflow() {
    let packages = ["RUN:15000,1,75", "RUN:15000,1e-320,75"]
        .map(|this| this.parse::<Package>().expect("valid package"));

    assert!(matches!(
        summarize(&packages),
        Err(WorkoutError::InvalidValue { field: "speed", .. })
    ));
}
