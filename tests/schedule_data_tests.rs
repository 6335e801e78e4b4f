use approx::assert_relative_eq;
use gantt_rs::core::{Color, ScheduleView, TaskInstance};

fn task(start: f64, exec: f64) -> TaskInstance {
    TaskInstance {
        start_time: start,
        execution_time: exec,
        processor: 0,
        label: "t".to_owned(),
        color: Color::rgb(0.5, 0.5, 0.5),
    }
}

#[test]
fn schedule_from_solver_json_round_trips() {
    // Shape produced by the scheduling toolchain: a solved throughput plus
    // task placements.
    let json = r#"{
        "period": 10.0,
        "tasks": [
            {
                "start_time": 2.0,
                "execution_time": 3.0,
                "processor": 0,
                "label": "a(0)",
                "color": { "red": 0.1, "green": 0.2, "blue": 0.3, "alpha": 1.0 }
            }
        ]
    }"#;

    let view: ScheduleView = serde_json::from_str(json).expect("parse schedule");
    view.validate().expect("valid schedule");
    assert_eq!(view.tasks.len(), 1);
    assert_eq!(view.tasks[0].processor, 0);

    let back = serde_json::to_string(&view).expect("serialize");
    let again: ScheduleView = serde_json::from_str(&back).expect("reparse");
    assert_eq!(view, again);
}

#[test]
fn from_throughput_inverts_to_period() {
    let view = ScheduleView::from_throughput(0.25, vec![task(0.0, 1.0)]);
    assert_relative_eq!(view.period, 4.0, max_relative = 1e-12);
}

#[test]
fn validate_rejects_nonpositive_period() {
    assert!(ScheduleView::new(0.0, vec![]).validate().is_err());
    assert!(ScheduleView::new(-3.0, vec![]).validate().is_err());
    assert!(ScheduleView::new(f64::NAN, vec![]).validate().is_err());
}

#[test]
fn validate_rejects_nonpositive_execution_time() {
    assert!(ScheduleView::new(10.0, vec![task(0.0, 0.0)]).validate().is_err());
    assert!(ScheduleView::new(10.0, vec![task(0.0, -1.0)]).validate().is_err());
}

#[test]
fn validate_rejects_nonfinite_start_time() {
    assert!(
        ScheduleView::new(10.0, vec![task(f64::INFINITY, 1.0)])
            .validate()
            .is_err()
    );
}

#[test]
fn color_parses_css_hex() {
    let color = Color::from_hex("#ff8000").expect("parse hex");
    assert_relative_eq!(color.red, 1.0, max_relative = 1e-12);
    assert_relative_eq!(color.green, 128.0 / 255.0, max_relative = 1e-12);
    assert_relative_eq!(color.blue, 0.0, max_relative = 1e-12);
    assert_eq!(color.alpha, 1.0);

    let translucent = Color::from_hex("00ff0080").expect("parse hex with alpha");
    assert_relative_eq!(translucent.alpha, 128.0 / 255.0, max_relative = 1e-12);

    assert!(Color::from_hex("#abc").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
}
