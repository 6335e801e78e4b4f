use gantt_rs::core::{BandScale, Color, PixelRange, TaskInstance, TimeScale, ViewWindow};

fn task(start: f64, exec: f64, processor: u32, label: &str) -> TaskInstance {
    TaskInstance {
        start_time: start,
        execution_time: exec,
        processor,
        label: label.to_owned(),
        color: Color::rgb(0.3, 0.5, 0.7),
    }
}

#[test]
fn time_scale_maps_window_edges_to_range_edges() {
    let window = ViewWindow {
        offset: 3.0,
        width: 10.0,
    };
    let range = PixelRange::new(40.0, 460.0).expect("valid range");
    let scale = TimeScale::new(window, range).expect("valid scale");

    let left = scale.time_to_pixel(3.0).expect("left edge");
    let right = scale.time_to_pixel(13.0).expect("right edge");
    assert_eq!(left, 40.0);
    assert_eq!(right, 460.0);
}

#[test]
fn time_scale_round_trip_within_tolerance() {
    let scale = TimeScale::new(
        ViewWindow::initial(7.5),
        PixelRange::new(40.0, 460.0).expect("valid range"),
    )
    .expect("valid scale");

    let original = 4.2;
    let px = scale.time_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_time(px).expect("from pixel");
    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn panned_window_shifts_domain_but_not_range() {
    let range = PixelRange::new(40.0, 460.0).expect("valid range");
    let mut scale = TimeScale::new(ViewWindow::initial(10.0), range).expect("valid scale");

    scale
        .set_window(ViewWindow {
            offset: -2.5,
            width: 10.0,
        })
        .expect("set window");

    assert_eq!(scale.pixel_range(), range);
    assert_eq!(scale.time_to_pixel(-2.5).expect("new left edge"), 40.0);
}

#[test]
fn degenerate_pixel_range_is_rejected() {
    assert!(PixelRange::new(100.0, 100.0).is_err());
    assert!(PixelRange::new(200.0, 100.0).is_err());
    assert!(PixelRange::new(f64::NAN, 100.0).is_err());
}

#[test]
fn zero_width_window_is_rejected() {
    let range = PixelRange::new(0.0, 100.0).expect("valid range");
    let window = ViewWindow {
        offset: 0.0,
        width: 0.0,
    };
    assert!(TimeScale::new(window, range).is_err());
}

#[test]
fn band_domain_uses_first_appearance_order() {
    let tasks = vec![
        task(0.0, 1.0, 2, "a"),
        task(1.0, 1.0, 0, "b"),
        task(2.0, 1.0, 2, "c"),
        task(3.0, 1.0, 1, "d"),
    ];
    let scale = BandScale::from_tasks(&tasks, PixelRange::new(20.0, 120.0).expect("valid range"));

    let domain: Vec<u32> = scale.domain().collect();
    assert_eq!(domain, vec![2, 0, 1]);
}

#[test]
fn bands_are_evenly_spaced_with_fixed_bandwidth() {
    let tasks = vec![
        task(0.0, 1.0, 0, "a"),
        task(1.0, 1.0, 1, "b"),
        task(2.0, 1.0, 2, "c"),
        task(3.0, 1.0, 3, "d"),
    ];
    let scale = BandScale::from_tasks(&tasks, PixelRange::new(20.0, 120.0).expect("valid range"));

    assert_eq!(scale.bandwidth(), 25.0);
    assert_eq!(scale.position(0), Some(20.0));
    assert_eq!(scale.position(2), Some(70.0));
    assert_eq!(scale.position(7), None);
}

#[test]
fn band_positions_are_stable_for_unchanged_id_set() {
    let tasks = vec![
        task(0.0, 1.0, 1, "a"),
        task(1.0, 1.0, 0, "b"),
        task(2.0, 1.0, 1, "c"),
    ];
    let range = PixelRange::new(20.0, 120.0).expect("valid range");
    let mut scale = BandScale::from_tasks(&tasks, range);
    let before: Vec<Option<f64>> = vec![scale.position(1), scale.position(0)];

    // Same id set in a different task arrangement must not reshuffle bands.
    let rearranged = vec![
        task(5.0, 1.0, 1, "c"),
        task(6.0, 1.0, 0, "b"),
        task(7.0, 1.0, 1, "a"),
    ];
    scale.set_domain_from_tasks(&rearranged);
    let after: Vec<Option<f64>> = vec![scale.position(1), scale.position(0)];

    assert_eq!(before, after);
}

#[test]
fn empty_task_list_yields_empty_band_domain() {
    let scale = BandScale::from_tasks(&[], PixelRange::new(20.0, 120.0).expect("valid range"));
    assert!(scale.is_empty());
    assert_eq!(scale.bandwidth(), 0.0);
    assert_eq!(scale.position(0), None);
}
