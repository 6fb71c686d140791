use cupchart::data::detail::DetailCard;
use cupchart::{load_records, Action, ChartApp, ChartConfig, Coercion, Metric};

fn app() -> ChartApp {
    let cfg = ChartConfig::default();
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(&cfg.data_path);
    let records = load_records(path, Coercion::Lenient).unwrap();
    ChartApp::new(records, cfg)
}

#[test]
fn starts_with_default_metric_and_full_dataset() {
    let mut app = app();
    assert_eq!(app.state().metric(), Metric::Goals);
    assert!(!app.state().is_ready());
    assert!(app.detail_open());
    app.apply_actions(vec![Action::SliderReady], 0.0);
    assert!(app.state().is_ready());
    assert_eq!(app.state().derived().len(), 21);
}

#[test]
fn queued_actions_apply_in_order() {
    let mut app = app();
    app.apply_actions(
        vec![
            Action::SliderReady,
            Action::SetYearRange { from: 1990, to: 2018 },
            Action::SetMetric(Metric::Teams),
            Action::SelectRecord(1998),
        ],
        0.0,
    );
    let years: Vec<i32> = app.state().derived().iter().map(|r| r.year).collect();
    assert_eq!(years, vec![1994, 1998, 2002, 2006, 2010, 2014]);
    assert_eq!(app.state().metric(), Metric::Teams);

    let selected = app.state().selected_record().unwrap();
    let card = DetailCard::from_record(selected);
    assert_eq!(card.heading, "1998 FIFA World Cup France");
    assert_eq!(card.value("Location"), Some("France"));
    assert_eq!(card.value("Winner"), Some("France"));
    assert_eq!(card.value("Year"), Some("1998"));
    assert_eq!(card.value("Matches"), Some("64"));
    assert_eq!(card.value("Teams"), Some("32"));
    assert_eq!(card.value("Average Attendance"), Some("43517"));
    assert_eq!(card.value("Goals"), Some("171"));
    assert_eq!(card.value("Average Goals"), Some("2.7"));
}

#[test]
fn frame_is_rendered_once_ready_and_follows_the_metric() {
    let mut app = app();
    app.apply_actions(vec![Action::SetMetric(Metric::Goals)], 0.0);
    assert!(app.frame().is_none());

    app.apply_actions(vec![Action::SliderReady], 0.0);
    let frame = app.frame().expect("rendered after SliderReady");
    assert_eq!(frame.markers.len(), 21);
    assert_eq!(frame.scales.y_domain, Some((0.0, 171.0)));

    app.apply_actions(vec![Action::SetMetric(Metric::AverageAttendance)], 0.1);
    let frame = app.frame().unwrap();
    assert_eq!(frame.metric, Metric::AverageAttendance);
    assert_eq!(frame.scales.y_domain, Some((0.0, 68991.0)));

    app.apply_actions(vec![Action::SetYearRange { from: 1950, to: 1990 }], 0.2);
    assert_eq!(app.frame().unwrap().markers.len(), 9);
}

#[test]
fn hover_and_selection_do_not_rerender() {
    let mut app = app();
    app.apply_actions(vec![Action::SliderReady], 0.0);
    let before = app.frame().cloned();
    app.apply_actions(vec![Action::Hover(Some(1954)), Action::SelectRecord(1954)], 0.1);
    assert_eq!(app.frame().cloned(), before);
    assert_eq!(app.state().hovered_record().map(|r| r.year), Some(1954));
}
