mod common;

use common::{CountingNative, FakePage, Op};
use demo_shell::config::PageConfig;
use demo_shell::controller::{Controller, DemoButton, Slider};
use demo_shell::error::PageError;
use demo_shell::label::LabelFormat;

fn button(demo: &str, w: &str, h: &str) -> DemoButton {
    DemoButton {
        demo: Some(demo.into()),
        width: Some(w.into()),
        height: Some(h.into()),
    }
}

fn default_sliders() -> Vec<Slider> {
    PageConfig::default()
        .sliders
        .iter()
        .map(|s| Slider {
            initial: s.initial,
            format: s.format,
        })
        .collect()
}

fn page() -> Controller<FakePage, CountingNative> {
    let buttons = vec![
        button("particles", "800px", "600px"),
        button("cloth", "640px", "40em"),
    ];
    let panels = vec![
        Some("particles".to_string()),
        Some("cloth".to_string()),
        Some("particles".to_string()),
        None,
    ];
    let mut ctl = Controller::new(
        FakePage::new(panels.len(), 4),
        CountingNative::default(),
        buttons,
        panels,
        default_sliders(),
    );
    ctl.init();
    ctl
}

#[test]
fn init_hides_modal_and_writes_initial_labels() {
    let ctl = page();
    let p = ctl.surface();
    assert_eq!(p.modal, Some(false));
    assert_eq!(p.values, vec![Some(14), Some(2), Some(2), Some(6)]);
    let labels: Vec<_> = p.labels.iter().map(|l| l.as_deref().unwrap()).collect();
    assert_eq!(labels, ["16384", "2", "2", "64"]);
    assert_eq!(ctl.state().current_demo, 0);
    // panels are left to the markup until a demo opens
    assert!(p.panels.iter().all(Option::is_none));
}

#[test]
fn init_labels_follow_clamped_slider_value() {
    let mut ctl = Controller::new(
        FakePage {
            slider_max: Some(10),
            ..FakePage::new(0, 2)
        },
        CountingNative::default(),
        vec![],
        vec![],
        vec![
            Slider {
                initial: 14,
                format: LabelFormat::PowerOfTwo,
            },
            Slider {
                initial: 2,
                format: LabelFormat::Raw,
            },
        ],
    );
    ctl.init();
    let p = ctl.surface();
    assert_eq!(p.values, vec![Some(10), Some(2)]);
    assert_eq!(p.labels[0].as_deref(), Some("1024"));
    assert_eq!(p.labels[1].as_deref(), Some("2"));
}

#[test]
fn open_sizes_canvas_and_shows_modal() {
    let mut ctl = page();
    ctl.open_demo(1).unwrap();
    let p = ctl.surface();
    assert_eq!(p.modal, Some(true));
    assert_eq!(p.width.as_deref(), Some("640px"));
    assert_eq!(p.height.as_deref(), Some("40em"));
    assert_eq!(ctl.state().current_demo, 2);
    assert!(ctl.state().modal_visible);
}

#[test]
fn open_shows_only_matching_panels() {
    let mut ctl = page();
    ctl.open_demo(0).unwrap();
    assert_eq!(
        ctl.surface().panels,
        vec![Some(true), Some(false), Some(true), Some(false)]
    );

    ctl.open_demo(1).unwrap();
    assert_eq!(
        ctl.surface().panels,
        vec![Some(false), Some(true), Some(false), Some(false)]
    );

    ctl.open_demo(0).unwrap();
    assert_eq!(
        ctl.surface().panels,
        vec![Some(true), Some(false), Some(true), Some(false)]
    );
}

#[test]
fn later_opens_touch_only_the_affected_groups() {
    let mut ctl = page();
    ctl.open_demo(0).unwrap();
    let before = ctl.surface().ops.len();
    ctl.open_demo(1).unwrap();
    let panel_ops: Vec<_> = ctl.surface().ops[before..]
        .iter()
        .filter(|op| matches!(op, Op::Panel(..)))
        .cloned()
        .collect();
    assert_eq!(
        panel_ops,
        vec![Op::Panel(0, false), Op::Panel(2, false), Op::Panel(1, true)]
    );
}

#[test]
fn button_without_demo_matches_panels_without_demo() {
    let mut ctl = Controller::new(
        FakePage::new(2, 0),
        CountingNative::default(),
        vec![DemoButton::default()],
        vec![Some("cloth".into()), None],
        vec![],
    );
    ctl.open_demo(0).unwrap();
    let p = ctl.surface();
    assert_eq!(p.panels, vec![Some(false), Some(true)]);
    // no size attributes leaves the canvas alone
    assert_eq!(p.width, None);
    assert_eq!(p.height, None);
}

#[test]
fn demo_keys_compare_exactly() {
    let mut ctl = Controller::new(
        FakePage::new(2, 0),
        CountingNative::default(),
        vec![button("Cloth", "1", "1")],
        vec![Some("cloth".into()), Some("Cloth ".into())],
        vec![],
    );
    ctl.open_demo(0).unwrap();
    assert_eq!(ctl.surface().panels, vec![Some(false), Some(false)]);
}

#[test]
fn close_resets_state_and_keeps_panels() {
    let mut ctl = page();
    ctl.open_demo(1).unwrap();
    let panels = ctl.surface().panels.clone();
    ctl.close();
    assert_eq!(ctl.surface().modal, Some(false));
    assert_eq!(ctl.state().current_demo, 0);
    assert!(!ctl.state().modal_visible);
    assert_eq!(ctl.surface().panels, panels);

    // closing twice is harmless
    ctl.close();
    assert_eq!(ctl.surface().modal, Some(false));
    assert_eq!(ctl.state().current_demo, 0);
}

#[test]
fn unknown_button_is_an_error() {
    let mut ctl = page();
    assert_eq!(ctl.open_demo(7), Err(PageError::UnknownButton(7)));
    assert_eq!(ctl.state().current_demo, 0);
}

#[test]
fn slider_input_renders_labels() {
    let mut ctl = page();
    ctl.slider_input(0, "10").unwrap();
    ctl.slider_input(1, "5").unwrap();
    ctl.slider_input(3, "3").unwrap();
    let labels = &ctl.surface().labels;
    assert_eq!(labels[0].as_deref(), Some("1024"));
    assert_eq!(labels[1].as_deref(), Some("5"));
    assert_eq!(labels[3].as_deref(), Some("8"));
    assert_eq!(ctl.slider_input(4, "1"), Err(PageError::UnknownSlider(4)));
}

#[test]
fn restart_calls_native_once() {
    let ctl = page();
    ctl.restart().unwrap();
    assert_eq!(ctl.native().calls.get(), 1);
}

#[test]
fn restart_without_export_is_an_error() {
    let ctl = Controller::new(
        FakePage::new(0, 0),
        CountingNative {
            missing: true,
            ..CountingNative::default()
        },
        vec![],
        vec![],
        vec![],
    );
    assert_eq!(
        ctl.restart(),
        Err(PageError::MissingExport("_restart_demo".into()))
    );
}
