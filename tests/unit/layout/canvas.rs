use super::*;

#[test]
fn default_canvas_is_valid_widescreen() {
    let c = CanvasConfig::default();
    c.validate().unwrap();
    assert_eq!(c.height, 7.5);
    assert_eq!(c.content_height, 6.3);
    assert_eq!(c.partition, PartitionMode::Static);
}

#[test]
fn content_taller_than_canvas_is_rejected() {
    let c = CanvasConfig {
        content_height: 8.0,
        ..CanvasConfig::default()
    };
    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("content_height"));
}

#[test]
fn negative_margin_is_rejected() {
    let c = CanvasConfig {
        margin: -0.1,
        ..CanvasConfig::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn content_box_must_fit_horizontally() {
    let c = CanvasConfig {
        picture_left: 1.0,
        ..CanvasConfig::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn partial_json_fills_defaults() {
    let c: CanvasConfig =
        serde_json::from_str(r#"{ "content_height": 5.0, "partition": "remaining" }"#).unwrap();
    assert_eq!(c.content_height, 5.0);
    assert_eq!(c.height, 7.5);
    assert_eq!(c.partition, PartitionMode::Remaining);
}

#[test]
fn box_geometry_rejects_zero_height() {
    let b = BoxGeometry::new(0.0, 0.0, 1.0, 0.0);
    assert!(b.validate("title").is_err());
    BoxGeometry::new(0.2, 0.5, 12.0, 0.52)
        .validate("title")
        .unwrap();
}

#[test]
fn content_box_flush_with_right_edge_is_accepted() {
    let c = CanvasConfig {
        picture_left: 0.33,
        content_width: 13.0,
        ..CanvasConfig::default()
    };
    c.validate().unwrap();
}
