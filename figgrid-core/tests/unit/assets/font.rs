use super::*;

const BLACK: TextBrushRgba8 = TextBrushRgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

fn system_font() -> Option<LoadedFont> {
    match load_font(&FontSource::Default) {
        Ok(f) => Some(f),
        Err(e) => {
            eprintln!("skipping: {e}");
            None
        }
    }
}

#[test]
fn missing_font_file_is_resource_not_found() {
    let err = load_font(&FontSource::Path(PathBuf::from(
        "/definitely/not/here/Font.ttf",
    )))
    .unwrap_err();
    assert!(matches!(err, FigError::ResourceNotFound(_)));
}

#[test]
fn non_font_file_is_decode_error() {
    let dir = std::env::temp_dir().join("figgrid_unit_font");
    std::fs::create_dir_all(&dir).unwrap();
    let p = dir.join("not_a_font.ttf");
    std::fs::write(&p, b"plain text, not a font").unwrap();
    let err = load_font(&FontSource::Path(p)).unwrap_err();
    assert!(matches!(err, FigError::Decode(_)));
}

#[test]
fn font_source_from_option() {
    assert_eq!(FontSource::from(None), FontSource::Default);
    assert_eq!(
        FontSource::from(Some(PathBuf::from("a.ttf"))),
        FontSource::Path(PathBuf::from("a.ttf"))
    );
}

#[test]
fn layout_rejects_bad_font_size() {
    let Some(font) = system_font() else { return };
    let mut engine = TextLayoutEngine::new();
    assert!(engine.layout_line("x", &font, 0.0, BLACK).is_err());
    assert!(engine.layout_line("x", &font, f32::NAN, BLACK).is_err());
}

#[test]
fn longer_text_measures_wider() {
    let Some(font) = system_font() else { return };
    let mut engine = TextLayoutEngine::new();
    let short = engine.layout_line("ab", &font, 24.0, BLACK).unwrap();
    let long = engine.layout_line("abcdefgh", &font, 24.0, BLACK).unwrap();
    let (ws, hs) = measure_layout(&short);
    let (wl, hl) = measure_layout(&long);
    assert!(wl > ws);
    assert!(hs > 0.0);
    assert!((hs - hl).abs() < 0.5);
}

#[test]
fn layout_uses_the_loaded_face_index() {
    let Some(font) = system_font() else { return };
    let mut engine = TextLayoutEngine::new();
    assert!(engine.layout_line("x", &font, 24.0, BLACK).is_ok());

    let absent = LoadedFont {
        index: font.index + 64,
        ..font
    };
    let err = engine.layout_line("x", &absent, 24.0, BLACK).err().expect("layout with absent face index must fail");
    assert!(matches!(err, FigError::Decode(_)), "{err}");
    assert!(err.to_string().contains("no face with index"));
}
