use mdi_codegen::{generate, parse_icon_catalog, DuplicatePolicy, GeneratedHeader, IconRecord};

const ABACUS_ABJAD: &str = r#"[{"name":"abacus","codepoint":"f0001"},{"name":"abjad","codepoint":"f0002"}]"#;

#[test]
fn renders_full_header_for_supplementary_icons() {
    let icons = parse_icon_catalog(ABACUS_ABJAD).unwrap();
    let text = generate(&icons, DuplicatePolicy::Allow).unwrap();
    let expected = concat!(
        "// Generated from https://github.com/Templarian/MaterialDesign/blob/master/meta.json\n",
        "// for use with the font from https://materialdesignicons.com/\n",
        "#pragma once\n",
        "\n",
        "#define FONT_ICON_FILE_NAME_MC \"materialdesignicons-webfont.ttf\"\n",
        "\n",
        "#define ICON_MIN_MC 0xf0001\n",
        "#define ICON_MAX_16_MC 0x0000\n",
        "#define ICON_MAX_MC 0xf0002\n",
        "#define ICON_MC_ABACUS \"\\xf3\\xb0\\x80\\x81\" // U+f0001\n",
        "#define ICON_MC_ABJAD \"\\xf3\\xb0\\x80\\x82\" // U+f0002\n",
    );
    assert_eq!(text, expected);
}

#[test]
fn output_is_deterministic() {
    let icons = parse_icon_catalog(ABACUS_ABJAD).unwrap();
    let first = generate(&icons, DuplicatePolicy::Allow).unwrap();
    let second = generate(&icons, DuplicatePolicy::Allow).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn bounds_cover_every_icon() {
    let icons: Vec<IconRecord> = [
        ("account", "F0004"),
        ("account-outline", "F0013"),
        ("legacy-glyph", "e5e0"),
        ("another-legacy", "E000"),
        ("zodiac", "F0A86"),
    ]
    .into_iter()
    .map(|(name, cp)| IconRecord::new(name, cp))
    .collect();
    let header = GeneratedHeader::build(&icons, DuplicatePolicy::Allow).unwrap();
    let codes: Vec<u32> = header.definitions.iter().map(|d| d.codepoint.value()).collect();
    assert!(codes.iter().all(|&c| header.bounds.min <= c && c <= header.bounds.max));
    assert!(codes.contains(&header.bounds.min));
    assert!(codes.contains(&header.bounds.max));
    assert_eq!(header.bounds.min, 0xE000);
    assert_eq!(header.bounds.max, 0xF0A86);
    assert_eq!(header.bounds.max_16, 0xE5E0);

    let text = header.render();
    assert!(text.contains("#define ICON_MIN_MC 0xe000\n"));
    assert!(text.contains("#define ICON_MAX_16_MC 0xe5e0\n"));
    assert!(text.contains("#define ICON_MC_ACCOUNT_OUTLINE \"\\xf3\\xb0\\x80\\x93\" // U+F0013\n"));
}

#[test]
fn definitions_keep_input_order() {
    let icons = parse_icon_catalog(
        r#"[{"name":"zebra","codepoint":"f0003"},{"name":"apple","codepoint":"f0001"}]"#,
    )
    .unwrap();
    let text = generate(&icons, DuplicatePolicy::Allow).unwrap();
    let zebra = text.find("ICON_MC_ZEBRA").unwrap();
    let apple = text.find("ICON_MC_APPLE").unwrap();
    let bounds = text.find("ICON_MAX_MC").unwrap();
    assert!(bounds < zebra && zebra < apple);
}

#[test]
fn duplicate_identifiers_emit_both_definitions() {
    let icons = parse_icon_catalog(
        r#"[{"name":"foo-bar","codepoint":"f0001"},{"name":"foo_bar","codepoint":"f0002"}]"#,
    )
    .unwrap();
    let text = generate(&icons, DuplicatePolicy::Allow).unwrap();
    assert_eq!(text.matches("#define ICON_MC_FOO_BAR ").count(), 2);
    assert!(text.contains("// U+f0001\n"));
    assert!(text.contains("// U+f0002\n"));

    let err = generate(&icons, DuplicatePolicy::Reject).unwrap_err();
    assert!(err.to_string().contains("\"foo-bar\" and \"foo_bar\""));
}

#[test]
fn invalid_codepoint_aborts_generation() {
    let icons = parse_icon_catalog(r#"[{"name":"bad","codepoint":"0xf0001"}]"#).unwrap();
    assert!(generate(&icons, DuplicatePolicy::Allow).is_err());
}
