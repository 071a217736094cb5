use engine_version::{
    EngineVersion, Field, FormatFlags, GrammarKind, ParseError, ReleaseType, parse,
    parse_with_trailing, try_parse,
};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init()
        .ok();
}

fn overflow_field(input: &str) -> Option<Field> {
    match parse(input) {
        Err(ParseError::Overflow { field, .. }) => Some(field),
        _ => None,
    }
}

#[test]
fn parse_real_world_versions() {
    init_tracing();

    let cases = [
        ("5.6.7f1", 5, 6, 7, ReleaseType::Final, 1),
        ("2017.4.40f1", 2017, 4, 40, ReleaseType::Final, 1),
        ("2018.3.0b12", 2018, 3, 0, ReleaseType::Beta, 12),
        ("2019.1.0a14", 2019, 1, 0, ReleaseType::Alpha, 14),
        ("2019.4.3f1c5", 2019, 4, 3, ReleaseType::China, 5),
        ("2020.3.48f1c1", 2020, 3, 48, ReleaseType::China, 1),
        ("2021.3.0.p3", 2021, 3, 0, ReleaseType::Patch, 3),
        ("2022.2.0x1", 2022, 2, 0, ReleaseType::Experimental, 1),
        ("6000.0.23", 6000, 0, 23, ReleaseType::Final, 1),
        ("3.4", 3, 4, 0, ReleaseType::Final, 1),
    ];

    for (input, major, minor, build, release, n) in cases {
        let expected = EngineVersion::new(major, minor, build, release, n);
        assert_eq!(parse(input).unwrap(), expected, "parsing {input}");
    }
}

#[test]
fn regional_suffix_is_not_trailing_text() {
    init_tracing();

    let parsed = try_parse("2019.4.3f1c5").unwrap();
    assert_eq!(parsed.grammar, GrammarKind::Regional);
    assert_eq!(parsed.version.release(), ReleaseType::China);
    assert_eq!(parsed.version.type_number(), 5);
    assert_eq!(parsed.trailing, None);
}

#[test]
fn regional_with_trailing_text() {
    let (version, trailing) = parse_with_trailing("2019.4.3.f1c5-tuanjie").unwrap();
    assert_eq!(
        version,
        EngineVersion::new(2019, 4, 3, ReleaseType::China, 5)
    );
    assert_eq!(trailing.as_deref(), Some("-tuanjie"));
    assert_eq!(
        version.to_string_with_trailing(FormatFlags::DEFAULT, "-tuanjie"),
        "2019.4.3f1c5-tuanjie"
    );
}

#[test]
fn failures() {
    init_tracing();

    assert_eq!(parse(""), Err(ParseError::Empty));
    assert_eq!(
        parse("not.a.version"),
        Err(ParseError::InvalidFormat {
            input: "not.a.version".to_string(),
        })
    );
    assert_eq!(overflow_field("123456.1.1f1"), Some(Field::Major));
    assert_eq!(overflow_field("1.123456"), Some(Field::Minor));
}
