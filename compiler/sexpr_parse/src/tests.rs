use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn parser(src: &str) -> Parser<&[u8]> {
    Parser::from_reader("test", src.as_bytes(), SourceOptions::default()).unwrap()
}

fn parse_all(src: &str) -> Result<Vec<SExpr>, Unexpected> {
    let mut parser = parser(src);
    let mut out = Vec::new();
    loop {
        match parser.next()? {
            SExpr::Void => return Ok(out),
            form => out.push(form),
        }
    }
}

#[test]
fn parses_a_call_form() {
    assert_eq!(
        parse_all("(print \"hi\" 42 bar)").unwrap(),
        vec![SExpr::list([
            SExpr::token("print"),
            SExpr::string("hi"),
            SExpr::Int(42),
            SExpr::token("bar"),
        ])]
    );
}

#[test]
fn one_form_per_call() {
    let mut parser = parser("a (b (c)) \"d\"\n()");
    assert_eq!(parser.next().unwrap(), SExpr::token("a"));
    assert_eq!(
        parser.next().unwrap(),
        SExpr::list([
            SExpr::token("b"),
            SExpr::list([SExpr::token("c")]),
        ])
    );
    assert_eq!(parser.next().unwrap(), SExpr::string("d"));
    assert_eq!(parser.next().unwrap(), SExpr::list([]));
    assert_eq!(parser.next().unwrap(), SExpr::Void);
    assert_eq!(parser.next().unwrap(), SExpr::Void);
}

#[test]
fn escaped_digits_are_integers() {
    assert_eq!(parse_all("\\x34\\x32").unwrap(), vec![SExpr::Int(42)]);
    assert_eq!(parse_all("\\x30").unwrap(), vec![SExpr::Int(0)]);
}

#[test]
fn quoted_digits_stay_strings() {
    assert_eq!(parse_all("\"42\"").unwrap(), vec![SExpr::string("42")]);
}

#[test]
fn integer_bases() {
    assert_eq!(
        parse_all("0x10 010 -3 08").unwrap(),
        vec![
            SExpr::Int(16),
            SExpr::Int(8),
            SExpr::Int(-3),
            SExpr::token("08"),
        ]
    );
}

#[test]
fn out_of_range_int_points_at_token() {
    let err = parse_all("(a 99999999999999999999)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::IntOutOfRange);
    assert_eq!(
        err.to_string(),
        "At test:1:4\nUnexpected out of range int\n(a 99999999999999999999)\n   ^"
    );
}

#[test]
fn unterminated_list_points_at_open_paren() {
    let err = parse_all("(foo").unwrap_err();
    assert_eq!(
        err.to_string(),
        "At test:1:1\nUnexpected unmatched '('\n(foo\n^"
    );
}

#[test]
fn recovers_after_an_error() {
    let mut parser = parser(") (b)\n(c");
    assert_eq!(parser.next().unwrap_err().kind, ErrorKind::UnmatchedClose);
    assert_eq!(parser.next().unwrap(), SExpr::list([SExpr::token("b")]));
    assert_eq!(parser.next().unwrap_err().kind, ErrorKind::UnmatchedOpen);
    assert_eq!(parser.next().unwrap(), SExpr::Void);
}

#[test]
fn deeply_nested_lists() {
    let depth = 20_000;
    let src = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    let form = parser(&src).next().unwrap();
    let mut seen = 0;
    let mut cursor = Some(&form);
    while let Some(SExpr::List(items)) = cursor {
        seen += 1;
        cursor = items.front();
    }
    assert_eq!(seen, depth);
}

#[test]
fn shebang_is_skipped() {
    let mut parser = parser("#!/usr/bin/sexpr run\n(x)\n");
    assert_eq!(parser.shebang(), Some(&Text::from("#!/usr/bin/sexpr run")));
    assert_eq!(parser.next().unwrap(), SExpr::list([SExpr::token("x")]));
}

fn tree() -> impl Strategy<Value = SExpr> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(SExpr::Int),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(|bytes| SExpr::String(Text::from(bytes))),
        prop::collection::vec(any::<u8>(), 1..8).prop_map(|bytes| SExpr::Token(Text::from(bytes))),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(|items| SExpr::list(items))
    })
}

/// Tokens that read as integers come back as `Int`.
fn normalize(expr: &SExpr) -> Option<SExpr> {
    Some(match expr {
        SExpr::Token(text) => match parse_int_token(text) {
            IntToken::Int(value) => SExpr::Int(value),
            IntToken::NotInt => expr.clone(),
            IntToken::OutOfRange => return None,
        },
        SExpr::List(items) => SExpr::List(items.iter().map(normalize).collect::<Option<List>>()?),
        other => other.clone(),
    })
}

proptest! {
    #[test]
    fn printed_form_parses_back(expr in tree()) {
        let Some(expected) = normalize(&expr) else {
            return Ok(());
        };
        let printed = expr.to_string();
        let mut parser = Parser::from_reader(
            "roundtrip",
            printed.as_bytes(),
            SourceOptions { skip_shebang: false },
        )
        .unwrap();
        prop_assert_eq!(parser.next().unwrap(), expected);
        prop_assert_eq!(parser.next().unwrap(), SExpr::Void);
    }
}
